// Protected elements (value tiles, CTAs, retailer tags) must not be obstructed
use super::{ComplianceRule, RuleContext};
use crate::patterns::{PROTECTED_ID_MARKERS, SAFE_ZONE_ID_MARKER};
use shared_types::{CanvasObject, RuleName, RuleVerdict};

fn is_protected(obj: &CanvasObject) -> bool {
    PROTECTED_ID_MARKERS
        .iter()
        .any(|marker| obj.id_contains(marker))
}

fn is_regular(obj: &CanvasObject) -> bool {
    !is_protected(obj) && !obj.id_contains(SAFE_ZONE_ID_MARKER)
}

pub struct LayerOverlapRule;

impl ComplianceRule for LayerOverlapRule {
    fn name(&self) -> RuleName {
        RuleName::LayerOverlaps
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let protected: Vec<_> = ctx.objects().iter().filter(|o| is_protected(o)).collect();
        let regular: Vec<_> = ctx.objects().iter().filter(|o| is_regular(o)).collect();

        let mut violations = Vec::new();
        let mut affected = Vec::new();

        for special in &protected {
            let special_bounds = special.bounds();
            for other in &regular {
                if special_bounds.intersects(&other.bounds()) {
                    violations.push(format!("Object {} overlaps with {}", other.id, special.id));
                    affected.push(special.id.as_str());
                    affected.push(other.id.as_str());
                }
            }
        }

        if violations.is_empty() {
            RuleVerdict::pass(self.name(), "No overlaps with critical elements detected.")
        } else {
            RuleVerdict::fail(
                self.name(),
                "Objects overlapping with value tiles, CTA, or Tesco tags detected.",
            )
            .with_details(violations.join("; "))
            .with_affected(affected)
        }
    }
}
