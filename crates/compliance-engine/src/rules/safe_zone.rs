// Safe zone placement for formats that reserve platform UI margins
use super::{ComplianceRule, RuleContext};
use crate::patterns::SAFE_ZONE_ID_MARKER;
use shared_types::{RuleName, RuleVerdict};

pub struct SafeZoneRule;

impl ComplianceRule for SafeZoneRule {
    fn name(&self) -> RuleName {
        RuleName::SafeZoneCompliance
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let Some(zone) = ctx.canvas.format.safe_zone() else {
            return RuleVerdict::pass(
                self.name(),
                "Safe zones only apply to 9:16 Story format.",
            );
        };

        let top_zone = f64::from(zone.top);
        let canvas_height = ctx.canvas.height;
        let bottom_zone_start = canvas_height - f64::from(zone.bottom);

        let mut violations = Vec::new();
        let mut affected = Vec::new();

        for obj in ctx.objects() {
            if obj.id_contains(SAFE_ZONE_ID_MARKER) {
                continue;
            }

            let bounds = obj.bounds();

            if bounds.top < top_zone {
                violations.push(format!(
                    "Object at y={}px violates top safe zone (0-{}px)",
                    bounds.top, top_zone
                ));
                affected.push(obj.id.as_str());
            }

            if bounds.bottom > bottom_zone_start {
                violations.push(format!(
                    "Object at y={}px violates bottom safe zone ({}-{}px)",
                    bounds.bottom, bottom_zone_start, canvas_height
                ));
                affected.push(obj.id.as_str());
            }
        }

        if violations.is_empty() {
            RuleVerdict::pass(self.name(), "All objects are outside safe zones.")
        } else {
            RuleVerdict::fail(self.name(), "Objects detected in safe zones.")
                .with_details(violations.join("; "))
                .with_affected(affected)
        }
    }
}
