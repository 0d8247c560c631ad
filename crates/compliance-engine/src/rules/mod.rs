//! Creative compliance rules
//!
//! Each rule is a stateless, total function from a [`RuleContext`] to exactly
//! one [`RuleVerdict`]. Rules never depend on each other's outcome, so the
//! engine can evaluate them in any order.

pub mod claims;
pub mod drinkaware;
pub mod overlaps;
pub mod safe_zone;
pub mod tesco_tag;
pub mod typography;

use shared_types::{CanvasObject, CanvasSnapshot, ProductType, RuleName, RuleVerdict};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// OCR text plus object text, case-folded
    pub text: &'a str,
    pub canvas: &'a CanvasSnapshot,
    pub product_type: Option<ProductType>,
    pub tesco_tag: Option<&'a str>,
}

impl<'a> RuleContext<'a> {
    pub fn new(text: &'a str, canvas: &'a CanvasSnapshot) -> Self {
        Self {
            text,
            canvas,
            product_type: None,
            tesco_tag: None,
        }
    }

    pub fn with_product_type(mut self, product_type: Option<ProductType>) -> Self {
        self.product_type = product_type;
        self
    }

    pub fn with_tesco_tag(mut self, tesco_tag: Option<&'a str>) -> Self {
        self.tesco_tag = tesco_tag;
        self
    }

    pub fn objects(&self) -> &'a [CanvasObject] {
        &self.canvas.objects
    }
}

/// Trait for creative compliance rules
pub trait ComplianceRule: Send + Sync {
    fn name(&self) -> RuleName;

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict;
}

/// The full rule set, in the order of [`RuleName::ALL`]
pub fn all_rules() -> Vec<Box<dyn ComplianceRule>> {
    vec![
        Box::new(claims::PriceClaimsRule),
        Box::new(claims::SUSTAINABILITY_RULE),
        Box::new(claims::COMPETITIONS_RULE),
        Box::new(claims::CHARITY_RULE),
        Box::new(drinkaware::DrinkawareRule),
        Box::new(safe_zone::SafeZoneRule),
        Box::new(typography::MinimumFontSizeRule),
        Box::new(typography::ContrastRule),
        Box::new(tesco_tag::TescoTagRule),
        Box::new(overlaps::LayerOverlapRule),
    ]
}

/// First `max` characters of a text layer, for human-readable details
pub(crate) fn text_preview(object: &CanvasObject, max: usize) -> String {
    let text = object.text.as_deref().unwrap_or_default();
    let preview: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        format!("{}...", preview)
    } else {
        preview
    }
}
