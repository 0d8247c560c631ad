//! Drinkaware lock-up rule
//!
//! Alcohol creatives must carry the Drinkaware logo, at least 20px on its
//! shorter side, in pure black or white. The decision is an ordered sequence
//! of guards; the first one that matches determines the verdict.

use super::{ComplianceRule, RuleContext};
use crate::patterns::{ALCOHOL_IMAGE_PATTERN, DRINKAWARE_COLORS, DRINKAWARE_IMAGE_PATTERN};
use shared_types::{CanvasObject, ProductType, RuleName, RuleVerdict};

/// Minimum logo size on its shorter side, in px
pub const MIN_LOGO_SIZE: f64 = 20.0;

/// Outcome of the guard sequence
#[derive(Debug, Clone, PartialEq)]
pub enum LockupState<'a> {
    NotRequired,
    Missing,
    TooSmall { logo: &'a CanvasObject, size: f64 },
    WrongColor { logo: &'a CanvasObject, fill: String },
    Compliant { logo: &'a CanvasObject },
}

pub fn is_alcohol_creative(ctx: &RuleContext<'_>) -> bool {
    ctx.product_type == Some(ProductType::Alcohol)
        || ctx.canvas.image_objects().any(|obj| {
            obj.image_name
                .as_deref()
                .is_some_and(|name| ALCOHOL_IMAGE_PATTERN.is_match(name))
        })
}

fn is_drinkaware_logo(obj: &CanvasObject) -> bool {
    obj.is_drinkaware
        || obj
            .image_name
            .as_deref()
            .is_some_and(|name| DRINKAWARE_IMAGE_PATTERN.is_match(name))
}

pub fn classify<'a>(ctx: &RuleContext<'a>) -> LockupState<'a> {
    if !is_alcohol_creative(ctx) {
        return LockupState::NotRequired;
    }

    let Some(logo) = ctx.objects().iter().find(|obj| is_drinkaware_logo(obj)) else {
        return LockupState::Missing;
    };

    let size = logo.width.min(logo.height);
    if size < MIN_LOGO_SIZE {
        return LockupState::TooSmall { logo, size };
    }

    if let Some(fill) = logo.fill.as_deref().map(str::to_lowercase) {
        if !DRINKAWARE_COLORS.contains(&fill.as_str()) {
            return LockupState::WrongColor { logo, fill };
        }
    }

    LockupState::Compliant { logo }
}

pub struct DrinkawareRule;

impl ComplianceRule for DrinkawareRule {
    fn name(&self) -> RuleName {
        RuleName::DrinkawareLockup
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let name = self.name();
        match classify(ctx) {
            LockupState::NotRequired => {
                RuleVerdict::pass(name, "Not an alcohol product, Drinkaware not required.")
            }
            LockupState::Missing => RuleVerdict::fail(
                name,
                "Alcohol product detected but Drinkaware logo is missing.",
            )
            .with_details("Drinkaware logo is required for all alcohol products."),
            LockupState::TooSmall { logo, size } => {
                RuleVerdict::fail(name, "Drinkaware logo is too small.")
                    .with_details(format!(
                        "Current size: {}px. Minimum required: {}px.",
                        size, MIN_LOGO_SIZE
                    ))
                    .with_affected([logo.id.as_str()])
            }
            LockupState::WrongColor { logo, fill } => {
                RuleVerdict::fail(name, "Drinkaware logo must be pure black or white.")
                    .with_details(format!("Current color: {}", fill))
                    .with_affected([logo.id.as_str()])
            }
            LockupState::Compliant { .. } => {
                RuleVerdict::pass(name, "Drinkaware logo present and compliant.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{CanvasFormat, CanvasSnapshot, RuleStatus};

    fn logo(width: f64, height: f64) -> CanvasObject {
        let mut obj =
            CanvasObject::image("drinkaware-logo", "logo.png").at(10.0, 10.0, width, height);
        obj.is_drinkaware = true;
        obj
    }

    fn check(canvas: &CanvasSnapshot, product_type: Option<ProductType>) -> RuleVerdict {
        let ctx = RuleContext::new("", canvas).with_product_type(product_type);
        DrinkawareRule.check(&ctx)
    }

    #[test]
    fn test_not_required_for_non_alcohol() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square)
            .with_object(CanvasObject::image("hero", "strawberries.png"));
        let verdict = check(&canvas, Some(ProductType::NonAlcohol));
        assert_eq!(verdict.status, RuleStatus::Pass);
        assert!(verdict.message.contains("not required"));
    }

    #[test]
    fn test_missing_logo_for_alcohol_product() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square);
        let verdict = check(&canvas, Some(ProductType::Alcohol));
        assert_eq!(verdict.status, RuleStatus::Fail);
        assert!(verdict.message.contains("missing"));
    }

    #[test]
    fn test_alcohol_detected_from_image_name() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square)
            .with_object(CanvasObject::image("hero", "Red-WINE-bottle.png"));
        let verdict = check(&canvas, None);
        assert_eq!(verdict.status, RuleStatus::Fail);
        assert!(verdict.message.contains("missing"));
    }

    #[test]
    fn test_logo_recognized_by_image_name() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square).with_object(
            CanvasObject::image("logo", "DrinkAware-white.png").at(0.0, 0.0, 40.0, 40.0),
        );
        let verdict = check(&canvas, Some(ProductType::Alcohol));
        assert_eq!(verdict.status, RuleStatus::Pass);
    }

    #[test]
    fn test_small_logo_fails() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square).with_object(logo(100.0, 19.5));
        let verdict = check(&canvas, Some(ProductType::Alcohol));
        assert_eq!(verdict.status, RuleStatus::Fail);
        assert_eq!(verdict.message, "Drinkaware logo is too small.");
        assert_eq!(
            verdict.affected_objects,
            Some(vec!["drinkaware-logo".to_string()])
        );
    }

    #[test]
    fn test_colored_logo_fails() {
        let canvas = CanvasSnapshot::new(CanvasFormat::Square)
            .with_object(logo(40.0, 40.0).with_fill("#FF0000"));
        let verdict = check(&canvas, Some(ProductType::Alcohol));
        assert_eq!(verdict.status, RuleStatus::Fail);
        assert_eq!(verdict.details.as_deref(), Some("Current color: #ff0000"));
    }

    #[test]
    fn test_black_or_white_logo_passes() {
        for fill in ["#000000", "#FFFFFF", "Black", "white"] {
            let canvas = CanvasSnapshot::new(CanvasFormat::Square)
                .with_object(logo(40.0, 40.0).with_fill(fill));
            let verdict = check(&canvas, Some(ProductType::Alcohol));
            assert_eq!(verdict.status, RuleStatus::Pass, "fill {}", fill);
        }
    }

    #[test]
    fn test_guards_apply_in_order() {
        // Too small and wrong colour: size is reported first
        let canvas = CanvasSnapshot::new(CanvasFormat::Square)
            .with_object(logo(10.0, 10.0).with_fill("#00ff00"));
        let ctx = RuleContext::new("", &canvas).with_product_type(Some(ProductType::Alcohol));
        assert!(matches!(classify(&ctx), LockupState::TooSmall { size, .. } if size == 10.0));
    }
}
