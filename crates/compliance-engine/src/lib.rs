//! Creative compliance engine
//!
//! Scans a flattened canvas snapshot (plus an optional rendered screenshot)
//! against the retailer's self-serve banner policies and produces a
//! pass / warning / fail report.
//!
//! ## Pipeline
//!
//! 1. OCR the screenshot, if any ([`ocr`]); failures degrade to empty text
//! 2. Extract text from the text layers ([`extractors::text`])
//! 3. Run all ten rules ([`rules`]) over the combined text and geometry
//! 4. Partition verdicts into violations and warnings ([`ComplianceEngine`])

pub mod engine;
pub mod extractors;
pub mod ocr;
pub mod patterns;
pub mod rules;

pub use engine::{ComplianceEngine, EngineConfig};
pub use ocr::{DisabledRecognizer, HttpOcrClient, OcrError, TextRecognizer};
pub use rules::{all_rules, ComplianceRule, RuleContext};
pub use shared_types::{
    CanvasFormat, CanvasObject, CanvasSnapshot, ComplianceReport, ComplianceRequest, ProductType,
    RuleName, RuleStatus, RuleVerdict,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn story_canvas() -> CanvasSnapshot {
        CanvasSnapshot::new(CanvasFormat::Story)
    }

    fn rule_status(report: &ComplianceReport, rule: RuleName) -> RuleStatus {
        if report.violations.iter().any(|v| v.rule == rule) {
            RuleStatus::Fail
        } else if report.warnings.iter().any(|v| v.rule == rule) {
            RuleStatus::Warning
        } else {
            RuleStatus::Pass
        }
    }

    #[test]
    fn test_engine_detects_multiple_violations() {
        let engine = ComplianceEngine::new();
        let canvas = story_canvas()
            .with_object(
                CanvasObject::text("headline", "Win a prize! Half price", 12.0)
                    .at(100.0, 50.0, 400.0, 40.0)
                    .with_fill("#FFFFFF"),
            )
            .with_object(
                CanvasObject::image("cta-button", "button.png").at(100.0, 60.0, 200.0, 80.0),
            );

        let report = engine.check_snapshot(&canvas, "", None, None);

        assert_eq!(report.overall_status, RuleStatus::Fail);
        for rule in [
            RuleName::PriceClaims,
            RuleName::Competitions,
            RuleName::SafeZoneCompliance,
            RuleName::MinimumFontSize,
            RuleName::ContrastCheck,
            RuleName::LayerOverlaps,
        ] {
            assert_eq!(rule_status(&report, rule), RuleStatus::Fail, "{}", rule);
        }
    }

    #[test]
    fn test_safe_zone_depends_on_format_only() {
        let engine = ComplianceEngine::new();
        let headline = CanvasObject::text("headline", "Only at Tesco", 32.0)
            .at(100.0, 50.0, 400.0, 40.0)
            .with_fill("#000000");

        let story = story_canvas().with_object(headline.clone());
        let report = engine.check_snapshot(&story, "", None, None);
        let violation = report
            .violations
            .iter()
            .find(|v| v.rule == RuleName::SafeZoneCompliance)
            .expect("story canvas should violate the top safe zone");
        assert!(violation.details.as_deref().unwrap().contains("(0-200px)"));

        let square = CanvasSnapshot::new(CanvasFormat::Square).with_object(headline);
        let report = engine.check_snapshot(&square, "", None, None);
        assert_eq!(
            rule_status(&report, RuleName::SafeZoneCompliance),
            RuleStatus::Pass
        );
    }

    #[test]
    fn test_alcohol_without_logo_fails() {
        let engine = ComplianceEngine::new();
        let canvas = CanvasSnapshot::new(CanvasFormat::Square);
        let report = engine.check_snapshot(&canvas, "", Some(ProductType::Alcohol), None);
        let violation = report
            .violations
            .iter()
            .find(|v| v.rule == RuleName::DrinkawareLockup)
            .unwrap();
        assert!(violation.message.contains("missing"));
    }

    #[test]
    fn test_report_json_shape() {
        let engine = ComplianceEngine::new();
        let canvas = CanvasSnapshot::new(CanvasFormat::Square).with_object(
            CanvasObject::text("headline", "Save now", 32.0).with_fill("#000000"),
        );
        let report = engine.check_snapshot(&canvas, "", None, None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["overallStatus"], "fail");
        assert_eq!(json["violations"][0]["rule"], "Price Claims");
        assert!(json["warnings"].is_array());
        assert!(json["timestamp"].is_string());
    }
}
