//! Compliance engine: OCR enrichment, rule evaluation and aggregation

use std::sync::Arc;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use shared_types::{CanvasSnapshot, ComplianceReport, ComplianceRequest, ProductType, RuleVerdict};
use tracing::{debug, info};

use crate::extractors::text::{combine_text, extract_text_from_objects};
use crate::ocr::{
    extract_text_from_image, DisabledRecognizer, TextRecognizer, DEFAULT_OCR_LANGUAGE,
    DEFAULT_OCR_TIMEOUT,
};
use crate::rules::{all_rules, ComplianceRule, RuleContext};

/// Engine tunables
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Upper bound on one OCR call; on expiry OCR text is treated as empty
    pub ocr_timeout: Duration,
    /// Language tag passed to the recognizer
    pub ocr_language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ocr_timeout: DEFAULT_OCR_TIMEOUT,
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
        }
    }
}

/// ComplianceEngine entry point
///
/// Holds no per-check state; one instance can serve concurrent checks.
pub struct ComplianceEngine {
    recognizer: Arc<dyn TextRecognizer>,
    rules: Vec<Box<dyn ComplianceRule>>,
    config: EngineConfig,
}

impl ComplianceEngine {
    /// Engine without OCR; checks rely on object text only
    pub fn new() -> Self {
        Self::with_recognizer(Arc::new(DisabledRecognizer), EngineConfig::default())
    }

    pub fn with_recognizer(recognizer: Arc<dyn TextRecognizer>, config: EngineConfig) -> Self {
        Self {
            recognizer,
            rules: all_rules(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every rule against the request and aggregate the verdicts.
    ///
    /// OCR failures never surface here; they degrade to empty OCR text.
    pub async fn run_compliance_checks(&self, request: &ComplianceRequest) -> ComplianceReport {
        let ocr_text = match request.screenshot.as_deref() {
            Some(screenshot) if !screenshot.trim().is_empty() => {
                extract_text_from_image(
                    self.recognizer.as_ref(),
                    screenshot,
                    &self.config.ocr_language,
                    self.config.ocr_timeout,
                )
                .await
            }
            _ => String::new(),
        };

        self.check_snapshot(
            &request.canvas_data,
            &ocr_text,
            request.product_type,
            request.tesco_tag.as_deref(),
        )
    }

    /// Evaluate the rule set given OCR text that was already extracted
    pub fn check_snapshot(
        &self,
        canvas: &CanvasSnapshot,
        ocr_text: &str,
        product_type: Option<ProductType>,
        tesco_tag: Option<&str>,
    ) -> ComplianceReport {
        let object_text = extract_text_from_objects(&canvas.objects);
        let text = combine_text(ocr_text, &object_text);

        let ctx = RuleContext::new(&text, canvas)
            .with_product_type(product_type)
            .with_tesco_tag(tesco_tag);

        let verdicts = self.evaluate(&ctx);
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let report = ComplianceReport::from_verdicts(verdicts, timestamp);

        info!(
            status = ?report.overall_status,
            violations = report.violations.len(),
            warnings = report.warnings.len(),
            objects = canvas.objects.len(),
            ocr_chars = ocr_text.len(),
            "compliance check complete"
        );

        report
    }

    /// All verdicts, passing ones included, in rule-set order
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Vec<RuleVerdict> {
        self.rules
            .iter()
            .map(|rule| {
                let verdict = rule.check(ctx);
                debug!(rule = %verdict.rule, status = ?verdict.status, "rule evaluated");
                verdict
            })
            .collect()
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}
