//! Legibility rules for text layers: minimum font size and WCAG AA contrast

use super::{text_preview, ComplianceRule, RuleContext};
use crate::extractors::color::{contrast_ratio, parse_color, ContrastLevel};
use shared_types::{RuleName, RuleVerdict};
use tracing::debug;

/// Minimum font size in px
pub const MIN_FONT_SIZE: f64 = 20.0;

/// Font size assumed for contrast when a text layer has none
const DEFAULT_CONTRAST_FONT_SIZE: f64 = 20.0;

const CONTRAST_PASS: &str = "All text meets WCAG AA contrast requirements.";

pub struct MinimumFontSizeRule;

impl ComplianceRule for MinimumFontSizeRule {
    fn name(&self) -> RuleName {
        RuleName::MinimumFontSize
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let violators: Vec<_> = ctx
            .canvas
            .text_objects()
            .filter(|obj| obj.font_size.unwrap_or(0.0) < MIN_FONT_SIZE)
            .collect();

        if violators.is_empty() {
            return RuleVerdict::pass(
                self.name(),
                "All text meets minimum font size requirements.",
            );
        }

        let details = violators
            .iter()
            .map(|obj| {
                format!(
                    "Text \"{}\" has size {}px",
                    text_preview(obj, 20),
                    obj.font_size.unwrap_or(0.0)
                )
            })
            .collect::<Vec<_>>()
            .join("; ");

        RuleVerdict::fail(
            self.name(),
            format!("Text below minimum font size ({}px) detected.", MIN_FONT_SIZE),
        )
        .with_details(details)
        .with_affected(violators.iter().map(|obj| obj.id.as_str()))
    }
}

pub struct ContrastRule;

impl ComplianceRule for ContrastRule {
    fn name(&self) -> RuleName {
        RuleName::ContrastCheck
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let background_color = ctx.canvas.background_color.as_str();
        let Some(bg_rgb) = parse_color(background_color) else {
            debug!(
                background = background_color,
                "unparseable background colour, skipping contrast"
            );
            return RuleVerdict::pass(self.name(), CONTRAST_PASS);
        };

        let mut violations = Vec::new();
        let mut affected = Vec::new();

        for obj in ctx.canvas.text_objects() {
            let Some(fill) = obj.fill.as_deref() else {
                continue;
            };
            let Some(text_rgb) = parse_color(fill) else {
                debug!(id = %obj.id, fill, "unparseable text colour, skipping contrast");
                continue;
            };

            let font_size = obj.font_size.unwrap_or(DEFAULT_CONTRAST_FONT_SIZE);
            let ratio = contrast_ratio(text_rgb, bg_rgb);
            let required = ContrastLevel::AA.required_ratio(font_size);

            if !ContrastLevel::AA.is_met(ratio, font_size) {
                violations.push(format!(
                    "Text \"{}\" ({}) has contrast {:.2}:1 against background ({}), {}:1 required",
                    text_preview(obj, 20),
                    fill,
                    ratio,
                    background_color,
                    required
                ));
                affected.push(obj.id.as_str());
            }
        }

        if violations.is_empty() {
            RuleVerdict::pass(self.name(), CONTRAST_PASS)
        } else {
            RuleVerdict::fail(
                self.name(),
                "Insufficient contrast detected (WCAG AA requires 4.5:1, or 3:1 for large text).",
            )
            .with_details(violations.join("; "))
            .with_affected(affected)
        }
    }
}
