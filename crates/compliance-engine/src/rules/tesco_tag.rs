// Retailer tag wording: urgency terms fail, unrecognised wording warns
use super::{ComplianceRule, RuleContext};
use crate::patterns::{matched_terms, APPROVED_TAG_PHRASES, DISALLOWED_TAG_TERMS};
use shared_types::{RuleName, RuleVerdict};

pub struct TescoTagRule;

impl TescoTagRule {
    /// Explicit tag text when given and non-empty, otherwise the combined text
    fn tag_text(ctx: &RuleContext<'_>) -> String {
        match ctx.tesco_tag {
            Some(tag) if !tag.is_empty() => tag.to_lowercase(),
            _ => ctx.text.to_lowercase(),
        }
    }
}

impl ComplianceRule for TescoTagRule {
    fn name(&self) -> RuleName {
        RuleName::TescoTagRestrictions
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let tag_text = Self::tag_text(ctx);

        let disallowed = matched_terms(&tag_text, DISALLOWED_TAG_TERMS);
        if !disallowed.is_empty() {
            return RuleVerdict::fail(self.name(), "Invalid Tesco tag text detected.").with_details(
                format!(
                    "Disallowed wording: {}. Only approved tag phrases are allowed: \"Only at Tesco\", \"Available at Tesco\", \"Selected stores. While stocks last.\", or Clubcard disclaimers.",
                    disallowed.join(", ")
                ),
            );
        }

        let has_approved_phrase = APPROVED_TAG_PHRASES
            .iter()
            .any(|phrase| tag_text.contains(phrase));

        if !has_approved_phrase && !tag_text.trim().is_empty() {
            return RuleVerdict::warning(self.name(), "Could not verify Tesco tag compliance.")
                .with_details("Please ensure tag text matches approved phrases.");
        }

        RuleVerdict::pass(self.name(), "Tesco tag text is compliant.")
    }
}
