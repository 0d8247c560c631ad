//! Text-pattern claim rules
//!
//! Price claims use a regex table; the remaining claim rules are plain
//! substring term lists sharing one evaluator, [`TermClaimRule`].

use super::{ComplianceRule, RuleContext};
use crate::patterns::{
    matched_claim_patterns, matched_terms, CHARITY_TERMS, COMPETITION_TERMS, SUSTAINABILITY_TERMS,
};
use shared_types::{RuleName, RuleVerdict};

/// Price, discount and marketing-claim wording is not allowed
pub struct PriceClaimsRule;

impl ComplianceRule for PriceClaimsRule {
    fn name(&self) -> RuleName {
        RuleName::PriceClaims
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let matched = matched_claim_patterns(ctx.text);

        if matched.is_empty() {
            return RuleVerdict::pass(self.name(), "No price or discount references found.");
        }

        let listed = matched
            .iter()
            .map(|p| format!("{} ({})", p.regex.as_str(), p.category))
            .collect::<Vec<_>>()
            .join(", ");

        RuleVerdict::fail(
            self.name(),
            "Price, discount, or claim terms detected. Tesco self-serve banners cannot include pricing.",
        )
        .with_details(format!("Detected patterns: {}", listed))
    }
}

/// Fails when the text contains any term of a fixed list
pub struct TermClaimRule {
    pub rule: RuleName,
    pub terms: &'static [&'static str],
    pub fail_message: &'static str,
    pub pass_message: &'static str,
}

impl ComplianceRule for TermClaimRule {
    fn name(&self) -> RuleName {
        self.rule
    }

    fn check(&self, ctx: &RuleContext<'_>) -> RuleVerdict {
        let found = matched_terms(ctx.text, self.terms);

        if found.is_empty() {
            RuleVerdict::pass(self.rule, self.pass_message)
        } else {
            RuleVerdict::fail(self.rule, self.fail_message)
                .with_details(format!("Found terms: {}", found.join(", ")))
        }
    }
}

pub const SUSTAINABILITY_RULE: TermClaimRule = TermClaimRule {
    rule: RuleName::SustainabilityClaims,
    terms: SUSTAINABILITY_TERMS,
    fail_message: "Sustainability or green claims detected. Not allowed in self-serve banners.",
    pass_message: "No sustainability claims detected.",
};

pub const COMPETITIONS_RULE: TermClaimRule = TermClaimRule {
    rule: RuleName::Competitions,
    terms: COMPETITION_TERMS,
    fail_message: "Competition or giveaway references detected. Not allowed in self-serve banners.",
    pass_message: "No competition references detected.",
};

pub const CHARITY_RULE: TermClaimRule = TermClaimRule {
    rule: RuleName::CharityPartnership,
    terms: CHARITY_TERMS,
    fail_message: "Charity partnership references detected. Not allowed in self-serve banners.",
    pass_message: "No charity references detected.",
};
