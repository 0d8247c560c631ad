//! Policy tables for the text-pattern rules
//!
//! Every term list and regex set used by a rule lives here so patterns can be
//! swapped without touching rule control flow. All matching is done against
//! case-folded text.

use lazy_static::lazy_static;
use regex::Regex;

/// A price/claim pattern together with the category reported in details
pub struct ClaimPattern {
    pub category: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Price, discount and marketing-claim patterns
    pub static ref PRICE_CLAIM_PATTERNS: Vec<ClaimPattern> = vec![
        claim("currency", r"£\d+(\.\d+)?"),
        claim("percentage discount", r"\d+%\s*(off|discount)"),
        claim("discount", r"save"),
        claim("discount", r"discount"),
        claim("discount", r"deal"),
        claim("discount", r"offer"),
        claim("discount", r"sale"),
        claim("discount", r"half price"),
        claim("price", r"now only"),
        claim("price", r"only £"),
        claim("price", r"reduced to"),
        claim("claim", r"claim"),
        claim("claim", r"guarantee"),
        claim("claim", r"cashback"),
        claim("claim", r"money.?back"),
    ];

    /// Image names that indicate an alcohol product
    pub static ref ALCOHOL_IMAGE_PATTERN: Regex =
        Regex::new(r"(?i)beer|wine|vodka|rum|whiskey|gin|alcohol|spirit").unwrap();

    /// Image names that indicate the Drinkaware logo itself
    pub static ref DRINKAWARE_IMAGE_PATTERN: Regex = Regex::new(r"(?i)drinkaware").unwrap();
}

fn claim(category: &'static str, pattern: &str) -> ClaimPattern {
    ClaimPattern {
        category,
        regex: Regex::new(pattern).unwrap(),
    }
}

/// Sustainability / green claim terms
pub const SUSTAINABILITY_TERMS: &[&str] = &[
    "eco",
    "green",
    "sustainable",
    "carbon",
    "biodegradable",
    "recyclable",
    "planet-friendly",
    "planet friendly",
    "environment",
    "earth friendly",
    "earth-friendly",
];

/// Competition and giveaway terms
pub const COMPETITION_TERMS: &[&str] = &[
    "win",
    "contest",
    "giveaway",
    "sweepstake",
    "enter to win",
    "competition",
    "chance to win",
    "prize",
];

/// Charity partnership terms
pub const CHARITY_TERMS: &[&str] = &["donate", "charity", "foundation", "supports"];

/// Approved retailer tag phrases
pub const APPROVED_TAG_PHRASES: &[&str] = &[
    "only at tesco",
    "available at tesco",
    "selected stores. while stocks last.",
    "clubcard/app required. ends",
];

/// Urgency wording that is never allowed in a retailer tag
pub const DISALLOWED_TAG_TERMS: &[&str] = &["exclusive", "limited time", "hurry", "today only"];

/// Drinkaware logo colours (case-folded)
pub const DRINKAWARE_COLORS: &[&str] = &["#000000", "#ffffff", "black", "white"];

/// Id markers for elements that must not be obstructed
pub const PROTECTED_ID_MARKERS: &[&str] = &["value-tile", "cta", "tesco-tag"];

/// Id marker for the safe-zone overlays drawn by the editor
pub const SAFE_ZONE_ID_MARKER: &str = "safe-zone";

/// Terms from `terms` occurring in `text` as substrings, in table order
pub fn matched_terms(text: &str, terms: &[&'static str]) -> Vec<&'static str> {
    terms
        .iter()
        .copied()
        .filter(|term| text.contains(term))
        .collect()
}

/// Price-claim patterns matching `text`, in table order
pub fn matched_claim_patterns(text: &str) -> Vec<&'static ClaimPattern> {
    PRICE_CLAIM_PATTERNS
        .iter()
        .filter(|p| p.regex.is_match(text))
        .collect()
}
