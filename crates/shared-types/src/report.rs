//! Rule verdicts and the aggregated compliance report

use serde::{Deserialize, Serialize};

/// The fixed universe of compliance rules.
///
/// Report consumers derive "passed" checks by excluding the names found in
/// `violations` and `warnings` from [`RuleName::ALL`], so the display strings
/// are part of the wire contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleName {
    #[serde(rename = "Price Claims")]
    PriceClaims,
    #[serde(rename = "Sustainability Claims")]
    SustainabilityClaims,
    #[serde(rename = "Competitions")]
    Competitions,
    #[serde(rename = "Charity Partnership")]
    CharityPartnership,
    #[serde(rename = "Drinkaware Lock-up")]
    DrinkawareLockup,
    #[serde(rename = "Safe Zone Compliance")]
    SafeZoneCompliance,
    #[serde(rename = "Minimum Font Size")]
    MinimumFontSize,
    #[serde(rename = "Contrast Check")]
    ContrastCheck,
    #[serde(rename = "Tesco Tag Restrictions")]
    TescoTagRestrictions,
    #[serde(rename = "Layer Overlaps")]
    LayerOverlaps,
}

impl RuleName {
    pub const ALL: [RuleName; 10] = [
        RuleName::PriceClaims,
        RuleName::SustainabilityClaims,
        RuleName::Competitions,
        RuleName::CharityPartnership,
        RuleName::DrinkawareLockup,
        RuleName::SafeZoneCompliance,
        RuleName::MinimumFontSize,
        RuleName::ContrastCheck,
        RuleName::TescoTagRestrictions,
        RuleName::LayerOverlaps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::PriceClaims => "Price Claims",
            RuleName::SustainabilityClaims => "Sustainability Claims",
            RuleName::Competitions => "Competitions",
            RuleName::CharityPartnership => "Charity Partnership",
            RuleName::DrinkawareLockup => "Drinkaware Lock-up",
            RuleName::SafeZoneCompliance => "Safe Zone Compliance",
            RuleName::MinimumFontSize => "Minimum Font Size",
            RuleName::ContrastCheck => "Contrast Check",
            RuleName::TescoTagRestrictions => "Tesco Tag Restrictions",
            RuleName::LayerOverlaps => "Layer Overlaps",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Pass,
    Warning,
    Fail,
}

/// Outcome of a single rule evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleVerdict {
    pub rule: RuleName,
    pub status: RuleStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_objects: Option<Vec<String>>,
}

impl RuleVerdict {
    fn new(rule: RuleName, status: RuleStatus, message: impl Into<String>) -> Self {
        Self {
            rule,
            status,
            message: message.into(),
            details: None,
            affected_objects: None,
        }
    }

    pub fn pass(rule: RuleName, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Pass, message)
    }

    pub fn warning(rule: RuleName, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Warning, message)
    }

    pub fn fail(rule: RuleName, message: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Fail, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attach offending object ids, de-duplicated in encounter order.
    /// An empty list leaves the field unset.
    pub fn with_affected<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        self.affected_objects = if unique.is_empty() {
            None
        } else {
            Some(unique)
        };
        self
    }
}

/// Aggregated result of one compliance check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub overall_status: RuleStatus,
    pub violations: Vec<RuleVerdict>,
    pub warnings: Vec<RuleVerdict>,
    /// RFC 3339 / ISO-8601
    pub timestamp: String,
}

impl ComplianceReport {
    /// Partition verdicts by status; passing verdicts are dropped.
    pub fn from_verdicts(verdicts: Vec<RuleVerdict>, timestamp: String) -> Self {
        let (violations, rest): (Vec<_>, Vec<_>) = verdicts
            .into_iter()
            .partition(|v| v.status == RuleStatus::Fail);
        let warnings: Vec<_> = rest
            .into_iter()
            .filter(|v| v.status == RuleStatus::Warning)
            .collect();

        let overall_status = if !violations.is_empty() {
            RuleStatus::Fail
        } else if !warnings.is_empty() {
            RuleStatus::Warning
        } else {
            RuleStatus::Pass
        };

        Self {
            overall_status,
            violations,
            warnings,
            timestamp,
        }
    }

    /// Rules that passed, derived by exclusion from [`RuleName::ALL`]
    pub fn passed_rules(&self) -> Vec<RuleName> {
        RuleName::ALL
            .iter()
            .copied()
            .filter(|name| {
                !self.violations.iter().any(|v| v.rule == *name)
                    && !self.warnings.iter().any(|w| w.rule == *name)
            })
            .collect()
    }

    pub fn is_compliant(&self) -> bool {
        self.overall_status == RuleStatus::Pass
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = RuleStatus> {
        prop_oneof![
            Just(RuleStatus::Pass),
            Just(RuleStatus::Warning),
            Just(RuleStatus::Fail),
        ]
    }

    proptest! {
        /// Property: overall status is fail iff violations exist, warning iff only warnings exist
        #[test]
        fn overall_status_matches_partition(
            statuses in prop::collection::vec(status_strategy(), 10)
        ) {
            let verdicts: Vec<_> = RuleName::ALL
                .iter()
                .zip(statuses.iter())
                .map(|(name, status)| match status {
                    RuleStatus::Pass => RuleVerdict::pass(*name, "ok"),
                    RuleStatus::Warning => RuleVerdict::warning(*name, "check"),
                    RuleStatus::Fail => RuleVerdict::fail(*name, "bad"),
                })
                .collect();

            let report = ComplianceReport::from_verdicts(verdicts, "ts".to_string());

            prop_assert!(report.violations.iter().all(|v| v.status == RuleStatus::Fail));
            prop_assert!(report.warnings.iter().all(|v| v.status == RuleStatus::Warning));

            let expected = if !report.violations.is_empty() {
                RuleStatus::Fail
            } else if !report.warnings.is_empty() {
                RuleStatus::Warning
            } else {
                RuleStatus::Pass
            };
            prop_assert_eq!(report.overall_status, expected);

            let listed = report.violations.len() + report.warnings.len();
            prop_assert_eq!(listed + report.passed_rules().len(), RuleName::ALL.len());
        }
    }
}
