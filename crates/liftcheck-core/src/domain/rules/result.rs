use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of the rule a violation came from.
///
/// The serialized form is the public tag (`"VolumeExceedsMRV"` etc.) and
/// must not change between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleTag {
    DeloadRequired,
    DeloadVolumeInvalid,
    #[serde(rename = "VolumeExceedsMRV")]
    VolumeExceedsMrv,
    CnsOverload,
    BeginnerOvertraining,
    InsufficientRecovery,
}

impl RuleTag {
    pub const ALL: [Self; 6] = [
        Self::DeloadRequired,
        Self::DeloadVolumeInvalid,
        Self::VolumeExceedsMrv,
        Self::CnsOverload,
        Self::BeginnerOvertraining,
        Self::InsufficientRecovery,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeloadRequired => "DeloadRequired",
            Self::DeloadVolumeInvalid => "DeloadVolumeInvalid",
            Self::VolumeExceedsMrv => "VolumeExceedsMRV",
            Self::CnsOverload => "CnsOverload",
            Self::BeginnerOvertraining => "BeginnerOvertraining",
            Self::InsufficientRecovery => "InsufficientRecovery",
        }
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleTag,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Violations collected by a single `ProgramValidator::validate` call.
///
/// Only the rule passes append to it; callers get a read-only view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub(crate) fn push(&mut self, rule: RuleTag, message: impl Into<String>) {
        self.violations.push(Violation {
            rule,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations in rule-pass order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations raised by `rule`.
    pub fn count(&self, rule: RuleTag) -> usize {
        self.violations.iter().filter(|v| v.rule == rule).count()
    }

    pub fn has(&self, rule: RuleTag) -> bool {
        self.violations.iter().any(|v| v.rule == rule)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl<'a> IntoIterator for &'a ValidationResult {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_serialize_to_their_stable_names() {
        for tag in RuleTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn counts_by_rule() {
        let mut result = ValidationResult::default();
        result.push(RuleTag::CnsOverload, "a");
        result.push(RuleTag::CnsOverload, "b");
        result.push(RuleTag::DeloadRequired, "c");

        assert!(!result.is_valid());
        assert_eq!(result.count(RuleTag::CnsOverload), 2);
        assert!(result.has(RuleTag::DeloadRequired));
        assert!(!result.has(RuleTag::InsufficientRecovery));
        assert_eq!(result.violations()[2].to_string(), "[DeloadRequired] c");
    }
}
