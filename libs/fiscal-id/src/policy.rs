//! Letter-case policy applied to raw input before validation.

use serde::{Deserialize, Serialize};

/// How lower-case letters in raw input are treated.
///
/// The canonical form is upper-cased under either policy, so two values that
/// both construct compare equal regardless of which policy admitted them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Any lower-case ASCII letter in the raw input makes it invalid.
    #[default]
    Strict,
    /// Lower-case letters are folded to upper case and accepted.
    Fold,
}

impl CasePolicy {
    /// Returns true if `raw` is acceptable under this policy.
    #[must_use]
    pub fn admits(self, raw: &str) -> bool {
        match self {
            CasePolicy::Strict => !raw.bytes().any(|b| b.is_ascii_lowercase()),
            CasePolicy::Fold => true,
        }
    }

    /// Returns the policy name as used on the command line and in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CasePolicy::Strict => "strict",
            CasePolicy::Fold => "fold",
        }
    }
}

impl std::fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CasePolicy::Strict),
            "fold" => Ok(CasePolicy::Fold),
            other => Err(format!(
                "unknown case policy '{other}': expected 'strict' or 'fold'"
            )),
        }
    }
}
