use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow states of a thesis. The wire names are the kebab-case strings
/// the existing clients and database rows already use, so they are kept
/// verbatim.
///
/// The declaration order documents the intended lifecycle progression:
/// review, discussion, advisor approval, department approval, committee
/// readiness, committee assignment, completion. The order is not enforced
/// as a transition rule; see `manager::plan_update` for the checks that
/// actually gate a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThesisStatus {
    #[serde(rename = "shqyrtim")]
    Shqyrtim,
    #[serde(rename = "diskutim")]
    Diskutim,
    #[serde(rename = "aprovuar-mentor")]
    AprovuarMentor,
    #[serde(rename = "aprovuar-departamenti")]
    AprovuarDepartamenti,
    #[serde(rename = "gati-per-komision")]
    GatiPerKomision,
    #[serde(rename = "komisioni-i-caktuar")]
    KomisioniICaktuar,
    #[serde(rename = "e-kryer")]
    EKryer,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown thesis status: {0}")]
pub struct ParseStatusError(String);

impl ThesisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThesisStatus::Shqyrtim => "shqyrtim",
            ThesisStatus::Diskutim => "diskutim",
            ThesisStatus::AprovuarMentor => "aprovuar-mentor",
            ThesisStatus::AprovuarDepartamenti => "aprovuar-departamenti",
            ThesisStatus::GatiPerKomision => "gati-per-komision",
            ThesisStatus::KomisioniICaktuar => "komisioni-i-caktuar",
            ThesisStatus::EKryer => "e-kryer",
        }
    }

    /// Statuses that sit behind the mandatory waiting period after
    /// department approval.
    pub fn is_committee_stage(&self) -> bool {
        matches!(
            self,
            ThesisStatus::GatiPerKomision | ThesisStatus::KomisioniICaktuar | ThesisStatus::EKryer
        )
    }

    /// While a thesis is in one of these states its text fields may still
    /// be edited without requesting a status change.
    pub fn allows_plain_edits(&self) -> bool {
        matches!(
            self,
            ThesisStatus::Shqyrtim | ThesisStatus::Diskutim | ThesisStatus::AprovuarMentor
        )
    }
}

impl fmt::Display for ThesisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThesisStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shqyrtim" => Ok(ThesisStatus::Shqyrtim),
            "diskutim" => Ok(ThesisStatus::Diskutim),
            "aprovuar-mentor" => Ok(ThesisStatus::AprovuarMentor),
            "aprovuar-departamenti" => Ok(ThesisStatus::AprovuarDepartamenti),
            "gati-per-komision" => Ok(ThesisStatus::GatiPerKomision),
            "komisioni-i-caktuar" => Ok(ThesisStatus::KomisioniICaktuar),
            "e-kryer" => Ok(ThesisStatus::EKryer),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

// Status is stored as TEXT; sqlx decodes rows through this conversion.
impl TryFrom<String> for ThesisStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_wire_names() {
        for status in [
            ThesisStatus::Shqyrtim,
            ThesisStatus::Diskutim,
            ThesisStatus::AprovuarMentor,
            ThesisStatus::AprovuarDepartamenti,
            ThesisStatus::GatiPerKomision,
            ThesisStatus::KomisioniICaktuar,
            ThesisStatus::EKryer,
        ] {
            assert_eq!(status.as_str().parse::<ThesisStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("approved".parse::<ThesisStatus>().is_err());
        assert!("".parse::<ThesisStatus>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&ThesisStatus::GatiPerKomision).unwrap();
        assert_eq!(json, "\"gati-per-komision\"");
        let back: ThesisStatus = serde_json::from_str("\"e-kryer\"").unwrap();
        assert_eq!(back, ThesisStatus::EKryer);
    }
}
