//! The organizers an event can be hosted by.
//!
//! User input is checked against the fixed list through `FromStr`. Stored data
//! is read leniently: a code outside the list is kept as `Other` and written
//! back unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Organizer {
    Sbf,
    Scs,
    Scci,
    SgTech,
    Smf,
    Scala,
    StartupSg,
    Accm,
    AceSg,
    Moody,
    Gsma,
    Jetro,
    Bcg,
    /// A stored code that is not in the selectable list
    Other(String),
    /// No organizer selected
    #[default]
    Unset,
}

impl Organizer {
    /// Every selectable organizer, in the order they are offered to users.
    pub const ALL: [Organizer; 13] = [
        Organizer::Sbf,
        Organizer::Scs,
        Organizer::Scci,
        Organizer::SgTech,
        Organizer::Smf,
        Organizer::Scala,
        Organizer::StartupSg,
        Organizer::Accm,
        Organizer::AceSg,
        Organizer::Moody,
        Organizer::Gsma,
        Organizer::Jetro,
        Organizer::Bcg,
    ];

    pub fn code(&self) -> &str {
        match self {
            Organizer::Sbf => "SBF",
            Organizer::Scs => "SCS",
            Organizer::Scci => "SCCI",
            Organizer::SgTech => "SGTECH",
            Organizer::Smf => "SMF",
            Organizer::Scala => "SCALA",
            Organizer::StartupSg => "STARTUPSG",
            Organizer::Accm => "ACCM",
            Organizer::AceSg => "ACE.SG",
            Organizer::Moody => "Moody",
            Organizer::Gsma => "GSMA",
            Organizer::Jetro => "JETRO",
            Organizer::Bcg => "BCG",
            Organizer::Other(code) => code.as_str(),
            Organizer::Unset => "",
        }
    }

    pub fn is_set(&self) -> bool {
        *self != Organizer::Unset
    }

    /// Map a stored code onto the list, ignoring case. Unknown codes become
    /// `Other` with the raw text.
    pub fn from_code(code: &str) -> Self {
        if code.trim().is_empty() {
            return Organizer::Unset;
        }

        code.parse()
            .unwrap_or_else(|_| Organizer::Other(code.to_string()))
    }
}

impl fmt::Display for Organizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Organizer {
    type Err = BoardError;

    /// Parse a selectable organizer code, ignoring case. An empty string is
    /// `Unset`; anything outside the list is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Organizer::Unset);
        }

        Organizer::ALL
            .into_iter()
            .find(|o| o.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownOrganizer(s.to_string()))
    }
}

impl Serialize for Organizer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Organizer {
    /// Never fails on the value itself; `null` reads as `Unset`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Organizer::from_code).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("sbf".parse::<Organizer>().unwrap(), Organizer::Sbf);
        assert_eq!("ace.sg".parse::<Organizer>().unwrap(), Organizer::AceSg);
        assert_eq!("MOODY".parse::<Organizer>().unwrap(), Organizer::Moody);
    }

    #[test]
    fn test_parse_empty_is_unset() {
        assert_eq!("".parse::<Organizer>().unwrap(), Organizer::Unset);
        assert_eq!("  ".parse::<Organizer>().unwrap(), Organizer::Unset);
    }

    #[test]
    fn test_parse_unknown_code() {
        assert!(matches!(
            "ACME".parse::<Organizer>(),
            Err(BoardError::UnknownOrganizer(code)) if code == "ACME"
        ));
    }

    #[test]
    fn test_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Organizer::AceSg).unwrap(), "\"ACE.SG\"");
        assert_eq!(serde_json::to_string(&Organizer::Unset).unwrap(), "\"\"");
        let parsed: Organizer = serde_json::from_str("\"Moody\"").unwrap();
        assert_eq!(parsed, Organizer::Moody);
    }

    #[test]
    fn test_stored_codes_are_read_leniently() {
        let lower: Organizer = serde_json::from_str("\"moody\"").unwrap();
        assert_eq!(lower, Organizer::Moody);

        let unknown: Organizer = serde_json::from_str("\"ACME\"").unwrap();
        assert_eq!(unknown, Organizer::Other("ACME".to_string()));
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"ACME\"");

        let null: Organizer = serde_json::from_str("null").unwrap();
        assert_eq!(null, Organizer::Unset);
    }

    #[test]
    fn test_all_codes_round_trip_through_parse() {
        for organizer in Organizer::ALL {
            assert_eq!(organizer.code().parse::<Organizer>().unwrap(), organizer);
        }
    }
}
