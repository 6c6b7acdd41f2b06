//! Age bracket model.
//!
//! This module defines the AgeBracket enum used to determine whether
//! long-term-care insurance premiums apply to an employee.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The age bracket of the employee being simulated.
///
/// The bracket determines care-insurance applicability: premiums are
/// collected from age 40 through 64 only. Serialized values match the
/// product's wire format (`"20-29"`, `"30-39"`, ..., `"65+"`); any other
/// string fails deserialization rather than defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Ages 20 through 29.
    #[serde(rename = "20-29")]
    Twenties,
    /// Ages 30 through 39.
    #[serde(rename = "30-39")]
    Thirties,
    /// Ages 40 through 49.
    #[serde(rename = "40-49")]
    Forties,
    /// Ages 50 through 59.
    #[serde(rename = "50-59")]
    Fifties,
    /// Ages 60 through 64.
    #[serde(rename = "60-64")]
    EarlySixties,
    /// Ages 65 and above.
    #[serde(rename = "65+")]
    SixtyFivePlus,
}

impl AgeBracket {
    /// All recognized brackets, in ascending age order.
    pub const ALL: [AgeBracket; 6] = [
        AgeBracket::Twenties,
        AgeBracket::Thirties,
        AgeBracket::Forties,
        AgeBracket::Fifties,
        AgeBracket::EarlySixties,
        AgeBracket::SixtyFivePlus,
    ];

    /// Returns true if care-insurance premiums apply to this bracket.
    ///
    /// Care insurance is collected only between ages 40 and 64; premiums
    /// stop at 65 when the employee becomes a category-1 insured person.
    ///
    /// # Examples
    ///
    /// ```
    /// use perdiem_engine::models::AgeBracket;
    ///
    /// assert!(AgeBracket::Forties.requires_care_insurance());
    /// assert!(!AgeBracket::SixtyFivePlus.requires_care_insurance());
    /// ```
    pub fn requires_care_insurance(&self) -> bool {
        matches!(
            self,
            AgeBracket::Forties | AgeBracket::Fifties | AgeBracket::EarlySixties
        )
    }

    /// Returns the wire-format label for this bracket (e.g., `"40-49"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBracket::Twenties => "20-29",
            AgeBracket::Thirties => "30-39",
            AgeBracket::Forties => "40-49",
            AgeBracket::Fifties => "50-59",
            AgeBracket::EarlySixties => "60-64",
            AgeBracket::SixtyFivePlus => "65+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_insurance_applies_to_middle_brackets_only() {
        assert!(!AgeBracket::Twenties.requires_care_insurance());
        assert!(!AgeBracket::Thirties.requires_care_insurance());
        assert!(AgeBracket::Forties.requires_care_insurance());
        assert!(AgeBracket::Fifties.requires_care_insurance());
        assert!(AgeBracket::EarlySixties.requires_care_insurance());
        assert!(!AgeBracket::SixtyFivePlus.requires_care_insurance());
    }

    #[test]
    fn test_serialization_uses_wire_labels() {
        assert_eq!(
            serde_json::to_string(&AgeBracket::Twenties).unwrap(),
            "\"20-29\""
        );
        assert_eq!(
            serde_json::to_string(&AgeBracket::EarlySixties).unwrap(),
            "\"60-64\""
        );
        assert_eq!(
            serde_json::to_string(&AgeBracket::SixtyFivePlus).unwrap(),
            "\"65+\""
        );
    }

    #[test]
    fn test_deserialization_round_trips_all_brackets() {
        for bracket in AgeBracket::ALL {
            let json = serde_json::to_string(&bracket).unwrap();
            let back: AgeBracket = serde_json::from_str(&json).unwrap();
            assert_eq!(back, bracket);
        }
    }

    #[test]
    fn test_unknown_bracket_fails_deserialization() {
        let result = serde_json::from_str::<AgeBracket>("\"10-19\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_matches_wire_label() {
        assert_eq!(AgeBracket::Thirties.to_string(), "30-39");
        assert_eq!(AgeBracket::SixtyFivePlus.to_string(), "65+");
    }
}
