//! Staffing level value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Kitchen staffing level as a percentage of full strength.
///
/// The reference console offers {50, 75, 100, 125}, but any positive
/// percentage is accepted; the prep-time engine applies a neutral
/// multiplier to values outside its lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffingLevel(u16);

impl StaffingLevel {
    /// Full staffing.
    pub const FULL: Self = Self(100);

    /// Creates a StaffingLevel, rejecting zero.
    pub fn try_new(percent: u16) -> Result<Self, ValidationError> {
        if percent == 0 {
            return Err(ValidationError::not_positive("staffing_percent", 0));
        }
        Ok(Self(percent))
    }

    /// Returns the percentage value.
    pub fn percent(&self) -> u16 {
        self.0
    }
}

impl Default for StaffingLevel {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for StaffingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_positive_values() {
        assert_eq!(StaffingLevel::try_new(50).unwrap().percent(), 50);
        assert_eq!(StaffingLevel::try_new(125).unwrap().percent(), 125);
        // Off-table values are valid staffing levels too.
        assert_eq!(StaffingLevel::try_new(90).unwrap().percent(), 90);
    }

    #[test]
    fn try_new_rejects_zero() {
        let result = StaffingLevel::try_new(0);
        assert!(matches!(
            result,
            Err(ValidationError::NotPositive { actual: 0, .. })
        ));
    }

    #[test]
    fn default_is_full_staffing() {
        assert_eq!(StaffingLevel::default(), StaffingLevel::FULL);
        assert_eq!(StaffingLevel::default().percent(), 100);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", StaffingLevel::try_new(75).unwrap()), "75%");
    }

    #[test]
    fn serializes_transparently() {
        let level = StaffingLevel::try_new(125).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "125");
        let back: StaffingLevel = serde_json::from_str("125").unwrap();
        assert_eq!(back, level);
    }
}
