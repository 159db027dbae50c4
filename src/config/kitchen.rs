//! Kitchen rule-table and display-window configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Kitchen configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KitchenConfig {
    /// Base prep time in minutes before load adjustment
    #[serde(default = "default_base_prep_minutes")]
    pub base_prep_minutes: u32,

    /// Staffing percentages offered by the console
    #[serde(default = "default_staffing_choices")]
    pub staffing_choices: Vec<u16>,

    /// Minimum item count for synthetic orders
    #[serde(default = "default_item_count_min")]
    pub item_count_min: u32,

    /// Maximum item count for synthetic orders
    #[serde(default = "default_item_count_max")]
    pub item_count_max: u32,

    /// Completed orders shown on the display
    #[serde(default = "default_completed_window")]
    pub completed_window: usize,

    /// Log entries shown on the monitor
    #[serde(default = "default_log_window")]
    pub log_window: usize,

    /// Decisions handed to the summarizer
    #[serde(default = "default_summary_window")]
    pub summary_window: usize,
}

impl KitchenConfig {
    /// Validate kitchen configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_prep_minutes == 0 {
            return Err(ValidationError::InvalidBasePrepTime);
        }
        if self.item_count_min == 0 || self.item_count_min > self.item_count_max {
            return Err(ValidationError::InvalidItemRange);
        }
        if self.staffing_choices.is_empty() {
            return Err(ValidationError::NoStaffingChoices);
        }
        if self.staffing_choices.iter().any(|&percent| percent == 0) {
            return Err(ValidationError::InvalidStaffingChoice);
        }
        if self.completed_window == 0 || self.log_window == 0 || self.summary_window == 0 {
            return Err(ValidationError::InvalidWindow);
        }
        Ok(())
    }
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            base_prep_minutes: default_base_prep_minutes(),
            staffing_choices: default_staffing_choices(),
            item_count_min: default_item_count_min(),
            item_count_max: default_item_count_max(),
            completed_window: default_completed_window(),
            log_window: default_log_window(),
            summary_window: default_summary_window(),
        }
    }
}

fn default_base_prep_minutes() -> u32 {
    35
}

fn default_staffing_choices() -> Vec<u16> {
    vec![50, 75, 100, 125]
}

fn default_item_count_min() -> u32 {
    1
}

fn default_item_count_max() -> u32 {
    5
}

fn default_completed_window() -> usize {
    6
}

fn default_log_window() -> usize {
    5
}

fn default_summary_window() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(KitchenConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_base_prep_time() {
        let config = KitchenConfig {
            base_prep_minutes: 0,
            ..KitchenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBasePrepTime)
        ));
    }

    #[test]
    fn rejects_inverted_item_range() {
        let config = KitchenConfig {
            item_count_min: 6,
            item_count_max: 5,
            ..KitchenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidItemRange)
        ));
    }

    #[test]
    fn rejects_empty_staffing_choices() {
        let config = KitchenConfig {
            staffing_choices: vec![],
            ..KitchenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::NoStaffingChoices)
        ));
    }

    #[test]
    fn rejects_zero_display_windows() {
        let config = KitchenConfig {
            log_window: 0,
            ..KitchenConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWindow)
        ));
    }
}
