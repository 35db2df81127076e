//! Date picker display modes.

use serde::{Deserialize, Serialize};

/// How a date field is presented, by HTML input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatepickerMode {
    /// Date only (`date`).
    #[default]
    Date,
    /// Date and time (`datetime-local`).
    DatetimeLocal,
    /// Time only (`time`).
    Time,
}

impl DatepickerMode {
    /// Resolves the stored mode number. `1` is date and time, `2` is time
    /// only, and anything else (including unset) is date only.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventmgt_registration::DatepickerMode;
    ///
    /// assert_eq!(DatepickerMode::from_mode(Some(1)).as_str(), "datetime-local");
    /// assert_eq!(DatepickerMode::from_mode(None).as_str(), "date");
    /// ```
    pub const fn from_mode(mode: Option<i64>) -> Self {
        match mode {
            Some(1) => Self::DatetimeLocal,
            Some(2) => Self::Time,
            _ => Self::Date,
        }
    }

    /// Returns the HTML input type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Time => "time",
        }
    }
}
