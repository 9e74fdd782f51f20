use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour of the day in `[0, 23]`, used to index a facility's traffic profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const HOURS: usize = 24;

    pub fn new(hour: u8) -> Result<Self, HourError> {
        if usize::from(hour) < Self::HOURS {
            Ok(Self(hour))
        } else {
            Err(HourError::OutOfRange(u32::from(hour)))
        }
    }

    /// Folds any value into the day, modulo 24.
    pub fn wrapping(raw: u32) -> Self {
        Self((raw % Self::HOURS as u32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = HourError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourOfDay> for u8 {
    fn from(value: HourOfDay) -> Self {
        value.0
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// How raw hour values supplied by callers are turned into an [`HourOfDay`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourPolicy {
    /// Anything outside `[0, 23]` is rejected.
    #[default]
    Strict,
    /// Values wrap modulo 24.
    Wrap,
}

impl HourPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "wrap" | "modulo24" => Some(Self::Wrap),
            _ => None,
        }
    }

    pub fn resolve(self, raw: u32) -> Result<HourOfDay, HourError> {
        match self {
            HourPolicy::Strict => u8::try_from(raw)
                .map_err(|_| HourError::OutOfRange(raw))
                .and_then(HourOfDay::new),
            HourPolicy::Wrap => Ok(HourOfDay::wrapping(raw)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HourError {
    #[error("hour {0} is outside the 0-23 range")]
    OutOfRange(u32),
}
