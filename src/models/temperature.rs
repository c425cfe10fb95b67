use crate::error::{OmniflowError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Sampling temperature forwarded to the backend, always within `0.0..=2.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Temperature(f32);

impl Temperature {
    pub fn new(value: f32) -> Result<Self> {
        if value.is_finite() && (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OmniflowError::InvalidTemperature(value))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Temperature {
    fn default() -> Self {
        Self(DEFAULT_TEMPERATURE)
    }
}

impl FromStr for Temperature {
    type Err = OmniflowError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f32>()
            .map_err(|_| OmniflowError::MalformedPayload(format!("'{}' is not a number", s)))?;
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Temperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.0)
    }
}
