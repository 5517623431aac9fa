//! Blood type and rhesus factor symbols.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// ABO blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    /// Group A
    A,
    /// Group B
    B,
    /// Group AB
    #[serde(rename = "AB")]
    Ab,
    /// Group O
    O,
}

impl BloodType {
    /// The wire symbol for this group (`"A"`, `"B"`, `"AB"`, `"O"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BloodType::A => "A",
            BloodType::B => "B",
            BloodType::Ab => "AB",
            BloodType::O => "O",
        }
    }

    /// All groups, in form-selector order.
    pub const ALL: [BloodType; 4] = [BloodType::A, BloodType::B, BloodType::Ab, BloodType::O];
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(BloodType::A),
            "B" => Ok(BloodType::B),
            "AB" => Ok(BloodType::Ab),
            "O" => Ok(BloodType::O),
            other => Err(Error::UnknownBloodType(other.to_string())),
        }
    }
}

/// Rhesus factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rhesus {
    /// Rh positive, serialized as `"+"`
    #[serde(rename = "+")]
    Positive,
    /// Rh negative, serialized as `"-"`
    #[serde(rename = "-")]
    Negative,
}

impl Rhesus {
    /// The wire symbol for this factor (`"+"` or `"-"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Rhesus::Positive => "+",
            Rhesus::Negative => "-",
        }
    }
}

impl fmt::Display for Rhesus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rhesus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Rhesus::Positive),
            "-" => Ok(Rhesus::Negative),
            other => Err(Error::UnknownRhesus(other.to_string())),
        }
    }
}
