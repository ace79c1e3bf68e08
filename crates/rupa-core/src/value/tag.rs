//! Value Tag Definitions
//!
//! Defines the closed discriminant set for tagged values.
//! Tag byte values are a stable contract.

use serde::{Deserialize, Serialize};

/// Tagged value discriminants
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTag {
    Integer = 0x01,
    Float   = 0x02,
    Byte    = 0x03,
}

impl ValueTag {
    /// Convert raw byte to tag
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(ValueTag::Integer),
            0x02 => Some(ValueTag::Float),
            0x03 => Some(ValueTag::Byte),
            _ => None,
        }
    }
}
