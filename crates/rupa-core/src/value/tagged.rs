//! Tagged Value Representation
//!
//! A single 64-bit storage slot plus a discriminant naming which
//! interpretation of the slot is currently valid. Reads are checked against
//! the stored tag; bit reinterpretation is a separate, opt-in operation and
//! never happens implicitly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tag::ValueTag;
use crate::error::{RupaError, RupaResult};

/// Typed read-out of a tagged value slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload {
    Integer(i64),
    Float(f64),
    Byte(u8),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Integer(v) => write!(f, "{}", v),
            Payload::Float(v) => write!(f, "{}", v),
            Payload::Byte(v) => write!(f, "{}", v),
        }
    }
}

/// Tagged value: one slot, exactly one valid interpretation at a time.
/// Copy semantics; rebinding never aliases, and tag and payload are only
/// ever replaced together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedValue {
    tag: ValueTag,
    bits: u64,
}

impl TaggedValue {
    /// Construct from a tag and raw slot bits. Never fails; for `Byte` only
    /// the low 8 bits are significant and the rest are cleared.
    pub fn make(tag: ValueTag, raw_bits: u64) -> Self {
        let bits = match tag {
            ValueTag::Byte => raw_bits & 0xFF,
            ValueTag::Integer | ValueTag::Float => raw_bits,
        };
        TaggedValue { tag, bits }
    }

    /// Construct an integer value
    pub fn integer(v: i64) -> Self {
        TaggedValue {
            tag: ValueTag::Integer,
            bits: v as u64,
        }
    }

    /// Construct a float value
    pub fn float(v: f64) -> Self {
        TaggedValue {
            tag: ValueTag::Float,
            bits: v.to_bits(),
        }
    }

    /// Construct a byte value
    pub fn byte(v: u8) -> Self {
        TaggedValue {
            tag: ValueTag::Byte,
            bits: v as u64,
        }
    }

    /// Currently valid interpretation
    pub fn tag(&self) -> ValueTag {
        self.tag
    }

    /// Raw slot bits, uninterpreted
    pub fn raw_bits(&self) -> u64 {
        self.bits
    }

    /// Read the slot under `as_tag`. Bit-exact when `as_tag` matches the
    /// stored tag; `TagMismatch` otherwise.
    pub fn get(&self, as_tag: ValueTag) -> RupaResult<Payload> {
        if as_tag != self.tag {
            return Err(RupaError::TagMismatch {
                requested: as_tag,
                stored: self.tag,
            });
        }
        Ok(match self.tag {
            ValueTag::Integer => Payload::Integer(self.bits as i64),
            ValueTag::Float => Payload::Float(f64::from_bits(self.bits)),
            ValueTag::Byte => Payload::Byte(self.bits as u8),
        })
    }

    /// Read as integer (checked)
    pub fn as_integer(&self) -> RupaResult<i64> {
        match self.tag {
            ValueTag::Integer => Ok(self.bits as i64),
            stored => Err(RupaError::TagMismatch {
                requested: ValueTag::Integer,
                stored,
            }),
        }
    }

    /// Read as float (checked)
    pub fn as_float(&self) -> RupaResult<f64> {
        match self.tag {
            ValueTag::Float => Ok(f64::from_bits(self.bits)),
            stored => Err(RupaError::TagMismatch {
                requested: ValueTag::Float,
                stored,
            }),
        }
    }

    /// Read as byte (checked)
    pub fn as_byte(&self) -> RupaResult<u8> {
        match self.tag {
            ValueTag::Byte => Ok(self.bits as u8),
            stored => Err(RupaError::TagMismatch {
                requested: ValueTag::Byte,
                stored,
            }),
        }
    }

    /// Replace tag and payload together, producing a new value.
    /// The payload is never replaced alone.
    pub fn set(self, tag: ValueTag, raw_bits: u64) -> Self {
        TaggedValue::make(tag, raw_bits)
    }

    /// Explicit bit reinterpretation under a different tag. This is the only
    /// operation that carries the slot across tags; a `Byte` target keeps
    /// the low 8 bits.
    pub fn reinterpret(&self, as_tag: ValueTag) -> TaggedValue {
        TaggedValue::make(as_tag, self.bits)
    }
}
