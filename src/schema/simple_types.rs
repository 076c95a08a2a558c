//! Simple-type codecs for attribute values.
//!
//! Each codec converts between XML attribute text and a typed value.
//! `decode` rejects text outside the type's lexical/value space; `encode`
//! rejects out-of-space values before they reach the document, so
//! `decode(encode(v)) == v` holds for every value in the value space.

use crate::error::{DrawmlError, Result};
use crate::units::Emu;

/// A codec between attribute text and a typed value.
pub trait SimpleType {
    /// The decoded value type.
    type Value;

    /// Schema name of the type, used in error messages.
    const NAME: &'static str;

    /// Decode attribute text into a typed value.
    fn decode(text: &str) -> Result<Self::Value>;

    /// Encode a typed value as attribute text.
    fn encode(value: &Self::Value) -> Result<String>;
}

#[inline]
fn invalid(expected: &'static str, got: impl Into<String>) -> DrawmlError {
    DrawmlError::InvalidValue {
        expected,
        got: got.into(),
    }
}

#[inline]
fn format_i64(value: i64) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(value).to_string()
}

/// Signed EMU coordinate (`ST_Coordinate`).
pub struct Coordinate;

impl SimpleType for Coordinate {
    type Value = Emu;
    const NAME: &'static str = "ST_Coordinate";

    fn decode(text: &str) -> Result<Emu> {
        text.parse::<i64>()
            .map(Emu)
            .map_err(|_| invalid(Self::NAME, text))
    }

    fn encode(value: &Emu) -> Result<String> {
        Ok(format_i64(value.value()))
    }
}

/// Non-negative EMU coordinate (`ST_PositiveCoordinate`).
pub struct PositiveCoordinate;

impl SimpleType for PositiveCoordinate {
    type Value = Emu;
    const NAME: &'static str = "ST_PositiveCoordinate";

    fn decode(text: &str) -> Result<Emu> {
        let value = text
            .parse::<i64>()
            .map_err(|_| invalid(Self::NAME, text))?;
        if value < 0 {
            return Err(invalid(Self::NAME, text));
        }
        Ok(Emu(value))
    }

    fn encode(value: &Emu) -> Result<String> {
        if value.value() < 0 {
            return Err(invalid(Self::NAME, value.value().to_string()));
        }
        Ok(format_i64(value.value()))
    }
}

/// Drawing element id (`ST_DrawingElementId`, an `xsd:unsignedInt`).
pub struct DrawingElementId;

impl SimpleType for DrawingElementId {
    type Value = u32;
    const NAME: &'static str = "ST_DrawingElementId";

    fn decode(text: &str) -> Result<u32> {
        text.parse::<u32>().map_err(|_| invalid(Self::NAME, text))
    }

    fn encode(value: &u32) -> Result<String> {
        let mut buf = itoa::Buffer::new();
        Ok(buf.format(*value).to_string())
    }
}

/// Opaque relationship id (`ST_RelationshipId`), e.g. `rId7`.
///
/// No structure is assumed beyond being non-empty; resolution is the
/// package layer's concern.
pub struct RelationshipId;

impl SimpleType for RelationshipId {
    type Value = String;
    const NAME: &'static str = "ST_RelationshipId";

    fn decode(text: &str) -> Result<String> {
        if text.is_empty() {
            return Err(invalid(Self::NAME, text));
        }
        Ok(text.to_string())
    }

    fn encode(value: &String) -> Result<String> {
        if value.is_empty() {
            return Err(invalid(Self::NAME, value.as_str()));
        }
        Ok(value.clone())
    }
}

/// Unrestricted string (`xsd:string`).
pub struct XsdString;

impl SimpleType for XsdString {
    type Value = String;
    const NAME: &'static str = "xsd:string";

    fn decode(text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn encode(value: &String) -> Result<String> {
        Ok(value.clone())
    }
}

/// Whitespace-collapsed token (`xsd:token`).
///
/// Rejects the empty string, tab/newline characters, leading or trailing
/// spaces, and internal runs of spaces.
pub struct XsdToken;

impl XsdToken {
    fn is_valid(text: &str) -> bool {
        !text.is_empty()
            && !text.contains(['\t', '\n', '\r'])
            && !text.starts_with(' ')
            && !text.ends_with(' ')
            && !text.contains("  ")
    }
}

impl SimpleType for XsdToken {
    type Value = String;
    const NAME: &'static str = "xsd:token";

    fn decode(text: &str) -> Result<String> {
        if !Self::is_valid(text) {
            return Err(invalid(Self::NAME, text));
        }
        Ok(text.to_string())
    }

    fn encode(value: &String) -> Result<String> {
        if !Self::is_valid(value) {
            return Err(invalid(Self::NAME, value.as_str()));
        }
        Ok(value.clone())
    }
}
