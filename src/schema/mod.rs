//! Declarative schema binding: simple-type codecs and element descriptors.
//!
//! Element classes in `crate::elements` declare what the schema allows as
//! `const` descriptor tables from this module, and every typed accessor
//! routes through the shared generic descriptor methods. The descriptors
//! are process-wide and read-only; all state lives in the XML tree.

pub mod descriptors;
pub mod simple_types;

pub use descriptors::{
    OneAndOnlyOne, OptionalAttribute, RequiredAttribute, StaticQName, ZeroOrMore, ZeroOrOne,
};
pub use simple_types::{
    Coordinate, DrawingElementId, PositiveCoordinate, RelationshipId, SimpleType, XsdString,
    XsdToken,
};
