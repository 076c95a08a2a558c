//! Generic XML tree facility.
//!
//! This layer knows nothing about the drawing schema. It provides:
//!
//! - a fixed namespace registry (`ns`)
//! - an arena-backed mutable element tree (`tree`)
//! - fragment parsing (`parse`) and serialization (`write`)
//!
//! The schema layer (`crate::schema`) and the element classes
//! (`crate::elements`) build their typed views on top of it.

pub mod ns;
pub mod parse;
pub mod tree;
pub mod write;

pub use ns::Ns;
pub use parse::{parse_fragment, parse_xml};
pub use tree::{NodeId, QName, XmlTree};
pub use write::write_xml;
