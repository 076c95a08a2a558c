//! Drawml - typed DrawingML shape element bindings for WordprocessingML
//! documents.
//!
//! This library provides strongly-typed accessors over the drawing/shape
//! subset of the WordprocessingML schema: inline and anchored picture
//! containers, the picture element tree beneath them, and the transforms
//! and extents that size them. It is the drawing layer of a document
//! toolchain; packaging, relationship resolution, and the rest of the
//! document body belong to the surrounding document layer.
//!
//! # Architecture
//!
//! The crate is organized into layers, leaf to root:
//!
//! 1. **XML tree** (`xml`): a mutable, namespace-aware element arena with
//!    fragment parsing and serialization
//! 2. **Schema binding** (`schema`): simple-type codecs plus declarative
//!    attribute/child descriptors with cardinality and ordering rules
//! 3. **Element classes** (`elements`): one typed wrapper per element in
//!    the drawing vocabulary, and factories for new picture fragments
//! 4. **Shape proxies** (`shapes`): document-level width/height/type
//!    facades and body-scoped shape collections
//!
//! # Example
//!
//! ```
//! use drawml::elements::Inline;
//! use drawml::shapes::InlineShape;
//! use drawml::units::Emu;
//! use drawml::xml::XmlTree;
//!
//! let mut tree = XmlTree::new();
//!
//! // Build a ready-to-insert inline picture container
//! let inline = Inline::build_with_new_picture(
//!     &mut tree,
//!     1,                      // shape id
//!     "rId7",                 // image relationship id
//!     "photo.png",            // display filename
//!     Emu::from_inches(2),    // width
//!     Emu::from_inches(1),    // height
//! )?;
//!
//! // Resize it through the proxy; both stored extents stay in sync
//! let shape = InlineShape::new(inline);
//! shape.set_width(&mut tree, Emu::from_inches(3))?;
//! assert_eq!(shape.width(&tree)?, Emu::from_inches(3));
//! # Ok::<(), drawml::DrawmlError>(())
//! ```

pub mod elements;
pub mod error;
pub mod schema;
pub mod shapes;
pub mod units;
pub mod xml;

pub use error::{DrawmlError, Result};
pub use shapes::{AnchorShape, AnchorShapes, InlineShape, InlineShapes, ShapeKind};
pub use units::Emu;
pub use xml::{NodeId, XmlTree, parse_xml, write_xml};
