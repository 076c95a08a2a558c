//! Typed element classes for the drawing vocabulary.
//!
//! Each class is a `Copy` newtype over a [`crate::xml::NodeId`] whose
//! accessors are derived entirely from `const` descriptor tables; the
//! element classes hold no state of their own. Factory functions build the
//! detached fragments needed to insert a new picture:
//!
//! - [`Picture::build`]: a minimal viable `<pic:pic>` subtree
//! - [`Inline::build_with_new_picture`]: a flow-positioned container
//! - [`Anchor::build_with_new_picture`]: an absolutely positioned container

pub mod blip;
pub mod graphic;
pub mod inline;
pub mod picture;
pub mod transform;

pub use blip::{Blip, BlipFill};
pub use graphic::{Graphic, GraphicData};
pub use inline::{Anchor, Inline};
pub use picture::{NonVisualDrawingProps, Picture, PictureNonVisual};
pub use transform::{Extent, Point2D, ShapeProperties, Transform2D};
