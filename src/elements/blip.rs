//! Image reference elements: `a:blip` and `pic:blipFill`.

use crate::error::Result;
use crate::schema::descriptors::{OptionalAttribute, StaticQName, ZeroOrOne};
use crate::schema::simple_types::RelationshipId;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, XmlTree};

/// `<a:blip>` element, specifies the image source and adjustments such as
/// alpha and tint.
///
/// The image itself lives in a separate package part; `r:embed` names the
/// relationship to an embedded part, `r:link` to an external one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blip(NodeId);

impl Blip {
    const EMBED: OptionalAttribute<RelationshipId> =
        OptionalAttribute::new(StaticQName::new(Ns::Relationships, "embed"));
    const LINK: OptionalAttribute<RelationshipId> =
        OptionalAttribute::new(StaticQName::new(Ns::Relationships, "link"));

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// Relationship id of the embedded image part, if any.
    pub fn embed(self, tree: &XmlTree) -> Result<Option<String>> {
        Self::EMBED.get(tree, self.0)
    }

    /// Set or remove the embedded-image relationship id.
    pub fn set_embed(self, tree: &mut XmlTree, rid: Option<&str>) -> Result<()> {
        let owned = rid.map(str::to_string);
        Self::EMBED.set(tree, self.0, owned.as_ref())
    }

    /// Relationship id of a linked external image, if any.
    pub fn link(self, tree: &XmlTree) -> Result<Option<String>> {
        Self::LINK.get(tree, self.0)
    }

    /// Set or remove the linked-image relationship id.
    pub fn set_link(self, tree: &mut XmlTree, rid: Option<&str>) -> Result<()> {
        let owned = rid.map(str::to_string);
        Self::LINK.set(tree, self.0, owned.as_ref())
    }
}

/// `<pic:blipFill>` element, specifies picture fill properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlipFill(NodeId);

impl BlipFill {
    const BLIP: ZeroOrOne = ZeroOrOne::new(
        Ns::DrawingMl,
        "blip",
        &[
            StaticQName::new(Ns::DrawingMl, "srcRect"),
            StaticQName::new(Ns::DrawingMl, "tile"),
            StaticQName::new(Ns::DrawingMl, "stretch"),
        ],
    );

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn blip(self, tree: &XmlTree) -> Option<Blip> {
        Self::BLIP.get(tree, self.0).map(Blip)
    }

    pub fn get_or_add_blip(self, tree: &mut XmlTree) -> Blip {
        Blip(Self::BLIP.get_or_add(tree, self.0))
    }
}
