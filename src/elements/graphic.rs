//! Graphical-object container elements: `a:graphic` and `a:graphicData`.

use crate::elements::picture::Picture;
use crate::error::Result;
use crate::schema::descriptors::{OneAndOnlyOne, RequiredAttribute, StaticQName, ZeroOrOne};
use crate::schema::simple_types::XsdToken;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, XmlTree};

/// `<a:graphic>` element, container for a DrawingML object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Graphic(NodeId);

impl Graphic {
    const GRAPHIC_DATA: OneAndOnlyOne = OneAndOnlyOne::new(Ns::DrawingMl, "graphicData");

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn graphic_data(self, tree: &XmlTree) -> Result<GraphicData> {
        Self::GRAPHIC_DATA.get(tree, self.0).map(GraphicData)
    }
}

/// `<a:graphicData>` element, container for the XML of a DrawingML object.
///
/// The `uri` attribute identifies which kind of graphical object the
/// container holds (picture, chart, diagram).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicData(NodeId);

impl GraphicData {
    const URI: RequiredAttribute<XsdToken> =
        RequiredAttribute::new(StaticQName::unqualified("uri"));
    const PIC: ZeroOrOne = ZeroOrOne::new(Ns::Picture, "pic", &[]);

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// The graphic-data type URI.
    pub fn uri(self, tree: &XmlTree) -> Result<String> {
        Self::URI.get(tree, self.0)
    }

    pub fn set_uri(self, tree: &mut XmlTree, uri: &str) -> Result<()> {
        Self::URI.set(tree, self.0, &uri.to_string())
    }

    /// The contained picture element, if any.
    pub fn pic(self, tree: &XmlTree) -> Option<Picture> {
        Self::PIC.get(tree, self.0).map(Picture::new)
    }

    /// Insert a picture element at its schema position.
    pub fn insert_pic(self, tree: &mut XmlTree, pic: Picture) {
        Self::PIC.insert(tree, self.0, pic.node());
    }
}
