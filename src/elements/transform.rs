//! Transform and extent elements: `a:xfrm`, `a:off`, `a:ext`/`wp:extent`,
//! `pic:spPr`.
//!
//! Width and height live at the bottom of a `spPr → xfrm → ext` chain that
//! may be partially absent on a freshly created shape. Readers surface that
//! as `None` (not yet sized, distinct from zero-sized); writers create the
//! missing links of the chain on demand.

use crate::error::Result;
use crate::schema::descriptors::{RequiredAttribute, StaticQName, ZeroOrOne};
use crate::schema::simple_types::{Coordinate, PositiveCoordinate};
use crate::units::Emu;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, XmlTree};

/// `<wp:extent>` / `<a:ext>` element, the size of a drawing.
///
/// Both elements share the `cx`/`cy` positive-coordinate attributes, so one
/// wrapper covers both qualified names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent(NodeId);

impl Extent {
    const CX: RequiredAttribute<PositiveCoordinate> =
        RequiredAttribute::new(StaticQName::unqualified("cx"));
    const CY: RequiredAttribute<PositiveCoordinate> =
        RequiredAttribute::new(StaticQName::unqualified("cy"));

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    /// Get the extent width.
    pub fn cx(self, tree: &XmlTree) -> Result<Emu> {
        Self::CX.get(tree, self.0)
    }

    /// Set the extent width. Rejects negative values.
    pub fn set_cx(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        Self::CX.set(tree, self.0, &value)
    }

    /// Get the extent height.
    pub fn cy(self, tree: &XmlTree) -> Result<Emu> {
        Self::CY.get(tree, self.0)
    }

    /// Set the extent height. Rejects negative values.
    pub fn set_cy(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        Self::CY.set(tree, self.0, &value)
    }
}

/// `<a:off>` element, a signed x/y offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point2D(NodeId);

impl Point2D {
    const X: RequiredAttribute<Coordinate> = RequiredAttribute::new(StaticQName::unqualified("x"));
    const Y: RequiredAttribute<Coordinate> = RequiredAttribute::new(StaticQName::unqualified("y"));

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn x(self, tree: &XmlTree) -> Result<Emu> {
        Self::X.get(tree, self.0)
    }

    pub fn set_x(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        Self::X.set(tree, self.0, &value)
    }

    pub fn y(self, tree: &XmlTree) -> Result<Emu> {
        Self::Y.get(tree, self.0)
    }

    pub fn set_y(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        Self::Y.set(tree, self.0, &value)
    }
}

/// `<a:xfrm>` element, the 2D transform of a picture container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transform2D(NodeId);

impl Transform2D {
    const OFF: ZeroOrOne = ZeroOrOne::new(
        Ns::DrawingMl,
        "off",
        &[StaticQName::new(Ns::DrawingMl, "ext")],
    );
    const EXT: ZeroOrOne = ZeroOrOne::new(Ns::DrawingMl, "ext", &[]);

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn off(self, tree: &XmlTree) -> Option<Point2D> {
        Self::OFF.get(tree, self.0).map(Point2D)
    }

    pub fn get_or_add_off(self, tree: &mut XmlTree) -> Point2D {
        Point2D(Self::OFF.get_or_add(tree, self.0))
    }

    pub fn ext(self, tree: &XmlTree) -> Option<Extent> {
        Self::EXT.get(tree, self.0).map(Extent)
    }

    pub fn get_or_add_ext(self, tree: &mut XmlTree) -> Extent {
        Extent(Self::EXT.get_or_add(tree, self.0))
    }

    /// Width, or `None` when the `a:ext` child is absent.
    pub fn cx(self, tree: &XmlTree) -> Result<Option<Emu>> {
        match self.ext(tree) {
            Some(ext) => ext.cx(tree).map(Some),
            None => Ok(None),
        }
    }

    /// Set the width, creating the `a:ext` child if absent.
    pub fn set_cx(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        self.get_or_add_ext(tree).set_cx(tree, value)
    }

    /// Height, or `None` when the `a:ext` child is absent.
    pub fn cy(self, tree: &XmlTree) -> Result<Option<Emu>> {
        match self.ext(tree) {
            Some(ext) => ext.cy(tree).map(Some),
            None => Ok(None),
        }
    }

    /// Set the height, creating the `a:ext` child if absent.
    pub fn set_cy(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        self.get_or_add_ext(tree).set_cy(tree, value)
    }
}

/// `<pic:spPr>` element, size and shape of the picture container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeProperties(NodeId);

impl ShapeProperties {
    const XFRM: ZeroOrOne = ZeroOrOne::new(
        Ns::DrawingMl,
        "xfrm",
        &[
            StaticQName::new(Ns::DrawingMl, "custGeom"),
            StaticQName::new(Ns::DrawingMl, "prstGeom"),
            StaticQName::new(Ns::DrawingMl, "ln"),
            StaticQName::new(Ns::DrawingMl, "effectLst"),
            StaticQName::new(Ns::DrawingMl, "effectDag"),
            StaticQName::new(Ns::DrawingMl, "scene3d"),
            StaticQName::new(Ns::DrawingMl, "sp3d"),
            StaticQName::new(Ns::DrawingMl, "extLst"),
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

    pub fn xfrm(self, tree: &XmlTree) -> Option<Transform2D> {
        Self::XFRM.get(tree, self.0).map(Transform2D)
    }

    pub fn get_or_add_xfrm(self, tree: &mut XmlTree) -> Transform2D {
        Transform2D(Self::XFRM.get_or_add(tree, self.0))
    }

    /// Shape width, or `None` when the transform chain is absent.
    pub fn cx(self, tree: &XmlTree) -> Result<Option<Emu>> {
        match self.xfrm(tree) {
            Some(xfrm) => xfrm.cx(tree),
            None => Ok(None),
        }
    }

    /// Set the shape width, creating `a:xfrm` and `a:ext` as needed.
    pub fn set_cx(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        self.get_or_add_xfrm(tree).set_cx(tree, value)
    }

    /// Shape height, or `None` when the transform chain is absent.
    pub fn cy(self, tree: &XmlTree) -> Result<Option<Emu>> {
        match self.xfrm(tree) {
            Some(xfrm) => xfrm.cy(tree),
            None => Ok(None),
        }
    }

    /// Set the shape height, creating `a:xfrm` and `a:ext` as needed.
    pub fn set_cy(self, tree: &mut XmlTree, value: Emu) -> Result<()> {
        self.get_or_add_xfrm(tree).set_cy(tree, value)
    }
}
