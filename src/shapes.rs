//! Shape proxies and document-scoped shape collections.
//!
//! Proxies are thin read/write facades over one container element. They are
//! created on every access and hold nothing but the wrapped node, so they
//! are cheap to recreate and must not be cached across tree mutations.
//!
//! # Example
//!
//! ```
//! use drawml::shapes::InlineShapes;
//! use drawml::xml::parse_xml;
//!
//! let xml = r#"<w:body><w:p><w:r><w:drawing>
//!     <wp:inline>
//!       <wp:extent cx="914400" cy="914400"/>
//!       <wp:docPr id="1" name="Picture 1"/>
//!       <a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"/></a:graphic>
//!     </wp:inline>
//! </w:drawing></w:r></w:p></w:body>"#;
//! let (tree, body) = parse_xml(xml)?;
//!
//! let shapes = InlineShapes::new(body);
//! assert_eq!(shapes.len(&tree), 1);
//! let shape = shapes.get(&tree, 0)?;
//! assert_eq!(shape.width(&tree)?.value(), 914_400);
//! # Ok::<(), drawml::DrawmlError>(())
//! ```

use crate::elements::graphic::GraphicData;
use crate::elements::inline::{Anchor, Inline};
use crate::elements::transform::{Extent, ShapeProperties};
use crate::error::{DrawmlError, Result};
use crate::units::Emu;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, XmlTree};

/// Classification of the graphical object a container holds.
///
/// Derived from the graphic-data type URI, plus the link attribute of the
/// image reference for the picture case. A closed decision table: URIs
/// outside the known set classify as `NotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Picture whose image data is embedded in the package
    EmbeddedPicture,
    /// Picture referencing an external image via `r:link`
    LinkedPicture,
    /// Chart object
    Chart,
    /// SmartArt diagram
    SmartArt,
    /// Any other graphical object type
    NotImplemented,
}

fn classify(tree: &XmlTree, graphic_data: GraphicData) -> Result<ShapeKind> {
    let uri = graphic_data.uri(tree)?;
    if uri == Ns::Picture.uri() {
        if let Some(pic) = graphic_data.pic(tree) {
            if let Some(blip) = pic.blip_fill(tree)?.blip(tree) {
                if blip.link(tree)?.is_some() {
                    return Ok(ShapeKind::LinkedPicture);
                }
            }
        }
        return Ok(ShapeKind::EmbeddedPicture);
    }
    if uri == Ns::Chart.uri() {
        return Ok(ShapeKind::Chart);
    }
    if uri == Ns::Diagram.uri() {
        return Ok(ShapeKind::SmartArt);
    }
    Ok(ShapeKind::NotImplemented)
}

/// Write one extent dimension to the container AND the nested picture's
/// shape properties. The schema keeps the size in both places and consumers
/// read them independently, so the two must stay synchronized.
fn set_dimension(
    tree: &mut XmlTree,
    container_extent: Extent,
    graphic_data: GraphicData,
    value: Emu,
    set_container: fn(Extent, &mut XmlTree, Emu) -> Result<()>,
    set_sp_pr: fn(ShapeProperties, &mut XmlTree, Emu) -> Result<()>,
) -> Result<()> {
    set_container(container_extent, tree, value)?;
    let pic = graphic_data.pic(tree).ok_or_else(|| {
        DrawmlError::SchemaViolation(
            "cannot size a graphic container with no <pic:pic> element".to_string(),
        )
    })?;
    set_sp_pr(pic.sp_pr(tree)?, tree, value)
}

/// Proxy for a `<wp:inline>` element, the container for an inline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineShape {
    inline: Inline,
}

impl InlineShape {
    #[inline]
    pub fn new(inline: Inline) -> Self {
        Self { inline }
    }

    #[inline]
    pub fn from_node(node: NodeId) -> Self {
        Self {
            inline: Inline::new(node),
        }
    }

    /// The wrapped `<wp:inline>` element.
    #[inline]
    pub fn inline(&self) -> Inline {
        self.inline
    }

    /// Display width of this shape.
    pub fn width(&self, tree: &XmlTree) -> Result<Emu> {
        self.inline.extent(tree)?.cx(tree)
    }

    /// Set the display width on the container extent and the nested
    /// picture's shape properties.
    pub fn set_width(&self, tree: &mut XmlTree, cx: Emu) -> Result<()> {
        let extent = self.inline.extent(tree)?;
        let graphic_data = self.inline.graphic(tree)?.graphic_data(tree)?;
        set_dimension(
            tree,
            extent,
            graphic_data,
            cx,
            |e, t, v| e.set_cx(t, v),
            |s, t, v| s.set_cx(t, v),
        )
    }

    /// Display height of this shape.
    pub fn height(&self, tree: &XmlTree) -> Result<Emu> {
        self.inline.extent(tree)?.cy(tree)
    }

    /// Set the display height on the container extent and the nested
    /// picture's shape properties.
    pub fn set_height(&self, tree: &mut XmlTree, cy: Emu) -> Result<()> {
        let extent = self.inline.extent(tree)?;
        let graphic_data = self.inline.graphic(tree)?.graphic_data(tree)?;
        set_dimension(
            tree,
            extent,
            graphic_data,
            cy,
            |e, t, v| e.set_cy(t, v),
            |s, t, v| s.set_cy(t, v),
        )
    }

    /// Classify the graphical object this container holds.
    pub fn kind(&self, tree: &XmlTree) -> Result<ShapeKind> {
        classify(tree, self.inline.graphic(tree)?.graphic_data(tree)?)
    }
}

/// Proxy for a `<wp:anchor>` element, the container for a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorShape {
    anchor: Anchor,
}

impl AnchorShape {
    #[inline]
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor }
    }

    #[inline]
    pub fn from_node(node: NodeId) -> Self {
        Self {
            anchor: Anchor::new(node),
        }
    }

    /// The wrapped `<wp:anchor>` element.
    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Display width of this shape.
    pub fn width(&self, tree: &XmlTree) -> Result<Emu> {
        self.anchor.extent(tree)?.cx(tree)
    }

    /// Set the display width on the container extent and the nested
    /// picture's shape properties.
    pub fn set_width(&self, tree: &mut XmlTree, cx: Emu) -> Result<()> {
        let extent = self.anchor.extent(tree)?;
        let graphic_data = self.anchor.graphic(tree)?.graphic_data(tree)?;
        set_dimension(
            tree,
            extent,
            graphic_data,
            cx,
            |e, t, v| e.set_cx(t, v),
            |s, t, v| s.set_cx(t, v),
        )
    }

    /// Display height of this shape.
    pub fn height(&self, tree: &XmlTree) -> Result<Emu> {
        self.anchor.extent(tree)?.cy(tree)
    }

    /// Set the display height on the container extent and the nested
    /// picture's shape properties.
    pub fn set_height(&self, tree: &mut XmlTree, cy: Emu) -> Result<()> {
        let extent = self.anchor.extent(tree)?;
        let graphic_data = self.anchor.graphic(tree)?.graphic_data(tree)?;
        set_dimension(
            tree,
            extent,
            graphic_data,
            cy,
            |e, t, v| e.set_cy(t, v),
            |s, t, v| s.set_cy(t, v),
        )
    }

    /// Classify the graphical object this container holds.
    pub fn kind(&self, tree: &XmlTree) -> Result<ShapeKind> {
        classify(tree, self.anchor.graphic(tree)?.graphic_data(tree)?)
    }
}

/// Lazy document-order scan of a body subtree for drawing containers on the
/// paragraph → run → drawing → container path.
fn drawing_containers<'a>(
    tree: &'a XmlTree,
    body: NodeId,
    local: &'static str,
) -> impl Iterator<Item = NodeId> + 'a {
    tree.descendants(body)
        .filter(move |&p| tree.name(p).matches(Some(Ns::Wordprocessing), "p"))
        .flat_map(move |p| {
            tree.children(p)
                .iter()
                .copied()
                .filter(move |&r| tree.name(r).matches(Some(Ns::Wordprocessing), "r"))
                .flat_map(move |r| {
                    tree.children(r)
                        .iter()
                        .copied()
                        .filter(move |&d| {
                            tree.name(d).matches(Some(Ns::Wordprocessing), "drawing")
                        })
                        .flat_map(move |d| {
                            tree.children(d).iter().copied().filter(move |&c| {
                                tree.name(c).matches(Some(Ns::WpDrawing), local)
                            })
                        })
                })
        })
}

/// Sequence of the inline shapes in a document body, supporting length,
/// iteration, and indexed access.
///
/// The collection is a live view: length and contents reflect the tree at
/// each call, nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct InlineShapes {
    body: NodeId,
}

impl InlineShapes {
    /// Bind a collection to a document body element.
    #[inline]
    pub fn new(body: NodeId) -> Self {
        Self { body }
    }

    /// Count of inline shapes currently in the body.
    pub fn len(&self, tree: &XmlTree) -> usize {
        drawing_containers(tree, self.body, "inline").count()
    }

    pub fn is_empty(&self, tree: &XmlTree) -> bool {
        self.len(tree) == 0
    }

    /// Indexed access; fails with `IndexOutOfRange` past the end.
    pub fn get(&self, tree: &XmlTree, index: usize) -> Result<InlineShape> {
        drawing_containers(tree, self.body, "inline")
            .nth(index)
            .map(InlineShape::from_node)
            .ok_or_else(|| DrawmlError::IndexOutOfRange {
                index,
                len: self.len(tree),
            })
    }

    /// Iterate the shapes in document order. Restartable by calling again.
    pub fn iter<'a>(&self, tree: &'a XmlTree) -> impl Iterator<Item = InlineShape> + 'a {
        drawing_containers(tree, self.body, "inline").map(InlineShape::from_node)
    }
}

/// Sequence of the anchor (floating) shapes in a document body, supporting
/// length, iteration, and indexed access.
#[derive(Debug, Clone, Copy)]
pub struct AnchorShapes {
    body: NodeId,
}

impl AnchorShapes {
    /// Bind a collection to a document body element.
    #[inline]
    pub fn new(body: NodeId) -> Self {
        Self { body }
    }

    /// Count of anchor shapes currently in the body.
    pub fn len(&self, tree: &XmlTree) -> usize {
        drawing_containers(tree, self.body, "anchor").count()
    }

    pub fn is_empty(&self, tree: &XmlTree) -> bool {
        self.len(tree) == 0
    }

    /// Indexed access; fails with `IndexOutOfRange` past the end.
    pub fn get(&self, tree: &XmlTree, index: usize) -> Result<AnchorShape> {
        drawing_containers(tree, self.body, "anchor")
            .nth(index)
            .map(AnchorShape::from_node)
            .ok_or_else(|| DrawmlError::IndexOutOfRange {
                index,
                len: self.len(tree),
            })
    }

    /// Iterate the shapes in document order. Restartable by calling again.
    pub fn iter<'a>(&self, tree: &'a XmlTree) -> impl Iterator<Item = AnchorShape> + 'a {
        drawing_containers(tree, self.body, "anchor").map(AnchorShape::from_node)
    }
}
