//! Drawing container elements: `wp:inline` and `wp:anchor`.
//!
//! An inline container flows with the surrounding text; an anchor container
//! is positioned independently with explicit offsets and wrap behavior. Both
//! wrap an `a:graphic` holding the actual graphical object.
//!
//! The factories here reproduce the fragments Word itself accepts for a
//! newly inserted picture, including the anchor's fixed positioning and
//! relative-sizing defaults, which consuming applications expect verbatim.

use crate::elements::graphic::Graphic;
use crate::elements::picture::{NonVisualDrawingProps, Picture};
use crate::elements::transform::Extent;
use crate::error::Result;
use crate::schema::descriptors::OneAndOnlyOne;
use crate::units::Emu;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, QName, XmlTree};

/// `<wp:inline>` element, container for an inline shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inline(NodeId);

/// `<wp:anchor>` element, container for a floating shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor(NodeId);

const EXTENT: OneAndOnlyOne = OneAndOnlyOne::new(Ns::WpDrawing, "extent");
const DOC_PR: OneAndOnlyOne = OneAndOnlyOne::new(Ns::WpDrawing, "docPr");
const GRAPHIC: OneAndOnlyOne = OneAndOnlyOne::new(Ns::DrawingMl, "graphic");

impl Inline {
    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn extent(self, tree: &XmlTree) -> Result<Extent> {
        EXTENT.get(tree, self.0).map(Extent::new)
    }

    pub fn doc_pr(self, tree: &XmlTree) -> Result<NonVisualDrawingProps> {
        DOC_PR.get(tree, self.0).map(NonVisualDrawingProps::new)
    }

    pub fn graphic(self, tree: &XmlTree) -> Result<Graphic> {
        GRAPHIC.get(tree, self.0).map(Graphic::new)
    }

    /// Build a new detached `<wp:inline>` wrapping an existing picture.
    pub fn build(
        tree: &mut XmlTree,
        cx: Emu,
        cy: Emu,
        shape_id: u32,
        pic: Picture,
    ) -> Result<Inline> {
        let node = new_inline_skeleton(tree);
        let inline = Inline(node);
        let extent = inline.extent(tree)?;
        let doc_pr = inline.doc_pr(tree)?;
        populate_container(tree, extent, doc_pr, cx, cy, shape_id)?;
        let graphic_data = inline.graphic(tree)?.graphic_data(tree)?;
        graphic_data.set_uri(tree, Ns::Picture.uri())?;
        graphic_data.insert_pic(tree, pic);
        Ok(inline)
    }

    /// Build a new `<wp:inline>` containing a newly built picture element.
    ///
    /// This is the one-call path for inserting a picture: it allocates the
    /// `pic:pic` subtree, wraps it in an inline container, and returns the
    /// ready-to-insert container.
    pub fn build_with_new_picture(
        tree: &mut XmlTree,
        shape_id: u32,
        rid: &str,
        filename: &str,
        cx: Emu,
        cy: Emu,
    ) -> Result<Inline> {
        // Word doesn't seem to use the picture id, but does not omit it
        let pic_id = 0;
        let pic = Picture::build(tree, pic_id, filename, rid, cx, cy)?;
        Self::build(tree, cx, cy, shape_id, pic)
    }
}

impl Anchor {
    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn extent(self, tree: &XmlTree) -> Result<Extent> {
        EXTENT.get(tree, self.0).map(Extent::new)
    }

    pub fn doc_pr(self, tree: &XmlTree) -> Result<NonVisualDrawingProps> {
        DOC_PR.get(tree, self.0).map(NonVisualDrawingProps::new)
    }

    pub fn graphic(self, tree: &XmlTree) -> Result<Graphic> {
        GRAPHIC.get(tree, self.0).map(Graphic::new)
    }

    /// Build a new detached `<wp:anchor>` wrapping an existing picture.
    pub fn build(
        tree: &mut XmlTree,
        cx: Emu,
        cy: Emu,
        shape_id: u32,
        pic: Picture,
    ) -> Result<Anchor> {
        let node = new_anchor_skeleton(tree);
        let anchor = Anchor(node);
        let extent = anchor.extent(tree)?;
        let doc_pr = anchor.doc_pr(tree)?;
        populate_container(tree, extent, doc_pr, cx, cy, shape_id)?;
        let graphic_data = anchor.graphic(tree)?.graphic_data(tree)?;
        graphic_data.set_uri(tree, Ns::Picture.uri())?;
        graphic_data.insert_pic(tree, pic);
        Ok(anchor)
    }

    /// Build a new `<wp:anchor>` containing a newly built picture element.
    pub fn build_with_new_picture(
        tree: &mut XmlTree,
        shape_id: u32,
        rid: &str,
        filename: &str,
        cx: Emu,
        cy: Emu,
    ) -> Result<Anchor> {
        let pic_id = 0;
        let pic = Picture::build(tree, pic_id, filename, rid, cx, cy)?;
        Self::build(tree, cx, cy, shape_id, pic)
    }
}

fn populate_container(
    tree: &mut XmlTree,
    extent: Extent,
    doc_pr: NonVisualDrawingProps,
    cx: Emu,
    cy: Emu,
    shape_id: u32,
) -> Result<()> {
    extent.set_cx(tree, cx)?;
    extent.set_cy(tree, cy)?;
    doc_pr.set_id(tree, shape_id)?;
    doc_pr.set_name(tree, &format!("Picture {shape_id}"))
}

fn unqualified_attr(tree: &mut XmlTree, node: NodeId, local: &str, value: &str) {
    tree.set_attr(node, QName::unqualified(local), value);
}

/// Bare inline template: extent and docPr at defaults until populated.
fn new_inline_skeleton(tree: &mut XmlTree) -> NodeId {
    let inline = tree.create_element(Ns::WpDrawing, "inline");
    tree.declare_namespaces(
        inline,
        &[Ns::WpDrawing, Ns::DrawingMl, Ns::Picture, Ns::Relationships],
    );

    let extent = tree.create_element(Ns::WpDrawing, "extent");
    unqualified_attr(tree, extent, "cx", "914400");
    unqualified_attr(tree, extent, "cy", "914400");
    tree.append_child(inline, extent);

    let doc_pr = tree.create_element(Ns::WpDrawing, "docPr");
    unqualified_attr(tree, doc_pr, "id", "666");
    unqualified_attr(tree, doc_pr, "name", "unnamed");
    tree.append_child(inline, doc_pr);

    append_graphic_frame_pr(tree, inline);
    append_graphic(tree, inline);
    inline
}

/// Bare anchor template.
///
/// The attribute and child defaults (distances, disabled simple
/// positioning, `behindDoc`, `allowOverlap`, zeroed relative sizing) are
/// the exact values consuming applications round-trip; do not reformat
/// them.
fn new_anchor_skeleton(tree: &mut XmlTree) -> NodeId {
    let anchor = tree.create_element(Ns::WpDrawing, "anchor");
    unqualified_attr(tree, anchor, "distT", "0");
    unqualified_attr(tree, anchor, "distB", "0");
    unqualified_attr(tree, anchor, "distL", "114300");
    unqualified_attr(tree, anchor, "distR", "114300");
    unqualified_attr(tree, anchor, "simplePos", "0");
    unqualified_attr(tree, anchor, "behindDoc", "1");
    unqualified_attr(tree, anchor, "locked", "0");
    unqualified_attr(tree, anchor, "layoutInCell", "1");
    unqualified_attr(tree, anchor, "allowOverlap", "1");
    tree.declare_namespaces(
        anchor,
        &[
            Ns::WpDrawing,
            Ns::DrawingMl,
            Ns::Picture,
            Ns::Relationships,
            Ns::Wp14,
        ],
    );

    let simple_pos = tree.create_element(Ns::WpDrawing, "simplePos");
    unqualified_attr(tree, simple_pos, "x", "0");
    unqualified_attr(tree, simple_pos, "y", "0");
    tree.append_child(anchor, simple_pos);

    let position_h = tree.create_element(Ns::WpDrawing, "positionH");
    unqualified_attr(tree, position_h, "relativeFrom", "column");
    let offset_h = tree.create_element(Ns::WpDrawing, "posOffset");
    tree.set_text(offset_h, "0");
    tree.append_child(position_h, offset_h);
    tree.append_child(anchor, position_h);

    let position_v = tree.create_element(Ns::WpDrawing, "positionV");
    unqualified_attr(tree, position_v, "relativeFrom", "paragraph");
    let offset_v = tree.create_element(Ns::WpDrawing, "posOffset");
    tree.set_text(offset_v, "0");
    tree.append_child(position_v, offset_v);
    tree.append_child(anchor, position_v);

    let extent = tree.create_element(Ns::WpDrawing, "extent");
    unqualified_attr(tree, extent, "cx", "6904934");
    unqualified_attr(tree, extent, "cy", "10033000");
    tree.append_child(anchor, extent);

    let effect_extent = tree.create_element(Ns::WpDrawing, "effectExtent");
    unqualified_attr(tree, effect_extent, "l", "0");
    unqualified_attr(tree, effect_extent, "t", "0");
    unqualified_attr(tree, effect_extent, "r", "4445");
    unqualified_attr(tree, effect_extent, "b", "0");
    tree.append_child(anchor, effect_extent);

    let wrap_none = tree.create_element(Ns::WpDrawing, "wrapNone");
    tree.append_child(anchor, wrap_none);

    let doc_pr = tree.create_element(Ns::WpDrawing, "docPr");
    unqualified_attr(tree, doc_pr, "id", "666");
    unqualified_attr(tree, doc_pr, "name", "unnamed");
    tree.append_child(anchor, doc_pr);

    append_graphic_frame_pr(tree, anchor);
    append_graphic(tree, anchor);

    let size_rel_h = tree.create_element(Ns::Wp14, "sizeRelH");
    unqualified_attr(tree, size_rel_h, "relativeFrom", "page");
    let pct_width = tree.create_element(Ns::Wp14, "pctWidth");
    tree.set_text(pct_width, "0");
    tree.append_child(size_rel_h, pct_width);
    tree.append_child(anchor, size_rel_h);

    let size_rel_v = tree.create_element(Ns::Wp14, "sizeRelV");
    unqualified_attr(tree, size_rel_v, "relativeFrom", "page");
    let pct_height = tree.create_element(Ns::Wp14, "pctHeight");
    tree.set_text(pct_height, "0");
    tree.append_child(size_rel_v, pct_height);
    tree.append_child(anchor, size_rel_v);

    anchor
}

fn append_graphic_frame_pr(tree: &mut XmlTree, container: NodeId) {
    let frame_pr = tree.create_element(Ns::WpDrawing, "cNvGraphicFramePr");
    let locks = tree.create_element(Ns::DrawingMl, "graphicFrameLocks");
    unqualified_attr(tree, locks, "noChangeAspect", "1");
    tree.append_child(frame_pr, locks);
    tree.append_child(container, frame_pr);
}

fn append_graphic(tree: &mut XmlTree, container: NodeId) {
    let graphic = tree.create_element(Ns::DrawingMl, "graphic");
    let graphic_data = tree.create_element(Ns::DrawingMl, "graphicData");
    tree.append_child(graphic, graphic_data);
    tree.append_child(container, graphic);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_factory_contents() {
        let mut tree = XmlTree::new();
        let inline = Inline::build_with_new_picture(
            &mut tree,
            7,
            "rId4",
            "photo.jpg",
            Emu(1_000_000),
            Emu(2_000_000),
        )
        .unwrap();

        let extent = inline.extent(&tree).unwrap();
        assert_eq!(extent.cx(&tree).unwrap(), Emu(1_000_000));
        assert_eq!(extent.cy(&tree).unwrap(), Emu(2_000_000));

        let doc_pr = inline.doc_pr(&tree).unwrap();
        assert_eq!(doc_pr.id(&tree).unwrap(), 7);
        assert_eq!(doc_pr.name(&tree).unwrap(), "Picture 7");

        let graphic_data = inline.graphic(&tree).unwrap().graphic_data(&tree).unwrap();
        assert_eq!(graphic_data.uri(&tree).unwrap(), Ns::Picture.uri());

        let pic = graphic_data.pic(&tree).unwrap();
        let blip = pic.blip_fill(&tree).unwrap().blip(&tree).unwrap();
        assert_eq!(blip.embed(&tree).unwrap(), Some("rId4".to_string()));
        assert_eq!(
            pic.nv_pic_pr(&tree)
                .unwrap()
                .c_nv_pr(&tree)
                .unwrap()
                .name(&tree)
                .unwrap(),
            "photo.jpg"
        );
    }

    #[test]
    fn test_anchor_factory_defaults() {
        let mut tree = XmlTree::new();
        let anchor =
            Anchor::build_with_new_picture(&mut tree, 3, "rId9", "img.png", Emu(10), Emu(20))
                .unwrap();
        let node = anchor.node();

        assert_eq!(tree.attr(node, None, "distT"), Some("0"));
        assert_eq!(tree.attr(node, None, "distL"), Some("114300"));
        assert_eq!(tree.attr(node, None, "simplePos"), Some("0"));
        assert_eq!(tree.attr(node, None, "behindDoc"), Some("1"));
        assert_eq!(tree.attr(node, None, "allowOverlap"), Some("1"));

        let xml = crate::xml::write::write_xml(&tree, node);
        assert!(xml.contains("<wp:simplePos x=\"0\" y=\"0\"/>"));
        assert!(xml.contains(
            "<wp:positionH relativeFrom=\"column\"><wp:posOffset>0</wp:posOffset></wp:positionH>"
        ));
        assert!(xml.contains(
            "<wp:positionV relativeFrom=\"paragraph\"><wp:posOffset>0</wp:posOffset></wp:positionV>"
        ));
        assert!(xml.contains("<wp:effectExtent l=\"0\" t=\"0\" r=\"4445\" b=\"0\"/>"));
        assert!(xml.contains("<wp:wrapNone/>"));
        assert!(xml.contains(
            "<wp14:sizeRelH relativeFrom=\"page\"><wp14:pctWidth>0</wp14:pctWidth></wp14:sizeRelH>"
        ));
        assert!(xml.contains(
            "<wp14:sizeRelV relativeFrom=\"page\"><wp14:pctHeight>0</wp14:pctHeight></wp14:sizeRelV>"
        ));

        // caller-supplied extent replaces the template default
        assert_eq!(anchor.extent(&tree).unwrap().cx(&tree).unwrap(), Emu(10));
        assert_eq!(anchor.extent(&tree).unwrap().cy(&tree).unwrap(), Emu(20));
    }

    #[test]
    fn test_pic_inserted_into_graphic_data() {
        let mut tree = XmlTree::new();
        let pic = Picture::build(&mut tree, 0, "a.png", "rId1", Emu(1), Emu(1)).unwrap();
        let inline = Inline::build(&mut tree, Emu(1), Emu(1), 1, pic).unwrap();

        let graphic_data = inline.graphic(&tree).unwrap().graphic_data(&tree).unwrap();
        assert_eq!(graphic_data.pic(&tree).unwrap(), pic);
        assert_eq!(tree.children(graphic_data.node()), &[pic.node()]);
    }
}
