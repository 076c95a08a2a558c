//! Picture container elements: `pic:pic`, `pic:nvPicPr`, and the shared
//! non-visual drawing properties (`pic:cNvPr` / `wp:docPr`).

use crate::elements::blip::BlipFill;
use crate::elements::transform::ShapeProperties;
use crate::error::Result;
use crate::schema::descriptors::{
    OneAndOnlyOne, OptionalAttribute, RequiredAttribute, StaticQName,
};
use crate::schema::simple_types::{DrawingElementId, XsdString};
use crate::units::Emu;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, QName, XmlTree};

/// Non-visual drawing properties, used for `<wp:docPr>` and `<pic:cNvPr>`.
///
/// Both elements carry the same attribute set: a numeric drawing id, a
/// display name, and optional alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonVisualDrawingProps(NodeId);

impl NonVisualDrawingProps {
    const ID: RequiredAttribute<DrawingElementId> =
        RequiredAttribute::new(StaticQName::unqualified("id"));
    const NAME: RequiredAttribute<XsdString> =
        RequiredAttribute::new(StaticQName::unqualified("name"));
    const DESCR: OptionalAttribute<XsdString> =
        OptionalAttribute::new(StaticQName::unqualified("descr"));

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn id(self, tree: &XmlTree) -> Result<u32> {
        Self::ID.get(tree, self.0)
    }

    pub fn set_id(self, tree: &mut XmlTree, id: u32) -> Result<()> {
        Self::ID.set(tree, self.0, &id)
    }

    pub fn name(self, tree: &XmlTree) -> Result<String> {
        Self::NAME.get(tree, self.0)
    }

    pub fn set_name(self, tree: &mut XmlTree, name: &str) -> Result<()> {
        Self::NAME.set(tree, self.0, &name.to_string())
    }

    /// Alt text, if any.
    pub fn descr(self, tree: &XmlTree) -> Result<Option<String>> {
        Self::DESCR.get(tree, self.0)
    }

    pub fn set_descr(self, tree: &mut XmlTree, descr: Option<&str>) -> Result<()> {
        let owned = descr.map(str::to_string);
        Self::DESCR.set(tree, self.0, owned.as_ref())
    }
}

/// `<pic:nvPicPr>` element, non-visual picture properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureNonVisual(NodeId);

impl PictureNonVisual {
    const C_NV_PR: OneAndOnlyOne = OneAndOnlyOne::new(Ns::Picture, "cNvPr");

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn c_nv_pr(self, tree: &XmlTree) -> Result<NonVisualDrawingProps> {
        Self::C_NV_PR.get(tree, self.0).map(NonVisualDrawingProps)
    }
}

/// `<pic:pic>` element, a DrawingML picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Picture(NodeId);

impl Picture {
    const NV_PIC_PR: OneAndOnlyOne = OneAndOnlyOne::new(Ns::Picture, "nvPicPr");
    const BLIP_FILL: OneAndOnlyOne = OneAndOnlyOne::new(Ns::Picture, "blipFill");
    const SP_PR: OneAndOnlyOne = OneAndOnlyOne::new(Ns::Picture, "spPr");

    #[inline]
    pub fn new(node: NodeId) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }

    pub fn nv_pic_pr(self, tree: &XmlTree) -> Result<PictureNonVisual> {
        Self::NV_PIC_PR.get(tree, self.0).map(PictureNonVisual)
    }

    pub fn blip_fill(self, tree: &XmlTree) -> Result<BlipFill> {
        Self::BLIP_FILL.get(tree, self.0).map(BlipFill::new)
    }

    pub fn sp_pr(self, tree: &XmlTree) -> Result<ShapeProperties> {
        Self::SP_PR.get(tree, self.0).map(ShapeProperties::new)
    }

    /// Build a new detached `<pic:pic>` subtree with the minimal contents
    /// required for a viable picture element.
    ///
    /// # Arguments
    ///
    /// * `pic_id` - Numeric picture id (consumers ignore it but expect it)
    /// * `filename` - Display filename for the non-visual properties
    /// * `rid` - Relationship id of the embedded image part
    /// * `cx`, `cy` - Display extent
    pub fn build(
        tree: &mut XmlTree,
        pic_id: u32,
        filename: &str,
        rid: &str,
        cx: Emu,
        cy: Emu,
    ) -> Result<Picture> {
        let pic = new_pic_skeleton(tree);
        let picture = Picture(pic);

        picture.nv_pic_pr(tree)?.c_nv_pr(tree)?.set_id(tree, pic_id)?;
        picture
            .nv_pic_pr(tree)?
            .c_nv_pr(tree)?
            .set_name(tree, filename)?;
        picture
            .blip_fill(tree)?
            .get_or_add_blip(tree)
            .set_embed(tree, Some(rid))?;
        picture.sp_pr(tree)?.set_cx(tree, cx)?;
        picture.sp_pr(tree)?.set_cy(tree, cy)?;
        Ok(picture)
    }
}

/// Bare picture template: every element a consuming application requires,
/// sized at the conventional one-inch default until the caller sets the
/// real extent.
fn new_pic_skeleton(tree: &mut XmlTree) -> NodeId {
    let pic = tree.create_element(Ns::Picture, "pic");
    tree.declare_namespaces(pic, &[Ns::Picture, Ns::DrawingMl, Ns::Relationships]);

    let nv_pic_pr = tree.create_element(Ns::Picture, "nvPicPr");
    tree.append_child(pic, nv_pic_pr);
    let c_nv_pr = tree.create_element(Ns::Picture, "cNvPr");
    tree.set_attr(c_nv_pr, QName::unqualified("id"), "0");
    tree.set_attr(c_nv_pr, QName::unqualified("name"), "unnamed");
    tree.append_child(nv_pic_pr, c_nv_pr);
    let c_nv_pic_pr = tree.create_element(Ns::Picture, "cNvPicPr");
    tree.append_child(nv_pic_pr, c_nv_pic_pr);

    let blip_fill = tree.create_element(Ns::Picture, "blipFill");
    tree.append_child(pic, blip_fill);
    let blip = tree.create_element(Ns::DrawingMl, "blip");
    tree.append_child(blip_fill, blip);
    let stretch = tree.create_element(Ns::DrawingMl, "stretch");
    tree.append_child(blip_fill, stretch);
    let fill_rect = tree.create_element(Ns::DrawingMl, "fillRect");
    tree.append_child(stretch, fill_rect);

    let sp_pr = tree.create_element(Ns::Picture, "spPr");
    tree.append_child(pic, sp_pr);
    let xfrm = tree.create_element(Ns::DrawingMl, "xfrm");
    tree.append_child(sp_pr, xfrm);
    let off = tree.create_element(Ns::DrawingMl, "off");
    tree.set_attr(off, QName::unqualified("x"), "0");
    tree.set_attr(off, QName::unqualified("y"), "0");
    tree.append_child(xfrm, off);
    let ext = tree.create_element(Ns::DrawingMl, "ext");
    tree.set_attr(ext, QName::unqualified("cx"), "914400");
    tree.set_attr(ext, QName::unqualified("cy"), "914400");
    tree.append_child(xfrm, ext);
    let prst_geom = tree.create_element(Ns::DrawingMl, "prstGeom");
    tree.set_attr(prst_geom, QName::unqualified("prst"), "rect");
    tree.append_child(sp_pr, prst_geom);

    pic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_populates_all_fields() {
        let mut tree = XmlTree::new();
        let pic = Picture::build(
            &mut tree,
            42,
            "img.png",
            "rId7",
            Emu(914_400),
            Emu(914_400),
        )
        .unwrap();

        let c_nv_pr = pic.nv_pic_pr(&tree).unwrap().c_nv_pr(&tree).unwrap();
        assert_eq!(c_nv_pr.id(&tree).unwrap(), 42);
        assert_eq!(c_nv_pr.name(&tree).unwrap(), "img.png");

        let blip = pic.blip_fill(&tree).unwrap().blip(&tree).unwrap();
        assert_eq!(blip.embed(&tree).unwrap(), Some("rId7".to_string()));
        assert_eq!(blip.link(&tree).unwrap(), None);

        let sp_pr = pic.sp_pr(&tree).unwrap();
        assert_eq!(sp_pr.cx(&tree).unwrap(), Some(Emu(914_400)));
        assert_eq!(sp_pr.cy(&tree).unwrap(), Some(Emu(914_400)));
    }

    #[test]
    fn test_build_rejects_negative_extent() {
        let mut tree = XmlTree::new();
        assert!(Picture::build(&mut tree, 0, "x.png", "rId1", Emu(-1), Emu(1)).is_err());
    }

    #[test]
    fn test_built_fragment_serializes_with_declarations() {
        let mut tree = XmlTree::new();
        let pic = Picture::build(&mut tree, 0, "x.png", "rId1", Emu(10), Emu(20)).unwrap();
        let xml = crate::xml::write::write_xml(&tree, pic.node());
        assert!(xml.starts_with("<pic:pic xmlns:pic="));
        assert!(xml.contains(r#"<a:blip r:embed="rId1"/>"#));
        assert!(xml.contains(r#"<a:ext cx="10" cy="20"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect"/>"#));
    }
}
