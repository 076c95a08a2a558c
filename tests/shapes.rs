//! End-to-end tests: parse a document body, inspect and mutate its shapes
//! through the proxy layer, insert a newly built picture, and serialize.

use drawml::elements::{Anchor, Inline};
use drawml::shapes::{AnchorShapes, InlineShapes, ShapeKind};
use drawml::units::Emu;
use drawml::xml::{Ns, parse_xml, write_xml};
use drawml::{DrawmlError, XmlTree};

/// A body holding one embedded inline picture, as Word writes it.
const BODY_XML: &str = r#"<w:body><w:p><w:r><w:drawing><wp:inline xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><wp:extent cx="914400" cy="914400"/><wp:docPr id="1" name="Picture 1"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="0" name="image1.png"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="rId5"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="914400" cy="914400"/></a:xfrm><a:prstGeom prst="rect"/></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p></w:body>"#;

#[test]
fn parsed_body_round_trips_verbatim() {
    let (tree, body) = parse_xml(BODY_XML).unwrap();
    assert_eq!(write_xml(&tree, body), BODY_XML);
}

#[test]
fn inline_shape_read_through_proxy() {
    let (tree, body) = parse_xml(BODY_XML).unwrap();
    let shapes = InlineShapes::new(body);
    assert_eq!(shapes.len(&tree), 1);

    let shape = shapes.get(&tree, 0).unwrap();
    assert_eq!(shape.width(&tree).unwrap(), Emu(914_400));
    assert_eq!(shape.height(&tree).unwrap(), Emu(914_400));
    assert_eq!(shape.kind(&tree).unwrap(), ShapeKind::EmbeddedPicture);
}

#[test]
fn resizing_updates_serialized_output_in_both_places() {
    let (mut tree, body) = parse_xml(BODY_XML).unwrap();
    let shape = InlineShapes::new(body).get(&tree, 0).unwrap();

    shape.set_width(&mut tree, Emu::from_inches(2)).unwrap();
    shape.set_height(&mut tree, Emu::from_inches(2)).unwrap();

    let xml = write_xml(&tree, body);
    assert!(xml.contains(r#"<wp:extent cx="1828800" cy="1828800"/>"#));
    assert!(xml.contains(r#"<a:ext cx="1828800" cy="1828800"/>"#));
    // the old size is gone from every element
    assert!(!xml.contains("914400"));
}

#[test]
fn new_inline_picture_inserted_into_parsed_document() {
    let (mut tree, body) = parse_xml(BODY_XML).unwrap();

    // the document layer supplies shape id and relationship id
    let inline = Inline::build_with_new_picture(
        &mut tree,
        2,
        "rId9",
        "img.png",
        Emu(914_400),
        Emu(914_400),
    )
    .unwrap();

    let p = tree.create_element(Ns::Wordprocessing, "p");
    let r = tree.create_element(Ns::Wordprocessing, "r");
    let drawing = tree.create_element(Ns::Wordprocessing, "drawing");
    tree.append_child(body, p);
    tree.append_child(p, r);
    tree.append_child(r, drawing);
    tree.append_child(drawing, inline.node());

    let shapes = InlineShapes::new(body);
    assert_eq!(shapes.len(&tree), 2);

    let added = shapes.get(&tree, 1).unwrap();
    assert_eq!(added.kind(&tree).unwrap(), ShapeKind::EmbeddedPicture);
    assert_eq!(
        added.inline().doc_pr(&tree).unwrap().name(&tree).unwrap(),
        "Picture 2"
    );

    let xml = write_xml(&tree, body);
    assert!(xml.contains(r#"<a:blip r:embed="rId9"/>"#));
}

#[test]
fn anchor_collection_is_separate_from_inline() {
    let (mut tree, body) = parse_xml(BODY_XML).unwrap();
    assert!(AnchorShapes::new(body).is_empty(&tree));

    let anchor =
        Anchor::build_with_new_picture(&mut tree, 3, "rId6", "bg.png", Emu(100), Emu(200))
            .unwrap();
    let p = tree.create_element(Ns::Wordprocessing, "p");
    let r = tree.create_element(Ns::Wordprocessing, "r");
    let drawing = tree.create_element(Ns::Wordprocessing, "drawing");
    tree.append_child(body, p);
    tree.append_child(p, r);
    tree.append_child(r, drawing);
    tree.append_child(drawing, anchor.node());

    let anchors = AnchorShapes::new(body);
    assert_eq!(anchors.len(&tree), 1);
    assert_eq!(InlineShapes::new(body).len(&tree), 1);

    let shape = anchors.get(&tree, 0).unwrap();
    assert_eq!(shape.width(&tree).unwrap(), Emu(100));
    assert_eq!(shape.height(&tree).unwrap(), Emu(200));
}

#[test]
fn indexing_error_carries_live_length() {
    let (tree, body) = parse_xml(BODY_XML).unwrap();
    let err = InlineShapes::new(body).get(&tree, 1).unwrap_err();
    match err {
        DrawmlError::IndexOutOfRange { index, len } => {
            assert_eq!(index, 1);
            assert_eq!(len, 1);
        },
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn empty_body_yields_empty_collections() {
    let mut tree = XmlTree::new();
    let body = tree.create_element(Ns::Wordprocessing, "body");
    assert!(InlineShapes::new(body).is_empty(&tree));
    assert!(InlineShapes::new(body).iter(&tree).next().is_none());
    assert!(matches!(
        InlineShapes::new(body).get(&tree, 0),
        Err(DrawmlError::IndexOutOfRange { index: 0, len: 0 })
    ));
}
