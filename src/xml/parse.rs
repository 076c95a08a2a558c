//! XML text to tree parsing.
//!
//! Fragments are parsed with a streaming reader into the arena tree.
//! Namespace prefixes are resolved against the fixed registry in
//! [`crate::xml::ns`]; `xmlns` declarations are kept as plain attributes so
//! a fragment round-trips with its declarations intact.

use crate::error::{DrawmlError, Result};
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, QName, XmlTree};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse an XML fragment into a fresh tree.
///
/// Returns the tree and the root element of the fragment.
pub fn parse_xml(xml: &str) -> Result<(XmlTree, NodeId)> {
    let mut tree = XmlTree::new();
    let root = parse_fragment(&mut tree, xml)?;
    Ok((tree, root))
}

/// Parse an XML fragment into an existing tree.
///
/// The parsed elements become detached nodes of `tree`, rooted at the
/// returned node, ready to be inserted into a larger document.
pub fn parse_fragment(tree: &mut XmlTree, xml: &str) -> Result<NodeId> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root: Option<NodeId> = None;
    let mut stack: Vec<NodeId> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let node = open_element(tree, &e, &mut root, &stack)?;
                stack.push(node);
            },
            Ok(Event::Empty(e)) => {
                open_element(tree, &e, &mut root, &stack)?;
            },
            Ok(Event::End(_)) => {
                stack.pop();
            },
            Ok(Event::Text(e)) => {
                if let Some(&top) = stack.last() {
                    let text = e
                        .xml10_content()
                        .map_err(|e| DrawmlError::Xml(e.to_string()))?;
                    tree.push_text(top, &text);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(DrawmlError::Xml(e.to_string())),
            _ => {},
        }
    }

    root.ok_or_else(|| DrawmlError::Xml("no root element in fragment".to_string()))
}

fn open_element(
    tree: &mut XmlTree,
    e: &BytesStart<'_>,
    root: &mut Option<NodeId>,
    stack: &[NodeId],
) -> Result<NodeId> {
    let name = resolve_name(e.name().as_ref())?;
    let node = tree.create(name);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| DrawmlError::Xml(e.to_string()))?;
        let key = resolve_attr_name(attr.key.as_ref())?;
        let value = attr
            .unescape_value()
            .map_err(|e| DrawmlError::Xml(e.to_string()))?;
        tree.set_attr(node, key, value.into_owned());
    }

    match stack.last() {
        Some(&parent) => tree.append_child(parent, node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        },
    }
    Ok(node)
}

/// Resolve an element name, requiring any prefix to be in the fixed set.
fn resolve_name(raw: &[u8]) -> Result<QName> {
    let s = std::str::from_utf8(raw).map_err(|e| DrawmlError::Xml(e.to_string()))?;
    match s.split_once(':') {
        Some((prefix, local)) => {
            let ns = Ns::from_prefix(prefix).ok_or_else(|| {
                DrawmlError::Xml(format!("unknown namespace prefix '{prefix}'"))
            })?;
            Ok(QName::new(ns, local))
        },
        None => Ok(QName::unqualified(s)),
    }
}

/// Resolve an attribute name; `xmlns` declarations stay unqualified.
fn resolve_attr_name(raw: &[u8]) -> Result<QName> {
    let s = std::str::from_utf8(raw).map_err(|e| DrawmlError::Xml(e.to_string()))?;
    if s == "xmlns" || s.starts_with("xmlns:") {
        return Ok(QName::unqualified(s));
    }
    resolve_name(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_fragment() {
        let (tree, root) = parse_xml(r#"<wp:extent cx="914400" cy="457200"/>"#).unwrap();
        assert!(tree.name(root).matches(Some(Ns::WpDrawing), "extent"));
        assert_eq!(tree.attr(root, None, "cx"), Some("914400"));
        assert_eq!(tree.attr(root, None, "cy"), Some("457200"));
    }

    #[test]
    fn test_parse_nested_with_text() {
        let xml = r#"<wp:positionH relativeFrom="column"><wp:posOffset>0</wp:posOffset></wp:positionH>"#;
        let (tree, root) = parse_xml(xml).unwrap();
        let children = tree.children(root);
        assert_eq!(children.len(), 1);
        assert_eq!(tree.text(children[0]), "0");
    }

    #[test]
    fn test_parse_keeps_xmlns_declarations() {
        let xml = r#"<pic:pic xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"/>"#;
        let (tree, root) = parse_xml(xml).unwrap();
        assert_eq!(
            tree.attr(root, None, "xmlns:pic"),
            Some(Ns::Picture.uri())
        );
    }

    #[test]
    fn test_parse_prefixed_attribute() {
        let (tree, root) = parse_xml(r#"<a:blip r:embed="rId5"/>"#).unwrap();
        assert_eq!(tree.attr(root, Some(Ns::Relationships), "embed"), Some("rId5"));
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        let err = parse_xml("<xsi:thing/>").unwrap_err();
        assert!(matches!(err, DrawmlError::Xml(_)));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(parse_xml("").is_err());
    }
}
