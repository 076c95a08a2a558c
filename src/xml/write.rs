//! Tree to XML text serialization.

use crate::xml::tree::{NodeId, XmlTree};
use std::fmt::Write as _;

/// Escape XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize a subtree to an XML string.
///
/// Elements with no children and no character data are written as
/// self-closing tags. Attribute order is the tree's attribute order, so a
/// parse/write cycle preserves it.
pub fn write_xml(tree: &XmlTree, root: NodeId) -> String {
    let mut out = String::new();
    write_element(tree, root, &mut out);
    out
}

fn write_element(tree: &XmlTree, node: NodeId, out: &mut String) {
    let name = tree.name(node);
    let _ = write!(out, "<{name}");
    for (attr_name, value) in tree.attrs(node) {
        let _ = write!(out, " {}=\"{}\"", attr_name, escape_xml(value));
    }

    let text = tree.text(node);
    let children = tree.children(node);
    if text.is_empty() && children.is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if !text.is_empty() {
        out.push_str(&escape_xml(text));
    }
    for &child in children {
        write_element(tree, child, out);
    }
    let _ = write!(out, "</{name}>");
}
