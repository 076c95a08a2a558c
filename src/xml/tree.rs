//! Mutable XML tree for document fragments.
//!
//! The tree is an arena: [`XmlTree`] owns every element record and hands out
//! copyable [`NodeId`] handles. Typed element wrappers and shape proxies are
//! thin views over a `NodeId`; all mutation happens in place through the
//! tree, and child ordering is significant throughout.
//!
//! Detached nodes (removed children, not-yet-inserted factory output) remain
//! owned by the arena until the tree is dropped.

use crate::xml::ns::Ns;
use smallvec::SmallVec;
use std::fmt;

/// Handle to one element in an [`XmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A qualified element or attribute name.
///
/// Element names are always namespace-qualified in this vocabulary;
/// attribute names are unqualified unless they carry an explicit prefix
/// (e.g. `r:embed`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub ns: Option<Ns>,
    pub local: String,
}

impl QName {
    /// Create a namespace-qualified name.
    #[inline]
    pub fn new(ns: Ns, local: &str) -> Self {
        Self {
            ns: Some(ns),
            local: local.to_string(),
        }
    }

    /// Create an unqualified name.
    #[inline]
    pub fn unqualified(local: &str) -> Self {
        Self {
            ns: None,
            local: local.to_string(),
        }
    }

    /// Check this name against a namespace and local name.
    #[inline]
    pub fn matches(&self, ns: Option<Ns>, local: &str) -> bool {
        self.ns == ns && self.local == local
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ns {
            Some(ns) => write!(f, "{}:{}", ns.prefix(), self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// One element record in the arena.
///
/// Attribute and child lists are typically short (four entries or fewer),
/// so both are stored inline.
#[derive(Debug, Clone)]
struct ElementData {
    name: QName,
    attrs: SmallVec<[(QName, String); 4]>,
    children: SmallVec<[NodeId; 4]>,
    text: String,
}

/// Arena-backed mutable XML element tree.
#[derive(Debug, Default, Clone)]
pub struct XmlTree {
    nodes: Vec<ElementData>,
}

impl XmlTree {
    /// Create an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached namespace-qualified element.
    pub fn create_element(&mut self, ns: Ns, local: &str) -> NodeId {
        self.create(QName::new(ns, local))
    }

    /// Create a detached element with an arbitrary qualified name.
    pub fn create(&mut self, name: QName) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(ElementData {
            name,
            attrs: SmallVec::new(),
            children: SmallVec::new(),
            text: String::new(),
        });
        id
    }

    /// Get the qualified name of an element.
    #[inline]
    pub fn name(&self, node: NodeId) -> &QName {
        &self.nodes[node.index()].name
    }

    /// Get an attribute value by qualified name.
    pub fn attr(&self, node: NodeId, ns: Option<Ns>, local: &str) -> Option<&str> {
        self.nodes[node.index()]
            .attrs
            .iter()
            .find(|(name, _)| name.matches(ns, local))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, overwriting any prior value in place.
    ///
    /// A new attribute is appended after existing ones; an existing one
    /// keeps its position in the attribute order.
    pub fn set_attr(&mut self, node: NodeId, name: QName, value: impl Into<String>) {
        let attrs = &mut self.nodes[node.index()].attrs;
        let value = value.into();
        match attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => attrs.push((name, value)),
        }
    }

    /// Remove an attribute. Returns `true` if it was present.
    pub fn remove_attr(&mut self, node: NodeId, ns: Option<Ns>, local: &str) -> bool {
        let attrs = &mut self.nodes[node.index()].attrs;
        match attrs.iter().position(|(n, _)| n.matches(ns, local)) {
            Some(pos) => {
                attrs.remove(pos);
                true
            },
            None => false,
        }
    }

    /// Iterate attributes in document order.
    pub fn attrs(&self, node: NodeId) -> impl Iterator<Item = (&QName, &str)> {
        self.nodes[node.index()]
            .attrs
            .iter()
            .map(|(n, v)| (n, v.as_str()))
    }

    /// Declare namespaces on an element as `xmlns:` attributes.
    ///
    /// Used by the fragment factories so that a built subtree carries its
    /// own namespace declarations, the way hand-authored fragments do.
    pub fn declare_namespaces(&mut self, node: NodeId, namespaces: &[Ns]) {
        for &ns in namespaces {
            let name = QName::unqualified(&format!("xmlns:{}", ns.prefix()));
            self.set_attr(node, name, ns.uri());
        }
    }

    /// Get the ordered children of an element.
    #[inline]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    /// Append a child at the end of the child list.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
    }

    /// Insert a child at a specific position in the child list.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) {
        self.nodes[parent.index()].children.insert(index, child);
    }

    /// Remove a child from the child list. Returns `true` if it was present.
    ///
    /// The removed node stays in the arena and may be re-inserted elsewhere.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let children = &mut self.nodes[parent.index()].children;
        match children.iter().position(|&c| c == child) {
            Some(pos) => {
                children.remove(pos);
                true
            },
            None => false,
        }
    }

    /// Get the concatenated character data of an element.
    #[inline]
    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].text
    }

    /// Replace the character data of an element.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.index()].text = text.into();
    }

    pub(crate) fn push_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.index()].text.push_str(text);
    }

    /// Iterate all descendants of a node in document order.
    ///
    /// The start node itself is not yielded. The iterator borrows the tree
    /// immutably, so it reflects the tree state at creation and is cheap to
    /// restart by calling this again.
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children(node).iter().rev().copied());
        Descendants { tree: self, stack }
    }
}

/// Document-order (pre-order) traversal over a subtree.
pub struct Descendants<'a> {
    tree: &'a XmlTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(node).iter().rev().copied());
        Some(node)
    }
}
