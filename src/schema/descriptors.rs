//! Attribute and child-element descriptors.
//!
//! Each element class declares its schema as `const` descriptor tables:
//! attribute descriptors pair a qualified name with a simple-type codec,
//! child descriptors pair a qualified name with a cardinality and the list
//! of sibling names that must follow any inserted instance. The generic
//! accessor methods here are the single code path for every element type —
//! there is no per-element dispatch logic.
//!
//! # Insertion ordering
//!
//! When a zero-or-one or zero-or-more child is created, it is inserted
//! immediately before the first existing sibling whose qualified name
//! appears in the descriptor's successors list, or appended when none
//! matches. Callers therefore never need to know the full sibling grammar
//! to keep a document schema-ordered.

use crate::error::{DrawmlError, Result};
use crate::schema::simple_types::SimpleType;
use crate::xml::ns::Ns;
use crate::xml::tree::{NodeId, QName, XmlTree};
use std::marker::PhantomData;

/// A qualified name usable in `const` descriptor tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticQName {
    pub ns: Option<Ns>,
    pub local: &'static str,
}

impl StaticQName {
    #[inline]
    pub const fn new(ns: Ns, local: &'static str) -> Self {
        Self {
            ns: Some(ns),
            local,
        }
    }

    #[inline]
    pub const fn unqualified(local: &'static str) -> Self {
        Self { ns: None, local }
    }

    #[inline]
    fn matches(&self, name: &QName) -> bool {
        name.matches(self.ns, self.local)
    }

    fn to_qname(self) -> QName {
        match self.ns {
            Some(ns) => QName::new(ns, self.local),
            None => QName::unqualified(self.local),
        }
    }

    fn display(&self) -> String {
        match self.ns {
            Some(ns) => format!("{}:{}", ns.prefix(), self.local),
            None => self.local.to_string(),
        }
    }
}

/// Descriptor for an attribute that must be present on a conformant element.
pub struct RequiredAttribute<C: SimpleType> {
    name: StaticQName,
    _codec: PhantomData<C>,
}

impl<C: SimpleType> RequiredAttribute<C> {
    pub const fn new(name: StaticQName) -> Self {
        Self {
            name,
            _codec: PhantomData,
        }
    }

    /// Get the decoded attribute value.
    ///
    /// Fails with `MissingAttribute` when absent; a decode failure
    /// propagates as `InvalidValue`.
    pub fn get(&self, tree: &XmlTree, node: NodeId) -> Result<C::Value> {
        let text = tree
            .attr(node, self.name.ns, self.name.local)
            .ok_or_else(|| DrawmlError::MissingAttribute(self.name.display()))?;
        C::decode(text)
    }

    /// Set the attribute, overwriting any prior value.
    pub fn set(&self, tree: &mut XmlTree, node: NodeId, value: &C::Value) -> Result<()> {
        let text = C::encode(value)?;
        tree.set_attr(node, self.name.to_qname(), text);
        Ok(())
    }
}

/// Descriptor for an attribute that may be absent.
pub struct OptionalAttribute<C: SimpleType> {
    name: StaticQName,
    _codec: PhantomData<C>,
}

impl<C: SimpleType> OptionalAttribute<C> {
    pub const fn new(name: StaticQName) -> Self {
        Self {
            name,
            _codec: PhantomData,
        }
    }

    /// Get the decoded attribute value, or `None` when absent.
    pub fn get(&self, tree: &XmlTree, node: NodeId) -> Result<Option<C::Value>> {
        match tree.attr(node, self.name.ns, self.name.local) {
            Some(text) => C::decode(text).map(Some),
            None => Ok(None),
        }
    }

    /// Set the attribute; `None` removes it (a no-op when already absent).
    pub fn set(&self, tree: &mut XmlTree, node: NodeId, value: Option<&C::Value>) -> Result<()> {
        match value {
            Some(value) => {
                let text = C::encode(value)?;
                tree.set_attr(node, self.name.to_qname(), text);
            },
            None => {
                tree.remove_attr(node, self.name.ns, self.name.local);
            },
        }
        Ok(())
    }
}

/// Descriptor for a child element with exactly-one cardinality.
///
/// Such children must already exist in a conformant document; they are
/// looked up, never created.
pub struct OneAndOnlyOne {
    name: StaticQName,
}

impl OneAndOnlyOne {
    pub const fn new(ns: Ns, local: &'static str) -> Self {
        Self {
            name: StaticQName::new(ns, local),
        }
    }

    /// Look up the single matching child.
    ///
    /// Zero or more than one match is a `SchemaViolation`: the document is
    /// assumed schema-valid, so either case is a precondition failure.
    pub fn get(&self, tree: &XmlTree, parent: NodeId) -> Result<NodeId> {
        let mut matches = tree
            .children(parent)
            .iter()
            .copied()
            .filter(|&child| self.name.matches(tree.name(child)));
        let found = matches.next().ok_or_else(|| {
            DrawmlError::SchemaViolation(format!(
                "expected one <{}> child of <{}>, found none",
                self.name.display(),
                tree.name(parent)
            ))
        })?;
        if matches.next().is_some() {
            return Err(DrawmlError::SchemaViolation(format!(
                "expected one <{}> child of <{}>, found several",
                self.name.display(),
                tree.name(parent)
            )));
        }
        Ok(found)
    }
}

/// Descriptor for a child element with zero-or-one cardinality.
pub struct ZeroOrOne {
    name: StaticQName,
    successors: &'static [StaticQName],
}

impl ZeroOrOne {
    pub const fn new(ns: Ns, local: &'static str, successors: &'static [StaticQName]) -> Self {
        Self {
            name: StaticQName::new(ns, local),
            successors,
        }
    }

    /// Get the child, or `None` when absent.
    pub fn get(&self, tree: &XmlTree, parent: NodeId) -> Option<NodeId> {
        tree.children(parent)
            .iter()
            .copied()
            .find(|&child| self.name.matches(tree.name(child)))
    }

    /// Get the existing child, or create, position, and insert an empty one.
    pub fn get_or_add(&self, tree: &mut XmlTree, parent: NodeId) -> NodeId {
        if let Some(existing) = self.get(tree, parent) {
            return existing;
        }
        let child = tree.create(self.name.to_qname());
        self.insert(tree, parent, child);
        child
    }

    /// Insert a node at this child's schema-ordered position.
    pub fn insert(&self, tree: &mut XmlTree, parent: NodeId, child: NodeId) {
        let index = insert_position(tree, parent, self.successors);
        tree.insert_child(parent, index, child);
    }

    /// Remove the child if present. Returns `true` when one was removed.
    pub fn remove(&self, tree: &mut XmlTree, parent: NodeId) -> bool {
        match self.get(tree, parent) {
            Some(child) => tree.remove_child(parent, child),
            None => false,
        }
    }
}

/// Descriptor for a child element with zero-or-more cardinality.
pub struct ZeroOrMore {
    name: StaticQName,
    successors: &'static [StaticQName],
}

impl ZeroOrMore {
    pub const fn new(ns: Ns, local: &'static str, successors: &'static [StaticQName]) -> Self {
        Self {
            name: StaticQName::new(ns, local),
            successors,
        }
    }

    /// Iterate the matching children in document order.
    pub fn iter<'a>(
        &'a self,
        tree: &'a XmlTree,
        parent: NodeId,
    ) -> impl Iterator<Item = NodeId> + 'a {
        tree.children(parent)
            .iter()
            .copied()
            .filter(move |&child| self.name.matches(tree.name(child)))
    }

    /// Insert a node at this child's schema-ordered position.
    ///
    /// A new instance lands after existing instances of the same name and
    /// before the first successor sibling.
    pub fn insert(&self, tree: &mut XmlTree, parent: NodeId, child: NodeId) {
        let index = insert_position(tree, parent, self.successors);
        tree.insert_child(parent, index, child);
    }
}

/// Document-order scan for the schema-ordered insertion point: immediately
/// before the first existing child named in `successors`, else at the end.
fn insert_position(tree: &XmlTree, parent: NodeId, successors: &[StaticQName]) -> usize {
    let children = tree.children(parent);
    for (index, &child) in children.iter().enumerate() {
        let name = tree.name(child);
        if successors.iter().any(|successor| successor.matches(name)) {
            return index;
        }
    }
    children.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::simple_types::{PositiveCoordinate, RelationshipId};
    use crate::units::Emu;
    use proptest::prelude::*;

    const CX: RequiredAttribute<PositiveCoordinate> =
        RequiredAttribute::new(StaticQName::unqualified("cx"));
    const EMBED: OptionalAttribute<RelationshipId> =
        OptionalAttribute::new(StaticQName::new(Ns::Relationships, "embed"));

    const SUCCESSORS: &[StaticQName] = &[
        StaticQName::new(Ns::DrawingMl, "custGeom"),
        StaticQName::new(Ns::DrawingMl, "prstGeom"),
        StaticQName::new(Ns::DrawingMl, "ln"),
    ];
    const XFRM: ZeroOrOne = ZeroOrOne::new(Ns::DrawingMl, "xfrm", SUCCESSORS);

    #[test]
    fn test_required_attribute_missing() {
        let mut tree = XmlTree::new();
        let node = tree.create_element(Ns::WpDrawing, "extent");
        let err = CX.get(&tree, node).unwrap_err();
        assert!(matches!(err, DrawmlError::MissingAttribute(name) if name == "cx"));
    }

    #[test]
    fn test_required_attribute_set_overwrites() {
        let mut tree = XmlTree::new();
        let node = tree.create_element(Ns::WpDrawing, "extent");
        CX.set(&mut tree, node, &Emu(914_400)).unwrap();
        CX.set(&mut tree, node, &Emu(457_200)).unwrap();
        assert_eq!(CX.get(&tree, node).unwrap(), Emu(457_200));
    }

    #[test]
    fn test_required_attribute_invalid_text() {
        let mut tree = XmlTree::new();
        let node = tree.create_element(Ns::WpDrawing, "extent");
        tree.set_attr(node, QName::unqualified("cx"), "wide");
        assert!(matches!(
            CX.get(&tree, node),
            Err(DrawmlError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_optional_attribute_absent_and_removed() {
        let mut tree = XmlTree::new();
        let node = tree.create_element(Ns::DrawingMl, "blip");
        assert_eq!(EMBED.get(&tree, node).unwrap(), None);

        EMBED
            .set(&mut tree, node, Some(&"rId3".to_string()))
            .unwrap();
        assert_eq!(EMBED.get(&tree, node).unwrap(), Some("rId3".to_string()));

        EMBED.set(&mut tree, node, None).unwrap();
        assert_eq!(EMBED.get(&tree, node).unwrap(), None);
        // removing again is a no-op
        EMBED.set(&mut tree, node, None).unwrap();
    }

    #[test]
    fn test_one_and_only_one() {
        let mut tree = XmlTree::new();
        let graphic = tree.create_element(Ns::DrawingMl, "graphic");
        let desc = OneAndOnlyOne::new(Ns::DrawingMl, "graphicData");

        assert!(matches!(
            desc.get(&tree, graphic),
            Err(DrawmlError::SchemaViolation(_))
        ));

        let data = tree.create_element(Ns::DrawingMl, "graphicData");
        tree.append_child(graphic, data);
        assert_eq!(desc.get(&tree, graphic).unwrap(), data);

        let duplicate = tree.create_element(Ns::DrawingMl, "graphicData");
        tree.append_child(graphic, duplicate);
        assert!(matches!(
            desc.get(&tree, graphic),
            Err(DrawmlError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_zero_or_one_get_or_add_is_idempotent() {
        let mut tree = XmlTree::new();
        let parent = tree.create_element(Ns::Picture, "spPr");
        let first = XFRM.get_or_add(&mut tree, parent);
        let second = XFRM.get_or_add(&mut tree, parent);
        assert_eq!(first, second);
        assert_eq!(tree.children(parent).len(), 1);
    }

    #[test]
    fn test_zero_or_one_remove() {
        let mut tree = XmlTree::new();
        let parent = tree.create_element(Ns::Picture, "spPr");
        XFRM.get_or_add(&mut tree, parent);
        assert!(XFRM.remove(&mut tree, parent));
        assert!(!XFRM.remove(&mut tree, parent));
        assert!(XFRM.get(&tree, parent).is_none());
    }

    #[test]
    fn test_zero_or_more_iteration_order() {
        let mut tree = XmlTree::new();
        let parent = tree.create_element(Ns::Picture, "blipFill");
        let desc = ZeroOrMore::new(Ns::DrawingMl, "tile", &[]);
        let a = tree.create_element(Ns::DrawingMl, "tile");
        let other = tree.create_element(Ns::DrawingMl, "stretch");
        let b = tree.create_element(Ns::DrawingMl, "tile");
        tree.append_child(parent, a);
        tree.append_child(parent, other);
        tree.append_child(parent, b);

        let found: Vec<_> = desc.iter(&tree, parent).collect();
        assert_eq!(found, vec![a, b]);
    }

    // Exhaustive check of the ordering guarantee over every subset of
    // present successor siblings.
    proptest! {
        #[test]
        fn prop_insert_precedes_first_present_successor(mask in 0u8..8) {
            let mut tree = XmlTree::new();
            let parent = tree.create_element(Ns::Picture, "spPr");
            // a non-successor that always sorts first
            let lead = tree.create_element(Ns::DrawingMl, "extLst2");
            tree.append_child(parent, lead);
            for (bit, successor) in SUCCESSORS.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    let node = tree.create_element(successor.ns.unwrap(), successor.local);
                    tree.append_child(parent, node);
                }
            }

            let added = XFRM.get_or_add(&mut tree, parent);
            let children = tree.children(parent);
            let added_at = children.iter().position(|&c| c == added).unwrap();

            let first_successor = children.iter().position(|&c| {
                SUCCESSORS.iter().any(|s| s.matches(tree.name(c)))
            });
            match first_successor {
                // immediately before the first present successor
                Some(pos) => prop_assert_eq!(pos, added_at + 1),
                // no successor present: appended at the end
                None => prop_assert_eq!(added_at, children.len() - 1),
            }
        }
    }
}
