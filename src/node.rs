//! The output tree produced by the list, table, and tag-tree builders.
//!
//! A [`Node`] is an abstract tree element: a name, an ordered set of
//! attributes, and an ordered list of children in which text and child
//! elements can interleave. It deliberately knows nothing about any host
//! document; materializing nodes into native document elements is the
//! caller's concern.
//!
//! The module also houses the crate-internal [`TreeBuilder`] arena the
//! builders construct trees with: nodes are created into a flat vector and
//! linked by index, with an explicit ownership stack kept by each builder.
//! No parent back-pointers exist, so nodes stay tree-only and arbitrarily
//! deep markup never recurses during construction.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::to_table;
//!
//! let table = to_table("[[A]][[B]]\n,1,2");
//! assert_eq!(table.name, "table");
//! assert_eq!(table.child_nodes().count(), 2);
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// One entry in a node's child list: interleaved text and elements, in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A run of literal text.
    Text(String),
    /// A child element.
    Node(Node),
}

/// An abstract output tree element.
///
/// Generalizes "table", "list item", and "tag" across the builders; each
/// builder fixes its own naming vocabulary (see the builder modules).
///
/// # Examples
///
/// ```rust
/// use vsv::Node;
///
/// let mut node = Node::new("item");
/// node.set_attr("id", Some("7".to_string()));
/// node.append_text("hello");
/// assert_eq!(node.attr("id"), Some("7"));
/// assert_eq!(node.text(), "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Tag or kind name.
    pub name: String,
    /// Ordered attributes. A `None` value is a valueless attribute (the
    /// delimiter-tag dialect can set a key with no value).
    pub attrs: IndexMap<String, Option<String>>,
    /// Ordered children; text and elements interleave.
    pub children: Vec<Child>,
}

impl Node {
    /// Creates an empty node with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Node {
            name: name.to_string(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value for the key while
    /// keeping its original position.
    pub fn set_attr(&mut self, key: &str, value: Option<String>) {
        self.attrs.insert(key.to_string(), value);
    }

    /// Returns the value of an attribute, or `None` if the attribute is
    /// absent or valueless. Use [`Node::has_attr`] to distinguish the two.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(|v| v.as_deref())
    }

    /// Returns `true` if the attribute is present, valued or not.
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Appends literal text. Consecutive text appends merge into one run.
    pub fn append_text(&mut self, text: &str) {
        if let Some(Child::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(Child::Text(text.to_string()));
        }
    }

    /// Appends a child element.
    pub fn append_node(&mut self, child: Node) {
        self.children.push(Child::Node(child));
    }

    /// Iterates over the element children, skipping text runs.
    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Node(n) => Some(n),
            Child::Text(_) => None,
        })
    }

    /// Concatenation of the direct text runs of this node.
    #[must_use]
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                Child::Text(t) => Some(t.as_str()),
                Child::Node(_) => None,
            })
            .collect()
    }
}

fn fmt_node(node: &Node, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    write!(f, "{pad}<{}", node.name)?;
    for (key, value) in &node.attrs {
        match value {
            Some(v) => write!(f, " {key}=\"{v}\"")?,
            None => write!(f, " {key}")?,
        }
    }
    if node.children.is_empty() {
        return writeln!(f, "/>");
    }
    writeln!(f, ">")?;
    for child in &node.children {
        match child {
            Child::Text(t) => writeln!(f, "{pad}  {t}")?,
            Child::Node(n) => fmt_node(n, f, depth + 1)?,
        }
    }
    writeln!(f, "{pad}</{}>", node.name)
}

/// Renders the tree as indented markup-like text, for display and
/// debugging. Best-effort: content is not escaped.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_node(self, f, 0)
    }
}

struct Attrs<'a>(&'a IndexMap<String, Option<String>>);

impl Serialize for Attrs<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Child {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Child::Text(t) => serializer.serialize_str(t),
            Child::Node(n) => n.serialize(serializer),
        }
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("attrs", &Attrs(&self.attrs))?;
        map.serialize_entry("children", &self.children)?;
        map.end()
    }
}

/// Index-linked child entry inside the arena.
enum Kid {
    Text(String),
    Node(usize),
}

struct NodeBuf {
    name: String,
    attrs: IndexMap<String, Option<String>>,
    kids: Vec<Kid>,
}

/// Arena the builders assemble trees in.
///
/// Nodes are identified by index; children always carry a higher index than
/// their parent, which lets [`TreeBuilder::finish`] materialize the owned
/// tree in one reverse pass without recursion.
pub(crate) struct TreeBuilder {
    nodes: Vec<NodeBuf>,
}

impl TreeBuilder {
    /// Creates an arena whose node 0 is the root.
    pub(crate) fn new(root_name: &str) -> Self {
        let mut builder = TreeBuilder { nodes: Vec::new() };
        builder.alloc(root_name);
        builder
    }

    pub(crate) const fn root(&self) -> usize {
        0
    }

    /// Allocates a detached node and returns its index.
    pub(crate) fn alloc(&mut self, name: &str) -> usize {
        self.nodes.push(NodeBuf {
            name: name.to_string(),
            attrs: IndexMap::new(),
            kids: Vec::new(),
        });
        self.nodes.len() - 1
    }

    pub(crate) fn append_child(&mut self, parent: usize, child: usize) {
        debug_assert!(child > parent);
        self.nodes[parent].kids.push(Kid::Node(child));
    }

    /// Appends text to a node, merging consecutive runs.
    pub(crate) fn append_text(&mut self, target: usize, text: &str) {
        if let Some(Kid::Text(last)) = self.nodes[target].kids.last_mut() {
            last.push_str(text);
        } else {
            self.nodes[target].kids.push(Kid::Text(text.to_string()));
        }
    }

    pub(crate) fn set_attr(&mut self, target: usize, key: &str, value: Option<String>) {
        self.nodes[target].attrs.insert(key.to_string(), value);
    }

    /// Materializes the owned tree rooted at node 0.
    pub(crate) fn finish(self) -> Node {
        let mut slots: Vec<Option<Node>> = Vec::with_capacity(self.nodes.len());
        for buf in &self.nodes {
            slots.push(Some(Node {
                name: buf.name.clone(),
                attrs: buf.attrs.clone(),
                children: Vec::new(),
            }));
        }

        // children always follow their parent, so a reverse pass sees every
        // child finished before its parent collects it
        for index in (0..self.nodes.len()).rev() {
            let mut children = Vec::with_capacity(self.nodes[index].kids.len());
            for kid in &self.nodes[index].kids {
                match kid {
                    Kid::Text(t) => children.push(Child::Text(t.clone())),
                    Kid::Node(i) => {
                        if let Some(node) = slots[*i].take() {
                            children.push(Child::Node(node));
                        }
                    }
                }
            }
            if let Some(slot) = slots[index].as_mut() {
                slot.children = children;
            }
        }

        slots[0].take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attr_overwrites_in_place() {
        let mut node = Node::new("tag");
        node.set_attr("a", Some("1".to_string()));
        node.set_attr("b", None);
        node.set_attr("a", Some("2".to_string()));

        let keys: Vec<&str> = node.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(node.attr("a"), Some("2"));
        assert_eq!(node.attr("b"), None);
        assert!(node.has_attr("b"));
    }

    #[test]
    fn test_append_text_merges_runs() {
        let mut node = Node::new("p");
        node.append_text("one ");
        node.append_text("two");
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.text(), "one two");
    }

    #[test]
    fn test_tree_builder_materializes_shape() {
        let mut tree = TreeBuilder::new("root");
        let a = tree.alloc("a");
        tree.append_child(tree.root(), a);
        let b = tree.alloc("b");
        tree.append_child(a, b);
        tree.append_text(b, "deep");
        tree.set_attr(a, "k", Some("v".to_string()));

        let root = tree.finish();
        assert_eq!(root.name, "root");
        let a = root.child_nodes().next().expect("a");
        assert_eq!(a.attr("k"), Some("v"));
        let b = a.child_nodes().next().expect("b");
        assert_eq!(b.text(), "deep");
    }

    #[test]
    fn test_display_renders_indented_markup() {
        let mut tree = TreeBuilder::new("root");
        let item = tree.alloc("item");
        tree.append_child(tree.root(), item);
        tree.set_attr(item, "id", Some("7".to_string()));
        tree.append_text(item, "hi");
        let rendered = tree.finish().to_string();

        assert_eq!(rendered, "<root>\n  <item id=\"7\">\n    hi\n  </item>\n</root>\n");
    }

    #[test]
    fn test_serialize_to_json() {
        let mut node = Node::new("tag");
        node.set_attr("k", Some("v".to_string()));
        node.append_text("body");

        let json = serde_json::to_string(&node).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"tag","attrs":{"k":"v"},"children":["body"]}"#
        );
    }
}
