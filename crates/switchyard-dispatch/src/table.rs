//! Route tables.
//!
//! A [`RouteTable`] maps segment names to [`RouteNode`]s: either a leaf
//! (something invocable) or a nested table (a group). Tables are generic
//! over the leaf type so the routing logic stays independent of what a
//! command is.
//!
//! ```
//! use switchyard_dispatch::{RouteNode, RouteTable};
//!
//! let routes = RouteTable::new()
//!     .group("deploy", RouteTable::new().leaf("staging", "deploy-staging")?)?
//!     .leaf("status", "status")?;
//!
//! assert!(matches!(routes.get("deploy"), Some(RouteNode::Group(_))));
//! let leaf = routes.find(&["deploy", "staging"]).and_then(RouteNode::as_leaf);
//! assert_eq!(leaf, Some(&"deploy-staging"));
//! # Ok::<(), switchyard_dispatch::RouteTableError>(())
//! ```

use crate::error::RouteTableError;

/// One entry of a route table.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteNode<L> {
    /// An invocable command.
    Leaf(L),
    /// A nested table.
    Group(RouteTable<L>),
}

impl<L> RouteNode<L> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, RouteNode::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&L> {
        match self {
            RouteNode::Leaf(leaf) => Some(leaf),
            RouteNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&RouteTable<L>> {
        match self {
            RouteNode::Group(table) => Some(table),
            RouteNode::Leaf(_) => None,
        }
    }
}

/// An ordered mapping from segment name to [`RouteNode`].
///
/// Registration order is kept and used for help listings. Segment names are
/// checked on insertion: no whitespace, not empty, no leading hyphen, no
/// duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable<L> {
    entries: Vec<(String, RouteNode<L>)>,
}

impl<L> Default for RouteTable<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<L> RouteTable<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        node: RouteNode<L>,
    ) -> Result<(), RouteTableError> {
        let name = name.into();
        check_segment(&name)?;
        if self.get(&name).is_some() {
            return Err(RouteTableError::Duplicate(name));
        }
        self.entries.push((name, node));
        Ok(())
    }

    /// Adds a leaf, builder style.
    pub fn leaf(mut self, name: impl Into<String>, leaf: L) -> Result<Self, RouteTableError> {
        self.insert(name, RouteNode::Leaf(leaf))?;
        Ok(self)
    }

    /// Adds a nested table, builder style.
    pub fn group(
        mut self,
        name: impl Into<String>,
        table: RouteTable<L>,
    ) -> Result<Self, RouteTableError> {
        self.insert(name, RouteNode::Group(table))?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&RouteNode<L>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    /// Follows `path` segment by segment. An empty path is not a node, use
    /// [`find_table`](Self::find_table) to include the table itself.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&RouteNode<L>> {
        let (first, rest) = path.split_first()?;
        let node = self.get(first.as_ref())?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_group()?.find(rest)
    }

    /// The table reached by following `path`; the empty path is `self`.
    pub fn find_table<S: AsRef<str>>(&self, path: &[S]) -> Option<&RouteTable<L>> {
        if path.is_empty() {
            return Some(self);
        }
        self.find(path)?.as_group()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteNode<L>)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Every leaf with its full route path, depth first.
    pub fn leaves(&self) -> Vec<(Vec<String>, &L)> {
        let mut found = Vec::new();
        self.collect_leaves(&mut Vec::new(), &mut found);
        found
    }

    fn collect_leaves<'a>(
        &'a self,
        prefix: &mut Vec<String>,
        found: &mut Vec<(Vec<String>, &'a L)>,
    ) {
        for (name, node) in &self.entries {
            prefix.push(name.clone());
            match node {
                RouteNode::Leaf(leaf) => found.push((prefix.clone(), leaf)),
                RouteNode::Group(table) => table.collect_leaves(prefix, found),
            }
            prefix.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_segment(name: &str) -> Result<(), RouteTableError> {
    if name.is_empty() {
        return Err(RouteTableError::Empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(RouteTableError::Whitespace(name.to_string()));
    }
    if name.starts_with('-') {
        return Err(RouteTableError::LeadingHyphen(name.to_string()));
    }
    Ok(())
}
