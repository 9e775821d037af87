//! Route resolution.
//!
//! The router walks a [`RouteTable`] depth first. At each level the first
//! token without a leading hyphen is the candidate segment; option-looking
//! tokens are never segments, whatever the table contains. Every step
//! consumes exactly one token, so resolution is bounded by the input length.

use tracing::{debug, trace};

use crate::error::RouteError;
use crate::path::{is_segment_token, join_path, path_to_string};
use crate::table::{RouteNode, RouteTable};

/// What a resolution landed on.
#[derive(Debug)]
pub enum Target<'t, L> {
    /// A command leaf.
    Leaf(&'t L),
    /// A table: the input ran out of segments before reaching a leaf.
    Group(&'t RouteTable<L>),
}

impl<L> Clone for Target<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Target<'_, L> {}

impl<'t, L> Target<'t, L> {
    pub fn leaf(self) -> Option<&'t L> {
        match self {
            Target::Leaf(leaf) => Some(leaf),
            Target::Group(_) => None,
        }
    }

    pub fn group(self) -> Option<&'t RouteTable<L>> {
        match self {
            Target::Group(table) => Some(table),
            Target::Leaf(_) => None,
        }
    }
}

/// Result of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolution<'t, L> {
    pub target: Target<'t, L>,
    /// Every token not consumed as a segment, in original order.
    pub remaining: Vec<String>,
    /// Segments consumed, outermost first.
    pub route_path: Vec<String>,
}

impl<'t, L> Resolution<'t, L> {
    pub fn is_leaf(&self) -> bool {
        matches!(self.target, Target::Leaf(_))
    }

    pub fn route(&self) -> String {
        path_to_string(&self.route_path)
    }
}

/// Resolves `argv` against `table`.
pub fn resolve<'t, L, S: AsRef<str>>(
    table: &'t RouteTable<L>,
    argv: &[S],
) -> Result<Resolution<'t, L>, RouteError> {
    let tokens = argv.iter().map(|s| s.as_ref().to_string()).collect();
    descend(table, tokens, Vec::new())
}

fn descend<L>(
    table: &RouteTable<L>,
    mut tokens: Vec<String>,
    path: Vec<String>,
) -> Result<Resolution<'_, L>, RouteError> {
    let Some(index) = tokens.iter().position(|token| is_segment_token(token)) else {
        debug!(route = %path_to_string(&path), "no segment left, stopping at group");
        return Ok(Resolution {
            target: Target::Group(table),
            remaining: tokens,
            route_path: path,
        });
    };

    let candidate = tokens.remove(index);
    trace!(%candidate, index, "candidate segment");
    let path = join_path(&path, &candidate);

    match table.get(&candidate) {
        None => {
            debug!(route = %path_to_string(&path), "route not found");
            Err(RouteError::not_found(path))
        }
        Some(RouteNode::Leaf(leaf)) => {
            debug!(route = %path_to_string(&path), "resolved command");
            Ok(Resolution {
                target: Target::Leaf(leaf),
                remaining: tokens,
                route_path: path,
            })
        }
        Some(RouteNode::Group(sub)) => descend(sub, tokens, path),
    }
}

/// Owns a route table and resolves argument vectors against it.
#[derive(Debug, Clone)]
pub struct Router<L> {
    routes: RouteTable<L>,
}

impl<L> Router<L> {
    pub fn new(routes: RouteTable<L>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable<L> {
        &self.routes
    }

    pub fn route<S: AsRef<str>>(&self, argv: &[S]) -> Result<Resolution<'_, L>, RouteError> {
        resolve(&self.routes, argv)
    }
}
