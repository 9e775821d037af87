//! Help pages.
//!
//! Three layouts share the same building blocks:
//!
//! - command help: signature, argument grid, option grid, required legend
//! - group help: signature of a command group and the tree of its commands
//! - table help: the tree of a route table, used for the top level and for
//!   partially typed routes
//!
//! The command tree itself is available as a [`HelpTree`], which serializes
//! to a nested JSON object of `name -> description | subtree`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use switchyard_dispatch::RouteNode;

use crate::command::{CommandSpec, Routes};
use crate::layout::{Cell, Grid};
use crate::output::{Output, Role};

/// Tip printed under command listings.
pub const DEFAULT_TIP: &str =
    "(!) Tip: Run command with \"--help\" or \"-h\" option to show specific command help.";

const REQUIRED_MARKER: &str = "*";
const TREE_INDENT: usize = 2;
const TREE_BRANCH: &str = "└ ";

/// Settings shared by every help page of one CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpConfig {
    /// Line printed under command listings; `None` omits it.
    pub tip: Option<String>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            tip: Some(DEFAULT_TIP.to_string()),
        }
    }
}

// ============================================================================
// Command tree
// ============================================================================

/// The command tree of a route table, with descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpTree {
    entries: Vec<(String, HelpNode)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpNode {
    /// A command and its description. Command groups appear here too.
    Command(String),
    /// A nested route table.
    Group(HelpTree),
}

impl HelpTree {
    pub fn from_routes(routes: &Routes) -> Self {
        let entries = routes
            .iter()
            .map(|(name, node)| {
                let node = match node {
                    RouteNode::Leaf(entry) => HelpNode::Command(entry.description().to_string()),
                    RouteNode::Group(table) => HelpNode::Group(HelpTree::from_routes(table)),
                };
                (name.to_string(), node)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&HelpNode> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HelpNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Name and description columns, nested entries indented under their
    /// group.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::new(TREE_INDENT, 4);
        self.push_rows(0, &mut grid);
        grid
    }

    fn push_rows(&self, level: usize, grid: &mut Grid) {
        for (name, node) in &self.entries {
            let mut cell = Cell::empty();
            if level > 0 {
                cell = cell.push(
                    format!("{}{}", " ".repeat(TREE_INDENT * level), TREE_BRANCH),
                    Role::Plain,
                );
            }
            let cell = cell.push(name.clone(), Role::Command);

            match node {
                HelpNode::Command(description) => {
                    grid.row(vec![cell, Cell::new(description.clone(), Role::Description)]);
                }
                HelpNode::Group(tree) => {
                    grid.row(vec![cell, Cell::empty()]);
                    tree.push_rows(level + 1, grid);
                }
            }
        }
    }
}

impl Serialize for HelpTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, node) in &self.entries {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}

impl Serialize for HelpNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HelpNode::Command(description) => serializer.serialize_str(description),
            HelpNode::Group(tree) => tree.serialize(serializer),
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

fn write_signature(out: &mut dyn Output, title: &str, description: &str, usage: &str) {
    out.write(title, Role::Command);
    if !description.is_empty() {
        out.write(&format!(": {description}"), Role::Plain);
    }
    out.write("\n", Role::Plain);
    out.write("  ", Role::Plain);
    out.write("Usage:", Role::Heading);
    out.write_ln(&format!(" {usage}"), Role::Plain);
}

fn write_commands(out: &mut dyn Output, routes: &Routes, config: &HelpConfig) {
    out.space();
    if routes.is_empty() {
        out.write_ln("Commands not available.", Role::Plain);
        return;
    }

    out.write_ln("Available commands:", Role::Heading);
    HelpTree::from_routes(routes).grid().write_to(out);

    if let Some(tip) = &config.tip {
        out.space();
        out.write_ln(tip, Role::Tip);
    }
}

/// Help for a single command.
pub fn write_command_help(out: &mut dyn Output, route: &str, spec: &CommandSpec) {
    write_signature(out, route, &spec.description, &spec.usage(route));

    if !spec.arguments.is_empty() {
        out.space();
        out.write_ln("  Command arguments:", Role::Heading);
        let mut grid = Grid::new(4, 4);
        for arg in &spec.arguments {
            let mut name = Cell::new(arg.name.clone(), Role::Command);
            if arg.required {
                name = name.push(REQUIRED_MARKER, Role::Required);
            }
            grid.row(vec![name, Cell::new(arg.description.clone(), Role::Plain)]);
        }
        grid.write_to(out);
    }

    if !spec.options.is_empty() {
        out.space();
        out.write_ln("  Available options:", Role::Heading);
        let mut grid = Grid::new(4, 4);
        for opt in &spec.options {
            grid.row(vec![
                Cell::new(opt.display_names(), Role::Command),
                Cell::new(opt.description.clone(), Role::Plain),
            ]);
        }
        grid.write_to(out);

        out.space();
        out.write(REQUIRED_MARKER, Role::Required);
        out.write_ln(": Required argument", Role::Plain);
    }
}

/// Help for a command group: its signature and the commands it routes to.
pub fn write_group_help(
    out: &mut dyn Output,
    route: &str,
    spec: &CommandSpec,
    routes: &Routes,
    config: &HelpConfig,
) {
    write_signature(out, route, &spec.description, &spec.usage(route));
    write_commands(out, routes, config);
}

/// Help for a route table reached as `title`.
pub fn write_table_help(
    out: &mut dyn Output,
    title: &str,
    description: &str,
    routes: &Routes,
    config: &HelpConfig,
) {
    let usage = format!("{title} [command] [...args] [...options]");
    write_signature(out, title, description, usage.trim_start());
    write_commands(out, routes, config);
}
