//! Argument and option declarations.
//!
//! Commands declare their inputs with [`ArgumentDecl`] and [`OptionDecl`].
//! Any field left unset is filled in by normalization, producing the
//! canonical [`ArgumentDef`] / [`OptionDef`] used by validation, binding and
//! help rendering.
//!
//! ```
//! use switchyard_input::{normalize_arguments, normalize_options, ArgumentDecl, OptionDecl, ValueType};
//!
//! let args = normalize_arguments(vec![
//!     ArgumentDecl::new("version", "Version to deploy").required(),
//!     ArgumentDecl::new("replicas", "Replica count").value_type(ValueType::Number),
//! ]);
//! assert!(args[0].required);
//! assert_eq!(args[1].value_type, ValueType::Number);
//!
//! let opts = normalize_options(vec![OptionDecl::new("--force", "Skip checks").alias("-f")]);
//! // The implicit help option is always appended.
//! assert_eq!(opts.last().unwrap().name, "--help");
//! ```

use serde::Serialize;

/// Canonical name of the option every command receives implicitly.
pub const HELP_OPTION: &str = "--help";

/// Short alias of [`HELP_OPTION`].
pub const HELP_ALIAS: &str = "-h";

/// The type a raw token is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Passed through unchanged.
    #[default]
    String,
    /// Integer, or float when the literal contains a decimal point.
    Number,
    /// `true`/`1` or `false`/`0`. For options, a flag that takes no value.
    Boolean,
}

impl ValueType {
    /// Lowercase name, as used in help output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
        }
    }
}

// ============================================================================
// Arguments
// ============================================================================

/// A positional argument as declared by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDecl {
    pub name: String,
    pub description: String,
    pub required: Option<bool>,
    pub value_type: Option<ValueType>,
}

impl ArgumentDecl {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: None,
            value_type: None,
        }
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Marks the argument as optional explicitly.
    pub fn optional(mut self) -> Self {
        self.required = Some(false);
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Fills unset fields: not required, string typed.
    pub fn normalize(self) -> ArgumentDef {
        ArgumentDef {
            name: self.name,
            description: self.description,
            required: self.required.unwrap_or(false),
            value_type: self.value_type.unwrap_or_default(),
        }
    }
}

/// A normalized positional argument definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDef {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub value_type: ValueType,
}

// ============================================================================
// Options
// ============================================================================

/// An option as declared by a command.
///
/// Names and aliases carry their hyphens: `--verbose`, `-v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDecl {
    pub name: String,
    pub description: String,
    pub aliases: Option<Vec<String>>,
    pub value_type: Option<ValueType>,
    pub required: Option<bool>,
    pub multiple: Option<bool>,
}

impl OptionDecl {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            aliases: None,
            value_type: None,
            required: None,
            multiple: None,
        }
    }

    /// Adds an alternative name.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.get_or_insert_with(Vec::new).push(alias.into());
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Shorthand for a boolean flag.
    pub fn flag(self) -> Self {
        self.value_type(ValueType::Boolean)
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Allows the option to be repeated; values are collected into a list.
    pub fn multiple(mut self) -> Self {
        self.multiple = Some(true);
        self
    }

    /// Fills unset fields: no aliases, string typed, not required, single value.
    pub fn normalize(self) -> OptionDef {
        OptionDef {
            name: self.name,
            description: self.description,
            aliases: self.aliases.unwrap_or_default(),
            value_type: self.value_type.unwrap_or_default(),
            required: self.required.unwrap_or(false),
            multiple: self.multiple.unwrap_or(false),
        }
    }
}

/// A normalized option definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDef {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub value_type: ValueType,
    pub required: bool,
    pub multiple: bool,
}

impl OptionDef {
    /// The canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether the option consumes a value (anything but a boolean flag).
    pub fn takes_value(&self) -> bool {
        self.value_type != ValueType::Boolean
    }

    /// `--name,-n` as shown in help listings.
    pub fn display_names(&self) -> String {
        self.names().collect::<Vec<_>>().join(",")
    }
}

/// The `--help`/`-h` declaration appended to every command.
pub fn help_option() -> OptionDecl {
    OptionDecl::new(HELP_OPTION, "Show command help")
        .alias(HELP_ALIAS)
        .flag()
}

/// Normalizes a command's argument declarations, keeping their order.
pub fn normalize_arguments(decls: Vec<ArgumentDecl>) -> Vec<ArgumentDef> {
    decls.into_iter().map(ArgumentDecl::normalize).collect()
}

/// Normalizes a command's option declarations and appends the help option.
pub fn normalize_options(decls: Vec<OptionDecl>) -> Vec<OptionDef> {
    decls
        .into_iter()
        .chain(std::iter::once(help_option()))
        .map(OptionDecl::normalize)
        .collect()
}
