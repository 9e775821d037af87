//! Error types for declaration validation and token binding.

/// A command's own declarations are self-contradictory.
///
/// Raised once, when a command is registered, never while handling user
/// input. These errors never trigger help output: they describe a defect in
/// the program, not in the invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required argument was declared after an optional one.
    #[error("Required argument \"{0}\" cannot follow an optional.")]
    RequiredAfterOptional(String),

    /// Two arguments share a name.
    #[error("Argument \"{0}\" cannot be defined twice.")]
    DuplicateArgument(String),

    /// An option name or alias is used more than once.
    #[error("Option \"{0}\" cannot be defined twice.")]
    DuplicateOption(String),

    /// A single-hyphen option with more than one character.
    #[error("Option \"{0}\" (with only one \"-\") must have only one character.")]
    ShortOptionTooLong(String),

    /// An option name that starts with neither `-` nor `--`, or has nothing after them.
    #[error("Option \"{0}\" must start with '-' or '--' followed by a name.")]
    InvalidOptionName(String),
}

impl ValidationError {
    /// Declaration errors never print command help.
    pub fn prints_help(&self) -> bool {
        false
    }
}

/// The user's tokens could not be bound to a command's declarations.
///
/// Every variant is recoverable: the dispatch shell reports the message and
/// prints the command's help.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A numeric argument or option received a non-numeric literal.
    #[error("Argument \"{name}\" failed: \"{value}\" is not a valid number")]
    InvalidNumber { name: String, value: String },

    /// A boolean argument or option received something other than true/false/1/0.
    #[error("Argument \"{name}\" failed: \"{value}\" is not a valid boolean")]
    InvalidBoolean { name: String, value: String },

    /// A required positional argument was not supplied.
    #[error("Missing required \"{0}\" argument")]
    MissingArgument(String),

    /// A required option was not supplied.
    #[error("Missing required \"{0}\" option")]
    MissingOption(String),

    /// A value-taking option appeared without a value.
    #[error("Option requires argument: {0}")]
    MissingValue(String),

    /// An option token that matches no declared name or alias.
    #[error("Unknown or unexpected option: {0}")]
    UnknownOption(String),
}

impl InputError {
    /// Binding errors always print the command's help.
    pub fn prints_help(&self) -> bool {
        true
    }

    /// The argument or option name this error refers to.
    pub fn subject(&self) -> &str {
        match self {
            InputError::InvalidNumber { name, .. } | InputError::InvalidBoolean { name, .. } => {
                name
            }
            InputError::MissingArgument(name)
            | InputError::MissingOption(name)
            | InputError::MissingValue(name)
            | InputError::UnknownOption(name) => name,
        }
    }
}
