//! Structural checks over a command's normalized declarations.
//!
//! These run when a command is registered. A command that fails them is
//! never invoked.

use std::collections::HashSet;

use crate::definition::{ArgumentDef, OptionDef};
use crate::error::ValidationError;

/// Validates both argument and option definitions.
pub fn validate(arguments: &[ArgumentDef], options: &[OptionDef]) -> Result<(), ValidationError> {
    validate_arguments(arguments)?;
    validate_options(options)
}

/// Required arguments come first, and every name is unique.
pub fn validate_arguments(arguments: &[ArgumentDef]) -> Result<(), ValidationError> {
    let mut seen_optional = false;
    for arg in arguments {
        if seen_optional && arg.required {
            return Err(ValidationError::RequiredAfterOptional(arg.name.clone()));
        }
        seen_optional = !arg.required;
    }

    let mut names = HashSet::new();
    for arg in arguments {
        if !names.insert(arg.name.as_str()) {
            return Err(ValidationError::DuplicateArgument(arg.name.clone()));
        }
    }

    Ok(())
}

/// Every name and alias is unique across the command, and hyphenated correctly.
pub fn validate_options(options: &[OptionDef]) -> Result<(), ValidationError> {
    let mut names = HashSet::new();
    for name in options.iter().flat_map(OptionDef::names) {
        if !names.insert(name) {
            return Err(ValidationError::DuplicateOption(name.to_string()));
        }
    }

    for name in options.iter().flat_map(OptionDef::names) {
        validate_option_name(name)?;
    }

    Ok(())
}

/// `--long` (anything after the prefix) or `-x` (exactly one character).
pub fn validate_option_name(name: &str) -> Result<(), ValidationError> {
    if let Some(long) = name.strip_prefix("--") {
        if long.is_empty() {
            return Err(ValidationError::InvalidOptionName(name.to_string()));
        }
        return Ok(());
    }

    if let Some(short) = name.strip_prefix('-') {
        return match short.chars().count() {
            0 => Err(ValidationError::InvalidOptionName(name.to_string())),
            1 => Ok(()),
            _ => Err(ValidationError::ShortOptionTooLong(name.to_string())),
        };
    }

    Err(ValidationError::InvalidOptionName(name.to_string()))
}
