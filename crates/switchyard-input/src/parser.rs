//! Token binding.
//!
//! [`InputParser`] turns the tokens left over after routing into an
//! [`ArgumentBag`] and an [`OptionBag`] for one command.
//!
//! # Scanning
//!
//! Tokens are scanned once, left to right:
//!
//! ```text
//! --                 ends option scanning; everything after is positional
//! --name=value       option with an inline value
//! --name [value]     boolean options bind `true`; others take the next token
//! -x [value]         same, short form
//! -abc               bundled short flags: -a -b -c (only -c may take a value)
//! -                  positional
//! anything else      positional
//! ```
//!
//! Positional tokens are then paired, in order, with the argument
//! definitions: the Nth positional binds to the Nth definition.
//!
//! # Example
//!
//! ```
//! use switchyard_input::{bind, normalize_arguments, normalize_options, ArgumentDecl, OptionDecl, ValueType};
//!
//! let args = normalize_arguments(vec![
//!     ArgumentDecl::new("version", "Version").required(),
//!     ArgumentDecl::new("replicas", "Replicas").value_type(ValueType::Number),
//! ]);
//! let opts = normalize_options(vec![OptionDecl::new("--force", "Force").alias("-f").flag()]);
//!
//! let input = bind(&["1.4.0", "-f", "3"], &args, &opts).unwrap();
//! assert_eq!(input.arguments.get_str("version"), Some("1.4.0"));
//! assert_eq!(input.arguments.get_i64("replicas"), Some(3));
//! assert!(input.options.is_set("--force"));
//! assert!(input.options.is_set("-f"));
//! ```

use std::collections::HashMap;

use tracing::trace;

use crate::bag::{ArgumentBag, Bag, OptionBag};
use crate::definition::{ArgumentDef, OptionDef, ValueType, HELP_OPTION};
use crate::error::InputError;
use crate::value::{coerce, Value};

/// How tokens that match no declared option are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Unknown options are an error.
    #[default]
    Strict,
    /// Unknown options are skipped. Used by command groups, whose
    /// subcommands declare options the group itself does not know.
    Permissive,
}

/// The bound result of one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedInput {
    pub arguments: ArgumentBag,
    pub options: OptionBag,
}

impl ParsedInput {
    /// Whether the implicit help option was supplied.
    pub fn wants_help(&self) -> bool {
        self.options.is_set(HELP_OPTION)
    }
}

/// Binds tokens against a command's normalized definitions.
#[derive(Debug, Clone)]
pub struct InputParser<'d> {
    arguments: &'d [ArgumentDef],
    options: &'d [OptionDef],
    lookup: HashMap<&'d str, usize>,
    mode: ParseMode,
}

impl<'d> InputParser<'d> {
    pub fn new(arguments: &'d [ArgumentDef], options: &'d [OptionDef]) -> Self {
        let mut lookup = HashMap::new();
        for (index, def) in options.iter().enumerate() {
            for name in def.names() {
                lookup.entry(name).or_insert(index);
            }
        }

        Self {
            arguments,
            options,
            lookup,
            mode: ParseMode::Strict,
        }
    }

    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn permissive(self) -> Self {
        self.mode(ParseMode::Permissive)
    }

    /// Scans `tokens` and binds them.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParsedInput, InputError> {
        let scan = self.scan(tokens)?;
        let arguments = self.bind_arguments(&scan.positionals)?;
        let options = self.bind_options(scan.values)?;
        Ok(ParsedInput { arguments, options })
    }

    fn option(&self, name: &str) -> Option<(usize, &'d OptionDef)> {
        self.lookup
            .get(name)
            .map(|&index| (index, &self.options[index]))
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    fn scan<'t, S: AsRef<str>>(&self, tokens: &'t [S]) -> Result<Scan<'t>, InputError> {
        let mut scan = Scan {
            positionals: Vec::new(),
            values: vec![Vec::new(); self.options.len()],
        };
        let mut rest = tokens.iter().map(AsRef::as_ref);
        let mut terminated = false;

        while let Some(token) = rest.next() {
            if terminated || !is_option_like(token) {
                trace!(token, "positional");
                scan.positionals.push(token);
            } else if token == "--" {
                terminated = true;
            } else if token.starts_with("--") {
                let (name, inline) = match token.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (token, None),
                };
                self.take_option(name, inline, &mut rest, &mut scan)?;
            } else {
                self.take_short(token, &mut rest, &mut scan)?;
            }
        }

        Ok(scan)
    }

    /// `-x`, `-x=value` or a bundle such as `-abc`.
    fn take_short<'t, I>(
        &self,
        token: &'t str,
        rest: &mut I,
        scan: &mut Scan<'t>,
    ) -> Result<(), InputError>
    where
        I: Iterator<Item = &'t str>,
    {
        let body = &token[1..];

        if let Some((flag, inline)) = body.split_once('=') {
            if flag.chars().count() == 1 {
                return self.take_option(&token[..1 + flag.len()], Some(inline), rest, scan);
            }
            // Bundles take no inline value; no declared name can match.
            return self.take_option(token, None, rest, scan);
        }

        let flags: Vec<char> = body.chars().collect();
        if flags.len() == 1 {
            return self.take_option(token, None, rest, scan);
        }

        let last = flags.len() - 1;
        for (i, flag) in flags.iter().enumerate() {
            let name = format!("-{}", flag);
            if i < last {
                if let Some((_, def)) = self.option(&name) {
                    if def.takes_value() {
                        return Err(InputError::MissingValue(name));
                    }
                }
            }
            self.take_option(&name, None, rest, scan)?;
        }

        Ok(())
    }

    fn take_option<'t, I>(
        &self,
        name: &str,
        inline: Option<&str>,
        rest: &mut I,
        scan: &mut Scan<'t>,
    ) -> Result<(), InputError>
    where
        I: Iterator<Item = &'t str>,
    {
        let Some((index, def)) = self.option(name) else {
            return match self.mode {
                ParseMode::Strict => Err(InputError::UnknownOption(name.to_string())),
                ParseMode::Permissive => {
                    trace!(option = name, "skipping undeclared option");
                    Ok(())
                }
            };
        };

        let value = if def.takes_value() {
            let raw = match inline {
                Some(raw) => raw,
                None => rest
                    .next()
                    .ok_or_else(|| InputError::MissingValue(name.to_string()))?,
            };
            coerce(&def.name, raw, def.value_type)?
        } else {
            match inline {
                Some(raw) => coerce(&def.name, raw, ValueType::Boolean)?,
                None => Value::Bool(true),
            }
        };

        trace!(option = %def.name, %value, "option");
        scan.values[index].push(value);
        Ok(())
    }

    // ========================================================================
    // Binding
    // ========================================================================

    fn bind_arguments(&self, positionals: &[&str]) -> Result<ArgumentBag, InputError> {
        let mut bag = Bag::new();

        for (index, def) in self.arguments.iter().enumerate() {
            match positionals.get(index) {
                Some(raw) => bag.insert(def.name.clone(), coerce(&def.name, raw, def.value_type)?),
                None if def.required => return Err(InputError::MissingArgument(def.name.clone())),
                None => {}
            }
        }

        if positionals.len() > self.arguments.len() {
            trace!(
                surplus = positionals.len() - self.arguments.len(),
                "ignoring positional tokens beyond declared arguments"
            );
        }

        Ok(ArgumentBag::new(bag))
    }

    fn bind_options(&self, collected: Vec<Vec<Value>>) -> Result<OptionBag, InputError> {
        let mut bag = Bag::new();

        for (def, mut values) in self.options.iter().zip(collected) {
            let value = if def.multiple && !values.is_empty() {
                Some(Value::List(values))
            } else {
                values.pop()
            };

            let Some(value) = value else {
                if def.required {
                    return Err(InputError::MissingOption(def.name.clone()));
                }
                continue;
            };

            for name in def.names() {
                bag.insert(name, value.clone());
            }
        }

        Ok(OptionBag::new(bag))
    }
}

struct Scan<'t> {
    positionals: Vec<&'t str>,
    /// Values collected per option, indexed like the definitions.
    values: Vec<Vec<Value>>,
}

/// A leading hyphen marks an option, except for a lone `-`.
pub fn is_option_like(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1
}

/// Binds `tokens` in strict mode.
pub fn bind<S: AsRef<str>>(
    tokens: &[S],
    arguments: &[ArgumentDef],
    options: &[OptionDef],
) -> Result<ParsedInput, InputError> {
    InputParser::new(arguments, options).parse(tokens)
}
