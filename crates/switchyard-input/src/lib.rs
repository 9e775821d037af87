//! Argument and option declarations, validation and token binding.
//!
//! `switchyard-input` is the input half of the switchyard engine. Given the
//! tokens that remain after routing, it binds them against one command's
//! declared arguments and options.
//!
//! # Pipeline
//!
//! ```text
//! ArgumentDecl / OptionDecl      (what the command declares)
//!   → normalize                  (defaults filled, --help appended)
//!   → validate                   (once, at registration)
//!   → bind(tokens)               (per invocation)
//!   → ArgumentBag + OptionBag
//! ```
//!
//! # Quick Start
//!
//! ```
//! use switchyard_input::{
//!     bind, normalize_arguments, normalize_options, validate, ArgumentDecl, OptionDecl, ValueType,
//! };
//!
//! let args = normalize_arguments(vec![ArgumentDecl::new("file", "File to read").required()]);
//! let opts = normalize_options(vec![
//!     OptionDecl::new("--lines", "Lines to show").alias("-n").value_type(ValueType::Number),
//! ]);
//! validate(&args, &opts).unwrap();
//!
//! let input = bind(&["notes.txt", "-n", "20"], &args, &opts).unwrap();
//! assert_eq!(input.arguments.get_str("file"), Some("notes.txt"));
//! assert_eq!(input.options.get_i64("--lines"), Some(20));
//! assert_eq!(input.options.get_i64("-n"), Some(20));
//! ```
//!
//! # Errors
//!
//! - [`ValidationError`]: the declarations themselves are inconsistent.
//!   Raised at registration, never prints help.
//! - [`InputError`]: the user's tokens do not fit the declarations.
//!   Recoverable, always prints help.

mod bag;
mod definition;
mod error;
mod parser;
mod validate;
mod value;

pub use bag::{ArgumentBag, Bag, OptionBag};
pub use definition::{
    help_option, normalize_arguments, normalize_options, ArgumentDecl, ArgumentDef, OptionDecl,
    OptionDef, ValueType, HELP_ALIAS, HELP_OPTION,
};
pub use error::{InputError, ValidationError};
pub use parser::{bind, is_option_like, InputParser, ParseMode, ParsedInput};
pub use validate::{validate, validate_arguments, validate_option_name, validate_options};
pub use value::{coerce, Value};
