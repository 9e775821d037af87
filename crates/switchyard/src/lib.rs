//! Nested command routing and typed input binding for command-line tools.
//!
//! `switchyard` resolves an argument vector through a tree of route tables
//! to a command, binds the remaining tokens against that command's declared
//! arguments and options, and turns user mistakes into an error message plus
//! the right help page instead of a crash.
//!
//! # Crates
//!
//! - [`switchyard_input`]: declarations, validation, token binding
//! - [`switchyard_dispatch`]: route tables and route resolution
//! - `switchyard` (this crate): commands, groups, help, output, the [`Cli`]
//!
//! # Quick Start
//!
//! ```rust
//! use switchyard::{
//!     ArgumentDecl, BufferOutput, Cli, CommandRoutes, FnCommand, OptionDecl, Role, Routes,
//! };
//!
//! let deploy = FnCommand::new("Deploy a build", |ctx, out| {
//!     let env = ctx.arguments.get_str("env").unwrap_or("staging");
//!     let force = ctx.options.is_set("--force");
//!     out.write_ln(&format!("deploying to {env} (force: {force})"), Role::Plain);
//!     Ok(0)
//! })
//! .argument(ArgumentDecl::new("env", "Target environment").required())
//! .option(OptionDecl::new("--force", "Skip checks").alias("-f").flag());
//!
//! let cli = Cli::builder()
//!     .name("shipit")
//!     .command("deploy", deploy)
//!     .build()?;
//!
//! let mut out = BufferOutput::new();
//! assert_eq!(cli.run(&["deploy", "production", "-f"], &mut out), 0);
//! assert_eq!(out.stdout(), "deploying to production (force: true)\n");
//!
//! // Binding errors print the message and the command's help.
//! let mut out = BufferOutput::new();
//! assert_eq!(cli.run(&["deploy"], &mut out), 1);
//! assert!(out.stderr().contains("Missing required \"env\" argument"));
//! assert!(out.stdout().contains("Usage: deploy [env] [options...]"));
//! # Ok::<(), switchyard::CliError>(())
//! ```
//!
//! # Exit status
//!
//! | Outcome | Status | Output |
//! |---------|--------|--------|
//! | handler returned `Ok(n)` | `n` | whatever the handler wrote |
//! | `--help`, empty input, partial route | 0 | help page |
//! | binding error, unknown route | 1 | error + help |
//! | [`CommandError`] | 1 | error, help if requested |
//! | any other error | 1 | error + full chain on stderr |

mod cli;
mod command;
mod error;
mod group;
mod help;
mod layout;
mod output;
mod theme;

pub use cli::{Cli, CliBuilder};
pub use command::{
    Command, CommandContext, CommandEntry, CommandRoutes, CommandSpec, FnCommand, Routes,
    GROUP_COMMAND_ARGUMENT,
};
pub use error::{recoverable, CliError, CommandError};
pub use group::CommandGroup;
pub use help::{
    write_command_help, write_group_help, write_table_help, HelpConfig, HelpNode, HelpTree,
    DEFAULT_TIP,
};
pub use layout::{display_width, padding, Cell, Grid};
pub use output::{BufferOutput, ConsoleOutput, Output, Role, TextMode};
pub use theme::Theme;

pub use switchyard_dispatch::{RouteError, RouteNode, RouteTable, RouteTableError};
pub use switchyard_input::{
    ArgumentBag, ArgumentDecl, ArgumentDef, Bag, InputError, OptionBag, OptionDecl, OptionDef,
    ValidationError, Value, ValueType,
};

pub use switchyard_dispatch;
pub use switchyard_input;
