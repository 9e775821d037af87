//! Commands and the per-command dispatch shell.
//!
//! A [`Command`] declares its arguments and options and handles bound input.
//! Registering it wraps it in a [`CommandEntry`], which normalizes and
//! validates the declarations once and then runs invocations:
//!
//! ```text
//! argv ─→ bind ─→ --help? ─→ help page, status 0
//!                    └──────→ Command::handle(ctx, out)
//! ```
//!
//! A command that returns [`Command::subcommands`] is a group: instead of
//! handling input itself it routes its first positional token through its
//! own route table.
//!
//! # Example
//!
//! ```rust
//! use switchyard::{
//!     ArgumentDecl, BufferOutput, Command, CommandContext, CommandEntry, Output, Role,
//! };
//!
//! struct Greet;
//!
//! impl Command for Greet {
//!     fn description(&self) -> &str {
//!         "Say hello"
//!     }
//!
//!     fn arguments(&self) -> Vec<ArgumentDecl> {
//!         vec![ArgumentDecl::new("name", "Who to greet").required()]
//!     }
//!
//!     fn handle(&self, ctx: &CommandContext, out: &mut dyn Output) -> anyhow::Result<i32> {
//!         let name = ctx.arguments.get_str("name").unwrap_or_default();
//!         out.write_ln(&format!("Hello, {name}!"), Role::Plain);
//!         Ok(0)
//!     }
//! }
//!
//! let entry = CommandEntry::new(Greet)?;
//! let mut out = BufferOutput::new();
//! assert_eq!(entry.run(&["greet".to_string()], &["Ada".to_string()], &mut out), 0);
//! assert_eq!(out.stdout(), "Hello, Ada!\n");
//! # Ok::<(), switchyard::ValidationError>(())
//! ```

use std::fmt;

use switchyard_dispatch::{path_to_string, resolve, RouteError, RouteTable, Target};
use switchyard_input::{
    normalize_arguments, normalize_options, validate, ArgumentBag, ArgumentDecl, ArgumentDef,
    InputParser, OptionBag, OptionDecl, OptionDef, ValidationError,
};
use tracing::{debug, warn};

use crate::error::{recoverable, CliError};
use crate::help::{self, HelpConfig};
use crate::output::{Output, Role};

/// A route table whose leaves are registered commands.
pub type Routes = RouteTable<CommandEntry>;

/// Name of the positional argument groups bind their subcommand to.
pub const GROUP_COMMAND_ARGUMENT: &str = "command";

/// An invocable command.
///
/// Commands are shared between invocations and called through `&self`, so
/// they must be `Send + Sync`. State that changes per call belongs in the
/// handler, not in the command.
pub trait Command: Send + Sync {
    fn description(&self) -> &str {
        ""
    }

    /// Positional arguments, in binding order.
    fn arguments(&self) -> Vec<ArgumentDecl> {
        Vec::new()
    }

    /// Options. `--help`/`-h` is added automatically.
    fn options(&self) -> Vec<OptionDecl> {
        Vec::new()
    }

    /// Runs the command. The returned integer is the process status.
    ///
    /// Returning a [`CommandError`](crate::CommandError) reports its message
    /// and, if it asks for it, this command's help.
    fn handle(&self, ctx: &CommandContext, out: &mut dyn Output) -> anyhow::Result<i32>;

    /// A command with subcommands is a group and is never handled directly.
    fn subcommands(&self) -> Option<&Routes> {
        None
    }
}

/// Input and location of one invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandContext {
    /// Segments that led to this command, e.g. `["deploy", "staging"]`.
    pub command_path: Vec<String>,
    pub arguments: ArgumentBag,
    pub options: OptionBag,
}

impl CommandContext {
    pub fn new(command_path: Vec<String>, arguments: ArgumentBag, options: OptionBag) -> Self {
        Self {
            command_path,
            arguments,
            options,
        }
    }

    /// The command path as typed, e.g. `"deploy staging"`.
    pub fn route(&self) -> String {
        path_to_string(&self.command_path)
    }
}

// ============================================================================
// Normalized declarations
// ============================================================================

/// A command's declarations after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandSpec {
    pub description: String,
    pub arguments: Vec<ArgumentDef>,
    pub options: Vec<OptionDef>,
}

impl CommandSpec {
    /// Normalizes the command's declarations and validates them.
    pub fn of(command: &dyn Command) -> Result<Self, ValidationError> {
        let spec = Self {
            description: command.description().to_string(),
            arguments: normalize_arguments(command.arguments()),
            options: normalize_options(command.options()),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(&self.arguments, &self.options)
    }

    /// `route [a][b] [options...]`
    pub fn usage(&self, route: &str) -> String {
        let mut usage = route.to_string();
        if !self.arguments.is_empty() {
            usage.push(' ');
            for arg in &self.arguments {
                usage.push_str(&format!("[{}]", arg.name));
            }
        }
        if !self.options.is_empty() {
            usage.push_str(" [options...]");
        }
        usage
    }

    pub fn has_required_arguments(&self) -> bool {
        self.arguments.iter().any(|arg| arg.required)
    }
}

// ============================================================================
// Registered commands
// ============================================================================

/// A command together with its validated declarations.
pub struct CommandEntry {
    command: Box<dyn Command>,
    spec: CommandSpec,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("spec", &self.spec)
            .field("group", &self.is_group())
            .finish_non_exhaustive()
    }
}

impl CommandEntry {
    /// Validates `command`'s declarations. A malformed command never
    /// registers.
    pub fn new<C: Command + 'static>(command: C) -> Result<Self, ValidationError> {
        let spec = CommandSpec::of(&command)?;
        Ok(Self {
            command: Box::new(command),
            spec,
        })
    }

    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    pub fn description(&self) -> &str {
        &self.spec.description
    }

    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }

    pub fn subcommands(&self) -> Option<&Routes> {
        self.command.subcommands()
    }

    pub fn is_group(&self) -> bool {
        self.subcommands().is_some()
    }

    /// Runs the command at `route` with its share of the argument vector.
    pub fn run(&self, route: &[String], argv: &[String], out: &mut dyn Output) -> i32 {
        self.run_with(route, argv, out, &HelpConfig::default())
    }

    /// Like [`run`](Self::run), with explicit help settings.
    pub fn run_with(
        &self,
        route: &[String],
        argv: &[String],
        out: &mut dyn Output,
        config: &HelpConfig,
    ) -> i32 {
        match self.dispatch(route, argv, out, config) {
            Ok(status) => status,
            Err(err) => self.report(route, &err, out, config),
        }
    }

    fn dispatch(
        &self,
        route: &[String],
        argv: &[String],
        out: &mut dyn Output,
        config: &HelpConfig,
    ) -> anyhow::Result<i32> {
        self.spec.validate().map_err(CliError::from)?;

        if let Some(routes) = self.subcommands() {
            return self.dispatch_group(routes, route, argv, out, config);
        }

        let parser = InputParser::new(&self.spec.arguments, &self.spec.options);
        let input = parser.parse(argv).map_err(CliError::from)?;

        if input.wants_help() {
            self.print_help(route, out, config);
            return Ok(0);
        }

        debug!(route = %path_to_string(route), "running command");
        let ctx = CommandContext::new(route.to_vec(), input.arguments, input.options);
        self.command.handle(&ctx, out)
    }

    fn dispatch_group(
        &self,
        routes: &Routes,
        route: &[String],
        argv: &[String],
        out: &mut dyn Output,
        config: &HelpConfig,
    ) -> anyhow::Result<i32> {
        // Options belong to the subcommand; the group only looks for its
        // command token.
        let parser = InputParser::new(&self.spec.arguments, &self.spec.options).permissive();
        let input = parser.parse(argv).map_err(CliError::from)?;

        if !input.arguments.has(GROUP_COMMAND_ARGUMENT) {
            debug!(route = %path_to_string(route), "group invoked without a command");
            self.print_help(route, out, config);
            return Ok(0);
        }

        let res = resolve(routes, argv).map_err(|err| {
            let mut path = route.to_vec();
            path.extend_from_slice(err.path());
            CliError::from(RouteError::not_found(path))
        })?;

        let mut child_route = route.to_vec();
        child_route.extend(res.route_path.iter().cloned());

        match res.target {
            Target::Leaf(entry) => {
                debug!(route = %path_to_string(&child_route), "group forwarding to command");
                Ok(entry.run_with(&child_route, &res.remaining, out, config))
            }
            Target::Group(table) => {
                help::write_table_help(out, &path_to_string(&child_route), "", table, config);
                Ok(0)
            }
        }
    }

    fn report(
        &self,
        route: &[String],
        err: &anyhow::Error,
        out: &mut dyn Output,
        config: &HelpConfig,
    ) -> i32 {
        out.space();
        out.err_ln(&format!("Error: {err}"), Role::Error);
        out.space();

        match recoverable(err) {
            Some(true) => self.print_help(route, out, config),
            Some(false) => {}
            None => {
                warn!(route = %path_to_string(route), error = %err, "command failed");
                out.err_ln(&format!("{err:?}"), Role::Plain);
            }
        }
        1
    }

    /// Prints this command's help page: the command layout for leaves, the
    /// command listing for groups.
    pub fn print_help(&self, route: &[String], out: &mut dyn Output, config: &HelpConfig) {
        let route = path_to_string(route);
        match self.subcommands() {
            Some(routes) => help::write_group_help(out, &route, &self.spec, routes, config),
            None => help::write_command_help(out, &route, &self.spec),
        }
    }
}

// ============================================================================
// Building route tables
// ============================================================================

/// Adds commands to a [`Routes`] table.
///
/// ```rust
/// use switchyard::{CommandRoutes, FnCommand, Routes};
///
/// let routes = Routes::new()
///     .command("status", FnCommand::new("Show status", |_, _| Ok(0)))?;
/// assert_eq!(routes.len(), 1);
/// # Ok::<(), switchyard::CliError>(())
/// ```
pub trait CommandRoutes: Sized {
    fn command<C: Command + 'static>(
        self,
        name: impl Into<String>,
        command: C,
    ) -> Result<Self, CliError>;
}

impl CommandRoutes for Routes {
    fn command<C: Command + 'static>(
        self,
        name: impl Into<String>,
        command: C,
    ) -> Result<Self, CliError> {
        let entry = CommandEntry::new(command)?;
        Ok(self.leaf(name, entry)?)
    }
}

// ============================================================================
// Closure commands
// ============================================================================

/// A command backed by a closure.
///
/// ```rust
/// use switchyard::{ArgumentDecl, FnCommand, OptionDecl, Role};
///
/// let tag = FnCommand::new("Tag a release", |ctx, out| {
///     let version = ctx.arguments.get_str("version").unwrap_or("latest");
///     out.write_ln(version, Role::Plain);
///     Ok(0)
/// })
/// .argument(ArgumentDecl::new("version", "Version to tag"))
/// .option(OptionDecl::new("--sign", "Sign the tag").flag());
/// # let _ = tag;
/// ```
pub struct FnCommand<F> {
    description: String,
    arguments: Vec<ArgumentDecl>,
    options: Vec<OptionDecl>,
    f: F,
}

impl<F> FnCommand<F>
where
    F: Fn(&CommandContext, &mut dyn Output) -> anyhow::Result<i32> + Send + Sync,
{
    pub fn new(description: impl Into<String>, f: F) -> Self {
        Self {
            description: description.into(),
            arguments: Vec::new(),
            options: Vec::new(),
            f,
        }
    }

    pub fn argument(mut self, argument: ArgumentDecl) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn option(mut self, option: OptionDecl) -> Self {
        self.options.push(option);
        self
    }
}

impl<F> Command for FnCommand<F>
where
    F: Fn(&CommandContext, &mut dyn Output) -> anyhow::Result<i32> + Send + Sync,
{
    fn description(&self) -> &str {
        &self.description
    }

    fn arguments(&self) -> Vec<ArgumentDecl> {
        self.arguments.clone()
    }

    fn options(&self) -> Vec<OptionDecl> {
        self.options.clone()
    }

    fn handle(&self, ctx: &CommandContext, out: &mut dyn Output) -> anyhow::Result<i32> {
        (self.f)(ctx, out)
    }
}

impl<F> fmt::Debug for FnCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
