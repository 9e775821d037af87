//! The top-level entry point.
//!
//! [`Cli`] owns the root route table. `run` resolves the argument vector and
//! hands the rest to the command it lands on:
//!
//! - a command: the command runs and its status is returned
//! - a group (empty input or a partial route): that group's help, status 0
//! - an unknown segment: the error and the help of the deepest group that
//!   did resolve, status 1
//!
//! ```rust
//! use switchyard::{BufferOutput, Cli, CommandRoutes, FnCommand, Routes, Role};
//!
//! let cli = Cli::builder()
//!     .name("shipit")
//!     .routes(Routes::new().group(
//!         "deploy",
//!         Routes::new().command("staging", FnCommand::new("Deploy to staging", |ctx, out| {
//!             out.write_ln(&ctx.route(), Role::Plain);
//!             Ok(0)
//!         }))?,
//!     )?)
//!     .build()?;
//!
//! let mut out = BufferOutput::new();
//! assert_eq!(cli.run(&["deploy", "staging"], &mut out), 0);
//! assert_eq!(out.stdout(), "deploy staging\n");
//! # Ok::<(), switchyard::CliError>(())
//! ```

use switchyard_dispatch::{path_to_string, RouteError, RouteNode, Router, Target};
use tracing::debug;

use crate::command::{Command, CommandEntry, CommandRoutes, Routes};
use crate::error::CliError;
use crate::help::{self, HelpConfig, HelpTree};
use crate::output::{ConsoleOutput, Output, Role, TextMode};
use crate::theme::Theme;

const DEFAULT_NAME: &str = "cli";

/// A configured command-line interface.
#[derive(Debug)]
pub struct Cli {
    name: String,
    description: String,
    router: Router<CommandEntry>,
    help: HelpConfig,
    text_mode: TextMode,
    theme: Theme,
}

impl Cli {
    pub fn builder() -> CliBuilder {
        CliBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &Routes {
        self.router.routes()
    }

    /// Runs `argv` (program name already stripped) and returns the status.
    pub fn run<S: AsRef<str>>(&self, argv: &[S], out: &mut dyn Output) -> i32 {
        let res = match self.router.route(argv) {
            Ok(res) => res,
            Err(err) => return self.report_route_error(&err, out),
        };

        match res.target {
            Target::Leaf(entry) => {
                debug!(route = %res.route(), "dispatching");
                entry.run_with(&res.route_path, &res.remaining, out, &self.help)
            }
            Target::Group(table) => {
                debug!(route = %res.route(), "partial route, printing group help");
                self.write_table_help(&res.route_path, table, out);
                0
            }
        }
    }

    /// Runs against the process streams using the configured theme.
    pub fn run_console<S: AsRef<str>>(&self, argv: &[S]) -> i32 {
        let mut out = ConsoleOutput::new(self.text_mode, self.theme.clone());
        self.run(argv, &mut out)
    }

    /// Runs the process arguments, skipping the program name.
    pub fn run_env(&self) -> i32 {
        let argv: Vec<String> = std::env::args().skip(1).collect();
        self.run_console(&argv)
    }

    /// Prints the top-level help.
    pub fn help(&self, out: &mut dyn Output) {
        self.write_table_help(&[], self.router.routes(), out);
    }

    /// The full command tree with descriptions.
    pub fn help_tree(&self) -> HelpTree {
        HelpTree::from_routes(self.router.routes())
    }

    fn write_table_help(&self, path: &[String], table: &Routes, out: &mut dyn Output) {
        if path.is_empty() {
            help::write_table_help(out, &self.name, &self.description, table, &self.help);
        } else {
            let title = format!("{} {}", self.name, path_to_string(path));
            help::write_table_help(out, &title, "", table, &self.help);
        }
    }

    fn report_route_error(&self, err: &RouteError, out: &mut dyn Output) -> i32 {
        out.space();
        out.err_ln(&format!("Error: {err}"), Role::Error);
        out.space();

        let resolved = err.resolved_path();
        match self.router.routes().find_table(resolved) {
            Some(table) => self.write_table_help(resolved, table, out),
            None => self.help(out),
        }
        1
    }
}

/// Builder for [`Cli`].
///
/// Registration errors from [`command`](CliBuilder::command) and
/// [`group`](CliBuilder::group) are kept and returned by
/// [`build`](CliBuilder::build).
#[derive(Debug)]
pub struct CliBuilder {
    name: Option<String>,
    description: String,
    routes: Routes,
    help: HelpConfig,
    text_mode: TextMode,
    theme: Option<Theme>,
    error: Option<CliError>,
}

impl Default for CliBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CliBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: String::new(),
            routes: Routes::new(),
            help: HelpConfig::default(),
            text_mode: TextMode::Auto,
            theme: None,
            error: None,
        }
    }

    /// Program name shown in help. Defaults to `cli`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the root route table.
    pub fn routes(mut self, routes: Routes) -> Self {
        self.routes = routes;
        self
    }

    /// Registers a command at the root.
    pub fn command<C: Command + 'static>(mut self, name: impl Into<String>, command: C) -> Self {
        if self.error.is_some() {
            return self;
        }
        let routes = std::mem::take(&mut self.routes);
        match routes.command(name, command) {
            Ok(routes) => self.routes = routes,
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Registers a nested route table at the root.
    pub fn group(mut self, name: impl Into<String>, routes: Routes) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Err(err) = self.routes.insert(name, RouteNode::Group(routes)) {
            self.error = Some(err.into());
        }
        self
    }

    /// Replaces the tip printed under command listings.
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.help.tip = Some(tip.into());
        self
    }

    pub fn no_tip(mut self) -> Self {
        self.help.tip = None;
        self
    }

    pub fn text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn build(self) -> Result<Cli, CliError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Cli {
            name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description: self.description,
            router: Router::new(self.routes),
            help: self.help,
            text_mode: self.text_mode,
            theme: self.theme.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::FnCommand;
    use crate::output::BufferOutput;
    use switchyard_input::ArgumentDecl;

    fn cli() -> Cli {
        let staging = FnCommand::new("Deploy to staging", |ctx, out| {
            out.write_ln(&format!("{:?}", ctx.command_path), Role::Plain);
            Ok(0)
        })
        .argument(ArgumentDecl::new("build", "Build id"));

        Cli::builder()
            .name("shipit")
            .description("Ship things")
            .group("deploy", Routes::new().command("staging", staging).unwrap())
            .command("status", FnCommand::new("Show status", |_, _| Ok(0)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_routes_to_nested_command() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run(&["deploy", "staging", "42"], &mut out), 0);
        assert_eq!(out.stdout(), "[\"deploy\", \"staging\"]\n");
    }

    #[test]
    fn test_empty_input_prints_root_help() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run::<&str>(&[], &mut out), 0);
        assert!(out.stdout().starts_with("shipit: Ship things\n"));
        assert!(out.stderr().is_empty());
    }

    #[test]
    fn test_root_help_flag_prints_root_help() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run(&["--help"], &mut out), 0);
        assert!(out.stdout().contains("Available commands:"));
    }

    #[test]
    fn test_partial_route_prints_group_help() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run(&["deploy"], &mut out), 0);
        assert!(out.stdout().starts_with("shipit deploy\n"));
        assert!(out.stdout().contains("  staging    Deploy to staging\n"));
    }

    #[test]
    fn test_unknown_route_prints_deepest_group_help() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run(&["deploy", "unknown"], &mut out), 1);
        assert_eq!(out.stderr(), "Error: Command \"deploy unknown\" not found.\n");
        assert!(out.stdout().contains("shipit deploy\n"));
    }

    #[test]
    fn test_unknown_root_command() {
        let mut out = BufferOutput::new();
        assert_eq!(cli().run(&["nope"], &mut out), 1);
        assert!(out.stdout().contains("shipit: Ship things"));
    }

    #[test]
    fn test_builder_keeps_first_error() {
        let err = Cli::builder()
            .command("bad name", FnCommand::new("x", |_, _| Ok(0)))
            .command("ok", FnCommand::new("y", |_, _| Ok(0)))
            .build()
            .unwrap_err();
        assert!(matches!(err, CliError::RouteTable(_)));
    }

    #[test]
    fn test_builder_rejects_invalid_command() {
        let cmd = FnCommand::new("x", |_, _| Ok(0))
            .argument(ArgumentDecl::new("a", "A"))
            .argument(ArgumentDecl::new("a", "A again"));
        let err = Cli::builder().command("dup", cmd).build().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
        assert!(!err.prints_help());
    }

    #[test]
    fn test_builder_rejects_duplicate_group() {
        let err = Cli::builder()
            .command("deploy", FnCommand::new("x", |_, _| Ok(0)))
            .group("deploy", Routes::new())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Route \"deploy\" is registered twice");
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::builder().build().unwrap();
        assert_eq!(cli.name(), "cli");
        assert!(cli.routes().is_empty());
        let mut out = BufferOutput::new();
        cli.help(&mut out);
        assert!(out.stdout().ends_with("Commands not available.\n"));
    }

    #[test]
    fn test_custom_tip_and_no_tip() {
        let cli = Cli::builder()
            .command("status", FnCommand::new("Show status", |_, _| Ok(0)))
            .tip("See the manual.")
            .build()
            .unwrap();
        let mut out = BufferOutput::new();
        cli.help(&mut out);
        assert!(out.stdout().ends_with("\nSee the manual.\n"));

        let cli = Cli::builder()
            .command("status", FnCommand::new("Show status", |_, _| Ok(0)))
            .no_tip()
            .build()
            .unwrap();
        let mut out = BufferOutput::new();
        cli.help(&mut out);
        assert!(out.stdout().ends_with("status    Show status\n"));
    }

    #[test]
    fn test_help_tree() {
        let tree = cli().help_tree();
        assert_eq!(
            tree.to_json(),
            serde_json::json!({
                "deploy": { "staging": "Deploy to staging" },
                "status": "Show status"
            })
        );
    }

    #[test]
    fn test_cli_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cli>();
    }
}
