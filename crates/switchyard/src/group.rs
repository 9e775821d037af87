//! Commands with subcommands.

use switchyard_input::ArgumentDecl;

use crate::command::{Command, CommandContext, Routes, GROUP_COMMAND_ARGUMENT};
use crate::output::Output;

/// A command that routes to its own table of subcommands.
///
/// The group binds a single optional `command` argument. Without one it
/// prints its help; with one it resolves the token in its table and runs the
/// subcommand with the rest of the input, options included.
///
/// ```rust
/// use switchyard::{BufferOutput, CommandEntry, CommandGroup, CommandRoutes, FnCommand, Routes};
///
/// let release = CommandGroup::new(
///     "Manage releases",
///     Routes::new().command("list", FnCommand::new("List releases", |_, _| Ok(0)))?,
/// );
/// let entry = CommandEntry::new(release)?;
///
/// let route = vec!["release".to_string()];
/// let mut out = BufferOutput::new();
/// assert_eq!(entry.run(&route, &["list".to_string()], &mut out), 0);
/// # Ok::<(), switchyard::CliError>(())
/// ```
#[derive(Debug)]
pub struct CommandGroup {
    description: String,
    routes: Routes,
}

impl CommandGroup {
    pub fn new(description: impl Into<String>, routes: Routes) -> Self {
        Self {
            description: description.into(),
            routes,
        }
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }
}

impl Command for CommandGroup {
    fn description(&self) -> &str {
        &self.description
    }

    fn arguments(&self) -> Vec<ArgumentDecl> {
        vec![ArgumentDecl::new(GROUP_COMMAND_ARGUMENT, "Command to run").optional()]
    }

    /// Never reached: groups dispatch to their subcommands.
    fn handle(&self, _ctx: &CommandContext, _out: &mut dyn Output) -> anyhow::Result<i32> {
        Ok(0)
    }

    fn subcommands(&self) -> Option<&Routes> {
        Some(&self.routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandEntry, CommandRoutes, FnCommand};
    use crate::output::{BufferOutput, Role};
    use switchyard_input::OptionDecl;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn release() -> CommandEntry {
        let create = FnCommand::new("Create a release", |ctx, out| {
            let version = ctx.arguments.get_str("version").unwrap_or_default();
            let draft = ctx.options.is_set("--draft");
            out.write_ln(
                &format!("{} {} draft={}", ctx.route(), version, draft),
                Role::Plain,
            );
            Ok(0)
        })
        .argument(ArgumentDecl::new("version", "Version").required())
        .option(OptionDecl::new("--draft", "Draft release").flag());

        let routes = Routes::new()
            .command("create", create)
            .unwrap()
            .group(
                "notes",
                Routes::new()
                    .command("show", FnCommand::new("Show notes", |_, _| Ok(7)))
                    .unwrap(),
            )
            .unwrap();

        CommandEntry::new(CommandGroup::new("Manage releases", routes)).unwrap()
    }

    #[test]
    fn test_group_forwards_to_subcommand() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(
            &strings(&["release"]),
            &strings(&["--draft", "create", "1.2.0"]),
            &mut out,
        );
        assert_eq!(status, 0);
        assert_eq!(out.stdout(), "release create 1.2.0 draft=true\n");
    }

    #[test]
    fn test_group_without_command_prints_help() {
        let entry = release();
        let mut out = BufferOutput::new();
        assert_eq!(entry.run(&strings(&["release"]), &[], &mut out), 0);
        let text = out.stdout();
        assert!(text.starts_with(
            "release: Manage releases\n  Usage: release [command] [options...]\n"
        ));
        assert!(text.contains("Available commands:\n"));
        assert!(text.contains("  create      Create a release\n"));
        assert!(text.contains("    └ show    Show notes\n"));
    }

    #[test]
    fn test_group_help_flag_alone_prints_help() {
        let entry = release();
        let mut out = BufferOutput::new();
        assert_eq!(entry.run(&strings(&["release"]), &strings(&["-h"]), &mut out), 0);
        assert!(out.stdout().contains("Available commands:"));
    }

    #[test]
    fn test_group_forwards_help_to_subcommand() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(
            &strings(&["release"]),
            &strings(&["create", "1.0", "--help"]),
            &mut out,
        );
        assert_eq!(status, 0);
        assert!(out.stdout().starts_with("release create: Create a release\n"));
    }

    #[test]
    fn test_subcommand_help_flag_does_not_hide_binding_errors() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(&strings(&["release"]), &strings(&["create", "-h"]), &mut out);
        assert_eq!(status, 1);
        assert_eq!(out.stderr(), "Error: Missing required \"version\" argument\n");
        assert!(out.stdout().contains("release create: Create a release\n"));
    }

    #[test]
    fn test_group_reaches_nested_tables() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(&strings(&["release"]), &strings(&["notes", "show"]), &mut out);
        assert_eq!(status, 7);
    }

    #[test]
    fn test_group_partial_nested_route_lists_table() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(&strings(&["release"]), &strings(&["notes"]), &mut out);
        assert_eq!(status, 0);
        assert!(out.stdout().starts_with("release notes\n"));
        assert!(out.stdout().contains("  show    Show notes\n"));
    }

    #[test]
    fn test_unknown_subcommand_reports_full_route() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(&strings(&["release"]), &strings(&["publish"]), &mut out);
        assert_eq!(status, 1);
        assert_eq!(out.stderr(), "Error: Command \"release publish\" not found.\n");
        assert!(out.stdout().contains("release: Manage releases"));
    }

    #[test]
    fn test_subcommand_binding_error_prints_subcommand_help() {
        let entry = release();
        let mut out = BufferOutput::new();
        let status = entry.run(&strings(&["release"]), &strings(&["create"]), &mut out);
        assert_eq!(status, 1);
        assert!(out.stderr().contains("Missing required \"version\" argument"));
        assert!(out.stdout().contains("release create: Create a release"));
    }

    #[test]
    fn test_empty_group() {
        let entry = CommandEntry::new(CommandGroup::new("Nothing here", Routes::new())).unwrap();
        let mut out = BufferOutput::new();
        assert_eq!(entry.run(&strings(&["empty"]), &[], &mut out), 0);
        assert!(out.stdout().ends_with("\nCommands not available.\n"));
    }

    #[test]
    fn test_group_declares_command_argument() {
        let group = CommandGroup::new("g", Routes::new());
        let args = group.arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "command");
        assert!(group.subcommands().is_some());
        assert!(group.routes().is_empty());
    }
}
