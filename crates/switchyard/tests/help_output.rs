//! Snapshots of every help layout.

mod common;

use insta::assert_snapshot;
use switchyard::BufferOutput;

fn stdout(argv: &[&str]) -> String {
    let mut out = BufferOutput::new();
    let status = common::shipit().run(argv, &mut out);
    assert_eq!(status, 0, "stderr: {}", out.stderr());
    out.stdout().to_string()
}

#[test]
fn test_root_help() {
    assert_snapshot!(stdout(&["--help"]), @r#"
    shipit: Ship builds to servers
      Usage: shipit [command] [...args] [...options]

    Available commands:
      deploy
        └ staging       Deploy to staging
        └ production    Deploy to production
      release           Manage releases
      status            Show deployment status

    (!) Tip: Run command with "--help" or "-h" option to show specific command help.
    "#);
}

#[test]
fn test_partial_route_help() {
    assert_snapshot!(stdout(&["deploy"]), @r#"
    shipit deploy
      Usage: shipit deploy [command] [...args] [...options]

    Available commands:
      staging       Deploy to staging
      production    Deploy to production

    (!) Tip: Run command with "--help" or "-h" option to show specific command help.
    "#);
}

#[test]
fn test_command_help() {
    assert_snapshot!(stdout(&["deploy", "staging", "42", "--help"]), @r"
    deploy staging: Deploy to staging
      Usage: deploy staging [build][note] [options...]

      Command arguments:
        build*    Build id to deploy
        note      Deployment note

      Available options:
        --force,-f     Skip health checks
        --region,-r    Target region
        --help,-h      Show command help

    *: Required argument
    ");
}

#[test]
fn test_command_without_declarations() {
    assert_snapshot!(stdout(&["status", "-h"]), @r"
    status: Show deployment status
      Usage: status [options...]

      Available options:
        --help,-h    Show command help

    *: Required argument
    ");
}

#[test]
fn test_group_help() {
    assert_snapshot!(stdout(&["release", "-h"]), @r#"
    release: Manage releases
      Usage: release [command] [options...]

    Available commands:
      create    Create a release
      list      List releases

    (!) Tip: Run command with "--help" or "-h" option to show specific command help.
    "#);
}

#[test]
fn test_group_subcommand_help() {
    assert_snapshot!(stdout(&["release", "create", "1.5", "--help"]), @r"
    release create: Create a release
      Usage: release create [version] [options...]

      Command arguments:
        version*    Release version

      Available options:
        --help,-h    Show command help

    *: Required argument
    ");
}

#[test]
fn test_help_roles() {
    let mut out = BufferOutput::with_tags();
    common::shipit().run(&["status", "--help"], &mut out);
    assert_snapshot!(out.stdout(), @r"
    [command]status[/command]: Show deployment status
      [heading]Usage:[/heading] status [options...]

    [heading]  Available options:[/heading]
        [command]--help,-h[/command]    Show command help

    [required]*[/required]: Required argument
    ");
}

#[test]
fn test_error_role() {
    let mut out = BufferOutput::with_tags();
    common::shipit().run(&["deploy", "production"], &mut out);
    assert_eq!(out.stderr(), "[error]Error: production is frozen[/error]\n");
}
