//! End-to-end runs of a small release tool through captured output.

mod common;

use switchyard::{BufferOutput, DEFAULT_TIP};

fn run(argv: &[&str]) -> (i32, BufferOutput) {
    let mut out = BufferOutput::new();
    let status = common::shipit().run(argv, &mut out);
    (status, out)
}

#[test]
fn test_nested_command_binds_arguments_and_options() {
    let (status, out) = run(&["deploy", "staging", "42", "-f", "-r", "eu", "--region", "us"]);
    assert_eq!(status, 0);
    assert_eq!(
        out.stdout(),
        "deploy staging build=42 note=- force=true regions=eu,us\n"
    );
    assert!(out.stderr().is_empty());
}

#[test]
fn test_options_may_come_before_arguments() {
    let (status, out) = run(&["deploy", "staging", "--force", "42", "hotfix"]);
    assert_eq!(status, 0);
    assert_eq!(
        out.stdout(),
        "deploy staging build=42 note=hotfix force=true regions=\n"
    );
}

#[test]
fn test_terminator_makes_dashes_positional() {
    let (status, out) = run(&["deploy", "staging", "--", "-7", "--help"]);
    assert_eq!(status, 0);
    assert_eq!(
        out.stdout(),
        "deploy staging build=-7 note=--help force=false regions=\n"
    );
}

#[test]
fn test_missing_argument_prints_error_and_command_help() {
    let (status, out) = run(&["deploy", "staging"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: Missing required \"build\" argument\n");
    assert!(out
        .stdout()
        .starts_with("\n\ndeploy staging: Deploy to staging\n"));
    assert!(out.stdout().ends_with("*: Required argument\n"));
}

#[test]
fn test_unknown_option_is_rejected() {
    let (status, out) = run(&["deploy", "staging", "42", "--dry-run"]);
    assert_eq!(status, 1);
    assert_eq!(
        out.stderr(),
        "Error: Unknown or unexpected option: --dry-run\n"
    );
    assert!(out.stdout().contains("Usage: deploy staging [build][note] [options...]"));
}

#[test]
fn test_help_flag_with_missing_argument_reports_error() {
    let (status, out) = run(&["deploy", "staging", "-h"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: Missing required \"build\" argument\n");
    assert!(out
        .stdout()
        .starts_with("\n\ndeploy staging: Deploy to staging\n"));
}

#[test]
fn test_help_flag_with_bound_arguments_prints_help() {
    let (status, out) = run(&["deploy", "staging", "42", "-h"]);
    assert_eq!(status, 0);
    assert!(out.stderr().is_empty());
    assert!(out.stdout().starts_with("deploy staging: Deploy to staging\n"));
}

#[test]
fn test_command_error_prints_message_only() {
    let (status, out) = run(&["deploy", "production"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: production is frozen\n");
    assert_eq!(out.stdout(), "\n\n");
}

#[test]
fn test_unexpected_error_prints_chain() {
    let (status, out) = run(&["release", "list"]);
    assert_eq!(status, 1);
    assert!(out
        .stderr()
        .starts_with("Error: release index is unreadable\nrelease index is unreadable"));
    assert!(!out.stdout().contains("Usage:"));
}

#[test]
fn test_group_forwards_to_subcommand() {
    let (status, out) = run(&["release", "create", "1.5"]);
    assert_eq!(status, 0);
    assert_eq!(out.stdout(), "created 1.5\n");
}

#[test]
fn test_group_subcommand_number_error() {
    let (status, out) = run(&["release", "create", "next"]);
    assert_eq!(status, 1);
    assert_eq!(
        out.stderr(),
        "Error: Argument \"version\" failed: \"next\" is not a valid number\n"
    );
    assert!(out.stdout().contains("release create: Create a release\n"));
}

#[test]
fn test_group_without_command_prints_group_help() {
    let (status, out) = run(&["release"]);
    assert_eq!(status, 0);
    assert!(out.stdout().starts_with("release: Manage releases\n"));
    assert!(out.stdout().ends_with(&format!("{DEFAULT_TIP}\n")));
}

#[test]
fn test_unknown_group_subcommand() {
    let (status, out) = run(&["release", "publish"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: Command \"release publish\" not found.\n");
    assert!(out.stdout().contains("release: Manage releases\n"));
}

#[test]
fn test_partial_route_prints_table_help() {
    let (status, out) = run(&["deploy"]);
    assert_eq!(status, 0);
    assert!(out.stdout().starts_with(
        "shipit deploy\n  Usage: shipit deploy [command] [...args] [...options]\n"
    ));
}

#[test]
fn test_partial_route_with_options_prints_table_help() {
    let (status, out) = run(&["deploy", "--verbose"]);
    assert_eq!(status, 0);
    assert!(out.stdout().starts_with("shipit deploy\n"));
}

#[test]
fn test_unknown_nested_route_prints_resolved_table_help() {
    let (status, out) = run(&["deploy", "qa", "42"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: Command \"deploy qa\" not found.\n");
    assert!(out.stdout().starts_with("\n\nshipit deploy\n"));
}

#[test]
fn test_unknown_root_route_prints_root_help() {
    let (status, out) = run(&["rollback"]);
    assert_eq!(status, 1);
    assert_eq!(out.stderr(), "Error: Command \"rollback\" not found.\n");
    assert!(out.stdout().starts_with("\n\nshipit: Ship builds to servers\n"));
}

#[test]
fn test_empty_input_prints_root_help() {
    let (status, out) = run(&[]);
    assert_eq!(status, 0);
    assert!(out.stdout().starts_with("shipit: Ship builds to servers\n"));
    assert!(out.stderr().is_empty());
}

#[test]
fn test_root_command_without_input() {
    let (status, out) = run(&["status"]);
    assert_eq!(status, 0);
    assert_eq!(out.stdout(), "all green\n");
}

#[test]
fn test_cli_is_reusable() {
    let cli = common::shipit();
    for _ in 0..3 {
        let mut out = BufferOutput::new();
        assert_eq!(cli.run(&["status"], &mut out), 0);
        assert_eq!(out.stdout(), "all green\n");
    }
}

#[test]
fn test_help_tree_json() {
    let tree = common::shipit().help_tree();
    assert_eq!(
        tree.to_json(),
        serde_json::json!({
            "deploy": {
                "staging": "Deploy to staging",
                "production": "Deploy to production"
            },
            "release": "Manage releases",
            "status": "Show deployment status"
        })
    );
}
