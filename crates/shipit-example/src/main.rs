//! `shipit`: ships builds to servers.
//!
//! ```text
//! shipit deploy staging <build> [note] [--force] [--region <r>]...
//! shipit deploy production <build> --approved-by <name>
//! shipit release create <version> [--draft]
//! shipit release list [--json]
//! shipit status [--verbose]
//! ```
//!
//! Set `RUST_LOG=debug` to watch route resolution.

use anyhow::Context;
use switchyard::{
    ArgumentDecl, Cli, Command, CommandContext, CommandError, CommandGroup, CommandRoutes,
    FnCommand, OptionDecl, Output, Role, Routes, ValueType,
};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const RELEASES: &[(&str, &str)] = &[("1.4.0", "2026-09-02"), ("1.5.0", "2026-10-14")];

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Deploys a build to one environment.
struct Deploy {
    environment: &'static str,
    needs_approval: bool,
}

impl Command for Deploy {
    fn description(&self) -> &str {
        if self.needs_approval {
            "Deploy a build to production"
        } else {
            "Deploy a build to staging"
        }
    }

    fn arguments(&self) -> Vec<ArgumentDecl> {
        vec![
            ArgumentDecl::new("build", "Build number").required().value_type(ValueType::Number),
            ArgumentDecl::new("note", "Note attached to the deployment"),
        ]
    }

    fn options(&self) -> Vec<OptionDecl> {
        let mut options = vec![
            OptionDecl::new("--force", "Skip health checks").alias("-f").flag(),
            OptionDecl::new("--region", "Target region, repeatable").alias("-r").multiple(),
        ];
        if self.needs_approval {
            options.push(
                OptionDecl::new("--approved-by", "Who signed off the deployment")
                    .alias("-a")
                    .required(),
            );
        }
        options
    }

    fn handle(&self, ctx: &CommandContext, out: &mut dyn Output) -> anyhow::Result<i32> {
        let build = ctx
            .arguments
            .get_i64("build")
            .context("build number was not bound")?;
        if build <= 0 {
            return Err(CommandError::new(format!("Build {build} does not exist")).with_help().into());
        }

        let regions: Vec<String> = ctx
            .options
            .get_all("--region")
            .iter()
            .map(ToString::to_string)
            .collect();
        let regions = if regions.is_empty() {
            "all regions".to_string()
        } else {
            regions.join(", ")
        };

        info!(build, environment = self.environment, "deploying");
        out.write("Deploying build ", Role::Plain);
        out.write(&build.to_string(), Role::Command);
        out.write_ln(&format!(" to {} ({regions})", self.environment), Role::Plain);

        if let Some(name) = ctx.options.get_str("--approved-by") {
            out.write_ln(&format!("  approved by {name}"), Role::Description);
        }
        if let Some(note) = ctx.arguments.get_str("note") {
            out.write_ln(&format!("  note: {note}"), Role::Description);
        }
        if ctx.options.is_set("--force") {
            out.write_ln("  health checks skipped", Role::Tip);
        }
        Ok(0)
    }
}

fn release_routes() -> Result<Routes, switchyard::CliError> {
    let create = FnCommand::new("Create a release", |ctx, out| {
        let version = ctx.arguments.get_str("version").unwrap_or_default();
        if RELEASES.iter().any(|(v, _)| *v == version) {
            return Err(CommandError::new(format!("Release {version} already exists")).into());
        }
        let kind = if ctx.options.is_set("--draft") { "draft" } else { "release" };
        out.write_ln(&format!("Created {kind} {version}"), Role::Plain);
        Ok(0)
    })
    .argument(ArgumentDecl::new("version", "Semantic version").required())
    .option(OptionDecl::new("--draft", "Keep the release unpublished").alias("-d").flag());

    let list = FnCommand::new("List releases", |ctx, out| {
        if ctx.options.is_set("--json") {
            let releases: serde_json::Map<String, serde_json::Value> = RELEASES
                .iter()
                .map(|(version, date)| (version.to_string(), (*date).into()))
                .collect();
            let text = serde_json::to_string_pretty(&releases)?;
            out.write_ln(&text, Role::Plain);
            return Ok(0);
        }
        for (version, date) in RELEASES {
            out.write(version, Role::Command);
            out.write_ln(&format!("  {date}"), Role::Description);
        }
        Ok(0)
    })
    .option(OptionDecl::new("--json", "Print as JSON").flag());

    Routes::new()
        .command("create", create)?
        .command("list", list)
}

fn build_cli() -> anyhow::Result<Cli> {
    let deploy = Routes::new()
        .command(
            "staging",
            Deploy {
                environment: "staging",
                needs_approval: false,
            },
        )?
        .command(
            "production",
            Deploy {
                environment: "production",
                needs_approval: true,
            },
        )?;

    let status = FnCommand::new("Show deployment status", |ctx, out| {
        out.write_ln("staging     build 41", Role::Plain);
        out.write_ln("production  build 40", Role::Plain);
        if ctx.options.is_set("--verbose") {
            out.write_ln(&format!("{} releases known", RELEASES.len()), Role::Tip);
        }
        Ok(0)
    })
    .option(OptionDecl::new("--verbose", "Show more detail").alias("-v").flag());

    Cli::builder()
        .name("shipit")
        .description("Ship builds to servers")
        .group("deploy", deploy)
        .command(
            "release",
            CommandGroup::new("Manage releases", release_routes()?),
        )
        .command("status", status)
        .build()
        .context("invalid command definitions")
}

fn main() {
    init_tracing();

    let status = match build_cli() {
        Ok(cli) => cli.run_env(),
        Err(err) => {
            eprintln!("shipit: {err:#}");
            2
        }
    };
    std::process::exit(status);
}
