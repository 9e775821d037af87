//! A small release tool used across the integration tests.

use switchyard::{
    ArgumentDecl, Cli, CommandError, CommandGroup, CommandRoutes, FnCommand, OptionDecl, Role,
    Routes, ValueType,
};

pub fn shipit() -> Cli {
    let staging = FnCommand::new("Deploy to staging", |ctx, out| {
        let build = ctx.arguments.get_str("build").unwrap_or_default();
        let note = ctx.arguments.get_str("note").unwrap_or("-");
        let regions = ctx.options.get("--region").map(ToString::to_string);
        out.write_ln(
            &format!(
                "{} build={} note={} force={} regions={}",
                ctx.route(),
                build,
                note,
                ctx.options.is_set("--force"),
                regions.unwrap_or_default(),
            ),
            Role::Plain,
        );
        Ok(0)
    })
    .argument(ArgumentDecl::new("build", "Build id to deploy").required())
    .argument(ArgumentDecl::new("note", "Deployment note"))
    .option(OptionDecl::new("--force", "Skip health checks").alias("-f").flag())
    .option(OptionDecl::new("--region", "Target region").alias("-r").multiple());

    let production = FnCommand::new("Deploy to production", |_, _| {
        Err(CommandError::new("production is frozen").into())
    });

    let create = FnCommand::new("Create a release", |ctx, out| {
        let version = ctx.arguments.get_f64("version").unwrap_or_default();
        out.write_ln(&format!("created {version}"), Role::Plain);
        Ok(0)
    })
    .argument(
        ArgumentDecl::new("version", "Release version")
            .required()
            .value_type(ValueType::Number),
    );

    let list = FnCommand::new("List releases", |_, _| {
        anyhow::bail!("release index is unreadable")
    });

    let release = CommandGroup::new(
        "Manage releases",
        Routes::new()
            .command("create", create)
            .and_then(|routes| routes.command("list", list))
            .expect("release routes"),
    );

    let deploy = Routes::new()
        .command("staging", staging)
        .and_then(|routes| routes.command("production", production))
        .expect("deploy routes");

    Cli::builder()
        .name("shipit")
        .description("Ship builds to servers")
        .group("deploy", deploy)
        .command("release", release)
        .command(
            "status",
            FnCommand::new("Show deployment status", |_, out| {
                out.write_ln("all green", Role::Plain);
                Ok(0)
            }),
        )
        .build()
        .expect("valid cli")
}
