use anyhow::Result;
use clap::Parser;
use tracing::info;

use app_infra::cli::{Cli, Commands};
use app_infra::config::{self, DeployEnv, StackProps};
use app_infra::context::Context;
use app_infra::env;
use app_infra::stack::{App, AppInfraStack};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Base .env first; the .env.<environment> overlay can only be picked
    // after context resolution.
    let mut loaded = env::load_env(&cli.app_dir, None);

    let mut ctx = Context::from_app_dir(&cli.app_dir);
    for raw in &cli.context {
        ctx.apply_arg(raw)?;
    }

    let environment = ctx.get_or("environment", config::DEFAULT_ENVIRONMENT);
    for file in env::load_env(&cli.app_dir, Some(&environment)) {
        if !loaded.contains(&file) {
            loaded.push(file);
        }
    }
    if !loaded.is_empty() {
        info!("loaded env files: {}", loaded.join(", "));
    }

    if let Some(Commands::Context) = cli.command {
        if ctx.is_empty() {
            println!("(no context)");
        }
        for (key, value) in ctx.iter() {
            println!("{key}={value}");
        }
        return Ok(());
    }

    // Single ambient snapshot; everything below works on explicit values.
    let deploy = DeployEnv::detect();
    let props = StackProps::resolve(&ctx, deploy);

    if !cli.quiet {
        info!(
            project = %props.project_name,
            environment = %props.environment,
            region = %props.env.region,
            account = %props.env.account.as_deref().unwrap_or("<resolved at deploy time>"),
            "resolved configuration"
        );
    }

    let mut app = App::new();
    AppInfraStack::new(&mut app, "AppInfraStack", props)?;

    let manifest = app.synth(&cli.output)?;
    info!("synthesized {}", manifest.display());
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "app_infra=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
