use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fngen_config::{init_tracing, GeneratorConfig, PLAN_TARGET};
use fngen_plan::plan_classes;
use fngen_types::ClassMetadata;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fngen", version, about = "Function adapter planner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan adapter factories for a JSON array of class metadata
    Plan(PlanArgs),
    /// Print the JSON schema of the `fngen.toml` config file
    Schema,
}

#[derive(Args)]
struct PlanArgs {
    /// Class metadata file (JSON array)
    metadata: PathBuf,
    /// Generator config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Plan(args) => plan(args),
        Command::Schema => {
            let schema = fngen_config::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(0)
        }
    }
}

fn plan(args: PlanArgs) -> Result<i32> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    init_tracing(&config.logging);

    let text = std::fs::read_to_string(&args.metadata)
        .with_context(|| format!("reading {}", args.metadata.display()))?;
    let classes: Vec<ClassMetadata> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", args.metadata.display()))?;

    let mut plans = Vec::with_capacity(classes.len());
    let mut failed = 0usize;
    for result in plan_classes(&classes, &config) {
        match result {
            Ok(plan) => plans.push(plan),
            Err(err) => {
                tracing::error!(target: PLAN_TARGET, error = %err, "class skipped");
                eprintln!("error: {err}");
                failed += 1;
            }
        }
    }

    let out = if args.pretty {
        serde_json::to_string_pretty(&plans)?
    } else {
        serde_json::to_string(&plans)?
    };
    println!("{out}");

    Ok(if failed > 0 { 1 } else { 0 })
}
