use anyhow::Result;
use clap::{Parser, Subcommand};

mod command;
mod interactive;

#[derive(Parser)]
#[command(name = "svcfile")]
#[command(about = "Generate systemd service unit files")]
#[command(version)]
struct Cli {
    /// Log rendered units and planned actions to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Generate a service file from command line options")]
    #[command(alias = "gen")]
    Generate(command::Generate),
    #[command(about = "Render a service file from a TOML definition")]
    Render(command::Render),
    #[command(about = "Create a new service interactively")]
    #[command(alias = "create")]
    New(command::New),
    #[command(about = "List the keys each section can contain")]
    Fields(command::Fields),
    #[command(about = "Show what installing or controlling a service would do")]
    Plan(command::Plan),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Generate(generate_cmd) => generate_cmd.run()?,
        Commands::Render(render_cmd) => render_cmd.run()?,
        Commands::New(new_cmd) => new_cmd.run()?,
        Commands::Fields(fields_cmd) => fields_cmd.run()?,
        Commands::Plan(plan_cmd) => plan_cmd.run()?,
    }
    Ok(())
}
