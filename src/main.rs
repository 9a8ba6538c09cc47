use clap::Parser;
use bdd_audit_report::cli::commands::{cmd_render, cmd_summary};
use bdd_audit_report::cli::config::{Cli, Commands, load_config, resolve_render_settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render {
            input,
            output,
            format,
            title,
        } => {
            // Resolve settings: CLI > config > defaults
            let settings = resolve_render_settings(
                &config,
                input.as_deref(),
                output.as_deref(),
                format.as_deref(),
                title.as_deref(),
            );
            cmd_render(&settings)?;
        }
        Commands::Summary { input } => {
            let input = input.unwrap_or(config.report.input);
            let all_passed = cmd_summary(&input)?;
            if !all_passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from the `info` default.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
