use clap::Parser;
use screen_designer::cli::commands::{cmd_defaults, cmd_generate, cmd_replay};
use screen_designer::cli::config::{
    Cli, Commands, load_config, resolve_all_screens, resolve_dark_mode, resolve_record_policy,
    verbosity_filter,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Generate {
            document,
            screen,
            all_screens,
            dark_mode,
            output,
        } => {
            cmd_generate(
                &document,
                screen.as_deref(),
                resolve_all_screens(all_screens, &config),
                resolve_dark_mode(dark_mode, &config),
                output.as_deref(),
            )?;
        }
        Commands::Defaults { kind } => {
            cmd_defaults(kind.as_deref())?;
        }
        Commands::Replay {
            script,
            dark_mode,
            deferred,
            output,
            save_document,
        } => {
            let passed = cmd_replay(
                &script,
                resolve_dark_mode(dark_mode, &config),
                resolve_record_policy(deferred, &config),
                output.as_deref(),
                save_document.as_deref(),
                cli.verbose,
            )?;
            if !passed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the level follows the `-v` count. Logs go to
/// stderr so generated code on stdout stays clean.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
