//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use secret_santa::config::ConfigOverrides;
use secret_santa::output::OutputMode;

/// secret-santa - Draw Secret Santa pairings and serve lookups
#[derive(Parser, Debug)]
#[command(
    name = "secret-santa",
    version,
    about = "Draw Secret Santa pairings and serve lookups",
    long_about = "Draw Secret Santa pairings from a list of names.\n\n\
                  Every participant is assigned exactly one giftee and nobody draws themselves.\n\
                  Participants look up their giftee through a small web form."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./secret-santa.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw pairings and serve the lookup form
    Serve {
        #[command(flatten)]
        draw: DrawArgs,

        /// Interface to bind
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Request-handling threads
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Draw pairings and print all of them (organizer view)
    Draw {
        #[command(flatten)]
        draw: DrawArgs,
    },

    /// Show the names read from the roster
    Roster {
        /// Roster file, one name per line
        #[arg(short, long)]
        names: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Options shared by every command that draws pairings
#[derive(Args, Debug, Default)]
pub struct DrawArgs {
    /// Roster file, one name per line
    #[arg(short, long)]
    pub names: Option<PathBuf>,

    /// Seed the draw for reproducible pairings
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl DrawArgs {
    fn overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            names_file: self.names,
            seed: self.seed,
            ..ConfigOverrides::default()
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Serve {
            draw,
            bind,
            port,
            workers,
        }) => {
            let overrides = ConfigOverrides {
                bind,
                port,
                workers,
                ..draw.overrides()
            };
            commands::serve(config_path, &overrides)
        },
        Some(Command::Draw { draw }) => commands::draw(config_path, &draw.overrides(), output_mode),
        Some(Command::Roster { names }) => {
            let overrides = ConfigOverrides {
                names_file: names,
                ..ConfigOverrides::default()
            };
            commands::roster(config_path, &overrides, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("secret-santa v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("secret-santa v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'secret-santa --help' for usage");
                println!("Run 'secret-santa serve' to start the lookup server");
            }
            Ok(())
        },
    }
}
