use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use classic_ciphers::cli::{handle_run, RunArgs};
use classic_ciphers::config::{paths::CipherPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "ciphers",
    author = "Kaylee Beyene",
    version,
    about = "Encrypt and decrypt text with classical ciphers",
    long_about = "Encrypt or decrypt a message with one of five classical ciphers: \
                  Caesar shift, random substitution, polyalphabetic (Vigenère), \
                  columnar transposition or Atbash. The message is read from a file \
                  or stdin and the result is written to an output file.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,

    /// Write a settings file with default values
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let paths = CipherPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("Classic Ciphers Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default key:       {}", settings.default_key);
            println!("  Output file:       {}", settings.output_file);
            println!("  Write output file: {}", settings.write_output_file);
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        None => handle_run(&settings, cli.run)?,
    }

    Ok(())
}
