use std::io;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use assistant::cli::Session;
use assistant::config::{paths::AssistantPaths, settings::Settings};
use assistant::models::birthday::parse_date;

#[derive(Parser)]
#[command(
    name = "assistant",
    version,
    about = "Interactive command-line contact book",
    long_about = "Contact Assistant keeps names, phones and birthdays for the \
                  length of a session and tells you whose birthday is coming up \
                  this week. Weekend birthdays are greeted on Monday."
)]
struct Cli {
    /// Reference date for the birthday report (DD.MM.YYYY, defaults to today)
    #[arg(long, global = true, env = "ASSISTANT_TODAY", value_parser = parse_today)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    #[command(alias = "repl")]
    Chat,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn init_logging(settings: &Settings) {
    // stdout belongs to the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AssistantPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    match cli.command {
        None | Some(Commands::Chat) => {
            info!(today = ?cli.today, "starting session");
            let mut session = Session::new(settings).with_today(cli.today);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Contact Assistant Configuration");
            println!("===============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "Yes" } else { "No" }
            );
            println!();
            println!("Settings:");
            println!("  Prompt:    {:?}", settings.prompt);
            println!("  Greeting:  {:?}", settings.greeting);
            println!("  Log level: {}", settings.log_level);
        }
    }

    Ok(())
}
