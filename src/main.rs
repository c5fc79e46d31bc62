use std::fs::File;
use std::io::{IsTerminal, stdin};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::style::Stylize;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use shipit::core::{config, workflow};

#[derive(Parser)]
#[command(name = "shipit", about = "Interactive release wizard: build, distribute, announce")]
struct Args {
    /// Config file to use instead of ~/.shipit/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the composed release notes to this file for audit
    #[arg(long)]
    notes_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger; the terminal belongs to the wizard frames
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("shipit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Shipit starting up");

    // The widgets block on raw keystrokes; without a TTY they would hang
    if !stdin().is_terminal() {
        eprintln!(
            "{}",
            "shipit needs an interactive terminal (stdin is not a TTY)".red()
        );
        return ExitCode::FAILURE;
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", format!("{e}").red());
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config);

    match workflow::run(&resolved, args.notes_out.as_deref()).await {
        // Completed and operator-cancelled both end cleanly
        Ok(outcome) => {
            log::info!("Workflow finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("Workflow failed: {e}");
            eprintln!("{}", format!("✗ {e}").red());
            ExitCode::FAILURE
        }
    }
}
