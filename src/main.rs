use clap::Parser;
use dotmenu::core::config::{self, CliOverrides};
use dotmenu::tui;
use dotmenu::tui::RunError;
use dotmenu::tui::startup::StartupError;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotmenu", about = "Confirm and clone a dotfiles repository")]
struct Args {
    /// Repository URL to clone
    #[arg(long)]
    repository: Option<String>,

    /// Directory to clone into
    #[arg(long)]
    target: Option<String>,

    /// Git executable to run
    #[arg(long)]
    git: Option<String>,

    /// Skip asking for and confirming repository and target
    #[arg(short, long)]
    yes: bool,

    /// Where to write the debug log
    #[arg(long, default_value = "dotmenu.log")]
    log_file: PathBuf,
}

fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Log to a file: stdout is the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("dotmenu starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let cli = CliOverrides {
        repository: args.repository,
        target: args.target,
        git_program: args.git,
        skip_confirm: args.yes,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::debug!("Resolved config: {:?}", resolved);

    match tui::run(resolved) {
        Ok(()) => {}
        Err(RunError::Startup(e @ StartupError::Rejected { .. })) => {
            log::info!("Confirmation rejected: {}", e);
            println!("Exit: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
