mod app;
mod cli;
mod config;
mod core;
mod error;
mod launcher;
mod ui;

use std::process::ExitCode;

use crate::{app::App, cli::Args, config::ExtensionMap, error::AppResult, launcher::Launcher};

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            eprintln!("lcdfm: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> AppResult<()> {
    if let Some(path) = &args.log_file {
        cli::init_logger(path)?;
    }
    log::info!("lcdfm starting in {}", args.root.display());

    let extensions = ExtensionMap::load(&args.config)?;
    let app = App::load(args.root)?;
    let launcher = Launcher::new(extensions);
    ui::run(app, &launcher)?;

    log::info!("lcdfm exiting");
    Ok(())
}
