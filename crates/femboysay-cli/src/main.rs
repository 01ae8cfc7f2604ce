//! Femboysay CLI - a message in a speech bubble above ASCII art

mod cli;

use clap::Parser;
use femboysay::core::logging::init_logging;
use femboysay::SayError;

fn main() {
    let cli_args = match cli::Cli::try_parse() {
        Ok(cli_args) => cli_args,
        // Usage errors exit with 1 like every other failure
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let level = cli_args.log_level.map(|l| l.as_str());
    let format = cli_args.log_format.map(|f| f.as_str());
    if let Err(e) = init_logging(level, format) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::FemboysayApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        if matches!(e.downcast_ref::<SayError>(), Some(SayError::EmptyMessage)) {
            eprintln!("Try 'femboysay -h' for help");
        }
        std::process::exit(1);
    }
}
