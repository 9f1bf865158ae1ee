use std::process::ExitCode;

use chart_vision::{Cli, Report, run_cli};

fn main() -> ExitCode {
    use clap::Parser;

    // A. Init Logging (stderr, so stdout carries only the JSON envelope)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Run the pipeline
    let report = run_cli(&args);
    if let Report::Error { error } = &report {
        log::error!("Extraction failed: {}", error);
    }

    // D. Emit the envelope
    match report.to_json(args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    }

    if report.exit_code() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
