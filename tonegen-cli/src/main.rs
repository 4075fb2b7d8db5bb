use std::sync::atomic::Ordering;

use clap::Parser;
use log::{error, info, warn};
use tonegen_cli::{Cli, ToneSession};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_target(false)
        .format_timestamp_secs()
        .init();

    // Ни одного байта в stdout до успешной проверки аргументов
    let config = match cli.to_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let session = match ToneSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let stop_ctrlc = session.stop_flag();

    if let Err(e) = ctrlc::set_handler(move || {
        if stop_ctrlc.swap(true, Ordering::SeqCst) {
            // Второй Ctrl+C — принудительный выход
            std::process::exit(130);
        }
        warn!("Ctrl+C received — finishing current block...");
    }) {
        warn!("Failed to set Ctrl+C handler: {e}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match session.run(&mut out) {
        Ok(summary) => info!("\n{summary}"),
        Err(e) if e.is_broken_pipe() => {
            error!("Output closed by consumer: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Generation failed: {e}");
            std::process::exit(1);
        }
    }
}
