use image_fetcher::cli::Cli;
use image_fetcher::logging;

fn main() {
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("image-fetcher error: {:#}", err);
        std::process::exit(1);
    }
}
