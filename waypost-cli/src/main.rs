//! Entry point for the `waypost` binary.
#![forbid(unsafe_code)]

use waypost_cli::CliError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match waypost_cli::run() {
        Ok(()) => {}
        // Help and version output goes to stdout with a zero exit status.
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("waypost: {err}");
            std::process::exit(1);
        }
    }
}
