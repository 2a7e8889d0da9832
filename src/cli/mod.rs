pub mod check;
pub mod demo;
pub mod fold;
pub mod repl;
pub mod zero;

use std::path::Path;
use std::process;

use atomvm::Config;

/// Install the stderr log subscriber.
///
/// `ATOMVM_LOG` takes an `EnvFilter` directive; `--verbose` overrides it
/// with `debug`. Without either only errors are logged.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("atomvm=debug")
    } else {
        EnvFilter::try_from_env("ATOMVM_LOG").unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load `--config`, or the nearest `atomvm.toml`, or defaults.
pub fn load_config(explicit: Option<&Path>) -> Config {
    let result = match explicit {
        Some(path) => Config::load(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
            Config::discover(&cwd)
        }
    };
    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.message);
            process::exit(1);
        }
    }
}
