use std::{env, io::IsTerminal};

use tracing_subscriber::filter::EnvFilter;

/// Install the global subscriber. Logs go to stderr so command output stays clean.
///
/// Level: `RUST_LOG` if set, else `PREDICTOR_LOG_LEVEL`, else `default_level`.
/// Colour: `FORCE_COLOR=1|true|yes` / `0|false|no`, else TTY detection.
pub fn init_tracing(default_level: &str) {
    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => std::io::stderr().is_terminal(),
    };

    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match env::var("PREDICTOR_LOG_LEVEL").ok().as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => default_level,
        };
        EnvFilter::new(format!("{level},hyper=warn,reqwest=warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
