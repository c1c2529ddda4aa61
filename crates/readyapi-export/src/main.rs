use std::process;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use readyapi_export::config::Config;
use readyapi_export::orchestrator;

/// Logs go to stderr; stdout carries only the confirmation line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    let _ = subscriber.try_init();
}

fn main() {
    init_tracing();

    let result = Config::from_env().and_then(|config| orchestrator::run(&config));

    match result {
        Ok(output) => {
            println!(
                "OpenAPI specification successfully written to {}.",
                output.display()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
