use crate::config::CliConfig;
use crate::utils::validation::Validate;
use std::io::Write;
use tokio::sync::oneshot;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FETCH_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Fetches `config.path`, printing the body to stdout. Returns the exit code.
pub async fn run(config: &CliConfig) -> i32 {
    let mut stdout = std::io::stdout();
    run_with_output(config, &mut stdout).await
}

pub async fn run_with_output<W: Write>(config: &CliConfig, out: &mut W) -> i32 {
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            return EXIT_CONFIG_ERROR;
        }
    };

    let fetcher = match settings.build_fetcher() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Failed to set up HTTP transport: {}", e);
            eprintln!("❌ {}", e);
            return if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_FETCH_FAILED
            };
        }
    };

    let (tx, rx) = oneshot::channel();
    fetcher.fetch(settings.path.clone(), move |outcome| {
        let _ = tx.send(outcome);
    });

    match rx.await {
        Ok(Some(body)) => match out.write_all(body.as_bytes()).and_then(|_| out.flush()) {
            Ok(()) => EXIT_OK,
            Err(e) => {
                tracing::error!("Failed to write response body: {}", e);
                EXIT_FETCH_FAILED
            }
        },
        Ok(None) | Err(_) => {
            eprintln!("❌ Failed to fetch {}", settings.path);
            EXIT_FETCH_FAILED
        }
    }
}
