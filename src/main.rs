use clap::Parser;
use fetch_wrapper::utils::logger;
use fetch_wrapper::{cli, CliConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let code = cli::run(&config).await;
    std::process::exit(code);
}
