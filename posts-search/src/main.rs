use clap::Parser;
use tracing::error;

use posts_search::{config::AppConfig, telemetry, Cli, Dependencies};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    let config = AppConfig::from_env().with_opensearch_url(cli.opensearch_url.clone());

    telemetry::init(config.log_format);

    if let Err(e) = run(&cli, config).await {
        error!(error = %e, "posts-search failed");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli, config: AppConfig) -> Result<(), posts_search::AppError> {
    // Building the client does not contact the engine
    let dependencies = Dependencies::new(config).await?;
    let mut stdout = std::io::stdout().lock();

    posts_search::execute(cli, &dependencies, &mut stdout).await
}
