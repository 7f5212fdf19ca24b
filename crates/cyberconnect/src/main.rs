use clap::Parser;
use color_eyre::eyre::eyre;
use cyberconnect::cli::RunCmd;
use cyberconnect::config::init_config;
use cyberconnect::routes::setup_server;
use cyberconnect::telemetry;
use dotenvy::dotenv;

/// Start the feed server
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    color_eyre::install()?;

    let run_cmd: RunCmd = RunCmd::parse();

    let instrumentation_params = run_cmd
        .validate_instrumentation_params()
        .map_err(|e| eyre!("Failed to validate instrumentation params: {e}"))?;
    telemetry::setup_analytics(&instrumentation_params);

    let config = init_config(&run_cmd).await?;

    let address = setup_server(config).await;
    tracing::info!("Listening on http://{}", address);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    telemetry::shutdown_analytics(&instrumentation_params);

    Ok(())
}
