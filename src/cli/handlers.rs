use anyhow::{Context, Result};
use std::time::Duration;
use tonic::Request;

use crate::{
    cli::commands::{HealthCommand, QueryCommand, ServerCommand},
    client::BackendClient,
    config::GatewayConfig,
    proto::{AIAnalysisServiceClient, QueryAnalysisRequest},
    server,
    service::AnalysisService,
};

pub async fn handle_server(cmd: &ServerCommand) -> Result<()> {
    let config = GatewayConfig::load(&cmd.overrides()).context("Failed to load configuration")?;
    let addr = config.server.addr().context("Invalid listen address")?;

    let client = BackendClient::new(&config.backend).context("Failed to create backend client")?;

    // The backend may come up after the gateway, so an unhealthy probe is not fatal.
    match client.health().await {
        Ok(()) => tracing::info!("Inference backend at {} is healthy", client.base_url()),
        Err(e) => tracing::warn!("Inference backend not ready yet: {}", e),
    }

    server::serve(addr, AnalysisService::new(client), shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

pub async fn handle_query(cmd: &QueryCommand) -> Result<()> {
    let endpoint = format!("http://{}", cmd.host);
    let mut client = AIAnalysisServiceClient::connect(endpoint.clone())
        .await
        .with_context(|| format!("Failed to connect to gateway at {}", endpoint))?;

    let mut request = Request::new(QueryAnalysisRequest {
        user_query: cmd.text.clone(),
        context: cmd.context.clone(),
    });
    request.set_timeout(Duration::from_secs(cmd.timeout));

    let response = client
        .analyze_user_query(request)
        .await
        .context("AnalyzeUserQuery failed")?
        .into_inner();

    println!("Interpreted query: {}", response.interpreted_query);
    println!("Query type:        {}", response.query_type);
    println!("Key concepts:      {}", response.key_concepts.join(", "));
    println!("Query vector:      {} bytes", response.query_vector.len());

    Ok(())
}

pub async fn handle_health(cmd: &HealthCommand) -> Result<()> {
    let config = GatewayConfig::load(&cmd.overrides()).context("Failed to load configuration")?;
    let client = BackendClient::new(&config.backend).context("Failed to create backend client")?;

    client
        .health()
        .await
        .with_context(|| format!("Inference backend at {} is unhealthy", client.base_url()))?;

    println!("Inference backend at {} is healthy", client.base_url());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
