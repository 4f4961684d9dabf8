//! fhir-get: fetch a path from the configured FHIR server.
//!
//! Usage:
//!   FHIR_BASE_URL=http://localhost:8080/fhir fhir-get /Patient/123

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value as JsonValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fhir-get")]
#[command(about = "GET a path from the FHIR server configured by FHIR_BASE_URL")]
struct Args {
    /// Request path relative to the base URL (e.g., /Patient/123)
    path: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the response body
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args.path).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), path = %args.path, "Request failed");
            ExitCode::FAILURE
        }
    }
}

/// GET `path` and print the body. Returns whether the status was 2xx.
async fn run(path: &str) -> Result<bool> {
    let client = fhir_client::fhir_api().context("Failed to configure FHIR client")?;

    let response = client
        .get(path)
        .send()
        .await
        .with_context(|| format!("GET {} failed", client.url(path)))?;
    let status = response.status();
    tracing::info!(status = %status, url = %response.url(), "Response received");

    let body = response.text().await.context("Failed to read response body")?;
    match serde_json::from_str::<JsonValue>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", body),
    }

    Ok(status.is_success())
}
