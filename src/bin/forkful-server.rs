// ABOUTME: Production server binary for the Forkful recipe generation API
// ABOUTME: Loads configuration, wires the provider, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forkful

//! # Forkful Server Binary
//!
//! Starts the recipe generation HTTP API with configuration from the
//! environment. When `OPENAI_API_KEY` is absent the server still runs and
//! serves health checks, but generation requests fail with a configuration
//! error.

use anyhow::Result;
use clap::Parser;
use forkful::{
    config::ServerConfig,
    llm::{LlmProvider, OpenAiProvider},
    logging,
    resources::ServerResources,
    server::RecipeServer,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "forkful-server")]
#[command(about = "Forkful - AI-powered recipe generation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Forkful recipe generation server");
    info!("{}", config.summary());

    let provider: Option<Arc<dyn LlmProvider>> = if config.openai.is_configured() {
        let openai = OpenAiProvider::new(&config.openai, &config.generation)?;
        info!(model = %openai.default_model(), "OpenAI provider initialized");
        Some(Arc::new(openai))
    } else {
        warn!("OPENAI_API_KEY not set; recipe generation is disabled");
        None
    };

    let resources = Arc::new(ServerResources::new(config, provider));
    let server = RecipeServer::new(resources);

    server.run().await
}
