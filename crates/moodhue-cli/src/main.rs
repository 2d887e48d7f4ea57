use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use moodhue_ai::OnnxClassifier;
use moodhue_server::{ServerState, serve};

/// Emotion-to-palette analysis service.
#[derive(Parser)]
#[command(name = "moodhue", version)]
struct Args {
    /// Directory containing model.onnx, tokenizer.json, and config.json.
    #[arg(long, env = "MOODHUE_MODEL_DIR", default_value = "models/bert-base-uncased-emotion")]
    model_dir: PathBuf,

    /// Address to bind the HTTP API on.
    #[arg(long, env = "MOODHUE_ADDR", default_value = "127.0.0.1:5000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    tracing::info!("moodhue v{}", env!("CARGO_PKG_VERSION"));

    let classifier = OnnxClassifier::load(&args.model_dir)
        .with_context(|| format!("loading classifier from {}", args.model_dir.display()))?;

    let state = Arc::new(ServerState::new(classifier));
    serve(state, args.addr).await
}
