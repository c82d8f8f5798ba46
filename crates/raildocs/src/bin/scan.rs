//! Fleet document scan binary
//!
//! Run with: cargo run -p raildocs --bin raildocs-scan -- <directory>

use clap::Parser;
use raildocs::config::PipelineConfig;
use raildocs::ingestion::TesseractOcr;
use raildocs::pipeline::Pipeline;
use raildocs::providers::{OllamaRationaler, RationaleProvider};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scan a directory of maintenance documents and decide per-vehicle
/// availability
#[derive(Parser)]
#[command(name = "raildocs-scan", version, about)]
struct Args {
    /// Directory with documents to process (searched recursively)
    directory: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ask the configured Ollama server for a rationale per decision
    #[arg(long)]
    rationale: bool,

    /// Emit reports as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "raildocs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - OCR languages: {}", config.ocr.languages);
    tracing::info!("  - OCR dpi: {}", config.ocr.dpi);
    tracing::info!("  - LLM model: {}", config.llm.model);

    let recognizer = Arc::new(TesseractOcr::new(config.ocr.clone()));
    let mut pipeline = Pipeline::new(config.clone(), recognizer);

    if args.rationale || config.llm.enabled {
        tracing::info!("Checking Ollama at {}...", config.llm.base_url);
        let provider = OllamaRationaler::new(&config.llm);
        match provider.health_check().await {
            Ok(true) => {
                tracing::info!("Ollama is running, rationales enabled");
                pipeline = pipeline.with_rationaler(Arc::new(provider));
            }
            _ => {
                tracing::warn!("Ollama not available at {}", config.llm.base_url);
                tracing::warn!("Continuing without rationales; decisions are unaffected");
            }
        }
    }

    let reports = pipeline.run(&args.directory).await?;
    println!("Processed {} document(s)\n", reports.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let source = report.source.display();
            match &report.decision.rationale {
                Some(rationale) => println!(
                    "Train {} -> {} [{}]: {}",
                    report.decision.vehicle, report.decision.state, source, rationale
                ),
                None => println!(
                    "Train {} -> {} [{}]",
                    report.decision.vehicle, report.decision.state, source
                ),
            }
        }
    }

    Ok(())
}
