//! Pipeline driver: load, extract, classify, optionally explain

use futures_util::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crate::config::PipelineConfig;
use crate::decision::AvailabilityClassifier;
use crate::error::Result;
use crate::extraction::FieldExtractor;
use crate::ingestion::{ContentLoader, TextRecognizer};
use crate::providers::RationaleProvider;
use crate::types::{AvailabilityDecision, SourceDocument};

/// One processed document: its source path and the decision derived from it
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    /// Source document path
    pub source: PathBuf,
    /// The availability decision with its evidence
    pub decision: AvailabilityDecision,
}

/// Composes loader, extractor, and classifier into a per-document run
///
/// Documents are independent: they are processed concurrently under a
/// semaphore, each with its own timeout, and a failure (or timeout) of one
/// never touches the others. Results are re-sorted by source path so output
/// is deterministic regardless of completion order.
pub struct Pipeline {
    config: PipelineConfig,
    loader: ContentLoader,
    extractor: FieldExtractor,
    rationaler: Option<Arc<dyn RationaleProvider>>,
}

impl Pipeline {
    /// Create a pipeline with an injected OCR capability
    pub fn new(config: PipelineConfig, recognizer: Arc<dyn TextRecognizer>) -> Self {
        let loader = ContentLoader::new(recognizer, &config.ocr);
        let extractor = FieldExtractor::new(&config.extraction);
        Self {
            config,
            loader,
            extractor,
            rationaler: None,
        }
    }

    /// Attach an external rationale provider
    pub fn with_rationaler(mut self, provider: Arc<dyn RationaleProvider>) -> Self {
        tracing::info!(
            "rationale provider attached: {} ({})",
            provider.name(),
            provider.model()
        );
        self.rationaler = Some(provider);
        self
    }

    /// Process every supported document under `root`
    pub async fn run(&self, root: &Path) -> Result<Vec<VehicleReport>> {
        let documents = self.loader.load(root).await;
        tracing::info!(
            "loaded {} document(s) from {}",
            documents.len(),
            root.display()
        );

        let parallel = self
            .config
            .processing
            .parallel_files
            .unwrap_or_else(|| num_cpus::get().min(8));
        let semaphore = Arc::new(Semaphore::new(parallel));
        let file_timeout = Duration::from_secs(self.config.processing.file_timeout_secs);

        let report_futures: Vec<_> = documents
            .into_iter()
            .map(|doc| {
                let sem = semaphore.clone();
                async move {
                    let _permit = sem.acquire().await.unwrap();
                    match timeout(file_timeout, self.process_document(&doc)).await {
                        Ok(report) => Some(report),
                        Err(_) => {
                            tracing::error!(
                                "timeout processing {} after {}s",
                                doc.path.display(),
                                file_timeout.as_secs()
                            );
                            None
                        }
                    }
                }
            })
            .collect();

        let mut reports: Vec<VehicleReport> = join_all(report_futures)
            .await
            .into_iter()
            .flatten()
            .collect();

        reports.sort_by(|a, b| a.source.cmp(&b.source));
        Ok(reports)
    }

    async fn process_document(&self, doc: &SourceDocument) -> VehicleReport {
        let fields = self.extractor.extract(&doc.raw_text);
        tracing::debug!(
            "extracted {} match(es) from {}",
            fields.total_matches(),
            doc.path.display()
        );
        let mut decision = AvailabilityClassifier::classify(&fields);

        if let Some(provider) = &self.rationaler {
            match provider.explain(&decision).await {
                Ok(text) => decision.rationale = Some(text),
                Err(e) => {
                    // The deterministic state stands; only the free-text
                    // explanation goes missing.
                    tracing::warn!("rationale unavailable for {}: {}", doc.path.display(), e);
                }
            }
        }

        tracing::info!(
            "{} -> {} ({})",
            decision.vehicle,
            decision.state,
            doc.path.display()
        );

        VehicleReport {
            source: doc.path.clone(),
            decision,
        }
    }
}
