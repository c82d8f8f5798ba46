//! End-to-end pipeline scenarios over a temporary document directory

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use raildocs::config::PipelineConfig;
use raildocs::error::{Error, Result};
use raildocs::ingestion::TextRecognizer;
use raildocs::pipeline::Pipeline;
use raildocs::providers::RationaleProvider;
use raildocs::types::{Availability, AvailabilityDecision, FieldKind};

/// Recognizer stand-in so no test needs a real OCR engine
struct StubRecognizer;

#[async_trait]
impl TextRecognizer for StubRecognizer {
    async fn recognize_image(&self, _image: &Path) -> Result<String> {
        Err(Error::Ocr("no engine in tests".to_string()))
    }

    async fn recognize_pdf_pages(&self, _pdf: &Path) -> Result<Vec<String>> {
        Err(Error::Ocr("no engine in tests".to_string()))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

struct FixedRationaler(&'static str);

#[async_trait]
impl RationaleProvider for FixedRationaler {
    async fn explain(&self, _decision: &AvailabilityDecision) -> Result<String> {
        Ok(self.0.to_string())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn model(&self) -> &str {
        "none"
    }
}

struct FailingRationaler;

#[async_trait]
impl RationaleProvider for FailingRationaler {
    async fn explain(&self, _decision: &AvailabilityDecision) -> Result<String> {
        Err(Error::Llm("service unreachable".to_string()))
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(false)
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "none"
    }
}

fn pipeline() -> Pipeline {
    Pipeline::new(PipelineConfig::default(), Arc::new(StubRecognizer))
}

#[tokio::test]
async fn test_valid_certificate_and_completed_job_is_available() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t101.txt"),
        "Train: T101\nFitness Certificate: Valid\nJob Card: Completed\n",
    )
    .unwrap();

    let reports = pipeline().run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].decision.vehicle, "T101");
    assert_eq!(reports[0].decision.state, Availability::Available);
}

#[tokio::test]
async fn test_expired_certificate_is_not_available() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t202.txt"),
        "Fitness Certificate: Expired\nJob Card: Completed\n",
    )
    .unwrap();

    let reports = pipeline().run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].decision.state, Availability::NotAvailable);
}

#[tokio::test]
async fn test_job_in_progress_needs_review() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t303.txt"),
        "Train: T303\nJob Card: In Progress\nFitness Certificate: Valid\n",
    )
    .unwrap();

    let reports = pipeline().run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].decision.state, Availability::NeedsReview);
}

#[tokio::test]
async fn test_missing_certificate_needs_review_with_empty_evidence() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t404.txt"),
        "Train: T404\nJob Card: Completed\n",
    )
    .unwrap();

    let reports = pipeline().run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 1);
    let decision = &reports[0].decision;
    assert_eq!(decision.state, Availability::NeedsReview);
    // The field is present as an empty sequence, not absent
    assert!(decision
        .evidence
        .matches(FieldKind::CertificateStatus)
        .is_empty());
}

#[tokio::test]
async fn test_one_corrupt_document_does_not_abort_the_batch() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t101.txt"),
        "Train: T101\nFitness Certificate: Valid\nJob Card: Completed\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("t202.txt"),
        "Train: T202\nFitness Certificate: Expired\nJob Card: Pending\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("t303.txt"),
        "Train: T303\nFitness Certificate: Valid\nJob Card: Completed\n",
    )
    .unwrap();
    // Corrupt PDF; the stub recognizer fails its OCR fallback too
    std::fs::write(dir.path().join("broken.pdf"), b"not a pdf at all").unwrap();

    let reports = pipeline().run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 3);
    let vehicles: Vec<_> = reports.iter().map(|r| r.decision.vehicle.as_str()).collect();
    assert_eq!(vehicles, ["T101", "T202", "T303"]);
}

#[tokio::test]
async fn test_rationale_is_attached_when_the_service_answers() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t101.txt"),
        "Train: T101\nFitness Certificate: Valid\nJob Card: Completed\n",
    )
    .unwrap();

    let pipeline = pipeline().with_rationaler(Arc::new(FixedRationaler(
        "certificate valid and job card completed",
    )));
    let reports = pipeline.run(dir.path()).await.unwrap();
    assert_eq!(
        reports[0].decision.rationale.as_deref(),
        Some("certificate valid and job card completed")
    );
    assert_eq!(reports[0].decision.state, Availability::Available);
}

#[tokio::test]
async fn test_rationale_failure_never_blocks_the_decision() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("t202.txt"),
        "Train: T202\nFitness Certificate: Expired\nJob Card: Pending\n",
    )
    .unwrap();

    let pipeline = pipeline().with_rationaler(Arc::new(FailingRationaler));
    let reports = pipeline.run(dir.path()).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].decision.state, Availability::NotAvailable);
    assert!(reports[0].decision.rationale.is_none());
}

#[tokio::test]
async fn test_reports_come_back_sorted_by_source_path() {
    let dir = TempDir::new().unwrap();
    for (name, vehicle) in [("c.txt", "T3"), ("a.txt", "T1"), ("b.txt", "T2")] {
        std::fs::write(
            dir.path().join(name),
            format!("Train: {}\nFitness Certificate: Valid\nJob Card: Completed\n", vehicle),
        )
        .unwrap();
    }

    let reports = pipeline().run(dir.path()).await.unwrap();
    let vehicles: Vec<_> = reports.iter().map(|r| r.decision.vehicle.as_str()).collect();
    assert_eq!(vehicles, ["T1", "T2", "T3"]);
}
