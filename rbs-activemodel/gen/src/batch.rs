//! Generating signatures for many classes at once.
//!
//! Each class is generated independently. A class that fails is recorded in
//! the report and the batch moves on.

use std::path::PathBuf;

use rbs_activemodel_define::ClassDescriptor;
use tracing::{info, instrument, warn};

use crate::errors::GeneratorError;
use crate::output::generate_signature;
use crate::paths::signature_path;

/// What happened to one class in a batch.
#[derive(Debug)]
pub enum BatchOutcome {
    /// A signature was generated for the class.
    Generated { path: PathBuf, rbs: String },
    /// The class had nothing to declare.
    Skipped,
    /// Generation failed for this class only.
    Failed(GeneratorError),
}

#[derive(Debug)]
pub struct BatchEntry {
    pub class: String,
    pub outcome: BatchOutcome,
}

/// Per-class results of [`generate_all`], in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// `(class, path, rbs)` for every generated signature.
    pub fn generated(&self) -> impl Iterator<Item = (&str, &PathBuf, &str)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            BatchOutcome::Generated { path, rbs } => Some((entry.class.as_str(), path, rbs.as_str())),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry.outcome {
            BatchOutcome::Skipped => Some(entry.class.as_str()),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &GeneratorError)> {
        self.entries.iter().filter_map(|entry| match &entry.outcome {
            BatchOutcome::Failed(err) => Some((entry.class.as_str(), err)),
            _ => None,
        })
    }

    pub fn generated_count(&self) -> usize {
        self.generated().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Generates a signature for every descriptor, isolating failures.
#[instrument(skip(descriptors), fields(count = descriptors.len()))]
pub fn generate_all(descriptors: &[ClassDescriptor]) -> BatchReport {
    let mut report = BatchReport::default();

    for descriptor in descriptors {
        let class = descriptor.qualified_name.clone();
        let outcome = match generate_signature(descriptor) {
            Ok(Some(rbs)) => BatchOutcome::Generated {
                path: signature_path(&class),
                rbs,
            },
            Ok(None) => BatchOutcome::Skipped,
            Err(err) => {
                warn!(class = %class, error = %err, "Signature generation failed");
                BatchOutcome::Failed(err)
            }
        };
        report.entries.push(BatchEntry { class, outcome });
    }

    info!(
        generated = report.generated_count(),
        skipped = report.skipped_count(),
        failed = report.failed_count(),
        "Batch complete"
    );
    report
}
