//! Round orchestration and the collaborators a host toolchain plugs in.
//!
//! The host supplies the tagged elements of a discovery round, a
//! [`DiagnosticSink`] for rejected elements and a [`FileSink`] for rendered
//! builders. [`Processor::run`] does the rest.
//!
//! # Example
//!
//! ```
//! use setter_builder_gen::{Diagnostic, MemorySink, Processor, TaggedElement};
//!
//! let elements = vec![
//!     TaggedElement::new("com.acme.Pizza", "setSize", ["int"]),
//!     TaggedElement::new("com.acme.Pizza", "getSize", Vec::<String>::new()),
//! ];
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let mut files = MemorySink::default();
//!
//! let report = Processor::default()
//!     .run(&elements, &mut diagnostics, &mut files)
//!     .unwrap();
//!
//! assert_eq!(report.failures.len(), 1);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(files.get("com.acme.PizzaBuilder").map(|s| s.target.as_str()),
//!            Some("com.acme.PizzaBuilder"));
//! ```

use crate::config::GeneratorConfig;
use crate::error::{Error, GenResult};
use crate::generation::{emit, group, validate};
use crate::model::{Diagnostic, GeneratedSource, Severity, TaggedElement, ValidationFailure};
use tracing::{debug, error, info};

/// Receives diagnostics for rejected elements.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics in report order.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` as error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        let element = &diagnostic.element;
        let location = element.location.as_deref().unwrap_or_default();
        match diagnostic.severity {
            Severity::Error => error!(
                owner = %element.owner,
                member = %element.name,
                location,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Persists rendered builder sources.
pub trait FileSink {
    /// Write `text` as the source of the type named `target`.
    fn write_source(&mut self, target: &str, text: &str) -> std::io::Result<()>;
}

/// Keeps written sources in memory, in first-write order.
///
/// Writing the same target twice replaces the earlier text.
#[derive(Debug, Default)]
pub struct MemorySink {
    sources: Vec<GeneratedSource>,
}

impl MemorySink {
    pub fn get(&self, target: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.target == target)
    }

    pub fn sources(&self) -> &[GeneratedSource] {
        &self.sources
    }

    pub fn into_sources(self) -> Vec<GeneratedSource> {
        self.sources
    }
}

impl FileSink for MemorySink {
    fn write_source(&mut self, target: &str, text: &str) -> std::io::Result<()> {
        match self.sources.iter_mut().find(|s| s.target == target) {
            Some(existing) => existing.text = text.to_string(),
            None => self.sources.push(GeneratedSource {
                target: target.to_string(),
                text: text.to_string(),
            }),
        }
        Ok(())
    }
}

/// What one round produced.
#[derive(Debug, Default)]
#[must_use = "round report should be checked"]
pub struct RoundReport {
    /// Elements rejected by validation, already reported.
    pub failures: Vec<ValidationFailure>,

    /// Sources handed to the file sink, in emission order.
    pub outputs: Vec<GeneratedSource>,
}

/// Runs validate, group and emit over one discovery round.
///
/// Holds only configuration; every call to [`run`](Self::run) is independent.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    config: GeneratorConfig,
}

impl Processor {
    pub fn new(config: GeneratorConfig) -> Self {
        debug!(
            prefix = %config.prefix,
            builder_suffix = %config.builder_suffix,
            "Initialized builder processor"
        );
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Process one round of tagged elements.
    ///
    /// Every rejected element is reported to `diagnostics`. Each rendered
    /// builder is written to `files`; the first write failure aborts the
    /// round without touching sources already written.
    pub fn run(
        &self,
        elements: &[TaggedElement],
        diagnostics: &mut impl DiagnosticSink,
        files: &mut impl FileSink,
    ) -> GenResult<RoundReport> {
        info!(elements = elements.len(), "Processing tagged elements");

        let validation = validate(elements, &self.config.prefix);

        for failure in &validation.invalid {
            diagnostics.report(failure.to_diagnostic());
        }

        let mut report = RoundReport {
            failures: validation.invalid,
            outputs: Vec::new(),
        };

        if validation.valid.is_empty() {
            debug!("No valid mutators in round");
            return Ok(report);
        }

        for group in group(&validation.valid) {
            let source = emit(&group.owner, &group.members, &self.config.builder_suffix)?;

            debug!(
                builder = %source.target,
                methods = group.members.len(),
                "Writing builder"
            );
            files
                .write_source(&source.target, &source.text)
                .map_err(|source_err| Error::Sink {
                    target: source.target.clone(),
                    source: source_err,
                })?;

            report.outputs.push(source);
        }

        info!(
            builders = report.outputs.len(),
            failures = report.failures.len(),
            "Round complete"
        );
        Ok(report)
    }
}

impl From<GeneratorConfig> for Processor {
    fn from(config: GeneratorConfig) -> Self {
        Self::new(config)
    }
}
