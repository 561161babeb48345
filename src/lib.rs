//! setter-builder-gen: fluent builder generation from tagged setters.
//!
//! Given the setter declarations a host toolchain found carrying a marker,
//! the generator checks their shape, groups them by declaring type and
//! renders one companion `<Type>Builder` per type:
//!
//! ```java
//! new PizzaBuilder().setSize(12).setName("margherita").build();
//! ```
//!
//! A round runs in three pure stages followed by a write:
//!
//! 1. **Validate**: a tagged element is a mutator when it takes exactly one
//!    parameter and its name starts with the configured prefix (`"set"`).
//!    Anything else becomes a diagnostic.
//! 2. **Group**: mutators are folded per owning type; a repeated method
//!    name replaces the earlier one.
//! 3. **Emit**: each group is rendered to builder source text.
//!
//! The host supplies element metadata and the sinks for diagnostics and
//! generated files; see [`Processor`].
//!
//! # Quick Start
//!
//! ```ignore
//! use setter_builder_gen::*;
//!
//! let elements = load_elements(Path::new("elements.ndjson"))?;
//! let processor = Processor::new(GeneratorConfig::builder().prefix("set").build()?);
//!
//! let report = processor.run(
//!     &elements,
//!     &mut TracingDiagnostics,
//!     &mut DirectorySink::new("target/generated-sources"),
//! )?;
//! println!("{} builders written", report.outputs.len());
//! ```

mod builder;
pub mod config;
pub mod driver;
pub mod error;
pub mod generation;
pub mod model;
#[cfg(feature = "fs")]
pub mod sink;
pub mod source;

// Re-export core types for convenience
pub use config::GeneratorConfig;
pub use driver::{DiagnosticSink, FileSink, MemorySink, Processor, RoundReport, TracingDiagnostics};
pub use error::{BuilderError, EmitError, Error, GenResult, SourceError};
pub use generation::{emit, group, validate, MutatorGroup, MutatorGroups, Validation};
pub use model::{Diagnostic, GeneratedSource, Mutator, Severity, TaggedElement, ValidationFailure};
#[cfg(feature = "fs")]
pub use sink::DirectorySink;
pub use source::{load_elements, parse_elements};
