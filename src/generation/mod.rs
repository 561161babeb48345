//! The pure pipeline stages of a generation round.
//!
//! Data flows one way:
//!
//! 1. [`validate`] splits tagged elements into mutators and failures
//! 2. [`group`] folds mutators into one group per owning type
//! 3. [`emit`] renders one builder per group
//!
//! None of these stages performs I/O or keeps state between calls; the
//! [`Processor`](crate::driver::Processor) wires them to the sinks.

pub mod emitter;
pub mod grouper;
pub mod validator;

pub use emitter::{emit, split_owner};
pub use grouper::{group, MutatorGroup, MutatorGroups};
pub use validator::{is_mutator, validate, Validation, INVALID_MUTATOR_MESSAGE};
