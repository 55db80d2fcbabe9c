//! Common types shared by the menu and order aggregates

pub mod aggregate_id;
pub mod error;

// Re-exports
pub use aggregate_id::AggregateId;
pub use error::{FieldIssue, FieldProblem, OrderError, OrderResult, ReferenceKind};
