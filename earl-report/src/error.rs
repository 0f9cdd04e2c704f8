//! Error types for report construction, input coercion, and serialization.

use thiserror::Error;

/// Errors produced by the report builder.
///
/// Every operation is deterministic and either succeeds or fails
/// immediately; there is no transient-failure class and nothing is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Construction was attempted without a usable subject identifier.
    #[error("report subject is required and cannot be empty")]
    MissingSubject,

    /// A supplied string is not a syntactically valid absolute IRI.
    #[error("invalid IRI <{iri}>: {reason}")]
    InvalidIri {
        /// The rejected input string.
        iri: String,
        /// What the IRI parser objected to.
        reason: String,
    },

    /// The underlying RDF serializer rejected the graph.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
