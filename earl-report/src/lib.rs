//! W3C EARL (Evaluation and Report Language) conformance reports as RDF.
//!
//! A [`Report`] owns an in-memory RDF graph, a fixed test subject, and a
//! fixed assertor. Each call to one of the five outcome methods ([`pass`],
//! [`fail`], [`cant_tell`], [`inapplicable`], [`untested`]) appends one
//! EARL assertion — a fixed pattern of seven triples plus one triple per
//! comment — and returns the fresh assertion node so callers can attach
//! further metadata to it. The accumulated graph serializes to Turtle or
//! N-Triples through the sophia RDF toolkit.
//!
//! [`pass`]: Report::pass
//! [`fail`]: Report::fail
//! [`cant_tell`]: Report::cant_tell
//! [`inapplicable`]: Report::inapplicable
//! [`untested`]: Report::untested
//!
//! # Example
//!
//! ```
//! use earl_report::{Comment, Report};
//!
//! # fn main() -> Result<(), earl_report::ReportError> {
//! let mut report = Report::new("http://example.org/my-crate")?;
//! report.pass("http://example.org/suite/test-1", [])?;
//! report.fail(
//!     "http://example.org/suite/test-2",
//!     [Comment::text("timed out after 30s")],
//! )?;
//! let turtle = report.to_turtle()?;
//! assert!(turtle.contains("earl"));
//! # Ok(())
//! # }
//! ```
//!
//! Repeat recordings for the same test IRI accumulate independent assertion
//! subgraphs; nothing is deduplicated or overwritten. The graph only grows.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod node;
pub mod report;
pub mod serializer;
pub mod vocab;

pub use error::ReportError;
pub use model::{Model, Statement};
pub use node::{Comment, Ident, Node};
pub use report::{Outcome, Report};
