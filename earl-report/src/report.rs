//! The EARL report builder and its outcome-recording algorithm.

use std::sync::OnceLock;

use crate::error::ReportError;
use crate::model::Model;
use crate::node::{Comment, Ident, Node};
use crate::serializer;
use crate::vocab;

/// The five EARL outcome values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `earl:passed` — the subject passed the test.
    Passed,
    /// `earl:failed` — the subject failed the test.
    Failed,
    /// `earl:cantTell` — it is unclear whether the subject passed.
    CantTell,
    /// `earl:inapplicable` — the test is not applicable to the subject.
    Inapplicable,
    /// `earl:untested` — the test has not been carried out.
    Untested,
}

impl Outcome {
    /// Returns the full IRI of this outcome value.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            Outcome::Passed => vocab::earl::PASSED,
            Outcome::Failed => vocab::earl::FAILED,
            Outcome::CantTell => vocab::earl::CANT_TELL,
            Outcome::Inapplicable => vocab::earl::INAPPLICABLE,
            Outcome::Untested => vocab::earl::UNTESTED,
        }
    }

    /// Returns this outcome as an IRI node.
    #[must_use]
    pub fn as_node(self) -> Node {
        Node::known_iri(self.iri())
    }
}

/// Base of the default assertor IRI; the crate version is appended as
/// `v_<version>` with `.` replaced by `-` for URI-safety.
const DEFAULT_ASSERTOR_BASE: &str = "https://crates.io/crates/earl-report";

/// The self-identifying assertor used when none is supplied. Computed once
/// per process.
fn default_assertor() -> &'static Node {
    static ASSERTOR: OnceLock<Node> = OnceLock::new();
    ASSERTOR.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION").replace('.', "-");
        Node::Iri(format!("{DEFAULT_ASSERTOR_BASE}/v_{version}"))
    })
}

/// An EARL report builder.
///
/// Owns the growing RDF graph, the fixed subject under test, and the fixed
/// assertor. Intended for single-writer accumulation during a linear test
/// run; it provides no internal locking.
#[derive(Debug, Clone)]
pub struct Report {
    subject: Node,
    assertor: Node,
    model: Model,
}

impl Report {
    /// Creates a report for the given subject, with the default
    /// self-identifying assertor.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingSubject`] if the subject identifier is
    /// empty, or [`ReportError::InvalidIri`] if it is not a valid absolute
    /// IRI. No model is allocated on failure.
    pub fn new(subject: impl Into<Ident>) -> Result<Self, ReportError> {
        Self::build(subject.into(), None)
    }

    /// Creates a report with an explicit assertor.
    ///
    /// # Errors
    ///
    /// As [`Report::new`]; additionally returns [`ReportError::InvalidIri`]
    /// if the assertor string is not a valid absolute IRI.
    pub fn with_assertor(
        subject: impl Into<Ident>,
        assertor: impl Into<Ident>,
    ) -> Result<Self, ReportError> {
        Self::build(subject.into(), Some(assertor.into()))
    }

    fn build(subject: Ident, assertor: Option<Ident>) -> Result<Self, ReportError> {
        if subject.is_empty_iri() {
            return Err(ReportError::MissingSubject);
        }
        let subject = subject.into_node()?;
        let assertor = match assertor {
            Some(assertor) => assertor.into_node()?,
            None => default_assertor().clone(),
        };
        Ok(Self {
            subject,
            assertor,
            model: Model::new(),
        })
    }

    /// Returns the subject node fixed at construction.
    #[must_use]
    pub fn subject(&self) -> &Node {
        &self.subject
    }

    /// Returns the assertor node fixed at construction.
    #[must_use]
    pub fn assertor(&self) -> &Node {
        &self.assertor
    }

    /// Returns the accumulated graph.
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the live, mutable graph, so callers can augment it with
    /// supplementary triples beyond the EARL core.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Records an outcome for a test: the central algorithm.
    ///
    /// Mints a fresh assertion node and a fresh result node, appends the
    /// fixed seven-triple assertion pattern plus one `rdfs:comment` triple
    /// per comment, and returns the assertion node. Each call is
    /// independent: recording the same test twice produces two separate,
    /// unrelated assertion subgraphs.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] if the test identifier is a
    /// string that is not a valid absolute IRI. Nothing is appended on
    /// failure.
    pub fn record(
        &mut self,
        test: impl Into<Ident>,
        outcome: Outcome,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        let test = test.into().into_node()?;
        let assertion = Node::blank();
        let result = Node::blank();

        self.model.insert(
            assertion.clone(),
            Node::known_iri(vocab::rdf::TYPE),
            Node::known_iri(vocab::earl::ASSERTION),
        );
        self.model.insert(
            assertion.clone(),
            Node::known_iri(vocab::earl::ASSERTED_BY),
            self.assertor.clone(),
        );
        self.model.insert(
            assertion.clone(),
            Node::known_iri(vocab::earl::SUBJECT),
            self.subject.clone(),
        );
        self.model.insert(
            assertion.clone(),
            Node::known_iri(vocab::earl::TEST),
            test,
        );
        self.model.insert(
            assertion.clone(),
            Node::known_iri(vocab::earl::RESULT),
            result.clone(),
        );
        self.model.insert(
            result.clone(),
            Node::known_iri(vocab::rdf::TYPE),
            Node::known_iri(vocab::earl::TEST_RESULT),
        );
        self.model.insert(
            result.clone(),
            Node::known_iri(vocab::earl::OUTCOME),
            outcome.as_node(),
        );
        for comment in comments {
            self.model.insert(
                result.clone(),
                Node::known_iri(vocab::rdfs::COMMENT),
                comment.into_node(),
            );
        }
        Ok(assertion)
    }

    /// Records `earl:passed` for the test. See [`Report::record`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] for an invalid test IRI string.
    pub fn pass(
        &mut self,
        test: impl Into<Ident>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        self.record(test, Outcome::Passed, comments)
    }

    /// Records `earl:failed` for the test. See [`Report::record`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] for an invalid test IRI string.
    pub fn fail(
        &mut self,
        test: impl Into<Ident>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        self.record(test, Outcome::Failed, comments)
    }

    /// Records `earl:cantTell` for the test. See [`Report::record`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] for an invalid test IRI string.
    pub fn cant_tell(
        &mut self,
        test: impl Into<Ident>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        self.record(test, Outcome::CantTell, comments)
    }

    /// Records `earl:inapplicable` for the test. See [`Report::record`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] for an invalid test IRI string.
    pub fn inapplicable(
        &mut self,
        test: impl Into<Ident>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        self.record(test, Outcome::Inapplicable, comments)
    }

    /// Records `earl:untested` for the test. See [`Report::record`].
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] for an invalid test IRI string.
    pub fn untested(
        &mut self,
        test: impl Into<Ident>,
        comments: impl IntoIterator<Item = Comment>,
    ) -> Result<Node, ReportError> {
        self.record(test, Outcome::Untested, comments)
    }

    /// Serializes the graph to Turtle with the fixed `rdf`/`rdfs`/
    /// `dcterms`/`earl` prefix block.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialization`] if the underlying renderer
    /// rejects a node (e.g. a hand-built malformed IRI).
    pub fn to_turtle(&self) -> Result<String, ReportError> {
        serializer::turtle::to_turtle(&self.model)
    }

    /// Serializes the graph to N-Triples, one statement per line.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Serialization`] if the underlying renderer
    /// rejects a node.
    pub fn to_ntriples(&self) -> Result<String, ReportError> {
        serializer::ntriples::to_ntriples(&self.model)
    }
}
