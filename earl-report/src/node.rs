//! RDF term types and input coercion.
//!
//! [`Node`] is the term type stored in the model. [`Ident`] and [`Comment`]
//! are the string-or-node unions accepted at every public entry point:
//! plain strings coerce to IRI nodes (for identifiers) or plain literals
//! (for comments), while pre-built nodes pass through unchanged.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ReportError;

/// An RDF term: an IRI, a blank node, or a literal.
///
/// Nodes compare structurally: two IRI nodes are equal when their strings
/// are equal, two literals when value and datatype are equal. Blank nodes
/// minted by [`Node::blank`] carry process-unique labels and therefore
/// never compare equal across two mintings.
///
/// The checked constructors ([`Node::iri`], [`Node::typed_literal`])
/// validate IRI syntax up front. Variants built by hand bypass that check;
/// a malformed hand-built IRI is caught when the graph is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An absolute IRI.
    Iri(String),
    /// A blank node with a graph-scoped label.
    Blank(String),
    /// A literal value, optionally typed. `None` means a plain string
    /// literal (serialized as `xsd:string`).
    Literal {
        /// The lexical value.
        value: String,
        /// The datatype IRI, or `None` for a plain string literal.
        datatype: Option<String>,
    },
}

/// Source of fresh blank-node labels. Process-wide so that two builders
/// never mint colliding labels.
static NEXT_BLANK_LABEL: AtomicU64 = AtomicU64::new(0);

impl Node {
    /// Creates an IRI node, validating that the input is an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] if the input is not a
    /// syntactically valid absolute IRI.
    pub fn iri(value: impl Into<String>) -> Result<Self, ReportError> {
        let value = value.into();
        let check = sophia_iri::Iri::new(value.as_str())
            .map(|_| ())
            .map_err(|e| e.to_string());
        match check {
            Ok(()) => Ok(Node::Iri(value)),
            Err(reason) => Err(ReportError::InvalidIri { iri: value, reason }),
        }
    }

    /// Creates an IRI node from a vocabulary constant that is known valid.
    pub(crate) fn known_iri(iri: &'static str) -> Self {
        Node::Iri(iri.to_owned())
    }

    /// Creates a plain (untyped) string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Node::Literal {
            value: value.into(),
            datatype: None,
        }
    }

    /// Creates a typed literal, validating the datatype IRI.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidIri`] if the datatype is not a
    /// syntactically valid absolute IRI.
    pub fn typed_literal(
        value: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let datatype = datatype.into();
        let check = sophia_iri::Iri::new(datatype.as_str())
            .map(|_| ())
            .map_err(|e| e.to_string());
        match check {
            Ok(()) => Ok(Node::Literal {
                value: value.into(),
                datatype: Some(datatype),
            }),
            Err(reason) => Err(ReportError::InvalidIri {
                iri: datatype,
                reason,
            }),
        }
    }

    /// Mints a fresh blank node. The label is never reused for the
    /// lifetime of the process.
    #[must_use]
    pub fn blank() -> Self {
        let n = NEXT_BLANK_LABEL.fetch_add(1, Ordering::Relaxed);
        Node::Blank(format!("b{n}"))
    }

    /// Returns true if this node is an IRI.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// Returns true if this node is a blank node.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Returns true if this node is a literal.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal { .. })
    }
}

/// An identifier argument: either an IRI string (coerced and validated on
/// use) or an already-built [`Node`] (used as-is, which supports passing a
/// blank node or literal as subject/assertor in edge cases).
#[derive(Debug, Clone)]
pub enum Ident {
    /// An IRI string, validated when the identifier is resolved.
    Iri(String),
    /// A pre-built node, passed through unchanged.
    Node(Node),
}

impl Ident {
    /// Resolves the identifier to a node, validating IRI strings.
    pub(crate) fn into_node(self) -> Result<Node, ReportError> {
        match self {
            Ident::Iri(value) => Node::iri(value),
            Ident::Node(node) => Ok(node),
        }
    }

    /// Returns true if this identifier is a blank or whitespace-only
    /// IRI string, i.e. no identifier was effectively supplied.
    pub(crate) fn is_empty_iri(&self) -> bool {
        matches!(self, Ident::Iri(value) if value.trim().is_empty())
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident::Iri(value.to_owned())
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Ident::Iri(value)
    }
}

impl From<Node> for Ident {
    fn from(node: Node) -> Self {
        Ident::Node(node)
    }
}

/// A comment argument: either free text (coerced to a plain literal) or an
/// already-built [`Node`] (used as-is, e.g. a typed or language-tagged
/// literal).
#[derive(Debug, Clone)]
pub enum Comment {
    /// Free text, coerced to a plain string literal.
    Text(String),
    /// A pre-built node, attached unchanged.
    Node(Node),
}

impl Comment {
    /// Creates a free-text comment.
    pub fn text(value: impl Into<String>) -> Self {
        Comment::Text(value.into())
    }

    /// Converts the comment into the node attached to the result.
    pub(crate) fn into_node(self) -> Node {
        match self {
            Comment::Text(value) => Node::literal(value),
            Comment::Node(node) => node,
        }
    }
}

impl From<&str> for Comment {
    fn from(value: &str) -> Self {
        Comment::Text(value.to_owned())
    }
}

impl From<String> for Comment {
    fn from(value: String) -> Self {
        Comment::Text(value)
    }
}

impl From<Node> for Comment {
    fn from(node: Node) -> Self {
        Comment::Node(node)
    }
}
