//! Serializers for the report graph.
//!
//! Two output formats are supported, both delegated to the sophia RDF
//! toolkit, which owns the grammar and escaping rules:
//! - **Turtle** ([`turtle`]) — the primary report format, with a fixed
//!   namespace-prefix block
//! - **N-Triples** ([`ntriples`]) — one statement per line, for streaming
//!   and diff-friendly storage
//!
//! This module holds the shared pieces: the prefix map and the conversion
//! from the owned [`Model`] into sophia terms. Conversion is checked, so a
//! hand-built node carrying a malformed IRI surfaces as a
//! [`ReportError::Serialization`] here rather than as garbled output.

pub mod ntriples;
pub mod turtle;

use sophia_api::prefix::{Prefix, PrefixMapPair};
use sophia_api::term::{BnodeId, SimpleTerm};
use sophia_api::MownStr;
use sophia_iri::{Iri, IriRef};

use crate::error::ReportError;
use crate::model::Model;
use crate::node::Node;
use crate::vocab;

/// The fixed namespace-prefix block emitted with every Turtle report.
pub(crate) fn prefix_map() -> Vec<PrefixMapPair> {
    [
        ("rdf", vocab::rdf::NS),
        ("rdfs", vocab::rdfs::NS),
        ("dcterms", vocab::dcterms::NS),
        ("earl", vocab::earl::NS),
    ]
    .into_iter()
    .map(|(prefix, ns)| {
        (
            Prefix::new_unchecked(Box::from(prefix)),
            Iri::new_unchecked(Box::from(ns)),
        )
    })
    .collect()
}

/// Converts the model into a sophia triple graph borrowing from it.
pub(crate) fn graph(model: &Model) -> Result<Vec<[SimpleTerm<'_>; 3]>, ReportError> {
    model
        .iter()
        .map(|st| {
            Ok([
                term(&st.subject)?,
                term(&st.predicate)?,
                term(&st.object)?,
            ])
        })
        .collect()
}

fn term(node: &Node) -> Result<SimpleTerm<'_>, ReportError> {
    match node {
        Node::Iri(iri) => {
            let iri_ref = IriRef::new(MownStr::from(iri.as_str())).map_err(|e| {
                ReportError::Serialization(format!("cannot render IRI <{iri}>: {e}"))
            })?;
            Ok(SimpleTerm::Iri(iri_ref))
        }
        Node::Blank(label) => {
            let id = BnodeId::new(MownStr::from(label.as_str())).map_err(|e| {
                ReportError::Serialization(format!("cannot render blank node _:{label}: {e}"))
            })?;
            Ok(SimpleTerm::BlankNode(id))
        }
        Node::Literal { value, datatype } => {
            let datatype = datatype.as_deref().unwrap_or(vocab::xsd::STRING);
            let datatype = IriRef::new(MownStr::from(datatype)).map_err(|e| {
                ReportError::Serialization(format!("cannot render datatype <{datatype}>: {e}"))
            })?;
            Ok(SimpleTerm::LiteralDatatype(
                MownStr::from(value.as_str()),
                datatype,
            ))
        }
    }
}
