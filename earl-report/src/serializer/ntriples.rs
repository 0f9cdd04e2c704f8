//! N-Triples serializer, delegated to `sophia_turtle`.

use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_turtle::serializer::nt::NtSerializer;

use crate::error::ReportError;
use crate::model::Model;

/// Serializes the model as N-Triples, one statement per line in insertion
/// order, with absolute IRIs throughout.
///
/// # Errors
///
/// Returns [`ReportError::Serialization`] if a node cannot be rendered or
/// the underlying serializer fails.
pub fn to_ntriples(model: &Model) -> Result<String, ReportError> {
    let graph = super::graph(model)?;
    let mut serializer = NtSerializer::new_stringifier();
    let ntriples = serializer
        .serialize_graph(&graph)
        .map_err(|e| ReportError::Serialization(e.to_string()))?
        .to_string();
    Ok(ntriples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Report;

    #[test]
    fn one_line_per_statement_each_terminated() -> Result<(), ReportError> {
        let mut report = Report::new("http://example.org/subject")?;
        report.pass("http://example.org/test", [])?;
        let ntriples = report.to_ntriples()?;
        let lines: Vec<_> = ntriples.lines().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(lines.len(), report.model().len());
        for line in lines {
            assert!(line.trim_end().ends_with('.'), "unterminated line: {line}");
        }
        Ok(())
    }

    #[test]
    fn empty_model_serializes_to_nothing() -> Result<(), ReportError> {
        let report = Report::new("http://example.org/subject")?;
        let ntriples = report.to_ntriples()?;
        assert!(ntriples.trim().is_empty());
        Ok(())
    }
}
