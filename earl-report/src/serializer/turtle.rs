//! Turtle serializer, delegated to `sophia_turtle`.

use sophia_api::serializer::{Stringifier, TripleSerializer};
use sophia_turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};

use crate::error::ReportError;
use crate::model::Model;

/// Serializes the model as pretty-printed Turtle, prefixed with the fixed
/// `rdf`/`rdfs`/`dcterms`/`earl` namespace block. An empty model yields
/// only the prefix declarations.
///
/// # Errors
///
/// Returns [`ReportError::Serialization`] if a node cannot be rendered or
/// the underlying serializer fails.
pub fn to_turtle(model: &Model) -> Result<String, ReportError> {
    let graph = super::graph(model)?;
    let config = TurtleConfig::new()
        .with_pretty(true)
        .with_own_prefix_map(super::prefix_map());
    let mut serializer = TurtleSerializer::new_stringifier_with_config(config);
    let turtle = serializer
        .serialize_graph(&graph)
        .map_err(|e| ReportError::Serialization(e.to_string()))?
        .to_string();
    Ok(turtle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Comment;
    use crate::report::Report;
    use crate::vocab;

    #[test]
    fn empty_report_yields_prefixes_and_no_triples() -> Result<(), ReportError> {
        let report = Report::new("http://example.org/subject")?;
        let turtle = report.to_turtle()?;
        assert!(turtle.contains(vocab::earl::NS));
        assert!(turtle.contains(vocab::dcterms::NS));
        assert!(!turtle.contains("Assertion"));
        Ok(())
    }

    #[test]
    fn recorded_outcomes_appear_in_the_output() -> Result<(), ReportError> {
        let mut report = Report::new("http://example.org/subject")?;
        report.pass("http://example.org/test1", [])?;
        report.fail("http://example.org/test2", [Comment::text("timed out")])?;
        let turtle = report.to_turtle()?;
        assert!(turtle.contains("passed"));
        assert!(turtle.contains("failed"));
        assert!(turtle.contains("timed out"));
        Ok(())
    }
}
