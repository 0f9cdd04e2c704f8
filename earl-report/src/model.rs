//! The in-memory RDF graph owned by a report.
//!
//! A [`Model`] is an insertion-ordered, append-only collection of
//! [`Statement`]s. No API removes statements, and duplicates are accepted
//! (they are harmless under RDF set semantics).

use crate::node::Node;

/// A single subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The subject term (an IRI or blank node).
    pub subject: Node,
    /// The predicate term (an IRI).
    pub predicate: Node,
    /// The object term.
    pub object: Node,
}

/// An append-only collection of statements forming an RDF graph.
///
/// The model is owned exclusively by one [`Report`](crate::Report), which
/// hands out a live mutable reference via
/// [`Report::model_mut`](crate::Report::model_mut) so callers can augment
/// the graph with supplementary triples (e.g. `doap:` project metadata).
#[derive(Debug, Clone, Default)]
pub struct Model {
    statements: Vec<Statement>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one statement from its three terms.
    pub fn insert(&mut self, subject: Node, predicate: Node, object: Node) {
        self.statements.push(Statement {
            subject,
            predicate,
            object,
        });
    }

    /// Appends an already-built statement.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Returns the number of statements in the model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the model holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Returns the statements in insertion order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Iterates over the statements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Iterates over the statements whose subject is the given node.
    pub fn about<'a>(&'a self, subject: &'a Node) -> impl Iterator<Item = &'a Statement> + 'a {
        self.statements.iter().filter(move |st| &st.subject == subject)
    }

    /// Iterates over the objects of statements with the given subject and
    /// predicate IRI.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Node,
        predicate_iri: &'a str,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.statements
            .iter()
            .filter(move |st| {
                &st.subject == subject
                    && matches!(&st.predicate, Node::Iri(iri) if iri == predicate_iri)
            })
            .map(|st| &st.object)
    }
}

impl Extend<Statement> for Model {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab;

    fn sample() -> Model {
        let mut model = Model::new();
        let s = Node::blank();
        model.insert(
            s.clone(),
            Node::known_iri(vocab::rdf::TYPE),
            Node::known_iri(vocab::earl::ASSERTION),
        );
        model.insert(
            s,
            Node::known_iri(vocab::rdfs::COMMENT),
            Node::literal("hello"),
        );
        model
    }

    #[test]
    fn insert_grows_the_model() {
        let model = sample();
        assert_eq!(model.len(), 2);
        assert!(!model.is_empty());
    }

    #[test]
    fn about_filters_by_subject() {
        let model = sample();
        let subject = model.statements()[0].subject.clone();
        assert_eq!(model.about(&subject).count(), 2);
        let other = Node::blank();
        assert_eq!(model.about(&other).count(), 0);
    }

    #[test]
    fn objects_filters_by_subject_and_predicate() {
        let model = sample();
        let subject = model.statements()[0].subject.clone();
        let comments: Vec<_> = model.objects(&subject, vocab::rdfs::COMMENT).collect();
        assert_eq!(comments, vec![&Node::literal("hello")]);
    }

    #[test]
    fn duplicate_statements_are_kept() {
        let mut model = Model::new();
        let st = Statement {
            subject: Node::blank(),
            predicate: Node::known_iri(vocab::rdf::TYPE),
            object: Node::known_iri(vocab::earl::ASSERTION),
        };
        model.push(st.clone());
        model.push(st);
        assert_eq!(model.len(), 2);
    }
}
