//! Property-based tests for the outcome-recording algorithm.
//!
//! Uses proptest to verify the fixed triple-count contract and handle
//! freshness across all outcomes and comment lists.

use proptest::prelude::*;

use earl_report::{vocab, Comment, Node, Outcome, Report};

const OUTCOMES: [Outcome; 5] = [
    Outcome::Passed,
    Outcome::Failed,
    Outcome::CantTell,
    Outcome::Inapplicable,
    Outcome::Untested,
];

const SUBJECT: &str = "http://example.org/subject";
const TEST: &str = "http://example.org/test";

proptest! {
    /// Every recording appends exactly 7 triples plus one per comment,
    /// whatever the outcome.
    #[test]
    fn recording_appends_seven_triples_plus_comments(
        which in 0usize..5,
        comments in proptest::collection::vec(".{0,40}", 0..4),
    ) {
        let mut report = Report::new(SUBJECT).expect("valid subject IRI");
        let before = report.model().len();
        let items: Vec<Comment> = comments.iter().map(|c| Comment::text(c.as_str())).collect();
        report
            .record(TEST, OUTCOMES[which], items)
            .expect("valid test IRI");
        prop_assert_eq!(report.model().len() - before, 7 + comments.len());
    }

    /// The recorded outcome value is exactly the requested outcome term.
    #[test]
    fn recorded_outcome_matches_the_requested_term(which in 0usize..5) {
        let mut report = Report::new(SUBJECT).expect("valid subject IRI");
        let outcome = OUTCOMES[which];
        let assertion = report.record(TEST, outcome, []).expect("valid test IRI");
        let result = report
            .model()
            .objects(&assertion, vocab::earl::RESULT)
            .next()
            .cloned();
        prop_assert!(result.is_some());
        if let Some(result) = result {
            let outcomes: Vec<Node> = report
                .model()
                .objects(&result, vocab::earl::OUTCOME)
                .cloned()
                .collect();
            prop_assert_eq!(outcomes, vec![outcome.as_node()]);
        }
    }

    /// Assertion handles are pairwise distinct, even for a repeated test.
    #[test]
    fn assertion_handles_never_repeat(n in 1usize..8) {
        let mut report = Report::new(SUBJECT).expect("valid subject IRI");
        let mut handles = Vec::with_capacity(n);
        for _ in 0..n {
            handles.push(report.pass(TEST, []).expect("valid test IRI"));
        }
        for i in 0..handles.len() {
            for j in (i + 1)..handles.len() {
                prop_assert_ne!(&handles[i], &handles[j]);
            }
        }
    }
}
