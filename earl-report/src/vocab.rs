//! RDF vocabulary IRIs used in EARL reports.
//!
//! Constants are organized by vocabulary:
//! - `earl` — Evaluation and Report Language (http://www.w3.org/ns/earl#)
//! - `rdf` — RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` — RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `dcterms` — Dublin Core terms (http://purl.org/dc/terms/)
//! - `xsd` — XSD datatypes (http://www.w3.org/2001/XMLSchema#)

/// EARL vocabulary constants.
pub mod earl {
    /// EARL namespace IRI.
    pub const NS: &str = "http://www.w3.org/ns/earl#";

    /// earl:Assertion IRI — the class of individual test assertions.
    pub const ASSERTION: &str = "http://www.w3.org/ns/earl#Assertion";

    /// earl:TestResult IRI — the class of per-assertion result nodes.
    pub const TEST_RESULT: &str = "http://www.w3.org/ns/earl#TestResult";

    /// earl:assertedBy IRI — links an assertion to its assertor.
    pub const ASSERTED_BY: &str = "http://www.w3.org/ns/earl#assertedBy";

    /// earl:subject IRI — links an assertion to the thing under test.
    pub const SUBJECT: &str = "http://www.w3.org/ns/earl#subject";

    /// earl:test IRI — links an assertion to the test criterion.
    pub const TEST: &str = "http://www.w3.org/ns/earl#test";

    /// earl:result IRI — links an assertion to its result node.
    pub const RESULT: &str = "http://www.w3.org/ns/earl#result";

    /// earl:outcome IRI — links a result node to one of the five outcomes.
    pub const OUTCOME: &str = "http://www.w3.org/ns/earl#outcome";

    /// earl:passed IRI.
    pub const PASSED: &str = "http://www.w3.org/ns/earl#passed";

    /// earl:failed IRI.
    pub const FAILED: &str = "http://www.w3.org/ns/earl#failed";

    /// earl:cantTell IRI.
    pub const CANT_TELL: &str = "http://www.w3.org/ns/earl#cantTell";

    /// earl:inapplicable IRI.
    pub const INAPPLICABLE: &str = "http://www.w3.org/ns/earl#inapplicable";

    /// earl:untested IRI.
    pub const UNTESTED: &str = "http://www.w3.org/ns/earl#untested";
}

/// RDF vocabulary constants.
pub mod rdf {
    /// RDF namespace IRI.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants.
pub mod rdfs {
    /// RDFS namespace IRI.
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:comment IRI.
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// Dublin Core terms constants.
pub mod dcterms {
    /// DCTERMS namespace IRI. Declared in every serialized report so callers
    /// can augment the graph with dcterms metadata without re-prefixing.
    pub const NS: &str = "http://purl.org/dc/terms/";
}

/// XSD datatype constants.
pub mod xsd {
    /// xsd:string IRI — the datatype of plain comment literals.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
