//! The fixed, ordered question catalog.

use once_cell::sync::Lazy;

use super::{ProcessDomain, Question};
use crate::domain::foundation::QuestionId;

/// Definition rows for the reference catalog: (id, domain, prompt, citation).
///
/// 17 sub-practices across MEA01 (5), MEA02 (8), MEA03 (4).
const REFERENCE_QUESTIONS: &[(&str, ProcessDomain, &str, &str)] = &[
    (
        "MEA01.01",
        ProcessDomain::Mea01,
        "Has a monitoring approach been established?",
        "MEA01.01 Establish a monitoring approach.",
    ),
    (
        "MEA01.02",
        ProcessDomain::Mea01,
        "Have performance and conformance targets been set?",
        "MEA01.02 Set performance and conformance targets.",
    ),
    (
        "MEA01.03",
        ProcessDomain::Mea01,
        "Are performance and conformance data collected and processed?",
        "MEA01.03 Collect and process performance and conformance data.",
    ),
    (
        "MEA01.04",
        ProcessDomain::Mea01,
        "Is performance analysed and reported?",
        "MEA01.04 Analyse and report performance.",
    ),
    (
        "MEA01.05",
        ProcessDomain::Mea01,
        "Is the implementation of corrective actions ensured?",
        "MEA01.05 Ensure the implementation of corrective actions.",
    ),
    (
        "MEA02.01",
        ProcessDomain::Mea02,
        "Are internal controls monitored?",
        "MEA02.01 Monitor internal controls.",
    ),
    (
        "MEA02.02",
        ProcessDomain::Mea02,
        "Is the effectiveness of business process controls reviewed?",
        "MEA02.02 Review business process controls effectiveness.",
    ),
    (
        "MEA02.03",
        ProcessDomain::Mea02,
        "Are control self-assessments performed?",
        "MEA02.03 Perform control self-assessments.",
    ),
    (
        "MEA02.04",
        ProcessDomain::Mea02,
        "Are control deficiencies identified and reported?",
        "MEA02.04 Identify and report control deficiencies.",
    ),
    (
        "MEA02.05",
        ProcessDomain::Mea02,
        "Are assurance providers independent and qualified?",
        "MEA02.05 Ensure that assurance providers are independent and qualified.",
    ),
    (
        "MEA02.06",
        ProcessDomain::Mea02,
        "Are assurance initiatives planned?",
        "MEA02.06 Plan assurance initiatives.",
    ),
    (
        "MEA02.07",
        ProcessDomain::Mea02,
        "Are assurance initiatives scoped?",
        "MEA02.07 Scope assurance initiatives.",
    ),
    (
        "MEA02.08",
        ProcessDomain::Mea02,
        "Are assurance initiatives executed?",
        "MEA02.08 Execute assurance initiatives.",
    ),
    (
        "MEA03.01",
        ProcessDomain::Mea03,
        "Are external compliance requirements identified?",
        "MEA03.01 Identify external compliance requirements.",
    ),
    (
        "MEA03.02",
        ProcessDomain::Mea03,
        "Is the response to external requirements optimised?",
        "MEA03.02 Optimise response to external requirements.",
    ),
    (
        "MEA03.03",
        ProcessDomain::Mea03,
        "Is external compliance confirmed?",
        "MEA03.03 Confirm external compliance.",
    ),
    (
        "MEA03.04",
        ProcessDomain::Mea03,
        "Is assurance of external compliance obtained?",
        "MEA03.04 Obtain assurance of external compliance.",
    ),
];

static REFERENCE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let questions = REFERENCE_QUESTIONS
        .iter()
        .map(|(id, domain, prompt, citation)| {
            let id = QuestionId::new(*id).expect("reference catalog ids are non-empty");
            Question::new(id, *domain, *prompt, *citation)
        })
        .collect();
    Catalog::new(questions)
});

/// Returns the built-in MEA reference catalog.
pub fn reference_catalog() -> &'static Catalog {
    &REFERENCE_CATALOG
}

/// An ordered, immutable catalog of questions partitioned by domain.
///
/// The design supports any fixed-size catalog; the MEA reference data is
/// one instance of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Creates a catalog from an ordered question sequence.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// All questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// True when the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Looks up a question by identifier.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// True if the catalog contains a question with this identifier.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// Questions belonging to one domain, in catalog order.
    pub fn questions_in(&self, domain: ProcessDomain) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.domain == domain)
    }

    /// Number of questions in one domain.
    pub fn domain_len(&self, domain: ProcessDomain) -> usize {
        self.questions_in(domain).count()
    }
}
