//! HTTP DTOs for catalog endpoints.

use serde::Serialize;

use crate::domain::catalog::{Catalog, MaturityLevel, ProcessDomain, MATURITY_LEVELS};

/// One questionnaire question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub prompt: String,
    pub citation: String,
}

/// One process domain with its questions in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct DomainResponse {
    pub code: String,
    pub name: String,
    pub questions: Vec<QuestionResponse>,
}

/// One maturity tier of the reference scale.
#[derive(Debug, Clone, Serialize)]
pub struct MaturityLevelResponse {
    pub level: u8,
    pub title: String,
    pub description: String,
}

impl From<&MaturityLevel> for MaturityLevelResponse {
    fn from(maturity: &MaturityLevel) -> Self {
        Self {
            level: maturity.level.value(),
            title: maturity.title.to_string(),
            description: maturity.description.to_string(),
        }
    }
}

/// The full reference catalog as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub domains: Vec<DomainResponse>,
    pub maturity_levels: Vec<MaturityLevelResponse>,
    pub question_count: usize,
}

impl CatalogResponse {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let domains = ProcessDomain::ALL
            .iter()
            .map(|domain| DomainResponse {
                code: domain.code().to_string(),
                name: domain.name().to_string(),
                questions: catalog
                    .questions_in(*domain)
                    .map(|q| QuestionResponse {
                        id: q.id.to_string(),
                        prompt: q.prompt.clone(),
                        citation: q.citation.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            domains,
            maturity_levels: MATURITY_LEVELS.iter().map(Into::into).collect(),
            question_count: catalog.len(),
        }
    }
}
