//! Static interview catalog: roles, seniority levels, competencies and questions.
//!
//! Bundled into the binary as JSON, parsed and validated once at startup, and
//! shared read-only behind an `Arc` for the life of the process.

pub mod handlers;
pub mod validation;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::catalog::validation::{validate_catalog, CatalogIssue};
use crate::models::catalog::{Competency, Question, Role, RoleCategory, SeniorityLevel};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<CatalogIssue>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub competencies: Vec<Competency>,
    pub seniority_levels: Vec<SeniorityLevel>,
    pub roles: Vec<Role>,
    pub questions: Vec<Question>,
}

/// Roles sharing a category, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct RoleGroup<'a> {
    pub category: RoleCategory,
    pub label: &'static str,
    pub roles: Vec<&'a Role>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Parses and validates a catalog document. Any validation issue is fatal.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(raw)?;

        let issues = validate_catalog(&catalog);
        if !issues.is_empty() {
            for issue in &issues {
                error!(entity = %issue.entity_id, "Catalog issue: {}", issue.problem);
            }
            return Err(CatalogError::Invalid(issues));
        }

        catalog.seniority_levels.sort_by_key(|level| level.rank);

        info!(
            roles = catalog.roles.len(),
            seniority_levels = catalog.seniority_levels.len(),
            competencies = catalog.competencies.len(),
            questions = catalog.questions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    pub fn seniority(&self, id: &str) -> Option<&SeniorityLevel> {
        self.seniority_levels.iter().find(|s| s.id == id)
    }

    pub fn seniority_rank(&self, id: &str) -> Option<u8> {
        self.seniority(id).map(|s| s.rank)
    }

    pub fn competency(&self, id: &str) -> Option<&Competency> {
        self.competencies.iter().find(|c| c.id == id)
    }

    /// Display name for a competency id, or the id itself when unknown.
    pub fn competency_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.competency(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Groups roles by category in `RoleCategory::ALL` order, omitting empty groups.
    pub fn roles_by_category(&self) -> Vec<RoleGroup<'_>> {
        RoleCategory::ALL
            .iter()
            .map(|&category| RoleGroup {
                category,
                label: category.label(),
                roles: self.roles.iter().filter(|r| r.category == category).collect(),
            })
            .filter(|group| !group.roles.is_empty())
            .collect()
    }
}
