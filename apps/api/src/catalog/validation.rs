use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::catalog::ScoreLevel;

/// A single authoring defect found in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogIssue {
    pub entity_id: String,
    pub problem: String,
}

impl CatalogIssue {
    fn new(entity_id: &str, problem: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.to_string(),
            problem: problem.into(),
        }
    }
}

/// Checks referential integrity and completeness of the catalog.
///
/// Returns every issue found rather than stopping at the first, so a broken
/// data file can be fixed in one pass.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    let competency_ids = unique_ids(
        catalog.competencies.iter().map(|c| c.id.as_str()),
        "competency",
        &mut issues,
    );
    let seniority_ids = unique_ids(
        catalog.seniority_levels.iter().map(|s| s.id.as_str()),
        "seniority level",
        &mut issues,
    );
    let role_ids = unique_ids(
        catalog.roles.iter().map(|r| r.id.as_str()),
        "role",
        &mut issues,
    );
    unique_ids(
        catalog.questions.iter().map(|q| q.id.as_str()),
        "question",
        &mut issues,
    );

    let mut ranks = HashSet::new();
    for level in &catalog.seniority_levels {
        if !ranks.insert(level.rank) {
            issues.push(CatalogIssue::new(
                &level.id,
                format!("rank {} is shared with another seniority level", level.rank),
            ));
        }
    }

    for question in &catalog.questions {
        let id = question.id.as_str();

        if question.text.trim().is_empty() {
            issues.push(CatalogIssue::new(id, "question text is empty"));
        }
        if !seniority_ids.contains(question.minimum_seniority.as_str()) {
            issues.push(CatalogIssue::new(
                id,
                format!(
                    "minimum seniority '{}' is not a known seniority level",
                    question.minimum_seniority
                ),
            ));
        }
        if question.applicable_roles.is_empty() {
            issues.push(CatalogIssue::new(id, "no applicable roles"));
        }
        for role in &question.applicable_roles {
            if !role_ids.contains(role.as_str()) {
                issues.push(CatalogIssue::new(id, format!("unknown role '{role}'")));
            }
        }
        if question.competencies.is_empty() {
            issues.push(CatalogIssue::new(id, "no competencies"));
        }
        for competency in &question.competencies {
            if !competency_ids.contains(competency.as_str()) {
                issues.push(CatalogIssue::new(
                    id,
                    format!("unknown competency '{competency}'"),
                ));
            }
        }
        if question.follow_up_probes.is_empty() {
            issues.push(CatalogIssue::new(id, "no follow-up probes"));
        }
        for level in ScoreLevel::ALL {
            if question.rubric.describe(level).trim().is_empty() {
                issues.push(CatalogIssue::new(
                    id,
                    format!("rubric text for score {} is empty", level.score()),
                ));
            }
        }
    }

    issues
}

/// Collects ids into a set, reporting duplicates.
fn unique_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    kind: &str,
    issues: &mut Vec<CatalogIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            issues.push(CatalogIssue::new(id, format!("duplicate {kind} id")));
        }
    }
    seen
}
