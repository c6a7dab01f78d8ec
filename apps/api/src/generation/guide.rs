//! Guide Builder — resolves a request against the catalog and numbers the selection.

use std::collections::HashSet;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::generation::selector::{generate_questions, SelectionPolicy};
use crate::models::guide::{
    CoveredCompetency, GeneratedGuide, GuideQuestion, GuideRequest, DEFAULT_QUESTION_COUNT,
    DEFAULT_SENIORITY,
};

/// Builds a guide for the request.
///
/// The role must exist; an unknown role is `NotFound` and the selector is never
/// run. A missing or blank seniority defaults to `mid` and count to
/// `DEFAULT_QUESTION_COUNT`. An unknown seniority is not an error: it simply
/// matches no questions.
pub fn build_guide<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    request: &GuideRequest,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Result<GeneratedGuide<'a>, AppError> {
    let role = catalog
        .role(&request.role_id)
        .ok_or_else(|| AppError::NotFound(format!("Role '{}' not found", request.role_id)))?;

    let seniority_id = request
        .seniority_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SENIORITY)
        .to_string();
    let seniority = catalog.seniority(&seniority_id);
    if seniority.is_none() {
        warn!(seniority_id = %seniority_id, "Unknown seniority requested; guide will be empty");
    }

    let count = request.count.unwrap_or(DEFAULT_QUESTION_COUNT);
    let selected = generate_questions(catalog, &role.id, &seniority_id, count, policy, rng);

    let questions: Vec<GuideQuestion<'a>> = selected
        .into_iter()
        .enumerate()
        .map(|(i, question)| GuideQuestion {
            position: i + 1,
            question,
        })
        .collect();

    let competencies_covered = covered_competencies(catalog, &questions);

    let guide = GeneratedGuide {
        guide_id: Uuid::new_v4(),
        role,
        seniority_id,
        seniority,
        generated_at: Utc::now(),
        questions,
        competencies_covered,
    };

    info!(
        guide_id = %guide.guide_id,
        role = %guide.role.id,
        seniority = %guide.seniority_id,
        requested = count,
        questions = guide.question_count(),
        competencies = guide.competencies_covered.len(),
        "Guide generated"
    );

    Ok(guide)
}

/// Union of the selected questions' competencies, in order of first appearance.
pub fn covered_competencies(
    catalog: &Catalog,
    questions: &[GuideQuestion<'_>],
) -> Vec<CoveredCompetency> {
    let mut seen = HashSet::new();
    let mut covered = Vec::new();
    for guide_question in questions {
        for id in &guide_question.question.competencies {
            if seen.insert(id.as_str()) {
                covered.push(CoveredCompetency {
                    id: id.clone(),
                    name: catalog.competency_name(id).to_string(),
                });
            }
        }
    }
    covered
}
