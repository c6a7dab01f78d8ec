use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::catalog::{Question, Role, SeniorityLevel};

/// Seniority used when a request does not name one.
pub const DEFAULT_SENIORITY: &str = "mid";

/// Question count used when a request does not name one.
pub const DEFAULT_QUESTION_COUNT: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideRequest {
    pub role_id: String,
    #[serde(default)]
    pub seniority_id: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// A selected question and its 1-based display position.
#[derive(Debug, Clone, Serialize)]
pub struct GuideQuestion<'a> {
    pub position: usize,
    pub question: &'a Question,
}

/// A competency touched by at least one question in the guide.
/// `name` falls back to the id when the catalog has no entry for it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoveredCompetency {
    pub id: String,
    pub name: String,
}

/// A freshly generated guide. Never stored; rebuilt on every request.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedGuide<'a> {
    pub guide_id: Uuid,
    pub role: &'a Role,
    pub seniority_id: String,
    /// `None` when the requested seniority is not in the catalog.
    pub seniority: Option<&'a SeniorityLevel>,
    pub generated_at: DateTime<Utc>,
    pub questions: Vec<GuideQuestion<'a>>,
    pub competencies_covered: Vec<CoveredCompetency>,
}

impl GeneratedGuide<'_> {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
