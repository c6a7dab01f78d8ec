use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Competency {
    pub id: String,
    pub name: String,
}

/// A seniority level. `rank` defines the total order used for eligibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeniorityLevel {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub rank: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    ProgramProduct,
    Engineering,
    Design,
    Operations,
}

impl RoleCategory {
    /// Display order used when grouping roles.
    pub const ALL: [RoleCategory; 4] = [
        RoleCategory::ProgramProduct,
        RoleCategory::Engineering,
        RoleCategory::Design,
        RoleCategory::Operations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleCategory::ProgramProduct => "Program & Product",
            RoleCategory::Engineering => "Engineering",
            RoleCategory::Design => "Design",
            RoleCategory::Operations => "Operations",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: RoleCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Behavioral question answered with a Situation/Task/Action/Result story.
    Star,
    Hypothetical,
    Values,
}

impl QuestionType {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Star => "STAR",
            QuestionType::Hypothetical => "Hypothetical",
            QuestionType::Values => "Values",
        }
    }
}

/// The four rubric score levels, lowest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    BelowBar = 1,
    ApproachingBar = 2,
    MeetsBar = 3,
    ExceedsBar = 4,
}

impl ScoreLevel {
    pub const ALL: [ScoreLevel; 4] = [
        ScoreLevel::BelowBar,
        ScoreLevel::ApproachingBar,
        ScoreLevel::MeetsBar,
        ScoreLevel::ExceedsBar,
    ];

    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::BelowBar => "Below Bar",
            ScoreLevel::ApproachingBar => "Approaching Bar",
            ScoreLevel::MeetsBar => "Meets Bar",
            ScoreLevel::ExceedsBar => "Exceeds Bar",
        }
    }
}

/// Per-question scoring rubric: one description for each score level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rubric {
    pub score1: String,
    pub score2: String,
    pub score3: String,
    pub score4: String,
}

impl Rubric {
    pub fn describe(&self, level: ScoreLevel) -> &str {
        match level {
            ScoreLevel::BelowBar => &self.score1,
            ScoreLevel::ApproachingBar => &self.score2,
            ScoreLevel::MeetsBar => &self.score3,
            ScoreLevel::ExceedsBar => &self.score4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub question_type: QuestionType,
    pub follow_up_probes: Vec<String>,
    pub rubric: Rubric,
    pub applicable_roles: Vec<String>,
    pub competencies: Vec<String>,
    pub minimum_seniority: String,
}

impl Question {
    pub fn applies_to(&self, role_id: &str) -> bool {
        self.applicable_roles.iter().any(|r| r == role_id)
    }
}
