//! Behavioral interviewing best practices served alongside the guides.
//!
//! Static reference content; the scoring guide shares its labels with the rubrics.

pub mod handlers;

use serde::Serialize;

use crate::models::catalog::ScoreLevel;

#[derive(Debug, Clone, Serialize)]
pub struct StarStep {
    pub letter: char,
    pub name: &'static str,
    pub listen_for: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeCategory {
    pub name: &'static str,
    pub examples: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Principle {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeniorityCalibration {
    pub seniority_id: &'static str,
    pub expectations: &'static str,
    pub bar: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreGuide {
    pub level: ScoreLevel,
    pub score: u8,
    pub label: &'static str,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BestPractices {
    pub star_framework: Vec<StarStep>,
    pub probing: Vec<ProbeCategory>,
    pub principles: Vec<Principle>,
    pub red_flags: Vec<&'static str>,
    pub seniority_calibration: Vec<SeniorityCalibration>,
    pub scoring_guide: Vec<ScoreGuide>,
    pub after_interview: Vec<&'static str>,
}

const RED_FLAGS: &[&str] = &[
    "Can't provide specific examples (vague \"we usually...\" responses)",
    "Takes credit for team work without acknowledging others",
    "Blames others without self-reflection",
    "Can't articulate learning or growth from experiences",
    "Inconsistent stories across different questions",
    "Lack of mission alignment or purely mercenary motivations",
];

const AFTER_INTERVIEW: &[&str] = &[
    "Complete your scoring immediately while details are fresh",
    "Include specific quotes and examples to support each score",
    "Note any areas where you'd want other panelists to probe",
    "Flag any potential red flags for discussion",
    "Reserve final hiring recommendation for calibration session",
];

/// What each score level means across all questions.
pub fn score_meaning(level: ScoreLevel) -> &'static str {
    match level {
        ScoreLevel::BelowBar => {
            "Red flags or concerning patterns. Cannot provide examples. \
             Evidence suggests they would struggle in this role."
        }
        ScoreLevel::ApproachingBar => {
            "Adequate but gaps in key areas. Shows some competency but with \
             concerning limitations or inconsistency."
        }
        ScoreLevel::MeetsBar => {
            "Solid evidence of competency. Clear examples that demonstrate the \
             skill at the expected level for this role."
        }
        ScoreLevel::ExceedsBar => {
            "Exceptional demonstration with notable insights. Would raise the bar \
             for the team. Clear multiplier potential."
        }
    }
}

pub fn best_practices() -> BestPractices {
    BestPractices {
        star_framework: vec![
            StarStep {
                letter: 'S',
                name: "Situation",
                listen_for: "Context and background. When, where, who was involved?",
            },
            StarStep {
                letter: 'T',
                name: "Task",
                listen_for: "The challenge or objective they faced.",
            },
            StarStep {
                letter: 'A',
                name: "Action",
                listen_for: "Specific steps they took. Watch for \"we\" vs \"I\".",
            },
            StarStep {
                letter: 'R',
                name: "Result",
                listen_for: "Measurable outcomes and lessons learned.",
            },
        ],
        probing: vec![
            ProbeCategory {
                name: "Depth probes",
                examples: vec![
                    "Tell me more about that decision.",
                    "Walk me through your thinking.",
                ],
            },
            ProbeCategory {
                name: "Role clarity",
                examples: vec![
                    "What specifically was your role?",
                    "Who else was involved?",
                ],
            },
            ProbeCategory {
                name: "Outcome focus",
                examples: vec!["What was the impact?", "How did you measure success?"],
            },
            ProbeCategory {
                name: "Reflection",
                examples: vec![
                    "What would you do differently?",
                    "What did you learn?",
                ],
            },
        ],
        principles: vec![
            Principle {
                title: "Depth Over Breadth",
                detail: "Better to probe deeply on 3-4 questions than superficially cover 15. \
                         The rubrics help you know when you have enough evidence.",
            },
            Principle {
                title: "Evidence-Based Scoring",
                detail: "Score on concrete examples, not likability or communication polish. \
                         Use the rubric descriptions to calibrate.",
            },
            Principle {
                title: "Pause Tolerance",
                detail: "Allow silence. The best answers often come after candidate reflection. \
                         Don't rush to fill the gap.",
            },
            Principle {
                title: "Note-Taking",
                detail: "Capture verbatim quotes to support your scoring. \
                         This helps in calibration and debrief discussions.",
            },
        ],
        red_flags: RED_FLAGS.to_vec(),
        seniority_calibration: vec![
            SeniorityCalibration {
                seniority_id: "junior",
                expectations: "Clear examples with guidance/mentorship. Learning mindset and \
                               growth trajectory. Basic competency demonstration.",
                bar: "Potential over proven track record.",
            },
            SeniorityCalibration {
                seniority_id: "mid",
                expectations: "Independent execution with measurable impact. Some mentorship \
                               of others. Navigating ambiguity with less guidance.",
                bar: "Established patterns of success.",
            },
            SeniorityCalibration {
                seniority_id: "senior",
                expectations: "Strategic thinking and organizational influence. \
                               Technical/design leadership. Complex problem-solving.",
                bar: "Creating leverage through process/tools/culture.",
            },
            SeniorityCalibration {
                seniority_id: "leadership",
                expectations: "Vision-setting and organizational transformation. Executive \
                               stakeholder management. Building teams and practices.",
                bar: "Multi-project impact with measurable outcomes.",
            },
        ],
        scoring_guide: ScoreLevel::ALL
            .iter()
            .map(|&level| ScoreGuide {
                level,
                score: level.score(),
                label: level.label(),
                meaning: score_meaning(level),
            })
            .collect(),
        after_interview: AFTER_INTERVIEW.to_vec(),
    }
}
