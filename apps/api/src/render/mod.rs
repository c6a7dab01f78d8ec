//! Print rendering — turns a generated guide into print-ready Markdown.
//!
//! Every question card is fully expanded: probes, rubric and a notes area.

use crate::catalog::Catalog;
use crate::models::catalog::{Question, ScoreLevel};
use crate::models::guide::GeneratedGuide;

/// Competency tags shown on a question card.
const MAX_CARD_COMPETENCIES: usize = 2;

/// Lines left blank under each question for handwritten notes.
const NOTE_LINES: usize = 4;

pub fn render_markdown(guide: &GeneratedGuide<'_>, catalog: &Catalog) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", guide.role.name));

    let seniority_name = guide
        .seniority
        .map(|s| s.name.as_str())
        .unwrap_or(guide.seniority_id.as_str());
    let date = guide.generated_at.format("%B %-d, %Y");
    out.push_str(&format!(
        "**{}** · {} · {} {}\n\n",
        seniority_name,
        date,
        guide.question_count(),
        if guide.question_count() == 1 { "question" } else { "questions" }
    ));

    if guide.questions.is_empty() {
        out.push_str("_No questions available for this role and seniority._\n");
        return out;
    }

    let covered: Vec<&str> = guide
        .competencies_covered
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    out.push_str(&format!("Competencies covered: {}\n\n", covered.join(", ")));

    for guide_question in &guide.questions {
        out.push_str("---\n\n");
        render_question(&mut out, guide_question.position, guide_question.question, catalog);
    }

    out
}

fn render_question(out: &mut String, position: usize, question: &Question, catalog: &Catalog) {
    out.push_str(&format!("## {}. {}\n\n", position, question.text));

    let mut tags: Vec<String> = question
        .competencies
        .iter()
        .take(MAX_CARD_COMPETENCIES)
        .map(|id| format!("`{}`", catalog.competency_name(id)))
        .collect();
    tags.push(format!("_{}_", question.question_type.label()));
    out.push_str(&format!("{}\n\n", tags.join(" ")));

    out.push_str("### Follow-up Probes\n\n");
    for probe in &question.follow_up_probes {
        out.push_str(&format!("- {probe}\n"));
    }
    out.push('\n');

    out.push_str("### Scoring Rubric\n\n");
    for level in ScoreLevel::ALL {
        out.push_str(&format!(
            "- **{} · {}**: {}\n",
            level.score(),
            level.label(),
            question.rubric.describe(level)
        ));
    }
    out.push('\n');

    out.push_str("### Interview Notes\n\n");
    for _ in 0..NOTE_LINES {
        out.push_str("____________________________________________________________\n\n");
    }
}
