//! Guide Selector — picks a competency-diverse random subset of eligible questions.
//!
//! Pure over its inputs plus the injected random source. Never fails: an
//! unknown role or seniority simply yields no eligible questions.

use std::collections::HashSet;
use std::str::FromStr;

use anyhow::bail;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::generation::shuffle::shuffle;
use crate::models::catalog::Question;

/// Admission rule for the diversity pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Admit a candidate only when it covers at least one new competency.
    #[default]
    Strict,
    /// Also admit any candidate while fewer than `count / 2` are selected.
    HalfFloor,
}

impl FromStr for SelectionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(SelectionPolicy::Strict),
            "half_floor" | "half-floor" => Ok(SelectionPolicy::HalfFloor),
            other => bail!("unknown selection policy '{other}' (expected strict or half_floor)"),
        }
    }
}

/// Questions that apply to `role_id` and whose minimum seniority rank does not
/// exceed the rank of `seniority_id`, in catalog order.
pub fn eligible_questions<'a>(
    catalog: &'a Catalog,
    role_id: &str,
    seniority_id: &str,
) -> Vec<&'a Question> {
    let Some(requested_rank) = catalog.seniority_rank(seniority_id) else {
        return Vec::new();
    };

    catalog
        .questions
        .iter()
        .filter(|q| {
            q.applies_to(role_id)
                && catalog
                    .seniority_rank(&q.minimum_seniority)
                    .is_some_and(|rank| rank <= requested_rank)
        })
        .collect()
}

/// Selects up to `count` questions for a role and seniority.
///
/// Algorithm:
/// 1. Filter to eligible questions
/// 2. Fisher–Yates shuffle
/// 3. Diversity pass: walk the shuffled list admitting candidates per `policy`
/// 4. Fill pass: walk it again appending anything not yet selected
///
/// The returned order is selection order and becomes the guide numbering.
/// Length is always `min(count, eligible)`.
pub fn generate_questions<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    role_id: &str,
    seniority_id: &str,
    count: usize,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut pool = eligible_questions(catalog, role_id, seniority_id);
    shuffle(&mut pool, rng);

    let mut taken = vec![false; pool.len()];
    let mut selected = diversity_pass(&pool, count, policy, &mut taken);
    let diverse = selected.len();

    for (i, &question) in pool.iter().enumerate() {
        if selected.len() >= count {
            break;
        }
        if !taken[i] {
            taken[i] = true;
            selected.push(question);
        }
    }

    debug!(
        role_id,
        seniority_id,
        count,
        eligible = pool.len(),
        diverse,
        filled = selected.len() - diverse,
        "Questions selected"
    );

    selected
}

/// Greedy single pass preferring questions that introduce uncovered competencies.
/// Marks admitted positions in `taken`.
fn diversity_pass<'a>(
    shuffled: &[&'a Question],
    count: usize,
    policy: SelectionPolicy,
    taken: &mut [bool],
) -> Vec<&'a Question> {
    let mut selected = Vec::with_capacity(count.min(shuffled.len()));
    let mut covered: HashSet<&'a str> = HashSet::new();

    for (i, &question) in shuffled.iter().enumerate() {
        if selected.len() >= count {
            break;
        }

        let adds_competency = question
            .competencies
            .iter()
            .any(|c| !covered.contains(c.as_str()));
        let below_floor = policy == SelectionPolicy::HalfFloor && selected.len() * 2 < count;

        if adds_competency || below_floor {
            covered.extend(question.competencies.iter().map(String::as_str));
            taken[i] = true;
            selected.push(question);
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::catalog::tests::{make_catalog, make_question};

    fn ids(questions: &[&Question]) -> Vec<String> {
        questions.iter().map(|q| q.id.clone()).collect()
    }

    fn distinct_competencies(questions: &[&Question]) -> usize {
        questions
            .iter()
            .flat_map(|q| q.competencies.iter())
            .collect::<HashSet<_>>()
            .len()
    }

    fn engineer_catalog() -> Catalog {
        make_catalog(vec![
            make_question("q1", &["engineer"], &["a"], "junior"),
            make_question("q2", &["engineer"], &["b"], "mid"),
            make_question("q3", &["engineer"], &["a", "b"], "senior"),
        ])
    }

    #[test]
    fn test_mid_engineer_gets_junior_and_mid_questions_only() {
        let catalog = engineer_catalog();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut result = ids(&generate_questions(
                &catalog,
                "engineer",
                "mid",
                12,
                SelectionPolicy::Strict,
                &mut rng,
            ));
            result.sort();
            assert_eq!(result, vec!["q1", "q2"]);
        }
    }

    #[test]
    fn test_eligibility_matches_role_and_rank_rule() {
        let catalog = Catalog::bundled().unwrap();
        for role in &catalog.roles {
            for level in &catalog.seniority_levels {
                let eligible: HashSet<&str> = eligible_questions(&catalog, &role.id, &level.id)
                    .iter()
                    .map(|q| q.id.as_str())
                    .collect();
                for q in &catalog.questions {
                    let expected = q.applicable_roles.contains(&role.id)
                        && catalog.seniority_rank(&q.minimum_seniority).unwrap() <= level.rank;
                    assert_eq!(
                        eligible.contains(q.id.as_str()),
                        expected,
                        "{} for {} at {}",
                        q.id,
                        role.id,
                        level.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_eligibility_monotonic_in_seniority() {
        let catalog = Catalog::bundled().unwrap();
        let levels = &catalog.seniority_levels;
        for role in &catalog.roles {
            for pair in levels.windows(2) {
                let lower: HashSet<&str> = eligible_questions(&catalog, &role.id, &pair[0].id)
                    .iter()
                    .map(|q| q.id.as_str())
                    .collect();
                let higher: HashSet<&str> = eligible_questions(&catalog, &role.id, &pair[1].id)
                    .iter()
                    .map(|q| q.id.as_str())
                    .collect();
                assert!(
                    lower.is_subset(&higher),
                    "{}: {} set not contained in {}",
                    role.id,
                    pair[0].id,
                    pair[1].id
                );
            }
        }
    }

    #[test]
    fn test_no_duplicates_and_size_bound() {
        let catalog = Catalog::bundled().unwrap();
        for role in &catalog.roles {
            for level in &catalog.seniority_levels {
                let eligible = eligible_questions(&catalog, &role.id, &level.id).len();
                for (seed, count) in [(1u64, 1usize), (2, 5), (3, 12), (4, 15), (5, 100)] {
                    for policy in [SelectionPolicy::Strict, SelectionPolicy::HalfFloor] {
                        let mut rng = StdRng::seed_from_u64(seed);
                        let result =
                            generate_questions(&catalog, &role.id, &level.id, count, policy, &mut rng);
                        assert_eq!(result.len(), count.min(eligible));
                        let unique: HashSet<&str> = result.iter().map(|q| q.id.as_str()).collect();
                        assert_eq!(unique.len(), result.len(), "duplicate in {}", role.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_role_or_seniority_yields_empty() {
        let catalog = Catalog::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_questions(
            &catalog,
            "nonexistent-role",
            "mid",
            12,
            SelectionPolicy::Strict,
            &mut rng
        )
        .is_empty());
        assert!(generate_questions(
            &catalog,
            "tpm",
            "principal",
            12,
            SelectionPolicy::Strict,
            &mut rng
        )
        .is_empty());
    }

    #[test]
    fn test_zero_count_yields_empty() {
        let catalog = engineer_catalog();
        let mut rng = StdRng::seed_from_u64(0);
        let result =
            generate_questions(&catalog, "engineer", "leadership", 0, SelectionPolicy::HalfFloor, &mut rng);
        assert!(result.is_empty());
    }

    #[test]
    fn test_strict_diversity_pass_covers_min_count_competencies() {
        // Twelve questions, two per competency: six distinct competencies.
        let questions: Vec<Question> = (0..12)
            .map(|i| {
                let comp = format!("c{}", i / 2);
                make_question(&format!("q{i}"), &["eng"], &[comp.as_str()], "junior")
            })
            .collect();
        let catalog = make_catalog(questions);

        for count in [4usize, 6, 10] {
            for seed in 0..30 {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut pool = eligible_questions(&catalog, "eng", "junior");
                shuffle(&mut pool, &mut rng);
                let mut taken = vec![false; pool.len()];
                let diverse = diversity_pass(&pool, count, SelectionPolicy::Strict, &mut taken);
                assert!(
                    distinct_competencies(&diverse) >= count.min(6),
                    "count {count}, seed {seed}: only {} competencies",
                    distinct_competencies(&diverse)
                );
            }
        }
    }

    #[test]
    fn test_fill_pass_tops_up_after_diversity_exhausted() {
        let questions: Vec<Question> = (0..12)
            .map(|i| {
                let comp = format!("c{}", i / 2);
                make_question(&format!("q{i}"), &["eng"], &[comp.as_str()], "junior")
            })
            .collect();
        let catalog = make_catalog(questions);
        let mut rng = StdRng::seed_from_u64(11);
        let result =
            generate_questions(&catalog, "eng", "junior", 10, SelectionPolicy::Strict, &mut rng);

        assert_eq!(result.len(), 10);
        // The first six come from the diversity pass: one per competency.
        assert_eq!(distinct_competencies(&result[..6]), 6);
    }

    #[test]
    fn test_half_floor_admits_repeats_below_half() {
        let questions: Vec<Question> = (0..6)
            .map(|i| make_question(&format!("q{i}"), &["eng"], &["a"], "junior"))
            .collect();
        let catalog = make_catalog(questions);
        let pool = eligible_questions(&catalog, "eng", "junior");

        let mut taken = vec![false; pool.len()];
        let floor = diversity_pass(&pool, 4, SelectionPolicy::HalfFloor, &mut taken);
        assert_eq!(floor.len(), 2);

        let mut taken = vec![false; pool.len()];
        let strict = diversity_pass(&pool, 4, SelectionPolicy::Strict, &mut taken);
        assert_eq!(strict.len(), 1);

        // Odd counts round the floor up: 5 / 2 admits three.
        let mut taken = vec![false; pool.len()];
        let odd = diversity_pass(&pool, 5, SelectionPolicy::HalfFloor, &mut taken);
        assert_eq!(odd.len(), 3);
    }

    #[test]
    fn test_regenerate_produces_different_guides() {
        let catalog = Catalog::bundled().unwrap();
        let eligible = eligible_questions(&catalog, "fullstack-engineer", "leadership").len();
        assert!(eligible > 12, "need more than 12 eligible, have {eligible}");

        let first = generate_questions(
            &catalog,
            "fullstack-engineer",
            "leadership",
            12,
            SelectionPolicy::Strict,
            &mut StdRng::seed_from_u64(1),
        );
        let second = generate_questions(
            &catalog,
            "fullstack-engineer",
            "leadership",
            12,
            SelectionPolicy::Strict,
            &mut StdRng::seed_from_u64(2),
        );
        assert_ne!(ids(&first), ids(&second));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::Strict);
        assert_eq!(
            "Half_Floor".parse::<SelectionPolicy>().unwrap(),
            SelectionPolicy::HalfFloor
        );
        assert!("greedy".parse::<SelectionPolicy>().is_err());
    }
}
