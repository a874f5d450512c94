//! Scoring of a completed assessment.

use careerpath_core::{percent, Level, MAX_POINTS};
use serde::Serialize;

use crate::bank::QuestionBank;
use crate::error::{AssessmentError, Result};

/// Score for one question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    /// Category label
    pub category: String,

    /// Questions in this category
    pub questions: usize,

    /// Points earned
    pub points: u32,

    /// Percentage of attainable points (0-100)
    pub score: u8,

    /// Level for `score`
    pub level: Level,
}

/// Outcome of a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    /// Percentage of attainable points over all questions (0-100)
    pub overall_score: u8,

    /// Level for `overall_score`
    pub overall_level: Level,

    /// Points earned
    pub total_points: u32,

    /// Points attainable
    pub max_points: u32,

    /// Per-category scores in order of first appearance
    pub categories: Vec<CategoryScore>,
}

impl AssessmentResult {
    /// Score a full set of answers against a bank.
    ///
    /// Each answer is worth its option index. `answers[i]` belongs to the
    /// i-th question of the bank. Fails with `NotComplete` unless there is
    /// exactly one answer per question, and with `InvalidOption` for an
    /// index outside the question's options.
    pub fn score(bank: &QuestionBank, answers: &[u8]) -> Result<Self> {
        if answers.len() != bank.len() {
            return Err(AssessmentError::NotComplete);
        }
        for (question, &answer) in bank.questions().iter().zip(answers) {
            if usize::from(answer) >= question.option_count() {
                return Err(AssessmentError::InvalidOption {
                    option: usize::from(answer),
                    option_count: question.option_count(),
                });
            }
        }

        let mut categories: Vec<CategoryScore> = Vec::new();
        let mut total_points = 0u32;

        for (question, &answer) in bank.questions().iter().zip(answers) {
            let points = u32::from(answer);
            total_points += points;

            match categories.iter_mut().find(|c| c.category == question.category) {
                Some(entry) => {
                    entry.questions += 1;
                    entry.points += points;
                }
                None => categories.push(CategoryScore {
                    category: question.category.clone(),
                    questions: 1,
                    points,
                    score: 0,
                    level: Level::Beginner,
                }),
            }
        }

        for entry in &mut categories {
            entry.score = score_of(entry.points, entry.questions);
            entry.level = Level::from_score(entry.score);
        }

        let overall_score = score_of(total_points, bank.len());
        Ok(Self {
            overall_score,
            overall_level: Level::from_score(overall_score),
            total_points,
            max_points: bank.len() as u32 * u32::from(MAX_POINTS),
            categories,
        })
    }

    /// Score for a named category.
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|c| c.category == name)
    }

    /// Categories below Advanced, weakest first.
    pub fn focus_areas(&self) -> Vec<&CategoryScore> {
        let mut weak: Vec<_> = self
            .categories
            .iter()
            .filter(|c| c.level < Level::Advanced)
            .collect();
        weak.sort_by_key(|c| c.score);
        weak
    }
}

fn score_of(points: u32, questions: usize) -> u8 {
    percent::percentage(u64::from(points), questions as u64 * u64::from(MAX_POINTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerpath_core::Question;

    fn bank(categories: &[&str]) -> QuestionBank {
        let questions = categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                Question::new(
                    (i + 1).to_string(),
                    *category,
                    format!("Question {}", i + 1),
                    vec!["none".into(), "basic".into(), "solid".into(), "expert".into()],
                )
            })
            .collect();
        QuestionBank::new(questions).unwrap()
    }

    #[test]
    fn test_all_top_answers() {
        let bank = bank(&["Technical Skills", "Leadership", "Problem Solving", "Communication"]);
        let result = AssessmentResult::score(&bank, &[3, 3, 3, 3]).unwrap();
        assert_eq!(result.overall_score, 100);
        assert_eq!(result.overall_level, Level::Expert);
        assert_eq!(result.total_points, 12);
        assert_eq!(result.max_points, 12);
        assert!(result.focus_areas().is_empty());
    }

    #[test]
    fn test_single_question_category() {
        let bank = bank(&["Technical Skills", "Leadership", "Problem Solving", "Communication"]);
        let result = AssessmentResult::score(&bank, &[3, 1, 2, 3]).unwrap();

        let leadership = result.category("Leadership").unwrap();
        assert_eq!(leadership.questions, 1);
        assert_eq!(leadership.score, 33);
        assert_eq!(leadership.level, Level::Beginner);

        let solving = result.category("Problem Solving").unwrap();
        assert_eq!(solving.score, 67);
        assert_eq!(solving.level, Level::Advanced);

        // 9 of 12
        assert_eq!(result.overall_score, 75);
        assert_eq!(result.overall_level, Level::Advanced);
    }

    #[test]
    fn test_categories_grouped_in_first_appearance_order() {
        let bank = bank(&["Leadership", "Communication", "Leadership", "Communication", "Leadership"]);
        let result = AssessmentResult::score(&bank, &[0, 3, 2, 2, 1]).unwrap();

        let names: Vec<_> = result.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["Leadership", "Communication"]);

        let leadership = &result.categories[0];
        assert_eq!(leadership.questions, 3);
        assert_eq!(leadership.points, 3);
        assert_eq!(leadership.score, 33);

        let communication = &result.categories[1];
        assert_eq!(communication.points, 5);
        assert_eq!(communication.score, 83);
        assert_eq!(communication.level, Level::Expert);
    }

    #[test]
    fn test_all_zero_answers() {
        let bank = bank(&["Leadership", "Communication"]);
        let result = AssessmentResult::score(&bank, &[0, 0]).unwrap();
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.overall_level, Level::Beginner);
        assert!(result.categories.iter().all(|c| c.score == 0));
    }

    #[test]
    fn test_scores_stay_in_range() {
        let bank = bank(&["A", "B", "A", "C", "B", "A"]);
        for answer in 0..=3u8 {
            let answers = vec![answer; bank.len()];
            let result = AssessmentResult::score(&bank, &answers).unwrap();
            assert!(result.overall_score <= 100);
            assert!(result.categories.iter().all(|c| c.score <= 100));
        }
    }

    #[test]
    fn test_focus_areas_weakest_first() {
        let bank = bank(&["Technical Skills", "Leadership", "Problem Solving", "Communication"]);
        let result = AssessmentResult::score(&bank, &[3, 1, 0, 2]).unwrap();

        let focus: Vec<_> = result.focus_areas().iter().map(|c| c.category.as_str()).collect();
        assert_eq!(focus, vec!["Problem Solving", "Leadership"]);
    }

    #[test]
    fn test_too_few_answers_rejected() {
        let bank = bank(&["Leadership", "Communication"]);
        assert_eq!(AssessmentResult::score(&bank, &[3]), Err(AssessmentError::NotComplete));
        assert_eq!(AssessmentResult::score(&bank, &[3, 3, 3]), Err(AssessmentError::NotComplete));
    }

    #[test]
    fn test_out_of_range_answer_rejected() {
        let bank = bank(&["Leadership", "Communication"]);
        assert_eq!(
            AssessmentResult::score(&bank, &[9, 9]),
            Err(AssessmentError::InvalidOption { option: 9, option_count: 4 })
        );
    }

    #[test]
    fn test_result_serializes() {
        let bank = bank(&["Leadership"]);
        let result = AssessmentResult::score(&bank, &[2]).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overall_score"], 67);
        assert_eq!(json["overall_level"], "Advanced");
        assert_eq!(json["categories"][0]["category"], "Leadership");
    }
}
