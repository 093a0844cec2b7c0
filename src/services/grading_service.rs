use crate::models::domain::QuizQuestion;

/// Counts positions where the submitted answer equals the correct letter.
///
/// Questions and answers are paired by index and the shorter side wins, so
/// extra answers are ignored and missing answers score nothing.
pub fn score_answers(questions: &[QuizQuestion], selected_answers: &[String]) -> u32 {
    questions
        .iter()
        .zip(selected_answers)
        .filter(|(question, answer)| question.is_answered_by(answer))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{answers, sample_questions};

    #[test]
    fn scores_positional_matches() {
        // sample_questions answers are A, B, C
        let questions = sample_questions();

        assert_eq!(score_answers(&questions, &answers(&["A", "B", "C"])), 3);
        assert_eq!(score_answers(&questions, &answers(&["A", "X", "C"])), 2);
        assert_eq!(score_answers(&questions, &answers(&["D", "D", "D"])), 0);
    }

    #[test]
    fn comparison_is_exact() {
        let questions = sample_questions();

        assert_eq!(score_answers(&questions, &answers(&["a", " B", "C "])), 0);
    }

    #[test]
    fn shorter_side_wins() {
        let questions = sample_questions();

        assert_eq!(score_answers(&questions, &answers(&["A"])), 1);
        assert_eq!(score_answers(&questions, &answers(&["A", "B", "C", "D", "A"])), 3);
        assert_eq!(score_answers(&questions, &[]), 0);
        assert_eq!(score_answers(&[], &answers(&["A"])), 0);
    }
}
