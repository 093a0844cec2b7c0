#[cfg(test)]
pub mod fixtures {
    use mongodb::bson::oid::ObjectId;

    use crate::{
        models::domain::{AnswerLetter, Quiz, QuizQuestion, World},
        services::grading_service::score_answers,
    };

    pub fn sample_world() -> World {
        World {
            genre: "Fantasy".to_string(),
            subgenre: "High Fantasy".to_string(),
            premise: "A farmhand finds a talking sword".to_string(),
        }
    }

    /// One question block in the marker format a model is asked to produce.
    pub fn quiz_block(question: &str, options: [&str; 4], answer: &str) -> String {
        format!(
            "QUESTION: {}\nOPTION A: {}\nOPTION B: {}\nOPTION C: {}\nOPTION D: {}\nANS: {}\n",
            question, options[0], options[1], options[2], options[3], answer
        )
    }

    /// Three questions whose correct letters are A, B and C.
    pub fn sample_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion::new(
                "Which structure is LIFO?",
                ["Stack", "Queue", "Heap", "Graph"],
                AnswerLetter::A,
            ),
            QuizQuestion::new(
                "What is the time complexity of binary search?",
                ["O(n)", "O(log n)", "O(n log n)", "O(1)"],
                AnswerLetter::B,
            ),
            QuizQuestion::new(
                "Which traversal visits the root between its subtrees?",
                ["Preorder", "Postorder", "Inorder", "Level order"],
                AnswerLetter::C,
            ),
        ]
    }

    pub fn answers(letters: &[&str]) -> Vec<String> {
        letters.iter().map(|letter| letter.to_string()).collect()
    }

    /// A submitted quiz over `sample_questions`, graded the normal way.
    pub fn completed_quiz(user_id: ObjectId, topic: &str, selected: &[&str]) -> Quiz {
        let mut quiz = Quiz::new_pending(user_id, topic, sample_questions());
        quiz.id = Some(ObjectId::new());
        quiz.selected_answers = answers(selected);
        quiz.score = score_answers(&quiz.questions, &quiz.selected_answers);
        quiz.complete = true;
        quiz
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_completed_quiz_is_graded() {
        let quiz = completed_quiz(mongodb::bson::oid::ObjectId::new(), "Algorithms", &["A", "X", "C"]);

        assert!(quiz.complete);
        assert_eq!(quiz.score, 2);
        assert_eq!(quiz.selected_answers, vec!["A", "X", "C"]);
    }

    #[test]
    fn test_fixtures_quiz_block_uses_markers() {
        let block = quiz_block("Q?", ["a", "b", "c", "d"], "D");

        assert!(block.starts_with("QUESTION: Q?\nOPTION A: a\n"));
        assert!(block.ends_with("ANS: D\n"));
    }
}
