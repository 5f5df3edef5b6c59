#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::question::{Question, QuizSet};

    /// Raw model output that honors the generation convention exactly.
    pub const WELL_FORMED_RAW_QUIZ: &str = "\
Q1: What is the capital of France?
A. London
B. Paris <-- correct
C. Berlin
D. Madrid
Q2: What is 2 + 2?
A. 3
B. 4 <-- correct
C. 5
D. 6
Q3: What is the time complexity of a linear scan?
A. O(1)
B. O(n log n)
C. O(n) <-- correct
D. O(n^2)
";

    /// Output with only two parseable blocks, below the minimum of three.
    pub const TWO_BLOCK_RAW_QUIZ: &str = "\
Q1: What is 2 + 2?
A. 3
B. 4 <-- correct
C. 5
D. 6
Q2: What is 3 + 3?
A. 5
B. 6 <-- correct
C. 7
D. 8
";

    /// The three-question quiz from the scoring scenario: correct answers
    /// Paris / 42 / O(n).
    pub fn scoring_quiz() -> QuizSet {
        QuizSet::new(vec![
            Question::new(
                "What is the capital of France?".to_string(),
                vec!["London".into(), "Paris".into(), "Berlin".into(), "Madrid".into()],
                "Paris".to_string(),
            )
            .expect("fixture question is valid"),
            Question::new(
                "What is the answer to everything?".to_string(),
                vec!["7".into(), "42".into(), "13".into(), "0".into()],
                "42".to_string(),
            )
            .expect("fixture question is valid"),
            Question::new(
                "What is the complexity of a linear scan?".to_string(),
                vec!["O(1)".into(), "O(n)".into(), "O(n^2)".into(), "O(log n)".into()],
                "O(n)".to_string(),
            )
            .expect("fixture question is valid"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_parser::parse_quiz;

    #[test]
    fn test_fixture_raw_quiz_parses() {
        let quiz = parse_quiz(WELL_FORMED_RAW_QUIZ).expect("fixture should parse");
        assert_eq!(quiz.len(), 3);
    }

    #[test]
    fn test_fixture_two_blocks_fail() {
        assert!(parse_quiz(TWO_BLOCK_RAW_QUIZ).is_err());
    }

    #[test]
    fn test_fixture_scoring_quiz() {
        let quiz = scoring_quiz();
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.get(1).unwrap().correct_option(), "42");
    }
}
