use serde::Serialize;

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One validated multiple-choice item. Construction enforces the invariants
/// (exactly four distinct options, correct answer among them) and the fields
/// are private, so a `Question` can never be observed in a broken state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: String,
}

impl Question {
    /// Returns `None` when the invariants do not hold; the parser treats that
    /// as "drop the block".
    pub fn new(prompt: String, options: Vec<String>, correct_option: String) -> Option<Self> {
        if prompt.trim().is_empty() || options.len() != OPTIONS_PER_QUESTION {
            return None;
        }
        let distinct = options
            .iter()
            .all(|opt| options.iter().filter(|o| *o == opt).count() == 1);
        if !distinct || !options.contains(&correct_option) {
            return None;
        }
        Some(Self {
            prompt,
            options,
            correct_option,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    pub fn has_option(&self, text: &str) -> bool {
        self.options.iter().any(|o| o == text)
    }
}

/// Ordered collection of questions for one quiz attempt. The parser only ever
/// produces sets with at least three questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizSet {
    questions: Vec<Question>,
}

impl QuizSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}
