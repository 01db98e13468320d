use super::domain::Category::{Airy, Aquatic, Earthly, Electric, Fiery, Metallic};
use super::domain::Dimension::{Behavior, Cognitive, Energy, Motivation, Social, Values};
use super::domain::{Category, Dimension, Question};
use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

/// Number of main (non-validation) questions.
pub const MAIN_QUESTION_COUNT: u32 = 36;
/// Main questions attributed to each category.
pub const QUESTIONS_PER_CATEGORY: usize = 6;
/// Validation question ids start here; main ids never reach it.
pub const VALIDATION_ID_FLOOR: u32 = 100;

/// Immutable question catalogue shared by every scoring call.
#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds the standard bank and checks its integrity.
    pub fn load() -> Result<Self, BankIntegrityError> {
        Self::from_questions(STANDARD_QUESTIONS.to_vec())
    }

    /// Process-wide bank, initialized on first use.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in question data violates its integrity contract.
    /// Binaries call [`QuestionBank::load`] at startup to surface the failure
    /// before serving traffic.
    pub fn global() -> &'static Self {
        static BANK: OnceLock<QuestionBank> = OnceLock::new();
        BANK.get_or_init(|| {
            Self::load().unwrap_or_else(|err| panic!("question bank integrity fault: {err}"))
        })
    }

    pub fn from_questions(questions: Vec<Question>) -> Result<Self, BankIntegrityError> {
        check_integrity(&questions)?;
        Ok(Self { questions })
    }

    /// Main questions in id order, followed by the validation questions when requested.
    pub fn all_questions(&self, include_validation: bool) -> Vec<&Question> {
        let mut main: Vec<&Question> = self
            .questions
            .iter()
            .filter(|question| is_main_id(question.id))
            .collect();
        main.sort_by_key(|question| question.id);

        if include_validation {
            let mut validation: Vec<&Question> = self
                .questions
                .iter()
                .filter(|question| !is_main_id(question.id))
                .collect();
            validation.sort_by_key(|question| question.id);
            main.extend(validation);
        }

        main
    }

    /// The six main questions for a category.
    pub fn questions_for_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category && is_main_id(question.id))
            .collect()
    }

    pub fn question(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    pub fn category_of(&self, question_id: u32) -> Option<Category> {
        self.question(question_id).map(|question| question.category)
    }

    pub fn validation_questions(&self) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| !is_main_id(question.id))
            .collect()
    }

    pub fn validation_question_for(&self, category: Category) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.category == category && !is_main_id(question.id))
    }

    pub fn main_ids(&self) -> impl Iterator<Item = u32> {
        1..=MAIN_QUESTION_COUNT
    }
}

pub const fn is_main_id(question_id: u32) -> bool {
    question_id >= 1 && question_id <= MAIN_QUESTION_COUNT
}

/// Data-integrity failure in the compiled-in question set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BankIntegrityError {
    #[error("question id {0} is defined more than once")]
    DuplicateId(u32),
    #[error("question id {0} is neither a main id (1..=36) nor a validation id (>= 100)")]
    StrayId(u32),
    #[error("expected 36 main questions, found {0}")]
    MainQuestionCount(usize),
    #[error("main question {0} must not be reverse-scored")]
    ReversedMainQuestion(u32),
    #[error("{category} has {count} main questions, expected 6")]
    CategoryCount { category: Category, count: usize },
    #[error("{category} has {count} validation questions, expected exactly one")]
    ValidationCount { category: Category, count: usize },
    #[error("validation question {0} must be reverse-scored")]
    ForwardValidationQuestion(u32),
}

fn check_integrity(questions: &[Question]) -> Result<(), BankIntegrityError> {
    let mut seen = HashSet::new();
    for question in questions {
        if !seen.insert(question.id) {
            return Err(BankIntegrityError::DuplicateId(question.id));
        }
        if !is_main_id(question.id) && question.id < VALIDATION_ID_FLOOR {
            return Err(BankIntegrityError::StrayId(question.id));
        }
    }

    let main: Vec<&Question> = questions
        .iter()
        .filter(|question| is_main_id(question.id))
        .collect();
    // Ids are unique and bounded to 1..=36, so the count alone proves contiguity.
    if main.len() != MAIN_QUESTION_COUNT as usize {
        return Err(BankIntegrityError::MainQuestionCount(main.len()));
    }
    if let Some(question) = main.iter().find(|question| question.reversed) {
        return Err(BankIntegrityError::ReversedMainQuestion(question.id));
    }

    let mut main_counts: BTreeMap<Category, usize> = BTreeMap::new();
    let mut validation_counts: BTreeMap<Category, usize> = BTreeMap::new();
    for question in questions {
        if is_main_id(question.id) {
            *main_counts.entry(question.category).or_default() += 1;
        } else {
            if !question.reversed {
                return Err(BankIntegrityError::ForwardValidationQuestion(question.id));
            }
            *validation_counts.entry(question.category).or_default() += 1;
        }
    }

    for category in Category::ordered() {
        let count = main_counts.get(&category).copied().unwrap_or(0);
        if count != QUESTIONS_PER_CATEGORY {
            return Err(BankIntegrityError::CategoryCount { category, count });
        }
        let count = validation_counts.get(&category).copied().unwrap_or(0);
        if count != 1 {
            return Err(BankIntegrityError::ValidationCount { category, count });
        }
    }

    Ok(())
}

const fn item(id: u32, category: Category, dimension: Dimension, text: &'static str) -> Question {
    Question {
        id,
        text,
        category,
        reversed: false,
        dimension,
    }
}

const fn validation(id: u32, category: Category, text: &'static str) -> Question {
    Question {
        id,
        text,
        category,
        reversed: true,
        dimension: Dimension::ShadowValidation,
    }
}

// Main questions are interleaved: question `i` belongs to `Category::ordered()[(i - 1) % 6]`.
static STANDARD_QUESTIONS: [Question; 42] = [
    item(
        1,
        Electric,
        Motivation,
        "I am driven by the thrill of trying something I have never done before.",
    ),
    item(
        2,
        Fiery,
        Motivation,
        "Winning, or at least pushing hard toward a goal, is what gets me out of bed.",
    ),
    item(3, Aquatic, Motivation, "I feel most motivated when my work helps someone I care about."),
    item(
        4,
        Earthly,
        Motivation,
        "Building something lasting matters more to me than quick results.",
    ),
    item(5, Airy, Motivation, "Freedom to follow my curiosity is my biggest motivator."),
    item(
        6,
        Metallic,
        Motivation,
        "I am motivated by doing a job precisely and to a high standard.",
    ),
    item(7, Electric, Energy, "My energy comes in intense bursts rather than a steady flow."),
    item(
        8,
        Fiery,
        Energy,
        "I can sustain high intensity for long stretches when something matters to me.",
    ),
    item(9, Aquatic, Energy, "My energy rises and falls with the moods of the people around me."),
    item(10, Earthly, Energy, "I keep a consistent pace and rarely run out of steam."),
    item(11, Airy, Energy, "Fresh ideas and new conversations recharge me quickly."),
    item(12, Metallic, Energy, "I conserve my energy for the tasks that truly deserve it."),
    item(13, Electric, Social, "I light up a room and enjoy stirring up excitement in a group."),
    item(14, Fiery, Social, "I naturally take charge when a group needs direction."),
    item(
        15,
        Aquatic,
        Social,
        "People often come to me when they need to talk about their feelings.",
    ),
    item(
        16,
        Earthly,
        Social,
        "I am the dependable one friends call when they need practical help.",
    ),
    item(
        17,
        Airy,
        Social,
        "I enjoy meeting many different people, even if I do not get close to all of them.",
    ),
    item(
        18,
        Metallic,
        Social,
        "I prefer a few well-defined relationships with clear expectations.",
    ),
    item(19, Electric, Cognitive, "My mind jumps quickly between ideas and connections."),
    item(20, Fiery, Cognitive, "I make decisions fast and commit to them fully."),
    item(21, Aquatic, Cognitive, "I trust my gut feelings when making important choices."),
    item(22, Earthly, Cognitive, "I rely on proven methods and past experience to solve problems."),
    item(23, Airy, Cognitive, "I love exploring abstract concepts and big-picture theories."),
    item(24, Metallic, Cognitive, "I analyze details carefully before reaching a conclusion."),
    item(25, Electric, Values, "Innovation and change are more important to me than tradition."),
    item(26, Fiery, Values, "Courage and standing up for what I believe in define who I am."),
    item(27, Aquatic, Values, "Harmony and emotional honesty are among my core values."),
    item(28, Earthly, Values, "Loyalty, security, and commitment matter deeply to me."),
    item(29, Airy, Values, "I value independence and open-mindedness above conformity."),
    item(30, Metallic, Values, "Integrity, fairness, and clear principles guide my actions."),
    item(31, Electric, Behavior, "I often start new projects before finishing the old ones."),
    item(
        32,
        Fiery,
        Behavior,
        "When I am passionate about something, I push through obstacles without hesitation.",
    ),
    item(33, Aquatic, Behavior, "I adapt my behavior to keep the emotional atmosphere calm."),
    item(34, Earthly, Behavior, "I stick to routines because they help me feel grounded."),
    item(35, Airy, Behavior, "I change plans easily when something more interesting comes along."),
    item(36, Metallic, Behavior, "I keep my spaces, schedules, and commitments highly organized."),
    validation(101, Electric, "I prefer long stretches of quiet with very little stimulation."),
    validation(102, Fiery, "I usually let others lead and rarely feel strongly about outcomes."),
    validation(103, Aquatic, "Other people's emotions rarely affect me."),
    validation(104, Earthly, "I get bored quickly with routines and stable commitments."),
    validation(105, Airy, "I prefer to stay with familiar ideas rather than explore new ones."),
    validation(
        106,
        Metallic,
        "I am comfortable leaving details loose and work in an unstructured way.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Vec<Question> {
        STANDARD_QUESTIONS.to_vec()
    }

    #[test]
    fn standard_bank_passes_integrity_checks() {
        let bank = QuestionBank::load().expect("standard bank is consistent");
        assert_eq!(bank.all_questions(false).len(), 36);
        assert_eq!(bank.all_questions(true).len(), 42);
        for category in Category::ordered() {
            assert_eq!(bank.questions_for_category(category).len(), 6);
            let check = bank
                .validation_question_for(category)
                .expect("validation question present");
            assert!(check.reversed);
            assert!(check.id >= VALIDATION_ID_FLOOR);
        }
    }

    #[test]
    fn main_questions_are_interleaved_by_category() {
        let bank = QuestionBank::global();
        for question in bank.all_questions(false) {
            let expected = Category::ordered()[((question.id - 1) % 6) as usize];
            assert_eq!(question.category, expected, "question {}", question.id);
        }
    }

    #[test]
    fn lookups_return_none_for_unknown_ids() {
        let bank = QuestionBank::global();
        assert_eq!(bank.category_of(0), None);
        assert_eq!(bank.category_of(37), None);
        assert_eq!(bank.category_of(999), None);
        assert_eq!(bank.category_of(104), Some(Category::Earthly));
    }

    #[test]
    fn detects_duplicate_ids() {
        let mut questions = standard();
        questions[1].id = 1;
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::DuplicateId(1)
        );
    }

    #[test]
    fn detects_ids_in_the_gap() {
        let mut questions = standard();
        questions[36].id = 50;
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::StrayId(50)
        );
    }

    #[test]
    fn detects_unbalanced_categories() {
        let mut questions = standard();
        questions[0].category = Category::Fiery;
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::CategoryCount {
                category: Category::Electric,
                count: 5
            }
        );
    }

    #[test]
    fn detects_missing_validation_question() {
        let mut questions = standard();
        questions.pop();
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::ValidationCount {
                category: Category::Metallic,
                count: 0
            }
        );
    }

    #[test]
    fn detects_forward_scored_validation_question() {
        let mut questions = standard();
        questions[40].reversed = false;
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::ForwardValidationQuestion(105)
        );
    }

    #[test]
    fn detects_missing_main_question() {
        let mut questions = standard();
        questions.remove(35);
        assert_eq!(
            QuestionBank::from_questions(questions).unwrap_err(),
            BankIntegrityError::MainQuestionCount(35)
        );
    }
}
