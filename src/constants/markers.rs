//! Section labels shared by the prompt builder and the parser. A prompt asks
//! the model to emit exactly these, and the parser slices on exactly these.

pub const QUESTION: &str = "QUESTION:";
pub const QUIZ_OPTION_A: &str = "OPTION A:";
pub const QUIZ_OPTION_B: &str = "OPTION B:";
pub const QUIZ_OPTION_C: &str = "OPTION C:";
pub const QUIZ_OPTION_D: &str = "OPTION D:";
pub const ANSWER: &str = "ANS:";

pub const QUIZ_OPTIONS: [&str; 4] = [QUIZ_OPTION_A, QUIZ_OPTION_B, QUIZ_OPTION_C, QUIZ_OPTION_D];

pub const STORY: &str = "STORY:";
pub const STORY_OPTION_A: &str = "OPTION_A:";
pub const STORY_OPTION_B: &str = "OPTION_B:";
pub const STORY_OPTION_C: &str = "OPTION_C:";

pub const STORY_OPTIONS: [&str; 3] = [STORY_OPTION_A, STORY_OPTION_B, STORY_OPTION_C];

// Context labels that prefix caller-supplied values in story and reasoning prompts.
pub const GENRE: &str = "GENRE:";
pub const SUBGENRE: &str = "SUBGENRE:";
pub const PREMISE: &str = "PREMISE:";
pub const STORY_SO_FAR: &str = "STORY_SO_FAR:";
pub const USER_SELECTED_OPTION: &str = "USER_SELECTED_OPTION:";
pub const CORRECT_ANSWER: &str = "CORRECT ANSWER:";
pub const INCORRECT_ANSWER: &str = "INCORRECT ANSWER:";
