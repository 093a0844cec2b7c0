pub mod quiz;
pub mod quiz_question;
pub mod story;
pub mod user;
pub use quiz::Quiz;
pub use quiz_question::{AnswerLetter, QuizQuestion};
pub use story::{StorySegment, World};
pub use user::User;
