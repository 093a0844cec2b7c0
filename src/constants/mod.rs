pub mod interests;
pub mod markers;
pub mod prompts;
