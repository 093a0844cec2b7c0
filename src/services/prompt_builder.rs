//! Renders generation requests into the instruction text a backend expects.
//!
//! Caller-supplied values (topics, story text, user choices) are embedded
//! verbatim. Nothing is escaped, so a user who controls an interest label or a
//! story choice can steer the model.

use crate::{
    constants::{markers, prompts},
    models::domain::World,
};

/// Chat framing understood by a backend family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptDialect {
    /// `[INST] ... [/INST]` framing used by the hosted Llama 2 chat session.
    Instruct,
    /// Llama 3 header-token framing used by the local completion server.
    HeaderTokens,
}

#[derive(Clone, Copy, Debug)]
pub enum PromptRequest<'a> {
    Quiz {
        topic: &'a str,
    },
    StoryBegin {
        world: &'a World,
    },
    StoryContinue {
        world: &'a World,
        story_so_far: &'a str,
        user_choice: &'a str,
    },
    Reasoning {
        question: &'a str,
        correct_answer: &'a str,
        incorrect_answer: &'a str,
    },
}

impl PromptRequest<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            PromptRequest::Quiz { .. } => "quiz",
            PromptRequest::StoryBegin { .. } => "story_begin",
            PromptRequest::StoryContinue { .. } => "story_continue",
            PromptRequest::Reasoning { .. } => "reasoning",
        }
    }
}

pub fn build_prompt(dialect: PromptDialect, request: &PromptRequest<'_>) -> String {
    let (context, body) = match request {
        PromptRequest::Quiz { topic } => (String::new(), quiz_body(topic)),
        PromptRequest::StoryBegin { world } => (
            world_context(world),
            story_body(prompts::STORY_BEGIN_INSTRUCTIONS),
        ),
        PromptRequest::StoryContinue {
            world,
            story_so_far,
            user_choice,
        } => (
            format!(
                "{} {}\n{} {}\n{}",
                markers::STORY_SO_FAR,
                story_so_far,
                markers::USER_SELECTED_OPTION,
                user_choice,
                world_context(world)
            ),
            story_body(prompts::STORY_CONTINUE_INSTRUCTIONS),
        ),
        PromptRequest::Reasoning {
            question,
            correct_answer,
            incorrect_answer,
        } => (
            String::new(),
            format!(
                "{}{} {}\n{} {}\n{} {}\n",
                prompts::REASONING_INSTRUCTIONS,
                markers::QUESTION,
                question,
                markers::CORRECT_ANSWER,
                correct_answer,
                markers::INCORRECT_ANSWER,
                incorrect_answer
            ),
        ),
    };

    match dialect {
        PromptDialect::Instruct => format!(
            "{}{}{}{}",
            context,
            prompts::INSTRUCT_OPEN,
            body,
            prompts::INSTRUCT_CLOSE
        ),
        PromptDialect::HeaderTokens => format!(
            "{}{}{}{}{}{}",
            prompts::SYSTEM_HEADER,
            context,
            prompts::INSTRUCTIONS_LABEL,
            body.trim_end(),
            prompts::END_OF_TURN,
            prompts::ASSISTANT_HEADER
        ),
    }
}

fn quiz_body(topic: &str) -> String {
    format!(
        "{}{} [Your question here]?\n{} [First option]\n{} [Second option]\n{} [Third option]\n{} [Fourth option]\n{} [Correct answer letter]\n\n{}Here is the student topic:\n{}",
        prompts::QUIZ_INSTRUCTIONS,
        markers::QUESTION,
        markers::QUIZ_OPTION_A,
        markers::QUIZ_OPTION_B,
        markers::QUIZ_OPTION_C,
        markers::QUIZ_OPTION_D,
        markers::ANSWER,
        prompts::QUIZ_FORMAT_RULES,
        topic
    )
}

fn story_body(stage_instructions: &str) -> String {
    format!(
        "{}{}{}{} [generated story text]\n{} [generated option A]\n{} [generated option B]\n{} [generated option C]\n",
        prompts::STORY_ROLE,
        stage_instructions,
        prompts::STORY_OPTION_RULES,
        markers::STORY,
        markers::STORY_OPTION_A,
        markers::STORY_OPTION_B,
        markers::STORY_OPTION_C
    )
}

fn world_context(world: &World) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n",
        markers::GENRE,
        world.genre,
        markers::SUBGENRE,
        world.subgenre,
        markers::PREMISE,
        world.premise
    )
}
