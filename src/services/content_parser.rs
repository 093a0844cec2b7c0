//! Marker-based slicing of generated text into typed records.
//!
//! Neither parser fails. Text that does not follow the marker grammar yields
//! an empty result and the caller decides what that means.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::markers,
    models::domain::{AnswerLetter, QuizQuestion, StorySegment},
};

// First letter after `ANS:`, optionally bracketed, as a standalone word.
static ANSWER_LETTER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[\[(]?([A-Da-d])\b").expect("ANSWER_LETTER_REGEX is a valid regex pattern")
});

/// Extracts every complete question block, in source order.
///
/// A block runs from one `QUESTION:` to the next and must contain
/// `OPTION A:` through `OPTION D:` and then `ANS:`, in that order. Blocks with
/// a missing or out-of-order marker, blank fields, or an answer that is not
/// A-D are dropped.
pub fn parse_quiz(raw: &str) -> Vec<QuizQuestion> {
    raw.split(markers::QUESTION)
        .skip(1)
        .filter_map(parse_question_block)
        .collect()
}

fn parse_question_block(block: &str) -> Option<QuizQuestion> {
    let mut rest = block;
    let mut fields: [&str; 5] = [""; 5];

    for (slot, marker) in markers::QUIZ_OPTIONS
        .into_iter()
        .chain([markers::ANSWER])
        .enumerate()
    {
        let (before, after) = rest.split_once(marker)?;
        fields[slot] = before.trim();
        rest = after;
    }

    let [text, option_a, option_b, option_c, option_d] = fields;
    if fields.iter().any(|field| field.is_empty()) {
        return None;
    }

    let captures = ANSWER_LETTER_REGEX.captures(rest)?;
    let correct_answer = captures[1].chars().next().and_then(AnswerLetter::from_char)?;

    Some(QuizQuestion::new(
        text,
        [option_a, option_b, option_c, option_d],
        correct_answer,
    ))
}

/// Splits a story reply into narrative text and its options.
///
/// After `STORY:` the reply must carry `OPTION_A:` then `OPTION_B:`, with an
/// optional `OPTION_C:` after those. `story_text` is everything before
/// `OPTION_A:`; each option runs until the next marker or the end of the
/// text. A missing `STORY:`, `OPTION_A:` or `OPTION_B:` (or one out of order)
/// leaves `options` empty.
pub fn parse_story(raw: &str) -> StorySegment {
    let Some((_, body)) = raw.split_once(markers::STORY) else {
        return StorySegment::default();
    };

    let Some(a) = find_marker(body, 0, markers::STORY_OPTION_A) else {
        return StorySegment {
            story_text: body.trim().to_string(),
            options: Vec::new(),
        };
    };
    let story_text = body[..a.0].trim().to_string();

    let Some(b) = find_marker(body, a.1, markers::STORY_OPTION_B) else {
        return StorySegment {
            story_text,
            options: Vec::new(),
        };
    };

    // (marker start, content start) per matched option marker
    let mut bounds = vec![a, b];
    bounds.extend(find_marker(body, b.1, markers::STORY_OPTION_C));

    let options = bounds
        .iter()
        .enumerate()
        .map(|(i, &(_, content_start))| {
            let end = bounds.get(i + 1).map_or(body.len(), |&(next, _)| next);
            body[content_start..end].trim()
        })
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect();

    StorySegment {
        story_text,
        options,
    }
}

fn find_marker(body: &str, from: usize, marker: &str) -> Option<(usize, usize)> {
    body[from..].find(marker).map(|offset| {
        let start = from + offset;
        (start, start + marker.len())
    })
}
