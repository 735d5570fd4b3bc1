//! Parsers for the semi-structured completions the model sends back.
//!
//! Model output is not trusted to match the requested shape: the quiz array
//! may be wrapped in prose or code fences, the video script may number its
//! frames inconsistently or produce the wrong count. Parse failures are
//! values, not panics, and the same input always parses to the same output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::models::domain::quiz::{QuizItem, QUIZ_OPTION_COUNT};
use crate::models::domain::video_script::{VideoScript, EXPLANATION_MARKER, FRAMES_MARKER};

// Greedy first-`[`-to-last-`]` span, across newlines, so prose or fences
// around the array are ignored.
static JSON_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("array pattern is valid"));

// Leading enumeration prefix on a frame line, e.g. "1. " or "2) ".
static FRAME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*[.)]\s*").expect("prefix pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizParseError {
    #[error("completion does not contain a valid question array: {0}")]
    InvalidJson(String),

    #[error("question {index} is missing the `{field}` field")]
    MissingField { index: usize, field: &'static str },

    #[error("question {index} has {count} options, expected 4")]
    WrongOptionCount { index: usize, count: usize },

    #[error("question {index} has an answer that is not one of its options")]
    AnswerNotInOptions { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoParseError {
    #[error("completion has no FRAMES: section")]
    MissingFramesSection,
}

// Field-level absence must be reported per question, so every field is
// optional here and checked explicitly below.
#[derive(Debug, Deserialize)]
struct RawQuizItem {
    question: Option<String>,
    options: Option<Vec<String>>,
    answer: Option<String>,
}

/// Extract a quiz from a raw completion.
///
/// Takes the greedy bracket span when one exists, otherwise the whole text,
/// and parses it as a JSON array. Each item must carry `question`, `options`
/// (exactly 4) and `answer` (one of the options). Item ids are rewritten
/// 1-based sequential; the model's own numbering is not trusted.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizItem>, QuizParseError> {
    let span = JSON_ARRAY
        .find(raw)
        .map(|found| found.as_str())
        .unwrap_or(raw);

    let raw_items: Vec<RawQuizItem> =
        serde_json::from_str(span).map_err(|err| QuizParseError::InvalidJson(err.to_string()))?;

    let mut items = Vec::with_capacity(raw_items.len());
    for (position, raw_item) in raw_items.into_iter().enumerate() {
        let index = position + 1;

        let question = raw_item.question.ok_or(QuizParseError::MissingField {
            index,
            field: "question",
        })?;
        let options = raw_item.options.ok_or(QuizParseError::MissingField {
            index,
            field: "options",
        })?;
        let answer = raw_item.answer.ok_or(QuizParseError::MissingField {
            index,
            field: "answer",
        })?;

        if options.len() != QUIZ_OPTION_COUNT {
            return Err(QuizParseError::WrongOptionCount {
                index,
                count: options.len(),
            });
        }
        if !options.contains(&answer) {
            return Err(QuizParseError::AnswerNotInOptions { index });
        }

        items.push(QuizItem {
            id: index as u32,
            question,
            options,
            answer,
        });
    }

    Ok(items)
}

/// Split a raw completion into explanation and frame descriptions.
///
/// Everything before the `FRAMES:` marker, minus an optional `EXPLANATION:`
/// label, is the explanation. Each non-blank line after the marker becomes a
/// frame after its enumeration prefix is stripped; lines repeating the marker
/// are discarded. Any frame count is accepted.
pub fn parse_video_script(raw: &str) -> Result<VideoScript, VideoParseError> {
    let (head, tail) = raw
        .split_once(FRAMES_MARKER)
        .ok_or(VideoParseError::MissingFramesSection)?;

    let head = head.trim();
    let explanation = head
        .strip_prefix(EXPLANATION_MARKER)
        .unwrap_or(head)
        .trim()
        .to_string();

    let frames = tail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(FRAMES_MARKER))
        .map(|line| FRAME_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(VideoScript {
        explanation,
        frames,
    })
}
