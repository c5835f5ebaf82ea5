//! Local reply generation.
//!
//! Replies come from fixed templates and a tiny glossary; nothing here
//! calls out to a model. Mode decoration is applied afterwards by
//! [`crate::tone::wrap`].

use blueflame_core::types::{Language, Mode};

/// Summaries keep at most this many words.
pub const SUMMARY_WORD_LIMIT: usize = 40;

/// Writing drafts title themselves with this many leading characters.
pub const WRITING_TITLE_CHARS: usize = 60;

const ELLIPSIS: &str = "…";

/// Glossary backing translation mode: lower-cased phrase, then per-language text.
const GLOSSARY: &[(&str, &[(Language, &str)])] = &[
    ("hello", &[(Language::Ur, "سلام"), (Language::Hi, "नमस्ते")]),
    (
        "how are you",
        &[(Language::Ur, "آپ کیسے ہیں"), (Language::Hi, "आप कैसे हैं")],
    ),
];

/// Maps a prompt to reply text according to its mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyGenerator;

impl ReplyGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the undecorated reply for `prompt`.
    ///
    /// Total over every input: empty prompts render the templates with
    /// empty text.
    pub fn generate(&self, prompt: &str, mode: Mode, language: Language) -> String {
        let base = prompt.trim();
        match mode {
            Mode::Translation => translate(base, language),
            Mode::Summary => summarize(base),
            Mode::Writing => draft(base),
            Mode::Qa | Mode::Student | Mode::Professional | Mode::Fun => answer(base),
        }
    }
}

fn translate(base: &str, language: Language) -> String {
    let key = base.to_lowercase();
    let text = GLOSSARY
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .and_then(|(_, entries)| entries.iter().find(|(lang, _)| *lang == language))
        .map(|(_, text)| *text)
        .unwrap_or(base);
    format!("Translation ({}): {}", language, text)
}

fn summarize(base: &str) -> String {
    let words: Vec<&str> = base.split_whitespace().collect();
    if words.len() > SUMMARY_WORD_LIMIT {
        format!("Summary: {}{}", words[..SUMMARY_WORD_LIMIT].join(" "), ELLIPSIS)
    } else {
        format!("Summary: {}", base)
    }
}

fn draft(base: &str) -> String {
    let title: String = base.chars().take(WRITING_TITLE_CHARS).collect();
    format!(
        "Here is a polished draft based on your request:\n\n\
         Title: {}\n\n\
         Paragraph 1: A clear introduction that frames the goal and context.\n\n\
         Paragraph 2: Key insights, structure, and supporting details with a smooth narrative.\n\n\
         Paragraph 3: A succinct wrap‑up with next steps and a strong closing.",
        title
    )
}

fn answer(base: &str) -> String {
    format!(
        "Answer: {}\n\nKey points:\n- Direct answer\n- Extra context\n- Practical tip",
        base
    )
}
