//! Word-level AI highlighting for the result screen.

use std::collections::HashSet;

/// One rendered word and whether it was flagged as AI-generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub ai: bool,
}

impl Word {
    pub fn class(&self) -> &'static str {
        if self.ai { "ai-text" } else { "human-text" }
    }
}

/// Split `content` on single spaces and flag the words at `ai_parts`.
///
/// Returns `None` when either input is missing, which the result screen
/// shows as "No content to analyze". Indices past the end are ignored.
pub fn segment(content: Option<&str>, ai_parts: Option<&[usize]>) -> Option<Vec<Word>> {
    let content = content?;
    let flagged: HashSet<usize> = ai_parts?.iter().copied().collect();
    Some(
        content
            .split(' ')
            .enumerate()
            .map(|(i, text)| Word { text: text.to_owned(), ai: flagged.contains(&i) })
            .collect(),
    )
}
