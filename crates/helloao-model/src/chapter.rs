use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::catalog::TranslationRecord;

/// One chapter of one translation, as served at
/// `/api/{translation}/{book}/{chapter}.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterResponse {
    pub translation: TranslationRecord,
    pub book: BookInfo,
    pub chapter: ChapterBody,
}

/// The subset of book metadata used for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfo {
    /// USFM-style book code (e.g., "EXO").
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterBody {
    pub number: u32,
    pub content: Vec<ChapterContent>,
}

/// A block of chapter content, tagged by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChapterContent {
    Heading { content: Vec<String> },
    LineBreak,
    Verse(Verse),
    HebrewSubtitle { content: Vec<serde_json::Value> },
    /// Block types this tool does not render.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verse {
    pub number: u32,
    pub content: Vec<VersePart>,
}

/// One piece of a verse's content.
///
/// Upstream mixes bare strings with several object shapes in the same
/// array; variants are tried in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VersePart {
    Plain(String),
    Styled(StyledText),
    Note(NoteRef),
    LineBreak(LineBreak),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyledText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poem: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_of_jesus: Option<bool>,
}

/// Footnote reference. Not rendered as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteRef {
    pub note_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineBreak {
    pub line_break: bool,
}

impl ChapterResponse {
    /// First verse block with the given number, if any.
    pub fn find_verse(&self, number: u32) -> Option<&Verse> {
        self.chapter.content.iter().find_map(|block| match block {
            ChapterContent::Verse(v) if v.number == number => Some(v),
            _ => None,
        })
    }
}

impl VersePart {
    fn text(&self) -> Option<&str> {
        match self {
            VersePart::Plain(s) => Some(s),
            VersePart::Styled(t) => Some(&t.text),
            VersePart::Note(_) | VersePart::LineBreak(_) => None,
        }
    }
}

impl Verse {
    /// Render the verse as plain text.
    ///
    /// Footnote references are dropped, line breaks become `\n`, and a
    /// single space is inserted between adjacent text parts that would
    /// otherwise run two words together.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&VersePart> = None;

        for part in self.content.iter().filter(|p| !matches!(p, VersePart::Note(_))) {
            match part.text() {
                Some(text) => {
                    if let Some(prev_text) = prev.and_then(VersePart::text) {
                        if needs_space(prev_text, text) {
                            out.push(' ');
                        }
                    }
                    out.push_str(text);
                }
                None => out.push('\n'),
            }
            prev = Some(part);
        }

        out.trim().to_string()
    }
}

static ENDS_WORDLIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[a-zA-Z0-9;,."?!:’')\]—–]$"#).expect("valid regex"));
static STARTS_WORDLIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[a-zA-Z0-9“"‘(]"#).expect("valid regex"));

/// Whether a space belongs between two adjacent text fragments.
pub fn needs_space(prev: &str, curr: &str) -> bool {
    if prev.is_empty() || curr.is_empty() {
        return false;
    }
    ENDS_WORDLIKE.is_match(prev) && STARTS_WORDLIKE.is_match(curr)
}
