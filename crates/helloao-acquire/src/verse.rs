use std::io::{self, Write};

use helloao_model::{ChapterContent, ChapterResponse};

use crate::error::LookupError;
use crate::lookup::write_error;
use crate::source::Source;

/// A single verse reference within one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRequest {
    /// Translation id as used in API paths (e.g., "eng_msb").
    pub translation: String,
    /// Book id or name as accepted by the API (e.g., "Exodus", "EXO").
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRequest {
    /// API path of the chapter containing this verse.
    pub fn chapter_path(&self) -> String {
        format!("{}/{}/{}.json", self.translation, self.book, self.chapter)
    }
}

/// Load the chapter holding the requested verse. A `File` source is read
/// as-is; the request's translation, book and chapter only shape the API path.
pub async fn load_chapter(
    source: &Source,
    request: &VerseRequest,
) -> Result<ChapterResponse, LookupError> {
    let chapter: ChapterResponse = source.read_json(&request.chapter_path()).await?;
    tracing::info!(
        translation = %chapter.translation.id,
        book = %chapter.book.name,
        chapter = chapter.chapter.number,
        blocks = chapter.chapter.content.len(),
        "Decoded chapter"
    );
    Ok(chapter)
}

/// Print the requested verse from a decoded chapter.
///
/// With `as_json`, the verse block (including its `type` tag) is printed
/// as pretty JSON instead of text.
pub fn write_verse<W: Write>(
    chapter: &ChapterResponse,
    request: &VerseRequest,
    as_json: bool,
    out: &mut W,
) -> io::Result<()> {
    let Some(verse) = chapter.find_verse(request.verse) else {
        return writeln!(
            out,
            "Verse {}:{} not found in {}.",
            chapter.chapter.number, request.verse, chapter.book.name
        );
    };

    if as_json {
        serde_json::to_writer_pretty(&mut *out, &ChapterContent::Verse(verse.clone()))?;
        writeln!(out)
    } else {
        writeln!(
            out,
            "{} {}:{} ({}) {}",
            chapter.book.name,
            chapter.chapter.number,
            verse.number,
            chapter.translation.id,
            verse.plain_text()
        )
    }
}

/// Load the chapter and report the verse, or one `Error:` line.
pub async fn run<W: Write>(
    source: &Source,
    request: &VerseRequest,
    as_json: bool,
    out: &mut W,
) -> io::Result<()> {
    match load_chapter(source, request).await {
        Ok(chapter) => write_verse(&chapter, request, as_json, out),
        Err(err) => write_error(&err, out),
    }
}
