use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Translation code of the Modern Spelling Bible.
pub const MSB_ID: &str = "MSB";

/// Substring that marks a "Modern ..." translation name.
pub const MODERN_MARKER: &str = "Modern";

/// Substring of the MSB's catalog name ("Majority Standard Bible").
pub const MAJORITY_MARKER: &str = "Majority";

/// The top-level document served at `available_translations.json`.
///
/// Records are kept as raw JSON and decoded one at a time while scanning,
/// so a malformed entry only stops the scan where it occurs. The raw form
/// also keeps every upstream field for printing whole entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub translations: Vec<Value>,
}

/// One entry in the catalog, describing a single Bible translation.
///
/// Upstream records carry many more fields (website, license URL,
/// language, ...). They are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    /// Short code (e.g., "BSB", "eng_msb").
    pub id: String,
    /// Display name in the translation's own language.
    pub name: String,
    /// Display name in English.
    pub english_name: String,
}

impl TranslationRecord {
    /// True if this record is the MSB itself or any "Modern ..." translation.
    ///
    /// Substring checks are case-sensitive.
    pub fn is_modern_spelling_match(&self) -> bool {
        self.id == MSB_ID
            || self.name.contains(MODERN_MARKER)
            || self.english_name.contains(MODERN_MARKER)
    }

    /// True if this looks like the Majority Standard Bible entry
    /// (`eng_msb` upstream).
    pub fn is_majority_standard(&self) -> bool {
        self.name.contains(MAJORITY_MARKER)
            || self.english_name.contains(MAJORITY_MARKER)
            || self.id.contains("msb")
    }

    /// The `Found: <id> - <name> (<englishName>)` report line.
    pub fn found_line(&self) -> String {
        format!("Found: {} - {} ({})", self.id, self.name, self.english_name)
    }
}

impl CatalogResponse {
    /// Lazily decode each entry in catalog order.
    ///
    /// Each item pairs the typed record with its raw JSON.
    pub fn records(
        &self,
    ) -> impl Iterator<Item = Result<(TranslationRecord, &Value), serde_json::Error>> + '_ {
        self.translations
            .iter()
            .map(|raw| TranslationRecord::deserialize(raw).map(|t| (t, raw)))
    }

    /// First entry that looks like the Majority Standard Bible, as raw JSON.
    ///
    /// Decoding stops at the first malformed entry before a hit.
    pub fn find_majority_standard(&self) -> Result<Option<&Value>, serde_json::Error> {
        for record in self.records() {
            let (t, raw) = record?;
            if t.is_majority_standard() {
                return Ok(Some(raw));
            }
        }
        Ok(None)
    }
}
