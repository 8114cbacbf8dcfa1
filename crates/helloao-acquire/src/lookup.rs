use std::io::{self, Write};

use helloao_model::CatalogResponse;

use crate::client::CATALOG_PATH;
use crate::error::LookupError;
use crate::source::Source;

pub const NOT_FOUND_LINE: &str = "MSB or Modern Spelling Bible not found in the list.";

/// Decode a catalog body down to its raw entries, classifying syntax and
/// shape failures. Entries themselves are decoded during the scan.
pub fn decode_catalog(body: &str) -> Result<CatalogResponse, LookupError> {
    Ok(serde_json::from_str(body)?)
}

/// Load and decode the catalog from the given source.
pub async fn load_catalog(source: &Source) -> Result<CatalogResponse, LookupError> {
    let catalog: CatalogResponse = source.read_json(CATALOG_PATH).await?;
    tracing::info!(translations = catalog.translations.len(), "Decoded catalog");
    Ok(catalog)
}

/// Write the single `Error: ...` report line.
pub fn write_error<W: Write>(err: &LookupError, out: &mut W) -> io::Result<()> {
    tracing::debug!(kind = err.kind(), "Lookup failed");
    writeln!(out, "Error: {err}")
}

/// Scan the catalog, writing a `Found:` line for each match as it is reached.
///
/// A malformed entry ends the scan with a trailing `Error:` line; lines
/// already written for earlier entries stay. The not-found line is only
/// written after a complete scan with no matches.
pub fn write_matches<W: Write>(catalog: &CatalogResponse, out: &mut W) -> io::Result<()> {
    let mut found = 0;
    for record in catalog.records() {
        let (t, _) = match record {
            Ok(record) => record,
            Err(err) => return write_error(&LookupError::from(err), out),
        };
        if t.is_modern_spelling_match() {
            tracing::debug!(id = %t.id, "Matched translation");
            writeln!(out, "{}", t.found_line())?;
            found += 1;
        }
    }

    if found == 0 {
        writeln!(out, "{NOT_FOUND_LINE}")?;
    }
    tracing::info!(matches = found, "Lookup complete");
    Ok(())
}

/// Render the outcome of loading the catalog: the scan on success, one
/// error line otherwise.
pub fn write_report<W: Write>(
    outcome: Result<CatalogResponse, LookupError>,
    out: &mut W,
) -> io::Result<()> {
    match outcome {
        Ok(catalog) => write_matches(&catalog, out),
        Err(err) => write_error(&err, out),
    }
}

/// Load the catalog and report matches. Lookup failures are reported, not returned;
/// only a failure to write the report is an `Err`.
pub async fn run<W: Write>(source: &Source, out: &mut W) -> io::Result<()> {
    let outcome = load_catalog(source).await;
    write_report(outcome, out)
}
