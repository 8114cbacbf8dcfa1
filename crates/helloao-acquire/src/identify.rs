use std::io::{self, Write};

use helloao_model::CatalogResponse;

use crate::error::LookupError;
use crate::lookup::{load_catalog, write_error};
use crate::source::Source;

pub const NOT_IDENTIFIED_LINE: &str = "No Majority Standard Bible entry found in the list.";

/// Print the first MSB-like catalog entry in full, as pretty JSON.
pub fn write_entry<W: Write>(catalog: &CatalogResponse, out: &mut W) -> io::Result<()> {
    match catalog.find_majority_standard() {
        Ok(Some(entry)) => {
            tracing::info!(id = %entry["id"], "Identified entry");
            serde_json::to_writer_pretty(&mut *out, entry)?;
            writeln!(out)
        }
        Ok(None) => writeln!(out, "{NOT_IDENTIFIED_LINE}"),
        Err(err) => write_error(&LookupError::from(err), out),
    }
}

/// Load the catalog and print the MSB entry, or one `Error:` line.
pub async fn run<W: Write>(source: &Source, out: &mut W) -> io::Result<()> {
    match load_catalog(source).await {
        Ok(catalog) => write_entry(&catalog, out),
        Err(err) => write_error(&err, out),
    }
}
