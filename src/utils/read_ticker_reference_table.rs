use crate::constants::GZIP_FILE_EXTENSION;
use crate::models::TickerReferenceTable;
use crate::types::TickerReference;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a ticker reference table from CSV.
///
/// The first row is a header. The first column holds the ticker symbol and the second the
/// descriptive name; the second header cell becomes the table's name column label. Symbols
/// are kept as-is, since matching is case-sensitive.
pub fn read_ticker_reference_table<R: Read>(reader: R) -> Result<TickerReferenceTable, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .flexible(true)
        .from_reader(reader);

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let name_column = headers
        .get(1)
        .ok_or_else(|| Error::ParserError("Missing name column header".to_string()))?;

    let mut rows: Vec<TickerReference> = Vec::new();

    for (line, record) in reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let ticker_symbol = record
            .get(0)
            .filter(|ticker_symbol| !ticker_symbol.is_empty())
            .ok_or_else(|| {
                Error::ParserError(format!("Missing ticker symbol on data row {}", line + 1))
            })?;

        // Tickers without a known name are still valid matches
        let name = record.get(1).unwrap_or_default();

        rows.push((ticker_symbol.to_string(), name.to_string()));
    }

    debug!("Parsed {} ticker reference row(s)", rows.len());

    Ok(TickerReferenceTable::with_name_column(name_column, rows))
}

pub fn read_ticker_reference_table_from_string(
    csv: &str,
) -> Result<TickerReferenceTable, Error> {
    read_ticker_reference_table(csv.as_bytes())
}

/// Decompress and parse a Gzip-compressed ticker reference table.
pub fn read_ticker_reference_table_from_gz_bytes(
    read_bytes: &[u8],
) -> Result<TickerReferenceTable, Error> {
    let mut decoder = GzDecoder::new(read_bytes);
    let mut decompressed_data = String::new();
    decoder.read_to_string(&mut decompressed_data)?;

    read_ticker_reference_table_from_string(&decompressed_data)
}

/// Reads a ticker reference table from disk, transparently decompressing `.gz` files.
pub fn read_ticker_reference_table_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<TickerReferenceTable, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Other(format!(
            "Failed to open ticker file {}: {}",
            path.display(),
            e
        ))
    })?;

    let is_compressed = path
        .extension()
        .is_some_and(|extension| extension == GZIP_FILE_EXTENSION);

    let table = if is_compressed {
        read_ticker_reference_table(GzDecoder::new(BufReader::new(file)))?
    } else {
        read_ticker_reference_table(BufReader::new(file))?
    };

    info!(
        "Loaded {} ticker(s) from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}
