use crate::constants::{FREQUENCY_COLUMN, TICKER_COLUMN};
use crate::models::RankedTickers;
use crate::Error;
use csv::Writer;
use log::info;
use std::io::Write;
use std::path::Path;

/// Writes the ranked tickers as CSV, in rank order.
///
/// Columns are `Ticker`, the reference table's name column, and `Frequency`.
pub fn write_ranked_tickers<W: Write>(writer: W, ranked: &RankedTickers) -> Result<(), Error> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record([TICKER_COLUMN, ranked.name_column(), FREQUENCY_COLUMN])?;

    for row in ranked {
        writer.write_record([
            row.ticker.as_str(),
            row.name.as_str(),
            row.frequency.to_string().as_str(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

pub fn write_ranked_tickers_to_path<P: AsRef<Path>>(
    path: P,
    ranked: &RankedTickers,
) -> Result<(), Error> {
    let path = path.as_ref();
    let file = std::fs::File::create(path).map_err(|e| {
        Error::Other(format!(
            "Failed to create output file {}: {}",
            path.display(),
            e
        ))
    })?;

    write_ranked_tickers(file, ranked)?;
    info!("Wrote {} ticker(s) to {}", ranked.len(), path.display());

    Ok(())
}

/// Renders the `n` most mentioned tickers as a right-aligned text table.
///
/// ### Example:
/// ```rust
/// use ticker_tally::{format_ranked_tickers_preview, RankedTicker, RankedTickers};
///
/// let ranked = RankedTickers::new(
///     "Company",
///     vec![RankedTicker {
///         ticker: "TSLA".to_string(),
///         name: "Tesla".to_string(),
///         frequency: 12,
///     }],
/// );
///
/// assert_eq!(
///     format_ranked_tickers_preview(&ranked, 10),
///     "Ticker Company Frequency\n  TSLA   Tesla        12"
/// );
/// ```
pub fn format_ranked_tickers_preview(ranked: &RankedTickers, n: usize) -> String {
    let rows: Vec<[String; 3]> = ranked
        .top(n)
        .iter()
        .map(|row| {
            [
                row.ticker.clone(),
                row.name.clone(),
                row.frequency.to_string(),
            ]
        })
        .collect();

    let headers = [TICKER_COLUMN, ranked.name_column(), FREQUENCY_COLUMN];

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();

    let format_line = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    };

    std::iter::once(format_line(headers))
        .chain(
            rows.iter()
                .map(|row| format_line([row[0].as_str(), row[1].as_str(), row[2].as_str()])),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
