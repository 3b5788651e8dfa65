use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::QcError;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, QcError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file =
        File::open(path).map_err(|_| QcError::FileReadError(path.display().to_string()))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Transpose a CSV file (rows become columns). Quoted fields with
/// embedded separators survive the round trip. The input must be
/// rectangular; ragged rows are rejected rather than silently
/// truncated.
///
/// # Arguments
///
/// - input: path to the CSV to transpose
/// - output: path the transposed CSV is written to
///
pub fn transpose_csv(input: &Path, output: &Path) -> Result<(), QcError> {
    let reader = get_dynamic_reader(input)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<csv::StringRecord> = Vec::new();
    for record in csv_reader.records() {
        rows.push(record?);
    }

    if rows.is_empty() {
        return Err(QcError::EmptyCollection);
    }

    let n_columns = rows[0].len();
    for (index, row) in rows.iter().enumerate() {
        if row.len() != n_columns {
            return Err(QcError::RaggedCsv(index + 1, row.len(), n_columns));
        }
    }

    let file =
        File::create(output).map_err(|_| QcError::FileWriteError(output.display().to_string()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    for column in 0..n_columns {
        let transposed: Vec<&str> = rows.iter().map(|row| &row[column]).collect();
        writer.write_record(&transposed)?;
    }

    writer.flush()?;

    Ok(())
}
