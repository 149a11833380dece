// CSV export and import

use crate::atomic::write_atomically;
use crate::error::PersistenceError;
use crate::record::{COLUMNS, RawFields, Record, RecordId};
use crate::store::RecordStore;
use crate::validate::validate;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Write the header row and one row per record, in store order
pub fn write_csv<W: Write>(store: &RecordStore, writer: W) -> Result<(), PersistenceError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS).map_err(from_csv)?;

    for record in store.records() {
        wtr.write_record([
            record.date().to_string(),
            record.exercise().to_string(),
            record.weight().to_string(),
            record.reps().to_string(),
        ])
        .map_err(from_csv)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export the store to `path`, replacing any previous file atomically
pub fn export_csv(store: &RecordStore, path: &Path) -> Result<(), PersistenceError> {
    write_atomically(path, |w| write_csv(store, w))?;

    info!(file = ?path, count = store.len(), "Exported CSV");
    Ok(())
}

/// Parse and validate every data row; nothing is returned unless all rows pass
///
/// The header must be exactly `date,exercise,weight,reps`. Row numbers in
/// errors count data rows from 1.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>, PersistenceError> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers().map_err(from_csv)?;
    if !headers.iter().eq(COLUMNS) {
        let found = headers.iter().collect::<Vec<_>>().join(",");
        warn!(%found, "Rejecting CSV with unexpected header");
        return Err(PersistenceError::HeaderMismatch {
            expected: COLUMNS.join(","),
            found,
        });
    }

    let mut staged = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row_number = i + 1;
        let row = row.map_err(from_csv)?;

        let field = |n: usize| row.get(n).unwrap_or("");
        let record = validate(&RawFields::new(field(0), field(1), field(2), field(3))).map_err(|reason| {
            PersistenceError::Record {
                index: row_number,
                reason,
            }
        })?;
        staged.push(record);
    }

    Ok(staged)
}

/// Append every row of the CSV at `path` to `store`, or none of them
pub fn import_csv(store: &mut RecordStore, path: &Path) -> Result<Vec<RecordId>, PersistenceError> {
    let file = File::open(path)?;
    let staged = read_csv(BufReader::new(file))?;

    let ids = store.extend(staged);
    info!(file = ?path, count = ids.len(), "Imported CSV");
    Ok(ids)
}

fn from_csv(err: csv::Error) -> PersistenceError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => PersistenceError::Io(e),
        _ => PersistenceError::schema(message),
    }
}
