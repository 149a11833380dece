// JSON journal persistence

use crate::atomic::write_atomically;
use crate::error::PersistenceError;
use crate::record::{COLUMNS, RawFields, Record};
use crate::store::RecordStore;
use crate::validate::validate;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::info;

/// Serialize every record as a JSON array of `{date, exercise, weight, reps}`
pub fn write_json<W: Write>(store: &RecordStore, writer: W) -> Result<(), PersistenceError> {
    let rows: Vec<&Record> = store.records().collect();
    serde_json::to_writer_pretty(writer, &rows).map_err(|e| PersistenceError::Io(e.into()))
}

/// Save the journal to `path`, replacing any previous file atomically
pub fn save_json(store: &RecordStore, path: &Path) -> Result<(), PersistenceError> {
    write_atomically(path, |w| {
        write_json(store, &mut *w)?;
        w.write_all(b"\n")?;
        Ok(())
    })?;

    info!(file = ?path, count = store.len(), "Saved journal");
    Ok(())
}

/// Parse a JSON journal into a fresh store
///
/// The whole document is shape-checked before any value is validated, so a
/// structural problem anywhere is a schema error even when an earlier row has a
/// bad value. The caller either gets a complete store or an error. Ids are
/// assigned from row order.
pub fn read_json<R: Read>(reader: R) -> Result<RecordStore, PersistenceError> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            PersistenceError::Io(e.into())
        } else {
            PersistenceError::schema(format!("malformed JSON: {}", e))
        }
    })?;

    let rows = document
        .as_array()
        .ok_or_else(|| PersistenceError::schema("top-level value must be an array"))?;

    let texts = rows
        .iter()
        .enumerate()
        .map(|(index, row)| row_text(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    let records = texts
        .iter()
        .enumerate()
        .map(|(index, [date, exercise, weight, reps])| {
            validate(&RawFields::new(date, exercise, weight, reps))
                .map_err(|reason| PersistenceError::Record { index, reason })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecordStore::from_records(records))
}

/// Load the journal at `path` into a fresh store
pub fn load_json(path: &Path) -> Result<RecordStore, PersistenceError> {
    let file = File::open(path)?;
    let store = read_json(BufReader::new(file))?;

    info!(file = ?path, count = store.len(), "Loaded journal");
    Ok(store)
}

/// Like [`load_json`], but a journal that does not exist yet is an empty store
pub fn load_json_or_empty(path: &Path) -> Result<RecordStore, PersistenceError> {
    if !path.exists() {
        info!(file = ?path, "No journal yet, starting empty");
        return Ok(RecordStore::new());
    }
    load_json(path)
}

/// Field text of one entry in `COLUMNS` order, or a schema error
fn row_text(index: usize, row: &Value) -> Result<[String; 4], PersistenceError> {
    let object = row
        .as_object()
        .ok_or_else(|| PersistenceError::schema(format!("entry {} is not an object", index)))?;

    if object.len() != COLUMNS.len() || !COLUMNS.iter().all(|key| object.contains_key(*key)) {
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        return Err(PersistenceError::schema(format!(
            "entry {} has keys [{}], expected exactly [{}]",
            index,
            keys.join(", "),
            COLUMNS.join(", ")
        )));
    }

    Ok([
        text_field(index, "date", &object["date"], false)?,
        text_field(index, "exercise", &object["exercise"], false)?,
        text_field(index, "weight", &object["weight"], true)?,
        text_field(index, "reps", &object["reps"], true)?,
    ])
}

/// Raw text of a JSON scalar
///
/// `date` and `exercise` must be strings. `weight` and `reps` may be a JSON
/// number or a string holding one, such as `"62.5"`; either way the text goes
/// through the same validation as CLI and CSV input.
fn text_field(index: usize, key: &str, value: &Value, numeric: bool) -> Result<String, PersistenceError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if numeric => Ok(n.to_string()),
        other => Err(PersistenceError::schema(format!(
            "entry {}: field {:?} has unexpected type {}",
            index,
            key,
            json_type(other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
