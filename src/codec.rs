//! Decoding of delimited shard files.
//!
//! Shard files are comma-delimited text. Term statistics rows carry a term
//! followed by a space-separated list of `doc:freq` pairs; document rows
//! form a table whose first row names the fields (column 0 is the document
//! id). Malformed rows and pairs are skipped rather than failing the whole
//! shard, since a single corrupt record should not take down a search.

use std::collections::HashMap;

use csv::ReaderBuilder;
use serde_json::{Map, Value};

use crate::error::Result;

/// Decoded term statistics for one term: document id to frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStatRecord {
    /// The term this row describes.
    pub term: String,
    /// Frequency of the term per document id.
    pub frequencies: HashMap<String, u64>,
}

/// One decoded document: its id and reconstructed body.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    /// The document id (column 0 of the table).
    pub id: String,
    /// The document body as a (possibly nested) JSON object.
    pub source: Value,
}

/// Decode a term statistics shard file.
///
/// Each row is `term,"doc:freq doc:freq ..."`. Rows with fewer than two
/// fields are skipped, as are pairs without a `:` or with a non-numeric
/// frequency.
pub fn decode_term_stats(input: &str) -> Result<Vec<TermStatRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();

    for row in reader.records() {
        let Ok(row) = row else {
            continue;
        };
        if row.len() < 2 {
            continue;
        }

        let term = row[0].to_string();
        let mut frequencies = HashMap::new();

        for pair in row[1].split(' ') {
            let Some((doc_id, freq)) = pair.split_once(':') else {
                continue;
            };
            if doc_id.is_empty() {
                continue;
            }
            let Ok(freq) = freq.parse::<u64>() else {
                continue;
            };
            frequencies.insert(doc_id.to_string(), freq);
        }

        records.push(TermStatRecord { term, frequencies });
    }

    Ok(records)
}

/// Decode a documents shard file.
///
/// The first row is the header; its first column is the id column and
/// never becomes a field. Dot-delimited header names expand into nested
/// objects. Rows shorter than the header are tolerated; rows without an
/// id are skipped. Field values stay strings.
pub fn decode_documents(input: &str) -> Result<Vec<DocumentRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut records = Vec::new();
    let mut rows = reader.records().filter_map(|row| row.ok());

    let Some(header_row) = rows.next() else {
        return Ok(records);
    };
    let headers: Vec<String> = header_row.iter().map(String::from).collect();

    for row in rows {
        let Some(id) = row.get(0) else {
            continue;
        };
        if id.is_empty() {
            continue;
        }

        let mut source = Map::new();
        for (i, name) in headers.iter().enumerate().skip(1) {
            if name.is_empty() {
                continue;
            }
            let Some(value) = row.get(i) else {
                continue;
            };
            set_field_path(&mut source, name, Value::String(value.to_string()));
        }

        records.push(DocumentRecord {
            id: id.to_string(),
            source: Value::Object(source),
        });
    }

    Ok(records)
}

/// Assign `value` under a dot-delimited `path`, creating intermediate
/// objects as needed. An intermediate that is not an object is replaced
/// by one.
pub fn set_field_path(map: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            map.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                set_field_path(child, rest, value);
            }
        }
    }
}
