use crate::core::normalizer::collect_usernames;
use crate::domain::model::UsernameSet;
use crate::utils::error::{InviteError, Result};
use std::io::Read;
use std::path::Path;

/// Read the username column of a form export. The header row is skipped.
pub fn read_usernames(path: impl AsRef<Path>, column: usize) -> Result<UsernameSet> {
    let file = std::fs::File::open(path.as_ref())?;
    read_usernames_from(file, column)
}

pub fn read_usernames_from<R: Read>(source: R, column: usize) -> Result<UsernameSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quote(b'"')
        .delimiter(b',')
        .from_reader(source);

    let mut raw_values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let value = record.get(column).ok_or_else(|| InviteError::MissingColumn {
            line: record.position().map(|p| p.line()).unwrap_or_default(),
            column,
        })?;
        raw_values.push(value.to_string());
    }

    tracing::debug!("Read {} rows from CSV", raw_values.len());
    Ok(collect_usernames(raw_values))
}
