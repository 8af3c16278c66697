//! Export and backup writers.
//!
//! This module serializes the store to its two secondary formats: a fixed
//! seven-column CSV for export, and a JSON duplicate of the primary store
//! format for the single backup slot. Both writers overwrite any existing
//! file at the destination.

use crate::error::Result;
use crate::store::ContactStore;
use csv::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Column order of the CSV export, header row included.
pub const EXPORT_COLUMNS: [&str; 7] = [
    "name",
    "phone",
    "email",
    "address",
    "group",
    "created_at",
    "updated_at",
];

/// Write every record as one CSV row, preceded by exactly one header row.
///
/// Optional fields export as empty strings; timestamps as RFC 3339.
pub fn export_csv(store: &ContactStore, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(BufWriter::new(file));

    writer.write_record(EXPORT_COLUMNS)?;

    for (name, record) in store.iter() {
        let created = record.created_at.to_rfc3339();
        let updated = record.updated_at.to_rfc3339();
        writer.write_record([
            name.as_str(),
            record.phone.as_str(),
            record.email.as_deref().unwrap_or(""),
            record.address.as_deref().unwrap_or(""),
            record.group.as_str(),
            created.as_str(),
            updated.as_str(),
        ])?;
    }

    writer.flush()?;
    info!(count = store.len(), path = %path.display(), "contacts exported");
    Ok(())
}

/// Write a full duplicate of the mapping to `path` in the same format as the
/// primary store file. The single backup slot is always overwritten; no
/// rotation.
pub fn write_backup(store: &ContactStore, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, store.contacts())?;
    writer.flush()?;
    info!(count = store.len(), path = %path.display(), "backup written");
    Ok(())
}
