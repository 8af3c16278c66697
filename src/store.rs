//! The contact store: an in-memory mapping from name to record, persisted as
//! a single JSON file.
//!
//! The store is an explicit object owned by the top-level session and passed
//! to every operation. Each committed mutation (add, update, delete) rewrites
//! the whole backing file; validation always runs before the mapping is
//! touched, so an invalid record is never persisted.

use crate::error::{ContactBookError, Result};
use crate::models::{ContactRecord, ContactStats, ContactUpdate, NewContact, DEFAULT_GROUP};
use crate::validation::InputValidator;
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How the backing file looked when the store was loaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File existed and parsed cleanly
    Loaded,
    /// File absent, store starts empty (first run)
    Missing,
    /// File present but unparsable, store starts empty
    Corrupt,
}

/// Mapping from contact name to record plus its backing file path.
#[derive(Debug)]
pub struct ContactStore {
    contacts: BTreeMap<String, ContactRecord>,
    data_path: PathBuf,
}

impl ContactStore {
    /// Read the backing file at `path`.
    ///
    /// A missing file is not an error: the store starts empty and the status
    /// reports `Missing`. An unparsable file also yields an empty store with
    /// status `Corrupt`; the file itself is left untouched on disk until the
    /// next save overwrites it. Other I/O failures propagate.
    pub fn load(path: impl Into<PathBuf>) -> Result<(Self, LoadStatus)> {
        let data_path = path.into();

        let file = match File::open(&data_path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %data_path.display(), "no contacts file, starting fresh");
                return Ok((Self { contacts: BTreeMap::new(), data_path }, LoadStatus::Missing));
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(contacts) => {
                let store = Self { contacts, data_path };
                info!(count = store.len(), path = %store.data_path.display(), "contacts loaded");
                Ok((store, LoadStatus::Loaded))
            }
            Err(err) => {
                warn!(
                    path = %data_path.display(),
                    error = %err,
                    "contacts file is unparsable, starting with an empty store"
                );
                Ok((Self { contacts: BTreeMap::new(), data_path }, LoadStatus::Corrupt))
            }
        }
    }

    /// Serialize the entire mapping to the backing file, fully overwriting
    /// prior contents. Failures propagate to the caller.
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.data_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.contacts)?;
        writer.flush()?;
        info!(count = self.len(), path = %self.data_path.display(), "contacts saved");
        Ok(())
    }

    /// Add a new contact and persist immediately.
    ///
    /// The name must be non-empty and not already present; the phone number
    /// is normalized to digits and must be 10-15 digits long; a non-empty
    /// email must be well-formed. If the save fails the insertion is rolled
    /// back so the mapping matches the file.
    pub fn add(&mut self, contact: NewContact) -> Result<()> {
        InputValidator::validate_contact_name(&contact.name)?;
        if self.contacts.contains_key(&contact.name) {
            return Err(ContactBookError::DuplicateContact(contact.name));
        }

        let phone = InputValidator::validate_phone(&contact.phone)?;
        let email = normalize_optional(contact.email);
        if let Some(email) = &email {
            InputValidator::validate_email(email)?;
        }

        let now = Local::now();
        let record = ContactRecord {
            phone,
            email,
            address: normalize_optional(contact.address),
            group: contact
                .group
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GROUP.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.contacts.insert(contact.name.clone(), record);
        if let Err(err) = self.save() {
            self.contacts.remove(&contact.name);
            return Err(err);
        }
        Ok(())
    }

    /// Case-insensitive containment search against names, plus substring
    /// match against the stored digit strings. An empty result set is not an
    /// error.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<(&String, &ContactRecord)> {
        let needle = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|(name, record)| {
                name.to_lowercase().contains(&needle) || record.phone.contains(&needle)
            })
            .collect()
    }

    /// Merge `changes` over the stored record and persist.
    ///
    /// Unset fields keep their current values. The merged phone and email are
    /// re-validated; on failure the update aborts with no mutation and no
    /// write. `created_at` is preserved, `updated_at` refreshed.
    pub fn update(&mut self, name: &str, changes: ContactUpdate) -> Result<()> {
        let current = self
            .contacts
            .get(name)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))?
            .clone();

        let phone =
            InputValidator::validate_phone(changes.phone.as_deref().unwrap_or(&current.phone))?;
        let email = normalize_optional(changes.email).or_else(|| current.email.clone());
        if let Some(email) = &email {
            InputValidator::validate_email(email)?;
        }

        let record = ContactRecord {
            phone,
            email,
            address: normalize_optional(changes.address).or_else(|| current.address.clone()),
            group: changes
                .group
                .filter(|g| !g.trim().is_empty())
                .unwrap_or_else(|| current.group.clone()),
            created_at: current.created_at,
            updated_at: Local::now(),
        };

        self.contacts.insert(name.to_string(), record);
        if let Err(err) = self.save() {
            self.contacts.insert(name.to_string(), current);
            return Err(err);
        }
        Ok(())
    }

    /// Remove a contact by name and persist. Confirmation is the caller's
    /// responsibility.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let removed = self
            .contacts
            .remove(name)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))?;

        if let Err(err) = self.save() {
            self.contacts.insert(name.to_string(), removed);
            return Err(err);
        }
        Ok(())
    }

    /// Look up a single record by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ContactRecord> {
        self.contacts.get(name)
    }

    /// True if a record with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Entries in name-ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ContactRecord)> {
        self.contacts.iter()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// True when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The full mapping, for backup serialization.
    #[must_use]
    pub fn contacts(&self) -> &BTreeMap<String, ContactRecord> {
        &self.contacts
    }

    /// Path of the backing file.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Total count, per-group counts and the five most recently updated
    /// records. Records with an empty group count under "Other".
    #[must_use]
    pub fn stats(&self) -> ContactStats {
        let mut by_group: BTreeMap<String, usize> = BTreeMap::new();
        for record in self.contacts.values() {
            let group = if record.group.trim().is_empty() {
                DEFAULT_GROUP
            } else {
                record.group.as_str()
            };
            *by_group.entry(group.to_string()).or_insert(0) += 1;
        }

        let mut recently_updated: Vec<(String, DateTime<Local>)> = self
            .contacts
            .iter()
            .map(|(name, record)| (name.clone(), record.updated_at))
            .collect();
        // Stable sort: ties keep name order
        recently_updated.sort_by(|a, b| b.1.cmp(&a.1));
        recently_updated.truncate(5);

        ContactStats {
            total: self.contacts.len(),
            by_group,
            recently_updated,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
