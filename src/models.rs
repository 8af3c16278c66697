//! Data models for contact records and store reporting.
//!
//! This module contains the data structures used throughout the application:
//! the persisted contact record, the input shapes for add and update, and the
//! statistics summary.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group assigned to a contact when none is supplied.
pub const DEFAULT_GROUP: &str = "Other";

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

/// A single contact record, keyed in the store by display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Normalized phone number, digits only
    pub phone: String,
    /// Email address (optional)
    #[serde(default)]
    pub email: Option<String>,
    /// Free-text postal address (optional)
    #[serde(default)]
    pub address: Option<String>,
    /// Free-text category, defaults to "Other"
    #[serde(default = "default_group")]
    pub group: String,
    /// Timestamp captured at first creation, never changed by updates
    pub created_at: DateTime<Local>,
    /// Timestamp refreshed on every create or update
    pub updated_at: DateTime<Local>,
}

/// Raw input for creating a new contact.
///
/// The phone number may still carry punctuation; the store normalizes and
/// validates it before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewContact {
    /// Display name, the unique store key
    pub name: String,
    /// Phone number as entered
    pub phone: String,
    /// Email address (optional)
    pub email: Option<String>,
    /// Postal address (optional)
    pub address: Option<String>,
    /// Group, falls back to [`DEFAULT_GROUP`] when not supplied
    pub group: Option<String>,
}

/// Field changes for an update. `None` keeps the current stored value.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    /// Replacement phone number as entered
    pub phone: Option<String>,
    /// Replacement email address
    pub email: Option<String>,
    /// Replacement postal address
    pub address: Option<String>,
    /// Replacement group
    pub group: Option<String>,
}

/// Summary statistics over the whole store.
#[derive(Debug, Clone)]
pub struct ContactStats {
    /// Total number of records
    pub total: usize,
    /// Record count per group, empty groups counted under "Other"
    pub by_group: BTreeMap<String, usize>,
    /// Up to five names with their timestamps, most recently updated first
    pub recently_updated: Vec<(String, DateTime<Local>)>,
}
