//! Interactive menu shells.
//!
//! Two entry points drive the same store: the full nine-option menu and a
//! minimal four-option one. The shell owns all prompting, re-prompt loops and
//! formatted printing; every mutation goes through [`ContactStore`], which
//! does its own validation. End-of-input or an interrupted read surfaces as
//! [`ContactBookError::Interrupted`] and is caught at the top of each loop so
//! the program can save and say goodbye instead of crashing.

use crate::config::AppConfig;
use crate::error::{ContactBookError, Result};
use crate::export;
use crate::models::{ContactRecord, ContactUpdate, NewContact, DEFAULT_GROUP};
use crate::store::ContactStore;
use crate::validation::InputValidator;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

enum Flow {
    Continue,
    Exit,
}

/// Run the full nine-option menu until the user exits or input ends.
///
/// Performs a final save before returning, on every exit path.
pub fn run_full_menu(store: &mut ContactStore, config: &AppConfig) -> Result<()> {
    let mut interrupted = false;
    loop {
        print_full_menu();
        let outcome = prompt("Enter your choice (1-9): ")
            .and_then(|choice| dispatch_full(store, config, &choice));
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(ContactBookError::Interrupted) => {
                interrupted = true;
                break;
            }
            Err(err) => println!("⚠️  {err}"),
        }
    }

    store.save()?;
    if interrupted {
        println!("\n\nProcess interrupted by user. Exiting gracefully.");
    } else {
        println!("Goodbye!");
    }
    Ok(())
}

/// Run the minimal add/search/list/exit menu until the user exits or input
/// ends. Saves before returning.
pub fn run_quick_menu(store: &mut ContactStore) -> Result<()> {
    let mut interrupted = false;
    loop {
        println!("1. Add Contact");
        println!("2. Search Contact");
        println!("3. Display All Contacts");
        println!("4. Exit");
        let outcome =
            prompt("Enter your choice: ").and_then(|choice| dispatch_quick(store, &choice));
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(ContactBookError::Interrupted) => {
                interrupted = true;
                break;
            }
            Err(err) => println!("⚠️  {err}"),
        }
    }

    store.save()?;
    if interrupted {
        println!("\n\nProcess interrupted by user. Exiting gracefully.");
    }
    Ok(())
}

fn dispatch_full(store: &mut ContactStore, config: &AppConfig, choice: &str) -> Result<Flow> {
    debug!(choice, "menu selection");
    match choice {
        "1" => add_contact(store)?,
        "2" => search_contacts(store)?,
        "3" => update_contact(store, None)?,
        "4" => delete_contact(store)?,
        "5" => display_all(store),
        "6" => export_contacts(store, config)?,
        "7" => print_stats(store),
        "8" => backup_contacts(store, config)?,
        "9" => return Ok(Flow::Exit),
        _ => println!("Invalid choice. Please enter 1-9."),
    }
    Ok(Flow::Continue)
}

fn dispatch_quick(store: &mut ContactStore, choice: &str) -> Result<Flow> {
    match choice {
        "1" => quick_add(store)?,
        "2" => search_contacts(store)?,
        "3" => display_all(store),
        "4" => {
            println!("Exiting...");
            return Ok(Flow::Exit);
        }
        _ => println!("Invalid choice. Try again.\n"),
    }
    Ok(Flow::Continue)
}

fn print_full_menu() {
    println!("\n{}", "=".repeat(30));
    println!("      CONTACT MANAGEMENT SYSTEM");
    println!("{}", "=".repeat(30));
    println!("1. Add New Contact");
    println!("2. Search Contact");
    println!("3. Update Contact");
    println!("4. Delete Contact");
    println!("5. View All Contacts");
    println!("6. Export to CSV");
    println!("7. View Statistics");
    println!("8. Backup Contacts");
    println!("9. Exit");
}

fn add_contact(store: &mut ContactStore) -> Result<()> {
    println!("\n--- ADD NEW CONTACT ---");
    let name = prompt("Enter contact name: ")?;
    if name.is_empty() {
        println!("Name cannot be empty.");
        return Ok(());
    }
    if store.contains(&name) {
        println!("Contact '{name}' already exists.");
        if confirm("Update existing? (y/n): ")? {
            return update_contact(store, Some(name));
        }
        return Ok(());
    }

    let phone = prompt_valid_phone()?;
    let email = prompt_valid_email()?;
    let address = optional(prompt("Enter address (optional): ")?);
    let group = optional(prompt(&format!(
        "Enter group (Friends/Work/Family/Other) [{DEFAULT_GROUP}]: "
    ))?);

    match store.add(NewContact {
        name: name.clone(),
        phone,
        email,
        address,
        group,
    }) {
        Ok(()) => println!(
            "✅ Contact '{name}' saved to {}",
            store.data_path().display()
        ),
        Err(err) => println!("⚠️  Could not add contact: {err}"),
    }
    Ok(())
}

fn quick_add(store: &mut ContactStore) -> Result<()> {
    let name = prompt("Enter name: ")?;
    if name.is_empty() {
        println!("Name cannot be empty.");
        return Ok(());
    }
    if store.contains(&name) {
        println!("Contact '{name}' already exists.\n");
        return Ok(());
    }
    let phone = prompt_valid_phone()?;
    match store.add(NewContact {
        name,
        phone,
        email: None,
        address: None,
        group: None,
    }) {
        Ok(()) => println!("Contact added successfully!\n"),
        Err(err) => println!("⚠️  Could not add contact: {err}"),
    }
    Ok(())
}

fn search_contacts(store: &ContactStore) -> Result<()> {
    let term = prompt("Enter name or phone to search: ")?;
    if term.is_empty() {
        return Ok(());
    }
    let results = store.search(&term);
    if results.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }
    for (i, (name, record)) in results.iter().enumerate() {
        println!("\nResult {}:", i + 1);
        print_contact(name, record);
    }
    Ok(())
}

fn update_contact(store: &mut ContactStore, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt("Enter contact name to update: ")?,
    };
    let Some(current) = store.get(&name).cloned() else {
        println!("Contact not found.");
        return Ok(());
    };

    println!("Leave blank to keep current value.");
    let phone = optional(prompt(&format!("Phone [{}]: ", current.phone))?);
    let email = optional(prompt(&format!(
        "Email [{}]: ",
        current.email.as_deref().unwrap_or("")
    ))?);
    let address = optional(prompt(&format!(
        "Address [{}]: ",
        current.address.as_deref().unwrap_or("")
    ))?);
    let group = optional(prompt(&format!("Group [{}]: ", current.group))?);

    match store.update(
        &name,
        ContactUpdate {
            phone,
            email,
            address,
            group,
        },
    ) {
        Ok(()) => println!("✅ Contact '{name}' updated."),
        Err(err @ (ContactBookError::InvalidPhone(_) | ContactBookError::InvalidEmail(_))) => {
            println!("{err}. Update cancelled.");
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn delete_contact(store: &mut ContactStore) -> Result<()> {
    let name = prompt("Enter contact name to delete: ")?;
    if !store.contains(&name) {
        println!("Contact not found.");
        return Ok(());
    }
    if confirm(&format!("Are you sure you want to delete '{name}'? (y/n): "))? {
        store.delete(&name)?;
        println!("✅ Contact '{name}' deleted.");
    }
    Ok(())
}

fn display_all(store: &ContactStore) {
    if store.is_empty() {
        println!("No contacts to show.");
        return;
    }
    println!("\n--- ALL CONTACTS ({}) ---", store.len());
    for (i, (name, record)) in store.iter().enumerate() {
        println!("{}. {name} - {} ({})", i + 1, record.phone, record.group);
    }
}

fn print_stats(store: &ContactStore) {
    let stats = store.stats();
    println!("\n--- CONTACT STATISTICS ---");
    println!("Total Contacts: {}", stats.total);
    if stats.total == 0 {
        return;
    }
    println!("\nContacts by Group:");
    for (group, count) in &stats.by_group {
        println!("  {group}: {count} contact(s)");
    }
    println!("\nRecently Updated:");
    for (name, updated_at) in &stats.recently_updated {
        println!("  {name} (updated: {})", updated_at.format("%Y-%m-%d %H:%M:%S"));
    }
}

fn export_contacts(store: &ContactStore, config: &AppConfig) -> Result<()> {
    let path = Path::new(&config.export.csv_file);
    export::export_csv(store, path)?;
    println!("✅ Exported contacts to {}", path.display());
    Ok(())
}

fn backup_contacts(store: &ContactStore, config: &AppConfig) -> Result<()> {
    let path = Path::new(&config.storage.backup_file);
    export::write_backup(store, path)?;
    println!("🔁 Backup created at {}", path.display());
    Ok(())
}

/// Re-prompt until the phone number passes validation. The raw input is
/// returned; the store normalizes it again before storing.
fn prompt_valid_phone() -> Result<String> {
    loop {
        let phone = prompt("Enter phone number: ")?;
        if InputValidator::validate_phone(&phone).is_ok() {
            return Ok(phone);
        }
        println!("Invalid phone number. Enter 10-15 digits (you may include + or -).");
    }
}

/// Re-prompt until the email is empty or well-formed.
fn prompt_valid_email() -> Result<Option<String>> {
    loop {
        let email = prompt("Enter email (optional): ")?;
        if email.is_empty() {
            return Ok(None);
        }
        if InputValidator::validate_email(&email).is_ok() {
            return Ok(Some(email));
        }
        println!("Invalid email format.");
    }
}

fn print_contact(name: &str, record: &ContactRecord) {
    println!("--------------------------------------------------");
    println!("👤 {name}");
    println!("   📞 {}", record.phone);
    if let Some(email) = &record.email {
        println!("   📧 {email}");
    }
    if let Some(address) = &record.address {
        println!("   📍 {address}");
    }
    println!("   👥 Group: {}", record.group);
    println!("--------------------------------------------------");
}

fn confirm(label: &str) -> Result<bool> {
    let answer = prompt(label)?;
    Ok(answer.to_lowercase().starts_with('y'))
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Print a prompt and read one trimmed line from stdin.
///
/// End-of-input and interrupted reads map to
/// [`ContactBookError::Interrupted`] so the menu loops can exit gracefully.
fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err(ContactBookError::Interrupted),
        Ok(_) => Ok(line.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Err(ContactBookError::Interrupted),
        Err(err) => Err(err.into()),
    }
}
