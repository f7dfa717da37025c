pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}\n? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// One line of the list view. The id leads so a row can be picked for
/// show, edit or delete.
pub fn list_line(contact: &Contact) -> String {
    format!(
        "{:>4}. {:<20} {:15} {:^30} {}",
        contact.id, contact.name, contact.phone, contact.email, contact.address
    )
}

pub fn display_contact(contact: &Contact) -> String {
    let output = format!(
        "({})\n\
        Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.initial(),
        contact.name,
        contact.phone,
        contact.email,
        contact.address
    );
    output
}

// INPUT FUNCTIONS
pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
