use crate::{
    cli::{self, command::{Cli, Commands}},
    helper, logger,
    prelude::{AppError, ContactDraft, ContactManager, SortKey, SqliteStore},
};
use clap::Parser;
use log::info;

pub fn run_app() -> Result<(), AppError> {
    helper::load_env();

    let cli = Cli::parse();

    logger::setup(logger::parse_level(&cli.log_level));

    let storage = SqliteStore::open(&cli.db)?;
    let mut manager = ContactManager::new(Box::new(storage))?;

    info!("Current contact database is: {}", cli.db);

    // The store is released exactly once, whatever the command returned.
    let outcome = execute(&mut manager, cli.command);
    let closed = manager.close();

    outcome?;
    closed
}

fn not_found(id: i64) {
    eprintln!("{}", AppError::NotFound(format!("Contact with id {}", id)));
}

pub fn execute(manager: &mut ContactManager, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let draft = ContactDraft::new(
                &name,
                &phone,
                &email.unwrap_or_default(),
                &address.unwrap_or_default(),
            );

            let contact = manager.add(&draft)?;

            println!("Contact added successfully (id {})", contact.id);
            Ok(())
        }

        // Listing contacts
        Commands::List {
            sort,
            reverse,
            json,
        } => {
            let key = sort.map(SortKey::from).unwrap_or(SortKey::Id);
            let contacts = manager.sorted(key, reverse);

            if json {
                println!("{}", serde_json::to_string_pretty(&contacts)?);
                return Ok(());
            }

            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for c in contacts {
                println!("{}", cli::list_line(c));
            }
            Ok(())
        }

        // Search for a contact
        Commands::Search { query } => {
            let found = manager.search(&query);

            if found.is_empty() {
                println!("Couldn't find a contact matching {}", query.trim());
                return Ok(());
            }

            for c in found {
                println!("{}", cli::list_line(c));
            }
            Ok(())
        }

        Commands::Show { id } => {
            match manager.get(id) {
                Some(contact) => println!("{}", cli::display_contact(contact)),
                None => not_found(id),
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            id,
            name,
            phone,
            email,
            address,
        } => {
            let Some(current) = manager.get(id) else {
                not_found(id);
                return Ok(());
            };

            // Fields left out keep their current value
            let draft = ContactDraft::new(
                name.as_deref().unwrap_or(&current.name),
                phone.as_deref().unwrap_or(&current.phone),
                email.as_deref().unwrap_or(&current.email),
                address.as_deref().unwrap_or(&current.address),
            );

            if manager.edit(id, &draft)? {
                println!("Contact updated successfully");
            } else {
                not_found(id);
            }
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id, yes } => {
            let Some(contact) = manager.get(id) else {
                not_found(id);
                return Ok(());
            };

            if !yes {
                let message = format!(
                    "delete this contact from your contact list \n{}\n",
                    cli::display_contact(contact)
                );
                cli::confirm_action(&message)?;

                if cli::get_input_to_lower()? != "y" {
                    println!("Delete cancelled");
                    return Ok(());
                }
            }

            if manager.remove(id)? {
                println!("Contact deleted successfully");
            } else {
                not_found(id);
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, total) = manager.import_contacts_from_csv(src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = manager.export_contacts_to_csv(des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
