use crate::prelude::Contact;
use std::cmp::Ordering;

/// Keys a contact listing can be ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Phone,
    Email,
}

/// Case-insensitive substring match against name or phone.
/// An empty (or all-whitespace) query matches every contact.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let query = query.trim().to_lowercase();

    if query.is_empty() {
        return true;
    }

    contact.name.to_lowercase().contains(&query) || contact.phone.to_lowercase().contains(&query)
}

pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| matches_query(c, query))
        .collect()
}

pub fn compare_by(key: SortKey, a: &Contact, b: &Contact) -> Ordering {
    let ordering = match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Phone => a.phone.cmp(&b.phone),
        SortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
    };
    // Ties keep insertion order
    ordering.then(a.id.cmp(&b.id))
}

pub fn sort_contacts<'a>(contacts: &'a [Contact], key: SortKey, reverse: bool) -> Vec<&'a Contact> {
    let mut sorted: Vec<&Contact> = contacts.iter().collect();
    sorted.sort_by(|a, b| compare_by(key, a, b));

    if reverse {
        sorted.reverse();
    }
    sorted
}
