use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn listing_format(id: i64, name: &str, phone: &str, email: &str, address: &str) -> String {
    format!("{id:>4}. {name:<20} {phone:15} {email:^30} {address}")
}

fn add(db: &Path, name: &str, phone: &str, email: &str) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", db)
        .args(["add", "--name", name, "--phone", phone, "--email", email])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));
    Ok(())
}

#[test]
fn listing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");

    // Empty book
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    add(&db, "Patricia", "08066809241", "lmartinez@bender-patterson.net")?;
    add(&db, "diane", "08064879199", "grahammatthew@gmail.com")?;
    add(&db, "John", "08046516806", "wendy59@turner.com")?;

    // Insertion order by default
    let expected = format!(
        "{}\n{}\n{}\n",
        listing_format(1, "Patricia", "08066809241", "lmartinez@bender-patterson.net", ""),
        listing_format(2, "diane", "08064879199", "grahammatthew@gmail.com", ""),
        listing_format(3, "John", "08046516806", "wendy59@turner.com", ""),
    );
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    // Sorted by name, case-insensitive, reversed
    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .args(["list", "--sort", "name", "--reverse"])
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let ids: Vec<&str> = stdout
        .lines()
        .map(|line| line.trim_start().split('.').next().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["1", "3", "2"]);

    Ok(())
}

#[test]
fn listing_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");

    add(&db, "Ada", "111", "a@x.com")?;

    let output = Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .args(["list", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "name": "Ada",
            "phone": "111",
            "email": "a@x.com",
            "address": ""
        }])
    );

    Ok(())
}
