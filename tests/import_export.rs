use assert_cmd::Command;
use predicates::str::contains;
use predicates::prelude::PredicateBooleanExt;
use std::fs;
use tempfile::tempdir;

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");
    let other_db = dir.path().join("other.db");

    // Add a contact
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .args([
            "add",
            "--name",
            "Alice",
            "--phone",
            "08031234567",
            "--email",
            "alice@example.com",
        ])
        .assert()
        .success()
        .stdout(contains("Contact added successfully"));

    // Export to a temporary CSV file
    let out_path = dir.path().join("out.csv");
    let out_path_str = out_path.to_string_lossy().to_string();

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("export")
        .arg("--des")
        .arg(&out_path_str)
        .assert()
        .success()
        .stdout(contains("Successfully exported 1 contacts"));

    // Ensure the exported file exists and has content
    let exported = fs::read_to_string(&out_path)?;
    assert!(exported.starts_with("id,name,phone,email,address\n"));
    assert!(exported.contains("Alice"));

    // Import into a second database
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &other_db)
        .arg("import")
        .arg("--src")
        .arg(&out_path_str)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts"));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &other_db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("alice@example.com"));

    // Non csv export target
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("export")
        .arg("--des")
        .arg(dir.path().join("out.txt"))
        .assert()
        .failure()
        .stderr(contains("Export file must be a .csv file"));

    // Missing import source
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("import")
        .arg("--src")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(contains("CSV file Not found"));

    Ok(())
}

#[test]
fn import_stopped_by_bad_row_reports_committed_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db = dir.path().join("contacts.db");
    let src = dir.path().join("contacts.csv");
    fs::write(&src, "name,phone\nAda,111\nBob,222\n,333\nDan,444\n")?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("import")
        .arg("--src")
        .arg(&src)
        .assert()
        .failure()
        .stderr(contains("Import stopped at row 4 after 2 contacts were imported"));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .env("CONTACTS_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Dan").not());

    Ok(())
}
