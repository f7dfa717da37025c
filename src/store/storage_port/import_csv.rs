use std::path::PathBuf;

use super::*;
use csv::Reader;
use serde::Deserialize;

const IMPORT_PATH: &str = "./csv/contacts.csv";

/// One row of an import file. An `id` column is tolerated so exported
/// files can be imported back, but imported rows always get fresh ids.
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl CsvRecord {
    pub fn into_draft(self) -> ContactDraft {
        ContactDraft::new(
            &self.name,
            &self.phone,
            self.email.as_deref().unwrap_or_default(),
            self.address.as_deref().unwrap_or_default(),
        )
    }
}

pub fn read_contacts_from_csv(src: Option<&str>) -> Result<(PathBuf, Vec<ContactDraft>), AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut drafts = Vec::new();
    for result in reader.deserialize() {
        let record: CsvRecord = result?;
        drafts.push(record.into_draft());
    }

    Ok((file_path, drafts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_rows_with_optional_columns_missing() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.csv");
        fs::write(&path, "name,phone\nAda,111\n Bob ,222\n")?;

        let (read_from, drafts) = read_contacts_from_csv(path.to_str())?;

        assert_eq!(read_from, path);
        assert_eq!(
            drafts,
            vec![
                ContactDraft::new("Ada", "111", "", ""),
                ContactDraft::new("Bob", "222", "", ""),
            ]
        );
        Ok(())
    }

    #[test]
    fn accepts_exported_layout() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("exported.csv");
        fs::write(
            &path,
            "id,name,phone,email,address\n7,Ada,111,a@x.com,Street 1\n8,Bob,222,,\n",
        )?;

        let (_, drafts) = read_contacts_from_csv(path.to_str())?;

        assert_eq!(drafts[0], ContactDraft::new("Ada", "111", "a@x.com", "Street 1"));
        assert_eq!(drafts[1], ContactDraft::new("Bob", "222", "", ""));
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = read_contacts_from_csv(Some("./definitely/not/here.csv"));

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn non_csv_file_is_rejected() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("contacts.json");
        fs::write(&path, "[]")?;

        let result = read_contacts_from_csv(path.to_str());

        assert!(matches!(result, Err(AppError::Validation(_))));
        Ok(())
    }
}
