pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contact};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_JSON_PATH: &str = "./.instance/contacts.json";

/// The persistence handle a contact list is saved to and loaded from.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

/// Builds the store for `medium`. A JSON store without a path uses
/// `DEFAULT_JSON_PATH`.
pub fn parse_storage_type(
    medium: StorageMediums,
    path: Option<PathBuf>,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_JSON_PATH));
            Ok(Box::new(stores::JsonStorage::new(path)))
        }
        StorageMediums::Mem => Ok(Box::new(memory::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_mediums() -> Result<(), AppError> {
        assert_eq!(StorageMediums::from("json")?, StorageMediums::Json);
        assert_eq!(StorageMediums::from("MEM")?, StorageMediums::Mem);
        assert!(StorageMediums::from("txt").is_err());
        Ok(())
    }

    #[test]
    fn builds_store_for_medium() -> Result<(), AppError> {
        let store = parse_storage_type(StorageMediums::Mem, None)?;
        assert_eq!(store.get_medium(), "mem");

        let store = parse_storage_type(StorageMediums::Json, None)?;
        assert_eq!(store.get_medium(), "json");

        let dir = tempfile::tempdir()?;
        let store =
            parse_storage_type(StorageMediums::Json, Some(dir.path().join("contacts.json")))?;
        assert_eq!(store.get_medium(), "json");
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a").join("b").join("contacts.json");

        create_file_parent(&nested)?;
        assert!(nested.parent().is_some_and(|p| p.is_dir()));
        Ok(())
    }
}
