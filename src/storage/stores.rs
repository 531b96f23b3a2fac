use super::*;

use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Contacts saved as one JSON array in a single file.
pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else if value.is_object() {
            // Keyed by id: no stored order, fall back to creation time
            let keyed: HashMap<Uuid, Contact> = serde_json::from_value(value)?;
            let mut contacts: Vec<Contact> = keyed.into_values().collect();
            contacts.sort_by_key(|c| c.created_at);
            Ok(contacts)
        } else {
            Err(AppError::Validation(
                "Invalid JSON structure: expected object or array".to_string(),
            ))
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let json_contact = serde_json::to_string_pretty(contacts)?;
        file.write_all(json_contact.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
