use super::*;

use std::cell::RefCell;
use std::io::ErrorKind;

/// Keeps the last saved list in process memory.
///
/// `failing()` builds a store whose writes are always refused, to exercise
/// the persistence-failure path of callers.
#[derive(Debug, Default)]
pub struct MemStorage {
    data: RefCell<Vec<Contact>>,
    reject_writes: bool,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            data: RefCell::new(Vec::new()),
            reject_writes: true,
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: RefCell::new(contacts),
            reject_writes: false,
        }
    }

    /// Copy of what was last saved.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.data.borrow().clone()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.snapshot())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        if self.reject_writes {
            return Err(AppError::Io(std::io::Error::new(
                ErrorKind::PermissionDenied,
                "memory store is read-only",
            )));
        }
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
