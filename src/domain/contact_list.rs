use super::*;

/// The caller-owned, insertion-ordered set of contacts the commands mutate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContactList {
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn contains(&self, contact: &Contact) -> bool {
        self.contacts.iter().any(|cont| cont == contact)
    }

    pub fn index_of(&self, contact: &Contact) -> Option<usize> {
        self.contacts.iter().position(|cont| cont == contact)
    }

    pub fn add_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes the first contact equal to `contact`.
    /// Returns `false` and leaves the list untouched when there is none.
    pub fn delete_contact(&mut self, contact: &Contact) -> bool {
        match self.index_of(contact) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.contacts.iter().map(|c| c.name.as_str()).collect()
    }

    /// Writes the whole list to `store`. Any storage error is logged and
    /// reported as `false`.
    pub fn save_contacts(&self, store: &dyn ContactStore) -> bool {
        match store.save(&self.contacts) {
            Ok(()) => {
                log::debug!(
                    "Saved {} contacts to {} storage",
                    self.contacts.len(),
                    store.get_medium()
                );
                true
            }
            Err(e) => {
                log::warn!(
                    "Saving contacts to {} storage failed: {}",
                    store.get_medium(),
                    e
                );
                false
            }
        }
    }

    pub fn load_contacts(&mut self, store: &dyn ContactStore) -> Result<(), AppError> {
        self.contacts = store.load()?;
        log::debug!(
            "Loaded {} contacts from {} storage",
            self.contacts.len(),
            store.get_medium()
        );
        Ok(())
    }
}
