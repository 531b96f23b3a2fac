use super::*;

/// Removes one contact, if present, and saves the list.
pub struct DeleteContactCommand<'a> {
    contact_list: &'a mut ContactList,
    contact: Contact,
    store: &'a dyn ContactStore,
    outcome: Option<CommandOutcome>,
}

impl<'a> DeleteContactCommand<'a> {
    pub fn new(
        contact_list: &'a mut ContactList,
        contact: Contact,
        store: &'a dyn ContactStore,
    ) -> Self {
        Self {
            contact_list,
            contact,
            store,
            outcome: None,
        }
    }
}

impl Command for DeleteContactCommand<'_> {
    fn name(&self) -> &'static str {
        "DeleteContactCommand"
    }

    // An absent contact still triggers the save; only `mutated` tells them apart.
    fn execute(&mut self) {
        let removed = self.contact_list.delete_contact(&self.contact);
        if !removed {
            log::debug!("{} not in list, nothing to delete", self.contact.name);
        }
        self.outcome = Some(persist(self.name(), self.contact_list, self.store, removed));
    }

    fn outcome(&self) -> Option<CommandOutcome> {
        self.outcome
    }
}
