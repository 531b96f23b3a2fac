use super::*;

/// Appends one contact and saves the list.
pub struct AddContactCommand<'a> {
    contact_list: &'a mut ContactList,
    contact: Contact,
    store: &'a dyn ContactStore,
    outcome: Option<CommandOutcome>,
}

impl<'a> AddContactCommand<'a> {
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

impl Command for AddContactCommand<'_> {
    fn name(&self) -> &'static str {
        "AddContactCommand"
    }

    fn execute(&mut self) {
        self.contact_list.add_contact(self.contact.clone());
        self.outcome = Some(persist(self.name(), self.contact_list, self.store, true));
    }

    fn outcome(&self) -> Option<CommandOutcome> {
        self.outcome
    }
}
