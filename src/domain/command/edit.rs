use super::*;

/// Replaces `old_contact` with `new_contact` and saves the list once.
///
/// The replacement is a delete followed by an append, so the edited contact
/// ends up last. When `old_contact` is not in the list this is a plain add.
pub struct EditContactCommand<'a> {
    contact_list: &'a mut ContactList,
    old_contact: Contact,
    new_contact: Contact,
    store: &'a dyn ContactStore,
    outcome: Option<CommandOutcome>,
}

impl<'a> EditContactCommand<'a> {
    pub fn new(
        contact_list: &'a mut ContactList,
        old_contact: Contact,
        new_contact: Contact,
        store: &'a dyn ContactStore,
    ) -> Self {
        Self {
            contact_list,
            old_contact,
            new_contact,
            store,
            outcome: None,
        }
    }
}

impl Command for EditContactCommand<'_> {
    fn name(&self) -> &'static str {
        "EditContactCommand"
    }

    fn execute(&mut self) {
        if !self.contact_list.delete_contact(&self.old_contact) {
            log::debug!(
                "{} not in list, edit falls back to adding {}",
                self.old_contact.name,
                self.new_contact.name
            );
        }
        self.contact_list.add_contact(self.new_contact.clone());
        self.outcome = Some(persist(self.name(), self.contact_list, self.store, true));
    }

    fn outcome(&self) -> Option<CommandOutcome> {
        self.outcome
    }
}
