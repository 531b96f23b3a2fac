use sharing_contacts::prelude::{
    AddContactCommand, Command, CommandOutcome, Contact, ContactList, ContactStore,
    DeleteContactCommand, EditContactCommand, ExecutionState, JsonStorage, MemStorage,
};

#[test]
fn add_to_empty_list_then_persist() {
    let mut list = ContactList::new();
    let store = MemStorage::new();

    let mut command = AddContactCommand::new(&mut list, Contact::new("Alice", "555-1111"), &store);
    command.execute();
    assert!(command.is_executed());

    assert_eq!(list.contacts(), &[Contact::new("Alice", "555-1111")]);
}

#[test]
fn add_keeps_contact_in_memory_when_save_fails() {
    let mut list = ContactList::new();
    let store = MemStorage::failing();
    let alice = Contact::new("Alice", "555-1111");

    let mut command = AddContactCommand::new(&mut list, alice.clone(), &store);
    command.execute();
    assert!(!command.is_executed());
    assert_eq!(command.state(), ExecutionState::Executed { persisted: false });

    assert!(list.contains(&alice));
}

#[test]
fn delete_removes_contact() {
    let bob = Contact::new("Bob", "555-2222");
    let mut list =
        ContactList::from_contacts(vec![Contact::new("Alice", "555-1111"), bob.clone()]);
    let store = MemStorage::new();

    let mut command = DeleteContactCommand::new(&mut list, bob.clone(), &store);
    command.execute();
    assert!(command.is_executed());

    assert!(!list.contains(&bob));
}

#[test]
fn second_delete_is_a_no_op() {
    let mut list = ContactList::from_contacts(vec![Contact::new("Alice", "555-1111")]);
    let store = MemStorage::new();

    let mut command =
        DeleteContactCommand::new(&mut list, Contact::new("Alice", "555-1111"), &store);
    command.execute();
    command.execute();
    assert_eq!(
        command.outcome(),
        Some(CommandOutcome {
            mutated: false,
            persisted: true
        })
    );

    assert!(list.is_empty());
}

#[test]
fn edit_replaces_old_with_new() {
    let mut list = ContactList::from_contacts(vec![Contact::new("Bob", "555-2222")]);
    let store = MemStorage::new();

    let mut command = EditContactCommand::new(
        &mut list,
        Contact::new("Bob", "555-2222"),
        Contact::new("Bob", "555-3333"),
        &store,
    );
    command.execute();
    assert!(command.is_executed());

    assert_eq!(list.contacts(), &[Contact::new("Bob", "555-3333")]);
    assert!(!list.contains(&Contact::new("Bob", "555-2222")));
}

#[test]
fn commands_write_through_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStorage::new(dir.path().join("contacts.json"));
    let mut list = ContactList::new();

    AddContactCommand::new(&mut list, Contact::new("Alice", "555-1111"), &store).execute();
    AddContactCommand::new(&mut list, Contact::new("Bob", "555-2222"), &store).execute();
    EditContactCommand::new(
        &mut list,
        Contact::new("Alice", "555-1111"),
        Contact::new("Alice", "555-9999"),
        &store,
    )
    .execute();
    DeleteContactCommand::new(&mut list, Contact::new("Bob", "555-2222"), &store).execute();

    let mut reloaded = ContactList::new();
    reloaded.load_contacts(&store).unwrap();
    assert_eq!(reloaded, list);
    assert_eq!(reloaded.contacts(), &[Contact::new("Alice", "555-9999")]);
    assert_eq!(store.get_medium(), "json");
}
