use crate::{
    cli::display_contact,
    prelude::{
        AddContactCommand, AppError, Command, CommandOutcome, Contact, ContactList, ContactStore,
        DeleteContactCommand, EditContactCommand,
        command::{Cli, Commands},
        contact::Utc,
        logging::{LogConfig, init_logging, parse_level},
        storage::{StorageMediums, parse_storage_type},
    },
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    // .env must be loaded before clap reads the `env =` fallbacks
    dotenv().ok();
    let cli = Cli::parse();

    let log_config = LogConfig::new(&cli.log_path).with_level(parse_level(&cli.log_level)?);
    init_logging(&log_config)?;

    let medium = StorageMediums::from(&cli.storage_choice)?;
    let store = parse_storage_type(medium, cli.storage_path.clone())?;
    log::info!("Current storage choice is: {}", medium.is_which());

    let mut contact_list = ContactList::new();
    contact_list.load_contacts(store.as_ref())?;

    dispatch(cli.command, &mut contact_list, store.as_ref())
}

fn dispatch(
    command: Commands,
    contact_list: &mut ContactList,
    store: &dyn ContactStore,
) -> Result<(), AppError> {
    match command {
        Commands::Add { name, phone, email } => {
            let new_contact = Contact::new(name, phone).with_email(email.unwrap_or_default());
            new_contact.validate()?;

            if contact_list.contains(&new_contact) {
                return Err(AppError::Validation(
                    "Contact with this name and number already exist".to_string(),
                ));
            }

            execute(&mut AddContactCommand::new(contact_list, new_contact, store))?;
            println!("Contact added successfully");
            Ok(())
        }

        Commands::List => {
            if contact_list.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, contact) in contact_list.contacts().iter().enumerate() {
                println!("{}", display_contact(i + 1, contact));
            }
            Ok(())
        }

        Commands::Edit {
            name,
            phone,
            new_name,
            new_phone,
            new_email,
        } => {
            let Some(index) = contact_list.index_of(&Contact::new(name, phone)) else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };
            let old_contact = contact_list.contacts()[index].clone();

            let mut new_contact = old_contact.clone();
            if let Some(name) = new_name {
                new_contact.name = name;
            }
            if let Some(phone) = new_phone {
                new_contact.phone = phone;
            }
            if let Some(email) = new_email {
                new_contact.email = email;
            }
            new_contact.updated_at = Utc::now();
            new_contact.validate()?;

            if new_contact != old_contact && contact_list.contains(&new_contact) {
                return Err(AppError::Validation(
                    "Contact with this name and number already exist".to_string(),
                ));
            }

            execute(&mut EditContactCommand::new(
                contact_list,
                old_contact,
                new_contact,
                store,
            ))?;
            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { name, phone } => {
            let target = match phone {
                Some(phone) => {
                    let desired = Contact::new(name, phone);
                    contact_list
                        .index_of(&desired)
                        .map(|idx| contact_list.contacts()[idx].clone())
                }
                None => {
                    let matches: Vec<&Contact> = contact_list
                        .contacts()
                        .iter()
                        .filter(|c| c.name == name)
                        .collect();

                    if matches.len() > 1 {
                        println!("Deleting failed");
                        println!(
                            "Found multiple contacts with this name: {}, please provide number. See help",
                            name
                        );
                        return Ok(());
                    }
                    matches.first().map(|&c| c.clone())
                }
            };

            let Some(target) = target else {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            };

            let outcome = execute(&mut DeleteContactCommand::new(contact_list, target, store))?;
            if !outcome.mutated {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                return Ok(());
            }
            println!("Contact deleted successfully");
            Ok(())
        }
    }
}

// Runs a command once and turns a failed save into an error for the user.
fn execute(command: &mut dyn Command) -> Result<CommandOutcome, AppError> {
    command.execute();

    match command.outcome() {
        Some(outcome) if outcome.persisted => Ok(outcome),
        _ => Err(AppError::Persistence(command.name().to_string())),
    }
}
