pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:15} {:<30}",
        contact.name, contact.phone, contact.email
    )
}
