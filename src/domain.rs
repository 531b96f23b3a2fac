pub mod command;
pub mod contact;
pub mod contact_list;

use crate::errors::AppError;
use crate::storage::ContactStore;
use uuid::Uuid;

pub use command::{
    AddContactCommand, Command, CommandOutcome, DeleteContactCommand, EditContactCommand,
    ExecutionState,
};
pub use contact::Contact;
pub use contact_list::ContactList;
