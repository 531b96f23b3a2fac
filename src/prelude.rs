pub use crate::cli::{command, run_app};
pub use crate::domain::{
    AddContactCommand, Command, CommandOutcome, DeleteContactCommand, EditContactCommand,
    ExecutionState,
    contact::{self, Contact},
    contact_list::ContactList,
};
pub use crate::errors::AppError;
pub use crate::logging;
pub use crate::storage::{self, ContactStore, memory::MemStorage, stores::JsonStorage};
