//! Contact mutations wrapped as commands.
//!
//! A command borrows the caller's [`ContactList`] and a [`ContactStore`],
//! applies one mutation, then writes the whole list back. Whether the write
//! succeeded is what [`Command::is_executed`] reports; the in-memory change
//! is kept either way.

mod add;
mod delete;
mod edit;

use super::*;

pub use add::AddContactCommand;
pub use delete::DeleteContactCommand;
pub use edit::EditContactCommand;

/// Where a command is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionState {
    #[default]
    Pending,
    Executed { persisted: bool },
}

impl ExecutionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ExecutionState::Pending)
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, ExecutionState::Executed { persisted: true })
    }
}

/// Both halves of a run: whether the list changed and whether it was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    pub mutated: bool,
    pub persisted: bool,
}

pub trait Command {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Mutates the list, then persists it. Never fails; the result of the
    /// save is recorded instead.
    fn execute(&mut self);

    /// `None` until the first `execute()`.
    fn outcome(&self) -> Option<CommandOutcome>;

    fn state(&self) -> ExecutionState {
        match self.outcome() {
            None => ExecutionState::Pending,
            Some(outcome) => ExecutionState::Executed {
                persisted: outcome.persisted,
            },
        }
    }

    /// `true` only when the last run saved the list successfully.
    fn is_executed(&self) -> bool {
        self.state().is_persisted()
    }
}

impl<'a> std::fmt::Debug for dyn Command + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("state", &self.state())
            .finish()
    }
}

// Shared tail of every command: save once, log, build the outcome.
fn persist(
    name: &'static str,
    contact_list: &ContactList,
    store: &dyn ContactStore,
    mutated: bool,
) -> CommandOutcome {
    let persisted = contact_list.save_contacts(store);

    if persisted {
        log::debug!("{} executed (list changed: {})", name, mutated);
    } else {
        log::warn!(
            "{} could not save the contact list (list changed: {}); memory and storage may differ",
            name,
            mutated
        );
    }

    CommandOutcome { mutated, persisted }
}
