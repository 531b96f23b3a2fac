use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::DEFAULT_LOG_PATH;

#[derive(Parser, Debug)]
#[command(name = "sharing-contacts", version, about = "Contacts for the sharing app")]
pub struct Cli {
    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Path of the JSON contacts file
    #[arg(long, env = "JSON_STORAGE_PATH")]
    pub storage_path: Option<PathBuf>,

    /// Path of the log file
    #[arg(long, env = "LOG_PATH", default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("info"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,
    },
    /// List contacts in the order they were stored
    List,
    /// Edit the data of an existing contact
    /// Provide current contact name and number
    /// followed by as many of the new fields as you wish to update
    Edit {
        /// Contact current name
        #[arg(long)]
        name: String,

        /// Contact current phone number
        #[arg(long)]
        phone: String,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,
    },
    /// Delete a contact by name
    /// provide optional number in cases where name matches multiple contacts
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,

        /// Contact number to delete
        #[arg(long)]
        phone: Option<String>,
    },
}
