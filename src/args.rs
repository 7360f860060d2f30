use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "citas")]
#[command(about = "Appointment book for a small dental clinic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the appointment book CSV file
    #[arg(short, long, global = true, default_value = "citas.csv")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List appointments with the time remaining until each one
    #[command(alias = "ls")]
    List,

    /// Schedule a new appointment (prompts for each field)
    #[command(alias = "new")]
    Add,

    /// Update the patient name, dentist or reason of an appointment
    Update {
        /// ID of the appointment (6 characters, e.g. K2X9QD)
        id: String,
    },

    /// Delete an appointment
    #[command(alias = "rm")]
    Delete {
        /// ID of the appointment (6 characters, e.g. K2X9QD)
        id: String,
    },
}
