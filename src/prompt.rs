// Prompt loops for the interactive flows. Each loop keeps asking until
// the validator accepts the input: validators only ever report
// recoverable failures, so nothing here escalates.

use chrono::{Local, NaiveDate, NaiveTime};
use citas::error::Result;
use citas::model::{AppointmentId, Dentist, Reason};
use citas::validate;
use colored::*;
use dialoguer::Input;

pub fn patient_name() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("Patient name")
            .allow_empty(true)
            .interact_text()?;
        match validate::patient_name(&input) {
            Ok(name) => return Ok(name),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

/// Date prompt with the early rejection: a date before today can never
/// yield a future appointment, so it is bounced before asking the time.
pub fn future_date() -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("Date (YYYY-MM-DD)")
            .interact_text()?;
        match validate::date(&input) {
            Ok(date) if date < Local::now().date_naive() => {
                println!("{}", "The date must be today or later".red());
            }
            Ok(date) => return Ok(date),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn time_of_day() -> Result<NaiveTime> {
    loop {
        let input: String = Input::new().with_prompt("Time (HH:MM)").interact_text()?;
        match validate::time(&input) {
            Ok(time) => return Ok(time),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn dentist_choice() -> Result<usize> {
    println!("Select a dentist:");
    for (i, dentist) in Dentist::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, dentist);
    }
    loop {
        let input: String = Input::new().with_prompt("Option").interact_text()?;
        match validate::dentist_choice(&input) {
            Ok(choice) => return Ok(choice),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn reason_choice() -> Result<usize> {
    println!("Select a reason:");
    for (i, reason) in Reason::ALL.iter().enumerate() {
        println!("  {}. {} ({} min)", i + 1, reason, reason.duration_minutes());
    }
    loop {
        let input: String = Input::new().with_prompt("Option").interact_text()?;
        match validate::reason_choice(&input) {
            Ok(choice) => return Ok(choice),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn appointment_id(prompt: &str) -> Result<AppointmentId> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(AppointmentId::new(input.trim().to_string()))
}

// Update prompts: blank keeps the stored value.

pub fn optional_patient_name(current: &str) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("Patient name [{current}]"))
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match validate::patient_name(&input) {
            Ok(name) => return Ok(Some(name)),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn optional_dentist_choice(current: Dentist) -> Result<Option<usize>> {
    println!("Select a dentist (blank keeps {current}):");
    for (i, dentist) in Dentist::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, dentist);
    }
    loop {
        let input: String = Input::new()
            .with_prompt("Option")
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match validate::dentist_choice(&input) {
            Ok(choice) => return Ok(Some(choice)),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

pub fn optional_reason_choice(current: Reason) -> Result<Option<usize>> {
    println!("Select a reason (blank keeps {current}):");
    for (i, reason) in Reason::ALL.iter().enumerate() {
        println!("  {}. {} ({} min)", i + 1, reason, reason.duration_minutes());
    }
    loop {
        let input: String = Input::new()
            .with_prompt("Option")
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match validate::reason_choice(&input) {
            Ok(choice) => return Ok(Some(choice)),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}
