use citas::api::{AppointmentView, CitasApi, CmdMessage, CreateRequest, MessageLevel};
use citas::error::Result;
use citas::model::AppointmentId;
use citas::store::fs::CsvStore;
use clap::Parser;
use colored::*;
use dialoguer::Select;
use unicode_width::UnicodeWidthStr;

mod args;
mod prompt;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = CsvStore::open(&cli.file)?;
    let mut api = CitasApi::new(store);

    match cli.command {
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Add) => handle_add(&mut api),
        Some(Commands::Update { id }) => handle_update(&mut api, &AppointmentId::new(id)),
        Some(Commands::Delete { id }) => handle_delete(&mut api, &AppointmentId::new(id)),
        None => menu_loop(&mut api),
    }
}

fn menu_loop(api: &mut CitasApi<CsvStore>) -> Result<()> {
    println!("{}", "OdontoLeon Clínica Dental".bold());
    loop {
        let items = [
            "Show appointments",
            "Schedule appointment",
            "Update appointment",
            "Delete appointment",
            "Quit",
        ];
        let selection = Select::new().items(&items).default(0).interact()?;

        let outcome = match selection {
            0 => handle_list(api),
            1 => handle_add(api),
            2 => prompt::appointment_id("Appointment ID to update")
                .and_then(|id| handle_update(api, &id)),
            3 => prompt::appointment_id("Appointment ID to delete")
                .and_then(|id| handle_delete(api, &id)),
            _ => break,
        };

        // Bad input and unknown IDs just come back to the menu; file
        // trouble ends the session.
        if let Err(e) = outcome {
            if !e.is_recoverable() {
                return Err(e);
            }
            println!("{}", e.to_string().red());
        }
    }
    Ok(())
}

fn handle_list(api: &CitasApi<CsvStore>) -> Result<()> {
    let result = api.list()?;
    print_table(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(api: &mut CitasApi<CsvStore>) -> Result<()> {
    let request = CreateRequest {
        patient_name: prompt::patient_name()?,
        date: prompt::future_date()?,
        time: prompt::time_of_day()?,
        dentist_choice: prompt::dentist_choice()?,
        reason_choice: prompt::reason_choice()?,
    };
    let result = api.create(request)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &mut CitasApi<CsvStore>, id: &AppointmentId) -> Result<()> {
    let current = api.get(id)?;
    println!("Leave a field blank to keep its current value.");

    let patch = citas::api::AppointmentPatch {
        patient_name: prompt::optional_patient_name(&current.patient_name)?,
        dentist_choice: prompt::optional_dentist_choice(current.dentist)?,
        reason_choice: prompt::optional_reason_choice(current.reason)?,
    };
    let result = api.update(id, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut CitasApi<CsvStore>, id: &AppointmentId) -> Result<()> {
    let result = api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TABLE_HEADER: [&str; 7] = [
    "ID", "Paciente", "Fecha", "Hora", "Duración", "Faltan", "Estado",
];

fn print_table(views: &[AppointmentView]) {
    if views.is_empty() {
        println!("No appointments on the book.");
        return;
    }

    let rows: Vec<[String; 7]> = views
        .iter()
        .map(|view| {
            let a = &view.appointment;
            [
                a.id.to_string(),
                a.patient_name.clone(),
                a.date.to_string(),
                a.time.format("%H:%M").to_string(),
                format!("{} min", a.duration_minutes),
                view.remaining(),
                a.status.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = TABLE_HEADER.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    print_row(&TABLE_HEADER.map(String::from), &widths, true);
    for row in &rows {
        print_row(row, &widths, false);
    }
}

fn print_row(cells: &[String; 7], widths: &[usize], header: bool) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(cell);
        // format! width counts chars, not display columns
        line.push_str(&" ".repeat(width.saturating_sub(cell.width()) + 2));
    }
    let line = line.trim_end();
    if header {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}
