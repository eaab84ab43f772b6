use colored::Colorize;
use nota::api::{CmdMessage, MessageLevel};
use nota::error::NotaError;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_notes(notes: &[String]) {
    for note in notes {
        println!("{}", note);
    }
}

pub fn print_error(error: &NotaError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
