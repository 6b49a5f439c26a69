//! Labelled console output.
//!
//! Every operator-facing line is `<label> <message>` with a coloured label.
//! Errors and warnings go to stderr.

use console::{style, StyledObject};

fn labeled(label: StyledObject<&str>, message: &str) -> String {
    format!("{} {}", label, message)
}

pub fn format_success(message: &str) -> String {
    labeled(style("success").green(), message)
}

pub fn format_error(message: &str) -> String {
    labeled(style("error").red(), message)
}

pub fn format_warning(message: &str) -> String {
    labeled(style("warn").yellow(), message)
}

pub fn format_info(message: &str) -> String {
    labeled(style("info").cyan(), message)
}

/// Print a success line.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Print an error line to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a warning line to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{}", format_warning(message));
}

/// Print an informational line.
pub fn display_info(message: &str) {
    println!("{}", format_info(message));
}

/// Display the commands a dry run would have executed, in order.
pub fn display_planned_commands(commands: &[String]) {
    println!("\n{}", style("Planned release commands:").bold());
    for (i, command) in commands.iter().enumerate() {
        println!("  {}. {}", i + 1, style(command).cyan());
    }
}
