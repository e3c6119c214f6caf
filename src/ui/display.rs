use colored::{ColoredString, Colorize};

pub fn format_header(title: &str) -> ColoredString {
    format!("=== {} ===", title).bright_blue().bold()
}

pub fn format_error(message: &str) -> ColoredString {
    message.bright_red()
}

/// Print one titled block of assistant output.
pub fn print_section(title: &str, body: &str) {
    println!("\n{}", format_header(title));
    println!("{}", body);
}
