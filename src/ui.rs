use console::style;

/// Print an error to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Print a result to stdout
pub fn display_output(text: &str) {
    println!("{}", text);
}
