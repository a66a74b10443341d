//! CLI command messaging system
//!
//! Coloured one-line status messages for commands that run outside the TUI.

const INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn print_tagged(tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{} {}", tag, title);
    } else {
        println!("{} {}\t {}", tag, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged(INFO, title, details);
}

/// Warnings go to stderr so they never mix into `snapshot --json` output.
pub fn print_warn(title: &str, details: &str) {
    if details.is_empty() {
        eprintln!("{} {}", WARN, title);
    } else {
        eprintln!("{} {}\t {}", WARN, title, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(SUCCESS, title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
