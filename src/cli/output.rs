//! Literal output blocks and stderr reporting
//!
//! Everything written to stdout is plain text; color is only used for
//! diagnostics on stderr (respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE).

use colored::Colorize;

/// Version shown in the banner and by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name shown in the usage block.
pub const PROGRAM_NAME: &str = "cpp_demo";

const SEPARATOR: &str = "===================================";

/// Header printed on every invocation, trailing blank line included.
pub fn banner() -> String {
    format!("{SEPARATOR}\n  C++ Demo Application\n  Version: {VERSION}\n{SEPARATOR}\n\n")
}

/// Default block when no recognized flag is given.
pub fn greeting() -> String {
    "Hello from C++ Demo!\n\
     This is a simple C++ application for testing Release App.\n\
     \n"
    .to_string()
}

/// Single line printed for `-v`/`--version`.
pub fn version_line() -> String {
    format!("Version: {VERSION}\n")
}

/// Usage block printed for `-h`/`--help`.
pub fn usage() -> String {
    format!(
        "Usage: {PROGRAM_NAME} [options]\n\
         Options:\n\
         \x20 -v, --version    Show version\n\
         \x20 -h, --help       Show this help message\n"
    )
}

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_banner_then_version_matches_package() {
        assert_eq!(VERSION, "1.0.0");
        assert!(banner().contains("  Version: 1.0.0\n"));
        assert!(banner().ends_with("===\n\n"));
    }

    #[test]
    fn given_usage_then_options_are_indented_two_spaces() {
        let usage = usage();
        let lines: Vec<&str> = usage.lines().collect();
        assert_eq!(lines[2], "  -v, --version    Show version");
        assert_eq!(lines[3], "  -h, --help       Show this help message");
    }
}
