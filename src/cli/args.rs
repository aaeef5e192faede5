//! CLI argument definitions using clap

use std::ffi::{OsStr, OsString};

use clap::Parser;

/// Demo application: prints a banner, then a greeting, the version or usage text
///
/// Built-in help and version flags are disabled: `-h`/`--help` and
/// `-v`/`--version` are matched by hand against the first token so that any
/// other token falls through to the greeting instead of being rejected.
#[derive(Parser, Debug, Default, Clone, PartialEq, Eq)]
#[command(name = "cpp_demo")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Tokens as given; only the first is inspected
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// What to print after the banner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    #[default]
    Greet,
    Version,
    Help,
}

impl Action {
    /// Exact, case-sensitive match of the first token.
    pub fn from_arg(arg: Option<&OsStr>) -> Self {
        match arg {
            Some(a) if a == "--version" || a == "-v" => Action::Version,
            Some(a) if a == "--help" || a == "-h" => Action::Help,
            _ => Action::Greet,
        }
    }
}

impl Cli {
    /// Parse the argument list without the program name.
    ///
    /// A `--` escape is inserted in front so that clap takes every token
    /// verbatim, including a literal `--` given by the user.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from("cpp_demo"), OsString::from("--")]
            .into_iter()
            .chain(args.into_iter().map(Into::into));
        Cli::try_parse_from(argv)
    }

    /// Action selected by the first token; later tokens are never read.
    pub fn action(&self) -> Action {
        Action::from_arg(self.args.first().map(OsString::as_os_str))
    }
}
