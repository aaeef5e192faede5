pub mod cli;
pub mod exitcode;
pub mod util;
