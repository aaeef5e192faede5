use std::io::Write;

use tracing::{debug, instrument};

use crate::cli::args::{Action, Cli};
use crate::cli::error::CliResult;
use crate::cli::output;

/// Write the banner followed by the block selected by the first argument.
#[instrument(skip(out))]
pub fn execute_command(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    let action = cli.action();
    debug!("action: {:?}", action);

    out.write_all(output::banner().as_bytes())?;
    let block = match action {
        Action::Version => output::version_line(),
        Action::Help => output::usage(),
        Action::Greet => output::greeting(),
    };
    out.write_all(block.as_bytes())?;
    out.flush()?;
    Ok(())
}
