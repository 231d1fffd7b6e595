//! Interactive menu front end for [`ordlist`].
//!
//! The binary reads menu choices and values line by line, keeps one
//! [`OrderedList`](ordlist::OrderedList) of [`UniversalValue`](ordlist::UniversalValue)s
//! and renders it on demand. [`run`] is the whole program with its streams passed in.

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

mod args;
mod error;
mod menu;
mod render;

use std::ffi::OsString;
use std::io::{BufRead, Write};

pub use args::{CliOptions, parse_args, write_usage};
pub use error::CliError;
pub use menu::{MenuChoice, Session};
pub use render::{write_histogram, write_modes, write_sequence};

/// Runs the program and returns its exit code.
///
/// `args` includes the program name. Menu output goes to `out`; usage and
/// argument errors go to `err`.
pub fn run<I, R, W, E>(args: I, input: &mut R, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    match run_session(args, input, out) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(err, "error: {error}");
            if matches!(error, CliError::Usage(_)) {
                let _ = write_usage(err);
            }
            error.exit_code()
        }
    }
}

fn run_session<I, R, W>(args: I, input: &mut R, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    let options = parse_args(args)?;
    if options.show_help {
        write_usage(out)?;
        return Ok(());
    }

    let config = options.parse_config()?;
    log::info!(
        "starting session (date order {}, times {})",
        config.date_order,
        if config.accept_time_of_day { "on" } else { "off" }
    );

    let mut session = Session::new(config, input, out);
    session.run()?;
    Ok(())
}
