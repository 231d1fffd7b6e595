use std::ffi::OsString;
use std::io::{self, Write};

use ordlist::{DateOrder, ParseConfig};

use crate::error::CliError;

/// Settings taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Explicit `--date-order`; falls back to `ORDLIST_DATE_ORDER` when absent.
    pub date_order: Option<DateOrder>,
    /// `--accept-times`: bare `HH:MM[:SS]` input becomes a timestamp.
    pub accept_times: bool,
    /// `-h` / `--help` was given.
    pub show_help: bool,
}

impl CliOptions {
    /// Resolves the parse settings, consulting the environment for the date order
    /// when no flag was given.
    pub fn parse_config(&self) -> Result<ParseConfig, CliError> {
        let date_order = match self.date_order {
            Some(order) => order,
            None => DateOrder::from_env()?.unwrap_or_default(),
        };
        Ok(ParseConfig::builder()
            .date_order(date_order)
            .accept_time_of_day(self.accept_times)
            .build())
    }
}

/// Parses process arguments. The first item is the program name and is skipped.
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options = CliOptions::default();
    let mut iter = args.into_iter().skip(1);

    while let Some(arg) = iter.next() {
        let arg = arg.to_string_lossy().into_owned();
        match arg.as_str() {
            "-h" | "--help" => options.show_help = true,
            "--accept-times" => options.accept_times = true,
            "--date-order" => {
                let value = iter.next().ok_or_else(|| {
                    CliError::Usage("missing value for `--date-order`".to_string())
                })?;
                options.date_order = Some(value.to_string_lossy().parse()?);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--date-order=") {
                    options.date_order = Some(value.parse()?);
                } else {
                    return Err(CliError::Usage(format!("unknown option `{arg}`")));
                }
            }
        }
    }

    Ok(options)
}

/// Writes the usage text.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: ordlist [OPTIONS]")?;
    writeln!(out)?;
    writeln!(out, "Interactive ordered list of numbers, dates and text.")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(
        out,
        "  --date-order <ORDER>  How to read ambiguous dates: dmy (default), mdy or ymd"
    )?;
    writeln!(
        out,
        "  --accept-times        Read bare HH:MM[:SS] input as a time on 1970-01-01 UTC"
    )?;
    writeln!(out, "  -h, --help            Print this help and exit")?;
    writeln!(out)?;
    writeln!(out, "Environment:")?;
    writeln!(
        out,
        "  ORDLIST_DATE_ORDER    Date order used when --date-order is not given"
    )?;
    writeln!(
        out,
        "  RUST_LOG              Log filter for diagnostics on stderr (default: warn)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("ordlist")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_date_order_forms() {
        let spaced = parse_args(args(&["--date-order", "mdy"])).unwrap();
        assert_eq!(spaced.date_order, Some(DateOrder::MonthFirst));

        let joined = parse_args(args(&["--date-order=ymd", "--accept-times"])).unwrap();
        assert_eq!(joined.date_order, Some(DateOrder::YearFirst));
        assert!(joined.accept_times);
    }

    #[test]
    fn test_explicit_order_reaches_config() {
        let options = parse_args(args(&["--date-order", "mdy", "--accept-times"])).unwrap();
        let config = options.parse_config().unwrap();
        assert_eq!(config.date_order, DateOrder::MonthFirst);
        assert!(config.accept_time_of_day);
    }

    #[test]
    fn test_help_flag() {
        assert!(parse_args(args(&["-h"])).unwrap().show_help);
        assert!(parse_args(args(&["--help"])).unwrap().show_help);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_args(args(&["--date-order"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(args(&["--date-order", "sideways"])),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            parse_args(args(&["--bogus"])),
            Err(CliError::Usage(msg)) if msg.contains("--bogus")
        ));
    }

    #[test]
    fn test_usage_mentions_every_flag() {
        let mut out = Vec::new();
        write_usage(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for flag in ["--date-order", "--accept-times", "--help", "ORDLIST_DATE_ORDER"] {
            assert!(text.contains(flag), "missing {flag}");
        }
    }
}
