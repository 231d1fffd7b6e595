//! Text rendering of list contents.

use std::io::{self, Write};

use ordlist::{OrderedList, UniversalValue};

/// Writes `title: v1 v2 ...`, or `title: (empty list)` when there is nothing to show.
pub fn write_sequence<'a, W, I>(out: &mut W, title: &str, values: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a UniversalValue>,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return writeln!(out, "{title}: (empty list)");
    }

    write!(out, "{title}:")?;
    for value in values {
        write!(out, " {value}")?;
    }
    writeln!(out)
}

/// Writes the most frequent value(s) with their shared count.
pub fn write_modes<W: Write>(out: &mut W, list: &OrderedList<UniversalValue>) -> io::Result<()> {
    let modes = list.get_modes();
    if modes.is_empty() {
        return writeln!(out, "Empty list.");
    }

    let joined = modes
        .values
        .iter()
        .map(UniversalValue::raw)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Mode(s) (frequency {}): {joined}", modes.max_frequency)
}

/// Writes one `value ***` bar per distinct value, ascending.
pub fn write_histogram<W: Write>(
    out: &mut W,
    list: &OrderedList<UniversalValue>,
) -> io::Result<()> {
    let entries = list.get_frequencies_ascending();
    if entries.is_empty() {
        return writeln!(out, "Empty list.");
    }

    for (value, count) in entries {
        writeln!(out, "{value} {}", "*".repeat(count))?;
    }
    Ok(())
}
