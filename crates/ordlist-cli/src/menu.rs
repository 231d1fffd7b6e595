//! The interactive menu loop.

use std::io::{self, BufRead, Write};

use ordlist::{OrderedList, ParseConfig, UniversalValue};

use crate::render::{write_histogram, write_modes, write_sequence};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ShowForward,
    ShowBackward,
    SortDescending,
    ShowModes,
    ShowHistogram,
    Search,
    RemoveLast,
    ClearAll,
    Quit,
}

impl MenuChoice {
    /// Every choice in menu order.
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::Add,
        MenuChoice::ShowForward,
        MenuChoice::ShowBackward,
        MenuChoice::SortDescending,
        MenuChoice::ShowModes,
        MenuChoice::ShowHistogram,
        MenuChoice::Search,
        MenuChoice::RemoveLast,
        MenuChoice::ClearAll,
        MenuChoice::Quit,
    ];

    /// Maps the typed option (`1`-`9`, `0`) to a choice.
    pub fn from_input(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::ShowForward,
            "3" => MenuChoice::ShowBackward,
            "4" => MenuChoice::SortDescending,
            "5" => MenuChoice::ShowModes,
            "6" => MenuChoice::ShowHistogram,
            "7" => MenuChoice::Search,
            "8" => MenuChoice::RemoveLast,
            "9" => MenuChoice::ClearAll,
            "0" => MenuChoice::Quit,
            _ => return None,
        };
        Some(choice)
    }

    /// Key the user types for this choice.
    pub fn key(self) -> char {
        match self {
            MenuChoice::Add => '1',
            MenuChoice::ShowForward => '2',
            MenuChoice::ShowBackward => '3',
            MenuChoice::SortDescending => '4',
            MenuChoice::ShowModes => '5',
            MenuChoice::ShowHistogram => '6',
            MenuChoice::Search => '7',
            MenuChoice::RemoveLast => '8',
            MenuChoice::ClearAll => '9',
            MenuChoice::Quit => '0',
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a value",
            MenuChoice::ShowForward => "Show list forward",
            MenuChoice::ShowBackward => "Show list backward",
            MenuChoice::SortDescending => "Sort descending and show",
            MenuChoice::ShowModes => "Show mode(s)",
            MenuChoice::ShowHistogram => "Show frequency histogram",
            MenuChoice::Search => "Search for a value",
            MenuChoice::RemoveLast => "Remove last value",
            MenuChoice::ClearAll => "Clear the list",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// A menu session over one list.
pub struct Session<R, W> {
    list: OrderedList<UniversalValue>,
    config: ParseConfig,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: ParseConfig, input: R, out: W) -> Self {
        Self {
            list: OrderedList::new(),
            config,
            input,
            out,
        }
    }

    /// The list as it stands.
    pub fn list(&self) -> &OrderedList<UniversalValue> {
        &self.list
    }

    /// Runs the menu until the user quits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                log::debug!("input closed, leaving menu");
                writeln!(self.out)?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                log::debug!("rejected menu input {:?}", line.trim());
                writeln!(self.out, "Invalid option, try again.")?;
                continue;
            };

            log::debug!("menu choice {choice:?}");
            if !self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    /// Performs one choice. Returns `false` when the session should end.
    pub fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::ShowForward => {
                write_sequence(&mut self.out, "Forward", self.list.forward())?;
            }
            MenuChoice::ShowBackward => {
                write_sequence(&mut self.out, "Backward", self.list.backward())?;
            }
            MenuChoice::SortDescending => {
                self.list.sort_descending_in_place();
                write_sequence(&mut self.out, "Descending", self.list.forward())?;
            }
            MenuChoice::ShowModes => write_modes(&mut self.out, &self.list)?,
            MenuChoice::ShowHistogram => write_histogram(&mut self.out, &self.list)?,
            MenuChoice::Search => self.search()?,
            MenuChoice::RemoveLast => {
                if self.list.remove_last() {
                    writeln!(self.out, "Last value removed.")?;
                } else {
                    writeln!(self.out, "Empty list, nothing to remove.")?;
                }
                write_sequence(&mut self.out, "Current list", self.list.forward())?;
            }
            MenuChoice::ClearAll => {
                self.list.clear();
                writeln!(self.out, "List cleared.")?;
                write_sequence(&mut self.out, "Current list", self.list.forward())?;
            }
            MenuChoice::Quit => {
                writeln!(self.out, "Goodbye.")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Value to add: ")? else {
            return Ok(());
        };
        let value = UniversalValue::parse_with(&line, &self.config);
        writeln!(self.out, "Added {value} ({}).", value.kind().type_name())?;
        self.list.add_sorted(value);
        Ok(())
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(line) = self.prompt("Value to search: ")? else {
            return Ok(());
        };
        let value = UniversalValue::parse_with(&line, &self.config);
        if self.list.contains(&value) {
            writeln!(self.out, "{value} is in the list.")
        } else {
            writeln!(self.out, "{value} is not in the list.")
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "===== Ordered list =====")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prints `message` and reads one line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
