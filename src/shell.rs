//! Line-oriented interactive shell over the journal.
//!
//! The shell prints a numbered menu, reads the operator's choice and
//! forwards it to the journal. It is generic over its input and output so
//! it can be driven from a terminal or from a test buffer.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::data::{Category, Event, EventId, Journal};

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1: list every event.
    ListAll,
    /// 2: list events of one category.
    ListByCategory,
    /// 3: delete an event by its code.
    Delete,
    /// 4: report the number of events.
    Count,
    /// 5: leave the session.
    Exit,
}

impl MenuChoice {
    /// All choices, in menu order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ListAll,
        MenuChoice::ListByCategory,
        MenuChoice::Delete,
        MenuChoice::Count,
        MenuChoice::Exit,
    ];

    /// Menu number of this choice.
    pub fn number(self) -> u32 {
        match self {
            MenuChoice::ListAll => 1,
            MenuChoice::ListByCategory => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Count => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Menu text of this choice.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListAll => "List all events",
            MenuChoice::ListByCategory => "List events by type",
            MenuChoice::Delete => "Remove an event",
            MenuChoice::Count => "Count events",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse an operator answer such as `"3"` or `" 3 \n"`.
    pub fn parse(input: &str) -> Option<Self> {
        let number: u32 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}

/// Format one event the way every listing prints it.
pub fn format_event(event: &Event) -> String {
    format!(
        "Code: {} | Timestamp: {} | Type: {}",
        event.id, event.timestamp, event.category
    )
}

/// Interactive menu loop bound to a journal.
pub struct Shell<'a, R, W> {
    journal: &'a mut Journal,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell reading commands from `input` and writing to `output`.
    pub fn new(journal: &'a mut Journal, input: R, output: W) -> Self {
        Self {
            journal,
            input,
            output,
        }
    }

    /// Run the menu until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(answer) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                writeln!(self.output, "Invalid option. Try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            if !self.execute(choice)? {
                return Ok(());
            }
        }
    }

    /// Carry out one menu choice. Returns false when the session ends.
    fn execute(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::ListAll => self.list_all()?,
            MenuChoice::ListByCategory => {
                self.prompt("Enter the event type to list (connection or disconnection): ")?;
                let Some(phrase) = self.read_line()? else {
                    return Ok(false);
                };
                self.list_by_phrase(&phrase)?;
            }
            MenuChoice::Delete => {
                self.prompt("Enter the code of the event to remove: ")?;
                let Some(code) = self.read_line()? else {
                    return Ok(false);
                };
                self.delete(&code)?;
            }
            MenuChoice::Count => self.count()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Print every live event in journal order.
    pub fn list_all(&mut self) -> io::Result<()> {
        if self.journal.is_empty() {
            return writeln!(self.output, "No events recorded.");
        }

        writeln!(self.output, "Event list:")?;
        for event in self.journal.iter() {
            writeln!(self.output, "{}", format_event(event))?;
        }
        Ok(())
    }

    /// Print the events whose category the operator's phrase selects.
    ///
    /// A phrase that names no category simply matches nothing.
    pub fn list_by_phrase(&mut self, phrase: &str) -> io::Result<()> {
        if self.journal.is_empty() {
            return writeln!(self.output, "No events recorded.");
        }

        let phrase = phrase.split_whitespace().next().unwrap_or("");
        writeln!(self.output, "Events of type '{}':", phrase)?;

        let mut found = false;
        if let Some(category) = Category::from_phrase(phrase) {
            for event in self.journal.by_category(category) {
                writeln!(self.output, "{}", format_event(event))?;
                found = true;
            }
        }

        if !found {
            writeln!(self.output, "No events found of type '{}'.", phrase)?;
        }
        Ok(())
    }

    /// Delete the event whose code the operator typed.
    pub fn delete(&mut self, code: &str) -> io::Result<()> {
        let code = code.trim();
        let Ok(id) = code.parse::<u64>() else {
            return writeln!(self.output, "Invalid event code '{}'.", code);
        };

        match self.journal.delete(EventId(id)) {
            Ok(event) => writeln!(self.output, "Event {} removed.", event.id),
            Err(_) => writeln!(self.output, "Event with code {} not found.", id),
        }
    }

    /// Print the number of live events.
    pub fn count(&mut self) -> io::Result<()> {
        writeln!(self.output, "Total events: {}", self.journal.count())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        self.prompt("Choose an option: ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Read one line of operator input; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
