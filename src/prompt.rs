// Prompter: asks for one field at a time and runs it through the matching
// validator. Terminal access goes through `Console` so the flows can be
// driven by a script in tests.

use crate::config::EntryPolicy;
use crate::messages;
use crate::validate::{self, Rejection, Validated};
use dialoguer::Input;
use log::{debug, warn};
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

pub const ID_PROMPT: &str = "Car ID (empty string to exit)";
pub const BRAND_PROMPT: &str = "Car Brand (empty string to exit)";
pub const MODEL_PROMPT: &str = "Car Model (empty string to exit)";
pub const YEAR_PROMPT: &str = "Car Production Year (empty string to exit)";
pub const CONVERTIBLE_PROMPT: &str = "Is this Car Convertible? [ Y/N ] (empty string to exit)";

/// Line-oriented user interaction.
pub trait Console {
    /// Show `prompt` and return the line typed, without its newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
    fn say(&mut self, line: &str);
}

/// Plain line reader for piped or redirected input. End of input is an
/// `UnexpectedEof` error rather than an empty line.
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(line)
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{}", line) {
            warn!("failed to write to console: {}", e);
        }
    }
}

/// The real terminal: `dialoguer` when a person is at the keyboard, a plain
/// line reader on stdin otherwise.
pub enum Terminal {
    Interactive,
    Piped(LineConsole<StdinLock<'static>, Stdout>),
}

impl Terminal {
    pub fn new() -> Self {
        // dialoguer answers "" without reading when it is not attended.
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            Terminal::Interactive
        } else {
            debug!("input is not a terminal, reading plain lines");
            Terminal::Piped(LineConsole::new(io::stdin().lock(), io::stdout()))
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Terminal::new()
    }
}

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        match self {
            // Empty input must come through: it is how the user cancels.
            Terminal::Interactive => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text(),
            Terminal::Piped(lines) => lines.read_line(prompt),
        }
    }

    fn say(&mut self, line: &str) {
        match self {
            Terminal::Interactive => println!("{}", line),
            Terminal::Piped(lines) => lines.say(line),
        }
    }
}

/// Ask for one field. Returns `None` once the entry is abandoned, after the
/// reason has been shown. Under `EntryPolicy::Retry` a malformed value
/// re-asks instead of abandoning; empty input always cancels.
pub fn ask<T>(
    console: &mut dyn Console,
    policy: EntryPolicy,
    prompt: &str,
    validate: fn(&str) -> Validated<T>,
) -> Option<T> {
    loop {
        let raw = match console.read_line(prompt) {
            Ok(raw) => raw,
            Err(e) => {
                console.say(&messages::console_failure(&e));
                return None;
            }
        };
        match validate(&raw) {
            Ok(value) => return Some(value),
            Err(rejection) => {
                console.say(&rejection.to_string());
                match (rejection, policy) {
                    (Rejection::Invalid(field), EntryPolicy::Retry) => {
                        debug!("re-asking for {:?}", field);
                    }
                    _ => return None,
                }
            }
        }
    }
}

pub fn enter_id(console: &mut dyn Console, policy: EntryPolicy) -> Option<i64> {
    ask(console, policy, ID_PROMPT, validate::validate_identifier)
}

pub fn enter_name(console: &mut dyn Console, policy: EntryPolicy, prompt: &str) -> Option<String> {
    ask(console, policy, prompt, validate::validate_name)
}

pub fn enter_production_year(console: &mut dyn Console, policy: EntryPolicy) -> Option<i32> {
    ask(console, policy, YEAR_PROMPT, validate::validate_year)
}

pub fn enter_convertible(console: &mut dyn Console, policy: EntryPolicy) -> Option<bool> {
    ask(console, policy, CONVERTIBLE_PROMPT, validate::validate_convertible)
}
