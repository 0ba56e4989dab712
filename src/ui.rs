// UI layer: the menu loop. Each pass checks the server is alive, shows the
// menu, reads a choice and runs one action to completion.

use crate::api::{CarService, Outcome, Probe};
use crate::config::EntryPolicy;
use crate::error::GatewayError;
use crate::messages;
use crate::prompt::{self, Console};
use crate::record;
use crate::table;
use log::debug;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Delete,
    Update,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::List),
            2 => Ok(MenuChoice::Add),
            3 => Ok(MenuChoice::Delete),
            4 => Ok(MenuChoice::Update),
            5 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose to leave (or the terminal went away).
    Farewell,
    ServerUnreachable,
}

impl SessionEnd {
    pub fn code(self) -> u8 {
        match self {
            SessionEnd::Farewell => 0,
            SessionEnd::ServerUnreachable => 1,
        }
    }
}

impl From<SessionEnd> for ExitCode {
    fn from(end: SessionEnd) -> Self {
        ExitCode::from(end.code())
    }
}

/// Main interactive menu. Runs until the user exits or the server stops
/// answering the liveness probe.
pub fn main_menu(
    console: &mut dyn Console,
    service: &dyn CarService,
    policy: EntryPolicy,
) -> SessionEnd {
    loop {
        if !server_alive(console, service) {
            console.say(messages::SERVER_UNREACHABLE);
            return SessionEnd::ServerUnreachable;
        }
        console.say(table::MENU);
        let Some(choice) = read_user_choice(console) else {
            return SessionEnd::Farewell;
        };
        debug!("menu choice {:?}", choice);
        match choice {
            MenuChoice::List => list_cars(console, service),
            MenuChoice::Add => add_car(console, service, policy),
            MenuChoice::Delete => delete_car(console, service, policy),
            MenuChoice::Update => update_car(console, service, policy),
            MenuChoice::Exit => {
                console.say(messages::FAREWELL);
                return SessionEnd::Farewell;
            }
        }
    }
}

fn server_alive(console: &mut dyn Console, service: &dyn CarService) -> bool {
    let probe = service.probe_server();
    if let Probe::Unexpected(status) = probe {
        console.say(&messages::unexpected_status(status.as_u16()));
    }
    probe.is_present()
}

/// Ask until the answer is an integer from 1 to 5. `None` only when the
/// console itself fails.
pub fn read_user_choice(console: &mut dyn Console) -> Option<MenuChoice> {
    loop {
        let raw = match console.read_line(table::CHOICE_PROMPT) {
            Ok(raw) => raw,
            Err(e) => {
                console.say(&messages::console_failure(&e));
                return None;
            }
        };
        match raw.trim().parse::<i64>() {
            Ok(n) => match MenuChoice::try_from(n) {
                Ok(choice) => return Some(choice),
                Err(_) => console.say(messages::CHOICE_OUT_OF_RANGE),
            },
            Err(_) => console.say(messages::CHOICE_NOT_INTEGER),
        }
    }
}

/// Print the table, or a notice when there is nothing or something failed.
pub fn list_cars(console: &mut dyn Console, service: &dyn CarService) {
    match service.list_records() {
        Ok(cars) if cars.is_empty() => console.say(messages::EMPTY_DATABASE),
        Ok(cars) => {
            for line in table::render_table(&cars) {
                console.say(&line);
            }
        }
        Err(GatewayError::NotFound) => console.say(messages::RESOURCE_NOT_FOUND),
        Err(GatewayError::Status(_)) => console.say(messages::SERVER_ERROR),
        Err(GatewayError::Transport(_)) | Err(GatewayError::Decode(_)) => {
            console.say(messages::COMMUNICATION_ERROR)
        }
    }
}

pub fn add_car(console: &mut dyn Console, service: &dyn CarService, policy: EntryPolicy) {
    if let Some(car) = record::collect_new_record(console, service, policy) {
        let outcome = service.create_record(&car);
        report(console, outcome, messages::added, messages::CONNECTION_FAILED);
    }
}

pub fn delete_car(console: &mut dyn Console, service: &dyn CarService, policy: EntryPolicy) {
    let Some(id) = prompt::enter_id(console, policy) else {
        return;
    };
    if !record::record_exists(console, service, id) {
        console.say(messages::ABSENT_ON_DELETE);
        return;
    }
    let outcome = service.delete_record(id);
    report(console, outcome, |code| messages::deleted(id, code), messages::CONNECTION_FAILED);
}

pub fn update_car(console: &mut dyn Console, service: &dyn CarService, policy: EntryPolicy) {
    let Some(id) = prompt::enter_id(console, policy) else {
        return;
    };
    if !record::record_exists(console, service, id) {
        console.say(messages::ABSENT_ON_UPDATE);
        return;
    }
    if let Some(fields) = record::collect_update_fields(console, policy) {
        let outcome = service.update_record(id, &fields);
        report(
            console,
            outcome,
            |code| messages::updated(id, code),
            messages::COMMUNICATION_ERROR,
        );
    }
}

/// One line per mutation: success with the status code, the rejecting
/// status, or `unreachable` when no answer came back.
fn report(
    console: &mut dyn Console,
    outcome: Outcome,
    success: impl Fn(u16) -> String,
    unreachable: &str,
) {
    match outcome {
        Ok(status) if status.is_success() => console.say(&success(status.as_u16())),
        Ok(status) => console.say(&messages::rejected_status(status.as_u16())),
        Err(_) => console.say(unreachable),
    }
}
