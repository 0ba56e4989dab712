// Record assembler: walks the user through the fields of a car and builds
// the request body. The first missing field ends the entry.

use crate::api::{CarService, Probe};
use crate::config::EntryPolicy;
use crate::messages;
use crate::model::{Car, CarFields};
use crate::prompt::{self, Console};

/// Existence check that shows the status line for unexpected answers.
/// Anything but a success status counts as "not there".
pub fn record_exists(console: &mut dyn Console, service: &dyn CarService, id: i64) -> bool {
    let probe = service.record_exists(id);
    if let Probe::Unexpected(status) = probe {
        console.say(&messages::unexpected_status(status.as_u16()));
    }
    probe.is_present()
}

/// Identifier first, refused if already taken, then the remaining fields.
pub fn collect_new_record(
    console: &mut dyn Console,
    service: &dyn CarService,
    policy: EntryPolicy,
) -> Option<Car> {
    let id = prompt::enter_id(console, policy)?;
    if record_exists(console, service, id) {
        console.say(messages::DUPLICATE_ID);
        return None;
    }
    collect_update_fields(console, policy).map(|fields| fields.with_id(id))
}

/// Brand, model, production year and convertible flag.
pub fn collect_update_fields(console: &mut dyn Console, policy: EntryPolicy) -> Option<CarFields> {
    let brand = prompt::enter_name(console, policy, prompt::BRAND_PROMPT)?;
    let model = prompt::enter_name(console, policy, prompt::MODEL_PROMPT)?;
    let production_year = prompt::enter_production_year(console, policy)?;
    let convertible = prompt::enter_convertible(console, policy)?;
    Some(CarFields {
        brand,
        model,
        production_year,
        convertible,
    })
}
