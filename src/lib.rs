// Library root
// -----------
// Interactive client for the vintage cars REST service. The binary
// (`main.rs`) wires configuration, the HTTP gateway and the terminal into
// the menu loop.
//
// Module responsibilities:
// - `api`: HTTP calls against the service behind the `CarService` trait.
// - `config`: environment-driven settings.
// - `error`: gateway and configuration error types.
// - `messages`: user-visible notices.
// - `model`: car records as sent and received.
// - `prompt`: `Console` abstraction and single-field prompts.
// - `record`: multi-field entry for create and update.
// - `table`: menu text and the car table layout.
// - `ui`: the session loop and per-action flows.
// - `validate`: field validators.
pub mod api;
pub mod config;
pub mod error;
pub mod messages;
pub mod model;
pub mod prompt;
pub mod record;
pub mod table;
pub mod ui;
pub mod validate;
