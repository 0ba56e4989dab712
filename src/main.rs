// Entrypoint for the CLI application.
// - Keeps `main` small: load configuration, build the API client and hand
//   both to the menu loop.
// - The loop's outcome becomes the process exit status.

use log::{error, info};
use std::process::ExitCode;
use vintage_cars_cli::{api::ApiClient, config::Config, prompt::Terminal, ui::main_menu};

fn main() -> ExitCode {
    env_logger::init();

    // `VINTAGE_CARS_*` variables (or a `.env` file); see `config::Config`.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration rejected: {}", e);
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("using {}", config.collection_url());

    let api = match ApiClient::new(config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let policy = api.config().entry_policy;
    let mut terminal = Terminal::new();
    main_menu(&mut terminal, &api, policy).into()
}
