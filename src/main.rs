//! authlink binary entry point.

use std::process::ExitCode;

use authlink::{cli, config::Config, logging, App};
use tracing::info;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'authlink --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal error: can't load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init_with_filter(config.log_filter());

    info!("authlink v{}", env!("CARGO_PKG_VERSION"));

    let app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Fatal error: can't build components: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        datastore = %app.store.params().host,
        session_cache = %app.authority.params().host,
        "components ready"
    );

    println!("Success!");
    ExitCode::SUCCESS
}
