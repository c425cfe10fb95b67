use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

use omniflow::api::BackendClient;
use omniflow::cli::Args;
use omniflow::config::{Config, FileConfig, DEFAULT_USER_ID};
use omniflow::error::OmniflowError;
use omniflow::identity;
use omniflow::orchestrator::Orchestrator;
use omniflow::repl::Shell;
use omniflow::session::Session;
use omniflow::ui;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "omniflow=debug"
    } else {
        "omniflow=error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.config_init {
        match FileConfig::init_user_config() {
            Ok(path) => {
                println!("{}", format!("Wrote {}", path.display()).green());
                return;
            }
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red(), e);
                process::exit(1);
            }
        }
    }

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    init_tracing(config.verbose);

    let client = match BackendClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    tracing::debug!(
        backend = client.base_url(),
        function_key = config.function_key.is_some(),
        timeout_secs = config.request_timeout,
        "backend client ready"
    );

    let user_id = if identity::validate(&config.user_id) {
        config.user_id.clone()
    } else {
        let e = OmniflowError::InvalidIdentifier(config.user_id.clone());
        ui::display_warning(&format!("{}; using '{}'", e, DEFAULT_USER_ID));
        DEFAULT_USER_ID.to_string()
    };

    let mut session = Session::new(user_id, config.temperature, config.category);
    session.set_debug(config.debug);

    if !args.command.is_empty() {
        let message = args.command.join(" ");
        let outcome = Orchestrator::new(&client)
            .submit(&mut session, &message)
            .await;

        ui::display_reply(&outcome.reply, outcome.stats.has_error);
        if session.debug() {
            ui::display_turn_stats(&outcome.stats);
        }
        if outcome.stats.has_error {
            process::exit(1);
        }
        return;
    }

    let mut shell = Shell::new(&config, &client, session);
    if let Err(e) = shell.run().await {
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}
