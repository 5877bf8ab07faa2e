use crate::config::{Cli, ConfigError, Mode, normalize_go_flags};
use crate::output::write_scoped;
use crate::render::Renderer;
use crate::render::adoc::ADOC_TEMPLATE;
use crate::services::PinboardClient;
use crate::services::export::ExportService;
use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub mod config;
mod domain;
mod features;
mod output;
mod parser;
mod render;
mod services;

#[cfg(test)]
mod tests;

// progress lines from every stage, overridable with RUST_LOG
pub const DEFAULT_LOG_FILTER: &str = "pinboard_adoc=info";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // pick up PINBOARD_AUTH_TOKEN and friends from a local .env
    dotenv::dotenv().ok();

    // logs go to stderr, stdout is reserved for the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_from(normalize_go_flags(std::env::args()));

    let outcome = run(cli, io::stdout()).await;
    report(outcome, io::stderr())
}

/// Turns the outcome of a run into the process exit code.
///
/// Usage problems print the message and the flag defaults to `stderr` and exit 0, like a bare
/// flag parse. Anything else is logged as an error and exits 1.
pub fn report<E: Write>(outcome: Result<()>, mut stderr: E) -> ExitCode {
    let e = match outcome {
        Ok(()) => return ExitCode::SUCCESS,
        Err(e) => e,
    };

    match e.downcast_ref::<ConfigError>() {
        Some(usage) => {
            // nowhere left to report a failing stderr
            let _ = writeln!(stderr, "{}\n", usage);
            let _ = writeln!(stderr, "{}", Cli::command().render_help());
            let _ = stderr.flush();
            ExitCode::SUCCESS
        }
        None => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

pub async fn run<W: Write>(cli: Cli, out: W) -> Result<()> {
    match cli.into_mode()? {
        Mode::PrintExample => write_scoped(out, |sink| {
            writeln!(sink, "{}", ADOC_TEMPLATE)?;
            Ok(())
        }),
        Mode::Export(config) => {
            // parse the template up front so a broken one never costs a request
            let renderer = Renderer::for_template(&config.template)?;
            tracing::info!("Using template {}.", renderer.name());

            let client = PinboardClient::new(config.api_base, config.auth);
            let service = ExportService::new(Box::new(client), renderer);

            service.export(out).await
        }
    }
}
