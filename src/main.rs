mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use std::process::ExitCode;

use cli::{reply::Reply, Cli, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the JSON reply, so all diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seq2seq_chatbot=warn")),
        )
        .init();

    let reply = match Settings::from_env() {
        Ok(settings) => Cli::from_args(std::env::args_os(), settings).run(),
        Err(e)       => Reply::error(e.to_string().trim()),
    };

    println!("{}", reply.to_json());
    reply.exit_code()
}
