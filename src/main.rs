use crate::status::BuildStatus;
use anyhow::Result;

mod config;
mod discord;
mod github;
mod notify;
mod status;

fn main() {
    if let Err(e) = run() {
        // `::error::` is the workflow command Actions renders as a failure
        // annotation, the equivalent of `core.setFailed`.
        println!("::error::{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = config::get_config()?;

    let commit = github::get_commit(&config)?;
    let status = BuildStatus::from_token(&config.status);

    notify::notify(&config, status, &commit)?;

    println!("{}", commit.author_login);

    Ok(())
}
