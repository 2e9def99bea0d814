use anyhow::{Context, Result};
use reqwest::Url;

/// Action inputs plus the workflow context the notification is built from.
///
/// GitHub Actions exposes action inputs as `INPUT_<NAME>` environment
/// variables and the workflow context as `GITHUB_*` variables.
pub struct Config {
    pub status: String,
    pub version: String,
    pub webhook_url: Url,
    pub github_token: String,
    pub include_commit_message: String,
    pub fields: String,
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub git_ref: String,
    pub run_id: String,
}

fn input(name: &str) -> String {
    // Missing inputs read as the empty string, like `@actions/core` getInput.
    std::env::var(format!("INPUT_{name}")).unwrap_or_default()
}

pub fn get_config() -> Result<Config> {
    let webhook_url =
        std::env::var("INPUT_WEBHOOK_URL").context("webhook_url input is not set")?;

    let github_token = std::env::var("INPUT_GITHUB_TOKEN")
        .or_else(|_| std::env::var("GITHUB_TOKEN"))
        .context("no github_token input and no GITHUB_TOKEN in the environment")?;

    let repository =
        std::env::var("GITHUB_REPOSITORY").context("GITHUB_REPOSITORY is not set")?;
    let (owner, repo) = repository
        .split_once('/')
        .with_context(|| format!("malformed GITHUB_REPOSITORY: {repository}"))?;

    Ok(Config {
        status: input("STATUS"),
        version: input("VERSION"),
        webhook_url: Url::parse(&webhook_url)?,
        github_token,
        include_commit_message: input("INCLUDE_COMMIT_MESSAGE"),
        fields: input("FIELDS"),
        owner: owner.to_string(),
        repo: repo.to_string(),
        sha: std::env::var("GITHUB_SHA").context("GITHUB_SHA is not set")?,
        git_ref: std::env::var("GITHUB_REF").context("GITHUB_REF is not set")?,
        run_id: std::env::var("GITHUB_RUN_ID").context("GITHUB_RUN_ID is not set")?,
    })
}
