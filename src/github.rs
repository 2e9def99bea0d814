use crate::config::Config;
use anyhow::{Context, Result};
use serde::Deserialize;

const GITHUB_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";

// GitHub rejects API requests that carry no User-Agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Metadata of the commit that triggered the run. Fetched once, then read-only.
pub struct CommitInfo {
    pub message: String,
    pub author_login: String,
    pub author_avatar_url: String,
}

#[derive(Deserialize)]
struct CommitResponse {
    commit: CommitDetails,
    author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
struct CommitDetails {
    message: String,
}

#[derive(Deserialize)]
struct CommitAuthor {
    login: String,
    avatar_url: String,
}

pub fn get_commit(config: &Config) -> Result<CommitInfo> {
    let url = format!(
        "{}/repos/{}/{}/commits/{}",
        GITHUB_API_URL, config.owner, config.repo, config.sha
    );

    let client = reqwest::blocking::Client::new();

    let response = client
        .get(&url)
        .bearer_auth(&config.github_token)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header("X-GitHub-Api-Version", API_VERSION)
        .send()?
        .error_for_status()?;

    let commit = response.json::<CommitResponse>()?;

    // `author` is null for commits with no linked GitHub account.
    let author = commit
        .author
        .with_context(|| format!("commit {} has no associated GitHub user", config.sha))?;

    Ok(CommitInfo {
        message: commit.commit.message,
        author_login: author.login,
        author_avatar_url: author.avatar_url,
    })
}
