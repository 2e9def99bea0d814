use crate::config::Config;
use crate::discord::{self, Embed, EmbedAuthor, EmbedField, EmbedFooter, Message};
use crate::github::CommitInfo;
use crate::status::BuildStatus;
use anyhow::{Context, Result};

const SENDER_NAME: &str = "GitHub Actions";
const SENDER_AVATAR_URL: &str = "https://avatars.githubusercontent.com/in/15368?v=4";

pub fn notify(config: &Config, status: BuildStatus, commit: &CommitInfo) -> Result<()> {
    let message = build_message(config, status, commit)?;

    discord::send_message(&config.webhook_url, &message)
}

/// Assembles the webhook payload. Field order is significant: version,
/// branch, commit message, then the caller-supplied extra field.
pub fn build_message(
    config: &Config,
    status: BuildStatus,
    commit: &CommitInfo,
) -> Result<Message> {
    let mut fields = Vec::new();

    // "?" is the placeholder workflows pass when no version was produced.
    if !config.version.is_empty() && config.version != "?" {
        fields.push(EmbedField {
            name: "Version".to_string(),
            value: config.version.clone(),
            inline: Some(true),
        });
    }

    let branch = config
        .git_ref
        .strip_prefix("refs/heads/")
        .unwrap_or(&config.git_ref);

    fields.push(EmbedField {
        name: "Build Branch".to_string(),
        value: branch.to_string(),
        inline: Some(true),
    });

    if matches!(config.include_commit_message.as_str(), "" | "true") {
        fields.push(EmbedField {
            name: "Commit message".to_string(),
            value: format!("`{}`", commit.message),
            inline: None,
        });
    }

    if !config.fields.is_empty() {
        let extra = serde_json5::from_str::<EmbedField>(&config.fields)
            .context("malformed fields input")?;

        fields.push(extra);
    }

    let repo_url = format!("https://github.com/{}/{}", config.owner, config.repo);

    Ok(Message {
        username: SENDER_NAME.to_string(),
        avatar_url: SENDER_AVATAR_URL.to_string(),
        embeds: vec![Embed {
            title: format!("Build {}", status.label()),
            url: format!("{}/actions/runs/{}", repo_url, config.run_id),
            color: status.color(),
            fields,
            author: EmbedAuthor {
                name: config.repo.clone(),
                url: repo_url,
                icon_url: format!("https://github.com/{}.png", config.owner),
            },
            footer: EmbedFooter {
                text: commit.author_login.clone(),
                icon_url: commit.author_avatar_url.clone(),
            },
        }],
    })
}
