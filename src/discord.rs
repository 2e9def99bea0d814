use anyhow::Result;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// The webhook payload: sender identity plus a single embed.
#[derive(Debug, Serialize)]
pub struct Message {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub author: EmbedAuthor,
    pub footer: EmbedFooter,
}

/// One name/value pair in the embed. Field order is the render order.
///
/// `inline` is omitted from the serialized body when unset rather than sent
/// as `false`, and the caller-supplied extra field is deserialized through
/// this type so its shape is checked once at ingestion.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

#[derive(Debug, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

pub fn send_message(webhook_url: &Url, message: &Message) -> Result<()> {
    let client = reqwest::blocking::Client::new();

    client
        .post(webhook_url.clone())
        .json(message)
        .send()?
        .error_for_status()?;

    Ok(())
}
