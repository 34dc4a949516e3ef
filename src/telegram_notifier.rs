use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum TelegramError {
  #[error("failed to read animation {path}: {source}")]
  Animation {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("Telegram request failed: {0}")]
  Http(#[from] reqwest::Error),
  #[error("Telegram API error (status {status}): {description}")]
  Api { status: u16, description: String },
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
  ok: bool,
  #[serde(default)]
  description: Option<String>,
}

#[derive(Clone)]
pub struct TelegramNotifier {
  client: Client,
  api_url: String,
  token: String,
  chat_id: String,
  animation_path: PathBuf,
}

impl TelegramNotifier {
  pub fn new(
    token: impl Into<String>,
    chat_id: impl Into<String>,
    animation_path: impl Into<PathBuf>,
  ) -> Self {
    Self {
      client: Client::new(),
      api_url: DEFAULT_API_URL.to_string(),
      token: token.into(),
      chat_id: chat_id.into(),
      animation_path: animation_path.into(),
    }
  }

  /// Point the notifier at another Bot API host
  pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
    self.api_url = api_url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn chat_id(&self) -> &str {
    &self.chat_id
  }

  pub fn animation_path(&self) -> &Path {
    &self.animation_path
  }

  fn method_url(&self, method: &str) -> String {
    format!("{}/bot{}/{}", self.api_url, self.token, method)
  }

  /// Post the configured animation with a Markdown caption
  pub async fn send_animation(&self, caption: &str) -> Result<(), TelegramError> {
    let bytes = tokio::fs::read(&self.animation_path).await.map_err(|source| {
      TelegramError::Animation {
        path: self.animation_path.display().to_string(),
        source,
      }
    })?;

    let file_name = self
      .animation_path
      .file_name()
      .and_then(|name| name.to_str())
      .unwrap_or("burn.gif")
      .to_string();

    let animation = Part::bytes(bytes).file_name(file_name).mime_str("image/gif")?;

    let form = Form::new()
      .text("chat_id", self.chat_id.clone())
      .text("caption", caption.to_string())
      .text("parse_mode", "Markdown")
      .part("animation", animation);

    let response = self
      .client
      .post(self.method_url("sendAnimation"))
      .multipart(form)
      .send()
      .await?;

    Self::check_response(response).await?;
    debug!("Telegram animation sent successfully");
    Ok(())
  }

  /// Send a plain Markdown text message
  pub async fn send_message(&self, text: &str) -> Result<(), TelegramError> {
    let payload = serde_json::json!({
        "chat_id": self.chat_id,
        "text": text,
        "parse_mode": "Markdown",
        "disable_web_page_preview": true
    });

    let response = self
      .client
      .post(self.method_url("sendMessage"))
      .json(&payload)
      .send()
      .await?;

    Self::check_response(response).await?;
    debug!("Telegram message sent successfully");
    Ok(())
  }

  async fn check_response(response: Response) -> Result<(), TelegramError> {
    let status = response.status();
    let text = response.text().await?;

    let parsed = serde_json::from_str::<ApiResponse>(&text).ok();
    let ok = parsed.as_ref().map(|r| r.ok).unwrap_or(false);

    if status.is_success() && ok {
      return Ok(());
    }

    let description = parsed
      .and_then(|r| r.description)
      .unwrap_or(text);

    Err(TelegramError::Api {
      status: status.as_u16(),
      description,
    })
  }
}

impl fmt::Debug for TelegramNotifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TelegramNotifier")
      .field("api_url", &self.api_url)
      .field("token", &"[REDACTED]")
      .field("chat_id", &self.chat_id)
      .field("animation_path", &self.animation_path)
      .finish()
  }
}
