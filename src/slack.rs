use crate::config::Config;
use crate::error::ExportError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const HISTORY_URL: &str = "https://slack.com/api/conversations.history";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// One raw history record as returned by the API. System messages carry no
/// `user`, and some subtypes carry no `text`; both stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub user: Option<String>,
    pub ts: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    ok: bool,
    error: Option<String>,
    #[serde(default)]
    messages: Vec<Message>,
    #[serde(default)]
    has_more: bool,
    response_metadata: Option<ResponseMetadata>,
}

impl HistoryResponse {
    fn into_page(self) -> Result<HistoryPage, ExportError> {
        if !self.ok {
            return Err(ExportError::Api(
                self.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        // Slack sometimes sends has_more with a blank cursor; echoing a blank
        // cursor back refetches page one, so treat it as end of history.
        let next_cursor = if self.has_more {
            self.response_metadata
                .and_then(|meta| meta.next_cursor)
                .filter(|cursor| !cursor.is_empty())
        } else {
            None
        };

        Ok(HistoryPage {
            messages: self.messages,
            next_cursor,
        })
    }
}

#[derive(Debug)]
pub struct HistoryPage {
    pub messages: Vec<Message>,
    pub next_cursor: Option<String>,
}

#[async_trait]
pub trait HistorySource {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<HistoryPage, ExportError>;
}

pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    channel_id: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Result<Self, ExportError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            http,
            token: config.token.clone(),
            channel_id: config.channel_id.clone(),
        })
    }
}

#[async_trait]
impl HistorySource for SlackClient {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<HistoryPage, ExportError> {
        let mut params = vec![("channel", self.channel_id.as_str())];
        if let Some(cursor) = cursor {
            params.push(("cursor", cursor));
        }

        let response: HistoryResponse = self
            .http
            .get(HISTORY_URL)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        response.into_page()
    }
}

/// Drains the channel history page by page, in API arrival order. Aborts
/// with `PageLimit` once `max_pages` responses have been consumed without
/// reaching the end, so a server that never clears `has_more` cannot hold
/// the process in a loop.
pub async fn fetch_history<S: HistorySource>(
    source: &S,
    max_pages: usize,
) -> Result<Vec<Message>, ExportError> {
    let mut messages = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        if pages == max_pages {
            return Err(ExportError::PageLimit(max_pages));
        }

        let page = source.fetch_page(cursor.as_deref()).await?;
        pages += 1;
        eprintln!("slack: page {pages} -> {} messages", page.messages.len());
        messages.extend(page.messages);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(messages)
}
