//! Remote Text Fetching
//!
//! Validates URLs and streams response bodies as lines for `url` sources.

use super::types::SourceKind;
use crate::error::{Result, WordCounterError};

use std::time::Duration;
use url::Url;

/// Parses `raw` and accepts only absolute http(s) URLs with a host.
pub fn validate_url(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| WordCounterError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(WordCounterError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            raw,
            parsed.scheme()
        )));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(WordCounterError::InvalidUrl(format!("{}: missing host", raw))),
    }
}

/// Bounded-time HTTP GET client with retry on connection failures.
#[derive(Clone)]
pub struct FetchClient {
    http_client: reqwest::Client,
    timeout: Duration,
    attempts: usize,
}

impl FetchClient {
    pub fn new(timeout: Duration, attempts: usize) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            timeout,
            attempts: attempts.max(1),
        }
    }

    /// Sends the request, retrying failed sends with exponential backoff and jitter.
    ///
    /// The timeout covers each attempt including the body download. Non-success status
    /// codes are not retried.
    pub async fn get(&self, url: &Url) -> Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..self.attempts {
            let response = self
                .http_client
                .get(url.clone())
                .timeout(self.timeout)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => return Ok(resp),
                Ok(resp) => {
                    return Err(WordCounterError::unreachable(
                        SourceKind::Url,
                        format!("GET {} returned {}", url, resp.status()),
                    ));
                }
                Err(e) => {
                    if attempt + 1 == self.attempts {
                        return Err(WordCounterError::unreachable(SourceKind::Url, e));
                    }
                    tracing::warn!(
                        "GET {} failed (attempt {}/{}): {}",
                        url,
                        attempt + 1,
                        self.attempts,
                        e
                    );
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(WordCounterError::unreachable(
            SourceKind::Url,
            "retry attempts exhausted",
        ))
    }

    /// Streams the body of `url`, calling `on_line` for every non-empty line.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r` and are decoded as UTF-8, replacing invalid
    /// sequences.
    pub async fn for_each_line<F>(&self, url: &Url, mut on_line: F) -> Result<()>
    where
        F: FnMut(&str),
    {
        let mut response = self.get(url).await?;
        let mut splitter = LineSplitter::default();

        loop {
            let chunk = response
                .chunk()
                .await
                .map_err(|e| WordCounterError::unreachable(SourceKind::Url, e))?;

            match chunk {
                Some(bytes) => splitter.push(&bytes, &mut on_line),
                None => break,
            }
        }
        splitter.finish(&mut on_line);

        Ok(())
    }
}

/// Reassembles lines from arbitrarily sized byte chunks.
///
/// A `\r\n` pair split across two chunks still ends a single line.
#[derive(Default)]
pub struct LineSplitter {
    pending: Vec<u8>,
    after_cr: bool,
}

impl LineSplitter {
    pub fn push<F>(&mut self, chunk: &[u8], on_line: &mut F)
    where
        F: FnMut(&str),
    {
        for &b in chunk {
            match b {
                b'\n' if self.after_cr => self.after_cr = false,
                b'\n' | b'\r' => {
                    self.emit(on_line);
                    self.after_cr = b == b'\r';
                }
                _ => {
                    self.after_cr = false;
                    self.pending.push(b);
                }
            }
        }
    }

    /// Flushes a final line that had no trailing newline.
    pub fn finish<F>(mut self, on_line: &mut F)
    where
        F: FnMut(&str),
    {
        self.emit(on_line);
    }

    fn emit<F>(&mut self, on_line: &mut F)
    where
        F: FnMut(&str),
    {
        if !self.pending.is_empty() {
            let line = String::from_utf8_lossy(&self.pending);
            on_line(&*line);
        }
        self.pending.clear();
    }
}
