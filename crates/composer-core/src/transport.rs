//! Blocking HTTP GET over libcurl.
//!
//! Two shapes: [`Transport::fetch_text`] for small resources (catalog page,
//! checksum file) and [`Transport::fetch_stream`] for the archive, which hands
//! body chunks to a caller-supplied sink as libcurl delivers them.

use crate::error::TransportError;
use std::cell::Cell;
use std::convert::Infallible;
use std::str;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("composer/", env!("CARGO_PKG_VERSION"));

/// Failure of [`Transport::fetch_stream`]: either the request itself or the sink.
#[derive(Debug)]
pub enum StreamError<E> {
    Transport(TransportError),
    /// The sink rejected a chunk; the transfer was aborted.
    Sink(E),
}

impl<E> From<TransportError> for StreamError<E> {
    fn from(e: TransportError) -> Self {
        StreamError::Transport(e)
    }
}

/// HTTP client settings shared by every request of one pipeline run.
#[derive(Debug, Clone)]
pub struct Transport {
    user_agent: String,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl Transport {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// GETs `url` and returns the whole body as text (lossy UTF-8).
    pub fn fetch_text(&self, url: &str) -> Result<String, TransportError> {
        let mut body = Vec::new();
        self.fetch_stream(url, |chunk| {
            body.extend_from_slice(chunk);
            Ok::<(), Infallible>(())
        })
        .map_err(|e| match e {
            StreamError::Transport(e) => e,
            StreamError::Sink(never) => match never {},
        })?;
        tracing::debug!("GET {} -> {} bytes", url, body.len());
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// GETs `url`, passing each body chunk to `on_chunk` in order.
    ///
    /// `on_chunk` is only called once the final response status is known to
    /// be 200, so callers may defer side effects (e.g. creating a file) to the
    /// first chunk. Returning `Err` from `on_chunk` aborts the transfer and the
    /// error comes back as [`StreamError::Sink`].
    pub fn fetch_stream<F, E>(&self, url: &str, mut on_chunk: F) -> Result<(), StreamError<E>>
    where
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        let network = |source: curl::Error| TransportError::Network {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(network)?;
        easy.follow_location(true).map_err(network)?;
        easy.useragent(&self.user_agent).map_err(network)?;

        // Status of the most recent response head; redirects produce several.
        let status: Cell<Option<u32>> = Cell::new(None);
        let mut sink_error: Option<E> = None;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Some(code) = parse_status_line(data) {
                        status.set(Some(code));
                    }
                    true
                })
                .map_err(network)?;
            transfer
                .write_function(|data| {
                    match body_action(status.get()) {
                        BodyAction::Deliver => {}
                        BodyAction::Discard => return Ok(data.len()),
                        BodyAction::Abort => return Ok(0),
                    }
                    match on_chunk(data) {
                        Ok(()) => Ok(data.len()),
                        Err(e) => {
                            sink_error = Some(e);
                            Ok(0) // abort transfer
                        }
                    }
                })
                .map_err(network)?;
            transfer.perform()
        };

        if let Err(source) = performed {
            if let Some(e) = sink_error {
                return Err(StreamError::Sink(e));
            }
            let url = url.to_string();
            let err = match status.get() {
                None => TransportError::Network { url, source },
                Some(200) => TransportError::BodyRead { url, source },
                Some(status) => TransportError::HttpStatus { url, status },
            };
            return Err(err.into());
        }

        let code = easy.response_code().map_err(network)?;
        if code != 200 {
            return Err(TransportError::HttpStatus {
                url: url.to_string(),
                status: code,
            }
            .into());
        }
        Ok(())
    }
}

/// What to do with body bytes given the latest response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyAction {
    Deliver,
    /// Status unknown yet, or a redirect libcurl is about to follow.
    Discard,
    /// Final non-200 response; its body is never needed.
    Abort,
}

fn body_action(status: Option<u32>) -> BodyAction {
    match status {
        Some(200) => BodyAction::Deliver,
        None | Some(300..=399) => BodyAction::Discard,
        Some(_) => BodyAction::Abort,
    }
}

/// Status code from a raw header line such as `HTTP/1.1 404 Not Found`.
fn parse_status_line(data: &[u8]) -> Option<u32> {
    let line = str::from_utf8(data).ok()?;
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
