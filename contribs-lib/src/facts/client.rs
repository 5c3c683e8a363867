//! HTTP access to the public contribution calendar.

use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, app_err, bail};
use url::Url;

const LOG_TARGET: &str = "    client";

/// Host serving contribution calendars unless configured otherwise.
pub const CALENDAR_BASE_URL: &str = "https://github.com";

/// How long a calendar request may take unless configured otherwise.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches calendar markup for a user.
#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a client for the calendar host at `base_url`.
    ///
    /// # Errors
    ///
    /// Fails if `base_url` is not an absolute http(s) URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).into_app_err_with(|| format!("parsing calendar base URL '{base_url}'"))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            bail!("calendar base URL '{base_url}' must be an http or https URL");
        }

        let client = reqwest::Client::builder()
            .user_agent("contribs")
            .timeout(timeout)
            .build()
            .into_app_err("creating HTTP client")?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The calendar address for `username`; the name is encoded as a single path segment.
    pub fn calendar_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        let _ = url
            .path_segments_mut()
            .map_err(|()| app_err!("calendar base URL '{}' cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(["users", username, "contributions"]);
        Ok(url)
    }

    /// Download the calendar markup for `username`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, timeouts, non-2xx statuses, and unreadable bodies.
    pub async fn fetch_calendar(&self, username: &str) -> Result<String> {
        let url = self.calendar_url(username)?;
        log::info!(target: LOG_TARGET, "Querying '{url}' for the contribution calendar of '{username}'");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .into_app_err_with(|| format!("sending HTTP request to {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("unexpected HTTP status {status} from {url}");
        }

        let text = response.text().await.into_app_err("reading calendar response body")?;
        log::debug!(target: LOG_TARGET, "Calendar markup length: {} bytes", text.len());

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::new(base, DEFAULT_REQUEST_TIMEOUT).unwrap()
    }

    #[test]
    fn test_calendar_url() {
        let url = client(CALENDAR_BASE_URL).calendar_url("octocat").unwrap();
        assert_eq!(url.as_str(), "https://github.com/users/octocat/contributions");
    }

    #[test]
    fn test_calendar_url_with_base_path() {
        let url = client("http://127.0.0.1:8080/mirror/").calendar_url("octocat").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mirror/users/octocat/contributions");
    }

    #[test]
    fn test_calendar_url_encodes_username() {
        let url = client(CALENDAR_BASE_URL).calendar_url("a/b c").unwrap();
        assert_eq!(url.as_str(), "https://github.com/users/a%2Fb%20c/contributions");
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(Client::new("ftp://example.com", DEFAULT_REQUEST_TIMEOUT).is_err());
        assert!(Client::new("mailto:someone@example.com", DEFAULT_REQUEST_TIMEOUT).is_err());
        assert!(Client::new("not a url", DEFAULT_REQUEST_TIMEOUT).is_err());
    }
}
