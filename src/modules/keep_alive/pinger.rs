use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Just under the 15 minute idle window of typical free hosting tiers.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(840);

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum KeepAliveError {
    #[error("invalid keep-alive url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("keep-alive interval must be greater than zero")]
    ZeroInterval,

    #[error("failed to build http client: {0}")]
    Client(reqwest::Error),

    #[error("keep-alive request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Periodically GETs a URL so the hosting platform keeps the process warm.
#[derive(Debug, Clone)]
pub struct KeepAlivePinger {
    client: Client,
    url: Url,
    interval: Duration,
}

impl KeepAlivePinger {
    pub fn new(url: &str, interval: Duration) -> Result<Self, KeepAliveError> {
        let parsed = Url::parse(url).map_err(|e| KeepAliveError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(KeepAliveError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        if interval.is_zero() {
            return Err(KeepAliveError::ZeroInterval);
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(KeepAliveError::Client)?;

        Ok(Self {
            client,
            url: parsed,
            interval,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One request. Non-2xx responses count as failures.
    pub async fn ping_once(&self) -> Result<StatusCode, KeepAliveError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.status())
    }

    /// Pings forever on a fixed cadence. Failures are logged and the next
    /// attempt waits for the regular tick. Abort the handle to stop.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(
            "Keep-alive enabled: {} every {}s",
            self.url,
            self.interval.as_secs()
        );

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately; the server has only just started.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                match self.ping_once().await {
                    Ok(status) => debug!("Keep-alive ping to {} returned {}", self.url, status),
                    Err(e) => warn!("Keep-alive ping failed: {}", e),
                }
            }
        })
    }
}
