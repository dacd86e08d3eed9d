use std::time::Duration;

pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn user_agent() -> String {
    format!(
        "writing-feed/{} (gregorythwaites.com feed updater)",
        env!("CARGO_PKG_VERSION")
    )
}

pub(crate) fn http_client() -> anyhow::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(user_agent())
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))
}
