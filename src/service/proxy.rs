use reqwest::blocking::Client;

use super::http::{self, ApiResponse, ClientInitError, RequestError, PROBE_TIMEOUT, REQUEST_TIMEOUT};

pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, ClientInitError> {
        Ok(Self {
            client: http::build_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The debug probe gets a shorter timeout than the data endpoints,
    /// it only tells whether the proxy process is up at all.
    pub fn debug(&self) -> Result<ApiResponse, RequestError> {
        let url = format!("{}/debug", self.base_url);
        http::execute(self.client.get(url), PROBE_TIMEOUT)
    }

    pub fn account(&self, platform: &str, game_name: &str, tag_line: &str) -> Result<ApiResponse, RequestError> {
        let url = format!("{}/account/{}/{}/{}", self.base_url, platform, game_name, tag_line);
        http::execute(self.client.get(url), REQUEST_TIMEOUT)
    }

    pub fn profile(&self, platform: &str, game_name: &str, tag_line: &str) -> Result<ApiResponse, RequestError> {
        let url = format!("{}/profile/{}/{}/{}", self.base_url, platform, game_name, tag_line);
        http::execute(self.client.get(url), REQUEST_TIMEOUT)
    }
}
