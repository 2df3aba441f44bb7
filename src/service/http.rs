use std::{fmt, time::Duration};

use reqwest::blocking::{Client, RequestBuilder};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// A completed HTTP exchange. The checks branch on the status code
/// themselves, so status and raw body are kept together.
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

pub fn build_client() -> Result<Client, ClientInitError> {
    let client = Client::builder().build()?;
    Ok(client)
}

pub fn execute(request: RequestBuilder, timeout: Duration) -> Result<ApiResponse, RequestError> {
    let response = request.timeout(timeout).send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok(ApiResponse { status, body })
}

#[derive(Debug)]
pub enum ClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::HttpClientCreation(err) => {
                write!(f, "Failed to create HTTP client: {}", err)
            }
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    Timeout(reqwest::Error),
    ConnectionFailed(reqwest::Error),
    Network(reqwest::Error),
}

impl RequestError {
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, RequestError::ConnectionFailed(_))
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::Timeout(err) => write!(f, "Request timed out: {}", err),
            RequestError::ConnectionFailed(err) => write!(f, "Connection failed: {}", err),
            RequestError::Network(err) => write!(f, "Network error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else if error.is_connect() {
            Self::ConnectionFailed(error)
        } else {
            Self::Network(error)
        }
    }
}
