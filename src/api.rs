// API client module: a blocking HTTP client for the vintage cars REST
// service. Every call is a single request/response round trip; transport
// failures come back as values, never as panics.

use crate::config::Config;
use crate::error::GatewayError;
use crate::model::{Car, CarFields};
use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Result of a liveness or existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Present,
    Absent,
    /// Answered with something other than success or not-found.
    Unexpected(StatusCode),
    Unreachable,
}

impl Probe {
    pub fn is_present(self) -> bool {
        matches!(self, Probe::Present)
    }

    fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            Probe::Present
        } else if status == StatusCode::NOT_FOUND {
            Probe::Absent
        } else {
            Probe::Unexpected(status)
        }
    }
}

/// Status code returned by a mutation, or why it never arrived.
pub type Outcome = std::result::Result<StatusCode, GatewayError>;

/// Operations the session needs from the car service. `ApiClient` talks
/// HTTP; tests substitute an in-memory implementation.
pub trait CarService {
    /// GET the service root.
    fn probe_server(&self) -> Probe;
    /// GET a single record.
    fn record_exists(&self, id: i64) -> Probe;
    fn list_records(&self) -> std::result::Result<Vec<Car>, GatewayError>;
    /// POST the full record, identifier included.
    fn create_record(&self, car: &Car) -> Outcome;
    fn delete_record(&self, id: i64) -> Outcome;
    /// PUT the fields to the record path; the body carries no identifier.
    fn update_record(&self, id: i64, fields: &CarFields) -> Outcome;
}

/// reqwest-backed gateway holding the client and the configured base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(ApiClient { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn send(&self, method: &str, url: &str, req: RequestBuilder) -> std::result::Result<Response, GatewayError> {
        debug!("{} {}", method, url);
        req.send().map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            GatewayError::from(e)
        })
    }

    fn probe(&self, url: &str) -> Probe {
        match self.send("GET", url, self.client.get(url)) {
            Ok(res) => {
                let probe = Probe::from_status(res.status());
                if let Probe::Unexpected(status) = probe {
                    warn!("GET {} answered {}", url, status);
                }
                probe
            }
            Err(_) => Probe::Unreachable,
        }
    }

    fn status_of(&self, method: &str, url: &str, req: RequestBuilder) -> Outcome {
        let status = self.send(method, url, req)?.status();
        if !status.is_success() {
            warn!("{} {} answered {}", method, url, status);
        }
        Ok(status)
    }
}

impl CarService for ApiClient {
    fn probe_server(&self) -> Probe {
        self.probe(&self.config.base_url)
    }

    fn record_exists(&self, id: i64) -> Probe {
        self.probe(&self.config.record_url(id))
    }

    fn list_records(&self) -> std::result::Result<Vec<Car>, GatewayError> {
        let url = self.config.collection_url();
        let res = self.send("GET", &url, self.client.get(&url))?;
        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound);
        }
        if !status.is_success() {
            warn!("GET {} answered {}", url, status);
            return Err(GatewayError::Status(status));
        }
        // Decode through text so a bad body is a Decode error, not a transport one.
        let body = res.text()?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    fn create_record(&self, car: &Car) -> Outcome {
        let url = self.config.collection_url();
        let req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(car);
        self.status_of("POST", &url, req)
    }

    fn delete_record(&self, id: i64) -> Outcome {
        let url = self.config.record_url(id);
        self.status_of("DELETE", &url, self.client.delete(&url))
    }

    fn update_record(&self, id: i64, fields: &CarFields) -> Outcome {
        let url = self.config.record_url(id);
        let req = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(fields);
        self.status_of("PUT", &url, req)
    }
}
