//! HTTP access to the records backend.

use crate::domain::{ApiResponse, Employee, RecordsGateway, StoreError, StoreResult};
use log::debug;
use reqwest::blocking::{Client, Response};

/// [`RecordsGateway`] implementation over a blocking HTTP client.
///
/// The base URL points at the record service root, e.g.
/// `http://localhost:45000/api/Record`; the gateway appends the endpoint
/// names to it. Timeouts are whatever the client defaults to, and nothing is
/// retried.
pub struct HttpRecordsGateway {
    client: Client,
    base_url: String,
}

impl HttpRecordsGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Maps a raw response to the envelope: non-2xx statuses fail before the
    /// body is looked at, undecodable bodies fail as transport errors.
    fn decode(response: Response) -> StoreResult<ApiResponse> {
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Http(status.as_u16()));
        }
        response
            .json::<ApiResponse>()
            .map_err(|err| StoreError::Transport(err.to_string()))
    }
}

impl RecordsGateway for HttpRecordsGateway {
    fn get_records(&self) -> StoreResult<ApiResponse> {
        let url = self.endpoint("GetRecords");
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| StoreError::Transport(err.to_string()))?;
        Self::decode(response)
    }

    fn save_records(&self, records: &[Employee]) -> StoreResult<ApiResponse> {
        let url = self.endpoint("SaveRecords");
        debug!("POST {} ({} records)", url, records.len());
        let response = self
            .client
            .post(&url)
            .json(records)
            .send()
            .map_err(|err| StoreError::Transport(err.to_string()))?;
        Self::decode(response)
    }
}
