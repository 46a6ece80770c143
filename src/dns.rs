//! DNS-over-HTTPS anchor verification.
//!
//! One GET against a JSON DoH endpoint per verification; no retries. The
//! anchoring content is the lowercase hex SHA-256 of the signed metadata and
//! must appear as a substring of some TXT record under the derived hostname.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{PtxError, PtxResult};

/// Public resolver queried by default.
pub const DEFAULT_DOH_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

const TXT_RECORD_TYPE: u16 = 16;

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Status")]
    status: i64,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type", default)]
    record_type: u16,
    #[serde(default)]
    data: String,
}

/// Thin wrapper over a process-scoped HTTP client and a DoH endpoint.
#[derive(Clone)]
pub struct DohResolver {
    client: Client,
    endpoint: String,
}

impl DohResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// All TXT records for `hostname`, surrounding quotes stripped.
    pub async fn txt_records(&self, hostname: &str) -> PtxResult<Vec<String>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", hostname), ("type", "TXT")])
            .header(ACCEPT, "application/dns-json")
            .send()
            .await
            .map_err(|err| PtxError::DnsLookupFailed(err.to_string()))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(PtxError::DnsLookupFailed(format!(
                "DoH endpoint returned HTTP {status}"
            )));
        }

        let body: DohResponse = response
            .json()
            .await
            .map_err(|err| PtxError::DnsLookupFailed(format!("invalid DoH body: {err}")))?;
        if body.status != 0 {
            return Err(PtxError::DnsLookupFailed(format!(
                "resolver status {}",
                body.status
            )));
        }

        let records: Vec<String> = body
            .answer
            .into_iter()
            .filter(|answer| answer.record_type == TXT_RECORD_TYPE)
            .map(|answer| answer.data.trim_matches('"').to_string())
            .collect();
        debug!(hostname, records = records.len(), "DoH TXT lookup complete");
        Ok(records)
    }

    /// Checks that some TXT record under `hostname` contains `expected`.
    pub async fn verify_anchor(&self, hostname: &str, expected: &str) -> PtxResult<()> {
        let records = self.txt_records(hostname).await?;
        if records.iter().any(|record| record.contains(expected)) {
            Ok(())
        } else {
            Err(PtxError::DnsAnchorMismatch {
                hostname: hostname.to_string(),
                expected: expected.to_string(),
            })
        }
    }
}
