//! Bank of Korea ECOS `StatisticSearch` client for daily KRW/USD rates.

use crate::{DateRange, Result, Series, SeriesSource, SourceError, TimePoint};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

const BASE_URL: &str = "http://ecos.bok.or.kr/api/StatisticSearch";
/// Exchange rates statistic table
const STAT_CODE: &str = "036Y001";
/// Daily cycle
const CYCLE: &str = "DD";
/// KRW per USD item
const ITEM_CODE: &str = "0002";
const ROW_LIMIT: usize = 1000;
/// ECOS answers with this code when the query matched no rows at all.
/// That is valid data ("nothing in range"), not a failure.
const EMPTY_RESULT_CODE: &str = "INFO-200";

/// Blocking client for the ECOS daily exchange-rate series.
///
/// The API key is a path segment of every request, so it is never logged.
pub struct EcosRateClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct StatisticRow {
    #[serde(rename = "TIME")]
    time: String,
    #[serde(rename = "DATA_VALUE")]
    data_value: String,
}

#[derive(Debug, Deserialize)]
struct StatisticSearch {
    row: Vec<StatisticRow>,
}

#[derive(Debug, Deserialize)]
struct ApiResult {
    #[serde(rename = "CODE")]
    code: String,
    #[serde(rename = "MESSAGE")]
    message: String,
}

/// ECOS wraps successes under `StatisticSearch` and failures under a
/// top-level `RESULT` object.
#[derive(Debug, Deserialize)]
struct EcosPayload {
    #[serde(rename = "StatisticSearch")]
    statistic_search: Option<StatisticSearch>,
    #[serde(rename = "RESULT")]
    result: Option<ApiResult>,
}

impl EcosRateClient {
    /// Create a client with an explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a client with the API key from `ECOS_API_KEY` (`.env` supported)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("ECOS_API_KEY")
            .map_err(|_| SourceError::MissingConfig("ECOS_API_KEY".to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Override the endpoint base URL (for tests against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_url(&self, range: &DateRange) -> String {
        format!(
            "{}/{}/json/kr/1/{}/{}/{}/{}/{}/{}",
            self.base_url,
            self.api_key,
            ROW_LIMIT,
            STAT_CODE,
            CYCLE,
            range.start().format("%Y%m%d"),
            range.end().format("%Y%m%d"),
            ITEM_CODE,
        )
    }
}

impl SeriesSource for EcosRateClient {
    fn fetch(&self, range: &DateRange) -> Result<Series> {
        let response = self.client.get(self.request_url(range)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                endpoint: self.base_url.clone(),
            });
        }

        let body = response.text()?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "ECOS response received"
        );

        let series = decode_payload(&body)?;
        tracing::debug!(points = series.len(), "exchange-rate series decoded");
        Ok(series)
    }
}

/// Decode an ECOS response body into a series.
///
/// An `INFO-200` result code means the query matched nothing and maps to an
/// empty series; every other result code is surfaced as [`SourceError::Api`].
fn decode_payload(body: &str) -> Result<Series> {
    let payload: EcosPayload =
        serde_json::from_str(body).map_err(|e| SourceError::MalformedPayload(e.to_string()))?;

    if let Some(result) = payload.result {
        if result.code == EMPTY_RESULT_CODE {
            tracing::debug!(code = %result.code, "no observations in range");
            return Ok(Series::new());
        }
        return Err(SourceError::Api {
            code: result.code,
            message: result.message,
        });
    }

    let search = payload.statistic_search.ok_or_else(|| {
        SourceError::MalformedPayload(
            "response contains neither StatisticSearch nor RESULT".to_string(),
        )
    })?;

    search.row.iter().map(parse_row).collect()
}

fn parse_row(row: &StatisticRow) -> Result<TimePoint> {
    let date = NaiveDate::parse_from_str(row.time.trim(), "%Y%m%d")
        .map_err(|e| SourceError::InvalidRow(format!("bad TIME '{}': {}", row.time, e)))?;
    let value: f64 = row
        .data_value
        .trim()
        .parse()
        .map_err(|e| SourceError::InvalidRow(format!("bad DATA_VALUE '{}': {}", row.data_value, e)))?;
    Ok(TimePoint { date, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_statistic_rows() {
        let body = r#"{
            "StatisticSearch": {
                "list_total_count": 2,
                "row": [
                    {"TIME": "20250601", "DATA_VALUE": "1380.2"},
                    {"TIME": "20250602", "DATA_VALUE": "1381.5"}
                ]
            }
        }"#;

        let series = decode_payload(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.get(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()),
            Some(1381.5)
        );
    }

    #[test]
    fn empty_result_code_is_an_empty_series() {
        let body = r#"{"RESULT": {"CODE": "INFO-200", "MESSAGE": "no data"}}"#;
        let series = decode_payload(body).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn api_error_code_is_surfaced() {
        let body = r#"{"RESULT": {"CODE": "ERROR-100", "MESSAGE": "bad key"}}"#;
        let err = decode_payload(body).unwrap_err();
        match err {
            SourceError::Api { code, .. } => assert_eq!(code, "ERROR-100"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn junk_body_is_malformed() {
        let err = decode_payload("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, SourceError::MalformedPayload(_)));
    }

    #[test]
    fn unexpected_shape_is_malformed() {
        let err = decode_payload(r#"{"unexpected": true}"#).unwrap_err();
        assert!(matches!(err, SourceError::MalformedPayload(_)));
    }

    #[test]
    fn bad_value_is_an_invalid_row() {
        let body = r#"{
            "StatisticSearch": {
                "row": [{"TIME": "20250601", "DATA_VALUE": "n/a"}]
            }
        }"#;
        let err = decode_payload(body).unwrap_err();
        assert!(matches!(err, SourceError::InvalidRow(_)));
    }

    #[test]
    fn request_url_encodes_range_as_compact_dates() {
        let client = EcosRateClient::new("TESTKEY");
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .unwrap();

        let url = client.request_url(&range);
        assert!(url.contains("/TESTKEY/json/kr/1/1000/036Y001/DD/20250601/20250630/0002"));
    }
}
