//! Client for the deal analysis service.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Fixed endpoint of the analysis service.
pub const ANALYZE_URL: &str = "http://localhost:5000/analyze";

/// Fallback shown when the service fails without a usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Platform a deal was offered on. Serialized lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Youtube, Platform::Tiktok];

    /// Display label for the platform selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
            Self::Tiktok => "TikTok",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub platform: Platform,
    pub followers: f64,
    pub engagement_rate: f64,
    pub offer_amount: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub expected_range: [f64; 2],
    pub verdict: String,
    pub suggestion: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The service reported a message of its own.
    #[error("{0}")]
    Server(String),
    /// Non-2xx response without a usable message in the body.
    #[error("HTTP {0}")]
    Status(u16),
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    Json(String),
}

impl AnalyzeError {
    /// Message for the inline error slot: the server's own message when it
    /// sent one, the generic fallback otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(message) => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Shared HTTP agent. A submission is a single request that either settles
/// or fails; no retry or timeout layers are configured.
fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| ureq::AgentBuilder::new().build())
}

/// Submit one deal to the analysis service.
pub fn analyze_deal(request: &AnalyzeRequest) -> Result<AnalysisResult, AnalyzeError> {
    analyze_deal_at(ANALYZE_URL, request)
}

pub(crate) fn analyze_deal_at(
    url: &str,
    request: &AnalyzeRequest,
) -> Result<AnalysisResult, AnalyzeError> {
    let response = match agent()
        .post(url)
        .set("Accept", "application/json")
        .send_json(request)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = response.into_string().unwrap_or_default();
            return Err(error_from_status(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(AnalyzeError::Transport(err.to_string()));
        }
    };

    let body = response
        .into_string()
        .map_err(|err| AnalyzeError::Json(err.to_string()))?;
    parse_analysis_result(&body)
}

/// Failure body sent by the service. Any shape is tolerated; only a string
/// `error` field is used.
#[derive(Debug, Deserialize)]
struct ErrorBodyWire {
    error: Option<String>,
}

fn error_from_status(code: u16, body: &str) -> AnalyzeError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBodyWire>(body) {
        if let Some(message) = parsed.error {
            return AnalyzeError::Server(message);
        }
    }
    AnalyzeError::Status(code)
}

fn parse_analysis_result(body: &str) -> Result<AnalysisResult, AnalyzeError> {
    serde_json::from_str(body).map_err(|err| AnalyzeError::Json(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/analyze", addr)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    fn sample_request() -> AnalyzeRequest {
        AnalyzeRequest {
            platform: Platform::Instagram,
            followers: 20000.0,
            engagement_rate: 0.0,
            offer_amount: 500.0,
        }
    }

    #[test]
    fn request_serializes_with_camel_case_and_lowercase_platform() {
        let value = serde_json::to_value(sample_request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "platform": "instagram",
                "followers": 20000.0,
                "engagementRate": 0.0,
                "offerAmount": 500.0,
            })
        );
    }

    #[test]
    fn non_numeric_followers_serialize_as_null() {
        let mut request = sample_request();
        request.followers = f64::NAN;
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["followers"], serde_json::Value::Null);
    }

    #[test]
    fn parses_success_body() {
        let body = r#"{"expectedRange":[100.5,200.25],"verdict":"Fair","suggestion":"Negotiate higher"}"#;
        let result = parse_analysis_result(body).unwrap();
        assert_eq!(result.expected_range, [100.5, 200.25]);
        assert_eq!(result.verdict, "Fair");
        assert_eq!(result.suggestion, "Negotiate higher");
    }

    #[test]
    fn rejects_success_body_with_wrong_shape() {
        let err = parse_analysis_result(r#"{"verdict":"Fair"}"#).unwrap_err();
        assert!(matches!(err, AnalyzeError::Json(_)));
    }

    #[test]
    fn status_error_uses_server_message_when_present() {
        let err = error_from_status(400, r#"{"error":"Invalid platform"}"#);
        assert!(matches!(err, AnalyzeError::Server(ref m) if m == "Invalid platform"));
        assert_eq!(err.user_message(), "Invalid platform");
    }

    #[test]
    fn status_error_falls_back_without_message() {
        assert_eq!(
            error_from_status(500, "").user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            error_from_status(502, "<html>bad gateway</html>").user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            error_from_status(500, r#"{"message":"nope"}"#).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn analyze_returns_result_on_success_response() {
        let body = r#"{"expectedRange":[150.0,300.0],"verdict":"Low","suggestion":"Ask for more"}"#;
        let url = serve_once(http_response("200 OK", body));
        let result = analyze_deal_at(&url, &sample_request()).unwrap();
        assert_eq!(result.verdict, "Low");
        assert_eq!(result.expected_range, [150.0, 300.0]);
    }

    #[test]
    fn analyze_surfaces_server_error_message() {
        let url = serve_once(http_response(
            "400 Bad Request",
            r#"{"error":"Invalid platform"}"#,
        ));
        let err = analyze_deal_at(&url, &sample_request()).unwrap_err();
        assert_eq!(err.user_message(), "Invalid platform");
    }

    #[test]
    fn analyze_maps_empty_error_body_to_generic_message() {
        let url = serve_once(http_response("500 Internal Server Error", ""));
        let err = analyze_deal_at(&url, &sample_request()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Status(500)));
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn analyze_maps_connection_failure_to_transport() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err =
            analyze_deal_at(&format!("http://{}/analyze", addr), &sample_request()).unwrap_err();
        assert!(matches!(err, AnalyzeError::Transport(_)));
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
