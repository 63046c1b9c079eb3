//! HTTP data types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data with owned fields. The client
//! builds [`HttpRequest`] values and hands them to an [`HttpTransport`] for
//! the round-trip; everything the client decides (envelope handling, status
//! interpretation) happens on the data, never inside the transport. Test
//! doubles are just closures over a request.

use std::time::Duration;

use crate::error::TransportError;

/// HTTP method for a request. Only the verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`crate::RestClient`] request builders. `timeout` is the
/// remaining budget of the call context at dispatch time; transports must
/// abort the request once it elapses.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

/// An HTTP response described as plain data.
///
/// Transports must read the body to the end on every path so the underlying
/// connection is released.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Status and headers of a received response.
///
/// Returned to callers on success and carried inside the error variants
/// that occur after a response arrived, so HTTP status branching works on
/// failure paths too.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl ResponseMeta {
    pub(crate) fn of(response: &HttpResponse) -> Self {
        Self {
            status: response.status,
            headers: response.headers.clone(),
        }
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The one capability the client needs from an HTTP stack: send a prepared
/// request, produce a response or a transport-level error.
///
/// A transport failure means no response was received at all; non-2xx
/// statuses are responses, not errors.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Any closure over a request is a transport. This is the seam tests use.
impl<F> HttpTransport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// Default production transport backed by a ureq agent.
///
/// Status-as-error is disabled so 4xx/5xx responses come back as data and
/// the client decides what a status means.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => {
                let mut req = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                if let Some(timeout) = request.timeout {
                    req = req.config().timeout_global(Some(timeout)).build();
                }
                req.call()
            }
            (HttpMethod::Delete, _) => {
                let mut req = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                if let Some(timeout) = request.timeout {
                    req = req.config().timeout_global(Some(timeout)).build();
                }
                req.call()
            }
            (HttpMethod::Post, Some(body)) => {
                let mut req = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                if let Some(timeout) = request.timeout {
                    req = req.config().timeout_global(Some(timeout)).build();
                }
                req.send(body.as_bytes())
            }
            (HttpMethod::Post, None) => {
                let mut req = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                if let Some(timeout) = request.timeout {
                    req = req.config().timeout_global(Some(timeout)).build();
                }
                req.send_empty()
            }
        };

        let mut response = result.map_err(TransportError::from)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // Reading to the end also drains the connection for reuse.
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(TransportError::from)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_as_str_matches_wire_form() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn response_meta_header_lookup_is_case_insensitive() {
        let meta = ResponseMeta {
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        };
        assert_eq!(meta.header("content-type"), Some("application/json"));
        assert_eq!(meta.header("x-request-id"), None);
    }

    #[test]
    fn closures_are_transports() {
        let transport = |req: &HttpRequest| -> Result<HttpResponse, TransportError> {
            assert_eq!(req.url, "http://localhost/ping");
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: String::new(),
            })
        };
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/ping".to_string(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        };
        let response = transport.execute(&request).unwrap();
        assert_eq!(response.status, 200);
    }
}
