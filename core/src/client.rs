//! Generic REST client with envelope semantics.
//!
//! # Design
//! [`RestClient`] holds a base URL and a transport, both fixed at
//! construction, and carries no mutable state between calls. Request
//! builders compose `base + "/" + path` (a leading slash on the path is
//! stripped) and wrap POST payloads in the request envelope. [`execute`]
//! runs the response pipeline: empty body is success, a non-empty
//! `error_message` is the server's error verbatim, and otherwise `data` is
//! decoded directly into the caller's type. The envelope is parsed once,
//! with no re-encoding round trip.
//!
//! [`execute`]: RestClient::execute

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::context::CallContext;
use crate::error::{ClientError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpTransport, ResponseMeta, UreqTransport};
use crate::types::Envelope;

/// Client for an envelope-speaking REST API.
///
/// A single instance can serve concurrent callers; every method takes
/// `&self` and the transport is invoked without any client-side locking.
pub struct RestClient {
    transport: Box<dyn HttpTransport + Send + Sync>,
    base_url: String,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Client over the default [`UreqTransport`].
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_transport(Box::new(UreqTransport::new()), base_url)
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(
        transport: Box<dyn HttpTransport + Send + Sync>,
        base_url: &str,
    ) -> Result<Self, ClientError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|err| ClientError::Config(format!("{base_url:?}: {err}")))?;
        Ok(Self {
            transport,
            base_url: trimmed.to_string(),
        })
    }

    /// GET request against `path`.
    pub fn get_request(&self, path: &str) -> Result<HttpRequest, ClientError> {
        self.build_request(HttpMethod::Get, path, None)
    }

    /// POST request against `path`, with `data` wrapped in the request
    /// envelope and a JSON content type.
    pub fn post_request<T: Serialize>(
        &self,
        path: &str,
        data: &T,
    ) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(&Envelope::wrap(data)).map_err(ClientError::Serialization)?;
        self.build_request(HttpMethod::Post, path, Some(body))
    }

    /// DELETE request against `path`.
    pub fn delete_request(&self, path: &str) -> Result<HttpRequest, ClientError> {
        self.build_request(HttpMethod::Delete, path, None)
    }

    fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpRequest, ClientError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&url).map_err(|err| ClientError::RequestBuild(format!("{url:?}: {err}")))?;

        let mut headers = Vec::new();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: None,
        })
    }

    /// Run `request` and decode the envelope's `data` into `T`.
    ///
    /// The response metadata is produced whenever the transport produced a
    /// response; failures past that point carry it inside the error. A
    /// zero-byte body is success with no payload and no decode attempt.
    pub fn execute<T: DeserializeOwned>(
        &self,
        ctx: Option<&CallContext>,
        request: HttpRequest,
    ) -> Result<(ResponseMeta, Option<T>), ClientError> {
        let (meta, data) = self.dispatch(ctx, request)?;
        let payload = match data {
            Some(value) => Some(serde_json::from_value(value).map_err(|source| {
                ClientError::Decode {
                    source,
                    response: meta.clone(),
                }
            })?),
            None => None,
        };
        Ok((meta, payload))
    }

    /// Run `request` without decoding a payload, for endpoints that answer
    /// with no content.
    pub fn execute_discarding(
        &self,
        ctx: Option<&CallContext>,
        request: HttpRequest,
    ) -> Result<ResponseMeta, ClientError> {
        let (meta, _) = self.dispatch(ctx, request)?;
        Ok(meta)
    }

    fn dispatch(
        &self,
        ctx: Option<&CallContext>,
        mut request: HttpRequest,
    ) -> Result<(ResponseMeta, Option<Value>), ClientError> {
        let ctx = ctx.ok_or(ClientError::InvalidArgument("a call context is required"))?;
        if ctx.is_expired() {
            return Err(TransportError::timeout("deadline expired before dispatch").into());
        }
        request.timeout = ctx.remaining();

        debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
        let response = self.transport.execute(&request).map_err(|err| {
            debug!(error = %err, "transport failure");
            ClientError::Transport(err)
        })?;
        let meta = ResponseMeta::of(&response);
        debug!(status = meta.status, bytes = response.body.len(), "response received");

        if response.body.is_empty() {
            return Ok((meta, None));
        }

        let envelope: Envelope<Value> =
            serde_json::from_str(&response.body).map_err(|source| ClientError::Decode {
                source,
                response: meta.clone(),
            })?;

        // The server's message wins over whatever is in `data`.
        if let Some(message) = envelope.error_message.filter(|message| !message.is_empty()) {
            return Err(ClientError::Api {
                message,
                response: meta,
            });
        }

        Ok((meta, envelope.data))
    }
}
