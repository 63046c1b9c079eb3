//! Synchronous client for the account-management REST API.
//!
//! # Overview
//! The API speaks JSON envelopes: every payload travels as `{"data": ...}`
//! and server-side failures come back as `{"error_message": "..."}`.
//! [`RestClient`] owns the envelope handling (wrapping outbound payloads,
//! unwrapping responses, turning a non-empty `error_message` into an
//! error), while [`AccountsService`] exposes typed Create/Get/Delete
//! operations for the account resource on top of it.
//!
//! # Design
//! - HTTP requests and responses are plain data (`HttpRequest` /
//!   `HttpResponse`); the network round-trip happens behind the
//!   [`HttpTransport`] trait, so tests substitute closures for the real
//!   stack. `UreqTransport` is the default production transport.
//! - Every call takes a [`CallContext`] carrying an optional deadline. The
//!   remaining budget is forwarded to the transport as the request timeout.
//! - Errors that occur after a response arrived ([`ClientError::Decode`],
//!   [`ClientError::Api`]) carry the response metadata, so callers can
//!   branch on HTTP status even on failure.
//! - No retries, no caching, no shared mutable state between calls.

pub mod accounts;
pub mod client;
pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod http;
pub mod types;

pub use accounts::AccountsService;
pub use client::RestClient;
pub use config::ApiConfig;
pub use context::CallContext;
pub use error::{ClientError, TransportError};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ResponseMeta, UreqTransport,
};
pub use types::{Account, AccountAttributes, Envelope};
