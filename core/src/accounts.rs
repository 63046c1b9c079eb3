//! Typed operations on the `organisation/accounts` resource.
//!
//! A thin facade over [`RestClient`]: each operation is one request against
//! a fixed path template, with the envelope handling left entirely to the
//! client layer. There is no delete special-casing: the server's
//! `error_message` is surfaced whenever the envelope carries one, and an
//! empty-body response (whatever its status) is not an error.

use crate::client::RestClient;
use crate::context::CallContext;
use crate::error::ClientError;
use crate::http::ResponseMeta;
use crate::types::Account;

const ACCOUNTS_BASE_PATH: &str = "organisation/accounts";

/// Create/fetch/delete operations for account resources.
pub struct AccountsService {
    client: RestClient,
}

impl AccountsService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Register `account` and return the server's canonical copy, carrying
    /// the assigned version and timestamps.
    pub fn create(
        &self,
        ctx: Option<&CallContext>,
        account: &Account,
    ) -> Result<(Option<Account>, ResponseMeta), ClientError> {
        let request = self.client.post_request(ACCOUNTS_BASE_PATH, account)?;
        let (meta, created) = self.client.execute(ctx, request)?;
        Ok((created, meta))
    }

    /// Fetch an account by id.
    pub fn fetch(
        &self,
        ctx: Option<&CallContext>,
        id: &str,
    ) -> Result<(Option<Account>, ResponseMeta), ClientError> {
        let request = self
            .client
            .get_request(&format!("{ACCOUNTS_BASE_PATH}/{id}"))?;
        let (meta, account) = self.client.execute(ctx, request)?;
        Ok((account, meta))
    }

    /// Delete an account. `version` must match the server's current version
    /// or the server answers with a conflict.
    pub fn delete(
        &self,
        ctx: Option<&CallContext>,
        id: &str,
        version: i64,
    ) -> Result<ResponseMeta, ClientError> {
        let request = self
            .client
            .delete_request(&format!("{ACCOUNTS_BASE_PATH}/{id}?version={version}"))?;
        self.client.execute_discarding(ctx, request)
    }
}
