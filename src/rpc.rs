use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use tracing::debug;

use crate::error::LoadError;
use crate::models::PartialPortfolio;

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: u64 = 1;
pub const GET_OBJECT_METHOD: &str = "sui_getObject";

const FIELDS_POINTER: &str = "/result/data/content/fields";
const DEFAULT_REMOTE_ERROR: &str = "Failed to fetch from blockchain";

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: (&'a str, ObjectDataOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDataOptions {
    pub show_content: bool,
    pub show_owner: bool,
    pub show_previous_transaction: bool,
    pub show_storage_rebate: bool,
    pub show_display: bool,
    pub show_bcs: bool,
    pub show_type: bool,
}

impl Default for ObjectDataOptions {
    fn default() -> Self {
        Self {
            show_content: true,
            show_owner: true,
            show_previous_transaction: true,
            show_storage_rebate: true,
            show_display: false,
            show_bcs: false,
            show_type: true,
        }
    }
}

pub fn get_object_request(object_id: &str) -> Result<Value, LoadError> {
    let request = JsonRpcRequest {
        jsonrpc: JSONRPC_VERSION,
        id: REQUEST_ID,
        method: GET_OBJECT_METHOD,
        params: (object_id, ObjectDataOptions::default()),
    };
    Ok(serde_json::to_value(request)?)
}

/// Raw HTTP reply, before any JSON handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcReply {
    pub status: u16,
    pub body: String,
}

impl RpcReply {
    #[cfg(test)]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON body to one URL.
pub trait RpcTransport {
    fn post_json(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<RpcReply, LoadError>> + Send;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RpcReply, LoadError> {
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RpcReply { status, body })
    }
}

/// Pulls the portfolio fields out of a `sui_getObject` reply.
pub fn parse_object_reply(reply: &RpcReply) -> Result<PartialPortfolio, LoadError> {
    if !reply.is_success() {
        return Err(LoadError::Transport(format!("HTTP status {}", reply.status)));
    }

    let value: Value = serde_json::from_str(&reply.body)?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_REMOTE_ERROR);
        return Err(LoadError::Remote(message.to_string()));
    }

    match value.pointer(FIELDS_POINTER) {
        Some(fields) if fields.is_object() => Ok(PartialPortfolio::deserialize(fields)?),
        _ => Err(LoadError::MissingData),
    }
}
