//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::request_handler::RequestHandler;
use crate::{TransactionError, TransactionReceipt, TransactionRequest, WalletProvider};
use alloy_primitives::{Address, Bytes, TxHash, U64};
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

impl<T> Default for JsonRpcResponse<T> {
    fn default() -> Self {
        Self { result: None, error: None }
    }
}

#[derive(Debug, Default, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// A wallet reached over HTTP JSON-RPC. The node holds the account keys and signs
/// `eth_sendTransaction` requests itself.
pub struct JsonRpcProvider {
    url: Url,
    handler: RequestHandler,
    next_id: AtomicU64,
}

impl JsonRpcProvider {
    pub fn new(url: Url) -> Self {
        Self::with_client(url, Client::new())
    }

    pub fn with_client(url: Url, client: Client) -> Self {
        Self {
            url,
            handler: RequestHandler::new(client),
            next_id: AtomicU64::new(1),
        }
    }

    async fn request<T>(&self, method: &str, params: Value) -> Result<Option<T>, TransactionError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!(target: "log", "JSON-RPC {} #{}", method, request.id);

        let response: JsonRpcResponse<T> = self.handler.send(Method::POST, self.url.clone(), Some(&request)).await?;
        if let Some(error) = response.error {
            return Err(TransactionError::Rpc(format!("{} (code {})", error.message, error.code)));
        }
        Ok(response.result)
    }

    async fn request_required<T>(&self, method: &str, params: Value) -> Result<T, TransactionError>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.request(method, params)
            .await?
            .ok_or_else(|| TransactionError::InvalidResponse(format!("{} returned no result", method)))
    }
}

#[async_trait]
impl WalletProvider for JsonRpcProvider {
    async fn chain_id(&self) -> Result<u64, TransactionError> {
        let chain_id: U64 = self.request_required("eth_chainId", json!([])).await?;
        Ok(chain_id.to())
    }

    async fn account(&self) -> Result<Address, TransactionError> {
        let accounts: Vec<Address> = self.request_required("eth_accounts", json!([])).await?;
        accounts
            .into_iter()
            .next()
            .ok_or_else(|| TransactionError::InvalidResponse("No account is connected".to_string()))
    }

    async fn call(&self, tx: &TransactionRequest) -> Result<Bytes, TransactionError> {
        self.request_required("eth_call", json!([tx, "latest"])).await
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, TransactionError> {
        let gas: U64 = self
            .request_required("eth_estimateGas", json!([tx]))
            .await
            .map_err(|err| TransactionError::GasEstimation(err.to_string()))?;
        Ok(gas.to())
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, TransactionError> {
        self.request_required("eth_sendTransaction", json!([tx])).await
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, TransactionError> {
        self.request("eth_getTransactionReceipt", json!([hash])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_chainId",
            params: json!([]),
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"jsonrpc":"2.0","id":7,"method":"eth_chainId","params":[]}"#);
    }

    #[test]
    fn test_response_deserialization() {
        let response: JsonRpcResponse<U64> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#).unwrap();
        assert_eq!(response.result, Some(U64::from(1)));
        assert!(response.error.is_none());

        let pending: JsonRpcResponse<TransactionReceipt> = serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":null}"#).unwrap();
        assert!(pending.result.is_none());

        let failed: JsonRpcResponse<U64> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#).unwrap();
        assert_eq!(failed.error.map(|e| e.message), Some("execution reverted".to_string()));
    }
}
