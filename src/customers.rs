// --- File: src/customers.rs ---
//! Customer access functions.
//!
//! Customers are identified by email and need no reshaping: whatever the
//! backend returns is what presentation code consumes, so payloads travel as
//! [`serde_json::Value`] in both directions.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::client::ApiClient;
use crate::error::ApiError;

// Same non-array tolerance as the appointment list endpoints.
fn as_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

/// Registers a new customer.
pub async fn create_customer<T: Serialize>(
    client: &ApiClient,
    payload: &T,
) -> Result<Value, ApiError> {
    client.post("/criarCliente", payload).await.map_err(|err| {
        error!("failed to create customer: {err}");
        err
    })
}

/// Updates an existing customer record.
pub async fn update_customer<T: Serialize>(
    client: &ApiClient,
    payload: &T,
) -> Result<Value, ApiError> {
    client
        .put("/atualizarCliente", payload)
        .await
        .map_err(|err| {
            error!("failed to update customer: {err}");
            err
        })
}

/// Deletes a customer by email. The response body is discarded.
pub async fn delete_customer(client: &ApiClient, email: &str) -> Result<(), ApiError> {
    let query = [("email", email.to_string())];
    client
        .delete("/deletarCliente", &query)
        .await
        .map(|_| ())
        .map_err(|err| {
            error!("failed to delete customer: {err}");
            err
        })
}

/// Fetches one customer by email.
pub async fn get_customer(client: &ApiClient, email: &str) -> Result<Value, ApiError> {
    let query = [("email", email.to_string())];
    client.get("/buscarCliente", &query).await.map_err(|err| {
        error!("failed to fetch customer: {err}");
        err
    })
}

/// Fetches every customer; non-array bodies render as an empty list.
pub async fn list_customers(client: &ApiClient) -> Result<Vec<Value>, ApiError> {
    client
        .get("/buscarTodosClientes", &[])
        .await
        .map(as_list)
        .map_err(|err| {
            error!("failed to list customers: {err}");
            err
        })
}
