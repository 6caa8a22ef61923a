// --- File: src/appointments.rs ---
//! Appointment access functions and the backend-to-display record mapper.
//!
//! The backend returns appointments either with nested `servico`/`barbeiro`/
//! `cliente` objects (joined rows) or with flat denormalized columns
//! (`servicoNome`, `barbeiroEmail`, ...), depending on the endpoint. The
//! mapper flattens both variants into one display-ready shape with locale
//! date/time strings, so presentation code never sees the difference.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::America::Sao_Paulo;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Placeholder for display fields with no resolvable source value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Status assumed when the backend omits one.
pub const STATUS_PENDING: &str = "PENDENTE";

// --- Backend shape ---

/// Appointment as returned by the backend. Every field is optional; nested
/// objects and flat columns carry the same data under different keys.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendAppointment {
    pub id: Option<i64>,
    #[serde(rename = "servico")]
    pub service: Option<ServiceRef>,
    #[serde(rename = "servicoNome")]
    pub service_name: Option<String>,
    #[serde(rename = "servicoId")]
    pub service_id: Option<i64>,
    #[serde(rename = "barbeiro")]
    pub barber: Option<BarberRef>,
    #[serde(rename = "barbeiroNome")]
    pub barber_name: Option<String>,
    #[serde(rename = "barbeiroEmail")]
    pub barber_email: Option<String>,
    #[serde(rename = "cliente")]
    pub customer: Option<CustomerRef>,
    #[serde(rename = "clienteNome")]
    pub customer_name: Option<String>,
    #[serde(rename = "clienteEmail")]
    pub customer_email: Option<String>,
    /// ISO 8601 timestamp of the booked slot.
    #[serde(rename = "horario")]
    pub scheduled_at: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceRef {
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarberRef {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerRef {
    pub email: Option<String>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
}

// --- Display shape ---

/// Flattened, display-ready appointment. Serializes with the field names the
/// frontend consumes (`servico`, `data`, `hora`, ...). Display strings always
/// hold a value; `"N/A"` stands in for anything unresolvable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Appointment {
    pub id: Option<i64>,
    #[serde(rename = "servico")]
    pub service: String,
    #[serde(rename = "servicoId")]
    pub service_id: Option<i64>,
    #[serde(rename = "barbeiro")]
    pub barber: String,
    #[serde(rename = "barbeiroEmail")]
    pub barber_email: Option<String>,
    #[serde(rename = "clienteEmail")]
    pub customer_email: Option<String>,
    #[serde(rename = "clienteNome")]
    pub customer_name: Option<String>,
    /// Raw backend timestamp, passed through unchanged.
    #[serde(rename = "horario")]
    pub scheduled_at: Option<String>,
    /// `dd/mm/yyyy`, derived from `horario` in America/Sao_Paulo.
    #[serde(rename = "data")]
    pub date: String,
    /// 24-hour `HH:MM`, derived from `horario` in America/Sao_Paulo.
    #[serde(rename = "hora")]
    pub time: String,
    pub status: String,
}

// --- Record mapper ---

// Ordered fallback used for every display attribute: nested value first, then
// the flat column. Empty strings count as absent.
fn resolve(nested: Option<&str>, flat: Option<&str>) -> Option<String> {
    nested
        .filter(|v| !v.is_empty())
        .or_else(|| flat.filter(|v| !v.is_empty()))
        .map(str::to_string)
}

fn resolve_display(nested: Option<&str>, flat: Option<&str>) -> String {
    resolve(nested, flat).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn parse_scheduled_at(raw: &str) -> Option<DateTime<chrono_tz::Tz>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Sao_Paulo));
    }
    // Some rows arrive without an offset; treat those as local backend time.
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Sao_Paulo.from_local_datetime(&naive).single()
}

fn format_scheduled_at(raw: Option<&str>) -> (String, String) {
    match raw.and_then(parse_scheduled_at) {
        Some(local) => (
            local.format("%d/%m/%Y").to_string(),
            local.format("%H:%M").to_string(),
        ),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

/// Flattens a backend record into the display shape.
///
/// Total: every display field has a defined fallback, so no input produces an
/// error. The raw timestamp passes through unchanged next to its formatted
/// `data`/`hora` companions.
pub fn map_appointment(raw: BackendAppointment) -> Appointment {
    let (date, time) = format_scheduled_at(raw.scheduled_at.as_deref());
    Appointment {
        id: raw.id,
        service: resolve_display(
            raw.service.as_ref().and_then(|s| s.name.as_deref()),
            raw.service_name.as_deref(),
        ),
        service_id: raw.service.as_ref().and_then(|s| s.id).or(raw.service_id),
        barber: resolve_display(
            raw.barber.as_ref().and_then(|b| b.name.as_deref()),
            raw.barber_name.as_deref(),
        ),
        barber_email: resolve(
            raw.barber.as_ref().and_then(|b| b.email.as_deref()),
            raw.barber_email.as_deref(),
        ),
        customer_email: resolve(
            raw.customer.as_ref().and_then(|c| c.email.as_deref()),
            raw.customer_email.as_deref(),
        ),
        customer_name: resolve(
            raw.customer.as_ref().and_then(|c| c.name.as_deref()),
            raw.customer_name.as_deref(),
        ),
        scheduled_at: raw.scheduled_at,
        date,
        time,
        status: raw
            .status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| STATUS_PENDING.to_string()),
    }
}

// List endpoints occasionally answer with something other than an array
// (error envelopes, null). Those render as an empty list, not as an error.
fn parse_list(value: Value) -> Result<Vec<Appointment>, ApiError> {
    match value {
        Value::Array(items) => {
            let mut mapped = Vec::with_capacity(items.len());
            for item in items {
                let raw: BackendAppointment = serde_json::from_value(item)?;
                mapped.push(map_appointment(raw));
            }
            Ok(mapped)
        }
        _ => Ok(Vec::new()),
    }
}

// Single-record endpoints answer null when nothing matched.
fn parse_record(value: Value) -> Result<Option<Appointment>, ApiError> {
    if value.is_null() {
        return Ok(None);
    }
    let raw: BackendAppointment = serde_json::from_value(value)?;
    Ok(Some(map_appointment(raw)))
}

// Builds the update body: the identifier plus the changed fields in one
// object, the shape the backend expects.
fn merge_id<T: Serialize>(id: i64, changes: &T) -> Result<Value, ApiError> {
    let mut body = match serde_json::to_value(changes) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => serde_json::Map::new(),
        Ok(_) => {
            return Err(ApiError::EncodingError(
                "appointment changes must serialize to a JSON object".to_string(),
            ))
        }
        Err(e) => return Err(ApiError::EncodingError(e.to_string())),
    };
    body.insert("id".to_string(), Value::from(id));
    Ok(Value::Object(body))
}

// --- Access functions ---

/// Fetches every appointment (admin view).
pub async fn list_appointments(client: &ApiClient) -> Result<Vec<Appointment>, ApiError> {
    client
        .get("/agendamento/buscarTodosAgendamentos", &[])
        .await
        .and_then(parse_list)
        .map_err(|err| {
            error!("failed to list appointments: {err}");
            err
        })
}

/// Fetches the appointments of one customer, filtered server-side.
pub async fn list_appointments_by_customer(
    client: &ApiClient,
    email: &str,
) -> Result<Vec<Appointment>, ApiError> {
    let query = [("email", email.to_string())];
    client
        .get("/agendamento/buscarPorCliente", &query)
        .await
        .and_then(parse_list)
        .map_err(|err| {
            error!("failed to list appointments for customer: {err}");
            err
        })
}

/// Fetches one appointment by id; `None` when the backend answers null.
pub async fn get_appointment(
    client: &ApiClient,
    id: i64,
) -> Result<Option<Appointment>, ApiError> {
    let query = [("id", id.to_string())];
    client
        .get("/agendamento/buscarAgendamento", &query)
        .await
        .and_then(parse_record)
        .map_err(|err| {
            error!("failed to fetch appointment {id}: {err}");
            err
        })
}

/// Books a new appointment. The backend owns the payload schema; the caller
/// forwards its form state as-is.
pub async fn create_appointment<T: Serialize>(
    client: &ApiClient,
    payload: &T,
) -> Result<Option<Appointment>, ApiError> {
    client
        .post("/agendamento/criarAgendamento", payload)
        .await
        .and_then(parse_record)
        .map_err(|err| {
            error!("failed to create appointment: {err}");
            err
        })
}

/// Updates an appointment: `id` plus the changed fields travel as one body.
pub async fn update_appointment<T: Serialize>(
    client: &ApiClient,
    id: i64,
    changes: &T,
) -> Result<Option<Appointment>, ApiError> {
    let body = merge_id(id, changes).map_err(|err| {
        error!("failed to update appointment {id}: {err}");
        err
    })?;
    client
        .put("/agendamento/atualizarAgendamento", &body)
        .await
        .and_then(parse_record)
        .map_err(|err| {
            error!("failed to update appointment {id}: {err}");
            err
        })
}

/// Cancels an appointment. The response body is discarded.
pub async fn cancel_appointment(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let query = [("id", id.to_string())];
    client
        .delete("/agendamento/cancelarAgendamento", &query)
        .await
        .map(|_| ())
        .map_err(|err| {
            error!("failed to cancel appointment {id}: {err}");
            err
        })
}

/// Removes an appointment record entirely. The response body is discarded.
pub async fn delete_appointment(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    let query = [("id", id.to_string())];
    client
        .delete("/agendamento/deletarAgendamento", &query)
        .await
        .map(|_| ())
        .map_err(|err| {
            error!("failed to delete appointment {id}: {err}");
            err
        })
}
