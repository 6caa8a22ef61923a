// --- File: src/lib.rs ---
// Declare modules within this crate
pub mod appointments;
#[cfg(test)]
mod appointments_proptest;
pub mod auth;
pub mod client;
pub mod customers;
pub mod error;
pub mod logging;
pub mod notify;

// Re-export the surface most callers need
pub use appointments::{map_appointment, Appointment, BackendAppointment};
pub use auth::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use notify::{LogNotice, ServiceNotice};
