//! Correlation fields shared by every record.

use uuid::Uuid;

/// Header (or message attribute) that carries the transaction ID between
/// services.
pub const X_TRANSACTION_ID: &str = "X-Transaction-ID";

pub const REQUEST_ID_KEY: &str = "request-id";
pub const SERVICE_NAME_KEY: &str = "service-name";

/// Service name used when none was set at build time.
pub const SERVICE_NAME_NOT_SET: &str = "not-set";

/// Name of this service, taken from the `SERVICE_NAME` environment
/// variable at compile time.
pub fn service_name() -> &'static str {
    option_env!("SERVICE_NAME").unwrap_or(SERVICE_NAME_NOT_SET)
}

/// Fresh transaction ID for a request that arrived without one.
pub fn new_transaction_id() -> String {
    Uuid::new_v4().to_string()
}
