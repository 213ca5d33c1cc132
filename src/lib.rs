// Chargily - a typed Rust client for the Chargily Pay payment gateway
//
// This library re-exports the API client and the HTTP transport it runs on.

// Re-export the client
pub use chargily_pay::*;

// Re-export the transport crate
pub use chargily_http;

// Prelude for common imports
pub mod prelude {
    pub use chargily_pay::prelude::*;
}
