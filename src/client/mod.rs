//! HTTP clients for the CarloSphere backend.
//!
//! `HttpClient` is the thin reqwest wrapper (base URL, JSON headers, bearer
//! auth); `SphereClient` is the typed API surface on top of it.

pub mod http;
pub mod sphere;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::{HttpClient, HttpConfig};
pub use sphere::{RemotePinVerifier, SignupRequest, SphereClient};
