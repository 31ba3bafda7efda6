//! NetSuite integration adapter
//!
//! HTTP client for the order-synchronization endpoint, bearer-token
//! issuance, and the wire response models.

pub mod client;
pub mod models;
pub mod token;

pub use client::{CalloutResult, NetSuiteClient};
pub use models::SyncResponse;
pub use token::{AccessToken, OAuthTokenProvider, TokenProvider};
