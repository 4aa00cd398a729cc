//! Remote catalog API: wire types and the stateless page-fetching client.

pub mod client;
pub mod models;

pub use client::ApiClient;
