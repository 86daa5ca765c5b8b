//! Web-search collaborator integration
//!
//! This module wraps the external search service behind a single
//! "run query, get text" contract. The crate only supplies the query string
//! and flattens the JSON response into readable text; ranking, crawling and
//! freshness are entirely the collaborator's concern.

pub mod client;
pub mod response;

pub use client::SearchClient;
pub use response::SearchResponse;
