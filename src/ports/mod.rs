//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Summarizer` - Port for LLM-backed summaries of recent decisions

mod summarizer;

pub use summarizer::{SummaryError, Summarizer};
