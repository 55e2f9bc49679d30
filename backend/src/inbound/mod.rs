//! Inbound adapters that translate external requests into storage calls
//! while keeping framework details at the edge.

pub mod http;
