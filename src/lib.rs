//! snake - a minimal request/response server over raw TCP
//!
//! Serves a home page and static assets with a hand-written, intentionally
//! small protocol layer modelled on HTTP/1.1.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
