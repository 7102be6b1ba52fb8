//! Routing and handlers for the served site.
//!
//! [`Site`] is the context shared by every connection: the content roots, the
//! file access used to read them, and the visit counter. [`Site::dispatch`]
//! runs one data event through parse, route and handle.

pub mod fs;
pub mod handlers;
pub mod router;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::StaticConfig;
use crate::http::parser::parse_request;
use crate::http::request::Request;
use crate::http::response::Response;
use fs::FileSystem;
use handlers::HandlerError;
use router::Route;

/// Home page visits since the process started. Not persisted.
#[derive(Debug, Default)]
pub struct VisitCounter(AtomicU64);

impl VisitCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Adds one visit and returns the new total.
    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Site<F> {
    static_root: PathBuf,
    page_root: PathBuf,
    fs: F,
    visits: VisitCounter,
}

impl<F: FileSystem> Site<F> {
    pub fn new(config: &StaticConfig, fs: F) -> Self {
        Self {
            static_root: config.root.clone(),
            page_root: config.page_root.clone(),
            fs,
            visits: VisitCounter::new(),
        }
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    pub fn page_root(&self) -> &Path {
        &self.page_root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn visits(&self) -> &VisitCounter {
        &self.visits
    }

    /// Turns the raw bytes of one data event into the response to send back.
    ///
    /// Never fails: malformed input and missing files become the empty 404,
    /// unreadable files become an empty 500.
    pub fn dispatch(&self, data: &[u8]) -> Response {
        match parse_request(data) {
            Ok(request) => self.handle(&request),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request");
                Response::not_found()
            }
        }
    }

    pub fn handle(&self, request: &Request) -> Response {
        let route = Route::resolve(request);
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            route = route.name(),
            "routing request"
        );

        let result = match route {
            Route::Home => handlers::home(self, request),
            Route::StaticAsset => handlers::static_asset(self, request),
            Route::Fallback => Ok(handlers::fallback(request)),
        };

        match result {
            Ok(response) => response,
            Err(HandlerError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "not found");
                Response::not_found()
            }
            Err(e @ HandlerError::Io { .. }) => {
                tracing::error!(error = ?e, "handler failed");
                Response::internal_error()
            }
        }
    }
}
