//! Request handlers.
//!
//! Each handler turns a [`Request`] into a [`Response`]. Only the home handler
//! has a side effect: it bumps the visit counter.

use std::io;
use std::path::{Path, PathBuf};

use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::site::Site;
use crate::site::fs::FileSystem;

#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("no file at {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HandlerError {
    fn from_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            HandlerError::NotFound(path.to_path_buf())
        } else {
            HandlerError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Serves `GET /` from `<page_root><path>index.html`.
pub fn home<F: FileSystem>(site: &Site<F>, req: &Request) -> Result<Response, HandlerError> {
    let path = PathBuf::from(format!(
        "{}{}index.html",
        site.page_root().display(),
        req.path
    ));
    tracing::debug!(path = %path.display(), "serving home page");

    let visits = site.visits().increment();
    tracing::trace!(visits, "visit recorded");

    let html = site
        .fs()
        .read(&path)
        .map_err(|e| HandlerError::from_read(&path, e))?;

    Ok(content_response(Some(mime::HTML), html))
}

/// Serves any other `GET` from `<static_root><path>`.
///
/// Paths with a `..` segment are refused before the file system is consulted.
/// Files whose extension is missing from the content-type table are served
/// without a `Content-Type` header.
pub fn static_asset<F: FileSystem>(
    site: &Site<F>,
    req: &Request,
) -> Result<Response, HandlerError> {
    let path = PathBuf::from(format!(
        "{}{}",
        site.static_root().display(),
        req.path
    ));
    tracing::debug!(path = %path.display(), "serving static asset");

    if req.path.split('/').any(|segment| segment == "..") {
        tracing::warn!(path = %req.path, "rejected path with parent segment");
        return Err(HandlerError::NotFound(path));
    }

    if !site.fs().is_regular_file(&path) {
        return Err(HandlerError::NotFound(path));
    }

    let content_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime::content_type_for);

    let content = site
        .fs()
        .read(&path)
        .map_err(|e| HandlerError::from_read(&path, e))?;

    Ok(content_response(content_type, content))
}

/// Anything that is not a `GET`. No I/O.
pub fn fallback(_req: &Request) -> Response {
    Response::not_found()
}

fn content_response(content_type: Option<&str>, content: Vec<u8>) -> Response {
    let mut res = Response::default();
    if let Some(content_type) = content_type {
        res.set_header("Content-Type", content_type);
    }
    res.set_header("Content-Length", content.len());
    res.set_status(StatusCode::Ok);
    res.set_body(content);
    res
}
