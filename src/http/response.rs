use crate::http::header::Headers;

/// Status codes the server produces.
///
/// - `Ok` (200): content served
/// - `NotFound` (404): default response for anything unmatched or malformed
/// - `InternalServerError` (500): a file existed but could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric status code written on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use snake_server::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }
}

/// A response under construction.
///
/// A fresh response is the canonical "not found": status 404, a single
/// `Content-Length:0` header and no body. `Content-Length` is never derived
/// from the body; whoever sets a body must also set the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

impl Default for Response {
    fn default() -> Self {
        let mut headers = Headers::new();
        headers.set("Content-Length", "0");
        Self {
            status: StatusCode::NotFound,
            headers,
            body: None,
        }
    }
}

impl Response {
    /// The empty 404 response.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// An empty 500 response, same shape as the 404 one.
    pub fn internal_error() -> Self {
        let mut response = Self::default();
        response.set_status(StatusCode::InternalServerError);
        response
    }

    /// Adds a header, or replaces the value of an existing one in place.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl ToString) {
        self.headers.set(key, value.to_string());
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = Some(body.into());
    }
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .header("Content-Length", 2)
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Starts from the default response with the given status.
    pub fn new(status: StatusCode) -> Self {
        let mut response = Response::default();
        response.set_status(status);
        Self { response }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.response.set_header(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.response.set_body(body);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}
