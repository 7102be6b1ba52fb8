use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request contains no request line")]
    Empty,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
    #[error("malformed header line: {0:?}")]
    InvalidHeader(String),
}

/// Parses the full text of one data event into a [`Request`].
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected.
///
/// Lines are split on CRLF. Until the first blank line each line is a header,
/// split on its first `:` with key and value kept untrimmed. Every line after
/// the blank line is appended to the body with its terminator dropped, so a
/// multi-line body loses its line breaks.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = text.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::Empty)?;
    let parts: Vec<&str> = request_line.split(' ').collect();
    let &[method, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };
    if method.is_empty() || path.is_empty() {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    }

    // Headers, then body
    let mut headers = HashMap::new();
    let mut body: Option<String> = None;

    for line in lines {
        match body.as_mut() {
            Some(body) => body.push_str(line),
            None if line.is_empty() => body = Some(String::new()),
            None => {
                let (key, value) = line
                    .split_once(':')
                    .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;
                headers.insert(key.to_string(), value.to_string());
            }
        }
    }

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: body.unwrap_or_default(),
    })
}
