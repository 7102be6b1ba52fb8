//! Wire protocol implementation.
//!
//! A deliberately small request/response protocol in the shape of HTTP/1.1,
//! spoken directly over a TCP stream.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection lifecycle, one request per data event
//! - **`parser`**: turns the text of one data event into a [`request::Request`]
//! - **`request`**: request and method types
//! - **`header`**: ordered header list with in-place updates
//! - **`response`**: response type, defaulting to an empty 404
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: content type lookup by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │    Open     │ ← Accepted, logged
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐  data: parse → route → handle → write
//!        │   Reading   │ ─────────────────────────────────────┐
//!        └──────┬──────┘ ◄────────────────────────────────────┘
//!               │
//!               ├─ end of stream → Closed
//!               └─ read/write failure → Errored
//! ```
//!
//! # Wire format
//!
//! ```text
//! request:  <METHOD> <PATH> <VERSION>\r\n(<key>:<value>\r\n)*\r\n<body>
//! response: HTTP/1.1 <status>\r\n<key>:<value>(\r\n<key>:<value>)*\r\n\r\n<body>
//! ```

pub mod connection;
pub mod header;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
