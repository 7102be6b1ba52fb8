use std::sync::Arc;

use anyhow::Context;
use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, error, info, warn};

use crate::http::writer::ResponseWriter;
use crate::site::Site;
use crate::site::fs::FileSystem;

/// Largest data event handed to the parser in one piece.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Drives one client connection.
///
/// Every read that returns data is treated as one complete request: it is
/// parsed, routed, handled and written back before the next read starts, so
/// requests on a connection are answered in arrival order.
pub struct Connection<S, F> {
    stream: S,
    peer: String,
    site: Arc<Site<F>>,
    buffer: BytesMut,
    state: ConnectionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Open,
    Reading,
    Closed,
    Errored,
}

impl<S, F> Connection<S, F>
where
    S: AsyncRead + AsyncWrite + Unpin,
    F: FileSystem,
{
    pub fn new(stream: S, peer: impl Into<String>, site: Arc<Site<F>>) -> Self {
        Self {
            stream,
            peer: peer.into(),
            site,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            state: ConnectionState::Open,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Runs until the peer ends the stream (`Ok`, state `Closed`) or a read
    /// or write fails (`Err`, state `Errored`).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.state {
                ConnectionState::Open => {
                    info!(peer = %self.peer, "new connection");
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Reading => match self.read_event().await {
                    Ok(next) => self.state = next,
                    Err(e) => {
                        error!(peer = %self.peer, error = %e, "socket error");
                        warn!(peer = %self.peer, "closed with error");
                        self.state = ConnectionState::Errored;
                        return Err(e);
                    }
                },

                ConnectionState::Closed => {
                    info!(peer = %self.peer, "closed");
                    return Ok(());
                }

                ConnectionState::Errored => {
                    return Err(anyhow::anyhow!("connection already failed"));
                }
            }
        }
    }

    async fn read_event(&mut self) -> anyhow::Result<ConnectionState> {
        self.buffer.clear();
        self.buffer.reserve(READ_BUFFER_SIZE);

        let n = self.stream.read_buf(&mut self.buffer).await?;
        if n == 0 {
            info!(peer = %self.peer, "ended");
            return Ok(ConnectionState::Closed);
        }

        debug!(peer = %self.peer, bytes = n, "data");
        let data = self.buffer.split().freeze();
        self.respond(data).await?;
        Ok(ConnectionState::Reading)
    }

    async fn respond(&mut self, data: Bytes) -> anyhow::Result<()> {
        // Handlers read files synchronously, keep them off the reactor.
        let site = Arc::clone(&self.site);
        let response = tokio::task::spawn_blocking(move || site.dispatch(&data))
            .await
            .context("request handler panicked")?;

        let mut writer = ResponseWriter::new(&response);
        debug!(
            peer = %self.peer,
            status = response.status.as_u16(),
            bytes = writer.len(),
            "writing response"
        );
        writer.write_to_stream(&mut self.stream).await
    }
}
