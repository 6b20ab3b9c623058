use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use tracing::{debug, instrument, trace, warn};

use crate::ClientError;

/// Responses longer than this are cut off
pub const RECEIVE_BUFFER_SIZE: usize = 1024;

/// Sends single queries to one resolver. Every query gets its own socket,
/// which is closed before the call returns.
#[derive(Debug, Clone)]
pub struct Client {
    server_address: String,
    port: u16,
}

impl Client {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            server_address: address.into(),
            port,
        }
    }

    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Sends `query` in one datagram and returns the first datagram that
    /// comes back, after checking it carries the query's transaction ID.
    ///
    /// Blocks until the resolver answers.
    #[instrument(level = "debug", skip(self, query), fields(server = %self.server_address, port = self.port))]
    pub fn send_query(&self, query: &[u8]) -> Result<Vec<u8>, ClientError> {
        let sock = self.connect()?;

        sock.send(query).map_err(ClientError::Write)?;
        debug!(len = query.len(), "sent query");

        let mut buf = [0; RECEIVE_BUFFER_SIZE];
        let len = sock.recv(&mut buf).map_err(ClientError::Read)?;
        trace!(len, "received response");

        check_transaction_id(query, &buf[..len])?;

        Ok(buf[..len].to_vec())
    }

    /// Same exchange as [`Client::send_query`] on a tokio socket.
    #[instrument(level = "debug", skip(self, query), fields(server = %self.server_address, port = self.port))]
    pub async fn send_query_async(&self, query: &[u8]) -> Result<Vec<u8>, ClientError> {
        let remote = tokio::net::lookup_host((self.server_address.as_str(), self.port))
            .await
            .map_err(|e| self.connect_error(e))?
            .next()
            .ok_or_else(|| self.connect_error(no_address()))?;

        let sock = tokio::net::UdpSocket::bind(unspecified_for(&remote))
            .await
            .map_err(|e| self.connect_error(e))?;
        sock.connect(remote)
            .await
            .map_err(|e| self.connect_error(e))?;

        sock.send(query).await.map_err(ClientError::Write)?;
        debug!(len = query.len(), "sent query");

        let mut buf = [0; RECEIVE_BUFFER_SIZE];
        let len = sock.recv(&mut buf).await.map_err(ClientError::Read)?;
        trace!(len, "received response");

        check_transaction_id(query, &buf[..len])?;

        Ok(buf[..len].to_vec())
    }

    fn connect(&self) -> Result<UdpSocket, ClientError> {
        let remote = (self.server_address.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| self.connect_error(e))?
            .next()
            .ok_or_else(|| self.connect_error(no_address()))?;

        let sock = UdpSocket::bind(unspecified_for(&remote)).map_err(|e| self.connect_error(e))?;
        sock.connect(remote).map_err(|e| self.connect_error(e))?;

        Ok(sock)
    }

    fn connect_error(&self, source: io::Error) -> ClientError {
        ClientError::Connect {
            address: format!("{}:{}", self.server_address, self.port),
            source,
        }
    }
}

pub fn send_query(address: &str, port: u16, query: &[u8]) -> Result<Vec<u8>, ClientError> {
    Client::new(address, port).send_query(query)
}

/// Whether both buffers start with the same two byte transaction ID
pub fn matches_transaction_id(query: &[u8], response: &[u8]) -> bool {
    let sent = transaction_id(query);
    sent.is_some() && sent == transaction_id(response)
}

fn check_transaction_id(query: &[u8], response: &[u8]) -> Result<(), ClientError> {
    if matches_transaction_id(query, response) {
        return Ok(());
    }

    let sent = transaction_id(query);
    let received = transaction_id(response);
    warn!(?sent, ?received, "response doesn't match query, possible poisoning");

    Err(ClientError::TransactionIdMismatch { sent, received })
}

fn transaction_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}

fn unspecified_for(remote: &SocketAddr) -> SocketAddr {
    match remote {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    }
}

fn no_address() -> io::Error {
    io::Error::new(io::ErrorKind::AddrNotAvailable, "no addresses resolved")
}
