use std::io;

use thiserror::Error;

/// Failures while decoding a message.
#[derive(Debug, Error)]
pub enum DnsError {
    #[error("error with query")]
    FormatError,

    #[error("error with the server")]
    ServerFailure,

    #[error("the domain doesn't exist")]
    NameError,

    /// The buffer ran out before a field could be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failures while exchanging a query with a resolver.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("couldn't connect to {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("couldn't send query: {0}")]
    Write(#[source] io::Error),

    #[error("couldn't read response: {0}")]
    Read(#[source] io::Error),

    /// The response doesn't answer our query, possibly a poisoning attempt
    #[error("transaction ID mismatch (sent {sent:?}, received {received:?})")]
    TransactionIdMismatch {
        sent: Option<u16>,
        received: Option<u16>,
    },
}
