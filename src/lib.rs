use std::io::Cursor;

mod error;
pub use error::{ClientError, DnsError};

mod header;
pub use header::{parse_header, Flags, Header, ResponseCode, RECURSION_FLAG};

mod name;
pub use name::encode_name;

mod query;
pub use query::{new_named_query, new_query};

mod question;
pub use question::{Question, CLASS_IN};

mod record_type;
pub use record_type::RecordType;

mod client;
pub use client::{matches_transaction_id, send_query, Client, RECEIVE_BUFFER_SIZE};

pub trait Networkable: Sized {
    type Error;

    fn to_bytes(&self) -> Vec<u8>;

    fn from_bytes(bytes: &mut Cursor<&[u8]>) -> Result<Self, Self::Error>;
}
