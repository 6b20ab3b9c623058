use std::io::Cursor;

use bitfield::bitfield;
use bytes::BufMut;
use byteorder::{BigEndian, ReadBytesExt};
use tracing::{instrument, warn};

use super::Networkable;
use crate::DnsError;

/// Recursion desired (in queries) or available (in responses)
pub const RECURSION_FLAG: u16 = 256;

const RCODE_MASK: u16 = 0b111;

bitfield! {
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Flags(u16);
    impl Debug;
    u8;
    // query or response
    pub qr, set_qr: 15;
    // query type
    pub opcode, set_opcode: 14, 11;
    // authoritative answerer
    pub aa, set_aa: 10;
    // truncation
    pub tc, set_tc: 9;
    // recursion desired
    pub rd, set_rd: 8;
    // recursion available
    pub ra, set_ra: 7;
    // reserved
    pub z, set_z: 6, 4;
    // response code
    pub rcode, set_rcode: 2, 0;
}

impl Flags {
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from((self.0 & RCODE_MASK) as u8)
    }
}

impl From<u16> for Flags {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl Networkable for Flags {
    type Error = DnsError;

    #[instrument(level = "trace", skip_all)]
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }

    #[instrument(level = "trace", skip_all)]
    fn from_bytes(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        Ok(Self(bytes.read_u16::<BigEndian>()?))
    }
}

/// The low three bits of the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    Other(u8),
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::NoError,
            1 => Self::FormatError,
            2 => Self::ServerFailure,
            3 => Self::NameError,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

impl Header {
    pub fn new(id: u16, flags: Flags) -> Self {
        Self {
            id,
            flags,
            ..Default::default()
        }
    }

    /// A header for a single-question query with a random transaction ID
    pub fn query(flags: Flags) -> Self {
        Self {
            num_questions: 1,
            ..Self::new(rand::random::<u16>(), flags)
        }
    }
}

impl Networkable for Header {
    type Error = DnsError;

    #[instrument(level = "trace", skip_all)]
    fn to_bytes(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(12);
        ret.put_u16(self.id);
        ret.extend_from_slice(&self.flags.to_bytes());
        ret.put_u16(self.num_questions);
        ret.put_u16(self.num_answers);
        ret.put_u16(self.num_authorities);
        ret.put_u16(self.num_additionals);

        ret
    }

    /// Fails with the matching protocol error as soon as the flags carry a
    /// format error, server failure or name error, leaving the cursor just
    /// past the flags.
    #[instrument(level = "trace", skip_all)]
    fn from_bytes(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let id = bytes.read_u16::<BigEndian>()?;
        let flags = Flags::from_bytes(bytes)?;

        match flags.response_code() {
            ResponseCode::FormatError => return Err(DnsError::FormatError),
            ResponseCode::ServerFailure => return Err(DnsError::ServerFailure),
            ResponseCode::NameError => return Err(DnsError::NameError),
            ResponseCode::NoError => {}
            ResponseCode::Other(code) => warn!(code, "unclassified response code"),
        }

        let qd_count = bytes.read_u16::<BigEndian>()?;
        let an_count = bytes.read_u16::<BigEndian>()?;
        let ns_count = bytes.read_u16::<BigEndian>()?;
        let ar_count = bytes.read_u16::<BigEndian>()?;

        Ok(Self {
            id,
            flags,
            num_questions: qd_count,
            num_answers: an_count,
            num_authorities: ns_count,
            num_additionals: ar_count,
        })
    }
}

pub fn parse_header(reader: &mut Cursor<&[u8]>) -> Result<Header, DnsError> {
    Header::from_bytes(reader)
}
