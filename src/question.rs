use std::io::Cursor;

use bytes::BufMut;
use byteorder::{BigEndian, ReadBytesExt};
use tracing::instrument;

use super::Networkable;
use crate::{DnsError, RecordType};

/// The internet class
pub const CLASS_IN: u16 = 1;

/// A fixed-width question. `name` is a 16 bit reference to the queried name,
/// not the label sequence itself; see `new_named_query` for a question
/// carrying the encoded name inline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub name: u16,
    pub type_: u16,
    pub class: u16,
}

impl Question {
    pub fn new(name: u16, type_: RecordType) -> Self {
        Self {
            name,
            type_: type_ as u16,
            class: CLASS_IN,
        }
    }
}

impl Networkable for Question {
    type Error = DnsError;

    #[instrument(level = "trace", skip_all)]
    fn to_bytes(&self) -> Vec<u8> {
        let mut ret = Vec::with_capacity(6);

        ret.put_u16(self.name);
        ret.put_u16(self.type_);
        ret.put_u16(self.class);

        ret
    }

    #[instrument(level = "trace", skip_all)]
    fn from_bytes(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let name = bytes.read_u16::<BigEndian>()?;
        let type_ = bytes.read_u16::<BigEndian>()?;
        let class = bytes.read_u16::<BigEndian>()?;

        Ok(Self { name, type_, class })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_order() {
        let question = Question {
            name: 0xc00c,
            type_: 28,
            class: 1,
        };

        assert_eq!(question.to_bytes(), [0xc0, 0x0c, 0x00, 0x1c, 0x00, 0x01]);
    }

    #[test]
    fn new_defaults_to_internet_class() {
        let question = Question::new(7, RecordType::Mx);
        assert_eq!(question.type_, 15);
        assert_eq!(question.class, CLASS_IN);
    }

    #[test]
    fn reads_back() {
        let question = Question::new(0x0102, RecordType::Aaaa);
        let bytes = question.to_bytes();

        let parsed = Question::from_bytes(&mut Cursor::new(&bytes[..])).unwrap();
        assert_eq!(parsed, question);
    }

    #[test]
    fn short_buffer_is_io_error() {
        let bytes = [0u8, 1, 0, 1, 0];
        assert!(matches!(
            Question::from_bytes(&mut Cursor::new(&bytes[..])),
            Err(DnsError::Io(_))
        ));
    }
}
