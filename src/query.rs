use bytes::{BufMut, Bytes, BytesMut};
use tracing::instrument;

use super::{encode_name, Header, Networkable, Question};

/// Header bytes immediately followed by the fixed-width question.
#[instrument(level = "debug", skip_all)]
pub fn new_query(header: &Header, question: &Question) -> Bytes {
    let mut query = BytesMut::with_capacity(18);
    query.extend_from_slice(&header.to_bytes());
    query.extend_from_slice(&question.to_bytes());

    query.into()
}

/// A query whose question carries the encoded `name` inline, as resolvers
/// expect it on the wire.
#[instrument(level = "debug", skip_all)]
pub fn new_named_query(header: &Header, name: &[u8], type_: u16, class: u16) -> Bytes {
    let mut query = BytesMut::new();
    query.extend_from_slice(&header.to_bytes());
    query.extend_from_slice(&encode_name(name));
    query.put_u16(type_);
    query.put_u16(class);

    query.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Flags, RecordType, CLASS_IN, RECURSION_FLAG};

    #[test]
    fn query_is_header_then_question() {
        let header = Header::new(0x1234, Flags::new(RECURSION_FLAG));
        let question = Question::new(0, RecordType::A);

        let query = new_query(&header, &question);
        assert_eq!(query.len(), 18);
        assert_eq!(query.len(), header.to_bytes().len() + question.to_bytes().len());
        assert_eq!(&query[..12], &header.to_bytes()[..]);
        assert_eq!(&query[12..], &question.to_bytes()[..]);
    }

    #[test]
    fn named_query_layout() {
        let header = Header {
            num_questions: 1,
            ..Header::new(0xabcd, Flags::new(RECURSION_FLAG))
        };

        let query = new_named_query(&header, b"example.com", RecordType::A as u16, CLASS_IN);
        assert_eq!(&query[..12], &header.to_bytes()[..]);
        assert_eq!(&query[12..25], b"\x07example\x03com\x00");
        assert_eq!(&query[25..], &[0, 1, 0, 1]);
    }
}
