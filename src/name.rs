use bytes::{BufMut, Bytes, BytesMut};
use tracing::instrument;

/// Encodes a dotted domain name as a sequence of length-prefixed labels
/// followed by a zero byte, e.g. `example.com` -> `\x07example\x03com\x00`.
///
/// An empty name has no labels and encodes to the terminator alone. Empty
/// labels inside a name (from leading, trailing or doubled dots) are written
/// as a zero length byte. Label lengths aren't checked, anything over 255
/// bytes wraps in the length prefix.
#[instrument(level = "trace", skip_all)]
pub fn encode_name(name: &[u8]) -> Bytes {
    let mut ret = BytesMut::with_capacity(name.len() + 2);

    // `split` yields one empty label for an empty slice
    let labels = name.split(|b| *b == b'.').filter(|_| !name.is_empty());

    for section in labels {
        ret.put_u8(section.len() as u8);
        ret.extend_from_slice(section);
    }

    ret.put_u8(0);

    ret.into()
}
