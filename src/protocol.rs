use serde::{Deserialize, Serialize};

/// Tag on a work assignment carrying the two range bounds.
pub const TAG_RANGE: u32 = 1;
/// Tag on a finished result carrying the computed sum.
pub const TAG_RESULT: u32 = 2;

/// A tagged message as it travels between master and worker, serialized as
/// JSON text. The payload is a flat list of integers packed in a fixed order
/// per tag: `[start, end]` for a range, `[sum]` for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub tag: u32,
    pub payload: Vec<i64>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("unexpected message tag {got} (expected {expected})")]
    UnexpectedTag { expected: u32, got: u32 },

    #[error("message tagged {tag} carried {got} integers (expected {expected})")]
    PayloadArity { tag: u32, expected: usize, got: usize },
}

pub fn pack_range(start: i64, end: i64) -> Envelope {
    Envelope {
        tag: TAG_RANGE,
        payload: vec![start, end],
    }
}

pub fn unpack_range(envelope: &Envelope) -> Result<(i64, i64), ProtocolError> {
    check(envelope, TAG_RANGE, 2)?;
    Ok((envelope.payload[0], envelope.payload[1]))
}

pub fn pack_sum(sum: i64) -> Envelope {
    Envelope {
        tag: TAG_RESULT,
        payload: vec![sum],
    }
}

pub fn unpack_sum(envelope: &Envelope) -> Result<i64, ProtocolError> {
    check(envelope, TAG_RESULT, 1)?;
    Ok(envelope.payload[0])
}

fn check(envelope: &Envelope, tag: u32, arity: usize) -> Result<(), ProtocolError> {
    if envelope.tag != tag {
        return Err(ProtocolError::UnexpectedTag {
            expected: tag,
            got: envelope.tag,
        });
    }
    if envelope.payload.len() != arity {
        return Err(ProtocolError::PayloadArity {
            tag,
            expected: arity,
            got: envelope.payload.len(),
        });
    }
    Ok(())
}
