//! Domain name wire encoding, including RFC 1035 message compression on the
//! decode side.

use crate::{
    constants::{MAX_LABEL_LENGTH, MAX_POINTER_JUMPS, POINTER_FLAG, POINTER_MASK},
    error::{DnsError, NameFault},
};

/// Decodes the name starting at `cursor` and returns it dot-joined, together
/// with the number of bytes it occupies at `cursor`.
///
/// A compression pointer ends the name in place: the consumed count covers the
/// two pointer bytes, not the labels found at the pointer's target.
pub fn decode_name(data: &[u8], cursor: usize) -> Result<(Vec<u8>, usize), DnsError> {
    decode_name_at(data, cursor, 0)
}

fn decode_name_at(
    data: &[u8],
    cursor: usize,
    jumps: usize,
) -> Result<(Vec<u8>, usize), DnsError> {
    let mut current_pos = cursor;
    let mut parts: Vec<Vec<u8>> = vec![];

    loop {
        let length = *data
            .get(current_pos)
            .ok_or(DnsError::malformed_name(current_pos, NameFault::EndOfBuffer))?;

        if length == 0 {
            current_pos += 1; // For the 0 at the end.
            break;
        }

        match length & POINTER_FLAG {
            POINTER_FLAG => {
                let pointer = decode_pointer(data, current_pos)?;
                if pointer >= current_pos {
                    return Err(DnsError::malformed_name(
                        current_pos,
                        NameFault::ForwardPointer,
                    ));
                }
                if jumps >= MAX_POINTER_JUMPS {
                    return Err(DnsError::malformed_name(
                        current_pos,
                        NameFault::PointerLimit,
                    ));
                }
                let (suffix, _) = decode_name_at(data, pointer, jumps + 1)?;
                if !suffix.is_empty() {
                    parts.push(suffix);
                }
                current_pos += 2;
                break;
            }
            0 => {
                let start = current_pos + 1;
                let end = start + length as usize;
                let label = data
                    .get(start..end)
                    .ok_or(DnsError::malformed_name(current_pos, NameFault::EndOfBuffer))?;
                parts.push(label.to_vec());
                current_pos = end;
            }
            _ => {
                return Err(DnsError::malformed_name(current_pos, NameFault::ReservedLabel));
            }
        }
    }

    Ok((parts.join(&b'.'), current_pos - cursor))
}

fn decode_pointer(data: &[u8], cursor: usize) -> Result<usize, DnsError> {
    // takes the bottom 6 bits of the length byte, plus the next byte, as a 14-bit offset
    match data.get(cursor..cursor + 2) {
        Some(&[high, low]) => Ok(u16::from_be_bytes([high & POINTER_MASK, low]) as usize),
        _ => Err(DnsError::malformed_name(cursor, NameFault::EndOfBuffer)),
    }
}

/// Encodes a dotted name as length-prefixed labels. Empty labels, such as the
/// one left by a trailing dot, are skipped.
pub fn encode_dns_name(domain_name: &str) -> Result<Vec<u8>, DnsError> {
    let mut bytes = domain_name
        .split('.')
        .filter(|label| !label.is_empty())
        .try_fold(vec![], |mut acc, label| {
            if label.len() > MAX_LABEL_LENGTH {
                return Err(DnsError::LabelTooLong(label.len()));
            }
            acc.push(label.len() as u8);
            acc.extend_from_slice(label.as_bytes());
            Ok(acc)
        })?;
    // Add a 0 byte to terminate the name
    bytes.push(0);

    Ok(bytes)
}
