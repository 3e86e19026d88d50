use log::{debug, error};
use thiserror::Error;

/// CMF/FLG pair: deflate with a 32K window, fastest compression level, no
/// preset dictionary. `0x7801` is a multiple of 31 as the header check requires.
pub const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];

/// BFINAL = 1, BTYPE = 00 (stored), remaining bits zero.
pub const FINAL_STORED_BLOCK: u8 = 0x01;

/// Largest payload a single stored block can carry.
pub const MAX_STORED_LEN: usize = u16::MAX as usize;

/// Header, block header, LEN, NLEN and trailing Adler-32.
pub const STORED_OVERHEAD: usize = 2 + 1 + 2 + 2 + 4;

const ADLER_MOD: u32 = 65521;

#[derive(Error, Debug)]
pub enum StoredBlockError {
    #[error("payload of {len} bytes does not fit a single stored block (max 65535)")]
    PayloadTooLarge { len: usize },
}

/// Wraps `payload` in a zlib stream made of one final, uncompressed block.
pub fn wrap_stored(payload: &[u8]) -> Result<Vec<u8>, StoredBlockError> {
    if payload.len() > MAX_STORED_LEN {
        error!(
            "Stored block payload too large: {} > {}",
            payload.len(),
            MAX_STORED_LEN
        );
        return Err(StoredBlockError::PayloadTooLarge { len: payload.len() });
    }
    let len = payload.len() as u16;

    let mut stream = Vec::with_capacity(payload.len() + STORED_OVERHEAD);
    stream.extend_from_slice(&ZLIB_HEADER);
    stream.push(FINAL_STORED_BLOCK);
    stream.extend_from_slice(&len.to_le_bytes());
    stream.extend_from_slice(&(!len).to_le_bytes());
    stream.extend_from_slice(payload);

    let checksum = adler32(payload);
    stream.extend_from_slice(&checksum.to_be_bytes());

    debug!(
        "Stored block written: {} payload bytes, adler32 {:08x}",
        payload.len(),
        checksum
    );
    Ok(stream)
}

/// Adler-32 as defined by RFC 1950: two sums modulo 65521, `a` starting at 1.
pub fn adler32(data: &[u8]) -> u32 {
    // 5552 is the largest run for which `b` cannot overflow a u32 before reducing.
    let (mut a, mut b) = (1u32, 0u32);
    for block in data.chunks(5552) {
        for &byte in block {
            a += u32::from(byte);
            b += a;
        }
        a %= ADLER_MOD;
        b %= ADLER_MOD;
    }
    (b << 16) | a
}
