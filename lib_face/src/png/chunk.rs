use log::debug;

pub const IHDR: [u8; 4] = *b"IHDR";
pub const PLTE: [u8; 4] = *b"PLTE";
pub const IDAT: [u8; 4] = *b"IDAT";
pub const IEND: [u8; 4] = *b"IEND";

/// Length, type tag and checksum bytes surrounding every chunk payload.
pub const CHUNK_OVERHEAD: usize = 12;

/// Largest payload the length field may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// Wraps `data` as a chunk: big-endian length, type tag, payload and the
/// CRC-32 of tag and payload. The length field is not covered by the CRC.
///
/// `data` must not exceed [`MAX_CHUNK_LEN`] bytes. Payloads produced by this
/// crate stay far below it, since image data is capped by the single stored block.
pub fn encode_chunk(kind: [u8; 4], data: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(data.len() + CHUNK_OVERHEAD);
    chunk.extend_from_slice(&length_field(data.len()));
    chunk.extend_from_slice(&kind);
    chunk.extend_from_slice(data);

    let crc = crc32fast::hash(&chunk[4..]);
    chunk.extend_from_slice(&crc.to_be_bytes());

    debug!(
        "Chunk {} encoded: {} payload bytes, crc {:08x}",
        String::from_utf8_lossy(&kind),
        data.len(),
        crc
    );
    chunk
}

fn length_field(len: usize) -> [u8; 4] {
    debug_assert!(
        len <= MAX_CHUNK_LEN,
        "chunk payload of {len} bytes exceeds {MAX_CHUNK_LEN}"
    );
    u32::try_from(len).unwrap_or(u32::MAX).to_be_bytes()
}

/// A chunk as found in an encoded stream, borrowed from the source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'b> {
    pub kind: [u8; 4],
    pub data: &'b [u8],
    pub declared_crc: u32,
}

impl RawChunk<'_> {
    pub fn crc_matches(&self) -> bool {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.kind);
        hasher.update(self.data);
        hasher.finalize() == self.declared_crc
    }
}

/// Walks the chunks of a stream that has already had its signature removed.
///
/// Iteration stops at the first truncated chunk.
#[derive(Debug, Clone)]
pub struct ChunkIter<'b>(&'b [u8]);

impl<'b> ChunkIter<'b> {
    pub const fn new(bytes: &'b [u8]) -> Self {
        Self(bytes)
    }
}

impl<'b> Iterator for ChunkIter<'b> {
    type Item = RawChunk<'b>;

    fn next(&mut self) -> Option<Self::Item> {
        let (len, rest) = self.0.split_first_chunk::<4>()?;
        let len = u32::from_be_bytes(*len) as usize;
        let (kind, rest) = rest.split_first_chunk::<4>()?;
        if rest.len() < len + 4 {
            self.0 = &[];
            return None;
        }
        let (data, rest) = rest.split_at(len);
        let (crc, rest) = rest.split_first_chunk::<4>()?;
        self.0 = rest;

        Some(RawChunk {
            kind: *kind,
            data,
            declared_crc: u32::from_be_bytes(*crc),
        })
    }
}
