mod common;

use common::{eyes, noses, BLACK, RED, WHITE};
use lib_face::constants::{sample_scanlines, SAMPLE_PALETTE, SIGNATURE};
use lib_face::png::chunk::{ChunkIter, CHUNK_OVERHEAD, IDAT, IEND, IHDR, PLTE};
use lib_face::png::zlib::{adler32, wrap_stored};
use lib_face::{composite, render, ImageSpec, PixelMatrix, Rgb};

fn assert_decodes_to(output: &[u8], palette: &[Rgb], matrix: &PixelMatrix) {
    let decoded = image::load_from_memory(output).unwrap().into_rgb8();
    assert_eq!(decoded.dimensions(), (48, 48));

    for (x, y, pixel) in decoded.enumerate_pixels() {
        let index = matrix.pixel(x, y as usize) as usize;
        assert_eq!(pixel.0, palette[index].0, "pixel ({}, {})", x, y);
    }
}

#[test]
fn test_render_sample_decodes() {
    let scanlines = sample_scanlines();
    let output = render(&ImageSpec::default(), &SAMPLE_PALETTE, &scanlines).unwrap();

    let matrix = PixelMatrix::new(48, scanlines);
    assert_decodes_to(&output, &SAMPLE_PALETTE, &matrix);
}

#[test]
fn test_render_face_decodes() {
    let (eyes, noses) = (eyes(), noses());
    let face = composite(&[&eyes[1].pixels, &noses[0].pixels, &eyes[0].pixels]).unwrap();
    let palette = [WHITE, RED];

    let output = render(&ImageSpec::default(), &palette, &face.rows).unwrap();
    assert_decodes_to(&output, &palette, &face);
}

#[test]
fn test_render_is_deterministic() {
    let scanlines = sample_scanlines();
    let spec = ImageSpec::default();

    let first = render(&spec, &[BLACK, RED], &scanlines).unwrap();
    let second = render(&spec, &[BLACK, RED], &scanlines).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_chunks_are_valid() {
    let output = render(&ImageSpec::default(), &SAMPLE_PALETTE, &sample_scanlines()).unwrap();
    assert!(output.starts_with(&SIGNATURE));

    let chunks: Vec<_> = ChunkIter::new(&output[SIGNATURE.len()..]).collect();
    assert_eq!(chunks.len(), 4);
    assert!(chunks.iter().all(|chunk| chunk.crc_matches()));

    assert_eq!(chunks[0].kind, IHDR);
    assert_eq!(chunks[0].data, &[0, 0, 0, 48, 0, 0, 0, 48, 1, 3, 0, 0, 0]);
    assert_eq!(chunks[1].kind, PLTE);
    assert_eq!(chunks[1].data, &[0x00, 0x00, 0x00, 0x00, 0xff, 0xff]);
    assert_eq!(chunks[2].kind, IDAT);
    assert_eq!(chunks[3].kind, IEND);
    assert!(chunks[3].data.is_empty());

    let expected_len = SIGNATURE.len() + 4 * CHUNK_OVERHEAD + 13 + 6 + chunks[2].data.len();
    assert_eq!(output.len(), expected_len);
}

#[test]
fn test_render_image_data_inflates() {
    let scanlines = sample_scanlines();
    let output = render(&ImageSpec::default(), &SAMPLE_PALETTE, &scanlines).unwrap();
    let idat = ChunkIter::new(&output[SIGNATURE.len()..])
        .find(|chunk| chunk.kind == IDAT)
        .unwrap();

    let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(idat.data).unwrap();
    let expected: Vec<u8> = scanlines
        .iter()
        .flat_map(|line| std::iter::once(0u8).chain(line.iter().copied()))
        .collect();
    assert_eq!(inflated, expected);
}

#[test]
fn test_stored_reference_inflate() {
    let payloads: [&[u8]; 4] = [b"", b"a", b"stored blocks carry bytes verbatim", &[0xff; 4096]];

    for payload in payloads {
        let stream = wrap_stored(payload).unwrap();
        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&stream).unwrap();
        assert_eq!(inflated, payload);

        let trailer: [u8; 4] = stream[stream.len() - 4..].try_into().unwrap();
        assert_eq!(u32::from_be_bytes(trailer), adler32(payload));
    }
}
