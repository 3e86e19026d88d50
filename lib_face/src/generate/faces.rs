use log::{debug, info};

use super::sink::OutputSink;
use super::GenerateError;
use crate::color::Rgb;
use crate::compositor::composite;
use crate::png::{render, ImageSpec};
use crate::sprite::Sprite;

pub const LABEL_SEPARATOR: &str = "_";

/// Output label of one face: the three sprite names, left to right.
pub fn face_label(left_eye: &Sprite, nose: &Sprite, right_eye: &Sprite) -> String {
    [
        left_eye.name.as_str(),
        nose.name.as_str(),
        right_eye.name.as_str(),
    ]
    .join(LABEL_SEPARATOR)
}

/// Renders one face per (left eye, right eye, nose) combination and hands
/// each to `sink`. The same sprite may appear as both eyes.
///
/// Returns the number of images written.
pub fn generate_faces(
    spec: &ImageSpec,
    palette: &[Rgb],
    left_eyes: &[Sprite],
    right_eyes: &[Sprite],
    noses: &[Sprite],
    sink: &mut dyn OutputSink,
) -> Result<usize, GenerateError> {
    let mut written = 0;

    for left_eye in left_eyes {
        for right_eye in right_eyes {
            for nose in noses {
                let face = composite(&[&left_eye.pixels, &nose.pixels, &right_eye.pixels])?;
                let label = face_label(left_eye, nose, right_eye);

                let output = render(spec, palette, &face.rows)?;
                sink.emit(&label, &output)?;
                debug!("Face {} written", label);
                written += 1;
            }
        }
    }

    info!(
        "Face run completed: {} images from {} left eyes, {} right eyes, {} noses",
        written,
        left_eyes.len(),
        right_eyes.len(),
        noses.len()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::PixelMatrix;
    use crate::constants::SAMPLE_PALETTE;
    use crate::generate::sink::MemorySink;

    fn sprite(name: &str, fill: u8) -> Sprite {
        Sprite::new(name, PixelMatrix::new(16, vec![vec![fill; 2]; 48]))
    }

    #[test]
    fn test_face_label() {
        let label = face_label(&sprite("wide", 0), &sprite("button", 0), &sprite("wink", 0));
        assert_eq!(label, "wide_button_wink");
    }

    #[test]
    fn test_faces_iteration_order() {
        let eyes = [sprite("a", 0), sprite("b", 0)];
        let noses = [sprite("n", 0), sprite("m", 0)];
        let mut sink = MemorySink::new();

        let written = generate_faces(
            &ImageSpec::default(),
            &SAMPLE_PALETTE,
            &eyes,
            &eyes,
            &noses,
            &mut sink,
        )
        .unwrap();

        assert_eq!(written, 8);
        assert_eq!(
            sink.labels().collect::<Vec<_>>(),
            vec![
                "a_n_a", "a_m_a", "a_n_b", "a_m_b", "b_n_a", "b_m_a", "b_n_b", "b_m_b"
            ]
        );
    }

    #[test]
    fn test_faces_height_mismatch_is_fatal() {
        let eyes = [sprite("a", 0)];
        let noses = [Sprite::new("short", PixelMatrix::new(16, vec![vec![0; 2]; 47]))];
        let mut sink = MemorySink::new();

        let result = generate_faces(
            &ImageSpec::default(),
            &SAMPLE_PALETTE,
            &eyes,
            &eyes,
            &noses,
            &mut sink,
        );
        assert!(matches!(result, Err(GenerateError::Composite(_))));
        assert!(sink.outputs.is_empty());
    }

    #[test]
    fn test_faces_width_mismatch_is_fatal() {
        let eyes = [Sprite::new("narrow", PixelMatrix::new(8, vec![vec![0]; 48]))];
        let noses = [sprite("n", 0)];
        let mut sink = MemorySink::new();

        let result = generate_faces(
            &ImageSpec::default(),
            &SAMPLE_PALETTE,
            &eyes,
            &eyes,
            &noses,
            &mut sink,
        );
        assert!(matches!(result, Err(GenerateError::Render(_))));
    }
}
