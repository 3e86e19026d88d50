use crate::compositor::PixelMatrix;

const INDENT: &str = "        ";

/// Formats each packed row as a `hex"..."` literal on its own line; the last
/// literal is terminated with `;`.
pub fn hex_literals(matrix: &PixelMatrix) -> Vec<String> {
    let last = matrix.rows.len().saturating_sub(1);
    matrix
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let terminator = if i == last { ";" } else { "" };
            format!("{INDENT}hex\"{}\"{terminator}", hex::encode(row))
        })
        .collect()
}
