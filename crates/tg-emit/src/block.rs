//! Écriture des blocs accolades de seuils normalisés.

use std::io::{self, Write};

use tg_core::Pattern;
use tg_core::normalize::normalize;

/// Écrit une table de rangs sous forme de bloc accolade.
///
/// Format : `{` seul sur sa ligne, puis chaque ligne de la table indentée
/// de deux espaces, seuils joints par `", "` avec virgule finale, puis `}`.
/// Chaque seuil s'écrit en décimal le plus court qui reste exact, point
/// décimal garanti (`0.0`, jamais `0` ni `-0.0`) : les blocs se collent
/// directement comme littéraux flottants.
///
/// # Errors
/// Retourne l'erreur d'E/S du flux de sortie, seule panne possible ici.
///
/// # Example
/// ```
/// use tg_emit::block::write_block;
///
/// let mut out = Vec::new();
/// write_block(&mut out, &[&[0, 2], &[3, 1]]).unwrap();
/// assert_eq!(out, b"{\n  -0.25, 0.25,\n  0.5, 0.0,\n}\n");
/// ```
pub fn write_block<W: Write>(out: &mut W, rows: &[&[u8]]) -> io::Result<()> {
    let thresholds = normalize(rows);
    writeln!(out, "{{")?;
    for row in &thresholds {
        out.write_all(b"  ")?;
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.write_all(b", ")?;
            }
            write!(out, "{value:?}")?;
        }
        out.write_all(b",\n")?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Écrit les blocs des motifs donnés, dans l'ordre reçu, chaque bloc suivi
/// d'une ligne vide (dernier compris).
///
/// # Errors
/// Retourne l'erreur d'E/S du flux de sortie.
///
/// # Example
/// ```
/// use tg_core::Pattern;
/// use tg_emit::block::write_blocks;
///
/// let mut out = Vec::new();
/// write_blocks(&mut out, &[Pattern::Checker]).unwrap();
/// assert!(out.ends_with(b"}\n\n"));
/// ```
pub fn write_blocks<W: Write>(out: &mut W, patterns: &[Pattern]) -> io::Result<()> {
    for pattern in patterns {
        let (width, height) = pattern.size();
        log::debug!("Émission {pattern} ({width}×{height})");
        write_block(out, pattern.matrix())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKER_BLOCK: &str = "{
  -0.25, 0.25,
  0.25, -0.25,
}
";

    const BAYER_2X2_BLOCK: &str = "{
  -0.25, 0.25,
  0.5, 0.0,
}
";

    const BAYER_4X4_BLOCK: &str = "{
  -0.4375, 0.0625, -0.3125, 0.1875,
  0.3125, -0.1875, 0.4375, -0.0625,
  -0.25, 0.25, -0.375, 0.125,
  0.5, 0.0, 0.375, -0.125,
}
";

    const BAYER_8X8_BLOCK: &str = "{
  -0.484375, 0.265625, -0.296875, 0.453125, -0.4375, 0.3125, -0.25, 0.5,
  0.015625, -0.234375, 0.203125, -0.046875, 0.0625, -0.1875, 0.25, 0.0,
  -0.359375, 0.390625, -0.421875, 0.328125, -0.3125, 0.4375, -0.375, 0.375,
  0.140625, -0.109375, 0.078125, -0.171875, 0.1875, -0.0625, 0.125, -0.125,
  -0.453125, 0.296875, -0.265625, 0.484375, -0.46875, 0.28125, -0.28125, 0.46875,
  0.046875, -0.203125, 0.234375, -0.015625, 0.03125, -0.21875, 0.21875, -0.03125,
  -0.328125, 0.421875, -0.390625, 0.359375, -0.34375, 0.40625, -0.40625, 0.34375,
  0.171875, -0.078125, 0.109375, -0.140625, 0.15625, -0.09375, 0.09375, -0.15625,
}
";

    const STIPPLE_H_BLOCK: &str = "{
  -0.375, 0.125, -0.25, 0.25,
  0.375, -0.125, 0.5, 0.0,
}
";

    const STIPPLE_V_BLOCK: &str = "{
  -0.375, 0.125,
  0.375, -0.125,
  -0.25, 0.25,
  0.5, 0.0,
}
";

    const LINE_H_BLOCK: &str = "{
  -0.375, -0.125, -0.25, 0.0,
  0.5, 0.375, 0.5, 0.5,
}
";

    const LINE_V_BLOCK: &str = "{
  -0.375, 0.5,
  -0.125, 0.375,
  -0.25, 0.5,
  0.0, 0.5,
}
";

    fn render(patterns: &[Pattern]) -> String {
        let mut out = Vec::new();
        write_blocks(&mut out, patterns).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn checker_block_matches_reference() {
        let mut out = Vec::new();
        write_block(&mut out, Pattern::Checker.matrix()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), CHECKER_BLOCK);
    }

    #[test]
    fn bayer8x8_block_matches_reference() {
        let mut out = Vec::new();
        write_block(&mut out, Pattern::Bayer8x8.matrix()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), BAYER_8X8_BLOCK);
    }

    #[test]
    fn full_catalog_output_matches_reference_bytes() {
        let expected = [
            CHECKER_BLOCK,
            BAYER_2X2_BLOCK,
            BAYER_4X4_BLOCK,
            BAYER_8X8_BLOCK,
            STIPPLE_H_BLOCK,
            STIPPLE_V_BLOCK,
            LINE_H_BLOCK,
            LINE_V_BLOCK,
        ]
        .map(|block| format!("{block}\n"))
        .concat();
        assert_eq!(render(&Pattern::ALL), expected);
    }

    #[test]
    fn blocks_are_separated_by_single_blank_line() {
        let text = render(&Pattern::ALL);
        assert_eq!(text.matches("{\n").count(), 8);
        assert!(!text.contains("\n\n\n"));
        assert!(text.ends_with("}\n\n"));
    }

    #[test]
    fn no_negative_zero_in_catalog() {
        let text = render(&Pattern::ALL);
        assert!(!text.contains("-0.0,"));
    }

    #[test]
    fn single_cell_table_prints_exact_half() {
        let mut out = Vec::new();
        write_block(&mut out, &[&[0]]).unwrap();
        assert_eq!(out, b"{\n  0.5,\n}\n");
    }

    #[test]
    fn ragged_rows_print_all_values() {
        let mut out = Vec::new();
        write_block(&mut out, &[&[0, 3], &[1]]).unwrap();
        assert_eq!(out, b"{\n  -0.25, 0.5,\n  0.0,\n}\n");
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "flux fermé"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_block(&mut BrokenSink, Pattern::Checker.matrix()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
