//! Listing du catalogue : une ligne par motif.

use std::io::{self, Write};

use tg_core::Pattern;

/// Écrit le catalogue, une ligne par motif dans l'ordre d'émission :
/// nom canonique (aligné sur 12 colonnes), dimensions, description.
///
/// # Errors
/// Retourne l'erreur d'E/S du flux de sortie.
pub fn write_listing<W: Write>(out: &mut W) -> io::Result<()> {
    for pattern in Pattern::ALL {
        let (width, height) = pattern.size();
        writeln!(
            out,
            "{:<12}  {width}×{height}  {}",
            pattern.name(),
            pattern.description()
        )?;
    }
    Ok(())
}
