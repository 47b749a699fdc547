//! Catalogue des motifs : noms canoniques, alias et tables associées.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::matrix;

/// Motif de tramage du catalogue.
///
/// Chaque motif relie une table de seuils à son nom canonique, ses alias
/// acceptés en entrée et sa description.
///
/// # Example
/// ```
/// use tg_core::Pattern;
///
/// let pattern: Pattern = "bayer4".parse().unwrap();
/// assert_eq!(pattern, Pattern::Bayer4x4);
/// assert_eq!(pattern.name(), "bayer4x4");
/// assert_eq!(pattern.size(), (4, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Damier 2×2 strict.
    Checker,
    /// Bayer 2×2, 4 niveaux.
    Bayer2x2,
    /// Bayer 4×4, 16 niveaux.
    Bayer4x4,
    /// Bayer 8×8, 64 niveaux.
    Bayer8x8,
    /// Pointillé horizontal 4×2.
    StippleH,
    /// Pointillé vertical 2×4.
    StippleV,
    /// Lignes horizontales 4×2.
    LineH,
    /// Lignes verticales 2×4.
    LineV,
}

impl Pattern {
    /// Ordre d'émission du catalogue, stable d'une exécution à l'autre.
    pub const ALL: [Pattern; 8] = [
        Pattern::Checker,
        Pattern::Bayer2x2,
        Pattern::Bayer4x4,
        Pattern::Bayer8x8,
        Pattern::StippleH,
        Pattern::StippleV,
        Pattern::LineH,
        Pattern::LineV,
    ];

    /// Table de rangs de seuil du motif.
    #[must_use]
    pub const fn matrix(self) -> &'static [&'static [u8]] {
        match self {
            Pattern::Checker => matrix::CHECKER,
            Pattern::Bayer2x2 => matrix::BAYER_2X2,
            Pattern::Bayer4x4 => matrix::BAYER_4X4,
            Pattern::Bayer8x8 => matrix::BAYER_8X8,
            Pattern::StippleH => matrix::STIPPLE_H,
            Pattern::StippleV => matrix::STIPPLE_V,
            Pattern::LineH => matrix::LINE_H,
            Pattern::LineV => matrix::LINE_V,
        }
    }

    /// Nom canonique, tel qu'accepté par `--matrix` et affiché par `--list`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Pattern::Checker => "checkerboard",
            Pattern::Bayer2x2 => "bayer2x2",
            Pattern::Bayer4x4 => "bayer4x4",
            Pattern::Bayer8x8 => "bayer8x8",
            Pattern::StippleH => "stippleH",
            Pattern::StippleV => "stippleV",
            Pattern::LineH => "lineH",
            Pattern::LineV => "lineV",
        }
    }

    /// Description courte du rendu produit par le motif.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Pattern::Checker => "checkerboard dithering",
            Pattern::Bayer2x2 => "2x2 bayer dithering",
            Pattern::Bayer4x4 => "4x4 bayer dithering",
            Pattern::Bayer8x8 => "8x8 bayer dithering",
            Pattern::StippleH => "horizontal stippled dithering",
            Pattern::StippleV => "vertical stippled dithering",
            Pattern::LineH => "horizontal line dithering",
            Pattern::LineV => "vertical line dithering",
        }
    }

    /// Dimensions (largeur, hauteur). La largeur est celle de la première
    /// ligne de la table.
    #[must_use]
    pub fn size(self) -> (usize, usize) {
        let rows = self.matrix();
        (rows.first().map_or(0, |row| row.len()), rows.len())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Reconnaît le nom canonique et les alias historiques (`bayer`,
    /// `bayer4`, `checkered`, `stipple_h`, ...). Aucune normalisation de
    /// casse : `BAYER` est rejeté.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkerboard" | "checkered" | "checker" => Ok(Pattern::Checker),
            "bayer" | "bayer2" | "bayer2x2" => Ok(Pattern::Bayer2x2),
            "bayer4" | "bayer4x4" => Ok(Pattern::Bayer4x4),
            "bayer8" | "bayer8x8" => Ok(Pattern::Bayer8x8),
            "stippleH" | "stippleh" | "stipple_h" => Ok(Pattern::StippleH),
            "stippleV" | "stipplev" | "stipple_v" => Ok(Pattern::StippleV),
            "lineH" | "lineh" | "line_h" => Ok(Pattern::LineH),
            "lineV" | "linev" | "line_v" => Ok(Pattern::LineV),
            other => Err(PatternError::UnknownPattern {
                name: other.to_string(),
            }),
        }
    }
}
