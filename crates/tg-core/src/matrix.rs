//! Matrices de tramage ordonné : rangs de seuil entiers par cellule.
//!
//! Chaque table donne l'ordre dans lequel les cellules d'une tuile
//! s'allument quand la luminosité monte. Les rangs sont convertis en
//! seuils centrés par [`crate::normalize::normalize`].

/// Damier 2×2. Deux niveaux seulement, en alternance stricte.
pub const CHECKER: &[&[u8]] = &[&[0, 2], &[2, 0]];

/// Matrice Bayer 2×2 standard, valeurs 0..4.
pub const BAYER_2X2: &[&[u8]] = &[&[0, 2], &[3, 1]];

/// Matrice Bayer 4×4 standard, valeurs 0..16.
pub const BAYER_4X4: &[&[u8]] = &[
    &[0, 8, 2, 10],
    &[12, 4, 14, 6],
    &[3, 11, 1, 9],
    &[15, 7, 13, 5],
];

/// Matrice Bayer 8×8 standard, valeurs 0..64.
pub const BAYER_8X8: &[&[u8]] = &[
    &[0, 48, 12, 60, 3, 51, 15, 63],
    &[32, 16, 44, 28, 35, 19, 47, 31],
    &[8, 56, 4, 52, 11, 59, 7, 55],
    &[40, 24, 36, 20, 43, 27, 39, 23],
    &[2, 50, 14, 62, 1, 49, 13, 61],
    &[34, 18, 46, 30, 33, 17, 45, 29],
    &[10, 58, 6, 54, 9, 57, 5, 53],
    &[42, 26, 38, 22, 41, 25, 37, 21],
];

/// Pointillé horizontal 4×2, valeurs 0..8.
pub const STIPPLE_H: &[&[u8]] = &[&[0, 4, 1, 5], &[6, 2, 7, 3]];

/// Pointillé vertical 2×4, valeurs 0..8.
pub const STIPPLE_V: &[&[u8]] = &[&[0, 4], &[6, 2], &[1, 5], &[7, 3]];

/// Lignes horizontales 4×2. La seconde ligne sature presque entièrement.
pub const LINE_H: &[&[u8]] = &[&[0, 2, 1, 3], &[7, 6, 7, 7]];

/// Lignes verticales 2×4. La seconde colonne sature presque entièrement.
pub const LINE_V: &[&[u8]] = &[&[0, 7], &[2, 6], &[1, 7], &[3, 7]];
