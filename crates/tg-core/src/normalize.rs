//! Normalisation des rangs entiers vers l'intervalle centré (-0.5, 0.5].

/// Convertit une table de rangs en seuils flottants centrés autour de zéro.
///
/// Chaque rang `n` devient `(n + 1) / (largeur × hauteur) - 0.5` en f64.
/// La largeur est dérivée de la première ligne uniquement ; une ligne plus
/// courte ou plus longue est convertie telle quelle, sans contrôle de forme.
///
/// Le rang maximal `total - 1` atteint exactement `0.5`. Le quotient vaut
/// au minimum `1 / total`, donc aucun zéro négatif n'est produit.
///
/// # Example
/// ```
/// use tg_core::normalize::normalize;
///
/// let thresholds = normalize(&[&[0, 2], &[3, 1]]);
/// assert_eq!(thresholds[0], vec![-0.25, 0.25]);
/// assert_eq!(thresholds[1], vec![0.5, 0.0]);
/// ```
#[must_use]
pub fn normalize(rows: &[&[u8]]) -> Vec<Vec<f64>> {
    let width = rows.first().map_or(0, |row| row.len());
    let total = (width * rows.len()) as f64;
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|&rank| (f64::from(rank) + 1.0) / total - 0.5)
                .collect()
        })
        .collect()
}
