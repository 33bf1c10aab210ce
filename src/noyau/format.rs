// src/noyau/format.rs
//
// Affichage du résultat : virgule fixe, au plus DECIMALES chiffres après le point,
// zéros finaux retirés (et le point s’il ne reste rien). Pas de séparateur de milliers.

use super::erreur::ErreurEval;

/// Nombre maximal de décimales affichées.
pub const DECIMALES: usize = 7;

/// NaN / ±inf ne sont pas représentables : erreur (=> sentinelle à la frontière).
pub fn format_resultat(x: f64) -> Result<String, ErreurEval> {
    if !x.is_finite() {
        return Err(ErreurEval::ResultatNonFini(x));
    }

    let brut = format!("{x:.prec$}", prec = DECIMALES);
    let txt = brut.trim_end_matches('0').trim_end_matches('.');

    // -0.0000000x arrondi => "-0" : on affiche "0"
    if txt == "-0" {
        return Ok("0".to_string());
    }
    Ok(txt.to_string())
}
