// src/noyau/pretraitement.rs
//
// Substitutions texte avant tokenisation (ordre fixe) :
//   × -> *    ÷ -> /    √ -> sqrt    π -> 3.141592653589793

/// Développement décimal de π (relu exactement en f64::consts::PI).
pub const PI_TEXTE: &str = "3.141592653589793";

pub fn pretraiter(s: &str) -> String {
    s.replace('×', "*")
        .replace('÷', "/")
        .replace('√', "sqrt")
        .replace('π', PI_TEXTE)
}
