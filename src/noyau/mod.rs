//! Noyau de la calculatrice scientifique (f64)
//!
//! Organisation interne :
//! - pretraitement.rs : glyphes d’affichage (×, ÷, √, π) -> syntaxe
//! - jetons.rs        : tokenisation
//! - rpn.rs           : shunting-yard + construction Expr
//! - expr.rs          : AST + évaluation IEEE
//! - fonctions.rs     : registre (fonctions unaires + constantes), factorielle
//! - format.rs        : texte du résultat (7 décimales max)
//! - erreur.rs        : ErreurEval
//! - eval.rs          : pipeline complet + sentinelle

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod pretraitement;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_detaille, eval_expression, Demarche, LONGUEUR_MAX, SENTINELLE};
