//! Calculatrice scientifique
//!
//! - `noyau` : moteur d’expressions (prétraitement, jetons, RPN, évaluation f64, format)
//! - `app`   : contrôleur des touches (`AppCalc::handle_input`) + vue egui

pub mod app;
pub mod noyau;

pub use app::AppCalc;
pub use noyau::{eval_expression, ErreurEval, SENTINELLE};
