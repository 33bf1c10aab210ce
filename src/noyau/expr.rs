// src/noyau/expr.rs
//
// AST flottant (f64, sémantique IEEE).
// - division par zéro : ±inf / NaN, pas d’erreur ici
// - seules les fonctions du registre peuvent échouer (ex: fact(-1))

use std::fmt;

use super::erreur::ErreurEval;
use super::fonctions::Registre;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),

    // fonction du registre, résolue au parse
    Appel(String, Box<Expr>),
}

impl Expr {
    pub fn eval(&self, registre: &Registre) -> Result<f64, ErreurEval> {
        use Expr::*;

        Ok(match self {
            Num(v) => *v,
            Neg(x) => -x.eval(registre)?,

            Add(a, b) => a.eval(registre)? + b.eval(registre)?,
            Sub(a, b) => a.eval(registre)? - b.eval(registre)?,
            Mul(a, b) => a.eval(registre)? * b.eval(registre)?,
            Div(a, b) => a.eval(registre)? / b.eval(registre)?,
            // reste flottant : signe du dividende
            Mod(a, b) => a.eval(registre)? % b.eval(registre)?,
            Pow(a, b) => a.eval(registre)?.powf(b.eval(registre)?),

            Appel(nom, x) => {
                let f = registre
                    .fonction(nom)
                    .ok_or_else(|| ErreurEval::FonctionInconnue(nom.clone()))?;
                f.appliquer(x.eval(registre)?)?
            }
        })
    }
}

/// Forme parenthésée complète (démarche).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Num(v) => write!(f, "{v}"),
            Neg(x) => write!(f, "(-{x})"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Mod(a, b) => write!(f, "({a} % {b})"),
            Pow(a, b) => write!(f, "({a} ^ {b})"),
            Appel(nom, x) => write!(f, "{nom}({x})"),
        }
    }
}
