//! Noyau — évaluation (pipeline réel)
//!
//! prétraitement -> jetons -> RPN -> Expr -> eval f64 -> format
//!
//! Frontière publique : `eval_expression` ne renvoie jamais d’erreur structurée,
//! toute erreur devient la sentinelle "Error". `eval_detaille` garde l’erreur
//! (diagnostic / tests).

use tracing::debug;

use super::erreur::ErreurEval;
use super::fonctions::Registre;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::pretraitement::pretraiter;
use super::rpn::{from_rpn, to_rpn};

/// Texte affiché pour toute erreur d’évaluation.
pub const SENTINELLE: &str = "Error";

/// Garde-fou : longueur maximale d’une expression (en caractères).
///
/// Doit rester au-dessus du plus long résultat affichable : un f64 fini
/// s’écrit en au plus 310 caractères en virgule fixe ("-" + 309 chiffres),
/// pour qu’un résultat se réévalue toujours et laisse de la place à la saisie.
pub const LONGUEUR_MAX: usize = 512;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub pretraite: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub texte: String,
    pub demarche: Demarche,
}

/// API publique : texte formaté, ou "Error".
pub fn eval_expression(expr_str: &str) -> String {
    match eval_detaille(expr_str) {
        Ok(ev) => ev.texte,
        Err(e) => {
            debug!(expr = expr_str, erreur = %e, "évaluation refusée");
            SENTINELLE.to_string()
        }
    }
}

/// Pipeline complet avec le registre global.
pub fn eval_detaille(expr_str: &str) -> Result<Evaluation, ErreurEval> {
    eval_avec(expr_str, Registre::global())
}

/// Pipeline complet avec un registre donné (fonctions maison).
pub fn eval_avec(expr_str: &str, registre: &Registre) -> Result<Evaluation, ErreurEval> {
    let longueur = expr_str.chars().count();
    if longueur > LONGUEUR_MAX {
        return Err(ErreurEval::EntreeTropLongue {
            longueur,
            max: LONGUEUR_MAX,
        });
    }

    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Glyphes d’affichage -> syntaxe
    let pretraite = pretraiter(s);

    // 2) Jetons
    let jetons = tokenize(&pretraite)?;
    debug!(jetons = %format_tokens(&jetons), "jetons");

    // 3) RPN
    let rpn = to_rpn(&jetons, registre)?;

    // 4) AST
    let arbre = from_rpn(&rpn)?;

    // 5) Valeur (IEEE) puis texte
    let valeur = arbre.eval(registre)?;
    let texte = format_resultat(valeur)?;
    debug!(%valeur, texte = %texte, "résultat");

    Ok(Evaluation {
        valeur,
        texte,
        demarche: Demarche {
            jetons: format_tokens(&jetons),
            rpn: format_tokens(&rpn),
            arbre: arbre.to_string(),
            pretraite,
        },
    })
}
