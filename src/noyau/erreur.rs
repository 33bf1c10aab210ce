// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Toutes ces erreurs deviennent la même sentinelle "Error" à la frontière publique
// (eval_expression). La forme structurée reste disponible via eval_detaille.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    #[error("entrée trop longue ({longueur} caractères, max {max})")]
    EntreeTropLongue { longueur: usize, max: usize },

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("fonction inconnue: {0}")]
    FonctionInconnue(String),

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante inattendue")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("fonction sans argument: {0}")]
    FonctionSansArgument(String),

    #[error("{fonction}: argument hors domaine ({valeur})")]
    Domaine { fonction: String, valeur: f64 },

    #[error("résultat non fini ({0})")]
    ResultatNonFini(f64),
}

impl ErreurEval {
    /// Raccourci pour les fonctions du registre.
    pub fn domaine(fonction: &str, valeur: f64) -> Self {
        ErreurEval::Domaine {
            fonction: fonction.to_string(),
            valeur,
        }
    }
}
