//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue) : contrôleur des appuis de touches.
//!
//! Rôle : tenir l’expression en cours, le texte affiché et le mode inverse,
//! interpréter chaque appui (`handle_input`) et déléguer l’évaluation au noyau.
//!
//! Contrats :
//! - Le contrôleur n’échoue jamais : toute erreur du noyau devient "Error" à l’affichage.
//! - `affichage` vaut toujours "0", l’expression, ou le dernier résultat / "Error".
//! - Le mode inverse ne change que l’interprétation des touches sin/cos/tan à la saisie.
//! - Défense en profondeur : saisie bornée à LONGUEUR_MAX caractères. Un résultat,
//!   même de ~300 chiffres, tient toujours sous la borne et se réévalue.

use tracing::{debug, trace};

use crate::noyau::{eval_detaille, Demarche, ErreurEval, LONGUEUR_MAX, SENTINELLE};

/// Touches de contrôle.
pub const AC: &str = "AC";
pub const RETOUR: &str = "⌫";
pub const EGAL: &str = "=";
pub const INV: &str = "inv";
pub const FACT: &str = "x!";
pub const INVERSE_X: &str = "1/x";
pub const PUISSANCE: &str = "xʸ";

/// Touches qui insèrent "<nom>(".
const FONCTIONS: [&str; 9] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "√",
];

/// Affichage initial.
const ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    expression: String,

    // --- sortie ---
    affichage: String,

    // --- mode ---
    inverse: bool,

    // --- diagnostic (n’influence jamais le comportement) ---
    derniere_erreur: Option<ErreurEval>,
    demarche: Option<Demarche>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            affichage: ZERO.to_string(),
            inverse: false,
            derniere_erreur: None,
            demarche: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Lecture (collaborateur) ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn inverse(&self) -> bool {
        self.inverse
    }

    /// Erreur structurée du dernier "=" raté (None après un succès).
    pub fn derniere_erreur(&self) -> Option<&ErreurEval> {
        self.derniere_erreur.as_ref()
    }

    /// Démarche du dernier "=" réussi.
    pub fn demarche(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }

    /// Libellé à afficher sur une touche (sin⁻¹... en mode inverse).
    /// Ne change jamais l’identifiant envoyé à `handle_input`.
    pub fn libelle<'a>(&self, bouton: &'a str) -> &'a str {
        if !self.inverse {
            return bouton;
        }
        match bouton {
            "sin" => "sin⁻¹",
            "cos" => "cos⁻¹",
            "tan" => "tan⁻¹",
            _ => bouton,
        }
    }

    /* ------------------------ Appui d’une touche ------------------------ */

    pub fn handle_input(&mut self, bouton: &str) {
        let courant = if self.inverse {
            match bouton {
                "sin" => "asin",
                "cos" => "acos",
                "tan" => "atan",
                _ => bouton,
            }
        } else {
            bouton
        };
        trace!(bouton, courant, expression = %self.expression, "appui");

        match courant {
            AC => self.reset_total(),
            RETOUR => self.retour_arriere(),
            EGAL => self.evaluer(),
            INV => self.inverse = !self.inverse,
            f if FONCTIONS.contains(&f) => {
                let appel = format!("{f}(");
                if self.expression_vierge() {
                    self.poser(appel);
                } else {
                    self.poser(format!("{}{appel}", self.expression));
                }
            }
            FACT => self.poser(format!("{}fact(", self.expression)),
            INVERSE_X => {
                if self.expression_vierge() {
                    self.poser("1/".to_string());
                } else {
                    self.poser(format!("1/({})", self.expression));
                }
            }
            PUISSANCE => self.poser(format!("{}^", self.expression)),
            _ => {
                if self.affichage == ZERO || self.expression == SENTINELLE {
                    self.poser(courant.to_string());
                } else {
                    self.poser(format!("{}{courant}", self.expression));
                }
            }
        }
    }

    /// AC : remise à zéro (expression + affichage). Le mode inverse est conservé.
    pub fn reset_total(&mut self) {
        self.expression.clear();
        self.affichage = ZERO.to_string();
    }

    /// ⌫ : retire le dernier caractère (rien si l’expression est vide).
    fn retour_arriere(&mut self) {
        if self.expression.pop().is_none() {
            return;
        }
        self.affichage = if self.expression.is_empty() {
            ZERO.to_string()
        } else {
            self.expression.clone()
        };
    }

    /// = : évalue via le noyau ; résultat réutilisable, ou repart de zéro sur erreur.
    fn evaluer(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        match eval_detaille(&self.expression) {
            Ok(ev) => {
                debug!(expression = %self.expression, resultat = %ev.texte, "évalué");
                self.affichage = ev.texte.clone();
                self.expression = ev.texte;
                self.demarche = Some(ev.demarche);
                self.derniere_erreur = None;
            }
            Err(e) => {
                debug!(expression = %self.expression, erreur = %e, "erreur d’évaluation");
                self.affichage = SENTINELLE.to_string();
                self.expression.clear();
                self.demarche = None;
                self.derniere_erreur = Some(e);
            }
        }
    }

    /// "0" ou "Error" : une fonction remplace au lieu d’ajouter.
    fn expression_vierge(&self) -> bool {
        self.expression == ZERO || self.expression == SENTINELLE
    }

    /// Nouvelle expression (affichage = expression), ignorée au-delà de LONGUEUR_MAX.
    fn poser(&mut self, nouvelle: String) {
        if nouvelle.chars().count() > LONGUEUR_MAX {
            debug!(max = LONGUEUR_MAX, "appui ignoré : expression trop longue");
            return;
        }
        self.affichage = nouvelle.clone();
        self.expression = nouvelle;
    }
}
