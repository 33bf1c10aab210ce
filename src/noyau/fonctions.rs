// src/noyau/fonctions.rs
//
// Registre des fonctions unaires + constantes nommées.
//
// - Construit une seule fois (OnceLock), lecture seule ensuite.
// - Une fonction = un objet qui implémente FonctionUnaire (fn native ou struct dédiée).
// - Ajouter une fonction = un appel à avec_fonction(), sans toucher à l’évaluateur.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::erreur::ErreurEval;

/// Contrat d’une fonction d’arité 1.
pub trait FonctionUnaire: Send + Sync {
    fn appliquer(&self, x: f64) -> Result<f64, ErreurEval>;
}

/// Fonction native infaillible (sin, cos, sqrt...).
/// Les sorties hors domaine (NaN) suivent IEEE et sont traitées au formatage.
#[derive(Clone, Copy)]
pub struct Native(pub fn(f64) -> f64);

impl FonctionUnaire for Native {
    fn appliquer(&self, x: f64) -> Result<f64, ErreurEval> {
        Ok((self.0)(x))
    }
}

/// Factorielle : entier naturel seulement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Factorielle;

/// Au-delà, le produit dépasse f64::MAX : on sature directement.
const FACT_MAX: f64 = 170.0;

impl FonctionUnaire for Factorielle {
    fn appliquer(&self, x: f64) -> Result<f64, ErreurEval> {
        let n = x.trunc();
        // NaN != NaN : couvre aussi l’argument NaN
        if n != x || n < 0.0 {
            return Err(ErreurEval::domaine("fact", x));
        }
        if n > FACT_MAX {
            return Ok(f64::INFINITY);
        }

        let mut acc = 1.0;
        let mut i = 2.0;
        while i <= n {
            acc *= i;
            i += 1.0;
        }
        Ok(acc)
    }
}

#[derive(Clone, Default)]
pub struct Registre {
    fonctions: HashMap<String, Arc<dyn FonctionUnaire>>,
    constantes: HashMap<String, f64>,
}

static REGISTRE: OnceLock<Registre> = OnceLock::new();

impl Registre {
    /// Registre partagé (construit au premier appel).
    pub fn global() -> &'static Registre {
        REGISTRE.get_or_init(Registre::standard)
    }

    /// Registre complet de la calculatrice.
    pub fn standard() -> Self {
        Registre::default()
            // trig
            .avec_fonction("sin", Native(f64::sin))
            .avec_fonction("cos", Native(f64::cos))
            .avec_fonction("tan", Native(f64::tan))
            .avec_fonction("asin", Native(f64::asin))
            .avec_fonction("acos", Native(f64::acos))
            .avec_fonction("atan", Native(f64::atan))
            .avec_fonction("sinh", Native(f64::sinh))
            .avec_fonction("cosh", Native(f64::cosh))
            .avec_fonction("tanh", Native(f64::tanh))
            // log et ln : népérien ; log10 pour la base 10
            .avec_fonction("log", Native(f64::ln))
            .avec_fonction("ln", Native(f64::ln))
            .avec_fonction("log10", Native(f64::log10))
            .avec_fonction("log2", Native(f64::log2))
            .avec_fonction("log1p", Native(f64::ln_1p))
            .avec_fonction("exp", Native(f64::exp))
            // racines + arrondis
            .avec_fonction("sqrt", Native(f64::sqrt))
            .avec_fonction("cbrt", Native(f64::cbrt))
            .avec_fonction("abs", Native(f64::abs))
            .avec_fonction("ceil", Native(f64::ceil))
            .avec_fonction("floor", Native(f64::floor))
            .avec_fonction("signum", Native(signe))
            // fonctions maison
            .avec_fonction("fact", Factorielle)
            .avec_constante("pi", std::f64::consts::PI)
            .avec_constante("e", std::f64::consts::E)
    }

    pub fn avec_fonction(mut self, nom: &str, f: impl FonctionUnaire + 'static) -> Self {
        self.fonctions.insert(nom.to_string(), Arc::new(f));
        self
    }

    pub fn avec_constante(mut self, nom: &str, valeur: f64) -> Self {
        self.constantes.insert(nom.to_string(), valeur);
        self
    }

    pub fn fonction(&self, nom: &str) -> Option<&dyn FonctionUnaire> {
        self.fonctions.get(nom).map(|f| f.as_ref())
    }

    pub fn est_fonction(&self, nom: &str) -> bool {
        self.fonctions.contains_key(nom)
    }

    pub fn constante(&self, nom: &str) -> Option<f64> {
        self.constantes.get(nom).copied()
    }
}

/// signum “mathématique” : 0 pour ±0 (f64::signum renvoie ±1).
fn signe(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}
