//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : le noyau renvoie soit "Error", soit un texte qui se réévalue à l’identique
//! - valeurs juxtaposées (sans opérateur entre elles) : toujours ExpressionInvalide
//! - côté contrôleur : l’affichage reste "0", "Error" ou l’expression / le résultat

use std::time::{Duration, Instant};

use super::eval::{eval_detaille, eval_expression, SENTINELLE};
use super::ErreurEval;
use crate::app::AppCalc;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        2 => "π".to_string(),
        3 => format!("-{}", rng.pick(5)),
        4 => format!("√({})", rng.pick(50)),
        _ => format!("fact({})", rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(9) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}×{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}÷{})", gen_expr(rng, depth - 1)),
        5 => format!("({a}%{})", gen_expr(rng, depth - 1)),
        6 => format!("({a})^{}", rng.pick(3)),
        7 => {
            let f = rng.choisir(&["sin", "cos", "tan", "atan", "log", "ln"]);
            format!("{f}({a})")
        }
        _ => format!("-({a})"),
    }
}

/// Deux expressions bien formées collées sans opérateur.
/// La seconde commence par '(', un chiffre ou une fonction : jamais par '-'
/// (sinon ce serait une soustraction valide).
fn gen_juxtapose(rng: &mut Rng, depth: usize) -> String {
    let a = gen_expr(rng, depth);
    let b = gen_expr(rng, depth);
    match rng.pick(5) {
        0 => format!("({a})({b})"),
        1 => format!("({a}){}", rng.pick(10)),
        2 => format!("({a}) {}", rng.pick(10)),
        3 => format!("({a})sin({b})"),
        _ => format!("{} ({b})", rng.pick(10)),
    }
}

/// Expressions bien formées : seules des erreurs “de valeur” sont admises.
fn is_erreur_attendue(e: &ErreurEval) -> bool {
    matches!(
        e,
        ErreurEval::ResultatNonFini(_) | ErreurEval::Domaine { .. } | ErreurEval::EntreeTropLongue { .. }
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);

        match eval_detaille(&expr) {
            Ok(ev) => {
                // stabilité : le texte se relit à l’identique
                assert_eq!(eval_expression(&ev.texte), ev.texte, "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_valeurs_juxtaposees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xD0D0_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_juxtapose(&mut rng, 2);
        assert_eq!(
            eval_detaille(&expr).map(|ev| ev.texte),
            Err(ErreurEval::ExpressionInvalide),
            "expr={expr:?}"
        );
        assert_eq!(eval_expression(&expr), SENTINELLE, "expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(0xBADC0DE_u64);
    let mut r2 = Rng::new(0xBADC0DE_u64);

    for _ in 0..50 {
        let e1 = gen_expr(&mut r1, 3);
        let e2 = gen_expr(&mut r2, 3);
        assert_eq!(e1, e2);
        assert_eq!(eval_expression(&e1), eval_expression(&e2));
    }
}

#[test]
fn fuzz_safe_texte_arbitraire_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let morceaux = [
        "1", "2", ".", "(", ")", "+", "-", "×", "÷", "^", "%", "π", "√", "sin", "fact", "e",
        "x", "#", " ", "ln(",
    ];
    let mut rng = Rng::new(42);

    for _ in 0..300 {
        budget(t0, max);

        let n = 1 + rng.pick(12) as usize;
        let s: String = (0..n).map(|_| rng.choisir(&morceaux)).collect();

        // n’importe quelle entrée : jamais de panique, jamais de texte vide
        let r = eval_expression(&s);
        assert!(!r.is_empty(), "entrée={s:?}");
        if r != SENTINELLE {
            assert_eq!(eval_expression(&r), r, "entrée={s:?}");
        }
    }
}

#[test]
fn fuzz_safe_controleur_touches() {
    let t0 = Instant::now();
    // 2000 appuis en build de test non optimisé : marge large
    let max = Duration::from_secs(10);

    let touches = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "(", ")", "AC", "⌫", "%", "÷",
        "×", "-", "+", "=", "inv", "sin", "cos", "tan", "log", "ln", "√", "xʸ", "x!", "1/x", "π",
    ];
    let mut rng = Rng::new(0x5EED_u64);
    let mut calc = AppCalc::default();

    for _ in 0..2000 {
        budget(t0, max);

        let t = rng.choisir(&touches);
        calc.handle_input(t);

        let aff = calc.affichage();
        let expr = calc.expression();
        assert!(
            aff == "0" || aff == SENTINELLE || aff == expr,
            "touche={t:?} affichage={aff:?} expression={expr:?}"
        );
        if t == "=" && aff == SENTINELLE {
            assert!(expr.is_empty());
            assert!(calc.derniere_erreur().is_some());
        }
        if t == "AC" {
            assert_eq!(aff, "0");
            assert!(expr.is_empty());
        }
    }
}
