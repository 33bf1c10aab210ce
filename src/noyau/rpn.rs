// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) suivi de '(' :
//    - name ∈ registre => fonction unaire (postfixée en RPN)
//    - sinon => FonctionInconnue
// - Ident(name) seul : constante du registre (pi, e), sinon IdentifiantInconnu
// - Moins unaire : '-' quand on attend une valeur => Tok::Neg (préfixe)
//   Plus unaire  : ignoré
// - Précédences : + - (1) < * / % (2) < neg (3) < ^ (4, associatif à droite)
//   => -2^2 = -(2^2), 2^-1 = 0.5, -2*3 = (-2)*3
// - Valeurs et opérateurs alternent : une valeur juste après une valeur
//   (pas de multiplication implicite, pas de postfixe) => ExpressionInvalide

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::fonctions::Registre;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(1), Slash, Num(2), RPar]
///   rpn:    [Num(1), Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok], registre: &Registre) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les valeurs juxtaposées.
    let mut prev_was_value = false;

    for (i, tok) in tokens.iter().enumerate() {
        // Num, Ident et '(' ouvrent une valeur : il faut un opérateur avant
        if prev_was_value && matches!(tok, Tok::Num(_) | Tok::Ident(_) | Tok::LPar) {
            return Err(ErreurEval::ExpressionInvalide);
        }

        match tok {
            Tok::Num(_) => {
                out.push(tok.clone());
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                let appel = matches!(tokens.get(i + 1), Some(Tok::LPar));
                if appel {
                    if !registre.est_fonction(name) {
                        return Err(ErreurEval::FonctionInconnue(name.clone()));
                    }
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(tok.clone());
                    prev_was_value = false;
                } else {
                    let v = registre
                        .constante(name)
                        .ok_or_else(|| ErreurEval::IdentifiantInconnu(name.clone()))?;
                    out.push(Tok::Num(v));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                ops.push(Tok::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; pas de '(' => parenthèse orpheline
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurEval::ParentheseInattendue),
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : '+' ne fait rien, '-' devient préfixe (rien à dépiler)
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Ident(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(tok);

                    let doit_pop = if is_right_associative(tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };
                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok.clone());
                prev_was_value = false;
            }

            // jamais produit par tokenize
            Tok::Neg => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseNonFermee);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::ExpressionInvalide)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Caret => {
                let b = Box::new(st.pop().ok_or(ErreurEval::ExpressionInvalide)?);
                let a = Box::new(st.pop().ok_or(ErreurEval::ExpressionInvalide)?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    Tok::Percent => Expr::Mod(a, b),
                    _ => Expr::Pow(a, b),
                };
                st.push(e);
            }

            Tok::Ident(name) => {
                let x = st
                    .pop()
                    .ok_or_else(|| ErreurEval::FonctionSansArgument(name.clone()))?;
                st.push(Expr::Appel(name, Box::new(x)));
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurEval::ExpressionInvalide),
    }
}
