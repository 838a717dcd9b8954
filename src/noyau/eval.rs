//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> pile de Nombre
//!
//! Évaluateur restreint : littéraux décimaux + - * / uniquement.
//! Rien n’est jamais exécuté ; toute entrée hors grammaire => ErreurEval.

use tracing::trace;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::nombre::{Nombre, MAX_CHIFFRES_ENTIER};
use super::rpn::{format_rpn, to_rpn, OpRpn, Rpn};

/// API publique : évalue une expression et retourne sa valeur.
pub fn eval_expression(expr_str: &str) -> Result<Nombre, ErreurEval> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN (syntaxe vérifiée ici)
    let rpn = to_rpn(&jetons)?;
    trace!(
        jetons = %format_tokens(&jetons),
        rpn = %format_rpn(&rpn),
        "expression analysée"
    );

    // 3) Pile
    evaluer_rpn(rpn)
}

fn evaluer_rpn(rpn: Vec<Rpn>) -> Result<Nombre, ErreurEval> {
    let mut pile: Vec<Nombre> = Vec::with_capacity(rpn.len());

    for r in rpn {
        match r {
            Rpn::Num(n) => pile.push(n),

            Rpn::Op(op) if op.est_unaire() => {
                let x = pile.pop().ok_or(ErreurEval::Syntaxe)?;
                pile.push(match op {
                    OpRpn::Neg => x.oppose(),
                    _ => x,
                });
            }

            Rpn::Op(op) => {
                let b = pile.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = pile.pop().ok_or(ErreurEval::Syntaxe)?;
                let v = match op {
                    OpRpn::Add => a.additionner(b)?,
                    OpRpn::Sub => a.soustraire(b)?,
                    OpRpn::Mul => a.multiplier(b)?,
                    _ => a.diviser(b)?,
                };
                pile.push(v);
            }
        }
    }

    match (pile.pop(), pile.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurEval::Syntaxe),
    }
}

/// Évalue puis rend le texte du résultat (ré-injectable comme opérande).
/// Un entier trop long pour être écrit est un échec, comme un littéral trop long.
pub fn eval_texte(expr_str: &str) -> Result<String, ErreurEval> {
    let valeur = eval_expression(expr_str)?;
    let texte = valeur.to_string();

    if let Nombre::Entier(_) = valeur {
        let chiffres = texte.trim_start_matches('-').len();
        if chiffres > MAX_CHIFFRES_ENTIER {
            return Err(ErreurEval::TropDeChiffres(MAX_CHIFFRES_ENTIER));
        }
    }

    Ok(texte)
}
