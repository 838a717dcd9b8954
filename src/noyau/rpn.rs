// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), syntaxe vérifiée au passage
//
// Règles:
// - * / avant + -, associativité à gauche
// - + / - unaires (préfixes) : liés plus fort que * /   ("5*-2" => 5 2 neg *)
// - deux valeurs qui se suivent, opérateur final, entrée vide => syntaxe invalide

use super::erreur::ErreurEval;
use super::jetons::Tok;
use super::nombre::Nombre;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpRpn {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
}

impl OpRpn {
    fn precedence(self) -> i32 {
        match self {
            OpRpn::Add | OpRpn::Sub => 1,
            OpRpn::Mul | OpRpn::Div => 2,
            OpRpn::Neg | OpRpn::Pos => 3,
        }
    }

    pub fn est_unaire(self) -> bool {
        matches!(self, OpRpn::Neg | OpRpn::Pos)
    }

    pub fn symbole(self) -> &'static str {
        match self {
            OpRpn::Add => "+",
            OpRpn::Sub => "-",
            OpRpn::Mul => "*",
            OpRpn::Div => "/",
            OpRpn::Neg => "neg",
            OpRpn::Pos => "pos",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(Nombre),
    Op(OpRpn),
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [2, 3, 4, *, +]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, ErreurEval> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<OpRpn> = Vec::new();

    // vrai au début et après chaque opérateur : la suite doit être une valeur
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(n) => {
                if !attend_valeur {
                    return Err(ErreurEval::Syntaxe);
                }
                out.push(Rpn::Num(n));
                attend_valeur = false;
            }

            // préfixe : empilé sans rien dépiler
            Tok::Minus if attend_valeur => ops.push(OpRpn::Neg),
            Tok::Plus if attend_valeur => ops.push(OpRpn::Pos),

            Tok::Star | Tok::Slash if attend_valeur => return Err(ErreurEval::Syntaxe),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let op = match tok {
                    Tok::Plus => OpRpn::Add,
                    Tok::Minus => OpRpn::Sub,
                    Tok::Star => OpRpn::Mul,
                    _ => OpRpn::Div,
                };

                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Rpn::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(op);
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurEval::Syntaxe);
    }

    while let Some(op) = ops.pop() {
        out.push(Rpn::Op(op));
    }

    Ok(out)
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Num(n) => n.to_string(),
            Rpn::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
