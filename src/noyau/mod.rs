//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - erreur.rs  : ErreurEval (échec d’évaluation, causes typées)
//! - nombre.rs  : Entier exact / Flottant + les quatre opérations
//! - format.rs  : texte d’un nombre (ré-injectable comme opérande)
//! - jetons.rs  : tokenisation (littéraux décimaux + - * /)
//! - rpn.rs     : shunting-yard (précédence, unaires)
//! - eval.rs    : pipeline complet
//! - saisie.rs  : machine à états des touches (C, =, opérateurs, chiffres)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod nombre;
pub mod rpn;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use saisie::{Operateur, Phase, Saisie, Touche, TEXTE_ERREUR};
