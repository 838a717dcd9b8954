//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier la machine de saisie (noyau) au texte affiché.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Saisie::appuyer`.
//! - L’affichage ne change que si la saisie rend un nouveau texte.

use crate::noyau::{Saisie, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- machine de saisie (les trois champs texte) ---
    pub saisie: Saisie,

    // --- sortie ---
    pub affichage: String,
}

impl AppCalc {
    /// Une touche pressée : dispatch unique, affichage rafraîchi tout de suite.
    pub fn touche(&mut self, touche: Touche) {
        if let Some(texte) = self.saisie.appuyer(touche) {
            self.affichage = texte;
        }
    }
}
