// src/noyau/erreur.rs
//
// Erreur unique du noyau : échec d’évaluation.
// Les variantes gardent la cause exacte (pour le journal), mais côté UI
// tout se réduit à l’affichage "Error".

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nom inconnu: '{0}'")]
    NomInconnu(String),

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("zéros en tête interdits dans un entier décimal: '{0}'")]
    ZerosEnTete(String),

    #[error("syntaxe invalide")]
    Syntaxe,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("entier de plus de {0} chiffres")]
    TropDeChiffres(usize),

    #[error("entier trop grand pour un flottant")]
    EntierTropGrand,

    #[error("quotient entier trop grand pour un flottant")]
    QuotientTropGrand,
}
