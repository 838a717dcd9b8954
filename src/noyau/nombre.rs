// src/noyau/nombre.rs
//
// Valeur numérique du noyau.
// - Entier   : exact (big int), reste exact pour + - *
// - Flottant : double IEEE-754
//
// Règles (celles d’une calculatrice “à la Python”) :
// - Entier op Entier (+ - *)  => Entier
// - `/` est une division vraie => toujours Flottant (arrondi correct via rationnel)
// - mélange Entier/Flottant    => l’entier est converti en double (erreur s’il déborde)
// - débordement en double      => inf (pas d’erreur), inf - inf => nan
// - division par un zéro exact => erreur

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurEval;

/// Plafond de chiffres d’un entier écrit en texte (littéral lu ou résultat affiché).
pub const MAX_CHIFFRES_ENTIER: usize = 4300;

#[derive(Clone, Debug, PartialEq)]
pub enum Nombre {
    Entier(BigInt),
    Flottant(f64),
}

impl Nombre {
    /// Conversion vers double ; un entier hors de portée d’un f64 est refusé.
    pub fn en_flottant(&self) -> Result<f64, ErreurEval> {
        match self {
            Nombre::Entier(n) => n
                .to_f64()
                .filter(|v| v.is_finite())
                .ok_or(ErreurEval::EntierTropGrand),
            Nombre::Flottant(x) => Ok(*x),
        }
    }

    pub fn additionner(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a + b)),
            (a, b) => Ok(Nombre::Flottant(a.en_flottant()? + b.en_flottant()?)),
        }
    }

    pub fn soustraire(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a - b)),
            (a, b) => Ok(Nombre::Flottant(a.en_flottant()? - b.en_flottant()?)),
        }
    }

    pub fn multiplier(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => Ok(Nombre::Entier(a * b)),
            (a, b) => Ok(Nombre::Flottant(a.en_flottant()? * b.en_flottant()?)),
        }
    }

    pub fn diviser(self, autre: Nombre) -> Result<Nombre, ErreurEval> {
        match (self, autre) {
            (Nombre::Entier(a), Nombre::Entier(b)) => {
                if b.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                // a/b exact puis un seul arrondi vers f64
                BigRational::new(a, b)
                    .to_f64()
                    .filter(|v| v.is_finite())
                    .map(Nombre::Flottant)
                    .ok_or(ErreurEval::QuotientTropGrand)
            }
            (a, b) => {
                let x = a.en_flottant()?;
                let y = b.en_flottant()?;
                if y == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(Nombre::Flottant(x / y))
            }
        }
    }

    pub fn oppose(self) -> Nombre {
        match self {
            Nombre::Entier(n) => Nombre::Entier(-n),
            Nombre::Flottant(x) => Nombre::Flottant(-x),
        }
    }
}
