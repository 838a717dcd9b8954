//! src/noyau/saisie.rs
//!
//! Machine de saisie (sans vue).
//!
//! Trois champs texte, rien d’autre :
//! - `expression_courante` : l’opérande en cours de frappe (ou le dernier résultat après "=")
//! - `expression_totale`   : opérandes + opérateurs déjà résolus ("5+", "12*")
//! - `operateur`           : l’opérateur en attente, s’il y en a un
//!
//! Contrats :
//! - Une seule entrée : `appuyer(Touche)`, qui rend le nouveau texte d’affichage
//!   (ou `None` si l’affichage ne change pas).
//! - Aucune validation à la frappe : les erreurs n’apparaissent qu’à l’évaluation.
//! - Après "C", après "=" réussi, après toute erreur : les trois champs repartent à vide
//!   ("=" réussi garde seulement le résultat comme opérande courante).
//! - Opérateurs enchaînés : évaluation partielle de gauche à droite ("2+3*" => "5*").

use tracing::{debug, warn};

use super::eval::eval_texte;

/// Texte affiché pour tout échec d’évaluation.
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Une touche du pavé.
///
/// `Chiffre(d)` n’a de sens que pour `d <= 9` ; `depuis_libelle` ne construit rien d’autre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,
    Operateur(Operateur),
    Egal,
    Efface,
}

impl Touche {
    pub fn depuis_libelle(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Touche::Chiffre(d as u8)),
            '.' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            'C' => Some(Touche::Efface),
            _ => Operateur::depuis_symbole(c).map(Touche::Operateur),
        }
    }

    pub fn libelle(self) -> char {
        match self {
            Touche::Chiffre(d) => {
                debug_assert!(d <= 9, "chiffre hors pavé: {d}");
                char::from(b'0' + d.min(9))
            }
            Touche::Point => '.',
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => '=',
            Touche::Efface => 'C',
        }
    }
}

/// État conceptuel de la machine (journal + tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Vide,
    SaisieOperande,
    OperateurEnAttente,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    expression_courante: String,
    expression_totale: String,
    operateur: Option<Operateur>,
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expression_courante(&self) -> &str {
        &self.expression_courante
    }

    pub fn expression_totale(&self) -> &str {
        &self.expression_totale
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn phase(&self) -> Phase {
        if !self.expression_courante.is_empty() {
            Phase::SaisieOperande
        } else if self.operateur.is_some() {
            Phase::OperateurEnAttente
        } else {
            Phase::Vide
        }
    }

    /* ------------------------ Dispatch unique ------------------------ */

    /// Applique une touche. Retourne le nouveau texte d’affichage,
    /// ou `None` si l’affichage reste tel quel.
    pub fn appuyer(&mut self, touche: Touche) -> Option<String> {
        let avant = self.phase();

        let affichage = match touche {
            Touche::Efface => {
                self.reset();
                Some(String::new())
            }
            Touche::Egal => Some(self.egal()),
            Touche::Operateur(op) => self.operateur_presse(op),
            Touche::Chiffre(_) | Touche::Point => {
                self.expression_courante.push(touche.libelle());
                Some(self.expression_courante.clone())
            }
        };

        debug!(
            touche = %touche.libelle(),
            ?avant,
            apres = ?self.phase(),
            totale = %self.expression_totale,
            courante = %self.expression_courante,
            "touche"
        );

        affichage
    }

    /* ------------------------ Transitions ------------------------ */

    fn reset(&mut self) {
        self.expression_courante.clear();
        self.expression_totale.clear();
        self.operateur = None;
    }

    fn egal(&mut self) -> String {
        let expr = format!("{}{}", self.expression_totale, self.expression_courante);
        match eval_texte(&expr) {
            Ok(resultat) => {
                self.expression_courante = resultat.clone();
                self.expression_totale.clear();
                self.operateur = None;
                resultat
            }
            Err(e) => {
                self.reset();
                warn!(expression = %expr, "Calculation error: {e}");
                TEXTE_ERREUR.to_string()
            }
        }
    }

    fn operateur_presse(&mut self, op: Operateur) -> Option<String> {
        if !self.expression_courante.is_empty() {
            if !self.expression_totale.is_empty() && self.operateur.is_some() {
                // opérateur déjà en attente : on réduit la partie gauche
                let expr = format!("{}{}", self.expression_totale, self.expression_courante);
                match eval_texte(&expr) {
                    Ok(partiel) => self.expression_totale = partiel,
                    Err(e) => {
                        self.reset();
                        warn!(expression = %expr, "Partial calculation error: {e}");
                        return Some(TEXTE_ERREUR.to_string());
                    }
                }
            } else {
                self.expression_totale.push_str(&self.expression_courante);
            }

            self.expression_totale.push(op.symbole());
            self.operateur = Some(op);
            self.expression_courante.clear();
            return Some(op.symbole().to_string());
        }

        // pas d’opérande : on remplace l’opérateur en attente
        if !self.expression_totale.is_empty() && self.operateur.is_some() {
            self.expression_totale.pop();
            self.expression_totale.push(op.symbole());
            self.operateur = Some(op);
            return Some(op.symbole().to_string());
        }

        None
    }
}
