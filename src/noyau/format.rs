// src/noyau/format.rs
//
// Affichage des nombres (texte ré-injectable comme opérande).
// - Entier   : chiffres décimaux
// - Flottant : chiffres les plus courts qui relisent le même double,
//              notation positionnelle si -4 < p <= 16, sinon scientifique.
//              (p = position du point : valeur = 0.d1d2... × 10^p)
//              Égalité parfaite entre deux candidats => dernier chiffre pair.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::nombre::Nombre;

/// Bornes de la notation positionnelle (voir en-tête).
const POS_MIN_EXCLU: i32 = -4;
const POS_MAX: i32 = 16;

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nombre::Entier(n) => write!(f, "{n}"),
            Nombre::Flottant(x) => f.write_str(&format_flottant(*x)),
        }
    }
}

/// Texte d’un double : "3.0", "0.1", "1e+16", "1e-05", "inf", "nan", "-0.0".
pub fn format_flottant(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let (chiffres, p) = chiffres_courts(x.abs());
    let corps = if POS_MIN_EXCLU < p && p <= POS_MAX {
        positionnel(&chiffres, p)
    } else {
        scientifique(&chiffres, p)
    };

    if x.is_sign_negative() {
        format!("-{corps}")
    } else {
        corps
    }
}

/// Chiffres significatifs minimaux + position du point.
/// `{:e}` de Rust donne la forme la plus courte qui relit le même f64,
/// mais tranche les égalités vers le haut : `departager_pair` corrige.
fn chiffres_courts(x: f64) -> (String, i32) {
    let sci = format!("{x:e}");
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exposant: i32 = exposant.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    departager_pair(x, chiffres, exposant + 1)
}

/// Si `x` est exactement à mi-chemin entre les chiffres retenus et un voisin
/// (dernier chiffre ±1) qui relit aussi `x`, on garde celui qui finit pair.
fn departager_pair(x: f64, chiffres: String, p: i32) -> (String, i32) {
    let impair = chiffres
        .bytes()
        .last()
        .is_some_and(|c| (c - b'0') % 2 == 1);
    if !impair {
        return (chiffres, p);
    }

    let (Some(exact), Some(d)) = (
        BigRational::from_float(x),
        BigInt::parse_bytes(chiffres.as_bytes(), 10),
    ) else {
        return (chiffres, p);
    };

    // valeur = d × 10^echelle
    let echelle = p - chiffres.len() as i32;
    let valeur = |m: &BigInt| -> BigRational {
        let dix = BigInt::from(10).pow(echelle.unsigned_abs());
        if echelle >= 0 {
            BigRational::from_integer(m * dix)
        } else {
            BigRational::new(m.clone(), dix)
        }
    };

    let ecart = (&exact - valeur(&d)).abs();
    let un = BigInt::one();

    for voisin in [&d - &un, &d + &un] {
        let meme_ecart = (&exact - valeur(&voisin)).abs() == ecart;
        let relu: Option<f64> = format!("{voisin}e{echelle}").parse().ok();
        if meme_ecart && relu == Some(x) {
            let texte = voisin.to_string();
            let p_voisin = texte.len() as i32 + echelle;
            let court = texte.trim_end_matches('0');
            let court = if court.is_empty() { "0" } else { court };
            return (court.to_string(), p_voisin);
        }
    }

    (chiffres, p)
}

fn positionnel(chiffres: &str, p: i32) -> String {
    let n = chiffres.len() as i32;
    if p <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-p) as usize))
    } else if p < n {
        let (ent, frac) = chiffres.split_at(p as usize);
        format!("{ent}.{frac}")
    } else {
        format!("{chiffres}{}.0", "0".repeat((p - n) as usize))
    }
}

fn scientifique(chiffres: &str, p: i32) -> String {
    let (tete, reste) = chiffres.split_at(1);
    let mantisse = if reste.is_empty() {
        tete.to_string()
    } else {
        format!("{tete}.{reste}")
    };
    let e = p - 1;
    let signe = if e < 0 { '-' } else { '+' };
    format!("{mantisse}e{signe}{:02}", e.abs())
}
