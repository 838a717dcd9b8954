// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurEval;
use super::nombre::{Nombre, MAX_CHIFFRES_ENTIER};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(Nombre),

    Plus,
    Minus,
    Star,
    Slash,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12), sans zéros en tête sauf s’ils sont tous nuls ("00")
/// - décimaux (ex: 1.5, 1., .5) avec exposant optionnel (ex: 1e+16, 2.5e-07)
/// - opérateurs + - * /
/// - espaces ignorés
///
/// Les lettres (ex: "inf", "nan" réinjectés comme opérande) sont refusées.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        let op = match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(op) = op {
            out.push(op);
            i += 1;
            continue;
        }

        // Identifiants : aucun nom n’est défini
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            return Err(ErreurEval::NomInconnu(chars[start..i].iter().collect()));
        }

        // Nombre : chiffre, ou '.' suivi d’un chiffre
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit());
        if debut_nombre {
            let (nombre, suite) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(nombre));
            i = suite;
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `start`.
/// Retourne le nombre et l’indice du premier caractère non consommé.
fn lire_nombre(chars: &[char], start: usize) -> Result<(Nombre, usize), ErreurEval> {
    let mut i = start;
    let mut flottant = false;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }

    // partie fractionnaire (éventuellement vide : "5.")
    if i < chars.len() && chars[i] == '.' {
        flottant = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    // exposant : e / E, signe optionnel, au moins un chiffre
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            flottant = true;
            i = j;
        } else {
            // "1e", "1e+" : littéral mal formé
            let texte: String = chars[start..j].iter().collect();
            return Err(ErreurEval::NombreInvalide(texte));
        }
    }

    let texte: String = chars[start..i].iter().collect();

    // un littéral collé à une lettre ("1x") est mal formé
    if i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '_') {
        return Err(ErreurEval::NombreInvalide(texte));
    }

    if flottant {
        let x: f64 = texte
            .parse()
            .map_err(|_| ErreurEval::NombreInvalide(texte.clone()))?;
        return Ok((Nombre::Flottant(x), i));
    }

    if texte.len() > 1 && texte.starts_with('0') && texte.chars().any(|c| c != '0') {
        return Err(ErreurEval::ZerosEnTete(texte));
    }

    if texte.len() > MAX_CHIFFRES_ENTIER {
        return Err(ErreurEval::TropDeChiffres(MAX_CHIFFRES_ENTIER));
    }

    let n = BigInt::parse_bytes(texte.as_bytes(), 10)
        .ok_or_else(|| ErreurEval::NombreInvalide(texte.clone()))?;
    Ok((Nombre::Entier(n), i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
