//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine de saisie et l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariant clé : affichage "Error" => les trois champs sont vides

use std::time::{Duration, Instant};

use super::eval::eval_texte;
use super::{ErreurEval, Saisie, Touche, TEXTE_ERREUR};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Générateurs ------------------------ */

const LIBELLES: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '=', 'C',
];

fn gen_touche(rng: &mut Rng) -> Touche {
    let c = LIBELLES[rng.pick(LIBELLES.len() as u32) as usize];
    Touche::depuis_libelle(c).unwrap_or(Touche::Efface)
}

/// Expression “presque” valide : nombres courts, opérateurs, parfois une faute.
fn gen_expr(rng: &mut Rng, termes: usize) -> String {
    let mut s = String::new();
    for k in 0..termes {
        if k > 0 {
            s.push(['+', '-', '*', '/'][rng.pick(4) as usize]);
        }
        match rng.pick(6) {
            0 => s.push('0'),
            1 => s.push_str(&format!("{}.{}", rng.pick(100), rng.pick(10))),
            2 => s.push_str(&format!(".{}", rng.pick(1000))),
            3 => s.push_str("1.2.3"), // faute volontaire
            _ => s.push_str(&format!("{}", 1 + rng.pick(999))),
        }
    }
    if rng.pick(5) == 0 {
        s.push('+'); // opérateur final
    }
    s
}

fn is_erreur_attendue(e: &ErreurEval) -> bool {
    // Liste blanche : erreurs *normales* pour ce générateur.
    matches!(
        e,
        ErreurEval::Syntaxe | ErreurEval::DivisionParZero | ErreurEval::ZerosEnTete(_)
    )
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_touches_invariant_erreur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut vu_erreur = 0usize;
    let mut vu_resultat = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut s = Saisie::new();
        for _ in 0..24 {
            let t = gen_touche(&mut rng);
            if let Some(affichage) = s.appuyer(t) {
                if affichage == TEXTE_ERREUR {
                    assert_eq!(s, Saisie::new(), "état non remis à zéro après erreur");
                    vu_erreur += 1;
                } else if t == Touche::Egal {
                    assert_eq!(s.expression_courante(), affichage);
                    assert_eq!(s.expression_totale(), "");
                    vu_resultat += 1;
                }
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vu_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(vu_resultat > 0, "aucun résultat vu");
}

#[test]
fn fuzz_safe_expressions_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let na = 1 + rng_a.pick(6) as usize;
        let nb = 1 + rng_b.pick(6) as usize;
        let ea = gen_expr(&mut rng_a, na);
        let eb = gen_expr(&mut rng_b, nb);
        assert_eq!(ea, eb);

        let ra = eval_texte(&ea);
        assert_eq!(ra, eval_texte(&eb), "expr={ea:?}");

        match ra {
            Ok(texte) => {
                // un résultat fini se relit à l’identique
                if texte != "inf" && texte != "-inf" && texte != "nan" {
                    assert_eq!(eval_texte(&texte).as_deref(), Ok(texte.as_str()));
                }
                seen_ok += 1;
            }
            Err(e) => {
                assert!(is_erreur_attendue(&e), "erreur non attendue: expr={ea:?} err={e}");
                seen_err += 1;
            }
        }
    }

    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_longue_somme_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["1"; 5000].join("+");
    budget(t0, max);

    assert_eq!(eval_texte(&expr).as_deref(), Ok("5000"));
}
