//! Propriétés (proptest) : invariants de la saisie, sur des séquences arbitraires.

use proptest::prelude::*;

use super::{Saisie, Touche};

fn touche_saisie() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'])
}

fn touche_quelconque() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '*', '/', '=', 'C',
    ])
}

fn rejouer(s: &mut Saisie, touches: &[char]) -> Option<String> {
    let mut dernier = None;
    for &c in touches {
        if let Some(t) = Touche::depuis_libelle(c) {
            if let Some(texte) = s.appuyer(t) {
                dernier = Some(texte);
            }
        }
    }
    dernier
}

proptest! {
    #[test]
    fn prop_chiffres_concatenes(touches in prop::collection::vec(touche_saisie(), 1..40)) {
        let mut s = Saisie::new();
        for (i, &c) in touches.iter().enumerate() {
            let affichage = s.appuyer(Touche::depuis_libelle(c).unwrap());
            let attendu: String = touches[..=i].iter().collect();
            prop_assert_eq!(affichage.as_deref(), Some(attendu.as_str()));
            prop_assert_eq!(s.expression_courante(), attendu.as_str());
        }
    }

    #[test]
    fn prop_efface_remet_a_vide(touches in prop::collection::vec(touche_quelconque(), 0..40)) {
        let mut s = Saisie::new();
        rejouer(&mut s, &touches);
        prop_assert_eq!(s.appuyer(Touche::Efface), Some(String::new()));
        prop_assert_eq!(&s, &Saisie::new());
    }

    #[test]
    fn prop_efface_idempotent(touches in prop::collection::vec(touche_quelconque(), 0..40)) {
        let mut une = Saisie::new();
        rejouer(&mut une, &touches);
        let mut deux = une.clone();

        une.appuyer(Touche::Efface);
        deux.appuyer(Touche::Efface);
        deux.appuyer(Touche::Efface);
        prop_assert_eq!(une, deux);
    }

    #[test]
    fn prop_jamais_de_panique(touches in prop::collection::vec(touche_quelconque(), 0..80)) {
        let mut s = Saisie::new();
        rejouer(&mut s, &touches);
    }
}
