//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - arbres bornés (profondeur 4, feuilles < 100) : aucun dépassement possible
//! - valeur de référence calculée directement sur l’arbre généré
//! - invariant clé : aucune entrée, même absurde, ne fait paniquer le noyau
//!   (ni ne déborde la pile, quelle que soit sa longueur)

use proptest::prelude::*;

use super::format::format_nombre;
use super::{eval_expression, ErreurEval};

/* ------------------------ Arbres générés ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Feuille(u32),
    Groupe(Box<Arbre>),
    Noeud(char, Box<Arbre>, Box<Arbre>),
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0u32..100).prop_map(Arbre::Feuille);
    feuille.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            1 => inner.clone().prop_map(|a| Arbre::Groupe(Box::new(a))),
            4 => (
                prop::sample::select(vec!['+', '-', '*', '/']),
                inner.clone(),
                inner,
            )
                .prop_map(|(op, a, b)| Arbre::Noeud(op, Box::new(a), Box::new(b))),
        ]
    })
}

fn prec(op: char) -> u8 {
    if op == '+' || op == '-' {
        1
    } else {
        2
    }
}

/// Texte minimal : parenthèses seulement quand la précédence l’exige
/// (plus celles des Groupe générés).
fn rendu(a: &Arbre) -> String {
    match a {
        Arbre::Feuille(n) => n.to_string(),
        Arbre::Groupe(x) => format!("({})", rendu(x)),
        Arbre::Noeud(op, g, d) => {
            let pg = match g.as_ref() {
                Arbre::Noeud(o, ..) if prec(*o) < prec(*op) => format!("({})", rendu(g)),
                _ => rendu(g),
            };
            let pd = match d.as_ref() {
                Arbre::Noeud(o, ..) if prec(*o) <= prec(*op) => format!("({})", rendu(d)),
                _ => rendu(d),
            };
            format!("{pg}{op}{pd}")
        }
    }
}

/// Référence : None si une division par zéro apparaît.
fn valeur(a: &Arbre) -> Option<f64> {
    match a {
        Arbre::Feuille(n) => Some(f64::from(*n)),
        Arbre::Groupe(x) => valeur(x),
        Arbre::Noeud(op, g, d) => {
            let x = valeur(g)?;
            let y = valeur(d)?;
            Some(match op {
                '+' => x + y,
                '-' => x - y,
                '*' => x * y,
                _ => {
                    if y == 0.0 {
                        return None;
                    }
                    x / y
                }
            })
        }
    }
}

/* ------------------------ Entrées démesurées ------------------------ */

#[test]
fn longue_somme_refusee_sans_crash() {
    let s = format!("{}1", "1+".repeat(200_000));
    assert_eq!(eval_expression(&s), Err(ErreurEval::Depassement));
}

#[test]
fn imbrication_profonde_refusee_sans_crash() {
    let n = 100_000;
    let s = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_expression(&s), Err(ErreurEval::Depassement));
}

#[test]
fn signes_en_cascade_refuses_sans_crash() {
    let s = format!("{}1{}", "(-".repeat(50_000), ")".repeat(50_000));
    assert!(eval_expression(&s).is_err());
}

proptest! {
    #[test]
    fn fuzz_precedence_conforme(a in arbre()) {
        let s = rendu(&a);
        match valeur(&a) {
            Some(v) => {
                prop_assert_eq!(eval_expression(&s), Ok(format_nombre(v)), "s={}", s);
            }
            None => {
                prop_assert_eq!(eval_expression(&s), Err(ErreurEval::DivisionParZero), "s={}", s);
            }
        }
    }

    #[test]
    fn fuzz_parenthese_non_fermee(a in arbre()) {
        let s = format!("({}", rendu(&a));
        prop_assert!(eval_expression(&s).unwrap_err().est_syntaxe(), "s={}", s);
    }

    #[test]
    fn fuzz_parenthese_en_trop(a in arbre()) {
        let s = format!("{})", rendu(&a));
        prop_assert!(eval_expression(&s).unwrap_err().est_syntaxe(), "s={}", s);
    }

    #[test]
    fn fuzz_operateur_final(a in arbre(), op in prop::sample::select(vec!['+', '-', '*', '/'])) {
        let s = format!("{}{op}", rendu(&a));
        prop_assert!(eval_expression(&s).unwrap_err().est_syntaxe(), "s={}", s);
    }

    #[test]
    fn fuzz_diviseur_nul(a in arbre()) {
        let s = format!("({})/(0)", rendu(&a));
        prop_assert_eq!(eval_expression(&s), Err(ErreurEval::DivisionParZero), "s={}", s);
    }

    #[test]
    fn fuzz_entree_quelconque_sans_panique(s in "[0-9+*/(). a-zE=-]{0,40}") {
        // résultat quelconque, mais un succès est toujours relisible
        if let Ok(txt) = eval_expression(&s) {
            prop_assert!(eval_expression(&txt).is_ok(), "s={} txt={}", s, txt);
        }
    }

    #[test]
    fn fuzz_deterministe(s in "[0-9+*/().-]{0,24}") {
        prop_assert_eq!(eval_expression(&s), eval_expression(&s));
    }
}
