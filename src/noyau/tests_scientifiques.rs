//! Tests scientifiques (campagne) : précédence, associativité, groupes, taxonomie d’erreurs.
//!
//! Les valeurs attendues sont celles de l’arithmétique double précision usuelle,
//! écrites à la main (pas recalculées par le noyau).

use pretty_assertions::assert_eq;

use super::{eval_expression, ErreurEval};

fn assert_exact_eq(expr: &str, attendu: &str) {
    let got = eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    assert_eq!(got, attendu, "expr={expr:?}");
}

fn assert_syntaxe(expr: &str) {
    match eval_expression(expr) {
        Err(ErreurEval::Syntaxe(_)) => {}
        autre => panic!("expr={expr:?} : attendu Syntaxe, obtenu {autre:?}"),
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_mul_div_avant_add_sub() {
    assert_exact_eq("2+3*4", "14");
    assert_exact_eq("2*3+4", "10");
    assert_exact_eq("10-6/2", "7");
    assert_exact_eq("1+2*3-4/2", "5");
}

/* ------------------------ Associativité à gauche ------------------------ */

#[test]
fn sci_associativite_gauche() {
    assert_exact_eq("8-3-2", "3");
    assert_exact_eq("100/10/5", "2");
    assert_exact_eq("2/4*8", "4");
    assert_exact_eq("1-2+3", "2");
}

/* ------------------------ Groupes ------------------------ */

#[test]
fn sci_parentheses_prioritaires() {
    assert_exact_eq("(2+3)*4", "20");
    assert_exact_eq("8-(3-2)", "7");
    assert_exact_eq("100/(10/5)", "50");
    assert_exact_eq("((((7))))", "7");
    assert_exact_eq("(1+(2*(3+4)))", "15");
}

#[test]
fn sci_signe_en_tete_de_groupe() {
    assert_exact_eq("(-2)*(-3)", "6");
    assert_exact_eq("-(2+3)", "-5");
    assert_exact_eq("(+2)", "2");
}

/* ------------------------ Flottants ------------------------ */

#[test]
fn sci_double_precision() {
    assert_exact_eq("0.1+0.2", "0.30000000000000004");
    assert_exact_eq("1/3", "0.3333333333333333");
    assert_exact_eq("2.5*2", "5");
    assert_exact_eq("1-1", "0");
    assert_exact_eq("-0", "0");
}

/* ------------------------ Taxonomie d’erreurs ------------------------ */

#[test]
fn sci_erreurs_de_syntaxe() {
    for s in [
        "", "(", ")", "(1+2", "1+2)", "((1)", "1+", "1*", "3-", "()", "1+()", "1++2", "1*/2",
        "2(3)", "1.2.3", ".", "abc", "2^2",
    ] {
        assert_syntaxe(s);
    }
}

#[test]
fn sci_division_par_zero() {
    for s in ["1/0", "0/0", "1/(3-3)", "2*(4/0)+1", "1/0.0", "1/(0*5)"] {
        assert_eq!(eval_expression(s), Err(ErreurEval::DivisionParZero), "expr={s:?}");
    }

    // dividende hors des bornes d’un f64 : la division par zéro reste la cause
    let enorme = "9".repeat(400);
    for s in [
        format!("{enorme}/0"),
        format!("{enorme}/(1-1)"),
        format!("({enorme}*10)/0"),
        format!("{enorme}+1/0"),
    ] {
        assert_eq!(eval_expression(&s), Err(ErreurEval::DivisionParZero), "expr={s:?}");
    }
}

#[test]
fn sci_syntaxe_prime_sur_division() {
    // le contrôle de syntaxe a lieu avant toute évaluation
    assert_syntaxe("1/0+");
    assert_syntaxe("(1/0");
}
