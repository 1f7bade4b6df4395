//! Noyau arithmétique (sans UI, sans état)
//!
//! Organisation interne :
//! - erreur.rs   : échecs typés (syntaxe / division par zéro / dépassement)
//! - jetons.rs   : tokenisation (nombres décimaux, + - * /, parenthèses)
//! - rpn.rs      : shunting-yard + contrôle de syntaxe + construction Expr
//! - expr.rs     : AST fermé (Nombre | BinOp | Groupe) + évaluation f64
//! - format.rs   : texte du résultat (relisible par tokenize)
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEval, ResultatEval};
pub use eval::eval_expression;
