//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (contrôle de syntaxe) -> Expr -> eval f64 -> texte
//!
//! Fonction pure : aucun état, appelable depuis n’importe quel thread.

use tracing::trace;

use super::erreur::{ErreurEval, ResultatEval};
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue une expression arithmétique et retourne le texte du résultat.
///
/// Seuls les nombres décimaux, `+ - * /` et les parenthèses sont compris.
pub fn eval_expression(expr_str: &str) -> ResultatEval {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEval::syntaxe("Entrée vide"));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(
        jetons = %format_tokens(&jetons),
        rpn = %format_tokens(&rpn),
        "expression découpée"
    );

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;

    // 4) Valeur + texte
    let v = expr.eval()?;
    Ok(format_nombre(v))
}
