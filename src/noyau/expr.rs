// src/noyau/expr.rs
//
// AST fermé (quatre opérations, nombres, parenthèses).
// - Nombre : littéral décimal (f64)
// - BinOp  : opération binaire gauche/droite
// - Groupe : parenthèses telles que tapées
//
// IMPORTANT (SAFE):
// - Aucun identifiant, aucune fonction : l’arbre ne peut rien exécuter d’autre.
// - eval() refuse toute division par zéro et toute valeur non finie.

use std::fmt;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    BinOp(Op, Box<Expr>, Box<Expr>),
    Groupe(Box<Expr>),
}

impl Expr {
    pub fn bin(op: Op, a: Expr, b: Expr) -> Expr {
        Expr::BinOp(op, Box::new(a), Box::new(b))
    }

    /// Évaluation récursive en double précision.
    pub fn eval(&self) -> Result<f64, ErreurEval> {
        let v = match self {
            Expr::Nombre(v) => *v,
            Expr::Groupe(x) => x.eval()?,
            Expr::BinOp(op, a, b) => {
                // Les deux côtés sont toujours évalués : une division par zéro,
                // où qu’elle soit, l’emporte sur un dépassement.
                let ga = a.eval();
                let dr = b.eval();

                // -0.0 == 0.0
                if *op == Op::Div && matches!(dr, Ok(d) if d == 0.0) {
                    return Err(ErreurEval::DivisionParZero);
                }

                let (a, b) = match (ga, dr) {
                    (Ok(a), Ok(b)) => (a, b),
                    (Err(ErreurEval::DivisionParZero), _) | (_, Err(ErreurEval::DivisionParZero)) => {
                        return Err(ErreurEval::DivisionParZero);
                    }
                    (Err(e), _) | (_, Err(e)) => return Err(e),
                };

                match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => a / b,
                }
            }
        };

        if !v.is_finite() {
            return Err(ErreurEval::Depassement);
        }
        Ok(v)
    }
}

/// Affichage compact (logs) : parenthèses seulement là où elles ont été tapées.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Nombre(v) => write!(f, "{v}"),
            Expr::Groupe(x) => write!(f, "({x})"),
            Expr::BinOp(op, a, b) => write!(f, "{a} {} {b}", op.symbole()),
        }
    }
}
