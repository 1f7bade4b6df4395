// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en vérifiant la syntaxe au passage
// - Puis reconstruire Expr
//
// Règles:
// - '*' et '/' lient plus fort que '+' et '-' ; associativité à gauche partout.
// - Signe unaire ('+' ou '-') : accepté seulement en tête ou juste après '(' ;
//   on injecte 0 : "-x" => "0 x -".
// - Deux opérateurs consécutifs, opérateur final, "()" vide, multiplication
//   implicite ("2(3)", "(2)3") : erreur de syntaxe.
//
// Garde-fous (anti-débordement de pile) : eval() et drop() de l’AST sont récursifs,
// donc la taille de l’entrée et la profondeur des parenthèses sont bornées ici.
//
// NOTE:
// - RPar est recopié dans la RPN comme marqueur postfixé "fin de groupe",
//   ce qui permet à from_rpn de reconstruire Expr::Groupe.

use super::erreur::ErreurEval;
use super::expr::{Expr, Op};
use super::jetons::Tok;

/// Nombre maximal de jetons (la profondeur de l’AST ne peut pas le dépasser).
pub const MAX_JETONS: usize = 1024;

/// Imbrication maximale de parenthèses.
pub const MAX_PROFONDEUR: usize = 128;

/// Ce qui précède le jeton courant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precedent {
    Debut,
    Valeur,
    Operateur,
    ParOuvrante,
}

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Dépile les opérateurs de précédence >= celle de `tok` (associativité à gauche).
fn depile_operateurs(tok: &Tok, ops: &mut Vec<Tok>, out: &mut Vec<Tok>) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || precedence(top) < precedence(tok) {
            break;
        }
        if let Some(op) = ops.pop() {
            out.push(op);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.len() > MAX_JETONS {
        return Err(ErreurEval::Depassement);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    let mut prev = Precedent::Debut;
    let mut profondeur: usize = 0;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if prev == Precedent::Valeur {
                    return Err(ErreurEval::syntaxe("nombre inattendu après une valeur"));
                }
                out.push(tok);
                prev = Precedent::Valeur;
            }

            Tok::LPar => {
                if prev == Precedent::Valeur {
                    return Err(ErreurEval::syntaxe("multiplication implicite non supportée"));
                }
                profondeur += 1;
                if profondeur > MAX_PROFONDEUR {
                    return Err(ErreurEval::Depassement);
                }
                ops.push(tok);
                prev = Precedent::ParOuvrante;
            }

            Tok::RPar => {
                match prev {
                    Precedent::ParOuvrante => {
                        return Err(ErreurEval::syntaxe("parenthèses vides"));
                    }
                    Precedent::Operateur | Precedent::Debut => {
                        return Err(ErreurEval::syntaxe("opérande manquant avant ')'"));
                    }
                    Precedent::Valeur => {}
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::syntaxe("')' sans '(' correspondante"));
                }
                profondeur -= 1;

                out.push(Tok::RPar);
                prev = Precedent::Valeur;
            }

            Tok::Star | Tok::Slash => {
                if prev != Precedent::Valeur {
                    return Err(ErreurEval::syntaxe("opérande manquant avant l’opérateur"));
                }
                depile_operateurs(&tok, &mut ops, &mut out);
                ops.push(tok);
                prev = Precedent::Operateur;
            }

            Tok::Plus | Tok::Minus => match prev {
                Precedent::Valeur => {
                    depile_operateurs(&tok, &mut ops, &mut out);
                    ops.push(tok);
                    prev = Precedent::Operateur;
                }
                Precedent::Debut | Precedent::ParOuvrante => {
                    // signe unaire : rien à dépiler (pile vide ou '(' au sommet)
                    out.push(Tok::Num(0.0));
                    ops.push(tok);
                    prev = Precedent::Operateur;
                }
                Precedent::Operateur => {
                    return Err(ErreurEval::syntaxe("opérateurs consécutifs"));
                }
            },
        }
    }

    match prev {
        Precedent::Debut => return Err(ErreurEval::syntaxe("expression vide")),
        Precedent::Operateur | Precedent::ParOuvrante => {
            return Err(ErreurEval::syntaxe("expression incomplète"));
        }
        Precedent::Valeur => {}
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(Expr::Nombre(v)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;

                let op = match tok {
                    Tok::Plus => Op::Add,
                    Tok::Minus => Op::Sub,
                    Tok::Star => Op::Mul,
                    _ => Op::Div,
                };
                st.push(Expr::bin(op, a, b));
            }

            Tok::RPar => {
                let x = st.pop().ok_or_else(|| ErreurEval::syntaxe("groupe vide"))?;
                st.push(Expr::Groupe(Box::new(x)));
            }

            Tok::LPar => return Err(ErreurEval::syntaxe("parenthèse inattendue en RPN")),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurEval::syntaxe("expression invalide")),
    }
}
