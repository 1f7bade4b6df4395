// src/noyau/erreur.rs
//
// Échecs typés du noyau.
// L’utilisateur ne voit jamais ces variantes : le contrôleur les écrase toutes
// en "ERROR". Elles servent aux logs et aux tests.

/// Cause d’échec d’une évaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurEval {
    /// Texte arithmétique mal formé (parenthèses, opérateurs, caractères...).
    #[error("syntaxe invalide : {0}")]
    Syntaxe(String),

    /// Un diviseur s’évalue à zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// Valeur non finie (hors des bornes d’un f64).
    #[error("dépassement de capacité")]
    Depassement,
}

impl ErreurEval {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn est_syntaxe(&self) -> bool {
        matches!(self, Self::Syntaxe(_))
    }
}

/// Issue d’une évaluation : texte du nombre, ou cause d’échec.
pub type ResultatEval = Result<String, ErreurEval>;
