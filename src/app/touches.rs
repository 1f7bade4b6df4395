//! src/app/touches.rs
//!
//! Pavé fixe de 20 touches + table statique touche -> action.
//!
//! Contrats :
//! - Ensemble fermé : aucune touche n’est créée à l’exécution.
//! - Chaque libellé est unique (recherche inverse sans ambiguïté).

/// Ce que déclenche une touche côté contrôleur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Ajoute ce texte tel quel à l’expression.
    Litteral(&'static str),
    Ans,
    Clear,
    Egal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre0,
    Chiffre1,
    Chiffre2,
    Chiffre3,
    Chiffre4,
    Chiffre5,
    Chiffre6,
    Chiffre7,
    Chiffre8,
    Chiffre9,
    Plus,
    Moins,
    Fois,
    Divise,
    ParOuvrante,
    ParFermante,
    Point,
    Ans,
    Egal,
    Clear,
}

/// Disposition du pavé (ligne par ligne), identique à la calculatrice d’origine.
pub const PAVE: [[Touche; 5]; 4] = [
    [
        Touche::Chiffre7,
        Touche::Chiffre8,
        Touche::Chiffre9,
        Touche::Fois,
        Touche::Divise,
    ],
    [
        Touche::Chiffre4,
        Touche::Chiffre5,
        Touche::Chiffre6,
        Touche::Plus,
        Touche::Moins,
    ],
    [
        Touche::Chiffre1,
        Touche::Chiffre2,
        Touche::Chiffre3,
        Touche::ParOuvrante,
        Touche::ParFermante,
    ],
    [
        Touche::Chiffre0,
        Touche::Point,
        Touche::Ans,
        Touche::Egal,
        Touche::Clear,
    ],
];

impl Touche {
    pub const TOUTES: [Touche; 20] = [
        Touche::Chiffre0,
        Touche::Chiffre1,
        Touche::Chiffre2,
        Touche::Chiffre3,
        Touche::Chiffre4,
        Touche::Chiffre5,
        Touche::Chiffre6,
        Touche::Chiffre7,
        Touche::Chiffre8,
        Touche::Chiffre9,
        Touche::Plus,
        Touche::Moins,
        Touche::Fois,
        Touche::Divise,
        Touche::ParOuvrante,
        Touche::ParFermante,
        Touche::Point,
        Touche::Ans,
        Touche::Egal,
        Touche::Clear,
    ];

    /// Texte affiché sur le bouton.
    pub fn libelle(self) -> &'static str {
        match self.action() {
            Action::Litteral(tok) => tok,
            Action::Ans => "ANS",
            Action::Egal => "=",
            Action::Clear => "C",
        }
    }

    pub fn action(self) -> Action {
        use Touche::*;

        match self {
            Chiffre0 => Action::Litteral("0"),
            Chiffre1 => Action::Litteral("1"),
            Chiffre2 => Action::Litteral("2"),
            Chiffre3 => Action::Litteral("3"),
            Chiffre4 => Action::Litteral("4"),
            Chiffre5 => Action::Litteral("5"),
            Chiffre6 => Action::Litteral("6"),
            Chiffre7 => Action::Litteral("7"),
            Chiffre8 => Action::Litteral("8"),
            Chiffre9 => Action::Litteral("9"),
            Plus => Action::Litteral("+"),
            Moins => Action::Litteral("-"),
            Fois => Action::Litteral("*"),
            Divise => Action::Litteral("/"),
            ParOuvrante => Action::Litteral("("),
            ParFermante => Action::Litteral(")"),
            Point => Action::Litteral("."),
            Ans => Action::Ans,
            Egal => Action::Egal,
            Clear => Action::Clear,
        }
    }

    /// Jeton ajouté à l’expression (None pour ANS, = et C).
    pub fn jeton(self) -> Option<&'static str> {
        match self.action() {
            Action::Litteral(tok) => Some(tok),
            _ => None,
        }
    }

    pub fn depuis_libelle(libelle: &str) -> Option<Touche> {
        Self::TOUTES.into_iter().find(|t| t.libelle() == libelle)
    }

    /// Saisie clavier : un caractère tapé -> touche équivalente.
    /// '=' vaut la touche "=" ; les autres contrôles (ANS, C) n’ont pas de caractère.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '=' => Some(Touche::Egal),
            _ => {
                let mut buf = [0u8; 4];
                let s: &str = c.encode_utf8(&mut buf);
                Self::TOUTES
                    .into_iter()
                    .find(|t| t.jeton() == Some(s))
            }
        }
    }
}
