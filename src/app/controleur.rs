//! src/app/controleur.rs
//!
//! Contrôleur : touches -> expression -> noyau -> écran.
//!
//! Contrats :
//! - Toute mutation passe par l’écran (trait Affichage).
//! - `derniere_reponse` ne change QUE sur une évaluation réussie.
//! - Après "ERROR" ou un résultat, la touche suivante (littérale ou ANS)
//!   efface l’écran avant d’ajouter.
//! - Aucune erreur ne sort d’ici : tout échec devient la sentinelle.

use tracing::debug;

use super::affichage::Affichage;
use super::touches::{Action, Touche};
use crate::noyau::{eval_expression, ResultatEval};

/// Texte unique affiché pour tout échec d’évaluation.
pub const SENTINELLE_ERREUR: &str = "ERROR";

#[derive(Clone, Debug)]
pub struct Controleur<A: Affichage> {
    affichage: A,
    derniere_reponse: String,
}

impl<A: Affichage> Controleur<A> {
    /// `derniere_reponse` démarre vide, même si l’écran a déjà un texte.
    pub fn new(affichage: A) -> Self {
        Self {
            affichage,
            derniere_reponse: String::new(),
        }
    }

    pub fn affichage(&self) -> &A {
        &self.affichage
    }

    pub fn derniere_reponse(&self) -> &str {
        &self.derniere_reponse
    }

    /// Point d’entrée unique du pavé : route via la table statique des touches.
    pub fn appuyer(&mut self, touche: Touche) {
        debug!(touche = touche.libelle(), "touche");

        match touche.action() {
            Action::Litteral(_) => self.touche_litterale(touche),
            Action::Ans => self.touche_ans(),
            Action::Clear => self.touche_clear(),
            Action::Egal => self.touche_egal(),
        }
    }

    /// Touche littérale (chiffre, opérateur, parenthèse, point).
    /// Une touche de contrôle passée ici est routée vers son action.
    pub fn touche_litterale(&mut self, touche: Touche) {
        match touche.jeton() {
            Some(tok) => self.ajouter(tok),
            None => self.appuyer(touche),
        }
    }

    /// ANS : même règle d’effacement, mais on ajoute la dernière réponse.
    pub fn touche_ans(&mut self) {
        let ans = self.derniere_reponse.clone();
        self.ajouter(&ans);
    }

    /// C : efface l’écran (et le drapeau "réponse affichée").
    pub fn touche_clear(&mut self) {
        self.affichage.clear();
    }

    /// = : évalue le texte affiché ; succès ou "ERROR", l’écran montre une réponse.
    pub fn touche_egal(&mut self) {
        let resultat: ResultatEval = eval_expression(self.affichage.texte());

        let texte = match resultat {
            Ok(txt) => {
                debug!(expression = self.affichage.texte(), resultat = %txt, "évaluation");
                self.derniere_reponse = txt.clone();
                txt
            }
            Err(e) => {
                debug!(expression = self.affichage.texte(), erreur = %e, "évaluation échouée");
                SENTINELLE_ERREUR.to_string()
            }
        };

        self.affichage.set_texte(texte);
        self.affichage.marquer_reponse_affichee();
    }

    /// Déclencheur "valider" (Entrée) : identique à "=".
    pub fn soumettre(&mut self) {
        self.touche_egal();
    }

    /// Règle commune : "ERROR" ou réponse affichée => effacer d’abord, puis ajouter.
    fn ajouter(&mut self, tok: &str) {
        if self.affichage.texte() == SENTINELLE_ERREUR || self.affichage.reponse_affichee() {
            self.affichage.clear();
        }

        let mut expression = self.affichage.texte().to_string();
        expression.push_str(tok);
        self.affichage.set_texte(expression);
    }
}
