//! src/app/etat.rs
//!
//! État UI (sans vue) : le contrôleur et l’écran qu’il pilote.
//!
//! Rôle : point de passage unique entre les événements egui (boutons, clavier)
//! et le contrôleur. Aucune logique de calcul ici.

use super::affichage::{Affichage, EcranTexte};
use super::controleur::Controleur;
use super::touches::Touche;

#[derive(Clone, Debug)]
pub struct AppCalc {
    ctrl: Controleur<EcranTexte>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            ctrl: Controleur::new(EcranTexte::default()),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions (état seulement) ------------------------ */

    /// Bouton du pavé ou caractère tapé.
    pub fn appuyer(&mut self, touche: Touche) {
        self.ctrl.appuyer(touche);
    }

    /// Entrée : même effet que "=".
    pub fn soumettre(&mut self) {
        self.ctrl.soumettre();
    }

    /// Échap : même effet que "C".
    pub fn clear_entree(&mut self) {
        self.ctrl.touche_clear();
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    pub fn texte_ecran(&self) -> &str {
        self.ctrl.affichage().texte()
    }

    pub fn reponse_affichee(&self) -> bool {
        self.ctrl.affichage().reponse_affichee()
    }
}
