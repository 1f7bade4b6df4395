//! src/app/affichage.rs
//!
//! Contrat d’écran vu par le contrôleur + implémentation mémoire.
//!
//! Contrats :
//! - set_texte() est synchrone : le texte suivant lu par texte() est celui écrit.
//! - clear() = set_texte("") + drapeau "réponse affichée" remis à false.
//! - Le drapeau ne se remet à false QUE via clear().

/// Ce que le contrôleur peut faire de l’écran.
pub trait Affichage {
    fn texte(&self) -> &str;

    fn set_texte(&mut self, texte: String);

    fn clear(&mut self);

    /// Vrai si le texte affiché est un résultat (ou "ERROR") et non une saisie.
    fn reponse_affichee(&self) -> bool;

    fn marquer_reponse_affichee(&mut self);
}

/// Écran texte d’une ligne (état pur, la vue egui ne fait que le dessiner).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EcranTexte {
    texte: String,
    reponse_affichee: bool,
}

impl Affichage for EcranTexte {
    fn texte(&self) -> &str {
        &self.texte
    }

    fn set_texte(&mut self, texte: String) {
        self.texte = texte;
    }

    fn clear(&mut self) {
        self.texte.clear();
        self.reponse_affichee = false;
    }

    fn reponse_affichee(&self) -> bool {
        self.reponse_affichee
    }

    fn marquer_reponse_affichee(&mut self) {
        self.reponse_affichee = true;
    }
}
