//! src/config.rs
//!
//! Paramètres de la fenêtre (natif + web).
//!
//! Défauts = fenêtre d’origine (335×235, taille fixe).
//! Garde-fou : dimensions bornées (anti-fenêtre minuscule ou démesurée).

/// Titre par défaut (natif + web).
pub const TITRE_DEFAUT: &str = "PyCalc";

pub const LARGEUR_DEFAUT: f32 = 335.0;
pub const HAUTEUR_DEFAUT: f32 = 235.0;

const DIMENSION_MIN: f32 = 200.0;
const DIMENSION_MAX: f32 = 2000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub titre: String,
    pub largeur: f32,
    pub hauteur: f32,
    pub redimensionnable: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            titre: TITRE_DEFAUT.to_string(),
            largeur: LARGEUR_DEFAUT,
            hauteur: HAUTEUR_DEFAUT,
            redimensionnable: false,
        }
    }
}

impl Config {
    /// Dimensions bornées ; NaN retombe sur la valeur par défaut.
    pub fn avec_taille(mut self, largeur: f32, hauteur: f32) -> Self {
        self.largeur = borne(largeur, LARGEUR_DEFAUT);
        self.hauteur = borne(hauteur, HAUTEUR_DEFAUT);
        self
    }

    pub fn avec_titre(mut self, titre: impl Into<String>) -> Self {
        let titre = titre.into();
        if !titre.trim().is_empty() {
            self.titre = titre;
        }
        self
    }

    pub fn taille(&self) -> [f32; 2] {
        [self.largeur, self.hauteur]
    }
}

fn borne(v: f32, defaut: f32) -> f32 {
    if v.is_nan() {
        return defaut;
    }
    v.clamp(DIMENSION_MIN, DIMENSION_MAX)
}
