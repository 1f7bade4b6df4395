//! src/cli.rs
//!
//! Options de lancement (natif seulement ; le web garde Config::default()).

use clap::{Parser, ValueEnum};

use crate::config::{Config, HAUTEUR_DEFAUT, LARGEUR_DEFAUT, TITRE_DEFAUT};

#[derive(Parser, Debug)]
#[command(
    name = "calculatrice-clavier",
    version,
    about = "Calculatrice de bureau : pavé fixe, ANS, évaluation arithmétique sûre"
)]
pub struct Cli {
    /// Titre de la fenêtre.
    #[arg(long, default_value = TITRE_DEFAUT)]
    pub titre: String,

    /// Largeur de la fenêtre (px, bornée à 200..=2000).
    #[arg(long, default_value_t = LARGEUR_DEFAUT)]
    pub largeur: f32,

    /// Hauteur de la fenêtre (px, bornée à 200..=2000).
    #[arg(long, default_value_t = HAUTEUR_DEFAUT)]
    pub hauteur: f32,

    /// Niveau de journalisation (RUST_LOG prime s’il est défini).
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: NiveauLog,

    /// Format des logs sur stderr.
    #[arg(long = "log-format", value_enum, default_value = "compact")]
    pub log_format: FormatLog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum NiveauLog {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl NiveauLog {
    /// Directive EnvFilter équivalente.
    pub fn directive(self) -> &'static str {
        match self {
            NiveauLog::Error => "error",
            NiveauLog::Warn => "warn",
            NiveauLog::Info => "info",
            NiveauLog::Debug => "debug",
            NiveauLog::Trace => "trace",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormatLog {
    /// Une ligne par événement.
    #[default]
    Compact,
    /// Multi-lignes, lisible.
    Pretty,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::default()
            .avec_titre(self.titre.clone())
            .avec_taille(self.largeur, self.hauteur)
    }
}
