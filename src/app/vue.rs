// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran une ligne, lecture seule, aligné à droite
// - Pavé 4×5 fixe (disposition d’origine)
// - Aucune logique : chaque clic devient un AppCalc::appuyer(...)

use eframe::egui;

use super::etat::AppCalc;
use super::touches::{Touche, PAVE};

/// Taille d’un bouton du pavé (px).
const TAILLE_BOUTON: [f32; 2] = [60.0, 40.0];

/// Hauteur de l’écran (px).
const HAUTEUR_ECRAN: f32 = 35.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(6.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut texte = egui::RichText::new(self.texte_ecran())
                        .monospace()
                        .size(20.0);
                    // résultat (ou ERROR) : la prochaine touche repartira de zéro
                    if self.reponse_affichee() {
                        texte = texte.strong();
                    }
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}
