// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (touches, affichage, contrôleur, état, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, l’écran est en lecture seule):
// - Entrée / '=' : évaluer
// - Échap        : C
// - 0-9 + - * / ( ) . : touche littérale correspondante

pub mod affichage;
pub mod controleur;
pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use touches::Touche;

/// Événements clavier de la frame, dans l’ordre de frappe.
fn touches_clavier(i: &egui::InputState) -> Vec<Touche> {
    i.events
        .iter()
        .filter_map(|e| match e {
            egui::Event::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .flat_map(str::chars)
        .filter_map(Touche::depuis_caractere)
        .collect()
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Consommées : un bouton qui a le focus réagit aussi à Entrée / Espace.
        let (entree, echap) = ctx.input_mut(|i| {
            let entree = i.consume_key(egui::Modifiers::NONE, egui::Key::Enter);
            let echap = i.consume_key(egui::Modifiers::NONE, egui::Key::Escape);
            let _ = i.consume_key(egui::Modifiers::NONE, egui::Key::Space);
            (entree, echap)
        });
        let tapees = ctx.input(touches_clavier);

        for t in tapees {
            self.appuyer(t);
        }
        if entree {
            self.soumettre();
        }
        if echap {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
