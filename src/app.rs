// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier physique : mêmes identifiants que les touches à l’écran.
        let touches = ctx.input(|i| {
            let mut v = Vec::new();
            if i.key_pressed(egui::Key::Enter) {
                v.push(etat::EGAL);
            }
            if i.key_pressed(egui::Key::Backspace) {
                v.push(etat::RETOUR);
            }
            if i.key_pressed(egui::Key::Escape) {
                v.push(etat::AC);
            }
            v
        });
        for t in touches {
            self.handle_input(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
