// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage seulement : chaque clic envoie l’identifiant de la touche à handle_input
// - Libellés sin/cos/tan fournis par l’état (sin⁻¹... en mode inverse)

use eframe::egui;

use super::etat::{AppCalc, EGAL, INV};

/// Pavé : rangées de la calculatrice d’origine (+ 1/x en fin de dernière rangée).
const RANGEES: [&[&str]; 7] = [
    &["inv", "sin", "ln", "cos", "log", "tan"],
    &["√", "xʸ", "x!", "(", ")", "π"],
    &["AC", "⌫", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "1/x", "="],
];

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_diagnostic(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        // Texte long => police plus petite
        let taille = if self.affichage().chars().count() > 9 {
            32.0
        } else {
            48.0
        };

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(self.affichage())
                    .size(taille)
                    .monospace(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for rangee in RANGEES {
                    for &touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let texte = egui::RichText::new(self.libelle(touche)).size(20.0);
        let mut b = egui::Button::new(texte);

        // touche inv "allumée" en mode inverse
        if (touche == INV && self.inverse()) || touche == EGAL {
            b = b.fill(ui.visuals().selection.bg_fill);
        }

        if ui.add_sized(TAILLE_TOUCHE, b).clicked() {
            self.handle_input(touche);
        }
    }

    /// Panneau repliable : erreur structurée ou démarche du dernier "=".
    fn ui_diagnostic(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                if let Some(e) = self.derniere_erreur() {
                    ui.colored_label(ui.visuals().error_fg_color, e.to_string());
                } else if let Some(d) = self.demarche() {
                    ui.monospace(format!("Prétraité : {}", d.pretraite));
                    ui.monospace(format!("Jetons    : {}", d.jetons));
                    ui.monospace(format!("RPN       : {}", d.rpn));
                    ui.monospace(format!("Arbre     : {}", d.arbre));
                } else {
                    ui.monospace("—");
                }
            });
    }
}
