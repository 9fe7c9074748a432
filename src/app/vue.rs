// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage : expression (petite ligne) + résultat (grande ligne, alignés à droite)
// - Pavé standard 5x5 + pavé scientifique
// - Chaque bouton envoie son label à AppCalc::appuyer (etat.rs)

use eframe::egui;

use super::etat::AppCalc;

/// Pavé standard (même disposition que la calculatrice d’origine).
const PAVE_STANDARD: [[&str; 5]; 5] = [
    ["C", "DEL", "( )", "±", "÷"],
    ["7", "8", "9", "×", "^"],
    ["4", "5", "6", "-", "√"],
    ["1", "2", "3", "+", "%"],
    ["0", ".", "π", "e", "="],
];

/// Pavé scientifique ("" = case vide).
const PAVE_SCIENTIFIQUE: [[&str; 5]; 2] = [
    ["sin", "cos", "tan", "log", "ln"],
    ["exp", "", "", "", ""],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui, "pave_standard", &PAVE_STANDARD);

        ui.add_space(8.0);

        self.ui_pave(ui, "pave_scientifique", &PAVE_SCIENTIFIQUE);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(&self.expression)
                            .size(14.0)
                            .weak(),
                    );
                    ui.label(
                        egui::RichText::new(&self.affichage)
                            .size(30.0)
                            .strong()
                            .monospace(),
                    );
                });
            });
    }

    fn ui_pave<const N: usize>(&mut self, ui: &mut egui::Ui, id: &str, pave: &[[&str; 5]; N]) {
        egui::Grid::new(id)
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave {
                    for label in ligne {
                        if label.is_empty() {
                            ui.label("");
                            continue;
                        }
                        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(*label));
                        if resp.clicked() {
                            self.appuyer(label);
                        }
                    }
                    ui.end_row();
                }
            });
    }
}
