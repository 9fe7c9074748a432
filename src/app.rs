// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// ----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB) + liaisons clavier

pub mod etat;
pub mod vue;


// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    /// Clavier global (pas de champ texte : la calculatrice capte tout)
    /// - caractères 0-9 . + - * / ( )
    /// - Enter = "=", Backspace = "DEL", Escape = "C"
    ///
    /// Les touches spéciales sont CONSOMMÉES avant le dessin de la grille :
    /// un bouton qui a le focus ne les revoit pas (sinon Enter = "=" + clic).
    pub fn lire_clavier(&mut self, ctx: &egui::Context) {
        let (texte, enter, backspace, esc) = ctx.input_mut(|i| {
            let texte: String = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect();
            // Espace active aussi un bouton focalisé : avalé sans effet
            i.consume_key(egui::Modifiers::NONE, egui::Key::Space);
            (
                texte,
                i.consume_key(egui::Modifiers::NONE, egui::Key::Enter),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Backspace),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Escape),
            )
        });

        for c in texte.chars() {
            self.touche_clavier(c);
        }
        if backspace {
            self.appuyer("DEL");
        }
        if esc {
            self.appuyer("C");
        }
        if enter {
            self.appuyer("=");
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
