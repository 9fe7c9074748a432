//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier les touches (boutons + clavier) au moteur, et garder les deux
//! lignes d’affichage dérivées : expression (tampon brut) + résultat.
//!
//! Contrats :
//! - Une action utilisateur = UN appel moteur, puis un rafraîchissement.
//! - Aucune évaluation ici : tout passe par noyau::Moteur.

use crate::noyau::Moteur;

/// Ligne “résultat” quand il n’y a rien à montrer.
pub const AFFICHAGE_VIDE: &str = "0";

/// Ligne “résultat” après un “=” refusé.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Ce que déclenche un label de bouton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Touche {
    Effacer,
    Retour,
    Egal,
    Signe,
    Inserer(String),
}

impl Touche {
    pub fn depuis_label(label: &str) -> Touche {
        match label {
            "C" => Touche::Effacer,
            "⌫" | "DEL" => Touche::Retour,
            "=" => Touche::Egal,
            "±" => Touche::Signe,
            _ => Touche::Inserer(label.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- sorties ---
    pub expression: String, // ligne secondaire : tampon brut
    pub affichage: String,  // ligne principale : valeur live / finale / "Error"
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            expression: String::new(),
            affichage: AFFICHAGE_VIDE.to_string(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, label: &str) {
        match Touche::depuis_label(label) {
            Touche::Effacer => self.moteur.clear(),
            Touche::Retour => self.moteur.delete_last(),
            Touche::Signe => self.moteur.toggle_sign(),
            Touche::Inserer(t) => self.moteur.append(&t),
            Touche::Egal => {
                self.egal();
                return;
            }
        }
        self.rafraichir();
    }

    /// Touche clavier “texte”. Retourne false si la touche n’est pas liée.
    pub fn touche_clavier(&mut self, c: char) -> bool {
        let label = match c {
            '*' => "×".to_string(),
            '/' => "÷".to_string(),
            '0'..='9' | '.' | '+' | '-' | '(' | ')' => c.to_string(),
            _ => return false,
        };
        self.appuyer(&label);
        true
    }

    /* ------------------------ Affichage dérivé ------------------------ */

    /// Évaluation live : valeur si possible, sinon le tampon brut, sinon "0".
    fn rafraichir(&mut self) {
        self.expression = self.moteur.tampon().to_string();
        self.affichage = match self.moteur.peek() {
            Some(v) => crate::noyau::format::format_nombre(v),
            None if self.expression.is_empty() => AFFICHAGE_VIDE.to_string(),
            None => self.expression.clone(),
        };
    }

    fn egal(&mut self) {
        self.affichage = match self.moteur.evaluate() {
            Ok(_) => self.moteur.tampon().to_string(),
            Err(_) => AFFICHAGE_ERREUR.to_string(),
        };
        self.expression = self.moteur.tampon().to_string();
    }
}
