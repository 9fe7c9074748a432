//! Moteur d’expression : le tampon + ses éditions + ses évaluations.
//!
//! Contrats :
//! - `peek()` ne modifie JAMAIS le tampon.
//! - `evaluate()` remplace le tampon par le résultat formaté (succès) ou le vide (échec).
//! - Aucune erreur ne sort autrement que par valeur de retour.

use tracing::debug;

use super::erreur::Result;
use super::eval::eval_expression;
use super::format::{format_nombre, litteral_e, litteral_pi};

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    tampon: String,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantané du tampon (ligne “expression”).
    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    /// Ajoute un jeton au tampon, après expansion (√ -> "sqrt(", ^ -> "**", ...).
    /// Ne refuse rien : un état partiel s’évalue simplement en “pas de valeur”.
    pub fn append(&mut self, token: &str) {
        match token {
            "√" => self.tampon.push_str("sqrt("),
            "π" => self.tampon.push_str(litteral_pi()),
            "e" => self.tampon.push_str(litteral_e()),
            "^" => self.tampon.push_str("**"),
            "sin" | "cos" | "tan" | "exp" => {
                self.tampon.push_str(token);
                self.tampon.push('(');
            }
            // ln = logarithme naturel ; "log" aussi (pas de log10)
            "ln" | "log" => self.tampon.push_str("log("),
            "( )" => {
                let ouvrantes = self.tampon.matches('(').count();
                let fermantes = self.tampon.matches(')').count();
                if ouvrantes > fermantes {
                    self.tampon.push(')');
                } else {
                    self.tampon.push('(');
                }
            }
            _ => self.tampon.push_str(token),
        }
    }

    /// Retire UN caractère (pas un jeton complet).
    pub fn delete_last(&mut self) {
        self.tampon.pop();
    }

    pub fn clear(&mut self) {
        self.tampon.clear();
    }

    /// (-1*(<tampon>)) ; rien si vide. Les bascules successives s’emboîtent.
    pub fn toggle_sign(&mut self) {
        if self.tampon.is_empty() {
            return;
        }
        self.tampon = format!("(-1*({}))", self.tampon);
    }

    /// Évaluation “live” : valeur si le tampon est complet, sinon None.
    pub fn peek(&self) -> Option<f64> {
        eval_expression(&self.tampon).ok()
    }

    /// Évaluation finale (“=”).
    pub fn evaluate(&mut self) -> Result<f64> {
        match eval_expression(&self.tampon) {
            Ok(v) => {
                let texte = format_nombre(v);
                debug!(expression = %self.tampon, resultat = %texte, "évaluation");
                self.tampon = texte;
                Ok(v)
            }
            Err(e) => {
                debug!(expression = %self.tampon, erreur = %e, "évaluation refusée");
                self.tampon.clear();
                Err(e)
            }
        }
    }
}
