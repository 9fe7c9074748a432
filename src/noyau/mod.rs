//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs   : ErreurCalc (thiserror)
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard validé + évaluation sur pile
//! - expr.rs     : opérateurs f64 vérifiés + liste blanche (fonctions, constantes)
//! - format.rs   : affichage des résultats + littéraux π / e
//! - eval.rs     : pipeline complet (fonction pure)
//! - moteur.rs   : tampon + éditions (append, ±, ⌫, C) + peek / evaluate

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use moteur::Moteur;
