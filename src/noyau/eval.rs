//! Noyau — évaluation (pipeline réel)
//!
//! glyphes (× ÷) -> jetons -> RPN (validée) -> valeur f64 vérifiée (pile)
//!
//! Fonction pure : aucun état, aucun accès à autre chose que la liste blanche.

use tracing::trace;

use super::erreur::{ErreurCalc, Result};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{evaluer_rpn, format_rpn, to_rpn};

/// Glyphes d’affichage -> opérateurs littéraux.
pub fn substituer_glyphes(s: &str) -> String {
    s.replace('×', "*").replace('÷', "/")
}

/// API publique : évalue un tampon de calculatrice.
pub fn eval_expression(expr_str: &str) -> Result<f64> {
    let s = substituer_glyphes(expr_str);
    let s = s.trim();
    if s.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    trace!(jetons = %format_tokens(&jetons), "tokenize");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_rpn(&rpn), "shunting-yard");

    // 3) Valeur
    let v = evaluer_rpn(&rpn)?;
    trace!(valeur = v, "eval");

    Ok(v)
}
