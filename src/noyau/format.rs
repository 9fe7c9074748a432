// src/noyau/format.rs

use std::f64::consts;
use std::sync::OnceLock;

use num_traits::ToPrimitive;

/// Affichage d’un résultat.
///
/// - partie fractionnaire nulle => entier, sans point (14, -7, et 0 pour -0.0)
/// - sinon => décimal le plus court qui se relit à l’identique (3.5, 0.30000000000000004)
///
/// Jamais de notation exponentielle : le texte produit doit pouvoir redevenir un tampon.
pub fn format_nombre(v: f64) -> String {
    if v.fract() == 0.0 {
        return match v.to_i64() {
            Some(n) => n.to_string(),
            // hors i64 : Display de f64 n’écrit pas non plus d’exposant
            None => format!("{v:.0}"),
        };
    }
    format!("{v}")
}

/* ------------------------ Littéraux π / e (calculés une fois) ------------------------ */

static PI_TEXTE: OnceLock<String> = OnceLock::new();
static E_TEXTE: OnceLock<String> = OnceLock::new();

/// Texte inséré par la touche π.
pub fn litteral_pi() -> &'static str {
    PI_TEXTE.get_or_init(|| format_nombre(consts::PI))
}

/// Texte inséré par la touche e.
pub fn litteral_e() -> &'static str {
    E_TEXTE.get_or_init(|| format_nombre(consts::E))
}
