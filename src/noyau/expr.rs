// src/noyau/expr.rs
//
// Primitives d’évaluation (f64) vérifiées, appliquées par la pile RPN (rpn.rs).
// - OpBinaire : + - * / // % **
// - Fonction  : liste blanche, un seul argument
// - constante : pi / e
//
// IMPORTANT (SAFE):
// - liste blanche FERMÉE : rien d’autre que Fonction::* et constante() n’est nommable.
// - aucune primitive ne rend NaN / ±inf : tout résultat non fini devient une erreur.

use std::f64::consts;

use super::erreur::{ErreurCalc, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Add,
    Sub,
    Mul,
    Div,
    DivEntiere,
    Modulo,
    Puissance,
}

impl OpBinaire {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBinaire::Add => "+",
            OpBinaire::Sub => "-",
            OpBinaire::Mul => "*",
            OpBinaire::Div => "/",
            OpBinaire::DivEntiere => "//",
            OpBinaire::Modulo => "%",
            OpBinaire::Puissance => "**",
        }
    }

    /// Applique l’opérateur avec les mêmes refus qu’une calculatrice “stricte”:
    /// division par zéro, puissance complexe, débordement.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64> {
        let v = match self {
            OpBinaire::Add => a + b,
            OpBinaire::Sub => a - b,
            OpBinaire::Mul => a * b,
            OpBinaire::Div => {
                if b == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                a / b
            }
            OpBinaire::DivEntiere | OpBinaire::Modulo => {
                if b == 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                let (q, r) = divmod(a, b);
                if self == OpBinaire::DivEntiere {
                    q
                } else {
                    r
                }
            }
            OpBinaire::Puissance => {
                if a == 0.0 && b < 0.0 {
                    return Err(ErreurCalc::DivisionParZero);
                }
                if a < 0.0 && b.fract() != 0.0 {
                    return Err(ErreurCalc::PuissanceNonReelle);
                }
                a.powf(b)
            }
        };
        fini(v)
    }
}

/// Quotient plancher + reste du signe du diviseur (-7 % 3 == 2).
///
/// Le quotient part du reste exact (fmod) et non de a / b arrondi :
/// 1 // 0.1 == 9 (a / b vaut 10.0 après arrondi).
fn divmod(a: f64, b: f64) -> (f64, f64) {
    let mut r = a % b;
    let mut q = (a - r) / b;
    if r != 0.0 {
        if (b < 0.0) != (r < 0.0) {
            r += b;
            q -= 1.0;
        }
    } else {
        r = 0.0_f64.copysign(b);
    }

    let q = if q != 0.0 {
        let plancher = q.floor();
        if q - plancher > 0.5 {
            plancher + 1.0
        } else {
            plancher
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (q, r)
}

/// Fonctions unaires autorisées (radians ; `Log` = logarithme NATUREL).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Exp,
}

impl Fonction {
    pub fn depuis_nom(name: &str) -> Option<Fonction> {
        match name {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "sqrt" => Some(Fonction::Sqrt),
            "log" => Some(Fonction::Log),
            "exp" => Some(Fonction::Exp),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Exp => "exp",
        }
    }

    pub fn appliquer(self, x: f64) -> Result<f64> {
        let v = match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(self.hors_domaine(x));
                }
                x.sqrt()
            }
            Fonction::Log => {
                if x <= 0.0 {
                    return Err(self.hors_domaine(x));
                }
                x.ln()
            }
            Fonction::Exp => x.exp(),
        };
        fini(v)
    }

    fn hors_domaine(self, valeur: f64) -> ErreurCalc {
        ErreurCalc::Domaine {
            fonction: self.nom(),
            valeur,
        }
    }
}

/// Constantes nommées autorisées.
pub fn constante(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

pub fn fini(v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalc::ResultatNonFini)
    }
}
