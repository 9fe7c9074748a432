// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en VALIDANT la forme au passage
// - Puis évaluer la RPN sur une pile (aucune récursion)
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, sqrt, log, exp} => fonction unaire, DOIT être suivie de '('
//    - si name ∈ {pi, e} => constante (valeur)
//    - sinon => refus (liste blanche fermée)
// - Moins / plus unaire:
//    - si '-' arrive quand on attend une valeur, c’est un préfixe (Neg), '+' est ignoré
//    - précédence: ** > unaire > * / // % > + -   (donc -2**2 == -4, 2**-1 == 0.5)
// - ** est associatif à droite.

use super::erreur::{ErreurCalc, Result};
use super::expr::{constante, fini, Fonction, OpBinaire};
use super::jetons::{format_tok, Tok};

/// Élément de sortie (postfix).
#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Valeur(f64),
    Neg,
    Op(OpBinaire),
    Appel(Fonction),
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(OpBinaire),
    Neg,
    LPar,
    Appel(Fonction),
}

const PRECEDENCE_NEG: i32 = 3;

fn precedence(op: OpBinaire) -> i32 {
    match op {
        OpBinaire::Add | OpBinaire::Sub => 1,
        OpBinaire::Mul | OpBinaire::Div | OpBinaire::DivEntiere | OpBinaire::Modulo => 2,
        OpBinaire::Puissance => 4,
    }
}

fn is_right_associative(op: OpBinaire) -> bool {
    matches!(op, OpBinaire::Puissance)
}

fn op_binaire(t: &Tok) -> Option<OpBinaire> {
    match t {
        Tok::Plus => Some(OpBinaire::Add),
        Tok::Minus => Some(OpBinaire::Sub),
        Tok::Star => Some(OpBinaire::Mul),
        Tok::Slash => Some(OpBinaire::Div),
        Tok::SlashSlash => Some(OpBinaire::DivEntiere),
        Tok::Percent => Some(OpBinaire::Modulo),
        Tok::StarStar => Some(OpBinaire::Puissance),
        _ => None,
    }
}

fn inattendu(t: &Tok) -> ErreurCalc {
    ErreurCalc::JetonInattendu(format_tok(t))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(1), Plus, Num(2), RPar]
///   rpn:    [Valeur(1), Valeur(2), Op(Add), Appel(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>> {
    if tokens.is_empty() {
        return Err(ErreurCalc::EntreeVide);
    }

    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // true tant qu’on attend un opérande (début, après un opérateur, après '(').
    let mut attend_valeur = true;

    // Fonction lue, dont on exige la '(' au jeton suivant.
    let mut fonction_ouverte: Option<&str> = None;

    for tok in tokens {
        if let Some(name) = fonction_ouverte.take() {
            if *tok != Tok::LPar {
                return Err(ErreurCalc::FonctionSansParenthese(name.to_string()));
            }
        }

        match tok {
            Tok::Num(v) => {
                if !attend_valeur {
                    return Err(inattendu(tok));
                }
                out.push(Rpn::Valeur(*v));
                attend_valeur = false;
            }

            Tok::Ident(name) => {
                if !attend_valeur {
                    return Err(inattendu(tok));
                }
                if let Some(f) = Fonction::depuis_nom(name) {
                    ops.push(Pile::Appel(f));
                    fonction_ouverte = Some(name.as_str());
                } else if let Some(v) = constante(name) {
                    out.push(Rpn::Valeur(v));
                    attend_valeur = false;
                } else {
                    return Err(ErreurCalc::IdentifiantInconnu(name.clone()));
                }
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(inattendu(tok));
                }
                ops.push(Pile::LPar);
            }

            Tok::RPar => {
                // "()" ou "2+)" : il manque une valeur
                if attend_valeur {
                    return Err(inattendu(tok));
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    match top {
                        Pile::LPar => {
                            fermee = true;
                            break;
                        }
                        Pile::Op(op) => out.push(Rpn::Op(op)),
                        Pile::Neg => out.push(Rpn::Neg),
                        Pile::Appel(f) => out.push(Rpn::Appel(f)),
                    }
                }
                if !fermee {
                    return Err(ErreurCalc::ParentheseFermanteOrpheline);
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Pile::Appel(f)) = ops.last().copied() {
                    ops.pop();
                    out.push(Rpn::Appel(f));
                }
            }

            Tok::Minus if attend_valeur => ops.push(Pile::Neg),
            Tok::Plus if attend_valeur => {}

            _ => {
                let op = op_binaire(tok).ok_or_else(|| inattendu(tok))?;
                if attend_valeur {
                    return Err(inattendu(tok));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ni par une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                let p_tok = precedence(op);
                while let Some(top) = ops.last().copied() {
                    let (p_top, sortie) = match top {
                        Pile::Op(o) => (precedence(o), Rpn::Op(o)),
                        Pile::Neg => (PRECEDENCE_NEG, Rpn::Neg),
                        Pile::LPar | Pile::Appel(_) => break,
                    };

                    let doit_pop = if is_right_associative(op) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };
                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(sortie);
                }

                ops.push(Pile::Op(op));
                attend_valeur = true;
            }
        }
    }

    if let Some(name) = fonction_ouverte {
        return Err(ErreurCalc::FonctionSansParenthese(name.to_string()));
    }
    if attend_valeur {
        return Err(ErreurCalc::ExpressionIncomplete);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            // Appel reste collé à sa '(' : s’il est encore là, la '(' l’est aussi
            Pile::LPar | Pile::Appel(_) => return Err(ErreurCalc::ParenthesesNonFermees),
            Pile::Op(op) => out.push(Rpn::Op(op)),
            Pile::Neg => out.push(Rpn::Neg),
        }
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de valeurs (itératif : pas de limite de longueur
/// ni d’imbrication). Exactement une valeur doit rester à la fin.
pub fn evaluer_rpn(rpn: &[Rpn]) -> Result<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for item in rpn {
        let v = match item {
            Rpn::Valeur(v) => fini(*v)?,

            Rpn::Neg => -st.pop().ok_or(ErreurCalc::ExpressionIncomplete)?,

            Rpn::Appel(f) => f.appliquer(st.pop().ok_or(ErreurCalc::ExpressionIncomplete)?)?,

            Rpn::Op(op) => {
                let b = st.pop().ok_or(ErreurCalc::ExpressionIncomplete)?;
                let a = st.pop().ok_or(ErreurCalc::ExpressionIncomplete)?;
                op.appliquer(a, b)?
            }
        };
        st.push(v);
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalc::ExpressionIncomplete),
    }
}

/// Format utilitaire (traces) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Valeur(v) => format!("{v}"),
            Rpn::Neg => "neg".to_string(),
            Rpn::Op(op) => op.symbole().to_string(),
            Rpn::Appel(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
