// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (tout ce qui n’est pas opérateur / nombre)
    // NOTE: le parse (RPN) décidera si c’est une fonction, une constante ou un refus.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash, // division entière (plancher)
    Percent,    // modulo
    StarStar,   // puissance

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 3.5, .5, 1.)
/// - opérateurs + - * / // % **
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (gardés tels quels, sensibles à la casse)
///
/// Les glyphes × et ÷ doivent être substitués AVANT (voir eval.rs).
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let suivant = chars.get(i + 1).copied();

        // Opérateurs + parenthèses
        let op = match (c, suivant) {
            ('*', Some('*')) => Some((Tok::StarStar, 2)),
            ('/', Some('/')) => Some((Tok::SlashSlash, 2)),
            ('*', _) => Some((Tok::Star, 1)),
            ('/', _) => Some((Tok::Slash, 1)),
            ('+', _) => Some((Tok::Plus, 1)),
            ('-', _) => Some((Tok::Minus, 1)),
            ('%', _) => Some((Tok::Percent, 1)),
            ('(', _) => Some((Tok::LPar, 1)),
            (')', _) => Some((Tok::RPar, 1)),
            _ => None,
        };
        if let Some((tok, largeur)) = op {
            out.push(tok);
            i += largeur;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        // Nombre décimal : plus longue suite de [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| ErreurCalc::NombreInvalide(texte.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::CaractereInattendu(c));
    }

    Ok(out)
}

/// Texte d’un jeton (traces + messages d’erreur).
pub fn format_tok(t: &Tok) -> String {
    match t {
        Tok::Num(v) => format!("{v}"),
        Tok::Ident(name) => name.clone(),

        Tok::Plus => "+".to_string(),
        Tok::Minus => "-".to_string(),
        Tok::Star => "*".to_string(),
        Tok::Slash => "/".to_string(),
        Tok::SlashSlash => "//".to_string(),
        Tok::Percent => "%".to_string(),
        Tok::StarStar => "**".to_string(),

        Tok::LPar => "(".to_string(),
        Tok::RPar => ")".to_string(),
    }
}

/// Format utilitaire (traces) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(format_tok).collect::<Vec<_>>().join(" ")
}
