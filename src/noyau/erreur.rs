//! Erreurs du noyau.
//!
//! Toutes les erreurs restent À L’INTÉRIEUR du moteur : `peek()` les transforme en
//! « pas de valeur », `evaluate()` en marqueur d’erreur + tampon vidé.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("identifiant non autorisé: {0}")]
    IdentifiantInconnu(String),

    #[error("fonction sans parenthèse: {0}")]
    FonctionSansParenthese(String),

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermanteOrpheline,

    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction} : argument hors domaine ({valeur})")]
    Domaine { fonction: &'static str, valeur: f64 },

    #[error("puissance non réelle")]
    PuissanceNonReelle,

    #[error("résultat non fini")]
    ResultatNonFini,
}

pub type Result<T> = std::result::Result<T, ErreurCalc>;
