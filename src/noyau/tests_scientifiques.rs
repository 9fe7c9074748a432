//! Tests scientifiques : propriétés du moteur + précédence + liste blanche + format.
//!
//! Notes :
//! - Les tampons sont construits comme le ferait l’UI (labels de boutons, × et ÷).
//! - Comparaisons flottantes exactes seulement quand l’IEEE le garantit ;
//!   sinon tolérance `EPS`.

use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::format::{format_nombre, litteral_e, litteral_pi};
use super::Moteur;

const EPS: f64 = 1e-12;

fn moteur(labels: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for l in labels {
        m.append(l);
    }
    m
}

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < EPS,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

fn assert_erreur(expr: &str, attendue: ErreurCalc) {
    assert_eq!(eval_expression(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Moteur : éditions + évaluations ------------------------ */

#[test]
fn sci_live_precedence_standard() {
    let m = moteur(&["2", "+", "3", "×", "4"]);
    assert_eq!(m.tampon(), "2+3×4");
    assert_eq!(m.peek(), Some(14.0));
}

#[test]
fn sci_pi_puis_egal() {
    let mut m = moteur(&["π"]);
    assert_eq!(m.tampon(), "3.141592653589793");
    assert_eq!(m.evaluate(), Ok(std::f64::consts::PI));
    assert_eq!(m.tampon(), "3.141592653589793");
}

#[test]
fn sci_e_insere_son_litteral() {
    let m = moteur(&["e"]);
    assert_eq!(m.tampon(), litteral_e());
    assert_eq!(m.peek(), Some(std::f64::consts::E));
}

#[test]
fn sci_ln_est_le_log_naturel() {
    let mut m = moteur(&["ln", "1", ")"]);
    assert_eq!(m.tampon(), "log(1)");
    assert_eq!(m.evaluate(), Ok(0.0));
    assert_eq!(m.tampon(), "0");

    // le bouton "log" produit aussi log( (naturel)
    let m = moteur(&["log", "e", ")"]);
    assert_eq!(m.tampon(), format!("log({})", litteral_e()));
    let v = m.peek().unwrap_or(f64::NAN);
    assert!((v - 1.0).abs() < EPS, "v={v}");
}

#[test]
fn sci_retour_caractere_par_caractere() {
    let mut m = moteur(&["1", "2"]);
    m.delete_last();
    assert_eq!(m.tampon(), "1");
    m.delete_last();
    assert_eq!(m.tampon(), "");
    assert_eq!(m.peek(), None);

    // vide : no-op
    m.delete_last();
    assert_eq!(m.tampon(), "");

    // un seul caractère, pas un jeton complet
    let mut m = moteur(&["√"]);
    m.delete_last();
    assert_eq!(m.tampon(), "sqrt");

    // caractère multi-octets
    let mut m = moteur(&["2", "×"]);
    m.delete_last();
    assert_eq!(m.tampon(), "2");
}

#[test]
fn sci_division_par_zero_vide_le_tampon() {
    let mut m = moteur(&["5", "÷", "0"]);
    assert_eq!(m.peek(), None);
    assert_eq!(m.tampon(), "5÷0");
    assert_eq!(m.evaluate(), Err(ErreurCalc::DivisionParZero));
    assert_eq!(m.tampon(), "");
}

#[test]
fn sci_bascule_signe() {
    let mut m = moteur(&["3", "+", "4"]);
    m.toggle_sign();
    assert_eq!(m.tampon(), "(-1*(3+4))");
    assert_eq!(m.evaluate(), Ok(-7.0));
    assert_eq!(m.tampon(), "-7");

    // vide : rien
    let mut m = Moteur::new();
    m.toggle_sign();
    assert_eq!(m.tampon(), "");
}

#[test]
fn sci_bascule_signe_s_emboite() {
    let mut m = moteur(&["3", "+", "4"]);
    m.toggle_sign();
    m.toggle_sign();
    assert_eq!(m.tampon(), "(-1*((-1*(3+4))))");
    assert_eq!(m.peek(), Some(7.0));
}

#[test]
fn sci_clear_idempotent() {
    let mut m = moteur(&["9", "9"]);
    m.clear();
    assert_eq!(m.tampon(), "");
    m.clear();
    assert_eq!(m.tampon(), "");
}

#[test]
fn sci_enchainement_apres_egal() {
    let mut m = moteur(&["6", "×", "7"]);
    assert_eq!(m.evaluate(), Ok(42.0));
    assert_eq!(m.tampon(), "42");

    m.append("+2");
    assert_eq!(m.evaluate(), Ok(44.0));
    assert_eq!(m.tampon(), "44");

    let mut m = moteur(&["7", "÷", "2"]);
    assert_eq!(m.evaluate(), Ok(3.5));
    assert_eq!(m.tampon(), "3.5");
}

#[test]
fn sci_peek_ne_touche_pas_le_tampon() {
    let m = moteur(&["2", "+"]);
    assert_eq!(m.peek(), None);
    assert_eq!(m.tampon(), "2+");

    let m = moteur(&["8", "^", "2"]);
    assert_eq!(m.peek(), Some(64.0));
    assert_eq!(m.tampon(), "8**2");
}

#[test]
fn sci_bouton_parentheses() {
    let mut m = Moteur::new();
    m.append("( )");
    assert_eq!(m.tampon(), "(");
    m.append("2");
    m.append("( )");
    assert_eq!(m.tampon(), "(2)");
    m.append("×");
    m.append("( )");
    assert_eq!(m.tampon(), "(2)×(");

    // une fonction ouverte compte comme '('
    let mut m = moteur(&["sin", "0"]);
    m.append("( )");
    assert_eq!(m.tampon(), "sin(0)");
    assert_eq!(m.peek(), Some(0.0));
}

#[test]
fn sci_expansions_fonctions() {
    assert_eq!(moteur(&["√"]).tampon(), "sqrt(");
    assert_eq!(moteur(&["^"]).tampon(), "**");
    assert_eq!(moteur(&["sin"]).tampon(), "sin(");
    assert_eq!(moteur(&["cos"]).tampon(), "cos(");
    assert_eq!(moteur(&["tan"]).tampon(), "tan(");
    assert_eq!(moteur(&["exp"]).tampon(), "exp(");
    assert_eq!(moteur(&["%"]).tampon(), "%");
    assert_eq!(moteur(&["√", "9", ")"]).peek(), Some(3.0));
}

/* ------------------------ Grammaire ------------------------ */

#[test]
fn sci_puissance_associative_a_droite() {
    assert_eq!(eval_ok("2**3**2"), 512.0);
    assert_eq!(eval_ok("-2**2"), -4.0);
    assert_eq!(eval_ok("2**-1"), 0.5);
    assert_eq!(eval_ok("(-2)**2"), 4.0);
    assert_eq!(eval_ok("2**-2**2"), 0.0625);
}

#[test]
fn sci_unaires() {
    assert_eq!(eval_ok("2*-3"), -6.0);
    assert_eq!(eval_ok("-3*2"), -6.0);
    assert_eq!(eval_ok("--3"), 3.0);
    assert_eq!(eval_ok("+3"), 3.0);
    assert_eq!(eval_ok("2+-3"), -1.0);
    assert_eq!(eval_ok("-(1+2)*2"), -6.0);
    assert_eq!(eval_ok("-sqrt(4)"), -2.0);
}

#[test]
fn sci_precedence_gauche_droite() {
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("64/4/2"), 8.0);
    assert_eq!(eval_ok("2+3*4-6/2"), 11.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok(" 1 + 2 "), 3.0);
    assert_eq!(eval_ok("3."), 3.0);
    assert_eq!(eval_ok(".5*4"), 2.0);
}

#[test]
fn sci_modulo_et_division_entiere() {
    assert_eq!(eval_ok("7%3"), 1.0);
    assert_eq!(eval_ok("-7%3"), 2.0);
    assert_eq!(eval_ok("7%-3"), -2.0);
    assert_eq!(eval_ok("8//3"), 2.0);
    assert_eq!(eval_ok("-7//2"), -4.0);
    assert_eq!(eval_ok("8÷÷3"), 2.0);
    assert_eq!(eval_ok("2+7%4*2"), 8.0);
    // quotient tiré du reste exact : 1 / 0.1 arrondit à 10.0, mais 1 // 0.1 == 9
    assert_eq!(eval_ok("1//0.1"), 9.0);
    assert_proche("1%0.1", 0.1);
    assert_eq!(eval_ok("-1//0.1"), -10.0);
    assert_erreur("5%0", ErreurCalc::DivisionParZero);
    assert_erreur("5//0", ErreurCalc::DivisionParZero);
}

#[test]
fn sci_fonctions_et_constantes() {
    assert_eq!(eval_ok("sin(0)"), 0.0);
    assert_eq!(eval_ok("cos(0)"), 1.0);
    assert_eq!(eval_ok("tan(0)"), 0.0);
    assert_eq!(eval_ok("exp(0)"), 1.0);
    assert_eq!(eval_ok("sqrt(16)"), 4.0);
    assert_proche("sin(pi/2)", 1.0);
    assert_proche("cos(pi)", -1.0);
    assert_proche("log(e)", 1.0);
    assert_proche("exp(log(5))", 5.0);
    assert_proche("pi*2", std::f64::consts::TAU);
    assert_proche(&format!("sin({})", litteral_pi()), 0.0);
    assert_eq!(eval_ok("sqrt(sqrt(16))"), 2.0);
}

#[test]
fn sci_glyphes_substitues() {
    assert_eq!(eval_ok("6×7"), 42.0);
    assert_eq!(eval_ok("9÷2"), 4.5);
    // × × = puissance, comme un ** tapé au clavier
    assert_eq!(eval_ok("2××10"), 1024.0);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_formes_incompletes() {
    assert_erreur("", ErreurCalc::EntreeVide);
    assert_erreur("   ", ErreurCalc::EntreeVide);
    assert_erreur("2+", ErreurCalc::ExpressionIncomplete);
    assert_erreur("sin(", ErreurCalc::ExpressionIncomplete);
    assert_erreur("(2+3", ErreurCalc::ParenthesesNonFermees);
    assert_erreur("sqrt(4", ErreurCalc::ParenthesesNonFermees);
    assert_erreur("2+3)", ErreurCalc::ParentheseFermanteOrpheline);
    assert_erreur("()", ErreurCalc::JetonInattendu(")".into()));
    assert_erreur("2 3", ErreurCalc::JetonInattendu("3".into()));
    assert_erreur("(2)(3)", ErreurCalc::JetonInattendu("(".into()));
    assert_erreur("*2", ErreurCalc::JetonInattendu("*".into()));
    assert_erreur("2***3", ErreurCalc::JetonInattendu("*".into()));
    assert_erreur("2.5.1", ErreurCalc::NombreInvalide("2.5.1".into()));
    assert_erreur(".", ErreurCalc::NombreInvalide(".".into()));
}

#[test]
fn sci_domaines() {
    assert!(matches!(
        eval_expression("log(0)"),
        Err(ErreurCalc::Domaine { fonction: "log", .. })
    ));
    assert!(matches!(
        eval_expression("log(-1)"),
        Err(ErreurCalc::Domaine { fonction: "log", .. })
    ));
    assert!(matches!(
        eval_expression("sqrt(-1)"),
        Err(ErreurCalc::Domaine { fonction: "sqrt", .. })
    ));
    assert_erreur("(-8)**(1/3)", ErreurCalc::PuissanceNonReelle);
    assert_erreur("0**-1", ErreurCalc::DivisionParZero);
    assert_erreur("exp(1000)", ErreurCalc::ResultatNonFini);
    assert_erreur("10**400", ErreurCalc::ResultatNonFini);
}

#[test]
fn sci_liste_blanche_fermee() {
    assert_erreur("abs(2)", ErreurCalc::IdentifiantInconnu("abs".into()));
    assert_erreur("x+1", ErreurCalc::IdentifiantInconnu("x".into()));
    assert_erreur("PI", ErreurCalc::IdentifiantInconnu("PI".into()));
    assert_erreur("tau", ErreurCalc::IdentifiantInconnu("tau".into()));
    assert_erreur("sin 1", ErreurCalc::FonctionSansParenthese("sin".into()));
    assert_erreur("sqrt", ErreurCalc::FonctionSansParenthese("sqrt".into()));
    assert_erreur("pi(2)", ErreurCalc::JetonInattendu("(".into()));
    assert!(eval_expression("__import__('os')").is_err());
    assert!(eval_expression("exec(1)").is_err());
    assert!(eval_expression("a=1").is_err());
    assert!(eval_expression("1;2").is_err());
    assert!(eval_expression("(1).real").is_err());
    assert!(eval_expression("[1]").is_err());
}

#[test]
fn sci_longues_chaines_et_imbrications() {
    // chaîne plate : aucune limite de longueur
    let plate = vec!["1"; 600].join("+");
    assert_eq!(eval_ok(&plate), 600.0);

    let mut m = Moteur::new();
    for i in 0..600 {
        if i > 0 {
            m.append("+");
        }
        m.append("1");
    }
    assert_eq!(m.peek(), Some(600.0));
    assert_eq!(m.evaluate(), Ok(600.0));
    assert_eq!(m.tampon(), "600");

    assert_eq!(eval_ok(&vec!["2"; 400].join("×")), 2f64.powi(400));

    // imbrication réelle : moins unaires et parenthèses profondes
    assert_eq!(eval_ok(&format!("{}1", "-".repeat(1001))), -1.0);
    assert_eq!(eval_ok(&format!("{}7{}", "(".repeat(1000), ")".repeat(1000))), 7.0);

    // 300 bascules de signe restent évaluables
    let mut m = moteur(&["1"]);
    for _ in 0..300 {
        m.toggle_sign();
    }
    assert_eq!(m.peek(), Some(1.0));
}

/* ------------------------ Format ------------------------ */

#[test]
fn sci_format_entier_ou_decimal() {
    assert_eq!(format_nombre(14.0), "14");
    assert_eq!(format_nombre(-7.0), "-7");
    assert_eq!(format_nombre(-0.0), "0");
    assert_eq!(format_nombre(3.5), "3.5");
    assert_eq!(format_nombre(0.1 + 0.2), "0.30000000000000004");
    assert_eq!(format_nombre(1e20), "100000000000000000000");
    assert_eq!(format_nombre(1e-7), "0.0000001");
    assert_eq!(litteral_pi(), "3.141592653589793");
    assert_eq!(litteral_e(), "2.718281828459045");
}
