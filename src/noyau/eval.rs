//! Noyau — évaluation (pipeline réel)
//!
//! validation -> jetons -> RPN -> pile de Relatif
//!
//! S'y ajoute le balayage best-effort d'un texte libre : chaque suite
//! maximale de caractères de l'alphabet des expressions est tentée, les
//! échecs sont silencieusement écartés.

use std::collections::HashMap;

use super::jetons::{caractere_autorise, format_jetons, tokenize};
use super::relatif::Relatif;
use super::rpn::{eval_rpn, to_rpn};

/// Démarche : trace textuelle des étapes intermédiaires.
#[derive(Default, Clone, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe et retourne sa valeur exacte.
pub fn eval_expression(expr: &str) -> Result<Relatif, String> {
    let (valeur, _d) = eval_avec_demarche(expr)?;
    Ok(valeur)
}

/// Variante avec démarche (jetons et RPN en texte).
pub fn eval_avec_demarche(expr: &str) -> Result<(Relatif, Demarche), String> {
    // espaces retirés avant validation
    let s: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }
    if let Some(c) = s.chars().find(|c| !caractere_autorise(*c)) {
        return Err(format!("caractère invalide: '{c}'"));
    }

    // 1) Jetons
    let jetons = tokenize(&s)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) Pile
    let valeur = eval_rpn(&rpn)?;

    Ok((
        valeur,
        Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    ))
}

/// Balayage d'un texte libre.
///
/// Chaque suite maximale de caractères de l'alphabet des expressions est un
/// candidat ; sont écartés les candidats sans chiffre (opérateurs seuls) et
/// les nombres nus (pas une expression). Le reste est évalué, et seuls les
/// succès apparaissent dans le résultat, indexés par le texte du candidat.
pub fn eval_dans_texte(texte: &str) -> HashMap<String, Relatif> {
    let mut resultats = HashMap::new();

    for morceau in decoupe_candidats(texte) {
        if !morceau.chars().any(|c| c.is_ascii_digit()) {
            continue; // opérateurs seuls
        }
        if morceau.chars().all(|c| c.is_ascii_digit() || c == '.') {
            continue; // nombre nu
        }
        if let Ok(valeur) = eval_expression(morceau) {
            resultats.insert(morceau.to_string(), valeur);
        }
    }

    resultats
}

/// Suites maximales de caractères autorisés dans `texte`.
fn decoupe_candidats(texte: &str) -> Vec<&str> {
    let mut morceaux = Vec::new();
    let mut debut: Option<usize> = None;

    for (i, c) in texte.char_indices() {
        if caractere_autorise(c) {
            if debut.is_none() {
                debut = Some(i);
            }
        } else if let Some(d) = debut.take() {
            morceaux.push(&texte[d..i]);
        }
    }
    if let Some(d) = debut {
        morceaux.push(&texte[d..]);
    }

    morceaux
}
