// src/noyau/jetons.rs

use super::grandeur::Grandeur;
use super::lecture::lire_grandeur;

/// Jetons de l'évaluateur.
///
/// `Neg` (moins unaire) n'est jamais produit par `tokenize` : c'est `to_rpn`
/// qui requalifie un `Minus` rencontré en position d'opérande.
#[derive(Clone, Debug)]
pub enum Tok {
    Num(Grandeur),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar, // **

    Bang, // ! (non logique)
    Neg,  // moins unaire

    AndAnd, // &&
    OrOr,   // ||

    Lt,
    Gt,
    Le,
    Ge,
    EqEq,
    NotEq,

    LPar,
    RPar,
}

/// Alphabet autorisé dans une expression (les espaces sont retirés en amont).
pub fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit()
        || matches!(
            c,
            '.' | '[' | ']' | '!' | '%' | '&' | '(' | ')' | '*' | '+' | '/' | '<' | '=' | '>'
                | '|' | '-'
        )
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux : `12`, `3.25`, avec bloc répété collé : `0.1[6]`, `2[7]`
/// - opérateurs à deux caractères : `**` `&&` `||` `<=` `>=` `==` `!=`
/// - opérateurs simples `+ - * / % ! < >` et parenthèses `( )`
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs à deux caractères d'abord
        if i + 1 < chars.len() {
            let deux = match (c, chars[i + 1]) {
                ('*', '*') => Some(Tok::StarStar),
                ('&', '&') => Some(Tok::AndAnd),
                ('|', '|') => Some(Tok::OrOr),
                ('<', '=') => Some(Tok::Le),
                ('>', '=') => Some(Tok::Ge),
                ('=', '=') => Some(Tok::EqEq),
                ('!', '=') => Some(Tok::NotEq),
                _ => None,
            };
            if let Some(t) = deux {
                out.push(t);
                i += 2;
                continue;
            }
        }

        // Opérateurs simples et parenthèses
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Tok::Bang);
                i += 1;
                continue;
            }
            '<' => {
                out.push(Tok::Lt);
                i += 1;
                continue;
            }
            '>' => {
                out.push(Tok::Gt);
                i += 1;
                continue;
            }
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral : chiffres, puis éventuellement .chiffres, puis
        // éventuellement un bloc répété [chiffres] collé au nombre.
        if c.is_ascii_digit() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            if i < chars.len() && chars[i] == '[' {
                i += 1;
                let debut_bloc = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i >= chars.len() || chars[i] != ']' || i == debut_bloc {
                    return Err("bloc répété mal formé".into());
                }
                i += 1;
            }
            let litteral: String = chars[debut..i].iter().collect();
            out.push(Tok::Num(lire_grandeur(&litteral)?));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in jetons {
        let s = match t {
            Tok::Num(g) => g.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::StarStar => "**".to_string(),

            Tok::Bang => "!".to_string(),
            Tok::Neg => "~".to_string(), // moins unaire dans la RPN

            Tok::AndAnd => "&&".to_string(),
            Tok::OrOr => "||".to_string(),

            Tok::Lt => "<".to_string(),
            Tok::Gt => ">".to_string(),
            Tok::Le => "<=".to_string(),
            Tok::Ge => ">=".to_string(),
            Tok::EqEq => "==".to_string(),
            Tok::NotEq => "!=".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
