// src/noyau/lecture.rs
//
// Codec décimal canonique.
// - écriture : division longue simulée ; chaque reste vu *avant* la
//   multiplication par dix est mémorisé avec l'index du chiffre suivant, et
//   le premier reste revu délimite exactement le bloc répété (crochets).
//   Un reste nul termine sans crochets (décimale finie).
// - lecture : le bloc répété est reconstruit par la forme fermée
//   bloc / ((10^n - 1) * 10^s), ce qui garantit l'aller-retour sans perte
//   quelle que soit la longueur du bloc.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::grandeur::Grandeur;
use super::relatif::Relatif;

pub const SYMBOLE_INFINI: &str = "∞";

fn puissance_de_dix(n: usize) -> BigUint {
    BigUint::from(10u32).pow(n as u32)
}

/* ------------------------ écriture ------------------------ */

/// Écrit la forme décimale canonique d'une grandeur :
/// entier, `entier.decimales`, `entier.avant[periode]` ou `∞`.
pub fn ecrire_grandeur(g: &Grandeur) -> String {
    let num = g.numerateur();
    let den = g.denominateur();

    if den.is_one() {
        return num.to_string();
    }
    if den.is_zero() {
        return SYMBOLE_INFINI.to_string();
    }

    let mut sortie = (num / den).to_string();
    let mut reste = num % den;
    if reste.is_zero() {
        return sortie;
    }
    sortie.push('.');

    let mut chiffres = String::new();
    let mut restes: HashMap<BigUint, usize> = HashMap::new();

    while !reste.is_zero() {
        if let Some(&depart) = restes.get(&reste) {
            // période : crochets autour des chiffres émis depuis ce reste
            chiffres.insert(depart, '[');
            chiffres.push(']');
            break;
        }
        restes.insert(reste.clone(), chiffres.len());
        reste *= 10u32;
        chiffres.push_str(&(&reste / den).to_string());
        reste %= den;
    }

    sortie.push_str(&chiffres);
    sortie
}

/// Comme [`ecrire_grandeur`], précédé de `-` si la valeur est négative.
/// Une grandeur nulle ne porte jamais de signe.
pub fn ecrire_relatif(r: &Relatif) -> String {
    if r.est_negatif() && !r.est_nul() {
        format!("-{}", ecrire_grandeur(r.grandeur()))
    } else {
        ecrire_grandeur(r.grandeur())
    }
}

/* ------------------------ lecture ------------------------ */

/// Lit une grandeur depuis sa forme décimale, crochets compris.
pub fn lire_grandeur(texte: &str) -> Result<Grandeur, String> {
    if texte == SYMBOLE_INFINI {
        return Ok(Grandeur::infini());
    }

    let Some(idx) = texte.find('[') else {
        return lire_sans_crochets(texte);
    };

    let Some(bloc) = texte[idx + 1..].strip_suffix(']') else {
        return Err(format!("crochets mal formés: {texte:?}"));
    };
    if bloc.is_empty() || !bloc.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("bloc répété invalide: {texte:?}"));
    }

    let prefixe = &texte[..idx];
    let base = lire_sans_crochets(prefixe)?;

    // nombre de décimales déjà consommées par le préfixe
    let echelle = match prefixe.find('.') {
        Some(p) => prefixe.len() - p - 1,
        None => 0,
    };

    let d = BigUint::parse_bytes(bloc.as_bytes(), 10).ok_or("bloc répété invalide")?;
    let repete = puissance_de_dix(bloc.len()) - BigUint::one();
    let queue = Grandeur::quotient(d, repete * puissance_de_dix(echelle));

    Ok(base.add(&queue))
}

/// Forme `entier`, `entier.decimales` ou `.decimales` (au moins un chiffre).
fn lire_sans_crochets(texte: &str) -> Result<Grandeur, String> {
    let (avant, apres) = match texte.find('.') {
        Some(p) => (&texte[..p], &texte[p + 1..]),
        None => (texte, ""),
    };
    if avant.is_empty() && apres.is_empty() {
        return Err(format!("nombre invalide: {texte:?}"));
    }

    let entier = if avant.is_empty() {
        BigUint::zero()
    } else {
        BigUint::parse_bytes(avant.as_bytes(), 10)
            .ok_or_else(|| format!("nombre invalide: {texte:?}"))?
    };
    if apres.is_empty() {
        return Ok(Grandeur::entier(entier));
    }

    let decimales = BigUint::parse_bytes(apres.as_bytes(), 10)
        .ok_or_else(|| format!("nombre invalide: {texte:?}"))?;
    let echelle = puissance_de_dix(apres.len());
    Ok(Grandeur::quotient(entier * &echelle + decimales, echelle))
}

/// Comme [`lire_grandeur`], avec un `-` de tête facultatif.
pub fn lire_relatif(texte: &str) -> Result<Relatif, String> {
    let (negatif, reste) = match texte.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, texte),
    };
    Ok(Relatif::de_grandeur(negatif, lire_grandeur(reste)?))
}

/* ------------------------ Display / FromStr ------------------------ */

impl fmt::Display for Grandeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ecrire_grandeur(self))
    }
}

impl FromStr for Grandeur {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lire_grandeur(s)
    }
}

impl fmt::Display for Relatif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ecrire_relatif(self))
    }
}

impl FromStr for Relatif {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lire_relatif(s)
    }
}
