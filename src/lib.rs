//! Décimale exacte — arithmétique rationnelle en précision arbitraire,
//! sans flottants.
//!
//! - [`Grandeur`] : fraction non signée (numérateur / dénominateur big int),
//!   avec un infini sentinelle (dénominateur nul).
//! - [`Relatif`] : un drapeau de signe + une grandeur, règles signées.
//! - [`eval_expression`] : évaluateur infixe (jetons → RPN → pile).
//! - [`eval_dans_texte`] : balayage best-effort d'un texte libre.
//!
//! La forme décimale canonique note la période entre crochets :
//! `1/6` s'écrit `0.1[6]`, et cette écriture se relit exactement
//! (aller-retour sans perte, quelle que soit la longueur du bloc).

pub mod noyau;

pub use noyau::{eval_avec_demarche, eval_dans_texte, eval_expression, Demarche, Grandeur, Relatif};
