//! Noyau décimal exact
//!
//! Organisation interne :
//! - grandeur.rs : fraction non signée en précision arbitraire (+ infini)
//! - relatif.rs  : signe + grandeur, règles signées
//! - lecture.rs  : codec décimal canonique (période entre crochets)
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard + évaluation sur pile
//! - eval.rs     : pipeline complet + balayage de texte libre

pub mod eval;
pub mod grandeur;
pub mod jetons;
pub mod lecture;
pub mod relatif;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::{eval_avec_demarche, eval_dans_texte, eval_expression, Demarche};
pub use grandeur::Grandeur;
pub use relatif::Relatif;
