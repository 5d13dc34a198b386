// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> évaluation sur pile.
//
// Règles:
// - priorités : 5 (droite) ~ ! ; 4 (droite) ** ; 3 (gauche) * / % ;
//   2 (gauche) + - ; 1 (gauche) < > <= >= == != ; 0 (gauche) && ||
// - moins unaire : un `-` rencontré quand on attend une valeur est requalifié
//   en `Neg`. La décision vient d'un état explicite attend-valeur /
//   attend-opérateur, pas d'un retour en arrière sur les jetons.

use super::jetons::Tok;
use super::relatif::Relatif;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Neg | Tok::Bang => 5,
        Tok::StarStar => 4,
        Tok::Star | Tok::Slash | Tok::Percent => 3,
        Tok::Plus | Tok::Minus => 2,
        Tok::Lt | Tok::Gt | Tok::Le | Tok::Ge | Tok::EqEq | Tok::NotEq => 1,
        _ => 0,
    }
}

fn est_associatif_droite(t: &Tok) -> bool {
    matches!(t, Tok::StarStar | Tok::Neg | Tok::Bang)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut sortie: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Vrai tant qu'on attend une valeur (début, après un opérateur, après
    // une parenthèse ouvrante). C'est lui qui décide du moins unaire.
    let mut attend_valeur = true;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Tok::Num(_) => {
                sortie.push(jeton);
                attend_valeur = false;
            }

            Tok::LPar => {
                ops.push(jeton);
                attend_valeur = true;
            }

            Tok::RPar => {
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => sortie.push(op),
                        None => return Err("parenthèse fermante sans ouvrante".into()),
                    }
                }
                attend_valeur = false;
            }

            _ => {
                let op = if matches!(jeton, Tok::Minus) && attend_valeur {
                    Tok::Neg
                } else {
                    jeton
                };

                // dépile tant que l'opérateur du haut est strictement plus
                // prioritaire, ou de même priorité avec associativité gauche
                while let Some(haut) = ops.last() {
                    if matches!(haut, Tok::LPar) {
                        break;
                    }

                    let p_haut = precedence(haut);
                    let p_op = precedence(&op);

                    let doit_depiler = if est_associatif_droite(&op) {
                        p_haut > p_op
                    } else {
                        p_haut >= p_op
                    };

                    if doit_depiler {
                        sortie.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(op);
                attend_valeur = true;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        sortie.push(op);
    }

    Ok(sortie)
}

/// Évalue une RPN sur une pile de valeurs signées.
///
/// Les opérateurs binaires dépilent droite puis gauche ; les comparaisons et
/// les connecteurs logiques produisent 0 ou 1. À la fin, la pile doit
/// contenir exactement une valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<Relatif, String> {
    let mut pile: Vec<Relatif> = Vec::new();

    for jeton in rpn {
        match jeton {
            Tok::Num(g) => pile.push(Relatif::de_grandeur(false, g.clone())),

            Tok::Bang => {
                let x = pile.pop().ok_or("expression invalide")?;
                pile.push(Relatif::de_bool(!x.to_bool()));
            }

            Tok::Neg => {
                let x = pile.pop().ok_or("expression invalide")?;
                pile.push(x.neg());
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),

            _ => {
                let droite = pile.pop().ok_or("expression invalide")?;
                let gauche = pile.pop().ok_or("expression invalide")?;

                let v = match jeton {
                    Tok::Plus => gauche.add(&droite),
                    Tok::Minus => gauche.sub(&droite),
                    Tok::Star => gauche.mul(&droite),
                    Tok::Slash => gauche.div(&droite),
                    Tok::Percent => gauche.modulo(&droite),
                    Tok::StarStar => gauche.pow(&droite),

                    Tok::EqEq => Relatif::de_bool(gauche == droite),
                    Tok::NotEq => Relatif::de_bool(gauche != droite),
                    Tok::Lt => Relatif::de_bool(gauche < droite),
                    Tok::Gt => Relatif::de_bool(gauche > droite),
                    Tok::Le => Relatif::de_bool(gauche <= droite),
                    Tok::Ge => Relatif::de_bool(gauche >= droite),

                    Tok::AndAnd => Relatif::de_bool(gauche.to_bool() && droite.to_bool()),
                    Tok::OrOr => Relatif::de_bool(gauche.to_bool() || droite.to_bool()),

                    _ => unreachable!(),
                };

                pile.push(v);
            }
        }
    }

    if pile.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(pile.pop().unwrap())
}
