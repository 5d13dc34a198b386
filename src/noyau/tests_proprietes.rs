//! Tests de propriétés : codec décimal, algèbre de l'infini, zéros signés,
//! règles de signe, totalité de la comparaison.
//!
//! Les campagnes croisées passent par un oracle `BigRational` (num-rational,
//! dépendance de test uniquement) : mêmes valeurs, autre implémentation.
//! L'oracle ne sait représenter ni l'infini ni -0, donc ces cas sont vérifiés
//! à part, sur les grilles dédiées.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::One;
use std::cmp::Ordering;

use super::grandeur::Grandeur;
use super::relatif::Relatif;

fn gr(n: u64, d: u64) -> Grandeur {
    Grandeur::quotient(BigUint::from(n), BigUint::from(d))
}

fn rel(texte: &str) -> Relatif {
    texte
        .parse()
        .unwrap_or_else(|e| panic!("parse({texte:?}) erreur: {e}"))
}

/// Valeur exacte vue par l'oracle (valeurs finies seulement).
fn oracle(r: &Relatif) -> BigRational {
    let mut num = BigInt::from(r.grandeur().numerateur().clone());
    if r.est_negatif() {
        num = -num;
    }
    BigRational::new(num, BigInt::from(r.grandeur().denominateur().clone()))
}

/// Petite grille signée : n/d pour n ∈ 0..=4, d ∈ 1..=4, deux signes.
/// Contient +0 et -0, des égaux non triviaux (1/2 et 2/4), etc.
fn grille() -> Vec<Relatif> {
    let mut v = Vec::new();
    for negatif in [false, true] {
        for n in 0u64..=4 {
            for d in 1u64..=4 {
                v.push(Relatif::de_grandeur(
                    negatif,
                    Grandeur::quotient(BigUint::from(n), BigUint::from(d)),
                ));
            }
        }
    }
    v
}

/* ------------------------ codec décimal ------------------------ */

#[test]
fn prop_ecriture_finie_denominateurs_2_et_5() {
    assert_eq!(gr(1, 4).to_string(), "0.25");
    assert_eq!(gr(3, 8).to_string(), "0.375");
    assert_eq!(gr(7, 50).to_string(), "0.14");
    assert_eq!(gr(5, 1).to_string(), "5");
    assert_eq!(gr(0, 3).to_string(), "0");

    // dénominateur sans autre facteur premier que 2 et 5 : jamais de crochets
    for d in [2u64, 4, 5, 8, 10, 16, 20, 25, 32, 40, 64, 125, 200] {
        for n in 1..=6 {
            let s = gr(n, d).to_string();
            assert!(!s.contains('['), "{n}/{d} -> {s}");
        }
    }
}

#[test]
fn prop_ecriture_periodique_crochets_exacts() {
    assert_eq!(gr(1, 3).to_string(), "0.[3]");
    assert_eq!(gr(1, 9).to_string(), "0.[1]");
    assert_eq!(gr(1, 7).to_string(), "0.[142857]");
    assert_eq!(gr(22, 7).to_string(), "3.[142857]");
    assert_eq!(gr(1, 11).to_string(), "0.[09]");

    // périodes qui ne démarrent pas juste après la virgule
    assert_eq!(gr(1, 6).to_string(), "0.1[6]");
    assert_eq!(gr(1, 12).to_string(), "0.08[3]");
}

#[test]
fn prop_lecture_forme_fermee() {
    assert_eq!("0.[3]".parse::<Grandeur>().unwrap(), gr(1, 3));
    assert_eq!("0.1[6]".parse::<Grandeur>().unwrap(), gr(1, 6));
    assert_eq!("0.08[3]".parse::<Grandeur>().unwrap(), gr(1, 12));
    assert_eq!("3.[142857]".parse::<Grandeur>().unwrap(), gr(22, 7));
    assert_eq!("2[7]".parse::<Grandeur>().unwrap(), gr(25, 9));
    assert_eq!(rel("-0.1[6]"), Relatif::de_grandeur(true, gr(1, 6)));
}

#[test]
fn prop_lectures_invalides() {
    assert!("".parse::<Grandeur>().is_err());
    assert!(".".parse::<Grandeur>().is_err());
    assert!("1.[".parse::<Grandeur>().is_err());
    assert!("1.2[]".parse::<Grandeur>().is_err());
    assert!("1.2[3".parse::<Grandeur>().is_err());
    assert!("1a2".parse::<Grandeur>().is_err());
}

#[test]
fn prop_aller_retour_codec() {
    for d in 1u64..=60 {
        for n in 0u64..=15 {
            let g = gr(n, d);
            let texte = g.to_string();
            let relu: Grandeur = texte
                .parse()
                .unwrap_or_else(|e| panic!("relecture {texte:?} ({n}/{d}) erreur: {e}"));
            assert_eq!(relu, g, "{n}/{d} -> {texte}");
        }
    }

    // périodes longues (dénominateurs premiers)
    for d in [97u64, 983, 9967] {
        let g = gr(1, d);
        let relu: Grandeur = g.to_string().parse().unwrap();
        assert_eq!(relu, g, "1/{d}");
    }
}

/* ------------------------ infini ------------------------ */

#[test]
fn prop_algebre_de_l_infini() {
    let inf: Grandeur = "∞".parse().unwrap();
    assert!(inf.est_inf());
    assert!(inf.add(&gr(5, 1)).est_inf());
    assert!(gr(5, 1) < inf);
    assert!(inf > gr(5, 1));
    assert_eq!(inf.cmp(&Grandeur::infini()), Ordering::Equal);
    assert_eq!(inf.to_string(), "∞");

    // côté signé : -∞ < fini < ∞
    let moins_inf = rel("-∞");
    assert!(moins_inf.est_inf());
    assert!(moins_inf < rel("5"));
    assert!(rel("5") < rel("∞"));
    assert_eq!(moins_inf.to_string(), "-∞");
}

#[test]
fn prop_cas_assumes_division_et_modulo() {
    // division par une grandeur nulle : l'infini, jamais une erreur
    assert!(gr(1, 1).div(&gr(0, 1)).est_inf());
    // modulo par une grandeur nulle : zéro (pas l'infini, pas d'erreur)
    assert!(gr(5, 1).modulo(&gr(0, 1)).est_nul());
    // un infini à gauche du modulo rend l'opérande droite inchangée
    assert_eq!(Grandeur::infini().modulo(&gr(3, 4)), gr(3, 4));
}

/* ------------------------ zéro signé ------------------------ */

#[test]
fn prop_zero_sans_signe() {
    assert_eq!(rel("0"), rel("-0"));
    assert_eq!(rel("-0").to_string(), "0");

    let z = rel("5").sub(&rel("5"));
    assert_eq!(z, rel("0"));
    assert!(!z.to_string().starts_with('-'));

    assert_eq!(rel("0").sub(&rel("0")), rel("0"));
}

/* ------------------------ règles signées ------------------------ */

#[test]
fn prop_regle_des_signes_addition() {
    // mêmes signes : les grandeurs s'additionnent
    assert_eq!(rel("-3.5").add(&rel("-1.25")).to_string(), "-4.75");
    // signes opposés : la plus grande grandeur impose son signe
    assert_eq!(rel("-3.5").add(&rel("2")).to_string(), "-1.5");
    assert_eq!(rel("2").add(&rel("-3.5")).to_string(), "-1.5");
    assert_eq!(rel("3.5").add(&rel("-2")).to_string(), "1.5");
}

#[test]
fn prop_puissance_garde_le_signe_de_la_base() {
    assert_eq!(rel("-2").pow(&rel("2")).to_string(), "-4");
    assert_eq!(rel("2").pow(&rel("-3")).to_string(), "8");
    assert_eq!(rel("2.5").pow(&rel("2")).to_string(), "6.25");
    assert!(rel("2").pow(&rel("∞")).est_inf());
}

#[test]
fn prop_floor_abs_neg_bool() {
    assert_eq!(rel("3.7").floor().to_string(), "3");
    // troncature vers zéro, signe conservé
    assert_eq!(rel("-3.7").floor().to_string(), "-3");
    assert_eq!(rel("-3.7").abs().to_string(), "3.7");
    assert_eq!(rel("3.7").neg().to_string(), "-3.7");
    assert!(rel("0.1").to_bool());
    assert!(rel("-0.1").to_bool());
    assert!(!rel("0").to_bool());
}

/* ------------------------ campagnes croisées (oracle) ------------------------ */

#[test]
fn prop_arith_croisee_avec_oracle() {
    let valeurs = grille();
    for a in &valeurs {
        for b in &valeurs {
            assert_eq!(oracle(&a.add(b)), oracle(a) + oracle(b), "add a={a} b={b}");
            assert_eq!(oracle(&a.sub(b)), oracle(a) - oracle(b), "sub a={a} b={b}");
            assert_eq!(oracle(&a.mul(b)), oracle(a) * oracle(b), "mul a={a} b={b}");

            if b.est_nul() {
                assert!(a.div(b).est_inf(), "div a={a}");
            } else {
                assert_eq!(oracle(&a.div(b)), oracle(a) / oracle(b), "div a={a} b={b}");
            }
        }
    }
}

#[test]
fn prop_comparaison_totale() {
    let valeurs = grille();
    for a in &valeurs {
        for b in &valeurs {
            let moins = a < b;
            let plus = a > b;
            let egal = a == b;

            // exactement une des trois issues
            assert_eq!(
                [moins, plus, egal].iter().filter(|x| **x).count(),
                1,
                "a={a} b={b}"
            );

            let coherent = match a.cmp(b) {
                Ordering::Less => moins,
                Ordering::Greater => plus,
                Ordering::Equal => egal,
            };
            assert!(coherent, "cmp incohérent: a={a} b={b}");

            // l'oracle écrase -0 sur 0, c'est exactement notre convention
            assert_eq!(oracle(a).cmp(&oracle(b)), a.cmp(b), "oracle a={a} b={b}");
        }
    }
}

/* ------------------------ réduction en chaîne ------------------------ */

#[test]
fn prop_denominateurs_reduits_en_chaine() {
    let tiers = gr(1, 3);
    let mut acc = gr(0, 1);
    for _ in 0..99 {
        acc = acc.add(&tiers);
    }
    // 99 tiers font 33 : le dénominateur est retombé à 1
    assert_eq!(acc, gr(33, 1));
    assert!(acc.denominateur().is_one());

    let cent_tiers = acc.add(&tiers);
    assert_eq!(*cent_tiers.denominateur(), BigUint::from(3u32));
}
