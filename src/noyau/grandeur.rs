// src/noyau/grandeur.rs
//
// Fraction non signée en précision arbitraire.
// - numérateur / dénominateur : BigUint
// - dénominateur nul = infini (sentinelle, pas une erreur)
// - valeurs immuables : chaque opération rend une nouvelle Grandeur
//
// Les constructions passent par `quotient`, qui réduit par le pgcd : toutes
// les grandeurs en circulation sont en termes irréductibles (sauf l'infini,
// dont le numérateur est indifférent). Les comparaisons croisent les
// produits, jamais de division flottante.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub struct Grandeur {
    numerateur: BigUint,
    denominateur: BigUint,
}

/* ------------------------ outils entiers ------------------------ */

/// Plus grand commun diviseur (Euclide).
fn pgcd(a: BigUint, b: BigUint) -> BigUint {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// n^k par carrés successifs, exposant BigUint.
fn puissance(base: &BigUint, exp: &BigUint) -> BigUint {
    let mut acc = BigUint::one();
    let mut b = base.clone();
    let mut e = exp.clone();

    while !e.is_zero() {
        if (&e % 2u32).is_one() {
            acc *= &b;
        }
        e /= 2u32;
        if !e.is_zero() {
            b = &b * &b;
        }
    }
    acc
}

/* ------------------------ constructeurs nommés ------------------------ */

impl Grandeur {
    /// Construit `numerateur / denominateur`, réduit en termes irréductibles.
    /// Un dénominateur nul donne l'infini et n'est pas réduit.
    pub fn quotient(numerateur: BigUint, denominateur: BigUint) -> Self {
        if denominateur.is_zero() {
            return Self {
                numerateur,
                denominateur,
            };
        }
        let commun = pgcd(numerateur.clone(), denominateur.clone());
        Self {
            numerateur: numerateur / &commun,
            denominateur: denominateur / &commun,
        }
    }

    pub fn entier(n: BigUint) -> Self {
        Self {
            numerateur: n,
            denominateur: BigUint::one(),
        }
    }

    pub fn infini() -> Self {
        Self {
            numerateur: BigUint::one(),
            denominateur: BigUint::zero(),
        }
    }

    pub fn numerateur(&self) -> &BigUint {
        &self.numerateur
    }

    pub fn denominateur(&self) -> &BigUint {
        &self.denominateur
    }

    pub fn est_inf(&self) -> bool {
        self.denominateur.is_zero()
    }

    pub fn est_nul(&self) -> bool {
        !self.est_inf() && self.numerateur.is_zero()
    }
}

/* ------------------------ arithmétique ------------------------ */

impl Grandeur {
    pub fn add(&self, autre: &Self) -> Self {
        Self::quotient(
            &self.numerateur * &autre.denominateur + &autre.numerateur * &self.denominateur,
            &self.denominateur * &autre.denominateur,
        )
    }

    /// Précondition : `self >= autre` (une grandeur ne descend pas sous
    /// zéro ; la couche signée s'en charge en soustrayant toujours la plus
    /// petite grandeur de la plus grande).
    pub fn sub(&self, autre: &Self) -> Self {
        Self::quotient(
            &self.numerateur * &autre.denominateur - &autre.numerateur * &self.denominateur,
            &self.denominateur * &autre.denominateur,
        )
    }

    pub fn mul(&self, autre: &Self) -> Self {
        Self::quotient(
            &self.numerateur * &autre.numerateur,
            &self.denominateur * &autre.denominateur,
        )
    }

    /// Aucune garde sur le diviseur : un diviseur de grandeur nulle donne un
    /// dénominateur nul, c'est-à-dire l'infini, jamais une erreur.
    pub fn div(&self, autre: &Self) -> Self {
        Self::quotient(
            &self.numerateur * &autre.denominateur,
            &self.denominateur * &autre.numerateur,
        )
    }

    /// Reste sur la forme "produit des dénominateurs".
    /// Deux cas assumés (conventions du modèle de valeurs, pas des théorèmes) :
    /// - `self` infini : renvoie `autre` inchangé ;
    /// - numérateur de `autre` nul : renvoie zéro (pas l'infini, pas d'erreur).
    pub fn modulo(&self, autre: &Self) -> Self {
        if self.est_inf() {
            return autre.clone();
        }
        if autre.numerateur.is_zero() {
            return Self::entier(BigUint::zero());
        }
        Self::quotient(
            (&self.numerateur * &autre.denominateur) % (&self.denominateur * &autre.numerateur),
            &self.denominateur * &autre.denominateur,
        )
    }

    /// Élévation à la puissance `floor(autre)`.
    /// Un exposant infini se renvoie lui-même (passe-plat assumé). La couche
    /// non signée ne voit que des exposants positifs ou nuls ; `0^0` vaut 1,
    /// donc `inf.pow(0)` retombe sur 1 par la formule elle-même.
    pub fn pow(&self, autre: &Self) -> Self {
        if autre.est_inf() {
            return autre.clone();
        }
        let k = &autre.numerateur / &autre.denominateur;
        Self::quotient(
            puissance(&self.numerateur, &k),
            puissance(&self.denominateur, &k),
        )
    }

    /// Partie entière par division tronquée ; l'infini se propage tel quel.
    pub fn floor(&self) -> Self {
        if self.est_inf() {
            return self.clone();
        }
        Self::entier(&self.numerateur / &self.denominateur)
    }
}

/* ------------------------ comparaisons ------------------------ */

// Ordre total : l'infini majore strictement tout fini, deux infinis
// coïncident, le reste se compare par produits croisés.

impl Ord for Grandeur {
    fn cmp(&self, autre: &Self) -> Ordering {
        match (self.est_inf(), autre.est_inf()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => (&self.numerateur * &autre.denominateur)
                .cmp(&(&autre.numerateur * &self.denominateur)),
        }
    }
}

impl PartialOrd for Grandeur {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}

impl PartialEq for Grandeur {
    fn eq(&self, autre: &Self) -> bool {
        self.cmp(autre) == Ordering::Equal
    }
}

impl Eq for Grandeur {}

impl From<u64> for Grandeur {
    fn from(n: u64) -> Self {
        Self::entier(BigUint::from(n))
    }
}

impl From<BigUint> for Grandeur {
    fn from(n: BigUint) -> Self {
        Self::entier(n)
    }
}
