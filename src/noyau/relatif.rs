// src/noyau/relatif.rs
//
// Rationnel signé : un drapeau de signe + une Grandeur.
// Le drapeau n'est jamais nettoyé de force : une grandeur nulle est
// "sans signe" pour l'égalité et l'ordre, mais le champ peut rester vrai.

use num_bigint::BigUint;
use num_traits::Zero;
use std::cmp::Ordering;

use super::grandeur::Grandeur;

#[derive(Clone, Debug)]
pub struct Relatif {
    negatif: bool,
    grandeur: Grandeur,
}

/* ------------------------ constructeurs nommés ------------------------ */

impl Relatif {
    pub fn de_grandeur(negatif: bool, grandeur: Grandeur) -> Self {
        Self { negatif, grandeur }
    }

    pub fn quotient(negatif: bool, numerateur: BigUint, denominateur: BigUint) -> Self {
        Self::de_grandeur(negatif, Grandeur::quotient(numerateur, denominateur))
    }

    pub fn entier(n: i64) -> Self {
        Self::de_grandeur(n < 0, Grandeur::entier(BigUint::from(n.unsigned_abs())))
    }

    /// Coercition booléenne : vrai donne 1, faux donne 0.
    pub fn de_bool(b: bool) -> Self {
        Self::entier(if b { 1 } else { 0 })
    }

    pub fn grandeur(&self) -> &Grandeur {
        &self.grandeur
    }

    pub fn est_negatif(&self) -> bool {
        self.negatif
    }

    pub fn est_inf(&self) -> bool {
        self.grandeur.est_inf()
    }

    pub fn est_nul(&self) -> bool {
        self.grandeur.est_nul()
    }
}

/* ------------------------ signe / grandeur ------------------------ */

impl Relatif {
    pub fn abs(&self) -> Self {
        Self::de_grandeur(false, self.grandeur.clone())
    }

    pub fn neg(&self) -> Self {
        Self::de_grandeur(!self.negatif, self.grandeur.clone())
    }

    /// Mêmes signes : somme des grandeurs, signe commun.
    /// Signes opposés : la plus grande grandeur impose son signe, la plus
    /// petite est soustraite de la plus grande.
    pub fn add(&self, autre: &Self) -> Self {
        if self.negatif == autre.negatif {
            Self::de_grandeur(self.negatif, self.grandeur.add(&autre.grandeur))
        } else if self.grandeur > autre.grandeur {
            Self::de_grandeur(self.negatif, self.grandeur.sub(&autre.grandeur))
        } else {
            Self::de_grandeur(autre.negatif, autre.grandeur.sub(&self.grandeur))
        }
    }

    pub fn sub(&self, autre: &Self) -> Self {
        self.add(&autre.neg())
    }

    pub fn mul(&self, autre: &Self) -> Self {
        Self::de_grandeur(
            self.negatif != autre.negatif,
            self.grandeur.mul(&autre.grandeur),
        )
    }

    pub fn div(&self, autre: &Self) -> Self {
        Self::de_grandeur(
            self.negatif != autre.negatif,
            self.grandeur.div(&autre.grandeur),
        )
    }

    /// Le reste garde le signe de l'opérande gauche (convention assumée,
    /// pas le modulo mathématique).
    pub fn modulo(&self, autre: &Self) -> Self {
        Self::de_grandeur(self.negatif, self.grandeur.modulo(&autre.grandeur))
    }

    /// Le résultat garde le signe de la base, quelle que soit la parité de
    /// l'exposant ; l'exposant est pris en grandeur (son signe est ignoré).
    /// Convention assumée : `(-2)^2` vaut -4 ici, et `2^-3` vaut 8.
    pub fn pow(&self, autre: &Self) -> Self {
        Self::de_grandeur(self.negatif, self.grandeur.pow(&autre.grandeur))
    }

    /// Partie entière tronquée vers zéro, signe conservé.
    pub fn floor(&self) -> Self {
        Self::de_grandeur(self.negatif, self.grandeur.floor())
    }

    /// Vrai dès que le numérateur de la grandeur est non nul, signe ignoré.
    pub fn to_bool(&self) -> bool {
        !self.grandeur.numerateur().is_zero()
    }
}

/* ------------------------ comparaisons ------------------------ */

impl Ord for Relatif {
    fn cmp(&self, autre: &Self) -> Ordering {
        // +0 et -0 coïncident
        if self.grandeur.est_nul() && autre.grandeur.est_nul() {
            return Ordering::Equal;
        }
        match (self.negatif, autre.negatif) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.grandeur.cmp(&autre.grandeur),
            // deux négatifs : la plus grande grandeur est la plus petite valeur
            (true, true) => autre.grandeur.cmp(&self.grandeur),
        }
    }
}

impl PartialOrd for Relatif {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}

impl PartialEq for Relatif {
    fn eq(&self, autre: &Self) -> bool {
        self.cmp(autre) == Ordering::Equal
    }
}

impl Eq for Relatif {}

impl From<i64> for Relatif {
    fn from(n: i64) -> Self {
        Self::entier(n)
    }
}
