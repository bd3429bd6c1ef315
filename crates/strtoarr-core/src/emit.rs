//! emit.rs — formatage d'une chaîne en initialiseur de tableau C
//!
//! Sortie (deux lignes, reproduites à l'identique d'un appel à l'autre) :
//!
//! ```text
//! static const char topic[2] = { 0x68, 0x69 }; // hi
//! static const uint8_t topic_len = 2;
//! ```
//!
//! Hex minuscule sans zéro de tête (`0x0` pour zéro), séparateur `", "`,
//! pas de virgule finale, un espace avant l'accolade fermante, la valeur
//! d'origine en commentaire de fin de ligne.

use core::fmt::Write;

use crate::{Error, Result};

// ==============================
// Politique d'encodage
// ==============================

/// Comment convertir les caractères de la valeur en éléments du tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ASCII strict : un élément par caractère, tout code point > 0x7f est
    /// refusé ([`Error::NonAscii`]). C'est le défaut : le tableau généré est
    /// déclaré `char`, y glisser un code point multi-octets le tronquerait.
    #[default]
    Ascii,
    /// Un élément par octet UTF-8. La constante `_len` vaut alors le nombre
    /// d'octets, pas le nombre de caractères.
    Utf8,
}

/// Ordinaux à émettre pour `value` selon la politique choisie.
///
/// Refuse la chaîne vide : la référence indexait le dernier caractère et le
/// cas vide est une erreur explicite, pas un tableau `[0]`.
pub fn ordinals(value: &str, encoding: Encoding) -> Result<Vec<u32>> {
    if value.is_empty() {
        return Err(Error::EmptyValue);
    }
    match encoding {
        Encoding::Ascii => value
            .chars()
            .enumerate()
            .map(|(index, ch)| {
                if ch.is_ascii() {
                    Ok(ch as u32)
                } else {
                    Err(Error::NonAscii { ch, index })
                }
            })
            .collect(),
        Encoding::Utf8 => Ok(value.bytes().map(u32::from).collect()),
    }
}

// ==============================
// Émetteur
// ==============================

/// Formate une valeur en déclaration `static const char` + constante `_len`.
///
/// `name` est recopié tel quel dans la sortie, sans validation de grammaire
/// d'identifiant C : passer un nom invalide produit du source invalide, à la
/// charge de l'appelant.
#[derive(Debug, Clone)]
pub struct Emitter {
    name: String,
    encoding: Encoding,
    hex_upper: bool,
}

impl Emitter {
    /// Émetteur par défaut : ASCII strict, hex minuscule.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), encoding: Encoding::Ascii, hex_upper: false }
    }

    /// Change la politique d'encodage.
    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Chiffres hex en majuscules (le préfixe reste `0x`).
    #[must_use]
    pub fn hex_upper(mut self, yes: bool) -> Self {
        self.hex_upper = yes;
        self
    }

    /// Les deux lignes, séparées et terminées par `\n`.
    pub fn emit(&self, value: &str) -> Result<String> {
        let mut out = String::new();
        self.emit_to(value, &mut out)?;
        Ok(out)
    }

    /// Même sortie, écrite dans un writer fourni par l'appelant.
    pub fn emit_to(&self, value: &str, out: &mut impl Write) -> Result<()> {
        let ords = ordinals(value, self.encoding)?;
        log::debug!(
            "emit `{}`: {} element(s), encoding {:?}",
            self.name,
            ords.len(),
            self.encoding
        );

        write!(out, "static const char {}[{}] = {{ ", self.name, ords.len())?;
        for (i, p) in ords.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            if self.hex_upper {
                write!(out, "0x{p:X}")?;
            } else {
                write!(out, "0x{p:x}")?;
            }
        }
        writeln!(out, " }}; // {value}")?;
        writeln!(out, "static const uint8_t {}_len = {};", self.name, ords.len())?;
        Ok(())
    }
}

// ==============================
// Tests
// ==============================
