//! strtoarr-core — émission de tableaux d'octets C depuis une chaîne
//!
//! Le crate fournit :
//! - [`Emitter`] : formate une valeur texte en initialiseur
//!   `static const char <name>[N] = { 0x.., ... }; // <valeur>` suivi de la
//!   constante `static const uint8_t <name>_len = N;`
//! - [`Encoding`] : politique d'encodage (ASCII strict ou octets UTF-8)
//! - [`ordinals`] : extraction des ordinaux, exposée pour les outils/tests
//!
//! Conçu pour coller un fragment de source dans un firmware (username,
//! password, topic, client ID → `os_memcpy()` vers la session MQTT).
//! Aucune E/S ici : la couche CLI décide où écrire.

#![forbid(unsafe_code)]

pub mod emit;

pub use emit::{ordinals, Emitter, Encoding};

// ---------- Erreurs & Résultat ----------
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// La valeur à encoder est vide (un tableau `[0]` n'a aucun sens côté C).
    #[error("empty value: nothing to encode")]
    EmptyValue,

    /// Caractère hors ASCII en mode [`Encoding::Ascii`]. Le tableau cible est
    /// déclaré `char`, un code point multi-octets y serait tronqué en silence.
    #[error("non-ascii char {ch:?} at index {index} (use utf8 encoding)")]
    NonAscii { ch: char, index: usize },

    /// Erreur du writer sous-jacent.
    #[error("fmt: {0}")]
    Fmt(#[from] core::fmt::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
