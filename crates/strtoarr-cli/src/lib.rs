//! strtoarr-cli/src/lib.rs — CLI lib pour strtoarr
//!
//! Usage :
//!   strtoarr [OPTIONS] <VALUE> <NAME>
//!
//! Deux positionnels obligatoires — la valeur à encoder puis le nom de
//! variable — et le fragment C part sur stdout, prêt à coller dans le
//! firmware. Argument manquant → diagnostic clap sur stderr, code retour
//! non nul. Le cœur de l'encodage vit dans `strtoarr-core`, cette couche ne
//! fait que l'adaptation argv → paramètres.

use anyhow::{Context, Result};
use clap::Parser;
use strtoarr_core::{Emitter, Encoding};

/// Point d’entrée du binaire (à appeler depuis src/main.rs)
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    print!("{}", render(&cli)?);
    Ok(())
}

#[derive(Parser, Debug)]
#[command(
    name = "strtoarr",
    version,
    about = "Convertit une chaîne en initialiseur de tableau C + constante _len"
)]
struct Cli {
    /// Valeur à encoder (username, password, topic, client ID…)
    value: String,

    /// Nom de la variable générée (recopié tel quel, non validé)
    name: String,

    /// Encode la valeur en octets UTF-8 (un élément par octet) au lieu de
    /// refuser les caractères hors ASCII
    #[arg(long)]
    utf8: bool,

    /// Chiffres hexadécimaux en majuscules (le préfixe reste `0x`)
    #[arg(long)]
    upper: bool,
}

/// Les deux lignes de sortie pour les arguments donnés.
fn render(cli: &Cli) -> Result<String> {
    let encoding = if cli.utf8 { Encoding::Utf8 } else { Encoding::Ascii };
    log::debug!("render `{}` (utf8={}, upper={})", cli.name, cli.utf8, cli.upper);
    Emitter::new(&cli.name)
        .encoding(encoding)
        .hex_upper(cli.upper)
        .emit(&cli.value)
        .with_context(|| format!("génération de `{}`", cli.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("strtoarr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn argument_manquant_refuse() {
        assert!(Cli::try_parse_from(["strtoarr"]).is_err());
        assert!(Cli::try_parse_from(["strtoarr", "hi"]).is_err());
    }

    #[test]
    fn deux_positionnels_suffisent() {
        let c = cli(&["hi", "topic"]);
        assert_eq!(c.value, "hi");
        assert_eq!(c.name, "topic");
        assert!(!c.utf8 && !c.upper);
    }

    #[test]
    fn sortie_de_reference() {
        let out = render(&cli(&["hi", "topic"])).unwrap();
        assert_eq!(
            out,
            "static const char topic[2] = { 0x68, 0x69 }; // hi\n\
             static const uint8_t topic_len = 2;\n"
        );
    }

    #[test]
    fn drapeaux_optionnels() {
        let out = render(&cli(&["--utf8", "--upper", "é", "v"])).unwrap();
        assert!(out.starts_with("static const char v[2] = { 0xC3, 0xA9 }"));
    }

    #[test]
    fn valeur_vide_en_erreur() {
        assert!(render(&cli(&["", "v"])).is_err());
    }
}
