use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tg_core::Pattern;
use tg_emit::{write_blocks, write_listing};

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging. env_logger écrit sur stderr : stdout ne
    //    porte que les tables.
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // 3. Mode liste : catalogue sans émission de tables
    if cli.list {
        return finish(list_catalog(&mut out), &mut out);
    }

    // 4. Résoudre la sélection (nom inconnu : remonte par anyhow)
    let patterns = cli.selection()?;

    // 5. Émettre les blocs dans l'ordre reçu
    finish(emit_tables(&mut out, &patterns), &mut out)
}

/// Écrit les blocs sélectionnés puis vide le tampon de sortie.
///
/// Le flush explicite fait remonter une panne du flux encore masquée par
/// le tampon de `StdoutLock`.
fn emit_tables<W: Write>(out: &mut W, patterns: &[Pattern]) -> io::Result<()> {
    write_blocks(out, patterns)?;
    out.flush()?;
    log::info!("Émission terminée : {} bloc(s)", patterns.len());
    Ok(())
}

/// Liste le catalogue puis vide le tampon de sortie.
fn list_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    write_listing(out)?;
    out.flush()
}

/// Termine l'exécution : code 0 si tout est écrit, sinon `error - {détails}`
/// sur stdout puis code 1. Seule une panne du flux de sortie arrive ici.
fn finish<W: Write>(outcome: io::Result<()>, out: &mut W) -> Result<()> {
    if let Err(err) = outcome {
        // Le flux est peut-être déjà mort : rapport best-effort.
        let _ = writeln!(out, "error - {err}");
        std::process::exit(1);
    }
    Ok(())
}
