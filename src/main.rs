//! mkdoc — splice documentation extracted from C headers into a markdown
//! template.
//!
//! The template is copied to the output verbatim except for insertion
//! markers of the form `{{insert "header.h" name ...}}`, each of which is
//! replaced by rendered documentation for the named declarations (or for
//! the whole header, when no names are given). Each expansion is wrapped
//! in generated-section comments so regenerated regions stay identifiable.

mod cache;
mod expand;
mod extract;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mkdoc",
    about = "Extract documentation from C header files into a markdown template"
)]
struct Cli {
    /// Template file containing {{insert ...}} markers
    template: PathBuf,

    /// Output markdown file
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("failed to read template {}", cli.template.display()))?;

    let mut expander = expand::Expander::new();
    let rendered = expander.expand(&template)?;

    fs::write(&cli.output, rendered)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
