use clap::Parser;

use tg_core::{Pattern, PatternError};

/// tramegen : tables de seuils pour le tramage ordonné.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// N'émettre que la matrice nommée. Alias acceptés : bayer, bayer4,
    /// checkered, stipple_h, ...
    #[arg(long)]
    pub matrix: Option<String>,

    /// Lister le catalogue (nom, dimensions, description) sans émettre.
    /// Prime sur --matrix.
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Resolve the requested selection against the catalog.
    ///
    /// Without `--matrix`, the whole catalog is returned in emission order.
    ///
    /// # Errors
    /// Returns [`PatternError::UnknownPattern`] when the name matches no
    /// catalog entry or alias.
    pub fn selection(&self) -> Result<Vec<Pattern>, PatternError> {
        match self.matrix.as_deref() {
            Some(name) => Ok(vec![name.parse()?]),
            None => Ok(Pattern::ALL.to_vec()),
        }
    }
}
