use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::theme::ThemeVars;

/// Destination for the finished theme variables. The page's stylesheet is
/// the real consumer; tests substitute a capturing sink.
pub trait ThemeSink {
    fn apply(&mut self, vars: &ThemeVars) -> Result<()>;
}

/// Writes the variables as a CSS rule, either to a file or to stdout.
pub struct CssSink {
    selector: String,
    output: Option<PathBuf>,
}

impl CssSink {
    pub fn new(selector: impl Into<String>, output: Option<PathBuf>) -> Self {
        Self {
            selector: selector.into(),
            output,
        }
    }

    fn write_to(&self, vars: &ThemeVars, path: &Path) -> Result<()> {
        std::fs::write(path, vars.serialize(&self.selector))
            .with_context(|| format!("failed to write theme to {}", path.display()))
    }
}

impl ThemeSink for CssSink {
    fn apply(&mut self, vars: &ThemeVars) -> Result<()> {
        match &self.output {
            Some(path) => self.write_to(vars, path),
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(vars.serialize(&self.selector).as_bytes())
                    .context("failed to write theme to stdout")
            }
        }
    }
}
