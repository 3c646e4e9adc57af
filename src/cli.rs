use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{DEFAULT_K, DEFAULT_SAMPLES};

/// Extract a brand color palette from a logo image and emit CSS theme
/// variables.
#[derive(Parser, Debug)]
#[command(name = "brandpal", version, about)]
pub struct Args {
    /// Path to the logo image
    #[arg(default_value = "static/images/bridge-nobg.png")]
    pub image: PathBuf,

    /// Pixel sample budget
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Number of color clusters
    #[arg(short = 'k', long = "colors", default_value_t = DEFAULT_K)]
    pub colors: usize,

    /// CSS selector to emit the variables under
    #[arg(long, default_value = ":root")]
    pub selector: String,

    /// Write the CSS to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the theme
    #[arg(long)]
    pub preview: bool,
}
