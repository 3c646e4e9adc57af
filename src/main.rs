use anyhow::Result;
use clap::Parser;

use brandpal::cli::Args;
use brandpal::decode::{FileDecoder, ImageDecoder};
use brandpal::pipeline::{extract_palette, ExtractOptions};
use brandpal::preview;
use brandpal::sink::{CssSink, ThemeSink};
use brandpal::theme::ThemeVars;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let buffer = FileDecoder.decode(&args.image)?;
    let options = ExtractOptions {
        samples: args.samples,
        k: args.colors,
    };

    let palette = extract_palette(&buffer, &options);
    let Some(vars) = palette.as_deref().and_then(ThemeVars::from_palette) else {
        log::warn!(
            "no palette extracted from {}, leaving theme unchanged",
            args.image.display()
        );
        return Ok(());
    };

    if args.preview {
        preview::print_preview(&vars)?;
    }

    let mut sink = CssSink::new(args.selector, args.output);
    sink.apply(&vars)
}
