use anyhow::{bail, Context, Result};
use env_logger::Env;
use ircc::bitmap::Bitmap;
use ircc::demo;
use std::env;

const USAGE: &str = "usage: ircc <words WORD... | dump | swatch | bitmap PATH>";

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let lines = match args.split_first() {
        Some((command, rest)) => match command.as_str() {
            "words" => vec![demo::words(rest, &mut rand::thread_rng())],
            "dump" => demo::dump()?,
            "swatch" => demo::swatch()?,
            "bitmap" => bitmap(rest)?,
            _ => bail!("unknown command {command:?}\n{USAGE}"),
        },

        None => bail!(USAGE),
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn bitmap(args: &[String]) -> Result<Vec<String>> {
    let Some(path) = args.first() else {
        bail!("bitmap needs an image path\n{USAGE}");
    };

    let image = image::open(path).with_context(|| format!("failed to open image {path}"))?;
    log::info!("loaded {path} ({}x{})", image.width(), image.height());

    Ok(Bitmap::new().render_image(&image))
}
