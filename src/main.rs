// Example runner for the `patch_histogram` library.
//
// Usage: patch_histogram <image> <bins> [x y width height] [--compare <image2>] [--out <file>]
//
// Loads the image as RGBA8, prints the concatenated per-channel signature of the
// region (the whole image by default), optionally scores it against the same
// region of a second image and optionally writes it to a file.

use patch_histogram::histogram::*;
use std::env;
use tracing::{Level, info};

const USAGE: &str =
    "Usage: patch_histogram <image> <bins> [x y width height] [--compare <image2>] [--out <file>]";

struct Arguments {
    image_path: String,
    bins: usize,
    region: Option<Region>,
    compare_path: Option<String>,
    output_path: Option<String>,
}

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn parse_arguments(args: &[String]) -> Option<Arguments> {
    let mut positional = Vec::new();
    let mut compare_path = None;
    let mut output_path = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--compare" => compare_path = Some(iter.next()?.clone()),
            "--out" => output_path = Some(iter.next()?.clone()),
            _ => positional.push(arg.as_str()),
        }
    }

    let (image_path, bins, rest) = match positional.as_slice() {
        [image_path, bins, rest @ ..] => (image_path.to_string(), bins.parse().ok()?, rest),
        _ => return None,
    };

    let region = match rest {
        [] => None,
        [x, y, width, height] => Some(Region::new(
            x.parse().ok()?,
            y.parse().ok()?,
            width.parse().ok()?,
            height.parse().ok()?,
        )),
        _ => return None,
    };

    Some(Arguments {
        image_path,
        bins,
        region,
        compare_path,
        output_path,
    })
}

fn main() -> Result<(), HistogramError> {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let Some(arguments) = parse_arguments(&args) else {
        println!("{USAGE}");
        return Ok(());
    };

    let image = image::open(&arguments.image_path)?.to_rgba8();
    let region = arguments
        .region
        .unwrap_or_else(|| Region::whole(image.width(), image.height()));
    let config = HistogramConfig::<u8>::full_range(arguments.bins);

    let signature = compute_concatenated_histogram_with(&image, &region, &config)?;
    info!(
        image = %arguments.image_path,
        ?region,
        bins = signature.len(),
        "signature computed"
    );
    output_histogram(&signature)?;
    println!();

    if let Some(compare_path) = &arguments.compare_path {
        let other = image::open(compare_path)?.to_rgba8();
        let other_signature = compute_concatenated_histogram_with(&other, &region, &config)?;
        let score = histogram_intersection(&signature, &other_signature);
        println!("intersection score: {score}");
    }

    if let Some(output_path) = &arguments.output_path {
        write_histogram(&signature, output_path)?;
        info!(path = %output_path, "signature written");
    }

    Ok(())
}
