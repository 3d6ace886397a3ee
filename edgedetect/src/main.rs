use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fast_sobel as fs;
use fast_sobel::{EdgeDetector, FilterOptions, IntoGrayscale};
use image::{GrayImage, ImageFormat, ImageReader};
use log::debug;

mod structs;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source PNG or JPEG image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Path to result image file. Extension of the source image format
    /// is appended if it is missing.
    #[clap(value_parser, default_value = "sobel")]
    destination_path: PathBuf,

    /// Kernels used to compute gradients
    #[clap(short, long, value_enum, default_value_t = structs::FilterVariant::Sobel)]
    filter: structs::FilterVariant,

    /// Implementation of the filter
    #[clap(short, long, value_enum, default_value_t = structs::Method::Simd)]
    method: structs::Method,

    /// Overwrite destination file
    #[clap(short, long, action)]
    overwrite: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    detect_edges(&cli)
}

fn detect_edges(cli: &Cli) -> Result<()> {
    let (src_image, format) = open_source_image(&cli.source_path)?;
    let result_path = result_path(&cli.destination_path, format)?;
    if result_path.exists() && !cli.overwrite {
        return Err(anyhow!(
            "Destination path {:?} already exists.",
            result_path
        ));
    }

    let detector = EdgeDetector::new();
    let options = FilterOptions::new()
        .variant(fs::FilterVariant::from(cli.filter))
        .method(cli.method.into());
    debug!(
        "Filter the source image by {:?} with {:?} method",
        cli.filter, cli.method
    );
    let dst_image = detector
        .filter(&src_image, &options)
        .with_context(|| "Failed to filter image")?;

    debug!("Save the result image into the file {:?}", result_path);
    let dst_image = GrayImage::try_from(dst_image)
        .with_context(|| "Failed to create result image pixels container")?;
    dst_image
        .save_with_format(&result_path, format)
        .with_context(|| "Failed to save the result image")?;
    Ok(())
}

fn open_source_image(source_path: &Path) -> Result<(fs::GrayscaleImage, ImageFormat)> {
    debug!("Opening the source image {:?}", source_path);
    let reader = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?;
    let format = match reader.format() {
        Some(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => format,
        Some(format) => return Err(anyhow!("Unsupported format of source image: {:?}", format)),
        None => return Err(anyhow!("Unknown format of source image")),
    };
    let image = reader
        .decode()
        .with_context(|| "Failed to decode source image")?;
    debug!(
        "Convert {}x{} {:?} image into grayscale",
        image.width(),
        image.height(),
        image.color()
    );
    Ok((image.to_grayscale(), format))
}

/// Appends extension of the image format to the path if the path
/// doesn't have it yet.
fn result_path(path: &Path, format: ImageFormat) -> Result<PathBuf> {
    let ext = match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpg",
        _ => return Err(anyhow!("Can't encode image into {:?} format", format)),
    };
    let has_ext = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));
    if has_ext {
        return Ok(path.to_path_buf());
    }
    let mut path = OsString::from(path);
    path.push(".");
    path.push(ext);
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn extension_of_result_path() {
        let cases = [
            ("sobel", ImageFormat::Png, "sobel.png"),
            ("sobel", ImageFormat::Jpeg, "sobel.jpg"),
            ("out/edges.png", ImageFormat::Png, "out/edges.png"),
            ("edges.PNG", ImageFormat::Png, "edges.PNG"),
            ("edges.png", ImageFormat::Jpeg, "edges.png.jpg"),
        ];
        for (path, format, expected) in cases {
            let result = result_path(Path::new(path), format).unwrap();
            assert_eq!(result, PathBuf::from(expected));
        }
        assert!(result_path(Path::new("sobel"), ImageFormat::Gif).is_err());
    }
}
