use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use ascii_shade::{ConvertError, convert};

#[derive(Parser)]
#[command(name = "ascii-shade")]
#[command(version, about = "Convert an image file to ASCII art")]
#[command(long_about = "Convert an image file to a plain-text ASCII art \
    rendering. The image is partitioned into blocks, each block's average \
    greyscale intensity picks one character from a fixed ramp, and the \
    resulting grid is written one row per line.")]
struct Cli {
    /// Image file to convert (any common raster format)
    image: PathBuf,

    /// Destination text file
    output: PathBuf,

    /// Horizontal pixels per output character; fractions are truncated
    #[arg(short, long, default_value = "10")]
    scale: String,

    /// Open the output file in the default viewer after converting
    #[arg(long)]
    open: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match convert(&cli.image, &cli.output, &cli.scale) {
        Ok(()) => {
            println!("ASCII image saved to {}", cli.output.display());
            if cli.open {
                open_in_viewer(&cli.output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("conversion failed: {err}");
            eprintln!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

/// Turn an error kind into the message shown to the user.
fn describe(err: &ConvertError) -> String {
    match err {
        ConvertError::InvalidScale(_) => {
            "Please enter a valid scale greater than or equal to 1 before proceeding.".to_string()
        }
        ConvertError::Decode(_) => "An error occurred while attempting to import the image file. \
            Please verify that the file selected is a valid image and that it is not in use."
            .to_string(),
        ConvertError::EmptyImage => {
            "The selected image has no pixels to convert.".to_string()
        }
        ConvertError::Write(_) => "An error occurred while attempting to save the ASCII text \
            file. Please ensure that the file path specified is valid and that there is not \
            already an existing file with this path that is in use."
            .to_string(),
    }
}

/// Best-effort launch of the platform's default viewer; failure to open
/// never fails the conversion.
fn open_in_viewer(path: &std::path::Path) {
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();

    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(path).spawn();

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let result = std::process::Command::new("xdg-open").arg(path).spawn();

    if let Err(err) = result {
        debug!("could not open {} in viewer: {err}", path.display());
    }
}
