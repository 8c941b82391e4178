use std::path::PathBuf;
use clap::Parser;

use crate::constants::DEFAULT_WINDOW_TITLE;
use crate::pipeline::DisplayConfig;

/// Show the images listed in a JSON file, one window at a time.
///
/// Press any key (or close the window) to move on to the next image.
#[derive(Debug, Parser)]
#[command(name = "render", version)]
pub struct Cli {
    /// Input images json file.
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Convert every image to grayscale before showing it.
    #[arg(short, long)]
    pub grayscale: bool,

    /// Title of the viewer window.
    #[arg(short, long, default_value = DEFAULT_WINDOW_TITLE)]
    pub title: String,

    /// Exit with a non-zero status if any image failed to load.
    #[arg(long)]
    pub strict: bool,

    /// More logging (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            grayscale: self.grayscale,
            window_title: self.title.clone(),
        }
    }
}
