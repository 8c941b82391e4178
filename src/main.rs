use std::process::ExitCode;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};

mod cli;
mod constants;
mod engine;
mod error;
mod logging;
mod manifest;
mod pipeline;
mod state;
mod texture_loader;
mod viewer;

use crate::cli::Cli;
use crate::constants::*;
use crate::manifest::load_manifest;
use crate::pipeline::{display_images, DisplayReport};
use crate::viewer::RaylibViewer;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = usage_exit_code(e.kind());
            if code == EXIT_SUCCESS {
                e.exit();
            }
            // clap's rendering already carries the usage line
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    logging::init(cli.verbose);
    info!(version = env!("CARGO_PKG_VERSION"), "{} starting", env!("CARGO_PKG_NAME"));

    let outcome = run(&cli);
    match &outcome {
        Ok(report) if cli.strict && !report.is_complete_success() => {
            for (path, e) in report.failures() {
                error!(
                    path = %path.display(),
                    error = e as &(dyn std::error::Error + 'static),
                    "image was skipped"
                );
            }
            error!(skipped = report.skipped(), "some images could not be loaded");
        }
        Ok(_) => {}
        Err(e) => error!("{:#}", e),
    }
    ExitCode::from(exit_code(&outcome, cli.strict))
}

fn run(cli: &Cli) -> Result<DisplayReport> {
    let manifest = load_manifest(&cli.input)?;
    info!(
        input = %cli.input.display(),
        images = manifest.images.len(),
        grayscale = cli.grayscale,
        "displaying images"
    );

    let mut viewer = RaylibViewer::new();
    let report = display_images(&mut viewer, &manifest.images, &cli.display_config())?;
    Ok(report)
}

/// Help and version requests are not failures; everything else clap rejects is.
fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

fn exit_code(outcome: &Result<DisplayReport>, strict: bool) -> u8 {
    match outcome {
        Ok(report) if strict && !report.is_complete_success() => EXIT_PARTIAL,
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use crate::error::{DisplayError, LoadError};
    use crate::pipeline::ImageOutcome;
    use crate::state::ImageState;
    use tempfile::NamedTempFile;

    fn report(states: &[ImageState]) -> DisplayReport {
        let outcomes = states
            .iter()
            .enumerate()
            .map(|(i, &state)| {
                let path = PathBuf::from(format!("{}.png", i));
                let error = (state == ImageState::Skipped).then(|| LoadError::Decode {
                    path: path.clone(),
                    reason: "not an image".to_string(),
                });
                ImageOutcome { path, state, error }
            })
            .collect();
        DisplayReport { outcomes }
    }

    fn parse_error_code(args: &[&str]) -> u8 {
        usage_exit_code(Cli::try_parse_from(args).unwrap_err().kind())
    }

    #[test]
    fn argument_errors_exit_with_one() {
        assert_eq!(parse_error_code(&["render"]), EXIT_FAILURE);
        assert_eq!(parse_error_code(&["render", "-i", "x.json", "--bogus"]), EXIT_FAILURE);
        assert_eq!(parse_error_code(&["render", "-i"]), EXIT_FAILURE);
    }

    #[test]
    fn help_and_version_are_not_failures() {
        assert_eq!(parse_error_code(&["render", "--help"]), EXIT_SUCCESS);
        assert_eq!(parse_error_code(&["render", "--version"]), EXIT_SUCCESS);
    }

    #[test]
    fn bad_manifest_exits_with_one() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ \"pictures\": [] }").unwrap();

        let outcome = load_manifest(file.path())
            .map(|_| DisplayReport::default())
            .map_err(anyhow::Error::from);
        assert_eq!(exit_code(&outcome, false), EXIT_FAILURE);
        assert_eq!(exit_code(&outcome, true), EXIT_FAILURE);
    }

    #[test]
    fn display_failure_exits_with_one() {
        let outcome: Result<DisplayReport> =
            Err(DisplayError::Texture { reason: "no display".to_string() }.into());
        assert_eq!(exit_code(&outcome, false), EXIT_FAILURE);
    }

    #[test]
    fn skips_are_tolerated_without_strict() {
        let outcome = Ok(report(&[ImageState::Displayed, ImageState::Skipped]));
        assert_eq!(exit_code(&outcome, false), EXIT_SUCCESS);
    }

    #[test]
    fn strict_turns_skips_into_exit_two() {
        let outcome = Ok(report(&[ImageState::Skipped, ImageState::Displayed]));
        assert_eq!(exit_code(&outcome, true), EXIT_PARTIAL);
    }

    #[test]
    fn strict_run_without_skips_succeeds() {
        let outcome = Ok(report(&[ImageState::Displayed, ImageState::Displayed]));
        assert_eq!(exit_code(&outcome, true), EXIT_SUCCESS);
        assert_eq!(exit_code(&Ok(DisplayReport::default()), true), EXIT_SUCCESS);
    }
}
