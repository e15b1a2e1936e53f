// SPDX-License-Identifier: MPL-2.0
//! Command line parsing.
//!
//! Values are layered as: command line flag, then `settings.toml`, then the
//! built-in defaults in [`crate::config::defaults`].

use crate::config::Config;
use crate::domain::compositing::{BackgroundColor, CanvasSize, ScaleFactor};
use crate::error::{Error, Result};
use crate::icon::{IconJob, Variant};
use crate::media;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: icon_backdrop [raster|svg] [OPTIONS]

Composites an icon onto a solid background.

  raster          Lay an existing image over a canvas of the same size (default)
  svg             Rasterize an SVG at an enlarged scale and center it

Options:
  --input PATH        Source image (default: assets/icon.png or assets/capsule.svg)
  --output PATH       Destination (default: assets/icon_bg.png)
  --config PATH       Settings file (default: <config dir>/IconBackdrop/settings.toml)
  --background HEX    Opaque canvas color, #rrggbb (default: #212121)
  --scale FACTOR      SVG upscale factor (default: 20)
  --size PIXELS       Edge of the square SVG canvas (default: 1024)
  -h, --help          Print this help

Set RUST_LOG=debug for diagnostic output.
";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    /// `None` when no subcommand was given.
    pub variant: Option<Variant>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub background: Option<BackgroundColor>,
    pub scale: Option<f32>,
    pub size: Option<u32>,
    pub help: bool,
}

impl Args {
    /// Parses the process arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] for malformed values, unknown subcommands and
    /// leftover arguments.
    pub fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let help = args.contains(["-h", "--help"]);
        let input: Option<PathBuf> = args.opt_value_from_str("--input")?;
        let output: Option<PathBuf> = args.opt_value_from_str("--output")?;
        let config: Option<PathBuf> = args.opt_value_from_str("--config")?;
        let background: Option<BackgroundColor> = args.opt_value_from_str("--background")?;
        let scale: Option<f32> = args.opt_value_from_str("--scale")?;
        let size: Option<u32> = args.opt_value_from_str("--size")?;

        let variant = match args.opt_free_from_str::<String>()? {
            Some(name) => Some(
                Variant::from_name(&name)
                    .ok_or_else(|| Error::Usage(format!("unknown variant '{name}'")))?,
            ),
            None => None,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(Error::Usage(format!(
                "unexpected arguments: {}",
                remaining
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
            )));
        }

        Ok(Self {
            variant,
            input,
            output,
            config,
            background,
            scale,
            size,
            help,
        })
    }

    /// Variant to run. Without a subcommand an `.svg` input selects the
    /// vector variant, anything else the raster one.
    #[must_use]
    pub fn resolved_variant(&self) -> Variant {
        self.variant.unwrap_or_else(|| match &self.input {
            Some(input) if media::is_vector_path(input) => Variant::Vector,
            _ => Variant::Raster,
        })
    }

    /// Combines the arguments with `config` into a runnable job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the settings file holds an invalid
    /// background color.
    pub fn into_job(self, config: &Config) -> Result<IconJob> {
        let variant = self.resolved_variant();
        let mut job = IconJob::new(variant);

        let configured_input = match variant {
            Variant::Raster => config.raster_input.clone(),
            Variant::Vector => config.vector_input.clone(),
        };
        if let Some(input) = self.input.or(configured_input) {
            job.input = input;
        }
        if let Some(output) = self.output.or_else(|| config.output.clone()) {
            job.output = output;
        }
        if let Some(background) = self.background {
            job.background = background;
        } else if let Some(background) = config.background()? {
            job.background = background;
        }
        if let Some(edge) = self.size.or(config.canvas_size) {
            job.canvas_size = CanvasSize::square(edge);
        }
        if let Some(scale) = self.scale.or(config.scale_factor) {
            job.scale = ScaleFactor::new(scale);
        }

        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    fn empty_config() -> Config {
        Config {
            background_color: None,
            canvas_size: None,
            scale_factor: None,
            raster_input: None,
            vector_input: None,
            output: None,
        }
    }

    #[test]
    fn no_arguments_runs_raster_defaults() {
        let args = parse(&[]).expect("empty args parse");
        let job = args.into_job(&Config::default()).expect("job");
        assert_eq!(job, IconJob::new(Variant::Raster));
    }

    #[test]
    fn svg_subcommand_selects_vector_variant() {
        let args = parse(&["svg"]).expect("args parse");
        assert_eq!(args.resolved_variant(), Variant::Vector);
        let job = args.into_job(&empty_config()).expect("job");
        assert_eq!(job.input, PathBuf::from("assets/capsule.svg"));
    }

    #[test]
    fn svg_input_implies_vector_variant() {
        let args = parse(&["--input", "logo.svg"]).expect("args parse");
        assert_eq!(args.resolved_variant(), Variant::Vector);
    }

    #[test]
    fn explicit_subcommand_wins_over_extension() {
        let args = parse(&["raster", "--input", "logo.svg"]).expect("args parse");
        assert_eq!(args.resolved_variant(), Variant::Raster);
    }

    #[test]
    fn flags_parse_typed_values() {
        let args = parse(&[
            "svg",
            "--background",
            "#000000",
            "--scale",
            "12.5",
            "--size",
            "512",
            "--output",
            "out.png",
        ])
        .expect("args parse");

        assert_eq!(args.background, Some(BackgroundColor::rgb(0, 0, 0)));
        assert_eq!(args.scale, Some(12.5));
        assert_eq!(args.size, Some(512));
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn help_flag_is_detected() {
        assert!(parse(&["--help"]).expect("args parse").help);
        assert!(parse(&["-h"]).expect("args parse").help);
    }

    #[test]
    fn unknown_variant_is_usage_error() {
        assert!(matches!(parse(&["bitmap"]), Err(Error::Usage(_))));
    }

    #[test]
    fn malformed_values_are_usage_errors() {
        assert!(matches!(parse(&["--scale", "big"]), Err(Error::Usage(_))));
        assert!(matches!(
            parse(&["--background", "grey"]),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn translucent_background_flag_is_usage_error() {
        match parse(&["--background", "#00000000"]) {
            Err(Error::Usage(message)) => assert!(message.contains("opaque")),
            other => panic!("expected Usage error, got {other:?}"),
        }
    }

    #[test]
    fn translucent_background_in_config_is_config_error() {
        let config = Config {
            background_color: Some("#21212180".to_string()),
            ..empty_config()
        };
        assert!(matches!(
            parse(&[]).unwrap().into_job(&config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn leftover_arguments_are_rejected() {
        match parse(&["svg", "extra"]) {
            Err(Error::Usage(message)) => assert!(message.contains("extra")),
            other => panic!("expected Usage error, got {other:?}"),
        }
    }

    #[test]
    fn command_line_overrides_config() {
        let config = Config {
            background_color: Some("#ffffff".to_string()),
            scale_factor: Some(5.0),
            vector_input: Some(PathBuf::from("configured.svg")),
            ..empty_config()
        };
        let args = parse(&["svg", "--scale", "8", "--input", "cli.svg"]).expect("args parse");
        let job = args.into_job(&config).expect("job");

        assert_eq!(job.scale.value(), 8.0);
        assert_eq!(job.input, PathBuf::from("cli.svg"));
        assert_eq!(job.background, BackgroundColor::rgb(255, 255, 255));
    }

    #[test]
    fn config_input_follows_variant() {
        let config = Config {
            raster_input: Some(PathBuf::from("configured.png")),
            vector_input: Some(PathBuf::from("configured.svg")),
            ..empty_config()
        };
        let raster = parse(&[]).unwrap().into_job(&config).unwrap();
        let vector = parse(&["svg"]).unwrap().into_job(&config).unwrap();

        assert_eq!(raster.input, PathBuf::from("configured.png"));
        assert_eq!(vector.input, PathBuf::from("configured.svg"));
    }

    #[test]
    fn invalid_config_color_is_config_error() {
        let config = Config {
            background_color: Some("nope".to_string()),
            ..empty_config()
        };
        assert!(matches!(
            parse(&[]).unwrap().into_job(&config),
            Err(Error::Config(_))
        ));
    }
}
