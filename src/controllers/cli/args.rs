use std::error::Error;
use std::fmt;
use std::num::ParseFloatError;
use std::path::PathBuf;

use crate::core::data::complex::Complex;
use crate::core::data::fractal_config::FractalConfig;

pub const USAGE: &str = "usage: fractal_zoom m [output.ppm] | j <re> <im> [output.ppm]";

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    MissingVariant,
    UnknownVariant(String),
    MissingJuliaConstant,
    InvalidNumber { value: String, error: ParseFloatError },
    UnexpectedArgument(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariant => write!(f, "no fractal selected"),
            Self::UnknownVariant(arg) => write!(f, "unknown fractal '{}'", arg),
            Self::MissingJuliaConstant => {
                write!(f, "a Julia fractal needs the real and imaginary part of c")
            }
            Self::InvalidNumber { value, error } => {
                write!(f, "'{}' is not a number: {}", value, error)
            }
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument '{}'", arg),
        }
    }
}

impl Error for ArgsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// What the binary was asked to render, and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config: FractalConfig,
    pub output: PathBuf,
}

fn parse_number(value: &str) -> Result<f64, ArgsError> {
    value.parse().map_err(|error| ArgsError::InvalidNumber {
        value: value.to_string(),
        error,
    })
}

/// `output/mandelbrot.ppm` or `output/julia.ppm`.
fn default_output(config: &FractalConfig) -> PathBuf {
    PathBuf::from("output").join(format!(
        "{}.ppm",
        config.variant.display_name().to_lowercase()
    ))
}

/// Parses `m [output]` or `j <re> <im> [output]`, program name excluded.
///
/// Like the interactive explorer, only the first letter of the fractal
/// argument is significant.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<CliArgs, ArgsError> {
    let mut args = args.iter().map(S::as_ref);

    let variant = args.next().ok_or(ArgsError::MissingVariant)?;

    let config = if variant.starts_with('m') {
        FractalConfig::default()
    } else if variant.starts_with('j') {
        let re = args.next().ok_or(ArgsError::MissingJuliaConstant)?;
        let im = args.next().ok_or(ArgsError::MissingJuliaConstant)?;
        let constant = Complex::new(parse_number(re)?, parse_number(im)?);

        FractalConfig::julia(constant)
    } else {
        return Err(ArgsError::UnknownVariant(variant.to_string()));
    };

    let output = match args.next() {
        Some(path) => PathBuf::from(path),
        None => default_output(&config),
    };

    if let Some(extra) = args.next() {
        return Err(ArgsError::UnexpectedArgument(extra.to_string()));
    }

    Ok(CliArgs { config, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    #[test]
    fn test_mandelbrot_defaults() {
        let args = parse_args(&["m"]).unwrap();

        assert_eq!(args.config, FractalConfig::default());
        assert_eq!(args.output, PathBuf::from("output/mandelbrot.ppm"));
    }

    #[test]
    fn test_only_first_letter_counts() {
        assert_eq!(
            parse_args(&["mandy", "view.ppm"]).unwrap().output,
            PathBuf::from("view.ppm")
        );
    }

    #[test]
    fn test_julia_with_constant_and_output() {
        let args = parse_args(&["j", "-0.8", "0.156", "j.ppm"]).unwrap();

        assert_eq!(args.config.variant, FractalKinds::Julia);
        assert_eq!(args.config.julia_constant, Some(Complex::new(-0.8, 0.156)));
        assert_eq!(args.output, PathBuf::from("j.ppm"));
    }

    #[test]
    fn test_julia_default_output() {
        let args = parse_args(&["julia", "0.285", "0.01"]).unwrap();

        assert_eq!(args.output, PathBuf::from("output/julia.ppm"));
    }

    #[test]
    fn test_julia_needs_both_parts() {
        assert_eq!(
            parse_args(&["j", "0.3"]),
            Err(ArgsError::MissingJuliaConstant)
        );
    }

    #[test]
    fn test_bad_number() {
        assert!(matches!(
            parse_args(&["j", "abc", "0.1"]),
            Err(ArgsError::InvalidNumber { ref value, .. }) if value == "abc"
        ));
    }

    #[test]
    fn test_unknown_and_missing_variant() {
        let none: [&str; 0] = [];

        assert_eq!(parse_args(&none), Err(ArgsError::MissingVariant));
        assert_eq!(
            parse_args(&["x"]),
            Err(ArgsError::UnknownVariant("x".to_string()))
        );
        assert_eq!(
            parse_args(&["m", "a.ppm", "b.ppm"]),
            Err(ArgsError::UnexpectedArgument("b.ppm".to_string()))
        );
    }
}
