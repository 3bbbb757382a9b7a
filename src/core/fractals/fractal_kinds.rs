/// Fractal family selected in a [`FractalConfig`](crate::core::data::fractal_config::FractalConfig),
/// before its parameters are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
}

impl FractalKinds {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mandelbrot() {
        assert_eq!(FractalKinds::default(), FractalKinds::Mandelbrot);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FractalKinds::Mandelbrot.display_name(), "Mandelbrot");
        assert_eq!(FractalKinds::Julia.display_name(), "Julia");
    }
}
