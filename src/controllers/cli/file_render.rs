use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::session::{FractalSession, SessionError};
use crate::core::data::fractal_config::FractalConfig;

/// Headless front end: renders a session's view and hands it to a file
/// presenter.
pub struct FileRenderController<P: FilePresenterPort> {
    presenter: P,
    session: FractalSession,
}

impl<P: FilePresenterPort> FileRenderController<P> {
    pub fn new(presenter: P, config: FractalConfig) -> Result<Self, SessionError> {
        Ok(Self {
            presenter,
            session: FractalSession::new(config)?,
        })
    }

    pub fn generate(&mut self) -> Result<(), SessionError> {
        self.session.render()?;

        Ok(())
    }

    /// Writes the last rendered frame. Does nothing before the first frame.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match self.session.last_frame() {
            Some(buffer) => self.presenter.present(buffer, filepath.as_ref()),
            None => {
                log::warn!("no frame rendered yet, nothing written");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::pixel_rect::PixelRect;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, PixelRect)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.pixel_rect()));
            Ok(())
        }
    }

    fn config() -> FractalConfig {
        FractalConfig {
            pixel_width: 6,
            pixel_height: 4,
            ..FractalConfig::julia(Complex::new(-0.8, 0.2))
        }
    }

    #[test]
    fn test_write_before_generate_writes_nothing() {
        let presenter = RecordingPresenter::default();
        let controller = FileRenderController::new(&presenter, config()).unwrap();

        controller.write("unused.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller = FileRenderController::new(&presenter, config()).unwrap();

        controller.generate().unwrap();
        controller.write("out/julia.ppm").unwrap();

        assert_eq!(
            *presenter.written.borrow(),
            vec![(
                PathBuf::from("out/julia.ppm"),
                PixelRect::new(6, 4).unwrap()
            )]
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let presenter = RecordingPresenter::default();
        let result = FileRenderController::new(
            &presenter,
            FractalConfig {
                pixel_width: 0,
                ..config()
            },
        );

        assert!(matches!(result, Err(SessionError::Config(_))));
    }
}
