use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::viewport::Viewport;

/// User interaction, already converted to plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    SelectionStarted(Complex),
    SelectionDragged(Complex),
    SelectionCommitted(Complex),
    UndoRequested,
}

/// What the host has to do after an interaction event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomOutcome {
    /// Nothing changed.
    Ignored,
    /// Only the selection preview changed; repaint without recomputing.
    Redraw,
    /// The viewport changed and the fractal must be rendered again.
    Rerender(Viewport),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting {
        start: Complex,
        end: Option<Complex>,
    },
}

/// Rubber-band zoom with a single-level reset.
///
/// Owns the only mutable viewport. Renderers get copies of it through
/// [`ZoomOutcome::Rerender`] or [`ZoomController::viewport`], so a zoom never
/// changes a frame that is already being rendered.
#[derive(Debug, Clone)]
pub struct ZoomController {
    initial: Viewport,
    current: Viewport,
    state: SelectionState,
}

impl ZoomController {
    #[must_use]
    pub fn new(initial: Viewport) -> Self {
        Self {
            initial,
            current: initial,
            state: SelectionState::Idle,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.current
    }

    pub fn initial_viewport(&self) -> Viewport {
        self.initial
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_zoomed(&self) -> bool {
        self.current != self.initial
    }

    pub fn handle(&mut self, event: InteractionEvent) -> ZoomOutcome {
        match event {
            InteractionEvent::SelectionStarted(point) => self.begin_selection(point),
            InteractionEvent::SelectionDragged(point) => self.update_selection(point),
            InteractionEvent::SelectionCommitted(point) => self.commit_selection(point),
            InteractionEvent::UndoRequested => self.request_undo(),
        }
    }

    /// Starts a new selection, discarding any unfinished one.
    pub fn begin_selection(&mut self, point: Complex) -> ZoomOutcome {
        self.state = SelectionState::Selecting {
            start: point,
            end: None,
        };

        ZoomOutcome::Ignored
    }

    pub fn update_selection(&mut self, point: Complex) -> ZoomOutcome {
        match &mut self.state {
            SelectionState::Selecting { end, .. } => {
                *end = Some(point);
                ZoomOutcome::Redraw
            }
            SelectionState::Idle => ZoomOutcome::Ignored,
        }
    }

    /// Finishes the selection at `point` and zooms to it.
    ///
    /// A selection with no area, or one whose fitted viewport cannot be
    /// represented, leaves the viewport untouched.
    pub fn commit_selection(&mut self, point: Complex) -> ZoomOutcome {
        let SelectionState::Selecting { start, .. } = std::mem::take(&mut self.state) else {
            return ZoomOutcome::Ignored;
        };

        let fitted = ComplexRect::from_corners(start, point)
            .and_then(|selection| self.current.fit_selection(selection));

        match fitted {
            Ok(viewport) => {
                self.current = viewport;
                log::info!("zoomed to {}", viewport.region());

                ZoomOutcome::Rerender(viewport)
            }
            Err(err) => {
                log::debug!("ignoring selection: {}", err);

                ZoomOutcome::Ignored
            }
        }
    }

    /// Returns to the construction-time viewport from any state.
    pub fn request_undo(&mut self) -> ZoomOutcome {
        self.state = SelectionState::Idle;
        self.current = self.initial;
        log::info!("reset to original view {}", self.initial.region());

        ZoomOutcome::Rerender(self.initial)
    }

    /// The normalised rectangle being dragged out, if any.
    pub fn selection_preview(&self) -> Option<ComplexRect> {
        match self.state {
            SelectionState::Selecting {
                start,
                end: Some(end),
            } => ComplexRect::from_corners(start, end).ok(),
            _ => None,
        }
    }
}
