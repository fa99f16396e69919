use std::path::Path;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{info, warn};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::cancellation::Deadline;
use crate::core::actions::evaluate::evaluate::{EvaluateError, evaluate, evaluate_cancelable};
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::{NavigationCommand, NavigationError, NavigationSettings, Navigator};
use crate::storage::render_parameters::RenderParameters;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error("nothing has been generated yet")]
    NothingGenerated,
}

/// One exploration session: apply a command, evaluate the current viewport,
/// hand the grid to the presenter, repeat.
pub struct ExplorerSession<P: FilePresenterPort> {
    presenter: P,
    navigator: Navigator,
    parameters: RenderParameters,
    timeout: Option<Duration>,
    grid: Option<EscapeGrid>,
}

impl<P: FilePresenterPort> ExplorerSession<P> {
    /// Starts at the parameters' bounds when they carry any, otherwise at
    /// the default viewport. Stored bounds go through the same check as
    /// typed-in ones.
    pub fn new(
        presenter: P,
        parameters: RenderParameters,
        settings: NavigationSettings,
    ) -> Result<Self, NavigationError> {
        let navigator = match parameters.bounds {
            Some(bounds) => Navigator::with_viewport(
                Viewport::try_from(bounds).map_err(NavigationError::InvalidViewport)?,
                settings,
            ),
            None => Navigator::new(settings),
        };

        Ok(Self {
            presenter,
            navigator,
            parameters,
            timeout: None,
            grid: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.navigator.viewport()
    }

    #[must_use]
    pub fn parameters(&self) -> RenderParameters {
        self.parameters
    }

    #[must_use]
    pub fn grid(&self) -> Option<&EscapeGrid> {
        self.grid.as_ref()
    }

    /// A rejected command is logged and returned; the session keeps its
    /// previous viewport and stays usable.
    pub fn apply(&mut self, command: NavigationCommand) -> Result<Viewport, NavigationError> {
        match self.navigator.apply(command) {
            Ok(viewport) => {
                info!(?command, %viewport, "navigation applied");
                Ok(viewport)
            }
            Err(err) => {
                warn!(?command, error = %err, "navigation rejected");
                Err(err)
            }
        }
    }

    /// Drops the previous grid first, so a failed evaluation leaves nothing
    /// stale for [`Self::write`].
    pub fn generate(&mut self) -> Result<&EscapeGrid, SessionError> {
        self.grid = None;

        let RenderParameters {
            width,
            height,
            max_iter,
            ..
        } = self.parameters;
        let viewport = self.navigator.viewport();

        info!(width, height, max_iter, %viewport, "rendering Mandelbrot set");

        let start = Instant::now();
        let grid = match self.timeout {
            Some(timeout) => evaluate_cancelable(
                viewport,
                width,
                height,
                max_iter,
                &Deadline::after(timeout),
            )?,
            None => evaluate(viewport, width, height, max_iter)?,
        };

        info!(duration = ?start.elapsed(), bounded = grid.bounded_count(), "evaluation finished");

        Ok(&*self.grid.insert(grid))
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), SessionError> {
        let grid = self.grid.as_ref().ok_or(SessionError::NothingGenerated)?;
        let filepath = filepath.as_ref();

        self.presenter.present(grid, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Bounds;
    use crate::core::navigation::PanDirection;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, grid: &EscapeGrid, filepath: &Path) -> Result<(), PresentError> {
            self.presented
                .borrow_mut()
                .push((filepath.to_path_buf(), grid.width(), grid.height()));
            Ok(())
        }
    }

    fn small_parameters() -> RenderParameters {
        RenderParameters {
            width: 9,
            height: 7,
            max_iter: 30,
            bounds: None,
        }
    }

    #[test]
    fn starts_at_default_viewport_without_stored_bounds() {
        let presenter = RecordingPresenter::default();

        let session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();

        assert_eq!(session.viewport(), Viewport::default());
    }

    #[test]
    fn starts_at_stored_bounds() {
        let presenter = RecordingPresenter::default();
        let bounds = Bounds::new(-0.8, -0.7, 0.05, 0.15);
        let parameters = RenderParameters {
            bounds: Some(bounds),
            ..small_parameters()
        };

        let session =
            ExplorerSession::new(&presenter, parameters, NavigationSettings::default()).unwrap();

        assert_eq!(session.viewport().bounds(), bounds);
    }

    #[test]
    fn invalid_stored_bounds_are_rejected() {
        let presenter = RecordingPresenter::default();
        let parameters = RenderParameters {
            bounds: Some(Bounds::new(1.0, 1.0, 0.0, 1.0)),
            ..small_parameters()
        };

        let result = ExplorerSession::new(&presenter, parameters, NavigationSettings::default());

        assert!(matches!(result, Err(NavigationError::InvalidViewport(_))));
    }

    #[test]
    fn rejected_command_keeps_session_usable() {
        let presenter = RecordingPresenter::default();
        let mut session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();
        session
            .apply(NavigationCommand::Pan(PanDirection::Up))
            .unwrap();
        let before = session.viewport();

        let result = session.apply(NavigationCommand::SetBounds(Bounds::new(
            0.0, -1.0, 0.0, 1.0,
        )));

        assert!(result.is_err());
        assert_eq!(session.viewport(), before);
        assert!(session.generate().is_ok());
    }

    #[test]
    fn generate_evaluates_current_viewport() {
        let presenter = RecordingPresenter::default();
        let mut session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();
        session.apply(NavigationCommand::ZoomInCentered).unwrap();

        let expected = evaluate(session.viewport(), 9, 7, 30).unwrap();
        let grid = session.generate().unwrap();

        assert_eq!(grid, &expected);
    }

    #[test]
    fn generate_with_elapsed_timeout_is_cancelled() {
        let presenter = RecordingPresenter::default();
        let mut session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap()
                .with_timeout(Duration::ZERO);

        let result = session.generate();

        assert!(matches!(
            result,
            Err(SessionError::Evaluate(EvaluateError::Cancelled(_)))
        ));
        assert!(session.grid().is_none());
    }

    #[test]
    fn failed_generate_discards_previous_grid() {
        let presenter = RecordingPresenter::default();
        let mut session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();
        session.generate().unwrap();
        session
            .apply(NavigationCommand::SetBounds(Bounds::new(3.0, 4.0, 3.0, 4.0)))
            .unwrap();
        let mut session = session.with_timeout(Duration::ZERO);

        assert!(session.generate().is_err());
        assert!(session.grid().is_none());
        assert!(matches!(
            session.write("out.ppm"),
            Err(SessionError::NothingGenerated)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();

        assert!(matches!(
            session.write("out.ppm"),
            Err(SessionError::NothingGenerated)
        ));
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn write_hands_grid_to_presenter() {
        let presenter = RecordingPresenter::default();
        let mut session =
            ExplorerSession::new(&presenter, small_parameters(), NavigationSettings::default())
                .unwrap();

        session.generate().unwrap();
        session.write("out.ppm").unwrap();

        assert_eq!(
            presenter.presented.borrow().as_slice(),
            &[(PathBuf::from("out.ppm"), 9, 7)]
        );
    }
}
