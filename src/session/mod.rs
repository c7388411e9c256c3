//! Load/measure lifecycle for one viewer session.
//!
//! Every load starts a new pass identified by a [`PassTicket`]. Only the
//! most recent pass may move the session forward; results that arrive for
//! an older pass are discarded, never merged.

mod loader;
mod worker;

pub use loader::{CancelToken, GeometryLoader};
pub use worker::spawn_analysis;

use tracing::{debug, warn};

use crate::calibration::CalibrationProfile;
use crate::cloud::{DecodedGeometry, ModelTransform};
use crate::error::{FootfitError, Result, SessionError};
use crate::operations::analyze::AnalyzeFoot;
use crate::operations::classify::Locale;
use crate::operations::extract::PlaceModel;
use crate::report::FootAnalysis;

/// Identifies one measurement pass.
#[derive(Debug, Clone)]
pub struct PassTicket {
    id: u64,
    token: CancelToken,
}

impl PassTicket {
    /// Sequence number of the pass, starting at 1.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Cancellation token shared with the session.
    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl PartialEq for PassTicket {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PassTicket {}

/// Where the session is in its load/measure cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Nothing has been loaded yet.
    #[default]
    Empty,
    /// Input selected, decode in flight.
    Loading,
    /// Decoded, measurement in flight.
    Measuring,
    /// The latest pass completed.
    Ready(Box<FootAnalysis>),
    /// The latest pass failed with a user-facing message.
    Error(String),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Measuring => "measuring",
            Self::Ready(_) => "ready",
            Self::Error(_) => "in error",
        }
    }
}

/// Explicit per-session context replacing shared global state.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    current: Option<PassTicket>,
    issued: u64,
    profile: CalibrationProfile,
    locale: Locale,
}

impl Session {
    /// Creates an empty session with the default profile and English text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calibration profile used by later passes.
    #[must_use]
    pub fn with_profile(mut self, profile: CalibrationProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the locale used by later passes.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the latest completed analysis, if the session is ready.
    #[must_use]
    pub fn analysis(&self) -> Option<&FootAnalysis> {
        match &self.state {
            SessionState::Ready(analysis) => Some(analysis.as_ref()),
            _ => None,
        }
    }

    /// Returns the calibration profile.
    #[must_use]
    pub fn profile(&self) -> &CalibrationProfile {
        &self.profile
    }

    /// Returns the locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Starts a new pass.
    ///
    /// Cancels the previous pass, discards any prior result and moves to
    /// `Loading`. Always permitted.
    pub fn begin_load(&mut self) -> PassTicket {
        if let Some(previous) = self.current.take() {
            previous.token.cancel();
        }
        self.issued += 1;
        let ticket = PassTicket {
            id: self.issued,
            token: CancelToken::new(),
        };
        debug!(pass = ticket.id, "load started");
        self.current = Some(ticket.clone());
        self.state = SessionState::Loading;
        ticket
    }

    /// Records a successful decode, moving `Loading` to `Measuring`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ticket` is not the latest pass or the session
    /// is not loading.
    pub fn decode_succeeded(&mut self, ticket: &PassTicket) -> Result<()> {
        self.check_current(ticket)?;
        self.expect_state(&SessionState::Loading, "decode result")?;
        self.state = SessionState::Measuring;
        Ok(())
    }

    /// Records a failed decode, moving `Loading` to `Error`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ticket` is not the latest pass or the session
    /// is not loading.
    pub fn decode_failed(&mut self, ticket: &PassTicket, error: &FootfitError) -> Result<()> {
        self.check_current(ticket)?;
        self.expect_state(&SessionState::Loading, "decode failure")?;
        warn!(pass = ticket.id, %error, "decode failed");
        self.state = SessionState::Error(error.to_string());
        Ok(())
    }

    /// Records the outcome of a measurement, moving `Measuring` to `Ready`
    /// or `Error`.
    ///
    /// # Errors
    ///
    /// Returns an error if `ticket` is not the latest pass or the session
    /// is not measuring. The outcome is discarded in that case.
    pub fn complete(&mut self, ticket: &PassTicket, outcome: Result<FootAnalysis>) -> Result<()> {
        match outcome {
            Ok(analysis) => {
                self.check_current(ticket)?;
                self.expect_state(&SessionState::Measuring, "measurement result")?;
                self.state = SessionState::Ready(Box::new(analysis));
                Ok(())
            }
            Err(error) => self.measurement_failed(ticket, &error),
        }
    }

    fn measurement_failed(&mut self, ticket: &PassTicket, error: &FootfitError) -> Result<()> {
        self.check_current(ticket)?;
        self.expect_state(&SessionState::Measuring, "measurement failure")?;
        warn!(pass = ticket.id, %error, "measurement failed");
        self.state = SessionState::Error(error.to_string());
        Ok(())
    }

    /// Runs a whole pass synchronously, placing the model with
    /// [`PlaceModel`] defaults.
    ///
    /// Failures of the pass itself leave the session in `Error` and are
    /// also returned.
    ///
    /// # Errors
    ///
    /// Returns the decode or measurement error of the pass.
    pub fn run(&mut self, loader: &impl GeometryLoader) -> Result<&FootAnalysis> {
        self.run_inner(loader, None)
    }

    /// Runs a whole pass synchronously with a host-supplied transform.
    ///
    /// # Errors
    ///
    /// Returns the decode or measurement error of the pass.
    pub fn run_with_transform(
        &mut self,
        loader: &impl GeometryLoader,
        transform: ModelTransform,
    ) -> Result<&FootAnalysis> {
        self.run_inner(loader, Some(transform))
    }

    fn run_inner(
        &mut self,
        loader: &impl GeometryLoader,
        transform: Option<ModelTransform>,
    ) -> Result<&FootAnalysis> {
        let ticket = self.begin_load();

        let geometry = match loader.load(ticket.token()) {
            Ok(geometry) if !ticket.token().is_cancelled() => geometry,
            Ok(_) => return Err(SessionError::Cancelled.into()),
            Err(error) => {
                self.decode_failed(&ticket, &error)?;
                return Err(error);
            }
        };
        self.decode_succeeded(&ticket)?;

        let analysis = match self.analyze(&geometry, transform) {
            Ok(analysis) => analysis,
            Err(error) => {
                self.measurement_failed(&ticket, &error)?;
                return Err(error);
            }
        };
        self.complete(&ticket, Ok(analysis))?;

        self.analysis().ok_or_else(|| {
            SessionError::InvalidTransition {
                state: self.state.name(),
                event: "run",
            }
            .into()
        })
    }

    fn analyze(
        &self,
        geometry: &DecodedGeometry,
        transform: Option<ModelTransform>,
    ) -> Result<FootAnalysis> {
        let transform = match transform {
            Some(t) => t,
            None => PlaceModel::new(geometry).execute()?,
        };
        AnalyzeFoot::new(geometry, transform)
            .with_profile(self.profile)
            .with_locale(self.locale)
            .execute()
    }

    fn check_current(&self, ticket: &PassTicket) -> Result<()> {
        let latest = self.current.as_ref().map_or(0, PassTicket::id);
        if ticket.id == latest {
            return Ok(());
        }
        warn!(pass = ticket.id, latest, "discarding result of superseded pass");
        Err(SessionError::StalePass {
            pass: ticket.id,
            latest,
        }
        .into())
    }

    fn expect_state(&self, expected: &SessionState, event: &'static str) -> Result<()> {
        if std::mem::discriminant(&self.state) == std::mem::discriminant(expected) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                state: self.state.name(),
                event,
            }
            .into())
        }
    }
}
