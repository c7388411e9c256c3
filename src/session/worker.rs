use std::sync::mpsc::{self, Receiver};
use std::thread;

use tracing::debug;

use crate::calibration::CalibrationProfile;
use crate::cloud::{DecodedGeometry, ModelTransform};
use crate::error::{Result, SessionError};
use crate::operations::analyze::AnalyzeFoot;
use crate::operations::classify::Locale;
use crate::report::FootAnalysis;

use super::PassTicket;

/// Runs a measurement pass on a background thread.
///
/// The outcome is sent back together with its ticket; feed it to
/// [`Session::complete`](super::Session::complete), which discards it if a
/// newer load has started in the meantime. A pass whose ticket is already
/// cancelled when the thread starts is not computed.
#[must_use]
pub fn spawn_analysis(
    ticket: PassTicket,
    geometry: DecodedGeometry,
    transform: ModelTransform,
    profile: CalibrationProfile,
    locale: Locale,
) -> Receiver<(PassTicket, Result<FootAnalysis>)> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = if ticket.token().is_cancelled() {
            debug!(pass = ticket.id(), "skipping cancelled pass");
            Err(SessionError::Cancelled.into())
        } else {
            AnalyzeFoot::new(&geometry, transform)
                .with_profile(profile)
                .with_locale(locale)
                .execute()
        };
        // The receiver may have been dropped by a host that moved on.
        let _ = tx.send((ticket, outcome));
    });
    rx
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FootfitError;
    use crate::math::Point3;
    use crate::session::{Session, SessionState};

    fn foot() -> DecodedGeometry {
        DecodedGeometry::from_positions(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(95.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 240.0),
            Point3::new(95.0, 0.0, 240.0),
            Point3::new(40.0, 55.0, 120.0),
        ])
    }

    #[test]
    fn background_result_completes_session() {
        let mut session = Session::new();
        let ticket = session.begin_load();
        session.decode_succeeded(&ticket).unwrap();

        let rx = spawn_analysis(
            ticket,
            foot(),
            ModelTransform::identity(),
            *session.profile(),
            session.locale(),
        );
        let (ticket, outcome) = rx.recv().unwrap();
        session.complete(&ticket, outcome).unwrap();
        assert!(session.analysis().is_some());
    }

    #[test]
    fn superseded_background_result_is_discarded() {
        let mut session = Session::new();
        let stale = session.begin_load();
        session.decode_succeeded(&stale).unwrap();
        let rx = spawn_analysis(
            stale,
            foot(),
            ModelTransform::identity(),
            CalibrationProfile::default(),
            Locale::English,
        );

        let fresh = session.begin_load();
        let (stale, outcome) = rx.recv().unwrap();
        assert!(matches!(
            session.complete(&stale, outcome),
            Err(FootfitError::Session(SessionError::StalePass { .. }))
        ));
        assert_eq!(session.state(), &SessionState::Loading);
        assert_eq!(fresh.id(), 2);
    }

    #[test]
    fn cancelled_ticket_is_not_computed() {
        let mut session = Session::new();
        let first = session.begin_load();
        let _second = session.begin_load();
        let rx = spawn_analysis(
            first,
            foot(),
            ModelTransform::identity(),
            CalibrationProfile::default(),
            Locale::English,
        );
        let (_, outcome) = rx.recv().unwrap();
        assert!(matches!(
            outcome,
            Err(FootfitError::Session(SessionError::Cancelled))
        ));
    }
}
