//! Playback of a Search at a user-controlled speed.
//!
//! The [`Driver`] does not own a timer. The host either calls [`Driver::tick`] from its own
//! timer every [`Driver::interval`], or reports elapsed time through [`Driver::advance`] and
//! lets the Driver work out how many steps came due. [`Driver::play_blocking`] is a
//! convenience for terminals that sleeps between steps.

use crate::error::{Result, SessionError};
use crate::search::StepResult;
use crate::{Grid, Session};

use log::{debug, warn};
use std::time::Duration;

/// The slowest playback speed, in steps per second
pub const MIN_SPEED: f64 = 0.1;
/// The fastest playback speed, in steps per second
pub const MAX_SPEED: f64 = 100.0;

/// Clamps `speed` into `MIN_SPEED..=MAX_SPEED`. `NaN` becomes [`MIN_SPEED`].
///
/// ```
/// # use stepwise_pathfinding::driver::{clamp_speed, MAX_SPEED, MIN_SPEED};
/// assert_eq!(clamp_speed(0.0), MIN_SPEED);
/// assert_eq!(clamp_speed(-3.0), MIN_SPEED);
/// assert_eq!(clamp_speed(f64::NAN), MIN_SPEED);
/// assert_eq!(clamp_speed(250.0), MAX_SPEED);
/// assert_eq!(clamp_speed(20.0), 20.0);
/// ```
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        MIN_SPEED
    } else {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    }
}

/// The time between two steps at `speed`: `1000 / speed` milliseconds.
///
/// ```
/// # use stepwise_pathfinding::driver::interval_for;
/// # use std::time::Duration;
/// assert_eq!(interval_for(50.0), Duration::from_millis(20));
/// assert_eq!(interval_for(100.0), Duration::from_millis(10));
/// ```
pub fn interval_for(speed: f64) -> Duration {
    Duration::from_secs_f64(1.0 / clamp_speed(speed))
}

/// What the Driver is currently doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// no Search was started, or it was cancelled
    Idle,
    /// steps are taken on every tick
    Playing,
    /// the Search is kept, but ticks do nothing
    Paused,
    /// the Search ended with this result
    Finished(StepResult),
}

/// Calls [`Session::step`] at a cadence derived from a speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Driver {
    speed: f64,
    playback: Playback,
    pending: Duration,
}

impl Driver {
    /// Creates an idle Driver. `speed` is clamped, see [`clamp_speed`].
    pub fn new(speed: f64) -> Driver {
        let mut driver = Driver {
            speed: MIN_SPEED,
            playback: Playback::Idle,
            pending: Duration::ZERO,
        };
        driver.set_speed(speed);
        driver
    }

    /// Creates an idle Driver using the speed configured for `session`.
    pub fn for_session(session: &Session) -> Driver {
        Driver::new(session.config().speed)
    }

    /// The current speed, in steps per second
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Changes the speed. Takes effect with the next tick.
    pub fn set_speed(&mut self, speed: f64) {
        let clamped = clamp_speed(speed);
        if clamped != speed {
            warn!("speed {} out of range, using {}", speed, clamped);
        }
        self.speed = clamped;
    }

    /// The time between two steps at the current speed
    pub fn interval(&self) -> Duration {
        interval_for(self.speed)
    }

    /// What the Driver is currently doing
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Starts a new Search on `session` and begins playing it.
    pub fn start(&mut self, session: &mut Session) -> Result<()> {
        session.start_search()?;
        debug!("playing {} at {} steps/s", session.strategy(), self.speed);
        self.playback = Playback::Playing;
        self.pending = Duration::ZERO;
        Ok(())
    }

    /// Stops taking steps until [`resume`](Driver::resume) is called.
    pub fn pause(&mut self) {
        if self.playback == Playback::Playing {
            self.playback = Playback::Paused;
        }
    }

    /// Continues a paused playback.
    pub fn resume(&mut self) {
        if self.playback == Playback::Paused {
            self.playback = Playback::Playing;
        }
    }

    /// Stops playback and resets the Session, dropping the Search and its marks.
    pub fn cancel(&mut self, session: &mut Session) {
        session.reset();
        self.playback = Playback::Idle;
        self.pending = Duration::ZERO;
    }

    /// Takes one step if playing.
    ///
    /// Returns the result of the step, or `None` if no step was taken.
    pub fn tick(&mut self, session: &mut Session) -> Option<StepResult> {
        if self.playback != Playback::Playing {
            return None;
        }
        let Some(result) = session.step() else {
            // the Session was reset behind our back
            self.playback = Playback::Idle;
            return None;
        };
        if result.is_terminal() {
            self.playback = Playback::Finished(result);
            self.pending = Duration::ZERO;
        }
        Some(result)
    }

    /// Lets `elapsed` time pass and takes every step that came due.
    ///
    /// Returns the result of the last step taken, if any.
    pub fn advance(&mut self, session: &mut Session, elapsed: Duration) -> Option<StepResult> {
        if self.playback != Playback::Playing {
            return None;
        }
        self.pending += elapsed;
        let interval = self.interval();
        let mut last = None;
        while self.pending >= interval && self.playback == Playback::Playing {
            self.pending -= interval;
            last = self.tick(session).or(last);
        }
        last
    }

    /// Plays until the Search ends, sleeping for the interval before every step and calling
    /// `on_frame` after it.
    ///
    /// Starts a new Search unless one is paused, which is resumed instead. Fails with
    /// [`SessionError::NoSearch`] if the Session has no Search to step.
    pub fn play_blocking(
        &mut self,
        session: &mut Session,
        mut on_frame: impl FnMut(&Grid, StepResult),
    ) -> Result<StepResult> {
        match self.playback {
            Playback::Paused => self.resume(),
            Playback::Playing => {}
            Playback::Idle | Playback::Finished(_) => self.start(session)?,
        }
        loop {
            std::thread::sleep(self.interval());
            let Some(result) = self.tick(session) else {
                return Err(SessionError::NoSearch);
            };
            on_frame(session.grid(), result);
            if result.is_terminal() {
                return Ok(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionConfig;

    fn session() -> Session {
        let mut session = Session::new(SessionConfig::with_size(1, 5));
        session.set_start((0, 0)).unwrap();
        session.set_goal((0, 4)).unwrap();
        session
    }

    #[test]
    fn speed_is_clamped() {
        let mut driver = Driver::new(0.0);
        assert_eq!(driver.speed(), MIN_SPEED);
        assert_eq!(driver.interval(), Duration::from_secs(10));
        driver.set_speed(1000.0);
        assert_eq!(driver.speed(), MAX_SPEED);
        driver.set_speed(4.0);
        assert_eq!(driver.interval(), Duration::from_millis(250));
    }

    #[test]
    fn tick_only_while_playing() {
        let mut session = session();
        let mut driver = Driver::new(10.0);
        assert_eq!(driver.tick(&mut session), None);

        driver.start(&mut session).unwrap();
        assert_eq!(driver.tick(&mut session), Some(StepResult::Continue));
        driver.pause();
        assert_eq!(driver.playback(), Playback::Paused);
        assert_eq!(driver.tick(&mut session), None);
        driver.resume();
        assert_eq!(driver.tick(&mut session), Some(StepResult::Continue));
    }

    #[test]
    fn stops_when_finished() {
        let mut session = session();
        let mut driver = Driver::new(10.0);
        driver.start(&mut session).unwrap();
        let mut results = vec![];
        while let Some(result) = driver.tick(&mut session) {
            results.push(result);
        }
        assert_eq!(
            results,
            vec![
                StepResult::Continue,
                StepResult::Continue,
                StepResult::Continue,
                StepResult::Found
            ]
        );
        assert_eq!(driver.playback(), Playback::Finished(StepResult::Found));
    }

    #[test]
    fn advance_takes_due_steps() {
        let mut session = session();
        let mut driver = Driver::new(10.0);
        driver.start(&mut session).unwrap();

        assert_eq!(driver.advance(&mut session, Duration::from_millis(50)), None);
        assert_eq!(session.search().unwrap().expanded().len(), 0);

        assert_eq!(
            driver.advance(&mut session, Duration::from_millis(150)),
            Some(StepResult::Continue)
        );
        assert_eq!(session.search().unwrap().expanded().len(), 2);

        assert_eq!(
            driver.advance(&mut session, Duration::from_secs(10)),
            Some(StepResult::Found)
        );
        assert_eq!(driver.playback(), Playback::Finished(StepResult::Found));
    }

    #[test]
    fn cancel_resets_session() {
        let mut session = session();
        let mut driver = Driver::new(10.0);
        driver.start(&mut session).unwrap();
        driver.tick(&mut session);
        driver.cancel(&mut session);
        assert_eq!(driver.playback(), Playback::Idle);
        assert!(session.search().is_none());
        assert!(!session.grid().has_search_marks());
    }

    #[test]
    fn play_blocking_runs_to_the_end() {
        let mut session = session();
        let mut driver = Driver::new(MAX_SPEED);
        let mut frames = 0;
        let result = driver
            .play_blocking(&mut session, |_, _| frames += 1)
            .unwrap();
        assert_eq!(result, StepResult::Found);
        assert_eq!(frames, 4);
    }

    #[test]
    fn play_blocking_without_search_fails() {
        let mut session = session();
        let mut driver = Driver::new(MAX_SPEED);
        driver.start(&mut session).unwrap();
        session.reset();
        let mut frames = 0;
        assert_eq!(
            driver.play_blocking(&mut session, |_, _| frames += 1),
            Err(SessionError::NoSearch)
        );
        assert_eq!(frames, 0);
        assert_eq!(driver.playback(), Playback::Idle);
    }
}
