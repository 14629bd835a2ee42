//! Sensor source abstraction and subscription lifecycle
//!
//! A [`SensorSource`] delivers heading samples at roughly 1-2 Hz and
//! location samples at a requested poll interval. Samples are pushed through
//! callbacks on the same cooperative event loop that drives animation
//! frames; there is no queueing, each sample overwrites the last downstream.
//!
//! [`ReplaySource`] is a deterministic in-process source that plays back a
//! scripted timeline, for tests and demos.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use crate::errors::SensorResult;
use crate::types::{HeadingSample, LocationOptions, LocationSample, Permission};

/// Callback receiving heading samples
pub type HeadingCallback = Box<dyn FnMut(HeadingSample)>;
/// Callback receiving location samples
pub type LocationCallback = Box<dyn FnMut(LocationSample)>;

/// Provider of heading and location sample streams
pub trait SensorSource {
    /// Ask the platform for location permission
    ///
    /// Denial is non-fatal; heading subscriptions work without it, only the
    /// location display is affected.
    fn request_permission(&mut self) -> Permission;

    /// Start delivering heading samples to `callback`
    fn subscribe_heading(&mut self, callback: HeadingCallback) -> SensorResult<Subscription>;

    /// Start delivering location samples to `callback`
    fn subscribe_location(
        &mut self,
        options: LocationOptions,
        callback: LocationCallback,
    ) -> SensorResult<Subscription>;
}

/// Handle to an active sensor subscription
///
/// Unsubscribing is idempotent, and the handle unsubscribes itself on drop
/// so a forgotten handle cannot leak a native sensor stream.
///
/// # Example
/// ```
/// use compass_rose::Subscription;
///
/// let mut subscription = Subscription::new(|| { /* release the stream */ });
/// assert!(subscription.is_active());
/// subscription.unsubscribe();
/// subscription.unsubscribe(); // second call is a no-op
/// assert!(!subscription.is_active());
/// ```
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a cancellation action
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop the sample stream; further calls do nothing
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
            debug!("sensor subscription cancelled");
        }
    }

    /// Whether the subscription still delivers samples
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[derive(Debug, Clone, Copy)]
enum ReplayEvent {
    Heading(HeadingSample),
    Location(LocationSample),
}

/// Scripted sensor source replaying a fixed timeline
///
/// Events are delivered from [`poll`](Self::poll) in timestamp order once the
/// supplied elapsed time passes them, on the caller's thread. The scripted
/// timestamps already embody whatever poll interval the scenario wants, so
/// [`LocationOptions::poll_interval`] is not re-applied here.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use compass_rose::{HeadingSample, ReplaySource, SensorSource};
///
/// let mut source = ReplaySource::new();
/// source.push_heading(
///     Duration::from_millis(500),
///     HeadingSample { true_heading: 90.0, ..Default::default() },
/// );
///
/// let seen = Rc::new(Cell::new(0.0f32));
/// let sink = seen.clone();
/// let _subscription = source
///     .subscribe_heading(Box::new(move |sample| sink.set(sample.true_heading)))
///     .unwrap();
///
/// source.poll(Duration::from_secs(1));
/// assert_eq!(seen.get(), 90.0);
/// ```
pub struct ReplaySource {
    permission: Permission,
    timeline: Vec<(Duration, ReplayEvent)>,
    cursor: usize,
    heading_sink: Option<(Rc<Cell<bool>>, HeadingCallback)>,
    location_sink: Option<(Rc<Cell<bool>>, LocationCallback)>,
}

impl ReplaySource {
    /// Create an empty source that grants permission
    pub fn new() -> Self {
        Self::with_permission(Permission::Granted)
    }

    /// Create an empty source with the given permission-gate outcome
    pub fn with_permission(permission: Permission) -> Self {
        Self {
            permission,
            timeline: Vec::new(),
            cursor: 0,
            heading_sink: None,
            location_sink: None,
        }
    }

    /// Script a heading sample at `at` elapsed time
    pub fn push_heading(&mut self, at: Duration, sample: HeadingSample) {
        self.timeline.push((at, ReplayEvent::Heading(sample)));
        self.timeline.sort_by_key(|(time, _)| *time);
    }

    /// Script a location sample at `at` elapsed time
    pub fn push_location(&mut self, at: Duration, sample: LocationSample) {
        self.timeline.push((at, ReplayEvent::Location(sample)));
        self.timeline.sort_by_key(|(time, _)| *time);
    }

    /// Deliver every scripted event whose timestamp is <= `elapsed`
    ///
    /// Events before an active subscription existed, or after it was
    /// cancelled, are discarded rather than queued.
    pub fn poll(&mut self, elapsed: Duration) {
        while self.cursor < self.timeline.len() && self.timeline[self.cursor].0 <= elapsed {
            let (_, event) = self.timeline[self.cursor];
            self.cursor += 1;

            match event {
                ReplayEvent::Heading(sample) => {
                    if let Some((active, callback)) = self.heading_sink.as_mut()
                        && active.get()
                    {
                        callback(sample);
                    }
                }
                ReplayEvent::Location(sample) => {
                    if let Some((active, callback)) = self.location_sink.as_mut()
                        && active.get()
                    {
                        callback(sample);
                    }
                }
            }
        }
    }

    /// Whether all scripted events have been delivered or discarded
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.timeline.len()
    }
}

impl Default for ReplaySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for ReplaySource {
    fn request_permission(&mut self) -> Permission {
        self.permission
    }

    fn subscribe_heading(&mut self, callback: HeadingCallback) -> SensorResult<Subscription> {
        let active = Rc::new(Cell::new(true));
        self.heading_sink = Some((active.clone(), callback));
        debug!("heading subscription started");
        Ok(Subscription::new(move || active.set(false)))
    }

    fn subscribe_location(
        &mut self,
        _options: LocationOptions,
        callback: LocationCallback,
    ) -> SensorResult<Subscription> {
        let active = Rc::new(Cell::new(true));
        self.location_sink = Some((active.clone(), callback));
        debug!("location subscription started");
        Ok(Subscription::new(move || active.set(false)))
    }
}
