use std::time::{Duration, Instant};

use nativelib_core::profiling::profile_function;

/// Refresh rate assumed when the monitor does not report one.
pub const DEFAULT_REFRESH_RATE_HZ: u32 = 60;

/// Timing information for the frame being rendered.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Time elapsed since the previous frame
    pub delta: Duration,
    /// Time elapsed since the first frame of the current run
    pub elapsed: Duration,
    /// Number of frames rendered in the current run, including this one
    pub frame_count: u64,
}

impl FrameTime {
    pub const fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Seconds since the previous frame; zero on the first frame of a run.
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the first frame of the current run.
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces a [`FrameTime`] per rendered frame.
#[derive(Debug)]
pub(crate) struct TimeTracker {
    start_time: Option<Instant>,
    last_frame_time: Option<Instant>,
    current: FrameTime,
}

impl TimeTracker {
    pub fn new() -> Self {
        Self {
            start_time: None,
            last_frame_time: None,
            current: FrameTime::new(),
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        profile_function!();
        let start = *self.start_time.get_or_insert(now);
        let last = self.last_frame_time.replace(now).unwrap_or(now);

        self.current = FrameTime {
            delta: now.duration_since(last),
            elapsed: now.duration_since(start),
            frame_count: self.current.frame_count + 1,
        };
        self.current
    }

    pub fn current(&self) -> FrameTime {
        self.current
    }

    /// Forget the previous run so the next frame starts from zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Repeating deadline that paces rendering to the display refresh rate.
///
/// The timer is idle until [`start`](Self::start) and fires at most once per
/// [`poll`](Self::poll); ticks missed while the loop was busy are skipped
/// rather than replayed.
#[derive(Debug)]
pub struct FrameTimer {
    interval: Duration,
    next: Option<Instant>,
    /// A tick fired and its frame has not been rendered yet.
    frame_pending: bool,
}

impl FrameTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_micros(100)),
            next: None,
            frame_pending: false,
        }
    }

    /// Timer with the interval of a display refreshing at `millihertz`.
    pub fn from_refresh_rate_millihertz(millihertz: u32) -> Self {
        let millihertz = if millihertz == 0 {
            DEFAULT_REFRESH_RATE_HZ * 1000
        } else {
            millihertz
        };
        Self::new(Duration::from_secs_f64(1000.0 / millihertz as f64))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// Arm the timer; the first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now);
    }

    pub fn stop(&mut self) {
        self.next = None;
        self.frame_pending = false;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true if a tick is due at `now`, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }

        let mut following = next + self.interval;
        if following <= now {
            following = now + self.interval;
        }
        self.next = Some(following);
        self.frame_pending = true;
        true
    }

    /// Consume the frame owed by the last fired tick.
    ///
    /// Redraws the platform requests on its own (expose, live resize) find
    /// nothing pending and are not rendered.
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::from_refresh_rate_millihertz(DEFAULT_REFRESH_RATE_HZ * 1000)
    }
}
