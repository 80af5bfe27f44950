/// Default run time of a counter animation, in ms.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;
/// Opacity or intersection ratio above which a counter counts as on screen.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    NotStarted,
    /// `started_at` is pinned by the first animation frame after the trigger.
    Animating { started_at: Option<f64> },
    Settled,
}

/// Counts from 0 up to `target` once. Only `retarget` with new props moves it
/// back out of `Settled`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimator {
    target: u64,
    duration_ms: f64,
    phase: CounterPhase,
}

pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// Value shown `elapsed_ms` into an animation of `duration_ms`.
pub fn counter_value(elapsed_ms: f64, duration_ms: f64, target: u64) -> u64 {
    if target == 0 || !(duration_ms > 0.0) {
        return target;
    }
    let p = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if p >= 1.0 {
        return target;
    }
    (ease_out_quart(p) * target as f64).floor() as u64
}

impl CounterAnimator {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            phase: CounterPhase::NotStarted,
        }
    }

    /// Points the counter at new props. A change starts it over from 0 and
    /// returns true; the same props leave it running.
    pub fn retarget(&mut self, target: u64, duration_ms: f64) -> bool {
        if self.target == target && self.duration_ms == duration_ms {
            return false;
        }
        *self = Self::new(target, duration_ms);
        true
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    fn settles_immediately(&self) -> bool {
        self.target == 0 || !(self.duration_ms > 0.0)
    }

    /// Starts the animation. Returns false when it has already been started,
    /// and settles straight away when there is nothing to animate.
    pub fn trigger(&mut self) -> bool {
        if self.phase != CounterPhase::NotStarted {
            return false;
        }
        self.phase = if self.settles_immediately() {
            CounterPhase::Settled
        } else {
            CounterPhase::Animating { started_at: None }
        };
        true
    }

    /// Value to render for an animation frame stamped `now` (ms).
    pub fn sample(&mut self, now: f64) -> u64 {
        match self.phase {
            CounterPhase::NotStarted => 0,
            CounterPhase::Settled => self.target,
            CounterPhase::Animating { started_at } => {
                let started_at = started_at.unwrap_or(now);
                let elapsed = (now - started_at).max(0.0);
                if elapsed >= self.duration_ms {
                    self.phase = CounterPhase::Settled;
                    self.target
                } else {
                    self.phase = CounterPhase::Animating {
                        started_at: Some(started_at),
                    };
                    counter_value(elapsed, self.duration_ms, self.target)
                }
            }
        }
    }

    /// Value without advancing the phase.
    pub fn displayed(&self) -> u64 {
        match self.phase {
            CounterPhase::Settled => self.target,
            _ => 0,
        }
    }

    pub fn needs_frames(&self) -> bool {
        matches!(self.phase, CounterPhase::Animating { .. })
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
