use yew::prelude::*;

use super::progress::use_section_scroll_progress;

/// Width of each soft edge, as a share of the tracked scroll range.
pub const DEFAULT_FADE_FRACTION: f64 = 0.08;

/// A slice of scroll progress over which an element is visible, with
/// quadratic fade-in and fade-out edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeWindow {
    start: f64,
    end: f64,
    fade: f64,
}

impl FadeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            fade: DEFAULT_FADE_FRACTION,
        }
    }

    pub fn with_fade(mut self, fade: f64) -> Self {
        self.fade = fade;
        self
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Fade length actually applied. Never longer than half the window, so the
    /// fade-in and fade-out legs cannot overlap.
    pub fn effective_fade(&self) -> f64 {
        self.fade.max(0.0).min(self.width() / 2.0)
    }

    pub fn opacity(&self, progress: f64) -> f64 {
        // Zero-width and inverted windows are visible nowhere.
        if !(self.width() > 0.0) {
            return 0.0;
        }
        if progress < self.start || progress > self.end {
            return 0.0;
        }

        let fade = self.effective_fade();
        if fade <= 0.0 {
            return 1.0;
        }

        let fade_in_end = self.start + fade;
        let fade_out_start = self.end - fade;
        if progress < fade_in_end {
            let t = (progress - self.start) / fade;
            (t * t).min(1.0)
        } else if progress > fade_out_start {
            let t = (self.end - progress) / fade;
            (t * t).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Opacity of a `[start, end]` window inside the section behind `section`.
#[hook]
pub fn use_fade_in_out(section: NodeRef, start: f64, end: f64) -> f64 {
    let progress = use_section_scroll_progress(section);
    FadeWindow::new(start, end).opacity(progress)
}
