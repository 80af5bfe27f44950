//! Step-through rules for the pinned "process" section: the scroll distance of
//! a tall container is split into equal slices, one per step.

/// Share of a slice used for the text fade at each end.
const TEXT_FADE: f64 = 0.2;
/// Vertical travel of step text, in px.
const TEXT_TRAVEL: f64 = 50.0;
/// Where inside a slice the side navigation lands.
const JUMP_OFFSET: f64 = 0.3;
/// Scroll offset after which the "scroll to begin" prompt hides.
pub const PROMPT_HIDE_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessPosition {
    pub active: usize,
    /// Progress through the active step's slice, in [0, 1].
    pub progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMotion {
    pub opacity: f64,
    pub translate_y: f64,
}

impl Default for ProcessPosition {
    fn default() -> Self {
        Self {
            active: 0,
            progress: 0.0,
        }
    }
}

impl ProcessPosition {
    /// `scrolled` is how far the container top has moved above the viewport top.
    pub fn from_scroll(
        scrolled: f64,
        container_height: f64,
        viewport_height: f64,
        steps: usize,
    ) -> Self {
        let total = container_height - viewport_height;
        if steps == 0 || total <= 0.0 || scrolled.is_nan() || scrolled < 0.0 {
            return Self::default();
        }
        if scrolled > total {
            return Self {
                active: steps - 1,
                progress: 1.0,
            };
        }

        let slice = total / steps as f64;
        let index = (scrolled / slice).floor() as usize;
        Self {
            active: index.min(steps - 1),
            progress: (scrolled % slice) / slice,
        }
    }

    pub fn is_last(&self, steps: usize) -> bool {
        steps > 0 && self.active == steps - 1
    }

    /// Background layer opacity: the active image fades out while the next fades in.
    pub fn background_opacity(&self, index: usize) -> f64 {
        if index == self.active {
            1.0 - self.progress * 0.5
        } else if index == self.active + 1 {
            self.progress * 0.5
        } else {
            0.0
        }
    }

    pub fn background_scale(&self, index: usize) -> f64 {
        if index == self.active {
            1.0 + self.progress * 0.05
        } else {
            1.0
        }
    }

    pub fn text_motion(&self, index: usize) -> TextMotion {
        if index != self.active {
            return TextMotion {
                opacity: 0.0,
                translate_y: TEXT_TRAVEL,
            };
        }
        let p = self.progress;
        if p < TEXT_FADE {
            let t = p / TEXT_FADE;
            TextMotion {
                opacity: t,
                translate_y: TEXT_TRAVEL * (1.0 - t),
            }
        } else if p < 1.0 - TEXT_FADE {
            TextMotion {
                opacity: 1.0,
                translate_y: 0.0,
            }
        } else {
            let t = (p - (1.0 - TEXT_FADE)) / TEXT_FADE;
            TextMotion {
                opacity: 1.0 - t,
                translate_y: -TEXT_TRAVEL * t,
            }
        }
    }

    /// Fade towards the section that follows, over the first half of the last step.
    pub fn exit_overlay_opacity(&self, steps: usize) -> f64 {
        if self.is_last(steps) {
            (self.progress * 2.0).min(1.0)
        } else {
            0.0
        }
    }
}

/// Absolute scroll offset that lands the side navigation on step `index`.
pub fn jump_target(
    offset_top: f64,
    container_height: f64,
    viewport_height: f64,
    steps: usize,
    index: usize,
) -> f64 {
    let total = (container_height - viewport_height).max(0.0);
    if steps == 0 {
        return offset_top;
    }
    let slice = total / steps as f64;
    offset_top + index as f64 * slice + slice * JUMP_OFFSET
}

pub fn prompt_visible(scroll_y: f64) -> bool {
    scroll_y <= PROMPT_HIDE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    // Five steps in a 6 * 800px container: 4000px of travel, 800px per step.
    fn at(scrolled: f64) -> ProcessPosition {
        ProcessPosition::from_scroll(scrolled, 4800.0, 800.0, 5)
    }

    #[test]
    fn before_container_is_first_step() {
        assert_eq!(at(-120.0), ProcessPosition::default());
    }

    #[test]
    fn past_container_pins_last_step() {
        let pos = at(4200.0);
        assert_eq!(pos.active, 4);
        assert_eq!(pos.progress, 1.0);
    }

    #[test]
    fn slices_scroll_evenly() {
        let pos = at(1000.0);
        assert_eq!(pos.active, 1);
        assert!((pos.progress - 0.25).abs() < 1e-12);

        let end = at(4000.0);
        assert_eq!(end.active, 4);
    }

    #[test]
    fn degenerate_containers_stay_at_start() {
        assert_eq!(
            ProcessPosition::from_scroll(100.0, 600.0, 800.0, 5),
            ProcessPosition::default()
        );
        assert_eq!(
            ProcessPosition::from_scroll(100.0, 4800.0, 800.0, 0),
            ProcessPosition::default()
        );
    }

    #[test]
    fn backgrounds_crossfade() {
        let pos = ProcessPosition {
            active: 2,
            progress: 0.5,
        };
        assert_eq!(pos.background_opacity(2), 0.75);
        assert_eq!(pos.background_opacity(3), 0.25);
        assert_eq!(pos.background_opacity(1), 0.0);
        assert!((pos.background_scale(2) - 1.025).abs() < 1e-12);
        assert_eq!(pos.background_scale(3), 1.0);
    }

    #[test]
    fn text_enters_holds_and_leaves() {
        let entering = ProcessPosition {
            active: 0,
            progress: 0.1,
        };
        let m = entering.text_motion(0);
        assert!((m.opacity - 0.5).abs() < 1e-12);
        assert!((m.translate_y - 25.0).abs() < 1e-9);

        let holding = ProcessPosition {
            active: 0,
            progress: 0.5,
        };
        assert_eq!(
            holding.text_motion(0),
            TextMotion {
                opacity: 1.0,
                translate_y: 0.0
            }
        );

        let leaving = ProcessPosition {
            active: 0,
            progress: 0.9,
        };
        let m = leaving.text_motion(0);
        assert!((m.opacity - 0.5).abs() < 1e-9);
        assert!((m.translate_y + 25.0).abs() < 1e-9);

        assert_eq!(holding.text_motion(1).opacity, 0.0);
    }

    #[test]
    fn exit_overlay_only_on_last_step() {
        let last = ProcessPosition {
            active: 4,
            progress: 0.3,
        };
        assert!((last.exit_overlay_opacity(5) - 0.6).abs() < 1e-12);
        assert_eq!(at(100.0).exit_overlay_opacity(5), 0.0);
    }

    #[test]
    fn jump_lands_inside_target_slice() {
        let target = jump_target(1200.0, 4800.0, 800.0, 5, 2);
        assert!((target - 3040.0).abs() < 1e-9);
        let landed = at(target - 1200.0);
        assert_eq!(landed.active, 2);
        assert!((landed.progress - 0.3).abs() < 1e-9);
    }

    #[test]
    fn prompt_hides_after_threshold() {
        assert!(prompt_visible(0.0));
        assert!(prompt_visible(50.0));
        assert!(!prompt_visible(51.0));
    }
}
