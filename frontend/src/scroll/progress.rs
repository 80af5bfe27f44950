use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, Window};
use yew::prelude::*;

/// Live measurements of the whole document, taken on every scroll/resize event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Measurements of one element relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementMetrics {
    /// Bounding box top, relative to the viewport.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// Progress through the whole document in [0, 1].
///
/// Pages shorter than the viewport have nothing to scroll and report 0.
pub fn document_progress(metrics: DocumentMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    clamp_unit(metrics.scroll_y / scrollable)
}

/// Progress of an element through the viewport: 0 while its top edge sits at
/// the bottom of the viewport, 1 once its bottom edge has left through the top.
pub fn element_progress(metrics: ElementMetrics) -> f64 {
    let scrollable = metrics.height + metrics.viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let scrolled = metrics.viewport_height - metrics.top;
    clamp_unit(scrolled / scrollable)
}

pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

pub(crate) fn viewport_height(window: &Window) -> Option<f64> {
    window.inner_height().ok()?.as_f64()
}

impl DocumentMetrics {
    pub fn capture() -> Option<Self> {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        Some(Self {
            scroll_y: window.scroll_y().ok()?,
            document_height: root.scroll_height() as f64,
            viewport_height: viewport_height(&window)?,
        })
    }
}

impl ElementMetrics {
    pub fn capture(element: &HtmlElement) -> Option<Self> {
        let window = web_sys::window()?;
        let rect = element.get_bounding_client_rect();
        Some(Self {
            top: rect.top(),
            height: element.offset_height() as f64,
            viewport_height: viewport_height(&window)?,
        })
    }
}

const TRACKED_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Passive scroll + resize subscription on `window`.
///
/// The handler runs once at install time. Dropping the listener detaches it.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn install<F>(mut on_change: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        on_change();

        let callback = Closure::wrap(Box::new(on_change) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in TRACKED_EVENTS {
            if window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .is_err()
            {
                log::warn!("could not attach {} listener", event);
            }
        }

        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        for event in TRACKED_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Whole-page scroll progress, recomputed on every scroll and resize.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::install(move || {
                    if let Some(metrics) = DocumentMetrics::capture() {
                        progress.set(document_progress(metrics));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    *progress
}

/// Scroll progress of the element behind `section` through the viewport.
#[hook]
pub fn use_section_scroll_progress(section: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |section: &NodeRef| {
                let section = section.clone();
                let listener = ScrollListener::install(move || {
                    let Some(element) = section.cast::<HtmlElement>() else {
                        return;
                    };
                    if let Some(metrics) = ElementMetrics::capture(&element) {
                        progress.set(element_progress(metrics));
                    }
                });
                move || drop(listener)
            },
            section,
        );
    }
    *progress
}

/// Raw vertical scroll offset of the window.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state_eq(|| 0.0_f64);
    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::install(move || {
                    if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        offset.set(y);
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    *offset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(scroll_y: f64) -> DocumentMetrics {
        DocumentMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn document_progress_spans_unit_interval() {
        assert_eq!(document_progress(doc(0.0)), 0.0);
        assert_eq!(document_progress(doc(2200.0)), 1.0);
        assert!((document_progress(doc(1100.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn document_progress_is_monotone_and_bounded() {
        let mut last = 0.0;
        let mut s = 0.0;
        while s <= 2200.0 {
            let p = document_progress(doc(s));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= last);
            last = p;
            s += 37.5;
        }
    }

    #[test]
    fn document_progress_clamps_overscroll() {
        assert_eq!(document_progress(doc(-40.0)), 0.0);
        assert_eq!(document_progress(doc(5000.0)), 1.0);
    }

    #[test]
    fn short_document_reports_zero() {
        let metrics = DocumentMetrics {
            scroll_y: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(document_progress(metrics), 0.0);
        let exact = DocumentMetrics {
            document_height: 800.0,
            ..metrics
        };
        assert_eq!(document_progress(exact), 0.0);
    }

    #[test]
    fn element_progress_enters_and_exits() {
        let entering = ElementMetrics {
            top: 800.0,
            height: 1200.0,
            viewport_height: 800.0,
        };
        assert_eq!(element_progress(entering), 0.0);

        let exited = ElementMetrics {
            top: -1200.0,
            ..entering
        };
        assert_eq!(element_progress(exited), 1.0);

        let halfway = ElementMetrics {
            top: -200.0,
            ..entering
        };
        assert!((element_progress(halfway) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn element_progress_handles_degenerate_boxes() {
        let empty = ElementMetrics {
            top: 0.0,
            height: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(element_progress(empty), 0.0);
        let below = ElementMetrics {
            top: 2000.0,
            height: 100.0,
            viewport_height: 800.0,
        };
        assert_eq!(element_progress(below), 0.0);
    }

    #[test]
    fn progress_is_deterministic() {
        let m = doc(731.0);
        assert_eq!(document_progress(m), document_progress(m));
    }
}
