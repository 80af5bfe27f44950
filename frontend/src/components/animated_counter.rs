use yew::prelude::*;

use crate::browser::FrameLoop;
use crate::counter::{format_thousands, CounterAnimator, DEFAULT_DURATION_MS};

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: f64,
    #[prop_or(true)]
    pub is_visible: bool,
}

#[function_component]
pub fn AnimatedCounter(props: &AnimatedCounterProps) -> Html {
    let animator = use_mut_ref(|| CounterAnimator::new(props.end, props.duration_ms));
    let frames = use_mut_ref(|| None::<FrameLoop>);
    let count = use_state_eq(|| 0_u64);

    // The frame chain outlives visibility changes; only unmount stops it.
    {
        let frames = frames.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frames.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let animator = animator.clone();
        let frames = frames.clone();
        let count = count.clone();
        use_effect_with_deps(
            move |&(end, duration_ms, visible): &(u64, f64, bool)| {
                if animator.borrow_mut().retarget(end, duration_ms) {
                    frames.borrow_mut().take();
                    count.set(0);
                }
                if visible && animator.borrow_mut().trigger() {
                    if animator.borrow().needs_frames() {
                        let driver = animator.clone();
                        *frames.borrow_mut() = FrameLoop::start(move |now| {
                            let (value, more) = {
                                let mut animator = driver.borrow_mut();
                                (animator.sample(now), animator.needs_frames())
                            };
                            count.set(value);
                            more
                        });
                    } else {
                        count.set(animator.borrow().displayed());
                    }
                }
                || ()
            },
            (props.end, props.duration_ms, props.is_visible),
        );
    }

    html! {
        <span class="tabular-nums">
            {props.prefix.clone()}{format_thousands(*count)}{props.suffix.clone()}
        </span>
    }
}
