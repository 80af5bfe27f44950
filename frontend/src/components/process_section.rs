use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::smooth_scroll_to;
use crate::scroll::process::{jump_target, ProcessPosition};
use crate::scroll::progress::{viewport_height, ScrollListener};
use crate::Route;

struct Step {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    short_label: &'static str,
    description: &'static str,
    image: &'static str,
    blog_slug: &'static str,
    blog_label: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        id: "narw",
        title: "Meet Moby,",
        subtitle: "Fewer than 370 remain",
        short_label: "Meet Moby",
        description: "A North Atlantic Right Whale. One of the most endangered large whale species on Earth. Why? Human-caused deaths.",
        image: "/assets/north-atlantic-right-whale.jpg",
        blog_slug: "ship-strikes-preventing-whale-collisions",
        blog_label: "Learn about ship strike prevention",
    },
    Step {
        id: "buoy",
        title: "Solar-Powered Buoys",
        subtitle: "Always listening",
        short_label: "Our Buoys",
        description: "Our network of low-cost, weather-resistant buoys continuously monitor ocean acoustics in critical whale habitats. Each buoy captures underwater sounds and transmits data in real-time via satellite.",
        image: "/assets/buoy.jpg",
        blog_slug: "acoustic-detection-technology-explained",
        blog_label: "How acoustic detection works",
    },
    Step {
        id: "fft",
        title: "AI Sound Analysis",
        subtitle: "97.84% accuracy",
        short_label: "AI Analysis",
        description: "Our machine learning models analyze acoustic signatures using Fast Fourier Transform to detect whale calls with unprecedented precision. The system processes audio in real-time, identifying species-specific vocalizations.",
        image: "/assets/fft.jpg",
        blog_slug: "understanding-whale-vocalizations",
        blog_label: "Understanding whale vocalizations",
    },
    Step {
        id: "map",
        title: "Real-Time Whale Tracking",
        subtitle: "Instant alerts",
        short_label: "The Map",
        description: "When a whale is detected, its location is instantly mapped and shared with vessel operators, researchers, and conservation organizations. Our API enables proactive route planning and collision avoidance.",
        image: "/assets/ocean.jpg",
        blog_slug: "whale-migration-patterns",
        blog_label: "Explore whale migration patterns",
    },
];

fn capture_position(container: &HtmlElement) -> Option<ProcessPosition> {
    let window = web_sys::window()?;
    let rect = container.get_bounding_client_rect();
    Some(ProcessPosition::from_scroll(
        -rect.top(),
        container.offset_height() as f64,
        viewport_height(&window)?,
        STEPS.len(),
    ))
}

fn indicator_class(i: usize, active: usize) -> &'static str {
    if i == active {
        "indicator active"
    } else if i < active {
        "indicator done"
    } else {
        "indicator"
    }
}

/// Pinned full-screen storytelling section. The container is `(steps + 1)`
/// viewports tall and the sticky stage steps through as it scrolls past.
#[function_component]
pub fn ProcessSection() -> Html {
    let container = use_node_ref();
    let position = use_state_eq(ProcessPosition::default);
    let steps = STEPS.len();

    {
        let position = position.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let container = container.clone();
                let listener = ScrollListener::install(move || {
                    if let Some(next) = container
                        .cast::<HtmlElement>()
                        .and_then(|el| capture_position(&el))
                    {
                        position.set(next);
                    }
                });
                move || drop(listener)
            },
            container.clone(),
        );
    }

    let jump_to = {
        let container = container.clone();
        Callback::from(move |index: usize| {
            let Some(el) = container.cast::<HtmlElement>() else {
                return;
            };
            let Some(vh) = web_sys::window().and_then(|w| viewport_height(&w)) else {
                return;
            };
            smooth_scroll_to(jump_target(
                el.offset_top() as f64,
                el.offset_height() as f64,
                vh,
                steps,
                index,
            ));
        })
    };

    let pos = *position;
    let exit_style = format!("opacity: {:.3};", pos.exit_overlay_opacity(steps));
    let cue_style = if pos.is_last(steps) && pos.progress > 0.5 {
        "opacity: 0;"
    } else {
        "opacity: 1;"
    };

    html! {
        <section ref={container} class="process-section" style={format!("height: {}vh;", (steps + 1) * 100)}>
            <div class="process-top-fade"></div>
            <div class="process-stage">
                <div class="process-backgrounds">
                    { for STEPS.iter().enumerate().map(|(i, step)| {
                        let z = if i == pos.active { 2 } else if i == pos.active + 1 { 1 } else { 0 };
                        let style = format!("opacity: {:.3}; z-index: {};", pos.background_opacity(i), z);
                        let img_style = format!("transform: scale({:.4});", pos.background_scale(i));
                        html! {
                            <div key={step.id} class="process-background" style={style}>
                                <img src={step.image} alt={step.title} style={img_style} />
                                <div class="process-shade"></div>
                            </div>
                        }
                    })}
                </div>

                <div class="process-texts">
                    { for STEPS.iter().enumerate().map(|(i, step)| {
                        let motion = pos.text_motion(i);
                        let active = i == pos.active;
                        let wrapper = format!(
                            "opacity: {:.3}; transform: translateY({:.1}px); pointer-events: {};",
                            motion.opacity,
                            motion.translate_y,
                            if active { "auto" } else { "none" }
                        );
                        let badge = format!("transform: translateY({:.1}px);", motion.translate_y * 0.5);
                        let body = format!(
                            "opacity: {:.3}; transform: translateY({:.1}px);",
                            motion.opacity * 0.9,
                            motion.translate_y * 1.2
                        );
                        let link = format!(
                            "opacity: {:.3}; transform: translateY({:.1}px);",
                            motion.opacity * 0.9,
                            motion.translate_y * 1.4
                        );
                        html! {
                            <div key={step.id} class="process-text" style={wrapper}>
                                <div class="process-badge" style={badge}>{step.subtitle}</div>
                                <h2>{step.title}</h2>
                                <p style={body}>{step.description}</p>
                                <span class="process-link" style={link}>
                                    <Link<Route> to={Route::BlogPost { slug: step.blog_slug.to_string() }}>
                                        {step.blog_label}{" →"}
                                    </Link<Route>>
                                </span>
                                <div class="process-indicators">
                                    { for (0..steps).map(|j| html! {
                                        <div class={indicator_class(j, pos.active)}></div>
                                    })}
                                </div>
                            </div>
                        }
                    })}
                </div>

                <div class="process-cue" style={cue_style}>
                    <span>{"Scroll"}</span>
                    <div class="mouse"><div class="wheel"></div></div>
                </div>

                <nav class="process-nav">
                    { for STEPS.iter().enumerate().map(|(i, step)| {
                        let onclick = {
                            let jump_to = jump_to.clone();
                            Callback::from(move |_: MouseEvent| jump_to.emit(i))
                        };
                        html! {
                            <button key={step.id} class={indicator_class(i, pos.active)} onclick={onclick}>
                                <span class="nav-label">{step.short_label}</span>
                                <span class="nav-number">{format!("{:02}", i + 1)}</span>
                                <span class="nav-bar"></span>
                            </button>
                        }
                    })}
                </nav>

                <div class="process-exit-fade" style={exit_style}></div>
            </div>
        </section>
    }
}
