use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::counter::VISIBILITY_THRESHOLD;
use crate::scroll::fade::use_fade_in_out;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct TimelineStatProps {
    pub label: AttrValue,
    pub value: u64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub description: AttrValue,
    pub start: f64,
    pub end: f64,
    #[prop_or_default]
    pub side: Side,
    /// The section whose scroll progress drives the fade.
    pub section: NodeRef,
}

/// A stat card that fades in and out over its slice of the section and starts
/// its counter once it is mostly opaque.
#[function_component]
pub fn TimelineStat(props: &TimelineStatProps) -> Html {
    let opacity = use_fade_in_out(props.section.clone(), props.start, props.end);
    let is_visible = opacity > VISIBILITY_THRESHOLD;

    let style = format!(
        "opacity: {:.3}; transform: translateY({:.1}px);",
        opacity,
        (1.0 - opacity) * 15.0
    );
    let side = match props.side {
        Side::Left => "timeline-stat left",
        Side::Right => "timeline-stat right",
    };

    html! {
        <div class={side} style={style}>
            <div class="stat-card">
                <div class="stat-label">{props.label.clone()}</div>
                <div class="stat-value">
                    <AnimatedCounter
                        end={props.value}
                        prefix={props.prefix.clone()}
                        suffix={props.suffix.clone()}
                        is_visible={is_visible}
                    />
                </div>
                <p class="stat-description">{props.description.clone()}</p>
            </div>
        </div>
    }
}
