use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::timeline_stat::{Side, TimelineStat};
use crate::counter::VISIBILITY_THRESHOLD;
use crate::scroll::progress::use_section_scroll_progress;
use crate::scroll::visibility::use_in_view;

#[derive(Clone, Copy, PartialEq)]
enum Figure {
    Count {
        value: u64,
        suffix: &'static str,
    },
    Fixed(&'static str),
}

struct ImpactStat {
    label: &'static str,
    figure: Figure,
    description: &'static str,
}

const STATS: [ImpactStat; 6] = [
    ImpactStat {
        label: "North Atlantic Right Whales",
        figure: Figure::Count { value: 370, suffix: "" },
        description: "Fewer than 370 remain. Critically endangered with each one irreplaceable.",
    },
    ImpactStat {
        label: "Breeding Population",
        figure: Figure::Count { value: 70, suffix: "" },
        description: "Only 70 fertile females remain, threatening the species' future.",
    },
    ImpactStat {
        label: "Annual Cetacean Deaths",
        figure: Figure::Count { value: 300_000, suffix: "+" },
        description: "Whales, dolphins, and porpoises die each year from human activity.",
    },
    ImpactStat {
        label: "Human-Caused Deaths",
        figure: Figure::Count { value: 67, suffix: "%" },
        description: "Of whale deaths are preventable - caused by vessel strikes and entanglements.",
    },
    ImpactStat {
        label: "AI Detection Accuracy",
        figure: Figure::Fixed("97.84%"),
        description: "Our real-time AI system detects whales - 25% better than alternatives.",
    },
    ImpactStat {
        label: "Strike Mortality Reduction",
        figure: Figure::Count { value: 57, suffix: "%" },
        description: "Reduction in fatal strikes when vessels slow to 10 knots with real-time detection.",
    },
];

/// Slice of section progress in which the `index`-th card is shown.
fn stat_window(index: usize) -> (f64, f64) {
    let start = 0.1 + index as f64 * 0.13;
    (start, start + 0.17)
}

/// Tall pinned section: one stat card at a time fades in and out as the
/// section scrolls past, alternating sides.
#[function_component]
pub fn ImpactTimeline() -> Html {
    let section = use_node_ref();
    let progress = use_section_scroll_progress(section.clone());
    let line = format!("height: {:.1}%;", progress * 100.0);

    html! {
        <section ref={section.clone()} class="impact-timeline">
            <div class="impact-stage">
                <h2>{"The Impact"}</h2>
                <div class="timeline-line"><div class="timeline-fill" style={line}></div></div>
                { for STATS.iter().enumerate().filter_map(|(i, stat)| {
                    let Figure::Count { value, suffix } = stat.figure else {
                        return None;
                    };
                    let (start, end) = stat_window(i);
                    Some(html! {
                        <TimelineStat
                            label={stat.label}
                            value={value}
                            suffix={suffix}
                            description={stat.description}
                            start={start}
                            end={end}
                            side={if i % 2 == 0 { Side::Left } else { Side::Right }}
                            section={section.clone()}
                        />
                    })
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ImpactCardProps {
    index: usize,
}

#[function_component]
fn ImpactCard(props: &ImpactCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), VISIBILITY_THRESHOLD);
    let stat = &STATS[props.index];

    let figure = match stat.figure {
        Figure::Count { value, suffix } => html! {
            <AnimatedCounter end={value} suffix={suffix} is_visible={in_view} />
        },
        Figure::Fixed(text) => html! { {text} },
    };

    html! {
        <div ref={node} class="impact-card">
            <div class="stat-label">{stat.label}</div>
            <div class="stat-value">{figure}</div>
            <p>{stat.description}</p>
        </div>
    }
}

/// The same figures as a grid, each counter starting once its card is on screen.
#[function_component]
pub fn ImpactGrid() -> Html {
    html! {
        <section class="impact-grid-section">
            <h2>{"The Impact"}</h2>
            <div class="impact-grid">
                { for (0..STATS.len()).map(|index| html! { <ImpactCard index={index} /> }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::fade::FadeWindow;

    #[test]
    fn stat_windows_stay_inside_the_section() {
        for i in 0..STATS.len() {
            let (start, end) = stat_window(i);
            assert!(start >= 0.0 && end <= 1.0, "window {} = {:?}", i, (start, end));
            assert!(start < end);
        }
    }

    #[test]
    fn each_card_reaches_full_opacity() {
        for i in 0..STATS.len() {
            let (start, end) = stat_window(i);
            let window = FadeWindow::new(start, end);
            assert_eq!(window.opacity((start + end) / 2.0), 1.0);
        }
    }
}
