use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::data::buoys::{project, BuoySource, RiskLevel, REFRESH_INTERVAL_MS};
use crate::data::source::DataSource;

pub enum MapAction {
    Refresh,
}

impl Reducible for BuoySource {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: MapAction) -> Rc<Self> {
        match action {
            MapAction::Refresh => {
                let mut next = (*self).clone();
                next.refresh(&mut rand::thread_rng());
                next.into()
            }
        }
    }
}

/// Buoy network demo. Detection probabilities are re-rolled on a timer.
#[function_component]
pub fn WorldMap() -> Html {
    let buoys = use_reducer(BuoySource::default);
    let selected = use_state(|| None::<u32>);

    {
        let dispatcher = buoys.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(REFRESH_INTERVAL_MS, move || {
                    dispatcher.dispatch(MapAction::Refresh);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let popup = selected.and_then(|id| buoys.list().iter().find(|b| b.id == id).cloned());

    html! {
        <div class="world-map">
            <div class="map-ocean">
                { for buoys.list().iter().map(|buoy| {
                    let (x, y) = project(buoy.lat, buoy.lng);
                    let color = RiskLevel::from_probability(buoy.whale_probability).color();
                    let style = format!("left: {:.2}%; top: {:.2}%; background-color: {};", x, y, color);
                    let onclick = {
                        let selected = selected.clone();
                        let id = buoy.id;
                        Callback::from(move |_: MouseEvent| {
                            selected.set(if *selected == Some(id) { None } else { Some(id) });
                        })
                    };
                    html! {
                        <button key={buoy.id} class="buoy-marker" style={style} onclick={onclick} title={buoy.name}>
                            {format!("{}%", buoy.whale_probability)}
                        </button>
                    }
                })}
            </div>
            if let Some(buoy) = popup {
                <div class="buoy-popup">
                    <h3>{buoy.name}</h3>
                    <p>{format!("Location: {:.2}°, {:.2}°", buoy.lat, buoy.lng)}</p>
                    <p class="probability" style={format!("color: {};", RiskLevel::from_probability(buoy.whale_probability).color())}>
                        {format!("Whale Probability: {}%", buoy.whale_probability)}
                    </p>
                </div>
            }
            <div class="map-legend">
                <span><i style="background:#22c55e"></i>{"Low"}</span>
                <span><i style="background:#f59e0b"></i>{"Elevated"}</span>
                <span><i style="background:#ef4444"></i>{"High"}</span>
            </div>
        </div>
    }
}
