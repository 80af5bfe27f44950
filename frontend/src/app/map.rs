use yew::prelude::*;

use crate::data::source::DataSource;
use crate::data::whales::{marker_position, WhaleFilter, WhaleSource, WhaleStatus};

#[function_component]
pub fn AppMap() -> Html {
    let source = use_memo(|_| WhaleSource::default(), ());
    let filter = use_state(WhaleFilter::default);
    let selected = use_state(|| None::<&'static str>);

    let visible = source.filtered(*filter);
    let detail = selected.and_then(|id| source.find(id).cloned());

    let select = |id: &'static str| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| {
            selected.set(if *selected == Some(id) { None } else { Some(id) });
        })
    };

    html! {
        <div class="page app-page whale-map-page">
            <div class="page-header with-action">
                <h1>{"Whale Tracker"}</h1>
                <p class="muted">{format!("Total tracked: {}", source.len())}</p>
            </div>

            <div class="filter-bar">
                { for WhaleFilter::ALL.iter().map(|f| {
                    let f = *f;
                    let onclick = {
                        let filter = filter.clone();
                        Callback::from(move |_: MouseEvent| filter.set(f))
                    };
                    html! {
                        <button type="button" class={classes!("filter", (*filter == f).then_some("active"))} onclick={onclick}>
                            {f.label()}
                        </button>
                    }
                })}
            </div>

            <div class="whale-map-layout">
                <div class="card whale-map">
                    <p class="map-caption">{"Interactive Map"}</p>
                    { for visible.iter().enumerate().map(|(i, whale)| {
                        let (left, top) = marker_position(i);
                        let style = format!("left: {}%; top: {}%;", left, top);
                        html! {
                            <button type="button" key={whale.id}
                                class={classes!("whale-marker", whale.status.dot_class(), (*selected == Some(whale.id)).then_some("selected"))}
                                style={style} title={whale.name} onclick={select(whale.id)}>
                                {"🐋"}
                            </button>
                        }
                    })}
                    <div class="map-legend">
                        <span><i class="dot dot-active"></i>{"Active"}</span>
                        <span><i class="dot dot-migrating"></i>{"Migrating"}</span>
                        <span><i class="dot dot-inactive"></i>{"Inactive"}</span>
                    </div>
                </div>

                <aside class="whale-sidebar">
                    if let Some(whale) = detail {
                        <div class="card whale-detail">
                            <h2>{whale.name}</h2>
                            <p class="muted">{whale.species}</p>
                            <dl class="details">
                                <dt>{"Status"}</dt>
                                <dd><span class={classes!("dot", whale.status.dot_class())}></span>{whale.status.label()}</dd>
                                <dt>{"Location"}</dt>
                                <dd>{format!("{:.4}, {:.4}", whale.lat, whale.lng)}</dd>
                                <dt>{"Last seen"}</dt>
                                <dd>{whale.last_seen}</dd>
                            </dl>
                        </div>
                    } else {
                        <div class="card whale-detail empty-state">{"Select a whale to see details."}</div>
                    }

                    <div class="stats-grid compact">
                        <div class="stat-card">
                            <p class="stat-label">{"Active"}</p>
                            <p class="stat-value">{source.count(WhaleStatus::Active)}</p>
                        </div>
                        <div class="stat-card">
                            <p class="stat-label">{"Migrating"}</p>
                            <p class="stat-value">{source.count(WhaleStatus::Migrating)}</p>
                        </div>
                    </div>

                    <ul class="whale-list">
                        { for visible.iter().map(|whale| html! {
                            <li key={whale.id} onclick={select(whale.id)}
                                class={classes!((*selected == Some(whale.id)).then_some("selected"))}>
                                <span class={classes!("dot", whale.status.dot_class())}></span>
                                <span class="whale-name">{whale.name}</span>
                                <span class="muted">{whale.species}</span>
                            </li>
                        })}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
