use chrono::Local;
use yew::prelude::*;

use super::layout::Session;
use crate::auth::session::display_or;
use crate::components::copy_button::CopyButton;
use crate::components::usage_graph::UsageGraph;
use crate::counter::format_thousands;
use crate::data::activity::recent_activity;
use crate::data::api_keys::{mask_key, ApiKeyStore};
use crate::data::usage::{daily_usage, summarize, MONTHLY_QUOTA};

const QUICK_START: &str = "curl -X GET \"https://api.mobylabs.com/v1/whales\" \\\n  -H \"Authorization: Bearer $API_KEY\"";

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: AttrValue,
    value: AttrValue,
    #[prop_or_default]
    note: Option<AttrValue>,
    #[prop_or_default]
    trend_up: bool,
}

#[function_component]
fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <p class="stat-label">{props.label.clone()}</p>
            <p class="stat-value">{props.value.clone()}</p>
            if let Some(note) = &props.note {
                <p class={classes!("stat-note", props.trend_up.then_some("up"))}>{note.clone()}</p>
            }
        </div>
    }
}

#[function_component]
pub fn Dashboard() -> Html {
    let session = use_context::<Session>();
    let show_key = use_state(|| false);
    let points = use_memo(|_| daily_usage(Local::now().date_naive()), ());

    let Some(session) = session else {
        return html! {};
    };

    let summary = summarize(&points, MONTHLY_QUOTA);
    let first_name = display_or(&session.user.metadata.first_name, "Developer");
    let key = ApiKeyStore::default()
        .primary()
        .map(|k| k.key.clone())
        .unwrap_or_default();
    let shown_key = if *show_key { key.clone() } else { mask_key(&key) };

    let toggle_key = {
        let show_key = show_key.clone();
        Callback::from(move |_: MouseEvent| show_key.set(!*show_key))
    };

    html! {
        <div class="page app-page dashboard">
            <div class="page-header">
                <h1>{format!("Welcome back, {}", first_name)}</h1>
                <p>{"Manage your Moby Labs API access and monitor your usage."}</p>
            </div>

            <div class="stats-grid">
                <StatCard
                    label="API Calls Today"
                    value={format_thousands(summary.today)}
                    note={AttrValue::from(format!("{:+.1}% from yesterday", summary.change_pct))}
                    trend_up={summary.change_pct >= 0.0}
                />
                <StatCard label="Remaining Quota" value={format_thousands(summary.remaining)} />
                <StatCard label="Avg Response Time" value="142ms" note={AttrValue::from("-8ms from last week")} trend_up=true />
                <StatCard label="Uptime" value="99.8%" />
            </div>

            <div class="dashboard-grid">
                <section class="card api-key-card">
                    <h2>{"Your API Key"}</h2>
                    <div class="key-row">
                        <code class="api-key">{shown_key}</code>
                        <button type="button" class="icon-button" onclick={toggle_key}
                            title={if *show_key { "Hide API key" } else { "Show API key" }}>
                            { if *show_key { "🙈" } else { "👁" } }
                        </button>
                        <CopyButton text={key} title="Copy API key" />
                    </div>
                    <p class="warning">
                        {"Keep your API key secure. Do not share it publicly or commit it to version control."}
                    </p>

                    <h3>{"Quick Start"}</h3>
                    <pre class="code-block">{QUICK_START}</pre>
                </section>

                <section class="card activity-card">
                    <h2>{"Recent Activity"}</h2>
                    <ul class="activity-list">
                        { for recent_activity().into_iter().map(|item| html! {
                            <li class="activity-item">
                                <div>
                                    <p class="activity-endpoint">{item.endpoint()}</p>
                                    <p class="activity-time">{item.ago}</p>
                                </div>
                                <span class={classes!("badge", item.badge_class())}>{item.status}</span>
                            </li>
                        })}
                    </ul>
                </section>
            </div>

            <section class="card">
                <h2>{"Usage, last 14 days"}</h2>
                <UsageGraph points={(*points).clone()} />
            </section>
        </div>
    }
}
