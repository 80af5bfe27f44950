use yew::prelude::*;

use crate::counter::format_thousands;
use crate::data::logs::{
    format_timestamp, latency_class, method_class, status_class, LogFilter, LogSource,
};
use crate::data::source::DataSource;

#[function_component]
pub fn AppLogs() -> Html {
    let logs = use_state(LogSource::default);
    let filter = use_state(LogFilter::default);

    let refresh = {
        let logs = logs.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*logs).clone();
            next.refresh(&mut rand::thread_rng());
            log::info!("Refreshed {} log entries", next.len());
            logs.set(next);
        })
    };

    let summary = logs.summary();
    let rows = logs.filtered(*filter);

    html! {
        <div class="page app-page logs-page">
            <div class="page-header with-action">
                <h1>{"API Logs"}</h1>
                <button type="button" class="btn btn-outline" onclick={refresh}>{"↻ Refresh"}</button>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <p class="stat-label">{"Total Requests"}</p>
                    <p class="stat-value">{format_thousands(logs.len() as u64)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Success Rate"}</p>
                    <p class="stat-value">{format!("{}%", summary.success_rate)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Avg Latency"}</p>
                    <p class="stat-value">{format!("{}ms", summary.avg_latency_ms)}</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{"Errors"}</p>
                    <p class="stat-value error">{summary.errors}</p>
                </div>
            </div>

            <div class="filter-bar">
                { for LogFilter::ALL.iter().map(|f| {
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

            <div class="card table-wrap">
                <table class="logs-table">
                    <thead>
                        <tr>
                            <th>{"Time"}</th>
                            <th>{"Method"}</th>
                            <th>{"Endpoint"}</th>
                            <th>{"Status"}</th>
                            <th>{"Latency"}</th>
                            <th>{"IP"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if rows.is_empty() {
                            <tr><td colspan="6" class="empty-state">{"No requests match this filter."}</td></tr>
                        }
                        { for rows.iter().map(|entry| html! {
                            <tr key={entry.id}>
                                <td>{format_timestamp(entry.timestamp)}</td>
                                <td><span class={classes!("method", method_class(entry.method))}>{entry.method}</span></td>
                                <td><code>{entry.endpoint}</code></td>
                                <td><span class={classes!("status", status_class(entry.status))}>{entry.status}</span></td>
                                <td class={latency_class(entry.latency_ms)}>{format!("{}ms", entry.latency_ms)}</td>
                                <td class="muted">{entry.ip}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
