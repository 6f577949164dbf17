use fact_shield_core::query::ListState;
use leptos::*;

#[component]
pub fn ClaimsPanel(
    title: &'static str,
    color: &'static str,
    state: Signal<ListState>,
) -> impl IntoView {
    view! {
      <div class="card">
        <div class="panel-head">
          <span class="status-dot" style=format!("background: {color}")></span>
          <h3 class="panel-title">{title}</h3>
        </div>
        <Show when=move || state.with(|s| s.loading) fallback=|| ()>
          <div class="muted">"Loading…"</div>
        </Show>
        <Show when=move || state.with(ListState::has_error) fallback=|| ()>
          <div class="error">{move || state.with(|s| s.error.clone())}</div>
        </Show>
        <Show when=move || state.with(ListState::is_settled_empty) fallback=|| ()>
          <div class="soft">"Nothing here yet."</div>
        </Show>
        <ul class="claim-list">
          <For
            each=move || state.with(|s| s.items.clone())
            key=|c| c.id.clone()
            children=move |c| view! {
              <li class="card card-inset">
                <div>{c.display_text().to_string()}</div>
                <div class="claim-meta">
                  "Status: " <span class="mono">{c.status.as_str()}</span>
                </div>
              </li>
            }
          />
        </ul>
      </div>
    }
}
