use crate::bridge;
use fact_shield_core::queue::{vote_outcome, EscalatedQueue, VoteOutcome};
use fact_shield_core::session::DashboardAccess;
use fact_shield_core::Vote;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Escalated queue for one signed-in fact-checker. Only mounted with a
/// non-empty token.
#[component]
pub fn Dashboard(access: DashboardAccess) -> impl IntoView {
    let queue = create_rw_signal(EscalatedQueue::default());
    let access = store_value(access);

    let load = move || {
        let Some(generation) = queue.try_update(EscalatedQueue::begin_load) else {
            return;
        };
        let Some(access) = access.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = access.fetch_queue(&bridge::api()).await;
            queue.try_update(|q| q.finish_load(generation, result));
        });
    };

    let cast_vote = move |claim_id: String, vote: Vote| {
        let Some(access) = access.try_get_value() else {
            return;
        };
        spawn_local(async move {
            let result = access.cast_vote(&bridge::api(), &claim_id, vote).await;
            let outcome = vote_outcome(&claim_id, result);
            // The queue may be gone by now; the alert still shows.
            queue.try_update(|q| q.apply_vote(&claim_id, &outcome));
            if let VoteOutcome::Failed(message) = outcome {
                bridge::alert(&message);
            }
        });
    };

    load();

    let state = move || queue.with(|q| q.state().clone());

    view! {
      <div class="container main-container">
        <div class="dash-head">
          <h2 class="dash-title">"Escalated Queue"</h2>
          <button class="btn" style="margin-bottom: 10px" on:click=move |_| load()>
            "Refresh"
          </button>
        </div>
        <Show when=move || state().loading fallback=|| ()>
          <div class="muted">"Loading…"</div>
        </Show>
        <Show when=move || state().has_error() fallback=|| ()>
          <div class="error">{move || state().error}</div>
        </Show>
        <ul class="claim-list">
          <For
            each=move || state().items
            key=|c| c.id.clone()
            children=move |c| {
              let (id_true, id_false) = (c.id.clone(), c.id.clone());
              let reason = c.explanation.clone().filter(|e| !e.is_empty());
              view! {
                <li class="card card-inset">
                  <div class="claim-text">{c.display_text().to_string()}</div>
                  {reason.map(|r| view! {
                    <div class="muted small">{format!("Reason: {r}")}</div>
                  })}
                  <div class="vote-row">
                    <button
                      class="btn btn-primary"
                      on:click=move |_| cast_vote(id_true.clone(), Vote::True)
                    >
                      "Vote TRUE"
                    </button>
                    <button
                      class="btn btn-danger"
                      on:click=move |_| cast_vote(id_false.clone(), Vote::False)
                    >
                      "Vote FALSE"
                    </button>
                  </div>
                </li>
              }
            }
          />
        </ul>
        <Show when=move || queue.with(EscalatedQueue::is_drained) fallback=|| ()>
          <div class="soft" style="margin-top: 15px">"No pending items. 🎉"</div>
        </Show>
      </div>
    }
}
