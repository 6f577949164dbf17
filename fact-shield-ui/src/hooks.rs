use crate::bridge;
use fact_shield_core::query::{ListQuery, ListState};
use fact_shield_core::ClaimStatus;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

/// Claims for `status`, re-fetched whenever `status` changes. Responses for a
/// superseded status, or arriving after unmount, are dropped.
pub fn use_claims(status: impl Into<MaybeSignal<ClaimStatus>>) -> Signal<ListState> {
    let status = status.into();
    let query = create_rw_signal(ListQuery::default());

    create_effect(move |_| {
        let status = status.get();
        let Some(generation) = query.try_update(ListQuery::begin) else {
            return;
        };
        spawn_local(async move {
            let result = bridge::api().claims_by_status(status).await;
            query.try_update(|q| q.resolve(generation, result));
        });
    });

    on_cleanup(move || {
        query.try_update(ListQuery::invalidate);
    });

    create_memo(move |_| query.with(|q| q.state().clone())).into()
}
