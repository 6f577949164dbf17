use crate::bridge;
use fact_shield_core::signin::SignInForm;
use fact_shield_core::SignInResponse;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SignIn(#[prop(into)] on_authed: Callback<SignInResponse>) -> impl IntoView {
    let form = create_rw_signal(SignInForm::default());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(SignInForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = credentials.sign_in(&bridge::api()).await;
            form.try_update(|f| f.finish(&result));
            if let Ok(resp) = result {
                on_authed.call(resp);
            }
        });
    };

    let submitting = move || form.with(SignInForm::is_submitting);

    view! {
      <div class="container main-container center">
        <form on:submit=submit class="card auth-card">
          <h2 class="card-title">"Fact Checker Sign In"</h2>
          <label class="label">"Email"</label>
          <input
            class="input"
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            placeholder="you@example.org"
          />
          <div style="height: 10px"></div>
          <label class="label">"Password"</label>
          <input
            class="input"
            type="password"
            prop:value=move || form.with(|f| f.password.clone())
            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            placeholder="••••••••"
          />
          <Show when=move || form.with(|f| !f.error().is_empty()) fallback=|| ()>
            <div class="error small">{move || form.with(|f| f.error().to_string())}</div>
          </Show>
          <div style="height: 14px"></div>
          <button type="submit" class="btn btn-primary" disabled=submitting>
            {move || if submitting() { "Signing in…" } else { "Sign In" }}
          </button>
        </form>
      </div>
    }
}
