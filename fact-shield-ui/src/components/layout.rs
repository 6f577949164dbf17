use crate::bridge;
use fact_shield_core::session::{Route, Session};
use leptos::*;

#[component]
pub fn Header(session: RwSignal<Session>, route: Memo<Route>) -> impl IntoView {
    let user_line = move || {
        session.with(|s| s.user().map(|u| format!("{} • {}", u.name, u.org)))
    };

    view! {
      <header class="header">
        <div class="container header-inner">
          <div class="badge">
            <span class="badge-dot"></span>
            <strong>"Fact Shield"</strong>
          </div>
          <nav class="nav">
            {Route::ALL
              .into_iter()
              .map(|target| view! {
                <button
                  class=move || if route.get() == target { "active" } else { "" }
                  on:click=move |_| session.update(|s| s.navigate(target))
                >
                  {target.nav_label()}
                </button>
              })
              .collect_view()}
          </nav>
          <div class="userbox">
            {move || match user_line() {
              Some(line) => view! {
                <div class="userline">
                  <span class="muted small">{line}</span>
                  <button class="btn" on:click=move |_| session.update(Session::sign_out)>
                    "Sign out"
                  </button>
                </div>
              }.into_view(),
              None => view! { <span class="muted small">"not signed in"</span> }.into_view(),
            }}
          </div>
        </div>
      </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = bridge::current_year();
    view! {
      <footer class="footer">
        <div class="container footer-inner">
          {format!("© {year} Fact Shield. All rights reserved.")}
        </div>
      </footer>
    }
}
