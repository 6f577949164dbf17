use crate::components::dashboard::Dashboard;
use crate::components::landing::Landing;
use crate::components::layout::{Footer, Header};
use crate::components::sign_in::SignIn;
use fact_shield_core::session::{Route, Session};
use fact_shield_core::SignInResponse;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let session = create_rw_signal(Session::default());

    // Memos so that re-selecting the current route does not remount it.
    let route = create_memo(move |_| session.with(Session::route));
    let access = create_memo(move |_| session.with(Session::dashboard_access));

    let on_authed = move |resp: SignInResponse| {
        session.update(|s| s.sign_in(resp.access_token, resp.user));
    };

    view! {
      <div class="app">
        <Header session=session route=route/>
        <main class="main">
          {move || match route.get() {
            Route::Landing => view! {
              <Landing on_go_sign_in=move |_: ()| session.update(|s| s.navigate(Route::SignIn))/>
            }.into_view(),
            Route::SignIn => view! { <SignIn on_authed=on_authed/> }.into_view(),
            Route::Dashboard => match access.get() {
              Some(access) => view! { <Dashboard access=access/> }.into_view(),
              None => view! {
                <div class="container main-container">
                  <div class="soft">"Please sign in to access the fact-checker dashboard."</div>
                </div>
              }.into_view(),
            },
          }}
        </main>
        <Footer/>
      </div>
    }
}
