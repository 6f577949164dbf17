mod app;
mod bridge;
mod hooks;

pub mod components {
    pub mod claims_panel;
    pub mod dashboard;
    pub mod landing;
    pub mod layout;
    pub mod sign_in;
}

use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).expect("failed to init console logger");

    mount_to_body(|| view! { <app::App/> });
}
