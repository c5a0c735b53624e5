//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Krypt"</span>
                </A>
                {move || match session.account.get() {
                    Some(address) => view! {
                        <span class="nav-account" title=address.clone()>
                            {truncate_address(&address)}
                        </span>
                    }.into_any(),
                    None => view! {
                        <button class="btn nav-connect" on:click=move |_| session.connect()>
                            "Connect Wallet"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
