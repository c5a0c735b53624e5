//! Transfer Page - wallet connection and the send form

use leptos::prelude::*;
use lib_core::{FormField, INSTALL_WALLET_NOTICE};
use shared::utils::format_address;

use crate::state::session::use_session_context;
use crate::utils::format::{address_hint, phase_status};

#[component]
pub fn TransferPage() -> impl IntoView {
    let session = use_session_context();
    let has_provider = session.has_provider();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.send();
    };

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">"Send Crypto across the world"</h1>
                <p class="main-subheader">
                    "Explore the crypto world. Buy and sell cryptocurrencies easily."
                </p>

                {(!has_provider).then(|| view! {
                    <div class="info"><p>{INSTALL_WALLET_NOTICE}</p></div>
                })}

                {move || (has_provider && session.account.get().is_none()).then(|| view! {
                    <button class="btn" on:click=move |_| session.connect()>
                        "Connect Wallet"
                    </button>
                })}

                {move || session.error.get().map(|err| view! {
                    <div class="error"><p>{err}</p></div>
                })}

                {move || session.account.get().map(|address| view! {
                    <div class="wallet-address">{format_address(&address, 6, 4)}</div>
                })}
            </div>

            <div class="right-section">
                <form class="card" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Address To"
                        prop:value=move || session.form.with(|f| f.address_to.clone())
                        on:input=move |ev| session.update_field(FormField::AddressTo, event_target_value(&ev))
                    />
                    {move || session.form.with(|f| address_hint(&f.address_to)).map(|hint| view! {
                        <p class="hint">{hint}</p>
                    })}

                    <input
                        type="number"
                        step="any"
                        min="0"
                        placeholder="Amount (ETH)"
                        prop:value=move || session.form.with(|f| f.amount.clone())
                        on:input=move |ev| session.update_field(FormField::Amount, event_target_value(&ev))
                    />

                    {move || if session.is_loading() {
                        view! { <div class="loader">"Loading..."</div> }.into_any()
                    } else {
                        view! {
                            <button type="submit" class="btn" disabled=move || session.is_busy()>
                                "Send now"
                            </button>
                        }.into_any()
                    }}

                    {move || session.phase.with(phase_status).map(|(class, text)| view! {
                        <p class=class>{text}</p>
                    })}
                </form>
            </div>
        </div>
    }
}
