//! エージェント画面
//!
//! ログイン状態を確認し、自分の物件（1ページ4件）と通知を表示する。
//! 物件の登録・編集はフォームに切り替えて行う。

use crate::api;
use crate::components::{
    notifications_panel::NotificationsPanel,
    property_form::{EditTarget, PropertyForm},
    property_listing::PropertyListing,
    status_message::use_toast,
};
use estate_common::pagination::AGENT_PANEL_PAGE_SIZE;
use estate_common::{Agent, Lifetime};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, PartialEq)]
enum Session {
    Checking,
    SignedOut,
    SignedIn(Agent),
}

#[component]
pub fn AgentPanel() -> impl IntoView {
    let toast = use_toast();
    let (session, set_session) = signal(Session::Checking);

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    Effect::new(move |_| {
        let guard = lifetime.begin();
        spawn_local(async move {
            let Some(result) = guard.accept(api::fetch_auth_status().await) else {
                return;
            };
            let next = match result {
                Ok(status) => match status.agent.filter(|_| status.authenticated) {
                    Some(agent) => Session::SignedIn(agent),
                    None => Session::SignedOut,
                },
                Err(err) => {
                    toast.report("Failed to check sign-in status", &err);
                    Session::SignedOut
                }
            };
            set_session.set(next);
        });
    });

    let editing = RwSignal::new(None::<EditTarget>);
    let on_edit = Callback::new(move |id: String| editing.set(Some(EditTarget::Existing(id))));
    let on_done = Callback::new(move |()| editing.set(None));

    view! {
        <section class="agent-panel">
            {move || match session.get() {
                Session::Checking => view! { <div class="loading">"Checking sign-in..."</div> }.into_any(),
                Session::SignedOut => view! {
                    <p class="text-muted">"Please sign in as an agent to manage your listings."</p>
                }
                .into_any(),
                Session::SignedIn(agent) => {
                    let agent_id = agent.id.clone();
                    view! {
                        <h2>{format!("Welcome, {}", agent.name)}</h2>
                        {move || match editing.get() {
                            Some(target) => view! {
                                <PropertyForm target=target agent=agent_id.clone() on_done=on_done />
                            }
                            .into_any(),
                            None => view! {
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| editing.set(Some(EditTarget::New))
                                >
                                    "Add property"
                                </button>
                                <PropertyListing
                                    page_size=AGENT_PANEL_PAGE_SIZE
                                    agent=agent_id.clone()
                                    on_edit=on_edit
                                    deletable=true
                                />
                            }
                            .into_any(),
                        }}
                        <NotificationsPanel />
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
