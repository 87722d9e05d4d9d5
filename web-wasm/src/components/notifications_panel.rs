//! 通知パネル

use crate::api;
use crate::components::status_message::use_toast;
use estate_common::notification::{mark_read, unread_count};
use estate_common::{Lifetime, Notification};
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

/// ブラウザのロケールで日時を表示（読めなければそのまま）
fn format_timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        raw.to_string()
    } else {
        date.to_locale_string("default", &JsValue::UNDEFINED).into()
    }
}

#[component]
pub fn NotificationsPanel() -> impl IntoView {
    let toast = use_toast();
    let notifications = RwSignal::new(Vec::<Notification>::new());

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    Effect::new({
        let lifetime = lifetime.clone();
        move |_| {
            let guard = lifetime.begin();
            spawn_local(async move {
                match guard.accept(api::fetch_notifications().await) {
                    Some(Ok(list)) => notifications.set(list),
                    Some(Err(err)) => toast.report("Failed to load notifications", &err),
                    None => {}
                }
            });
        }
    });

    let mark_one = {
        let lifetime = lifetime.clone();
        move |id: String| {
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let result = api::mark_notification_read(id.clone()).await;
                if lifetime.is_disposed() {
                    return;
                }
                match result {
                    Ok(()) => notifications.update(|list| {
                        mark_read(list, &id);
                    }),
                    Err(err) => toast.report("Failed to update notification", &err),
                }
            });
        }
    };

    let mark_all = move |_| {
        let ids: Vec<String> = notifications.with(|list| {
            list.iter().filter(|n| !n.read).map(|n| n.id.clone()).collect()
        });
        let lifetime = lifetime.clone();
        spawn_local(async move {
            let results = join_all(ids.iter().cloned().map(api::mark_notification_read)).await;
            if lifetime.is_disposed() {
                return;
            }
            let mut failed = None;
            notifications.update(|list| {
                for (id, result) in ids.iter().zip(results) {
                    match result {
                        Ok(()) => {
                            mark_read(list, id);
                        }
                        Err(err) => failed = Some(err),
                    }
                }
            });
            if let Some(err) = failed {
                toast.report("Failed to update notifications", &err);
            }
        });
    };

    view! {
        <section class="notifications-panel">
            <div class="panel-header">
                <h2>
                    "Notifications "
                    <span class="badge badge--count">
                        {move || notifications.with(|list| unread_count(list))}
                    </span>
                </h2>
                <button
                    class="btn btn-small btn-secondary"
                    disabled=move || notifications.with(|list| unread_count(list) == 0)
                    on:click=mark_all
                >
                    "Mark all read"
                </button>
            </div>
            <Show
                when=move || notifications.with(|list| !list.is_empty())
                fallback=|| view! { <p class="text-muted">"No notifications."</p> }
            >
                <ul class="notification-list">
                    <For
                        each=move || notifications.get()
                        key=|n| (n.id.clone(), n.read)
                        children={
                            let mark_one = mark_one.clone();
                            move |n| {
                                let label = n.label();
                                let mark_one = mark_one.clone();
                                let id = n.id.clone();
                                let read = n.read;
                                view! {
                                    <li class="notification" class:unread=!read>
                                        <div class="notification-head">
                                            <strong>{label.title()}</strong>
                                            {n.created_at.as_deref().map(|raw| {
                                                view! { <time>{format_timestamp(raw)}</time> }
                                            })}
                                        </div>
                                        <p>{n.message.clone()}</p>
                                        <Show when=move || !read>
                                            <button
                                                class="btn btn-small"
                                                on:click={
                                                    let mark_one = mark_one.clone();
                                                    let id = id.clone();
                                                    move |_| mark_one(id.clone())
                                                }
                                            >
                                                "Mark read"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_format_timestamp_falls_back_to_raw() {
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert_ne!(format_timestamp("2026-03-01T10:30:00Z"), "2026-03-01T10:30:00Z");
    }
}
