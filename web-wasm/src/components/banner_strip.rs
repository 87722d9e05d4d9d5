//! バナー表示
//!
//! 管理画面では各バナーに編集・削除ボタンを付ける。

use crate::api;
use crate::components::banner_form::BannerForm;
use crate::components::status_message::use_toast;
use crate::platform::confirm;
use estate_common::{Banner, BannerKind, Lifetime};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BannerStrip(
    kind: BannerKind,
    /// 編集・削除ボタンを出す
    #[prop(optional)]
    manage: bool,
) -> impl IntoView {
    let toast = use_toast();
    let banners = RwSignal::new(Vec::<Banner>::new());
    let editing = RwSignal::new(None::<Banner>);
    let (reload, set_reload) = signal(0u32);

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    Effect::new({
        let lifetime = lifetime.clone();
        move |_| {
            reload.track();
            let guard = lifetime.begin();
            spawn_local(async move {
                match guard.accept(api::fetch_banners(Some(kind)).await) {
                    Some(Ok(list)) => banners.set(list),
                    Some(Err(err)) => toast.report("Failed to load banners", &err),
                    None => {}
                }
            });
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !confirm("Delete this banner?") {
            return;
        }
        let lifetime = lifetime.clone();
        spawn_local(async move {
            let result = api::delete_banner(id.clone()).await;
            if lifetime.is_disposed() {
                return;
            }
            match result {
                Ok(()) => {
                    banners.update(|list| list.retain(|b| b.id != id));
                    toast.show("Banner deleted");
                }
                Err(err) => toast.report("Failed to delete banner", &err),
            }
        });
    });

    let on_edited = Callback::new(move |()| {
        editing.set(None);
        set_reload.update(|n| *n += 1);
    });

    view! {
        {move || editing.get().map(|banner| view! { <BannerForm banner=banner on_done=on_edited /> })}
        <Show when=move || banners.with(|b| !b.is_empty())>
            <div class=format!("banner-strip banner-strip--{}", kind.as_str())>
                <For
                    each=move || banners.get()
                    key=|banner| banner.id.clone()
                    children=move |banner| {
                        let alt = banner.title.clone().unwrap_or_default();
                        let image = view! { <img src=banner.image.clone() alt=alt /> };
                        let body = match banner.link.clone() {
                            Some(link) => view! { <a class="banner" href=link>{image}</a> }.into_any(),
                            None => view! { <div class="banner">{image}</div> }.into_any(),
                        };
                        let controls = manage.then(|| {
                            let id = banner.id.clone();
                            view! {
                                <div class="banner-actions">
                                    <button
                                        class="btn btn-small btn-secondary"
                                        on:click=move |_| editing.set(Some(banner.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn-small btn-danger"
                                        on:click=move |_| on_delete.run(id.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            }
                        });
                        view! { <div class="banner-item">{body}{controls}</div> }
                    }
                />
            </div>
        </Show>
    }
}
