//! 物件一覧コンポーネント
//!
//! 区分タブ・検索・「もっと見る」を持つ。状態遷移は `ListingState` に任せ、
//! 取得と待機演出はコンポーネントの寿命（`Lifetime`）に紐づける。

use crate::api;
use crate::components::{
    category_tabs::CategoryTabs,
    property_card::PropertyCardView,
    status_message::use_toast,
};
use crate::platform::{confirm, BrowserPlatform};
use estate_common::platform::{grid_columns, on_category_switch};
use estate_common::{Lifetime, ListingState, Platform, SearchQuery};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// 読み込み表示を見せる最短時間
const LOADING_DELAY_MS: u32 = 600;

/// 取得と最短表示時間を同時に進め、両方が終わってから結果を返す
async fn at_least<T>(work: impl Future<Output = T>, delay: impl Future<Output = ()>) -> T {
    let (value, ()) = futures::join!(work, delay);
    value
}

#[component]
pub fn PropertyListing(
    page_size: usize,
    /// 指定するとそのエージェントの物件だけを取得
    #[prop(optional)]
    agent: Option<String>,
    #[prop(optional)]
    on_edit: Option<Callback<String>>,
    /// 削除ボタンを出す（確認後にAPIで削除し一覧から外す）
    #[prop(optional)]
    deletable: bool,
    /// 最初に選択しておく区分
    #[prop(optional_no_strip)]
    initial_category: Option<&'static str>,
) -> impl IntoView {
    let toast = use_toast();
    let state = RwSignal::new(match initial_category {
        Some(category) => ListingState::with_category(page_size, category),
        None => ListingState::new(page_size),
    });
    let (columns, set_columns) = signal(grid_columns(BrowserPlatform.viewport_width()));

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    Effect::new({
        let lifetime = lifetime.clone();
        move |_| {
            let guard = lifetime.begin();
            let agent = agent.clone();
            state.update(|s| s.begin_loading());

            spawn_local(async move {
                let result = at_least(
                    api::fetch_properties(agent),
                    TimeoutFuture::new(LOADING_DELAY_MS),
                )
                .await;
                let Some(result) = guard.accept(result) else {
                    return;
                };
                match result {
                    Ok(records) => state.update(|s| s.load(records)),
                    Err(err) => {
                        toast.report("Failed to load properties", &err);
                        state.update(|s| s.load(Vec::new()));
                    }
                }
            });
        }
    });

    let on_delete = deletable.then(|| {
        let lifetime = lifetime.clone();
        Callback::new(move |id: String| {
            if !confirm("Delete this property?") {
                return;
            }
            let lifetime = lifetime.clone();
            spawn_local(async move {
                let result = api::delete_property(id.clone()).await;
                // 削除は再読み込みと競合しても反映する。アンマウント後だけ捨てる
                if lifetime.is_disposed() {
                    return;
                }
                match result {
                    Ok(()) => {
                        state.update(|s| {
                            s.remove(&id);
                        });
                        toast.show("Property deleted");
                    }
                    Err(err) => toast.report("Failed to delete property", &err),
                }
            });
        })
    });

    let on_select = move |tab: String| {
        state.update(|s| s.select_category(tab));
        set_columns.set(on_category_switch(&BrowserPlatform));
    };

    view! {
        <section class="property-listing">
            <div class="listing-controls">
                <CategoryTabs
                    selected=Signal::derive(move || state.with(|s| s.selected_category().to_string()))
                    on_select=on_select
                />
                <input
                    type="search"
                    class="listing-search"
                    placeholder="Search by title or location"
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| {
                            s.set_search(SearchQuery {
                                text: Some(text),
                                ..Default::default()
                            })
                        });
                    }
                />
            </div>

            <Show
                when=move || !state.with(|s| s.is_loading())
                fallback=|| view! { <div class="loading">"Loading properties..."</div> }
            >
                <Show
                    when=move || state.with(|s| !s.filtered().is_empty())
                    fallback=|| view! { <p class="text-muted">"No properties found."</p> }
                >
                    <div
                        class="property-grid"
                        style=move || format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.get())
                    >
                        <For
                            each=move || state.with(|s| s.displayed().to_vec())
                            key=|record| record.id.clone()
                            children=move |record| {
                                view! {
                                    <PropertyCardView record=record on_edit=on_edit on_delete=on_delete />
                                }
                            }
                        />
                    </div>
                    <p class="listing-count">
                        {move || state.with(|s| format!("Showing {} of {}", s.displayed().len(), s.filtered().len()))}
                    </p>
                    <Show when=move || state.with(|s| s.has_more())>
                        <button
                            class="btn btn-secondary load-more"
                            on:click=move |_| {
                                state.update(|s| {
                                    s.load_more();
                                });
                            }
                        >
                            "Load more"
                        </button>
                    </Show>
                </Show>
            </Show>
        </section>
    }
}
