//! 区分タブ

use estate_common::{classify, FILTER_TABS};
use leptos::prelude::*;

#[component]
pub fn CategoryTabs<F>(
    #[prop(into)] selected: Signal<String>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="category-tabs" role="tablist">
            {FILTER_TABS
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    let icon = classify(tab).icon;
                    view! {
                        <button
                            class="tab"
                            role="tab"
                            class:active=move || selected.with(|s| s == tab)
                            on:click=move |_| on_select(tab.to_string())
                        >
                            <span class=format!("icon icon-{}", icon)></span>
                            {tab}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
