//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::Panel;

#[component]
pub fn Header<F>(panel: ReadSignal<Panel>, on_select: F) -> impl IntoView
where
    F: Fn(Panel) + 'static + Clone + Send,
{
    view! {
        <header class="header">
            <h1>"Estate Market"</h1>
            <nav class="header-nav">
                {Panel::ALL
                    .into_iter()
                    .map(|p| {
                        let on_select = on_select.clone();
                        view! {
                            <button
                                class="btn btn-small"
                                class:active=move || panel.get() == p
                                on:click=move |_| on_select(p)
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
