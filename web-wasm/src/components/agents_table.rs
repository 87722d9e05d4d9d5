//! エージェント一覧（番号付きページ送り）

use crate::api;
use crate::components::status_message::use_toast;
use estate_common::pagination::AGENTS_PER_PAGE;
use estate_common::{Agent, IndexedPager, Lifetime};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ページ番号ボタンの並び（0ページなら空）
fn page_numbers(total_pages: usize) -> Vec<usize> {
    (1..=total_pages).collect()
}

#[component]
pub fn AgentsTable() -> impl IntoView {
    let toast = use_toast();
    let (agents, set_agents) = signal(Vec::<Agent>::new());
    let (loading, set_loading) = signal(true);
    let pager = RwSignal::new(IndexedPager::new(AGENTS_PER_PAGE, 0));

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    Effect::new(move |_| {
        let guard = lifetime.begin();
        spawn_local(async move {
            let result = api::fetch_agents().await;
            let Some(result) = guard.accept(result) else {
                return;
            };
            match result {
                Ok(list) => {
                    pager.update(|p| p.set_total(list.len()));
                    set_agents.set(list);
                }
                Err(err) => toast.report("Failed to load agents", &err),
            }
            set_loading.set(false);
        });
    });

    let page_rows = move || {
        let pager = pager.get();
        agents.with(|all| pager.page_of(all).to_vec())
    };

    view! {
        <section class="agents-table">
            <h2>"Agents"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading agents..."</div> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th>"Listings"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=page_rows
                            key=|agent| agent.id.clone()
                            children=|agent| {
                                view! {
                                    <tr>
                                        <td>{agent.name}</td>
                                        <td>{agent.email}</td>
                                        <td>{agent.phone.unwrap_or_else(|| "-".to_string())}</td>
                                        <td>
                                            <span class=format!("agent-status {}", agent.status.as_str())>
                                                {agent.status.as_str()}
                                            </span>
                                        </td>
                                        <td>{agent.properties_count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <nav class="pagination">
                    <button
                        class="btn btn-small"
                        disabled=move || !pager.with(|p| p.can_prev())
                        on:click=move |_| {
                            pager.update(|p| {
                                p.prev();
                            });
                        }
                    >
                        "Prev"
                    </button>
                    {move || {
                        page_numbers(pager.with(|p| p.total_pages()))
                            .into_iter()
                            .map(|n| {
                                view! {
                                    <button
                                        class="btn btn-small page-number"
                                        class:active=move || pager.with(|p| p.current_page() == n)
                                        on:click=move |_| {
                                            pager.update(|p| {
                                                p.go_to(n);
                                            });
                                        }
                                    >
                                        {n}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                    <button
                        class="btn btn-small"
                        disabled=move || !pager.with(|p| p.can_next())
                        on:click=move |_| {
                            pager.update(|p| {
                                p.next();
                            });
                        }
                    >
                        "Next"
                    </button>
                </nav>
            </Show>
        </section>
    }
}
