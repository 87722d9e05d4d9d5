//! 物件カードコンポーネント
//!
//! 表示内容は `PropertyCard::from_record` が決める。ここは描画と操作の配線のみ。

use crate::platform::navigate;
use estate_common::{CardAction, CardActions, CardBlock, PropertyCard, PropertyRecord};
use leptos::prelude::*;

fn action_label(action: CardAction) -> &'static str {
    match action {
        CardAction::View => "View",
        CardAction::Edit => "Edit",
        CardAction::Delete => "Delete",
    }
}

#[component]
pub fn PropertyCardView(
    record: PropertyRecord,
    #[prop(optional_no_strip)] on_edit: Option<Callback<String>>,
    #[prop(optional_no_strip)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let card = PropertyCard::from_record(&record);
    let id = card.id.clone();

    let run_action = move |action: CardAction| {
        let edit = |id: &str| {
            if let Some(cb) = on_edit {
                cb.run(id.to_string());
            }
        };
        let delete = |id: &str| {
            if let Some(cb) = on_delete {
                cb.run(id.to_string());
            }
        };
        let actions = CardActions {
            on_edit: on_edit.is_some().then_some(&edit as &dyn Fn(&str)),
            on_delete: on_delete.is_some().then_some(&delete as &dyn Fn(&str)),
        };
        if let Some(path) = actions.invoke(action, &id) {
            navigate(&path);
        }
    };

    let noop = |_: &str| {};
    let available = CardActions {
        on_edit: on_edit.is_some().then_some(&noop as &dyn Fn(&str)),
        on_delete: on_delete.is_some().then_some(&noop as &dyn Fn(&str)),
    }
    .available();

    let badge = card.category_label().map(|label| {
        view! {
            <span class=card.presentation.color_class>
                <span class=format!("icon icon-{}", card.presentation.icon)></span>
                {label.to_string()}
            </span>
        }
    });

    view! {
        <article class="property-card">
            {card.image.clone().map(|src| {
                view! { <img class="property-image" src=src alt=card.title.clone() loading="lazy" /> }
            })}
            <div class="property-info">
                {badge}
                <h3>
                    <a href=card.detail_path.clone()>{card.title.clone()}</a>
                </h3>
                {card.price_label.clone().map(|price| view! { <p class="price">{price}</p> })}
                <ul class="property-blocks">
                    {card.blocks.iter().map(render_block).collect_view()}
                </ul>
                <div class="property-actions">
                    {available
                        .into_iter()
                        .map(|action| {
                            let run_action = run_action.clone();
                            let class = match action {
                                CardAction::Delete => "btn btn-small btn-danger",
                                CardAction::Edit => "btn btn-small btn-secondary",
                                CardAction::View => "btn btn-small btn-primary",
                            };
                            view! {
                                <button class=class on:click=move |_| run_action(action)>
                                    {action_label(action)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

fn render_block(block: &CardBlock) -> impl IntoView {
    let content = match block {
        CardBlock::Tags(tags) => view! {
            <span class="tags">
                {tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
            </span>
        }
        .into_any(),
        other => view! { <span>{other.value()}</span> }.into_any(),
    };

    view! {
        <li class="property-block">
            <span class="block-label">{block.label()}</span>
            {content}
        </li>
    }
}
