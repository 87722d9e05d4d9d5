//! 物件の登録・編集フォーム
//!
//! 編集時は既存レコードを取得して初期値にし、変わったフィールドだけを送る。

use crate::api;
use crate::components::status_message::use_toast;
use estate_common::draft::{optional_text, parse_tags, price_from_input};
use estate_common::{Error, Lifetime, Price, PropertyDraft, Result, FILTER_TABS};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 編集対象
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Title,
    Location,
    Price,
    Image,
    Developer,
    CompletionDate,
    Tags,
    Bedrooms,
    Size,
    Agent,
    Description,
}

const TEXT_FIELDS: [(Field, &str); 11] = [
    (Field::Title, "Title"),
    (Field::Location, "Location"),
    (Field::Price, "Price"),
    (Field::Image, "Image URL"),
    (Field::Developer, "Developer"),
    (Field::CompletionDate, "Completion date"),
    (Field::Tags, "Tags (comma separated)"),
    (Field::Bedrooms, "Bedrooms"),
    (Field::Size, "Size (sq.ft)"),
    (Field::Agent, "Agent ID"),
    (Field::Description, "Description"),
];

/// 入力中の値（すべて文字列のまま持つ）
#[derive(Clone, Debug, Default, PartialEq)]
struct FormFields {
    title: String,
    category: String,
    location: String,
    price: String,
    image: String,
    developer: String,
    completion_date: String,
    tags: String,
    bedrooms: String,
    size: String,
    agent: String,
    description: String,
}

impl FormFields {
    fn from_draft(draft: &PropertyDraft) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            title: text(&draft.title),
            category: text(&draft.category),
            location: text(&draft.location),
            price: match &draft.price {
                Some(Price::Amount(amount)) => amount.to_string(),
                Some(Price::Text(raw)) => raw.clone(),
                None => String::new(),
            },
            image: text(&draft.image),
            developer: text(&draft.developer),
            completion_date: text(&draft.completion_date),
            tags: draft.tags.as_ref().map(|t| t.join(", ")).unwrap_or_default(),
            bedrooms: draft.bedrooms.map(|b| b.to_string()).unwrap_or_default(),
            size: draft.size.map(|s| s.to_string()).unwrap_or_default(),
            agent: text(&draft.agent),
            description: text(&draft.description),
        }
    }

    fn to_draft(&self) -> Result<PropertyDraft> {
        let bedrooms = optional_text(&self.bedrooms)
            .map(|b| b.parse::<u32>())
            .transpose()
            .map_err(|_| Error::Validation("Bedrooms must be a whole number".into()))?;
        let size = optional_text(&self.size)
            .map(|s| s.replace(',', "").parse::<f64>())
            .transpose()
            .map_err(|_| Error::Validation("Size must be a number".into()))?;
        let tags = parse_tags(&self.tags);

        Ok(PropertyDraft {
            title: optional_text(&self.title),
            category: optional_text(&self.category),
            location: optional_text(&self.location),
            price: price_from_input(&self.price),
            image: optional_text(&self.image),
            developer: optional_text(&self.developer),
            completion_date: optional_text(&self.completion_date),
            tags: (!tags.is_empty()).then_some(tags),
            bedrooms,
            size,
            agent: optional_text(&self.agent),
            description: optional_text(&self.description),
        })
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Location => &self.location,
            Field::Price => &self.price,
            Field::Image => &self.image,
            Field::Developer => &self.developer,
            Field::CompletionDate => &self.completion_date,
            Field::Tags => &self.tags,
            Field::Bedrooms => &self.bedrooms,
            Field::Size => &self.size,
            Field::Agent => &self.agent,
            Field::Description => &self.description,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Location => &mut self.location,
            Field::Price => &mut self.price,
            Field::Image => &mut self.image,
            Field::Developer => &mut self.developer,
            Field::CompletionDate => &mut self.completion_date,
            Field::Tags => &mut self.tags,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Size => &mut self.size,
            Field::Agent => &mut self.agent,
            Field::Description => &mut self.description,
        }
    }
}

fn text_input(fields: RwSignal<FormFields>, field: Field, label: &'static str) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type="text"
                prop:value=move || fields.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    fields.update(|f| *f.get_mut(field) = value);
                }
            />
        </label>
    }
}

#[component]
pub fn PropertyForm(
    target: EditTarget,
    /// 新規登録時に入れておくエージェントID
    #[prop(optional)]
    agent: Option<String>,
    /// 保存・キャンセル後に呼ぶ
    on_done: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let fields = RwSignal::new(FormFields {
        agent: agent.unwrap_or_default(),
        ..Default::default()
    });
    let original = StoredValue::new(PropertyDraft::default());
    let (loading, set_loading) = signal(matches!(target, EditTarget::Existing(_)));
    let (saving, set_saving) = signal(false);

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    if let EditTarget::Existing(id) = target.clone() {
        let guard = lifetime.begin();
        spawn_local(async move {
            match guard.accept(api::fetch_property(id).await) {
                Some(Ok(record)) => {
                    let draft = PropertyDraft::from_record(&record);
                    fields.set(FormFields::from_draft(&draft));
                    original.set_value(draft);
                    set_loading.set(false);
                }
                Some(Err(err)) => {
                    toast.report("Failed to load property", &err);
                    on_done.run(());
                }
                None => {}
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match fields.with(|f| f.to_draft()) {
            Ok(draft) => draft,
            Err(err) => {
                toast.report("Invalid property form", &err);
                return;
            }
        };
        let target = target.clone();
        let changes = draft.changes_from(&original.get_value());
        let lifetime = lifetime.clone();
        set_saving.set(true);

        spawn_local(async move {
            let (result, done_message) = match target {
                EditTarget::New => (api::add_property(draft).await, "Property added"),
                EditTarget::Existing(id) => (api::update_property(id, changes).await, "Property updated"),
            };
            if lifetime.is_disposed() {
                return;
            }
            set_saving.set(false);
            match result {
                Ok(()) => {
                    toast.show(done_message);
                    on_done.run(());
                }
                Err(err) => toast.report("Failed to save property", &err),
            }
        });
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading">"Loading property..."</div> }
        >
            <form class="property-form" on:submit=on_submit.clone()>
                <label class="form-field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || fields.with(|f| f.category.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            fields.update(|f| f.category = value);
                        }
                    >
                        <option value="">"Select a category"</option>
                        {FILTER_TABS[1..]
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                </label>
                {TEXT_FIELDS
                    .into_iter()
                    .map(|(field, label)| text_input(fields, field, label))
                    .collect_view()}
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        "Save"
                    </button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_done.run(())>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
