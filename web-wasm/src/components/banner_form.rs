//! バナーの登録・編集フォーム

use crate::api;
use crate::components::status_message::use_toast;
use estate_common::draft::optional_text;
use estate_common::{Banner, BannerDraft, BannerKind, Lifetime};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, Default, PartialEq)]
struct BannerFields {
    image: String,
    title: String,
    link: String,
    kind: String,
}

impl BannerFields {
    fn from_banner(banner: &Banner) -> Self {
        Self {
            image: banner.image.clone(),
            title: banner.title.clone().unwrap_or_default(),
            link: banner.link.clone().unwrap_or_default(),
            kind: banner.kind.as_str().to_string(),
        }
    }

    fn to_draft(&self) -> BannerDraft {
        BannerDraft {
            title: optional_text(&self.title),
            image: optional_text(&self.image),
            link: optional_text(&self.link),
            kind: self.kind.parse::<BannerKind>().ok(),
        }
    }
}

#[component]
pub fn BannerForm(
    /// 指定すると編集、無ければ新規登録
    #[prop(optional)]
    banner: Option<Banner>,
    on_done: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let fields = RwSignal::new(banner.as_ref().map(BannerFields::from_banner).unwrap_or_default());
    let (saving, set_saving) = signal(false);

    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || lifetime.dispose()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = fields.with(|f| f.to_draft());
        let banner = banner.clone();
        let lifetime = lifetime.clone();
        set_saving.set(true);

        spawn_local(async move {
            let result = match &banner {
                Some(existing) => api::update_banner(existing.id.clone(), draft.changes_from(existing)).await,
                None => api::create_banner(draft).await,
            };
            if lifetime.is_disposed() {
                return;
            }
            set_saving.set(false);
            match result {
                Ok(()) => {
                    toast.show(if banner.is_some() { "Banner updated" } else { "Banner added" });
                    on_done.run(());
                }
                Err(err) => toast.report("Failed to save banner", &err),
            }
        });
    };

    let input = move |label: &'static str, get: fn(&BannerFields) -> &String, set: fn(&mut BannerFields, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || fields.with(|f| get(f).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <form class="banner-form" on:submit=on_submit>
            {input("Image URL", |f| &f.image, |f, v| f.image = v)}
            {input("Title", |f| &f.title, |f, v| f.title = v)}
            {input("Link", |f| &f.link, |f, v| f.link = v)}
            <label class="form-field">
                <span>"Type"</span>
                <select
                    prop:value=move || fields.with(|f| f.kind.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        fields.update(|f| f.kind = value);
                    }
                >
                    <option value="">"Select a type"</option>
                    <option value=BannerKind::Home.as_str()>"Home"</option>
                    <option value=BannerKind::Offplan.as_str()>"Off Plan"</option>
                </select>
            </label>
            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    "Save"
                </button>
                <button type="button" class="btn btn-secondary" on:click=move |_| on_done.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
