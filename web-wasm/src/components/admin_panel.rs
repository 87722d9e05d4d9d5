//! 管理画面
//!
//! 物件（登録・編集・削除）・エージェント・バナー・通知をタブで切り替える。

use crate::components::{
    agents_table::AgentsTable,
    banner_form::BannerForm,
    banner_strip::BannerStrip,
    notifications_panel::NotificationsPanel,
    property_form::{EditTarget, PropertyForm},
    property_listing::PropertyListing,
};
use estate_common::pagination::PUBLIC_LISTING_PAGE_SIZE;
use estate_common::BannerKind;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Properties,
    Agents,
    Banners,
    Notifications,
}

impl AdminTab {
    const ALL: [AdminTab; 4] = [
        AdminTab::Properties,
        AdminTab::Agents,
        AdminTab::Banners,
        AdminTab::Notifications,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Properties => "Properties",
            AdminTab::Agents => "Agents",
            AdminTab::Banners => "Banners",
            AdminTab::Notifications => "Notifications",
        }
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let (tab, set_tab) = signal(AdminTab::Properties);

    view! {
        <section class="admin-panel">
            <nav class="admin-tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            {move || match tab.get() {
                AdminTab::Properties => view! { <AdminProperties /> }.into_any(),
                AdminTab::Agents => view! { <AgentsTable /> }.into_any(),
                AdminTab::Banners => view! { <AdminBanners /> }.into_any(),
                AdminTab::Notifications => view! { <NotificationsPanel /> }.into_any(),
            }}
        </section>
    }
}

/// 物件タブ（フォーム表示中は一覧を隠し、閉じたら一覧を取り直す）
#[component]
fn AdminProperties() -> impl IntoView {
    let editing = RwSignal::new(None::<EditTarget>);

    let on_edit = Callback::new(move |id: String| editing.set(Some(EditTarget::Existing(id))));
    let on_done = Callback::new(move |()| editing.set(None));

    view! {
        {move || match editing.get() {
            Some(target) => view! { <PropertyForm target=target on_done=on_done /> }.into_any(),
            None => view! {
                <button class="btn btn-primary" on:click=move |_| editing.set(Some(EditTarget::New))>
                    "Add property"
                </button>
                <PropertyListing page_size=PUBLIC_LISTING_PAGE_SIZE on_edit=on_edit deletable=true />
            }
            .into_any(),
        }}
    }
}

/// バナータブ（登録後は一覧を作り直す）
#[component]
fn AdminBanners() -> impl IntoView {
    let (creating, set_creating) = signal(false);
    let (refresh, set_refresh) = signal(0u32);

    let on_created = Callback::new(move |()| {
        set_creating.set(false);
        set_refresh.update(|n| *n += 1);
    });

    view! {
        {move || {
            if creating.get() {
                view! { <BannerForm on_done=on_created /> }.into_any()
            } else {
                view! {
                    <button class="btn btn-primary" on:click=move |_| set_creating.set(true)>
                        "Add banner"
                    </button>
                }
                .into_any()
            }
        }}
        {move || {
            refresh.track();
            view! {
                <BannerStrip kind=BannerKind::Home manage=true />
                <BannerStrip kind=BannerKind::Offplan manage=true />
            }
        }}
    }
}
