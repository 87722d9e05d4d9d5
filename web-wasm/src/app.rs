//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    admin_panel::AdminPanel,
    agent_panel::AgentPanel,
    banner_strip::BannerStrip,
    header::Header,
    property_listing::PropertyListing,
    status_message::{StatusMessage, Toast},
};
use estate_common::pagination::PUBLIC_LISTING_PAGE_SIZE;
use estate_common::BannerKind;

const OFF_PLAN: &str = "Off Plan";

/// 表示中の画面
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Public,
    OffPlan,
    Admin,
    Agent,
}

impl Panel {
    pub const ALL: [Panel; 4] = [Panel::Public, Panel::OffPlan, Panel::Admin, Panel::Agent];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Public => "Properties",
            Panel::OffPlan => OFF_PLAN,
            Panel::Admin => "Admin",
            Panel::Agent => "Agent",
        }
    }

    /// 公開画面で表示するバナー種別
    pub fn banner_kind(&self) -> Option<BannerKind> {
        match self {
            Panel::Public => Some(BannerKind::Home),
            Panel::OffPlan => Some(BannerKind::Offplan),
            Panel::Admin | Panel::Agent => None,
        }
    }

    /// 一覧で最初に選択しておく区分
    pub fn initial_category(&self) -> Option<&'static str> {
        match self {
            Panel::OffPlan => Some(OFF_PLAN),
            _ => None,
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    provide_context(Toast::new());

    let (panel, set_panel) = signal(Panel::default());

    view! {
        <div class="container">
            <Header panel=panel on_select=move |p| set_panel.set(p) />
            <StatusMessage />

            {move || match panel.get() {
                public @ (Panel::Public | Panel::OffPlan) => view! {
                    {public.banner_kind().map(|kind| view! { <BannerStrip kind=kind /> })}
                    <PropertyListing
                        page_size=PUBLIC_LISTING_PAGE_SIZE
                        initial_category=public.initial_category()
                    />
                }
                .into_any(),
                Panel::Admin => view! { <AdminPanel /> }.into_any(),
                Panel::Agent => view! { <AgentPanel /> }.into_any(),
            }}
        </div>
    }
}
