//! 端末向けの表示
//!
//! カードの組み立ては共通ライブラリ（PropertyCard）に任せ、ここでは文字列化のみ行う。

use chrono::{DateTime, Local};
use estate_common::{Agent, Banner, IndexedPager, ListingState, Notification, PropertyCard, PropertyRecord};

/// 物件カード1枚
pub fn property_card(card: &PropertyCard) -> String {
    let mut lines = Vec::new();

    let badge = card
        .category_label()
        .map(|label| format!("[{}] ", label))
        .unwrap_or_default();
    lines.push(format!("{}{}", badge, card.title));

    if let Some(price) = &card.price_label {
        lines.push(format!("  Price: {}", price));
    }
    for block in &card.blocks {
        lines.push(format!("  {}: {}", block.label(), block.value()));
    }
    lines.push(format!("  {}", card.detail_path));

    lines.join("\n")
}

/// 一覧（表示中の分だけ）
pub fn listing(state: &ListingState) -> String {
    let mut out = Vec::new();
    for record in state.displayed() {
        out.push(property_card(&PropertyCard::from_record(record)));
    }

    out.push(format!(
        "{} / {} 件を表示（区分: {}）{}",
        state.displayed().len(),
        state.filtered().len(),
        state.selected_category(),
        if state.has_more() { "（続きあり: --pages を増やしてください）" } else { "" }
    ));
    out.join("\n\n")
}

/// 物件詳細
pub fn property_detail(record: &PropertyRecord) -> String {
    let card = PropertyCard::from_record(record);
    let mut out = property_card(&card);
    out.push_str(&format!("\n  ID: {}", record.id));
    if let Some(image) = &card.image {
        out.push_str(&format!("\n  Image: {}", image));
    }
    if let Some(description) = record.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("\n\n{}", description.trim()));
    }
    out
}

/// エージェント一覧（現在ページ）
pub fn agents_page(agents: &[Agent], pager: &IndexedPager) -> String {
    let mut out = Vec::new();
    for agent in pager.page_of(agents) {
        out.push(format!(
            "{:<24} {:<32} {:<9} {}",
            agent.name,
            agent.email,
            agent.status.as_str(),
            agent
                .properties_count
                .map(|c| format!("{} listings", c))
                .unwrap_or_else(|| "-".to_string())
        ));
    }
    out.push(format!(
        "ページ {}/{}（全 {} 件）",
        pager.current_page(),
        pager.total_pages().max(1),
        pager.total_items()
    ));
    out.join("\n")
}

pub fn banner(banner: &Banner) -> String {
    let title = banner.title.as_deref().unwrap_or("(no title)");
    let link = banner
        .link
        .as_deref()
        .map(|l| format!(" → {}", l))
        .unwrap_or_default();
    format!("[{}] {} {}{}", banner.kind.as_str(), title, banner.image, link)
}

pub fn notification(n: &Notification) -> String {
    let marker = if n.read { " " } else { "●" };
    let when = n
        .created_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    format!("{} {:<24} {} {}  ({})", marker, n.label().title(), when, n.message, n.id)
}

/// RFC3339をローカル時刻で表示（読めなければそのまま）
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
