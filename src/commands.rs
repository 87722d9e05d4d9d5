//! コマンドの組み立て処理（通信を含まない部分）

use crate::cli::ListArgs;
use crate::error::{EstateError, Result};
use estate_common::{IndexedPager, ListingState, PropertyRecord};

/// 取得済みの物件から一覧状態を作る
///
/// 区分・検索を適用し、`pages - 1` 回「もっと見る」を実行した状態にする。
pub fn prepare_listing(records: Vec<PropertyRecord>, args: &ListArgs, default_page_size: usize) -> ListingState {
    let page_size = args.page_size.unwrap_or(default_page_size);
    let mut state = ListingState::with_category(page_size, args.category.clone());
    state.load(records);

    let query = args.search_query();
    if !query.is_empty() {
        state.set_search(query);
    }

    for _ in 1..args.pages.max(1) {
        if !state.load_more() {
            break;
        }
    }
    state
}

/// エージェント一覧のページャを作り、指定ページへ移動する
pub fn agent_pager(total: usize, per_page: usize, page: usize) -> Result<IndexedPager> {
    let mut pager = IndexedPager::new(per_page, total);
    if page != 1 && !pager.go_to(page) {
        return Err(EstateError::PageOutOfRange {
            page,
            total_pages: pager.total_pages(),
        });
    }
    Ok(pager)
}
