//! 物件一覧の状態管理
//!
//! 全件・選択区分・検索条件を保持し、変更のたびに
//! 絞り込み → ページングを同期的に再計算する。
//!
//! 状態遷移:
//! - Loading → Ready: `load()`
//! - Ready → Ready: `select_category()` / `set_search()`（ページングはリセット）
//! - Ready → Ready: `load_more()`（ページングのみ）

use crate::category::ALL_CATEGORIES;
use crate::filter::{apply_filters, SearchQuery};
use crate::pagination::IncrementalPager;
use crate::types::PropertyRecord;

/// 一覧のフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    Loading,
    Ready,
}

/// 一覧の表示状態
#[derive(Debug, Clone)]
pub struct ListingState {
    phase: ListingPhase,
    full: Vec<PropertyRecord>,
    selected_category: String,
    search: SearchQuery,
    filtered: Vec<PropertyRecord>,
    pager: IncrementalPager,
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: ListingPhase::Loading,
            full: Vec::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            search: SearchQuery::default(),
            filtered: Vec::new(),
            pager: IncrementalPager::new(page_size),
        }
    }

    /// 初期区分を指定して作る（Off Planページなど）
    pub fn with_category(page_size: usize, category: impl Into<String>) -> Self {
        let mut state = Self::new(page_size);
        state.selected_category = category.into();
        state
    }

    /// 新しい取得が始まった
    pub fn begin_loading(&mut self) {
        self.phase = ListingPhase::Loading;
    }

    /// 取得結果を反映して Ready へ
    pub fn load(&mut self, records: Vec<PropertyRecord>) {
        self.full = records;
        self.phase = ListingPhase::Ready;
        self.refilter();
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.refilter();
    }

    pub fn set_search(&mut self, query: SearchQuery) {
        self.search = query;
        self.refilter();
    }

    /// 1ページ分表示を伸ばす
    pub fn load_more(&mut self) -> bool {
        self.pager.load_more()
    }

    /// 1件をローカルから取り除く（削除成功後）
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.full.len();
        self.full.retain(|r| r.id != id);
        if self.full.len() == before {
            return false;
        }
        // 表示中の件数は維持する
        let visible = self.pager.visible_len();
        self.filtered.retain(|r| r.id != id);
        self.pager.reset(self.filtered.len());
        while self.pager.visible_len() < visible.min(self.filtered.len()) {
            if !self.pager.load_more() {
                break;
            }
        }
        true
    }

    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.full, &self.selected_category, &self.search);
        self.pager.reset(self.filtered.len());
    }

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListingPhase::Loading
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    pub fn full(&self) -> &[PropertyRecord] {
        &self.full
    }

    pub fn filtered(&self) -> &[PropertyRecord] {
        &self.filtered
    }

    pub fn displayed(&self) -> &[PropertyRecord] {
        self.pager.visible(&self.filtered)
    }

    pub fn has_more(&self) -> bool {
        self.pager.has_more()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(off_plan: usize, rent: usize) -> Vec<PropertyRecord> {
        let mut out = Vec::new();
        for i in 0..off_plan {
            out.push(PropertyRecord {
                id: format!("op{}", i),
                category: Some("Off Plan".into()),
                ..Default::default()
            });
        }
        for i in 0..rent {
            out.push(PropertyRecord {
                id: format!("r{}", i),
                category: Some("Rent".into()),
                ..Default::default()
            });
        }
        out
    }

    #[test]
    fn test_starts_loading_with_all_selected() {
        let state = ListingState::new(6);
        assert!(state.is_loading());
        assert_eq!(state.selected_category(), ALL_CATEGORIES);
        assert!(state.displayed().is_empty());
        assert!(!state.has_more());
    }

    #[test]
    fn test_off_plan_scenario() {
        let mut state = ListingState::new(6);
        state.load(records(7, 3));
        state.select_category("Off Plan");

        assert_eq!(state.phase(), ListingPhase::Ready);
        assert_eq!(state.filtered().len(), 7);
        assert_eq!(state.displayed().len(), 6);
        assert!(state.has_more());

        assert!(state.load_more());
        assert_eq!(state.displayed().len(), 7);
        assert!(!state.has_more());
    }

    #[test]
    fn test_category_change_resets_pagination() {
        let mut state = ListingState::new(2);
        state.load(records(7, 3));
        state.load_more();
        state.load_more();
        assert_eq!(state.displayed().len(), 6);

        state.select_category("Rent");
        assert_eq!(state.displayed().len(), 2);

        state.select_category(ALL_CATEGORIES);
        assert_eq!(state.displayed().len(), 2);
        assert_eq!(state.filtered().len(), 10);
    }

    #[test]
    fn test_load_more_keeps_category_and_filtered() {
        let mut state = ListingState::with_category(2, "Rent");
        state.load(records(1, 5));
        let filtered_before = state.filtered().to_vec();
        state.load_more();
        assert_eq!(state.selected_category(), "Rent");
        assert_eq!(state.filtered(), filtered_before.as_slice());
    }

    #[test]
    fn test_reload_applies_current_category() {
        let mut state = ListingState::with_category(6, "Rent");
        state.load(records(2, 1));
        state.begin_loading();
        assert!(state.is_loading());

        state.load(records(0, 8));
        assert!(!state.is_loading());
        assert_eq!(state.filtered().len(), 8);
        assert_eq!(state.displayed().len(), 6);
    }

    #[test]
    fn test_search_resets_pagination() {
        let mut state = ListingState::new(2);
        let mut data = records(0, 5);
        data[4].title = "Palm Villa".into();
        state.load(data);
        state.load_more();

        state.set_search(SearchQuery::text("palm"));
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.displayed()[0].id, "r4");
        assert!(!state.has_more());
    }

    #[test]
    fn test_displayed_is_prefix_of_filtered() {
        let mut state = ListingState::new(3);
        state.load(records(4, 4));
        state.load_more();
        let displayed = state.displayed();
        assert_eq!(displayed, &state.filtered()[..displayed.len()]);
    }

    #[test]
    fn test_remove_keeps_expansion() {
        let mut state = ListingState::new(2);
        state.load(records(0, 6));
        state.load_more();
        assert_eq!(state.displayed().len(), 4);

        assert!(state.remove("r0"));
        assert_eq!(state.full().len(), 5);
        assert_eq!(state.displayed().len(), 4);
        assert!(!state.remove("missing"));
    }
}
