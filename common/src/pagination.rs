//! ページング
//!
//! 2種類のポリシー:
//! - IncrementalPager: 「もっと見る」で表示件数を伸ばす。絞り込み変更で1ページ目に戻る
//! - IndexedPager: ページ番号で移動する。範囲外のページ指定は何もしない

use std::ops::Range;

/// 公開Off Plan一覧の1ページ件数
pub const PUBLIC_LISTING_PAGE_SIZE: usize = 6;

/// エージェントパネルの1ページ件数
pub const AGENT_PANEL_PAGE_SIZE: usize = 4;

/// 管理画面エージェント一覧の1ページ件数
pub const AGENTS_PER_PAGE: usize = 4;

/// 「もっと見る」方式のページング
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementalPager {
    page_size: usize,
    pages_loaded: usize,
    total: usize,
}

impl IncrementalPager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages_loaded: 1,
            total: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 絞り込み結果が変わったときに呼ぶ。表示は1ページ分に戻る
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.pages_loaded = 1;
    }

    /// 1ページ分伸ばす。伸びなかった場合は false
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.pages_loaded += 1;
        true
    }

    /// 現在の表示件数
    pub fn visible_len(&self) -> usize {
        self.page_size
            .saturating_mul(self.pages_loaded)
            .min(self.total)
    }

    pub fn has_more(&self) -> bool {
        self.visible_len() < self.total
    }

    /// 表示中の先頭部分を切り出す
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_len().min(items.len())]
    }
}

/// ページ番号方式のページング（1始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedPager {
    per_page: usize,
    current_page: usize,
    total_items: usize,
}

impl IndexedPager {
    pub fn new(per_page: usize, total_items: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            current_page: 1,
            total_items,
        }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// ceil(total_items / per_page)
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// 件数が変わったら現在ページを範囲内に収める
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages()).max(1);
    }

    /// 指定ページへ移動。範囲外なら何もせず false
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page + 1)
    }

    pub fn prev(&mut self) -> bool {
        // 1ページ目では 0 を渡して no-op にする
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 現在ページに含まれる要素のインデックス範囲
    pub fn item_range(&self) -> Range<usize> {
        let start = (self.current_page - 1) * self.per_page;
        let start = start.min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }

    /// 現在ページの要素を切り出す
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
