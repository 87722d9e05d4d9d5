//! ブラウザ依存の状態を隠す抽象
//!
//! 一覧ロジックはこのトレイト越しにだけ画面幅やスクロールへ触れる。

/// 画面まわりの環境
pub trait Platform {
    /// ビューポート幅（px）。取得できなければ None
    fn viewport_width(&self) -> Option<f64>;

    /// 一覧の先頭へスクロール
    fn scroll_to_top(&self);
}

/// カードグリッドの列数
pub fn grid_columns(width: Option<f64>) -> usize {
    match width {
        Some(w) if w >= 1280.0 => 3,
        Some(w) if w >= 768.0 => 2,
        Some(_) => 1,
        None => 3,
    }
}

/// 区分切替時の共通処理（先頭へ戻し、列数を返す）
pub fn on_category_switch(platform: &impl Platform) -> usize {
    platform.scroll_to_top();
    grid_columns(platform.viewport_width())
}
