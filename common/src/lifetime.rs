//! コンポーネント寿命に紐づくキャンセルトークン
//!
//! リクエスト開始時に `begin()` でガードを取り、レスポンス適用前に
//! `is_current()` を確認する。新しいリクエストが始まるか `dispose()` されたら
//! 古いガードは無効になり、遅れて届いた結果は捨てられる。

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    generation: AtomicU64,
    disposed: AtomicBool,
}

/// 寿命ハンドル（クローンは同じ寿命を共有する）
#[derive(Debug, Clone, Default)]
pub struct Lifetime {
    inner: Arc<Inner>,
}

/// 1回のリクエストに対応するガード
#[derive(Debug, Clone)]
pub struct LifetimeGuard {
    inner: Arc<Inner>,
    generation: u64,
}

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい世代を開始する（以前のガードは無効になる）
    pub fn begin(&self) -> LifetimeGuard {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LifetimeGuard {
            inner: Arc::clone(&self.inner),
            generation,
        }
    }

    /// 世代を進めずにガードを取る（同じ世代の並行リクエスト用）
    pub fn guard(&self) -> LifetimeGuard {
        LifetimeGuard {
            inner: Arc::clone(&self.inner),
            generation: self.inner.generation.load(Ordering::SeqCst),
        }
    }

    /// アンマウント時に呼ぶ
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::SeqCst)
    }
}

impl LifetimeGuard {
    /// まだ結果を適用してよいか
    pub fn is_current(&self) -> bool {
        !self.inner.disposed.load(Ordering::SeqCst)
            && self.inner.generation.load(Ordering::SeqCst) == self.generation
    }

    /// 有効なときだけ値を通す
    pub fn accept<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}
