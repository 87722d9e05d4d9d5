//! 一時的なステータスメッセージ

use estate_common::Error;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

const DISPLAY_MS: u32 = 4_000;

/// アプリ全体で共有するメッセージ枠（contextで配る）
#[derive(Clone, Copy)]
pub struct Toast {
    message: RwSignal<Option<String>>,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// 表示して一定時間後に消す（別のメッセージに置き換わっていれば消さない）
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        self.message.set(Some(text.clone()));

        let message = self.message;
        spawn_local(async move {
            TimeoutFuture::new(DISPLAY_MS).await;
            message.try_update(|current| {
                if current.as_deref() == Some(text.as_str()) {
                    *current = None;
                }
            });
        });
    }

    /// 失敗をコンソールに残し、利用者向けの短い文言を出す
    pub fn report(&self, context: &str, err: &Error) {
        console::error_1(&format!("{}: {}", context, err).into());
        self.show(err.user_message());
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> Toast {
    use_context::<Toast>().unwrap_or_default()
}

#[component]
pub fn StatusMessage() -> impl IntoView {
    let toast = use_toast();

    view! {
        <Show when=move || toast.message.with(|m| m.is_some())>
            <div class="status-message" role="status">
                {move || toast.message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
