//! 取消令牌模块
//!
//! 网络请求本身不可中断，视图卸载后迟到的响应通过令牌判定后丢弃，
//! 避免过期数据覆盖新状态。

use leptos::prelude::on_cleanup;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 视图生命周期绑定的取消令牌
///
/// `Clone` 后指向同一份状态，任意一份 `cancel()` 对全部可见。
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// 创建一个随当前视图卸载自动失效的令牌
///
/// 异步回调在写入信号前应检查 `is_cancelled()`。
pub fn view_cancel_token() -> CancelToken {
    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_cancellation_state() {
        let token = CancelToken::new();
        let seen_by_task = token.clone();
        assert!(!seen_by_task.is_cancelled());
        token.cancel();
        assert!(seen_by_task.is_cancelled());
    }
}
