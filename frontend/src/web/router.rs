//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 除 URL 导航外还承载「导航状态」：列表页跳转编辑页时随路由携带一条
//! 活动记录，目标视图取走后即失效（直接输入 URL 时不存在）。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use evently_shared::EventRecord;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新。认证检查不在路由层做：
/// 各视图在挂载时按自己需要的身份自行守卫（公开列表页无守卫）。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 随导航携带的活动记录，一次性消费
    event_state: RwSignal<Option<EventRecord>>,
}

impl RouterService {
    fn new() -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            event_state: RwSignal::new(None),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到目标路由（pushState）
    pub fn navigate(&self, route: AppRoute) {
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 重定向到目标路由（replaceState，不留历史记录）
    pub fn replace(&self, route: AppRoute) {
        replace_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 携带一条活动记录导航，由编辑类视图消费
    pub fn navigate_with_event(&self, route: AppRoute, event: EventRecord) {
        self.event_state.set(Some(event));
        self.navigate(route);
    }

    /// 取走导航状态（取走即清空）
    pub fn take_event_state(&self) -> Option<EventRecord> {
        let state = self.event_state.get_untracked();
        if state.is_some() {
            self.event_state.set(None);
        }
        state
    }

    /// 初始化浏览器后退 / 前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let router = RouterService::new();
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router();
    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
