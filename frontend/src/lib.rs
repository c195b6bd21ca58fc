//! Evently 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话身份管理
//! - `api`: 后端 API 客户端
//! - `validate` / `qr`: 表单校验与票面 QR 码（纯逻辑，可原生测试）
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod admin_dashboard;
    pub mod admin_edit_event;
    pub mod admin_login;
    pub mod dashboard;
    pub mod event_create;
    pub mod event_list;
    pub mod event_update;
    pub mod home;
    pub mod icons;
    pub mod navbar;
    pub mod payment_summary;
    pub mod user_login;
    pub mod user_register;
}
mod qr;
mod validate;

// 浏览器环境封装模块
pub(crate) mod web {
    pub mod cancel;
    pub mod route;
    pub mod router;
    pub mod storage;
}

use leptos::prelude::*;

use crate::auth::{SessionContext, init_session};
use crate::components::admin_dashboard::AdminDashboardPage;
use crate::components::admin_edit_event::AdminEditEventPage;
use crate::components::admin_login::AdminLoginPage;
use crate::components::dashboard::DashboardPage;
use crate::components::event_create::EventCreatePage;
use crate::components::event_list::EventListPage;
use crate::components::event_update::EventUpdatePage;
use crate::components::home::HomePage;
use crate::components::navbar::Navbar;
use crate::components::payment_summary::PaymentSummaryPage;
use crate::components::user_login::UserLoginPage;
use crate::components::user_register::UserRegisterPage;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::UserLogin => view! { <UserLoginPage /> }.into_any(),
        AppRoute::UserRegister => view! { <UserRegisterPage /> }.into_any(),
        AppRoute::Events => view! { <EventListPage /> }.into_any(),
        AppRoute::EventCreate => view! { <EventCreatePage /> }.into_any(),
        AppRoute::EventUpdate(id) => view! { <EventUpdatePage id=id /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminEditEvent(id) => view! { <AdminEditEventPage event_id=id /> }.into_any(),
        AppRoute::PaymentSummary(id) => view! { <PaymentSummaryPage id=id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-gray-100">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文
    let session = SessionContext::new();
    provide_context(session);

    // 2. 初始化会话状态（从 LocalStorage 加载身份）
    init_session(&session);

    view! {
        <Router>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
