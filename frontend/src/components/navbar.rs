//! 顶部导航栏组件
//!
//! 链接按当前身份渲染：游客看到两个登录入口，用户 / 管理员各看到
//! 自己的面板入口和注销按钮。注销只改会话状态，存储回写由会话层负责。

use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

use crate::auth::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 单个导航链接，点击走应用内路由而非整页刷新
#[component]
fn NavLink(route: AppRoute, #[prop(into)] label: String) -> impl IntoView {
    let router = use_router();
    let href = route.to_path();
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        router.navigate(route.clone());
    };

    view! {
        <li>
            <a href=href on:click=on_click class="hover:text-gray-200">
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let identity = session.identity;

    let on_logout = move |_: MouseEvent| {
        logout(&session);
    };

    view! {
        <nav class="bg-blue-600 text-white p-4 shadow-md">
            <div class="container mx-auto flex justify-between items-center">
                <div class="text-xl font-semibold">"Event Management"</div>
                <ul class="flex space-x-4 items-center">
                    <NavLink route=AppRoute::Home label="Home" />
                    <NavLink route=AppRoute::Events label="Events" />
                    <Show when=move || !identity.with(|i| i.is_logged_in())>
                        <NavLink route=AppRoute::UserLogin label="User Login" />
                        <NavLink route=AppRoute::AdminLogin label="Admin Login" />
                    </Show>
                    <Show when=move || identity.with(|i| i.is_user())>
                        <NavLink route=AppRoute::Dashboard label="Dashboard" />
                    </Show>
                    <Show when=move || identity.with(|i| i.is_admin())>
                        <NavLink route=AppRoute::AdminDashboard label="Admin Dashboard" />
                    </Show>
                    <Show when=move || identity.with(|i| i.is_logged_in())>
                        <li>
                            <button on:click=on_logout class="hover:text-gray-200">
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </div>
        </nav>
    }
}
