//! 管理员登录页
//!
//! 与用户登录共用请求模型，但失败时不区分原因，统一提示一条信息。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use crate::api::EventApi;
use crate::auth::{login_admin, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::LoginRequest;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            let req = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            match EventApi::default().admin_login(&req).await {
                Ok(res) => match res.token {
                    Some(token) => {
                        login_admin(&session, token);
                        router.navigate(AppRoute::AdminDashboard);
                    }
                    None => {
                        set_error_msg.set(Some("Invalid credentials or server error".to_string()));
                    }
                },
                Err(_) => {
                    set_error_msg.set(Some("Invalid credentials or server error".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex justify-center items-center min-h-screen bg-gray-100">
            <div class="bg-white p-8 rounded-lg shadow-md w-full max-w-md">
                <h2 class="text-2xl font-bold text-center mb-6">"Admin Login"</h2>
                <Show when=move || error_msg.with(Option::is_some)>
                    <p class="text-red-500 text-center mb-4">
                        {move || error_msg.get().unwrap_or_default()}
                    </p>
                </Show>
                <form on:submit=on_submit>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Email"</label>
                        <input
                            type="email"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 mb-1">"Password"</label>
                        <input
                            type="password"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-gray-800 text-white py-2 rounded-md hover:bg-gray-900"
                        disabled=submitting
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
