//! 用户注册页
//!
//! 成功后把姓名留在 LocalStorage（登录接口不回传姓名，问候语靠它），
//! 提示两秒后自动跳转登录页。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use crate::api::EventApi;
use crate::auth::KEY_USER_NAME;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::storage::LocalStorage;
use evently_shared::RegisterRequest;

#[component]
pub fn UserRegisterPage() -> impl IntoView {
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);

        let name_v = name.get_untracked();
        let email_v = email.get_untracked();
        let password_v = password.get_untracked();
        let confirm_v = confirm.get_untracked();

        if name_v.trim().is_empty()
            || email_v.trim().is_empty()
            || password_v.is_empty()
            || confirm_v.is_empty()
        {
            set_error_msg.set(Some("Please fill out all fields.".to_string()));
            return;
        }
        if password_v != confirm_v {
            set_error_msg.set(Some("Passwords do not match.".to_string()));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let req = RegisterRequest {
                name: name_v.clone(),
                email: email_v,
                password: password_v,
            };
            match EventApi::default().register(&req).await {
                Ok(()) => {
                    LocalStorage::set(KEY_USER_NAME, &name_v);
                    set_success_msg.set(Some(
                        "Registration successful! Redirecting to login...".to_string(),
                    ));
                    Timeout::new(2000, move || {
                        router.navigate(AppRoute::UserLogin);
                    })
                    .forget();
                }
                Err(err) => {
                    let message = err
                        .server_message()
                        .unwrap_or_else(|| "An error occurred. Please try again.".to_string());
                    set_error_msg.set(Some(message));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex justify-center items-center min-h-screen bg-gray-100">
            <div class="bg-white p-8 rounded-lg shadow-md w-full max-w-md">
                <h2 class="text-2xl font-bold text-center mb-6">"Register"</h2>
                <Show when=move || error_msg.with(Option::is_some)>
                    <p class="text-red-500 text-center mb-4">
                        {move || error_msg.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show when=move || success_msg.with(Option::is_some)>
                    <p class="text-green-600 text-center mb-4">
                        {move || success_msg.get().unwrap_or_default()}
                    </p>
                </Show>
                <form on:submit=on_submit>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Name"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Email"</label>
                        <input
                            type="email"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Password"</label>
                        <input
                            type="password"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 mb-1">"Confirm Password"</label>
                        <input
                            type="password"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=confirm
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700"
                        disabled=submitting
                    >
                        {move || if submitting.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
