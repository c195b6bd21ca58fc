//! 用户编辑活动页
//!
//! 常规入口从列表页携带导航状态进来，直接预填表单。
//! 直接输入 URL 时导航状态不存在，退回按 id 在自己的活动列表里查找；
//! 找不到才提示数据缺失，此时不会发出任何更新请求。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use crate::api::EventApi;
use crate::auth::use_session;
use crate::web::cancel::view_cancel_token;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::{EventBody, EventRecord, date};

#[component]
pub fn EventUpdatePage(id: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (event_date, set_event_date) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (hour, set_hour) = signal(String::new());

    let (ready, set_ready) = signal(false);
    let (missing, set_missing) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if !session.identity.with(|i| i.is_user()) {
            router.replace(AppRoute::UserLogin);
        }
    });

    let populate = move |event: &EventRecord| {
        set_title.set(event.title.clone());
        set_description.set(event.description.clone());
        set_event_date.set(date::date_input_value(&event.date));
        set_location.set(event.location.clone());
        set_hour.set(event.hour.to_string());
        set_ready.set(true);
    };

    // 预填：先取导航状态，没有再按 id 回退查询
    match router.take_event_state() {
        Some(event) if event.id == id => populate(&event),
        _ => {
            let cancel = view_cancel_token();
            let wanted = id.clone();
            if let Some(token) = session.identity.with_untracked(|i| i.user_token()) {
                spawn_local(async move {
                    let result = EventApi::default().user_events(&token).await;
                    if cancel.is_cancelled() {
                        return;
                    }
                    match result {
                        Ok(list) => match list.iter().find(|e| e.id == wanted) {
                            Some(event) => populate(event),
                            None => set_missing.set(true),
                        },
                        Err(_) => set_missing.set(true),
                    }
                });
            } else {
                set_missing.set(true);
            }
        }
    }

    let update_id = id.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let title_v = title.get_untracked();
        let description_v = description.get_untracked();
        let date_v = event_date.get_untracked();
        let location_v = location.get_untracked();
        let hour_v = hour.get_untracked();

        if title_v.trim().is_empty()
            || description_v.trim().is_empty()
            || date_v.trim().is_empty()
            || location_v.trim().is_empty()
        {
            set_error_msg.set(Some("Please fill out all fields.".to_string()));
            return;
        }

        let Some(token) = session.identity.with_untracked(|i| i.user_token()) else {
            return;
        };

        let event_id = update_id.clone();
        set_submitting.set(true);
        spawn_local(async move {
            let body = EventBody {
                title: title_v,
                description: description_v,
                date: date_v,
                location: location_v,
                hour: hour_v.trim().parse().unwrap_or(0.0),
            };
            match EventApi::default()
                .update_user_event(&token, &event_id, &body)
                .await
            {
                Ok(()) => {
                    set_success_msg.set(Some("Event updated successfully!".to_string()));
                    Timeout::new(1500, move || {
                        router.navigate(AppRoute::Events);
                    })
                    .forget();
                }
                Err(_) => {
                    set_error_msg.set(Some("Failed to update event. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };
    let on_submit = StoredValue::new(on_submit);

    view! {
        <div class="container mx-auto px-4 py-8 max-w-xl">
            <Show
                when=move || !missing.get()
                fallback=|| {
                    view! { <p class="text-red-500 text-center mt-8">"Event data not found."</p> }
                }
            >
                <Show
                    when=move || ready.get()
                    fallback=|| view! { <p class="text-gray-500 text-center">"Loading..."</p> }
                >
                    <div class="bg-white p-8 rounded-lg shadow-md">
                        <h2 class="text-2xl font-bold mb-6">"Update Event"</h2>
                        <Show when=move || success_msg.with(Option::is_some)>
                            <p class="text-green-600 mb-4">
                                {move || success_msg.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || error_msg.with(Option::is_some)>
                            <p class="text-red-500 mb-4">
                                {move || error_msg.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <form on:submit=move |ev| on_submit.with_value(|f| f(ev))>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Title"</label>
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=title
                                    on:input=move |ev| set_title.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Description"</label>
                                <textarea
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=description
                                    on:input=move |ev| set_description.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <div class="grid grid-cols-2 gap-4 mb-4">
                                <div>
                                    <label class="block text-gray-700 mb-1">"Event Date"</label>
                                    <input
                                        type="date"
                                        class="w-full px-3 py-2 border rounded-md"
                                        prop:value=event_date
                                        on:input=move |ev| set_event_date.set(event_target_value(&ev))
                                    />
                                </div>
                                <div>
                                    <label class="block text-gray-700 mb-1">"Duration (hours)"</label>
                                    <input
                                        type="number"
                                        class="w-full px-3 py-2 border rounded-md"
                                        prop:value=hour
                                        on:input=move |ev| set_hour.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <div class="mb-6">
                                <label class="block text-gray-700 mb-1">"Location"</label>
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=location
                                    on:input=move |ev| set_location.set(event_target_value(&ev))
                                />
                            </div>
                            <button
                                type="submit"
                                class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700"
                                disabled=submitting
                            >
                                {move || if submitting.get() { "Updating..." } else { "Update Event" }}
                            </button>
                        </form>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
