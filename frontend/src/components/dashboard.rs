//! 用户控制面板
//!
//! 列出当前用户的全部活动，可编辑 / 删除。删除成功后在本地列表里
//! 移除该条记录，不重新拉取。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::MouseEvent;

use crate::api::EventApi;
use crate::auth::use_session;
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::web::cancel::view_cancel_token;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::{EventRecord, date};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (events, set_events) = signal(Vec::<EventRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if !session.identity.with(|i| i.is_user()) {
            router.replace(AppRoute::UserLogin);
        }
    });

    let cancel = view_cancel_token();
    Effect::new(move |_| {
        let Some(token) = session.identity.with(|i| i.user_token()) else {
            return;
        };
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = EventApi::default().user_events(&token).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(data) => set_events.set(data),
                Err(_) => set_error_msg.set(Some(
                    "Failed to fetch events. Please try again later.".to_string(),
                )),
            }
            set_loading.set(false);
        });
    });

    let handle_edit = move |event: EventRecord| {
        router.navigate_with_event(AppRoute::EventUpdate(event.id.clone()), event);
    };

    let handle_delete = move |id: String| {
        let Some(token) = session.identity.with_untracked(|i| i.user_token()) else {
            return;
        };
        spawn_local(async move {
            match EventApi::default().delete_user_event(&token, &id).await {
                Ok(()) => {
                    set_events.update(|list| list.retain(|e| e.id != id));
                    set_success_msg.set(Some("Event deleted successfully!".to_string()));
                    set_error_msg.set(None);
                }
                Err(_) => {
                    set_error_msg.set(Some(
                        "Failed to delete event. Please try again later.".to_string(),
                    ));
                }
            }
        });
    };

    let welcome = move || {
        session
            .identity
            .with(|i| i.display_name())
            .map(|name| format!("Welcome, {name}"))
            .unwrap_or_default()
    };

    let go_create = move |ev: MouseEvent| {
        ev.prevent_default();
        router.navigate(AppRoute::EventCreate);
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="flex justify-between items-center mb-6">
                <div>
                    <h1 class="text-2xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-600">{welcome}</p>
                </div>
                <a
                    href="/events/create"
                    on:click=go_create
                    class="flex items-center gap-1 bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700"
                >
                    <Plus attr:class="w-4 h-4" />
                    "Add Event"
                </a>
            </div>

            <Show when=move || success_msg.with(Option::is_some)>
                <p class="text-green-600 mb-4">{move || success_msg.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error_msg.with(Option::is_some)>
                <p class="text-red-500 mb-4">{move || error_msg.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="text-gray-500">"Loading events..."</p> }
            >
                <Show
                    when=move || events.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="text-gray-500">"No events yet."</p> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <For
                            each=move || events.get()
                            key=|event| event.id.clone()
                            children=move |event| {
                                let edit_event = event.clone();
                                let delete_id = event.id.clone();
                                view! {
                                    <div class="bg-white rounded-lg shadow-md p-4">
                                        <div class="flex justify-between items-start">
                                            <h3 class="text-lg font-semibold">{event.title.clone()}</h3>
                                            <span class="text-sm text-gray-500">
                                                {event.status.as_str()}
                                            </span>
                                        </div>
                                        <p class="text-gray-600 text-sm mt-1">
                                            {event.description.clone()}
                                        </p>
                                        <p class="text-gray-500 text-sm mt-2">
                                            {date::format_display(&event.date)}
                                        </p>
                                        <p class="text-gray-500 text-sm">{event.location.clone()}</p>
                                        <p class="text-gray-500 text-sm">
                                            {format!("Duration: {} h", event.hour)}
                                        </p>
                                        <div class="flex gap-2 mt-3">
                                            <button
                                                class="text-blue-600 hover:text-blue-800"
                                                on:click=move |_| handle_edit(edit_event.clone())
                                            >
                                                <Pencil attr:class="w-5 h-5" />
                                            </button>
                                            <button
                                                class="text-red-600 hover:text-red-800"
                                                on:click=move |_| handle_delete(delete_id.clone())
                                            >
                                                <Trash2 attr:class="w-5 h-5" />
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
