//! 管理员控制面板
//!
//! 表格展示全部活动与状态统计。从编辑页返回时会携带更新后的记录，
//! 列表拉取完成后就地替换对应行，避免等后端列表接口的数据同步。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::EventApi;
use crate::auth::use_session;
use crate::components::icons::{Pencil, Trash2};
use crate::web::cancel::view_cancel_token;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::{EventRecord, EventStatus, date};

fn short_description(event: &EventRecord) -> String {
    if event.description.is_empty() {
        "No Description".to_string()
    } else {
        let head: String = event.description.chars().take(50).collect();
        format!("{head}...")
    }
}

#[component]
fn StatCard(#[prop(into)] label: String, value: Memo<usize>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-4 text-center">
            <p class="text-2xl font-bold">{move || value.get()}</p>
            <p class="text-gray-600 text-sm">{label}</p>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (events, set_events) = signal(Vec::<EventRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 编辑页带回来的记录，在挂载时取走，等列表到位后套用
    let pending_update = StoredValue::new(router.take_event_state());

    Effect::new(move |_| {
        if !session.identity.with(|i| i.is_admin()) {
            router.replace(AppRoute::AdminLogin);
        }
    });

    let cancel = view_cancel_token();
    Effect::new(move |_| {
        let Some(token) = session.identity.with(|i| i.admin_token()) else {
            return;
        };
        let cancel = cancel.clone();
        spawn_local(async move {
            let result = EventApi::default().admin_events(&token).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(mut data) => {
                    if let Some(updated) = pending_update.get_value() {
                        if let Some(slot) = data.iter_mut().find(|e| e.id == updated.id) {
                            *slot = updated;
                        }
                    }
                    set_events.set(data);
                }
                Err(_) => set_error_msg.set(Some(
                    "Failed to fetch events. Please try again later.".to_string(),
                )),
            }
            set_loading.set(false);
        });
    });

    let total = Memo::new(move |_| events.with(Vec::len));
    let count_by = |status: EventStatus| {
        Memo::new(move |_| events.with(|list| list.iter().filter(|e| e.status == status).count()))
    };
    let approved = count_by(EventStatus::Approved);
    let pending = count_by(EventStatus::Pending);
    let rejected = count_by(EventStatus::Rejected);

    let handle_edit = move |event: EventRecord| {
        router.navigate_with_event(AppRoute::AdminEditEvent(event.id.clone()), event);
    };

    let handle_delete = move |id: String| {
        let Some(token) = session.identity.with_untracked(|i| i.admin_token()) else {
            return;
        };
        spawn_local(async move {
            match EventApi::default().admin_delete_event(&token, &id).await {
                Ok(()) => set_events.update(|list| list.retain(|e| e.id != id)),
                // 删除失败只记录到控制台，界面不提示
                Err(err) => {
                    web_sys::console::error_1(&format!("Error deleting event: {err}").into());
                }
            }
        });
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold mb-6">"Admin Dashboard"</h1>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-8">
                <StatCard label="Total Events" value=total />
                <StatCard label="Approved" value=approved />
                <StatCard label="Pending" value=pending />
                <StatCard label="Rejected" value=rejected />
            </div>

            <Show when=move || error_msg.with(Option::is_some)>
                <p class="text-red-500 mb-4">{move || error_msg.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="text-gray-500">"Loading events..."</p> }
            >
                <div class="bg-white rounded-lg shadow-md overflow-x-auto">
                    <table class="min-w-full text-sm">
                        <thead class="bg-gray-50 text-left">
                            <tr>
                                <th class="px-4 py-3">"Title"</th>
                                <th class="px-4 py-3">"Description"</th>
                                <th class="px-4 py-3">"Date"</th>
                                <th class="px-4 py-3">"Location"</th>
                                <th class="px-4 py-3">"Status"</th>
                                <th class="px-4 py-3">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || events.get()
                                key=|event| event.id.clone()
                                children=move |event| {
                                    let edit_event = event.clone();
                                    let delete_id = event.id.clone();
                                    view! {
                                        <tr class="border-t">
                                            <td class="px-4 py-3">{event.title.clone()}</td>
                                            <td class="px-4 py-3">{short_description(&event)}</td>
                                            <td class="px-4 py-3">
                                                {date::format_display(&event.date)}
                                            </td>
                                            <td class="px-4 py-3">{event.location.clone()}</td>
                                            <td class="px-4 py-3">{event.status.as_str()}</td>
                                            <td class="px-4 py-3">
                                                <div class="flex gap-2">
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
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
