//! 创建活动页
//!
//! 校验走 `validate::validate_event_form`，错误在字段输入变化时清除、
//! 不重新校验。附带图片时走 multipart 上传接口，否则走 JSON 接口。

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::SubmitEvent;

use crate::api::{EventApi, EventUpload};
use crate::auth::use_session;
use crate::validate::{EventFormInput, FormErrors, validate_event_form};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::EventBody;

#[component]
pub fn EventCreatePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (title, set_title) = signal(String::new());
    let (optional, set_optional) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (organized_by, set_organized_by) = signal(String::new());
    let (event_date, set_event_date) = signal(String::new());
    let (event_time, set_event_time) = signal(String::new());
    let (hour, set_hour) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (ticket_price, set_ticket_price) = signal(String::new());
    let image_ref = NodeRef::<html::Input>::new();

    let errors = RwSignal::new(FormErrors::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        if !session.identity.with(|i| i.is_user()) {
            router.replace(AppRoute::UserLogin);
        }
    });

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| e.get(field)).map(|message| {
                view! { <span class="text-red-500 text-sm">{message}</span> }
            })
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let title_v = title.get_untracked();
        let optional_v = optional.get_untracked();
        let description_v = description.get_untracked();
        let organized_by_v = organized_by.get_untracked();
        let event_date_v = event_date.get_untracked();
        let event_time_v = event_time.get_untracked();
        let hour_v = hour.get_untracked();
        let location_v = location.get_untracked();
        let ticket_price_v = ticket_price.get_untracked();

        let found = validate_event_form(&EventFormInput {
            title: &title_v,
            description: &description_v,
            organized_by: &organized_by_v,
            event_date: &event_date_v,
            event_time: &event_time_v,
            hour: &hour_v,
            location: &location_v,
            ticket_price: &ticket_price_v,
        });
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let image = image_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        set_submitting.set(true);
        spawn_local(async move {
            let api = EventApi::default();
            let result = match image {
                Some(file) => {
                    let owner = session
                        .identity
                        .with_untracked(|i| i.display_name())
                        .unwrap_or_default();
                    api.create_event_multipart(&EventUpload {
                        owner,
                        title: title_v,
                        optional: optional_v,
                        description: description_v,
                        organized_by: organized_by_v,
                        event_date: event_date_v,
                        event_time: event_time_v,
                        location: location_v,
                        ticket_price: ticket_price_v,
                        image: file,
                    })
                    .await
                }
                None => {
                    let Some(token) = session.identity.with_untracked(|i| i.user_token()) else {
                        set_submitting.set(false);
                        return;
                    };
                    let body = EventBody {
                        title: title_v,
                        description: description_v,
                        // 日期与时间合并成一个时间戳提交
                        date: format!("{event_date_v}T{event_time_v}"),
                        location: location_v,
                        hour: hour_v.trim().parse().unwrap_or(0.0),
                    };
                    api.create_user_event(&token, &body).await
                }
            };

            match result {
                Ok(()) => router.navigate(AppRoute::Events),
                Err(_) => {
                    set_error_msg.set(Some("Failed to create event. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-xl">
            <div class="bg-white p-8 rounded-lg shadow-md">
                <h2 class="text-2xl font-bold mb-6">"Create Event"</h2>
                <Show when=move || error_msg.with(Option::is_some)>
                    <p class="text-red-500 mb-4">{move || error_msg.get().unwrap_or_default()}</p>
                </Show>
                <form on:submit=on_submit>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Title"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=title
                            on:input=move |ev| {
                                set_title.set(event_target_value(&ev));
                                errors.update(|e| e.clear("title"));
                            }
                        />
                        {field_error("title")}
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Optional Note"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=optional
                            on:input=move |ev| set_optional.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Description"</label>
                        <textarea
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=description
                            on:input=move |ev| {
                                set_description.set(event_target_value(&ev));
                                errors.update(|e| e.clear("description"));
                            }
                        ></textarea>
                        {field_error("description")}
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Organized By"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=organized_by
                            on:input=move |ev| {
                                set_organized_by.set(event_target_value(&ev));
                                errors.update(|e| e.clear("organizedBy"));
                            }
                        />
                        {field_error("organizedBy")}
                    </div>
                    <div class="grid grid-cols-2 gap-4 mb-4">
                        <div>
                            <label class="block text-gray-700 mb-1">"Event Date"</label>
                            <input
                                type="date"
                                class="w-full px-3 py-2 border rounded-md"
                                prop:value=event_date
                                on:input=move |ev| {
                                    set_event_date.set(event_target_value(&ev));
                                    errors.update(|e| e.clear("eventDate"));
                                }
                            />
                            {field_error("eventDate")}
                        </div>
                        <div>
                            <label class="block text-gray-700 mb-1">"Event Time"</label>
                            <input
                                type="time"
                                class="w-full px-3 py-2 border rounded-md"
                                prop:value=event_time
                                on:input=move |ev| {
                                    set_event_time.set(event_target_value(&ev));
                                    errors.update(|e| e.clear("eventTime"));
                                }
                            />
                            {field_error("eventTime")}
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-4 mb-4">
                        <div>
                            <label class="block text-gray-700 mb-1">"Duration (hours)"</label>
                            <input
                                type="number"
                                class="w-full px-3 py-2 border rounded-md"
                                prop:value=hour
                                on:input=move |ev| {
                                    set_hour.set(event_target_value(&ev));
                                    errors.update(|e| e.clear("hour"));
                                }
                            />
                            {field_error("hour")}
                        </div>
                        <div>
                            <label class="block text-gray-700 mb-1">"Ticket Price (LKR)"</label>
                            <input
                                type="number"
                                class="w-full px-3 py-2 border rounded-md"
                                prop:value=ticket_price
                                on:input=move |ev| {
                                    set_ticket_price.set(event_target_value(&ev));
                                    errors.update(|e| e.clear("ticketPrice"));
                                }
                            />
                            {field_error("ticketPrice")}
                        </div>
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 mb-1">"Location"</label>
                        <input
                            type="text"
                            class="w-full px-3 py-2 border rounded-md"
                            prop:value=location
                            on:input=move |ev| {
                                set_location.set(event_target_value(&ev));
                                errors.update(|e| e.clear("location"));
                            }
                        />
                        {field_error("location")}
                    </div>
                    <div class="mb-6">
                        <label class="block text-gray-700 mb-1">"Event Image"</label>
                        <input type="file" accept="image/*" node_ref=image_ref />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700"
                        disabled=submitting
                    >
                        {move || if submitting.get() { "Creating..." } else { "Create Event" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
