//! 订单支付摘要页
//!
//! 左侧买家与卡面信息表单，右侧订单摘要。卡号等字段只做形状校验，
//! 不触碰任何真实支付网关。提交时同步生成票面 QR 码（data URL）
//! 并随购票记录一起保存。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::{MouseEvent, SubmitEvent};

use crate::api::EventApi;
use crate::auth::use_session;
use crate::components::icons::ArrowLeft;
use crate::qr;
use crate::validate::{FormErrors, PaymentInput, validate_payment};
use crate::web::cancel::view_cancel_token;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::{PaymentSummary, TicketDetails, TicketRecord};

#[component]
pub fn PaymentSummaryPage(id: String) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (event, set_event) = signal(Option::<PaymentSummary>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    // 买家信息用当前会话预填，仍可编辑
    let (name, set_name) = signal(
        session
            .identity
            .with_untracked(|i| i.display_name())
            .unwrap_or_default(),
    );
    let (email, set_email) = signal(
        session
            .identity
            .with_untracked(|i| i.email())
            .unwrap_or_default(),
    );
    let (contact_no, set_contact_no) = signal(String::new());
    let (card_number, set_card_number) = signal(String::new());
    let (expiry_date, set_expiry_date) = signal(String::new());
    let (cvv, set_cvv) = signal(String::new());

    let errors = RwSignal::new(FormErrors::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (ticket_created, set_ticket_created) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let cancel = view_cancel_token();
    let summary_id = id.clone();
    spawn_local(async move {
        let result = EventApi::default().payment_summary(&summary_id).await;
        if cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(summary) => set_event.set(Some(summary)),
            Err(_) => set_load_error.set(Some("Failed to load event details.".to_string())),
        }
    });

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| e.get(field)).map(|message| {
                view! { <span class="text-red-500 text-sm">{message}</span> }
            })
        }
    };

    let ticket_event_id = id.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let name_v = name.get_untracked();
        let email_v = email.get_untracked();
        let contact_v = contact_no.get_untracked();
        let card_v = card_number.get_untracked();
        let expiry_v = expiry_date.get_untracked();
        let cvv_v = cvv.get_untracked();

        let found = validate_payment(&PaymentInput {
            name: &name_v,
            email: &email_v,
            contact_no: &contact_v,
            card_number: &card_v,
            expiry_date: &expiry_v,
            cvv: &cvv_v,
        });
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let Some(summary) = event.get_untracked() else {
            return;
        };

        let Ok(qr_url) = qr::ticket_qr_data_url(&summary.title, &name_v) else {
            set_error_msg.set(Some("Failed to create ticket. Please try again.".to_string()));
            return;
        };

        let ticket = TicketRecord {
            userid: email_v.clone(),
            eventid: ticket_event_id.clone(),
            ticket_details: TicketDetails {
                name: name_v,
                email: email_v,
                eventname: summary.title.clone(),
                eventdate: summary.date_only().to_string(),
                eventtime: summary.event_time.clone(),
                ticketprice: summary.ticket_price,
                qr: qr_url,
            },
        };

        set_submitting.set(true);
        spawn_local(async move {
            match EventApi::default().create_ticket(&ticket).await {
                Ok(()) => set_ticket_created.set(true),
                Err(_) => {
                    set_error_msg.set(Some("Failed to create ticket. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let go_back = move |ev: MouseEvent| {
        ev.prevent_default();
        router.navigate(AppRoute::Events);
    };

    view! {
        <div class="container mx-auto px-4 py-8 max-w-4xl">
            <a
                href="/events"
                on:click=go_back
                class="flex items-center gap-1 text-blue-600 hover:underline mb-4"
            >
                <ArrowLeft attr:class="w-4 h-4" />
                "Back to events"
            </a>

            <Show when=move || load_error.with(Option::is_some)>
                <p class="text-red-500 text-center mb-4">
                    {move || load_error.get().unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || ticket_created.get()>
                <p class="text-green-600 text-center text-xl font-semibold mb-4">
                    "Ticket Created"
                </p>
            </Show>

            <Show
                when=move || event.with(Option::is_some)
                fallback=move || {
                    view! {
                        <Show when=move || load_error.with(Option::is_none)>
                            <p class="text-gray-500 text-center">"Loading..."</p>
                        </Show>
                    }
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="bg-white p-6 rounded-lg shadow-md">
                        <h2 class="text-xl font-bold mb-4">"Payment Details"</h2>
                        <form on:submit=on_submit.clone()>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Name"</label>
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=name
                                    on:input=move |ev| {
                                        set_name.set(event_target_value(&ev));
                                        errors.update(|e| e.clear("name"));
                                    }
                                />
                                {field_error("name")}
                            </div>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Email"</label>
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=email
                                    on:input=move |ev| {
                                        set_email.set(event_target_value(&ev));
                                        errors.update(|e| e.clear("email"));
                                    }
                                />
                                {field_error("email")}
                            </div>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Contact No"</label>
                                <input
                                    type="text"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=contact_no
                                    on:input=move |ev| {
                                        set_contact_no.set(event_target_value(&ev));
                                        errors.update(|e| e.clear("contactNo"));
                                    }
                                />
                                {field_error("contactNo")}
                            </div>
                            <div class="mb-4">
                                <label class="block text-gray-700 mb-1">"Card Number"</label>
                                <input
                                    type="text"
                                    maxlength="16"
                                    class="w-full px-3 py-2 border rounded-md"
                                    prop:value=card_number
                                    on:input=move |ev| {
                                        set_card_number.set(event_target_value(&ev));
                                        errors.update(|e| e.clear("cardNumber"));
                                    }
                                />
                                {field_error("cardNumber")}
                            </div>
                            <div class="grid grid-cols-2 gap-4 mb-6">
                                <div>
                                    <label class="block text-gray-700 mb-1">"Expiry (MM/YY)"</label>
                                    <input
                                        type="text"
                                        maxlength="5"
                                        placeholder="MM/YY"
                                        class="w-full px-3 py-2 border rounded-md"
                                        prop:value=expiry_date
                                        on:input=move |ev| {
                                            set_expiry_date.set(event_target_value(&ev));
                                            errors.update(|e| e.clear("expiryDate"));
                                        }
                                    />
                                    {field_error("expiryDate")}
                                </div>
                                <div>
                                    <label class="block text-gray-700 mb-1">"CVV"</label>
                                    <input
                                        type="password"
                                        maxlength="3"
                                        class="w-full px-3 py-2 border rounded-md"
                                        prop:value=cvv
                                        on:input=move |ev| {
                                            set_cvv.set(event_target_value(&ev));
                                            errors.update(|e| e.clear("cvv"));
                                        }
                                    />
                                    {field_error("cvv")}
                                </div>
                            </div>
                            <button
                                type="submit"
                                class="w-full bg-blue-600 text-white py-2 rounded-md hover:bg-blue-700"
                                disabled=submitting
                            >
                                {move || if submitting.get() { "Processing..." } else { "Pay Now" }}
                            </button>
                        </form>
                    </div>

                    <div class="bg-white p-6 rounded-lg shadow-md h-fit">
                        <h2 class="text-xl font-bold mb-4">"Order Summary"</h2>
                        {move || {
                            event
                                .get()
                                .map(|summary| {
                                    view! {
                                        <div>
                                            <p class="text-lg font-semibold">{summary.title.clone()}</p>
                                            <p class="text-gray-600 mt-1">
                                                {summary.date_only().to_string()}
                                            </p>
                                            <p class="text-gray-600">{summary.event_time.clone()}</p>
                                            <hr class="my-4" />
                                            <p class="text-lg font-bold">
                                                {format!("Total: LKR. {}", summary.ticket_price)}
                                            </p>
                                        </div>
                                    }
                                })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
