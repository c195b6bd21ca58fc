//! 首页
//!
//! 展示「今日」与「即将到来」两个活动分桶。分桶规则在
//! `evently_shared::date` 里，这里只负责拉取与渲染。
//! 未登录用户挂载即重定向到登录页，不发请求。

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::EventApi;
use crate::auth::use_session;
use crate::web::cancel::view_cancel_token;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use evently_shared::date::bucket_events;
use evently_shared::{EventRecord, date};

#[component]
fn EventCard(event: EventRecord) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md p-4">
            <h3 class="text-lg font-semibold">{event.title.clone()}</h3>
            <p class="text-gray-600 text-sm mt-1">{event.description.clone()}</p>
            <p class="text-gray-500 text-sm mt-2">{date::format_display(&event.date)}</p>
            <p class="text-gray-500 text-sm">{event.location.clone()}</p>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let (events, set_events) = signal(Vec::<EventRecord>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    // 守卫：无用户 token 直接重定向，不触发请求
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

    // 分桶是纯函数，以渲染时刻的 now 作为基准
    let buckets = Memo::new(move |_| events.with(|list| bucket_events(list, Utc::now())));
    let today = move || buckets.with(|b| b.today.clone());
    let upcoming = move || buckets.with(|b| b.upcoming.clone());

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="bg-blue-600 text-white rounded-lg p-8 mb-8 text-center">
                <h1 class="text-3xl font-bold">"Discover Events"</h1>
                <p class="mt-2">"Find out what's happening today and what's coming up next."</p>
            </div>

            <Show when=move || error_msg.with(Option::is_some)>
                <p class="text-red-500 text-center mb-4">
                    {move || error_msg.get().unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || !loading.get()>
                <section class="mb-8">
                    <h2 class="text-2xl font-semibold mb-4">"Today's Events"</h2>
                    <Show
                        when=move || !today().is_empty()
                        fallback=|| view! { <p class="text-gray-500">"No events today."</p> }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <For
                                each=today
                                key=|event| event.id.clone()
                                children=|event| view! { <EventCard event=event /> }
                            />
                        </div>
                    </Show>
                </section>

                <section>
                    <h2 class="text-2xl font-semibold mb-4">"Upcoming Events"</h2>
                    <Show
                        when=move || !upcoming().is_empty()
                        fallback=|| view! { <p class="text-gray-500">"No upcoming events."</p> }
                    >
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <For
                                each=upcoming
                                key=|event| event.id.clone()
                                children=|event| view! { <EventCard event=event /> }
                            />
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
