//! 静态数据视图
//!
//! 展示共享参考数据缓存里的类别：多处需要同一类别时也只会
//! 触发一次请求，在途期间先渲染空列表。

use leptos::prelude::*;

use crate::api::use_api;
use crate::static_data::{StaticCategory, use_static_data};

const CATEGORIES: [StaticCategory; 2] = [StaticCategory::Currencies, StaticCategory::Desks];

#[component]
pub fn StaticDataActionsView() -> impl IntoView {
    let api = use_api();
    let statics = use_static_data();

    for category in CATEGORIES {
        statics.ensure_loaded(&api, category);
    }

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {CATEGORIES
                .into_iter()
                .map(|category| {
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h2 class="card-title">{category.label()}</h2>
                                <Show
                                    when=move || statics.is_ready(category)
                                    fallback=|| view! {
                                        <span class="loading loading-spinner text-primary"></span>
                                    }
                                >
                                    <ul class="list-disc list-inside">
                                        {move || {
                                            statics
                                                .options(category)
                                                .into_iter()
                                                .map(|option| view! { <li>{option.label}</li> })
                                                .collect_view()
                                        }}
                                    </ul>
                                </Show>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
