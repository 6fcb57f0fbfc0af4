//! 子视图切换栏
//!
//! 每个页面声明自己的 (标签, 查询值) 列表；点击只改 `?view=` 参数，
//! 不做整页导航。

use leptos::prelude::*;

use crate::web::router::use_router;

#[component]
pub fn ViewTabs(tabs: Vec<(&'static str, &'static str)>) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="tabs tabs-boxed mb-6 w-fit">
            {tabs
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <button class="tab" on:click=move |_| router.set_view(value)>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
