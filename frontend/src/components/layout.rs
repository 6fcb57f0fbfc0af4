//! 页面骨架组件
//!
//! 所有受保护页面共用的导航栏 + 内容容器。
//! 登出在这里触发：清掉两个存储里的会话标志后导航回登录页。

use leptos::prelude::*;

use crate::session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

const NAV_LINKS: [(&str, AppRoute); 5] = [
    ("Home", AppRoute::Home),
    ("Trade", AppRoute::Trade),
    ("Middle Office", AppRoute::MiddleOffice),
    ("Support", AppRoute::Support),
    ("Admin", AppRoute::Admin),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let router = use_router();

    let on_sign_out = move |_| {
        session::clear();
        router.navigate(AppRoute::SignIn);
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <span class="text-xl font-bold px-4">"Trade Platform"</span>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, target)| {
                            view! {
                                <button
                                    class="btn btn-ghost btn-sm"
                                    on:click=move |_| router.navigate(target)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex-none">
                    <button class="btn btn-outline btn-sm" on:click=on_sign_out>
                        "Sign out"
                    </button>
                </div>
            </div>
            <div class="p-4 md:p-8 max-w-5xl mx-auto">{children()}</div>
        </div>
    }
}
