//! TradeGate 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫规则（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态判定（守卫与通配符回退共用）
//! - `view`: 每个页面的子视图选择器约定
//! - `form`: 模式驱动的记录编辑器
//! - `static_data`: 会话级参考数据缓存
//! - `components` / `pages` / `views`: UI 组件层

mod api;
mod components {
    pub mod home_content;
    pub mod layout;
    pub mod signin;
    pub mod user_editor;
    pub mod view_tabs;
}
mod form;
mod pages {
    pub mod admin;
    pub mod main;
    pub mod middle_office;
    pub mod support;
    pub mod trader_sales;
}
mod session;
mod static_data;
mod view;
mod views {
    pub mod all_users;
    pub mod static_data_actions;
    pub mod trade_actions;
    pub mod trade_blotter;
    pub mod user_actions;
}

// 原生 Web API 封装模块
pub(crate) mod web;

use leptos::prelude::*;

use crate::api::PlatformApi;
use crate::components::signin::SignInPage;
use crate::pages::admin::AdminPage;
use crate::pages::main::MainPage;
use crate::pages::middle_office::MiddleOfficePage;
use crate::pages::support::SupportPage;
use crate::pages::trader_sales::TraderSalesPage;
use crate::static_data::StaticDataCache;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的页面组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::Home => view! { <MainPage /> }.into_any(),
        AppRoute::Trade => view! { <TraderSalesPage /> }.into_any(),
        AppRoute::MiddleOffice => view! { <MiddleOfficePage /> }.into_any(),
        AppRoute::Support => view! { <SupportPage /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        // 通配符在守卫阶段就被重定向，这里只是兜底
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 提供 API 客户端与参考数据缓存（全应用共享）
    provide_context(PlatformApi::new(String::new()));
    provide_context(StaticDataCache::new());

    view! {
        // 2. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=crate::session::auth_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
