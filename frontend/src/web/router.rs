//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"请求 -> 守卫 -> 处理 -> 加载"的导航流程，
//! 重定向一律使用 replaceState，后退键不会回到受保护页面。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteDecision};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 获取当前浏览器查询串（含前导 `?`，可能为空）
fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 当前查询串（子视图选择器从这里读取）
    search: ReadSignal<String>,
    /// 设置当前查询串
    set_search: WriteSignal<String>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始加载也要过守卫：直接在地址栏输入受保护路径
    /// 或任意未知路径时，同样以 replaceState 重定向。
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial = AppRoute::from_path(&current_path());
        let (route, search) = match initial.decide(is_authenticated.get_untracked()) {
            RouteDecision::Render(route) => (route, current_search()),
            RouteDecision::Redirect(target) => {
                replace_history_state(target.to_path());
                (target, String::new())
            }
        };

        let (current_route, set_route) = signal(route);
        let (search, set_search) = signal(search);

        Self {
            current_route,
            set_route,
            search,
            set_search,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 获取当前查询串信号
    pub fn search(&self) -> ReadSignal<String> {
        self.search
    }

    /// **核心方法：导航与守卫**
    ///
    /// 跨页面导航总是清空视图选择器，新页面从默认视图开始。
    pub fn navigate(&self, target: AppRoute) {
        match target.decide(self.is_authenticated.get_untracked()) {
            RouteDecision::Render(route) => {
                push_history_state(route.to_path());
                self.set_route.set(route);
                self.set_search.set(String::new());
            }
            RouteDecision::Redirect(route) => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting.".into());
                replace_history_state(route.to_path());
                self.set_route.set(route);
                self.set_search.set(String::new());
            }
        }
    }

    /// 更新当前页面的视图选择器（`?view=<name>`）
    ///
    /// 只改查询串，不触发整页导航，路由保持不变。
    pub fn set_view(&self, view: &str) {
        let route = self.current_route.get_untracked();
        let query = format!("?view={view}");
        push_history_state(&format!("{}{}", route.to_path(), query));
        self.set_search.set(query);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let set_search = self.set_search;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());

            // popstate 时也执行守卫逻辑
            match target.decide(is_authenticated.get_untracked()) {
                RouteDecision::Render(route) => {
                    set_route.set(route);
                    set_search.set(current_search());
                }
                RouteDecision::Redirect(route) => {
                    replace_history_state(route.to_path());
                    set_route.set(route);
                    set_search.set(String::new());
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 路由器组件：注入认证信号实现守卫
#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

/// 路由出口：根据当前路由渲染匹配函数给出的视图
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let route = use_router().current_route();
    view! { {move || matcher(route.get())} }
}
