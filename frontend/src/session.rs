//! 会话状态模块
//!
//! 会话标志存放在两个 Web Storage 中：durable (localStorage) 与
//! ephemeral (sessionStorage)。两者逻辑等价（任一为真即视为已认证），
//! 认证判定只有这一处实现，路由守卫与通配符回退共用它。
//!
//! 本模块对存储只读；写入仅发生在登录/登出流程。

use leptos::prelude::*;

use crate::web::{LocalStorage, SessionStorage};
use tradegate_shared::{AUTH_FLAG_KEY, AUTH_FLAG_TRUE};

/// 键值存储抽象
///
/// 通过 trait 与 `web_sys::Storage` 解耦，使认证判定可以在
/// 原生环境下用内存存储进行测试。
pub trait KeyValueStore {
    /// 获取存储的字符串值，键不存在或读取失败时返回 `None`
    fn get(&self, key: &str) -> Option<String>;
    /// 设置存储值，返回操作是否成功
    fn set(&self, key: &str, value: &str) -> bool;
    /// 删除键值对，返回操作是否成功
    fn delete(&self, key: &str) -> bool;
}

/// 单个存储是否持有认证标志
///
/// 只有与字面量 `"true"` 完全相等才算数；缺失或畸形值一律视为未认证。
fn flag_attested<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store
        .get(AUTH_FLAG_KEY)
        .is_some_and(|value| value == AUTH_FLAG_TRUE)
}

/// **核心判定：两个存储的逻辑或**
///
/// 守卫不区分标志来自哪个存储。
pub fn is_authenticated<D, E>(durable: &D, ephemeral: &E) -> bool
where
    D: KeyValueStore + ?Sized,
    E: KeyValueStore + ?Sized,
{
    flag_attested(durable) || flag_attested(ephemeral)
}

/// 读取当前浏览器会话的认证状态
pub fn current() -> bool {
    is_authenticated(&LocalStorage, &SessionStorage)
}

/// 认证状态信号（用于路由服务注入）
///
/// 派生信号在每次求值时重新读取存储，守卫因此在每次
/// 渲染/导航时拿到最新状态，无需订阅存储变化。
pub fn auth_signal() -> Signal<bool> {
    Signal::derive(current)
}

/// 建立会话
///
/// `remember` 为 true 时写入 durable 存储（跨标签页、跨重启），
/// 否则写入 ephemeral 存储（仅当前标签页）。只写其中一个。
pub fn establish(remember: bool) {
    if remember {
        LocalStorage.set(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
    } else {
        SessionStorage.set(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
    }
}

/// 清除会话（两个存储都清）
pub fn clear() {
    LocalStorage.delete(AUTH_FLAG_KEY);
    SessionStorage.delete(AUTH_FLAG_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for a browser storage area
    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.set(key, value);
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }

        fn delete(&self, key: &str) -> bool {
            self.entries.borrow_mut().remove(key).is_some()
        }
    }

    #[test]
    fn unauthenticated_when_both_stores_empty() {
        let durable = MemoryStore::default();
        let ephemeral = MemoryStore::default();
        assert!(!is_authenticated(&durable, &ephemeral));
    }

    #[test]
    fn either_store_attests_authentication() {
        let flagged = MemoryStore::with(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
        let empty = MemoryStore::default();
        assert!(is_authenticated(&flagged, &empty));

        let flagged = MemoryStore::with(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
        let empty = MemoryStore::default();
        assert!(is_authenticated(&empty, &flagged));
    }

    #[test]
    fn only_the_literal_true_counts() {
        for malformed in ["TRUE", "True", "1", "yes", ""] {
            let durable = MemoryStore::with(AUTH_FLAG_KEY, malformed);
            let ephemeral = MemoryStore::default();
            assert!(
                !is_authenticated(&durable, &ephemeral),
                "value {malformed:?} must not authenticate"
            );
        }
    }

    #[test]
    fn unrelated_keys_do_not_authenticate() {
        let durable = MemoryStore::with("user", "jdoe");
        let ephemeral = MemoryStore::default();
        assert!(!is_authenticated(&durable, &ephemeral));
    }

    /// Stored flags drive the route guard end to end: stores -> predicate
    /// -> decision.
    #[test]
    fn stored_flags_gate_protected_routes() {
        use crate::web::route::{AppRoute, RouteDecision};

        // Both stores empty: protected routes redirect to sign-in and the
        // wildcard falls back there too.
        let durable = MemoryStore::default();
        let ephemeral = MemoryStore::default();
        let auth = is_authenticated(&durable, &ephemeral);
        assert_eq!(
            AppRoute::Home.decide(auth),
            RouteDecision::Redirect(AppRoute::SignIn)
        );
        assert_eq!(
            AppRoute::from_path("/bogus").decide(auth),
            RouteDecision::Redirect(AppRoute::SignIn)
        );

        // A flag in either store renders the page and lands the wildcard
        // on the home page.
        let flagged = MemoryStore::with(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
        let auth = is_authenticated(&durable, &flagged);
        assert_eq!(AppRoute::Home.decide(auth), RouteDecision::Render(AppRoute::Home));
        assert_eq!(
            AppRoute::from_path("/bogus").decide(auth),
            RouteDecision::Redirect(AppRoute::Home)
        );

        let auth = is_authenticated(&flagged, &ephemeral);
        assert_eq!(AppRoute::Admin.decide(auth), RouteDecision::Render(AppRoute::Admin));
    }
}
