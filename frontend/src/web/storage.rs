//! Web Storage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的浏览器存储接口。
//! `LocalStorage` 对应 durable 存储，`SessionStorage` 对应
//! ephemeral（标签页级）存储，两者都实现 `session::KeyValueStore`。

use crate::session::KeyValueStore;

/// localStorage 封装（durable）
pub struct LocalStorage;

/// sessionStorage 封装（ephemeral，随标签页销毁）
pub struct SessionStorage;

/// 获取 localStorage 实例
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// 获取 sessionStorage 实例
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

/// 在给定存储区上执行读取
fn get_item(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok()?
}

/// 在给定存储区上执行写入
fn set_item(storage: Option<web_sys::Storage>, key: &str, value: &str) -> bool {
    storage.and_then(|s| s.set_item(key, value).ok()).is_some()
}

/// 在给定存储区上执行删除
fn remove_item(storage: Option<web_sys::Storage>, key: &str) -> bool {
    storage.and_then(|s| s.remove_item(key).ok()).is_some()
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_item(local_storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        set_item(local_storage(), key, value)
    }

    fn delete(&self, key: &str) -> bool {
        remove_item(local_storage(), key)
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_item(session_storage(), key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        set_item(session_storage(), key, value)
    }

    fn delete(&self, key: &str) -> bool {
        remove_item(session_storage(), key)
    }
}
