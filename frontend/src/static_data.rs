//! 静态参考数据缓存模块
//!
//! 下拉选项列表按类别惰性加载，整个会话内每个类别最多发起一次请求。
//! "已填充或在途"检查保证并发渲染同一类别时不会重复请求；
//! 在途期间依赖它的字段渲染空选项列表而不是阻塞表单。
//! 请求失败只移除占位，下次挂载自动重试，永远不会让表单崩溃。

use std::collections::HashMap;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tradegate_shared::OptionItem;

/// 参考数据类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticCategory {
    UserProfiles,
    Currencies,
    Desks,
}

impl StaticCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserProfiles => "User Profiles",
            Self::Currencies => "Currencies",
            Self::Desks => "Desks",
        }
    }
}

/// 参考数据提供方
///
/// 与 HTTP 层解耦：生产实现是 `PlatformApi`，
/// 测试用计数 mock 驱动缓存状态机。
#[async_trait(?Send)]
pub trait ReferenceDataProvider {
    async fn fetch_category(&self, category: StaticCategory) -> Result<Vec<OptionItem>, String>;
}

/// 单个类别的缓存状态
#[derive(Debug, Clone, PartialEq)]
enum CategoryState {
    /// 请求在途，依赖方先用空列表渲染
    InFlight,
    /// 已就绪
    Ready(Vec<OptionItem>),
}

/// 类别状态表（纯数据结构，不依赖响应式运行时）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    entries: HashMap<StaticCategory, CategoryState>,
}

impl CategoryTable {
    /// 读取某类别的选项列表；未就绪（缺失或在途）时返回空列表
    pub fn options(&self, category: StaticCategory) -> Vec<OptionItem> {
        match self.entries.get(&category) {
            Some(CategoryState::Ready(options)) => options.clone(),
            _ => Vec::new(),
        }
    }

    /// 某类别是否已就绪
    pub fn is_ready(&self, category: StaticCategory) -> bool {
        matches!(self.entries.get(&category), Some(CategoryState::Ready(_)))
    }

    /// **单次请求守卫**
    ///
    /// 仅当类别既未就绪也不在途时登记在途占位并返回 true；
    /// 调用方只有拿到 true 才允许发起真正的请求。
    pub fn begin_fetch(&mut self, category: StaticCategory) -> bool {
        if self.entries.contains_key(&category) {
            return false;
        }
        self.entries.insert(category, CategoryState::InFlight);
        true
    }

    /// 请求完成：成功则就绪，失败则移除占位（下次挂载重试）
    pub fn complete(&mut self, category: StaticCategory, result: Result<Vec<OptionItem>, String>) {
        match result {
            Ok(options) => {
                self.entries.insert(category, CategoryState::Ready(options));
            }
            Err(_) => {
                self.entries.remove(&category);
            }
        }
    }
}

/// 会话级共享缓存
///
/// `RwSignal` 包装让选项就绪时依赖的下拉框自动重渲染。
/// 所有表单实例共享同一份缓存，只读消费。
#[derive(Clone, Copy)]
pub struct StaticDataCache {
    table: RwSignal<CategoryTable>,
}

impl StaticDataCache {
    pub fn new() -> Self {
        Self {
            table: RwSignal::new(CategoryTable::default()),
        }
    }

    /// 响应式读取某类别的选项列表
    pub fn options(&self, category: StaticCategory) -> Vec<OptionItem> {
        self.table.with(|table| table.options(category))
    }

    /// 响应式读取就绪状态
    pub fn is_ready(&self, category: StaticCategory) -> bool {
        self.table.with(|table| table.is_ready(category))
    }

    /// 确保某类别已加载或在途
    ///
    /// 导航离开不会取消在途请求，结果照常写入缓存供后续使用。
    pub fn ensure_loaded<P>(&self, provider: &P, category: StaticCategory)
    where
        P: ReferenceDataProvider + Clone + 'static,
    {
        let should_fetch = self
            .table
            .try_update(|table| table.begin_fetch(category))
            .unwrap_or(false);
        if !should_fetch {
            return;
        }

        let cache = *self;
        let provider = provider.clone();
        spawn_local(async move {
            let result = provider.fetch_category(category).await;
            if let Err(message) = &result {
                web_sys::console::warn_1(
                    &format!("[StaticData] fetch {category:?} failed: {message}").into(),
                );
            }
            cache.table.update(|table| table.complete(category, result));
        });
    }
}

impl Default for StaticDataCache {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取共享缓存
pub fn use_static_data() -> StaticDataCache {
    use_context::<StaticDataCache>().expect("StaticDataCache should be provided")
}
