//! 子视图选择器模块 - 领域模型
//!
//! 每个页面用 URL 查询串里的 `view` 参数在固定的几个子视图之间切换，
//! 与路由路径本身无关。未识别或缺失的值一律落到该页面的默认视图，
//! 永远不是错误状态。本模块不依赖 DOM。

/// 从查询串中提取 `view` 参数
///
/// 接受带或不带前导 `?` 的查询串。只做精确的键匹配，
/// 不做百分号解码（视图名都是简单 token）。
pub fn view_param(search: &str) -> Option<String> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "view").then(|| value.to_string())
    })
}

/// 页面子视图选择器约定
///
/// 精确字符串匹配，无部分匹配、无层级匹配；
/// 解析失败回退到 `Default::default()`。
pub trait ViewSelector: Sized + Default {
    /// 精确解析一个视图名
    fn parse(raw: &str) -> Option<Self>;

    /// 该视图写回 URL 时的查询值
    fn as_query_value(&self) -> &'static str;

    /// 从（可能缺失的）查询值解析，失败落到默认视图
    fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }

    /// 从完整查询串解析
    fn from_search(search: &str) -> Self {
        Self::from_query(view_param(search).as_deref())
    }
}

/// 主页 (`/home`) 的子视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainView {
    #[default]
    Home,
    AllUsers,
    UserActions,
}

impl ViewSelector for MainView {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Home),
            "all-users" => Some(Self::AllUsers),
            "user-actions" => Some(Self::UserActions),
            _ => None,
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::Home => "default",
            Self::AllUsers => "all-users",
            Self::UserActions => "user-actions",
        }
    }
}

/// 交易台 (`/trade`) 的子视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TradeView {
    #[default]
    Home,
    Actions,
    History,
}

impl ViewSelector for TradeView {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Home),
            "actions" => Some(Self::Actions),
            "history" => Some(Self::History),
            _ => None,
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::Home => "default",
            Self::Actions => "actions",
            Self::History => "history",
        }
    }
}

/// 中台 (`/middle-office`) 的子视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MiddleOfficeView {
    #[default]
    Home,
    Actions,
    StaticData,
}

impl ViewSelector for MiddleOfficeView {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Home),
            "actions" => Some(Self::Actions),
            "static" => Some(Self::StaticData),
            _ => None,
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::Home => "default",
            Self::Actions => "actions",
            Self::StaticData => "static",
        }
    }
}

/// 支持 (`/support`) 的子视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportView {
    #[default]
    Home,
    Actions,
}

impl ViewSelector for SupportView {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Home),
            "actions" => Some(Self::Actions),
            _ => None,
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::Home => "default",
            Self::Actions => "actions",
        }
    }
}

/// 管理 (`/admin`) 的子视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Home,
    UserActions,
    UserAll,
}

impl ViewSelector for AdminView {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "default" => Some(Self::Home),
            "user-actions" => Some(Self::UserActions),
            "user-all" => Some(Self::UserAll),
            _ => None,
        }
    }

    fn as_query_value(&self) -> &'static str {
        match self {
            Self::Home => "default",
            Self::UserActions => "user-actions",
            Self::UserAll => "user-all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_param_extraction() {
        assert_eq!(view_param("?view=history"), Some("history".to_string()));
        assert_eq!(view_param("view=history"), Some("history".to_string()));
        assert_eq!(
            view_param("?foo=1&view=actions&bar=2"),
            Some("actions".to_string())
        );
        assert_eq!(view_param(""), None);
        assert_eq!(view_param("?"), None);
        assert_eq!(view_param("?foo=1"), None);
        assert_eq!(view_param("?view"), None);
        // 空值不是缺失，但解析阶段会因无匹配而落到默认视图
        assert_eq!(view_param("?view="), Some(String::new()));
    }

    #[test]
    fn absent_or_unknown_values_select_the_default_view() {
        assert_eq!(MainView::from_query(None), MainView::Home);
        assert_eq!(MainView::from_query(Some("bogus")), MainView::Home);
        assert_eq!(TradeView::from_search(""), TradeView::Home);
        assert_eq!(TradeView::from_search("?view=History"), TradeView::Home);
        assert_eq!(SupportView::from_search("?view="), SupportView::Home);
        assert_eq!(AdminView::from_search("?other=1"), AdminView::Home);
        assert_eq!(
            MiddleOfficeView::from_search("?view=statics"),
            MiddleOfficeView::Home
        );
    }

    #[test]
    fn exact_matches_select_their_view() {
        assert_eq!(MainView::from_search("?view=all-users"), MainView::AllUsers);
        assert_eq!(
            MainView::from_search("?view=user-actions"),
            MainView::UserActions
        );
        assert_eq!(TradeView::from_search("?view=history"), TradeView::History);
        assert_eq!(
            MiddleOfficeView::from_search("?view=static"),
            MiddleOfficeView::StaticData
        );
        assert_eq!(
            SupportView::from_search("?view=actions"),
            SupportView::Actions
        );
        assert_eq!(AdminView::from_search("?view=user-all"), AdminView::UserAll);
    }

    #[test]
    fn query_values_round_trip() {
        for view in [MainView::Home, MainView::AllUsers, MainView::UserActions] {
            assert_eq!(MainView::parse(view.as_query_value()), Some(view));
        }
        for view in [TradeView::Home, TradeView::Actions, TradeView::History] {
            assert_eq!(TradeView::parse(view.as_query_value()), Some(view));
        }
        for view in [
            MiddleOfficeView::Home,
            MiddleOfficeView::Actions,
            MiddleOfficeView::StaticData,
        ] {
            assert_eq!(MiddleOfficeView::parse(view.as_query_value()), Some(view));
        }
        for view in [AdminView::Home, AdminView::UserActions, AdminView::UserAll] {
            assert_eq!(AdminView::parse(view.as_query_value()), Some(view));
        }
    }
}
