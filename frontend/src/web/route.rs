//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、守卫规则以及通配符回退策略。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    SignIn,
    /// 主页 (需要认证)
    Home,
    /// 交易台 (需要认证)
    Trade,
    /// 中台 (需要认证)
    MiddleOffice,
    /// 支持 (需要认证)
    Support,
    /// 管理 (需要认证)
    Admin,
    /// 未匹配路径（通配符）
    NotFound,
}

/// 路由解析结果：直接渲染，或重定向（替换当前 History 条目）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/signin" => Self::SignIn,
            "/home" => Self::Home,
            "/trade" => Self::Trade,
            "/middle-office" => Self::MiddleOffice,
            "/support" => Self::Support,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::Home => "/home",
            Self::Trade => "/trade",
            Self::MiddleOffice => "/middle-office",
            Self::Support => "/support",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::SignIn | Self::NotFound)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::SignIn
    }

    /// 通配符回退目标：已认证去主页，否则去登录页
    ///
    /// 与路由守卫共用同一个认证判定（`session::is_authenticated`），
    /// 两条路径永远一致。
    pub fn fallback_redirect(is_authenticated: bool) -> Self {
        if is_authenticated {
            Self::Home
        } else {
            Self::SignIn
        }
    }

    /// 对目标路由做出渲染/重定向决定
    ///
    /// 流程：通配符先回退，受保护路由再过守卫。重定向目标本身
    /// 不再需要二次判定（回退与守卫目标都是可渲染路由）。
    pub fn decide(self, is_authenticated: bool) -> RouteDecision {
        if self == Self::NotFound {
            return RouteDecision::Redirect(Self::fallback_redirect(is_authenticated));
        }
        if self.requires_auth() && !is_authenticated {
            return RouteDecision::Redirect(Self::auth_failure_redirect());
        }
        RouteDecision::Render(self)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Trade,
        AppRoute::MiddleOffice,
        AppRoute::Support,
        AppRoute::Admin,
    ];

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::SignIn,
            AppRoute::Home,
            AppRoute::Trade,
            AppRoute::MiddleOffice,
            AppRoute::Support,
            AppRoute::Admin,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_map_to_not_found() {
        for path in ["/", "/nope", "/home/extra", "", "/SIGNIN"] {
            assert_eq!(AppRoute::from_path(path), AppRoute::NotFound);
        }
    }

    #[test]
    fn sign_in_is_open_protected_pages_are_not() {
        assert!(!AppRoute::SignIn.requires_auth());
        for route in PROTECTED {
            assert!(route.requires_auth(), "{route} must require auth");
        }
    }

    #[test]
    fn protected_routes_redirect_to_sign_in_when_unauthenticated() {
        for route in PROTECTED {
            assert_eq!(
                route.decide(false),
                RouteDecision::Redirect(AppRoute::SignIn)
            );
            assert_eq!(route.decide(true), RouteDecision::Render(route));
        }
    }

    #[test]
    fn sign_in_renders_regardless_of_session() {
        assert_eq!(
            AppRoute::SignIn.decide(false),
            RouteDecision::Render(AppRoute::SignIn)
        );
        assert_eq!(
            AppRoute::SignIn.decide(true),
            RouteDecision::Render(AppRoute::SignIn)
        );
    }

    #[test]
    fn wildcard_falls_back_by_session_state() {
        for path in ["/", "/bogus", "/deeply/nested"] {
            let route = AppRoute::from_path(path);
            assert_eq!(
                route.decide(true),
                RouteDecision::Redirect(AppRoute::Home),
                "{path} should land authenticated users on /home"
            );
            assert_eq!(
                route.decide(false),
                RouteDecision::Redirect(AppRoute::SignIn),
                "{path} should land anonymous users on /signin"
            );
        }
    }

    /// The wildcard fallback and the route guard must agree on where an
    /// anonymous user ends up.
    #[test]
    fn fallback_and_guard_agree() {
        for is_auth in [false, true] {
            let fallback = AppRoute::fallback_redirect(is_auth);
            if !is_auth {
                assert_eq!(fallback, AppRoute::auth_failure_redirect());
            }
            // Both decisions are driven by the same predicate value.
            match AppRoute::NotFound.decide(is_auth) {
                RouteDecision::Redirect(target) => assert_eq!(target, fallback),
                RouteDecision::Render(_) => panic!("wildcard must always redirect"),
            }
        }
    }
}
