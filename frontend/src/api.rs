use async_trait::async_trait;
use gloo_net::http::Request;
use tradegate_shared::protocol::{
    ApiRequest, HttpMethod, ListCurrenciesRequest, ListDesksRequest, ListTradesRequest,
    ListUserProfilesRequest, ListUsersRequest, UpdateUserRequest,
};
use tradegate_shared::{ApplicationUser, OptionItem, TradeBlotterRow};

use crate::static_data::{ReferenceDataProvider, StaticCategory};

use leptos::prelude::*;

/// 平台 API 客户端
///
/// 同源部署时 `base_url` 为空串，所有路径取自 shared 协议定义。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformApi {
    pub base_url: String,
}

impl PlatformApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 按协议定义发送请求并解析 JSON 响应
    async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, String> {
        let url = self.url(&request.path());
        let builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
            HttpMethod::Patch => Request::patch(&url),
        };

        let response = match R::METHOD {
            HttpMethod::Get => builder.send().await,
            _ => {
                builder
                    .header("Content-Type", "application/json")
                    .json(request)
                    .map_err(|e| e.to_string())?
                    .send()
                    .await
            }
        }
        .map_err(|e| e.to_string())?;

        if !response.ok() {
            return Err(format!("Request failed: {}", response.status()));
        }

        response
            .json::<R::Response>()
            .await
            .map_err(|e| e.to_string())
    }

    /// 校验登录凭据
    ///
    /// `POST /api/login/{userName}?Authorization=<password>`，
    /// 2xx 视为成功，403 视为凭据错误，其余状态按错误返回。
    pub async fn authenticate(&self, user_name: &str, password: &str) -> Result<bool, String> {
        let url = self.url(&format!("/api/login/{user_name}"));
        let response = Request::post(&url)
            .query([("Authorization", password)])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.ok() {
            Ok(true)
        } else if response.status() == 403 {
            Ok(false)
        } else {
            Err(format!("Login request failed: {}", response.status()))
        }
    }

    /// 获取用户列表
    pub async fn get_users(&self) -> Result<Vec<ApplicationUser>, String> {
        self.send(&ListUsersRequest).await
    }

    /// 保存用户：有 id 走更新，否则创建
    pub async fn save_user(&self, user: ApplicationUser) -> Result<ApplicationUser, String> {
        if user.id.is_some() {
            self.send(&UpdateUserRequest(user)).await
        } else {
            self.send(&user).await
        }
    }

    /// 获取交易流水
    pub async fn get_trades(&self) -> Result<Vec<TradeBlotterRow>, String> {
        self.send(&ListTradesRequest).await
    }
}

#[async_trait(?Send)]
impl ReferenceDataProvider for PlatformApi {
    async fn fetch_category(&self, category: StaticCategory) -> Result<Vec<OptionItem>, String> {
        match category {
            StaticCategory::UserProfiles => {
                let profiles = self.send(&ListUserProfilesRequest).await?;
                Ok(profiles
                    .into_iter()
                    .map(|profile| OptionItem::new(profile.user_type.clone(), profile.user_type))
                    .collect())
            }
            StaticCategory::Currencies => {
                let currencies = self.send(&ListCurrenciesRequest).await?;
                Ok(currencies
                    .into_iter()
                    .map(|currency| OptionItem::new(currency.currency.clone(), currency.currency))
                    .collect())
            }
            StaticCategory::Desks => {
                let desks = self.send(&ListDesksRequest).await?;
                Ok(desks
                    .into_iter()
                    .map(|desk| OptionItem::new(desk.desk_name.clone(), desk.desk_name))
                    .collect())
            }
        }
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> PlatformApi {
    use_context::<PlatformApi>().expect("PlatformApi should be provided")
}
