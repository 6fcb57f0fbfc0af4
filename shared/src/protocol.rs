use crate::{ApplicationUser, Currency, Desk, TradeBlotterRow, UserProfile};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch, // Added Patch just in case
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The concrete path for this request instance.
    ///
    /// Defaults to `PATH`; endpoints addressing a single resource
    /// (e.g. `PUT /api/users/{id}`) override this.
    fn path(&self) -> String {
        Self::PATH.to_string()
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// List all application users
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest;

impl ApiRequest for ListUsersRequest {
    type Response = Vec<ApplicationUser>;
    const PATH: &'static str = "/api/users";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Create a new application user (the user record is the request body)
impl ApiRequest for ApplicationUser {
    type Response = ApplicationUser;
    const PATH: &'static str = "/api/users";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Update an existing application user
///
/// Newtype so the body stays the plain user DTO while the path
/// carries the resource id.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest(pub ApplicationUser);

impl ApiRequest for UpdateUserRequest {
    type Response = ApplicationUser;
    const PATH: &'static str = "/api/users";
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        match self.0.id {
            Some(id) => format!("{}/{}", Self::PATH, id),
            None => Self::PATH.to_string(),
        }
    }
}

/// List user profiles (reference data for the user editor dropdown)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListUserProfilesRequest;

impl ApiRequest for ListUserProfilesRequest {
    type Response = Vec<UserProfile>;
    const PATH: &'static str = "/api/userProfiles";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List currencies (reference data)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCurrenciesRequest;

impl ApiRequest for ListCurrenciesRequest {
    type Response = Vec<Currency>;
    const PATH: &'static str = "/api/currencies";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List trading desks (reference data)
#[derive(Debug, Serialize, Deserialize)]
pub struct ListDesksRequest;

impl ApiRequest for ListDesksRequest {
    type Response = Vec<Desk>;
    const PATH: &'static str = "/api/desks";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Fetch the trade blotter
#[derive(Debug, Serialize, Deserialize)]
pub struct ListTradesRequest;

impl ApiRequest for ListTradesRequest {
    type Response = Vec<TradeBlotterRow>;
    const PATH: &'static str = "/api/trades";
    const METHOD: HttpMethod = HttpMethod::Get;
}
