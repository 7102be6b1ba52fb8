use crate::http::request::{Method, Request};

/// Which handler serves a request.
///
/// Resolution is fixed and total, checked in order:
/// 1. `GET /` → [`Route::Home`]
/// 2. any other `GET` → [`Route::StaticAsset`]
/// 3. everything else → [`Route::Fallback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    StaticAsset,
    Fallback,
}

impl Route {
    pub fn resolve(request: &Request) -> Self {
        match (&request.method, request.path.as_str()) {
            (Method::GET, "/") => Route::Home,
            (Method::GET, _) => Route::StaticAsset,
            _ => Route::Fallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::StaticAsset => "static",
            Route::Fallback => "fallback",
        }
    }
}
