//! Routes
//!
//! Hash-based routing: `#/visits/42/edit` and friends.

/// Every page the app can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Visits,
    VisitNew,
    VisitDetail(String),
    VisitEdit(String),
    CarePlans,
    CarePlanNew,
    Resources,
    ResourceNew,
    NotFound,
}

impl Route {
    /// Parse a location hash (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();

        match parts.as_slice() {
            [] => Route::Visits,
            ["login"] => Route::Login,
            ["visits"] => Route::Visits,
            ["visits", "new"] => Route::VisitNew,
            ["visits", id] => Route::VisitDetail(id.to_string()),
            ["visits", id, "edit"] => Route::VisitEdit(id.to_string()),
            ["care-plans"] => Route::CarePlans,
            ["care-plans", "new"] => Route::CarePlanNew,
            ["resources"] => Route::Resources,
            ["resources", "new"] => Route::ResourceNew,
            _ => Route::NotFound,
        }
    }

    /// Hash for this route, including the leading `#`
    pub fn to_hash(&self) -> String {
        match self {
            Route::Login => "#/login".to_string(),
            Route::Visits => "#/visits".to_string(),
            Route::VisitNew => "#/visits/new".to_string(),
            Route::VisitDetail(id) => format!("#/visits/{}", id),
            Route::VisitEdit(id) => format!("#/visits/{}/edit", id),
            Route::CarePlans => "#/care-plans".to_string(),
            Route::CarePlanNew => "#/care-plans/new".to_string(),
            Route::Resources => "#/resources".to_string(),
            Route::ResourceNew => "#/resources/new".to_string(),
            Route::NotFound => "#/not-found".to_string(),
        }
    }

    /// Pages that need a stored token
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }

    /// Nav section the route belongs to
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Route::Visits | Route::VisitNew | Route::VisitDetail(_) | Route::VisitEdit(_) => Some("visits"),
            Route::CarePlans | Route::CarePlanNew => Some("care-plans"),
            Route::Resources | Route::ResourceNew => Some("resources"),
            Route::Login | Route::NotFound => None,
        }
    }
}
