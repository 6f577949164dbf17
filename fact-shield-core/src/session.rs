use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::model::{Claim, UserProfile, Vote};
use log::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Landing,
    SignIn,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Landing, Route::SignIn, Route::Dashboard];

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::SignIn => "Sign In",
            Route::Dashboard => "Fact Checker",
        }
    }
}

/// Tab-lifetime session: current route, bearer token and signed-in user.
/// Lives in memory only; a reload starts from [`Session::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    route: Route,
    token: String,
    user: Option<UserProfile>,
}

impl Session {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    pub fn sign_in(&mut self, token: String, user: UserProfile) {
        info!("signed in as {}", user.id);
        self.token = token;
        self.user = Some(user);
        self.route = Route::Dashboard;
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = &self.user {
            info!("signed out {}", user.id);
        }
        self.token.clear();
        self.user = None;
        self.route = Route::Landing;
    }

    /// Token and user, only when the token is non-empty. Dashboard content
    /// is fetched and rendered only when this is `Some`.
    pub fn credentials(&self) -> Option<(&str, &UserProfile)> {
        if !self.is_authenticated() {
            return None;
        }
        self.user.as_ref().map(|user| (self.token.as_str(), user))
    }

    /// What the dashboard route may use. `None` off the dashboard route or
    /// without a token, in which case nothing is fetched.
    pub fn dashboard_access(&self) -> Option<DashboardAccess> {
        if self.route != Route::Dashboard {
            return None;
        }
        self.credentials().map(|(token, user)| DashboardAccess {
            token: token.to_string(),
            user: user.clone(),
        })
    }
}

/// Token and user of a signed-in fact-checker on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardAccess {
    pub token: String,
    pub user: UserProfile,
}

impl DashboardAccess {
    pub async fn fetch_queue<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<Vec<Claim>, ApiError> {
        client.escalated_queue(&self.user.id, &self.token).await
    }

    pub async fn cast_vote<T: Transport>(
        &self,
        client: &ApiClient<T>,
        claim_id: &str,
        vote: Vote,
    ) -> Result<(), ApiError> {
        client
            .cast_vote(claim_id, &self.user.id, vote, &self.token)
            .await
    }
}
