//! View Selection
//!
//! Which page is shown, guarded by the session.

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    Profile,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Home | Route::Profile)
    }
}

/// Page actually rendered for `requested`
pub fn guard(requested: Route, authenticated: bool) -> Route {
    match (requested, authenticated) {
        (r, false) if r.requires_auth() => Route::Login,
        (Route::Login | Route::Register, true) => Route::Home,
        (r, _) => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(guard(Route::Home, false), Route::Login);
        assert_eq!(guard(Route::Profile, false), Route::Login);
        assert_eq!(guard(Route::Register, false), Route::Register);
        assert_eq!(guard(Route::Login, false), Route::Login);
    }

    #[test]
    fn test_authenticated_leaves_auth_pages() {
        assert_eq!(guard(Route::Login, true), Route::Home);
        assert_eq!(guard(Route::Register, true), Route::Home);
        assert_eq!(guard(Route::Profile, true), Route::Profile);
        assert_eq!(guard(Route::Home, true), Route::Home);
    }
}
