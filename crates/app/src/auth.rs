use dioxus::prelude::*;
use shared_types::PortalUser;

/// Global session state. This is the auth provider the portal shell is
/// handed; the shell itself never reads it from context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<PortalUser>>,
    /// Set by an explicit logout so the session user is not restored
    /// until the user asks for it.
    pub signed_out: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            signed_out: Signal::new(false),
        }
    }

    pub fn is_signed_out(&self) -> bool {
        *self.signed_out.read()
    }

    /// Take the server's session user unless signed out or already holding one.
    /// Returns whether the user was taken.
    ///
    /// Reads with `peek` so an effect calling this only tracks the session
    /// resource, not the state it writes.
    pub fn adopt_session(&mut self, user: &PortalUser) -> bool {
        if *self.signed_out.peek() || self.current_user.peek().is_some() {
            return false;
        }
        self.current_user.set(Some(user.clone()));
        true
    }

    /// Drop the current user and stay signed out.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.peek().as_ref() {
            tracing::info!(user = %user.name, "logout requested");
        }
        self.current_user.set(None);
        self.signed_out.set(true);
    }

    /// Allow the session user to be restored again.
    pub fn resume(&mut self) {
        self.signed_out.set(false);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_dom(f: impl FnOnce(AuthState)) {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();
        dom.in_scope(ScopeId::ROOT, || f(AuthState::new()));
    }

    #[test]
    fn adopts_the_first_session_user_only() {
        in_dom(|mut auth| {
            assert!(auth.adopt_session(&PortalUser::new("María González", "usuario")));
            assert!(!auth.adopt_session(&PortalUser::new("Otra Persona", "usuario")));
            assert_eq!(auth.current_user.peek().as_ref().unwrap().name, "María González");
        });
    }

    #[test]
    fn logout_clears_user_and_blocks_adoption_until_resume() {
        in_dom(|mut auth| {
            let user = PortalUser::new("María González", "usuario");
            auth.adopt_session(&user);

            auth.logout();
            assert!(auth.is_signed_out());
            assert!(auth.current_user.peek().is_none());
            assert!(!auth.adopt_session(&user));

            auth.resume();
            assert!(!auth.is_signed_out());
            assert!(auth.adopt_session(&user));
        });
    }
}
