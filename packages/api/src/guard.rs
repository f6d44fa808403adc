//! Route guard policy.
//!
//! Guards are re-evaluated on every render of a guarded layout, so a session
//! that disappears (logout, or a 401 anywhere) moves the user off protected
//! screens without each screen checking for itself.

use store::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    /// Any signed-in user.
    Authenticated,
    /// Signed in with the admin role.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not rehydrated yet; render nothing.
    Pending,
    Allow,
    RedirectToLogin,
    RedirectToLanding,
}

pub fn evaluate(policy: GuardPolicy, loading: bool, session: Option<&Session>) -> GuardOutcome {
    if loading {
        return GuardOutcome::Pending;
    }
    let Some(session) = session else {
        return GuardOutcome::RedirectToLogin;
    };
    match policy {
        GuardPolicy::Authenticated => GuardOutcome::Allow,
        GuardPolicy::Admin if session.user.is_admin() => GuardOutcome::Allow,
        GuardPolicy::Admin => GuardOutcome::RedirectToLanding,
    }
}
