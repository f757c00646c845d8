//! Process-wide user role context.
//!
//! The app switches between a landlord view and a tenant view. The active
//! role used to live in global UI state; here a single root-owned
//! [`Session`] holds it and views read it through [`Session::role`]. Search
//! text and other screen state stay local to the screens.

/// The two roles the app can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Landlord,
    Tenant,
}

impl UserRole {
    pub fn toggled(self) -> UserRole {
        match self {
            UserRole::Landlord => UserRole::Tenant,
            UserRole::Tenant => UserRole::Landlord,
        }
    }
}

/// Owns the current role. Constructed once at the root of the app; views
/// receive a shared reference and cannot change the role themselves.
#[derive(Debug, Default)]
pub struct Session {
    role: UserRole,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Switches between the landlord and tenant views.
    pub fn toggle_role(&mut self) {
        self.role = self.role.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_as_landlord() {
        assert_eq!(Session::new().role(), UserRole::Landlord);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut session = Session::new();
        session.toggle_role();
        assert_eq!(session.role(), UserRole::Tenant);
        session.toggle_role();
        assert_eq!(session.role(), UserRole::Landlord);
    }
}
