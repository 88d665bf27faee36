// ABOUTME: User account and role models returned by the CTLST auth endpoints
// ABOUTME: Role determines which dashboard the application shell lands on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CTLST Labs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Platform role attached to every account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Individual athlete taking assessments
    #[default]
    Athlete,
    /// Administrator of a single organization (team, club, school)
    OrgAdmin,
    /// Platform-wide administrator
    SuperAdmin,
}

/// Dashboard a user lands on after login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    /// Personal results, tips, and journal
    Athlete,
    /// Organization roster, invites, and aggregate results
    Organization,
    /// Platform administration across organizations
    Admin,
}

impl UserRole {
    /// Dashboard for this role
    #[must_use]
    pub const fn dashboard(self) -> Dashboard {
        match self {
            Self::Athlete => Dashboard::Athlete,
            Self::OrgAdmin => Dashboard::Organization,
            Self::SuperAdmin => Dashboard::Admin,
        }
    }

    /// Whether this role can manage members of `organization_id`
    ///
    /// Super admins manage every organization; org admins only their own.
    #[must_use]
    pub fn can_manage_organization(self, own: Option<Uuid>, organization_id: Uuid) -> bool {
        match self {
            Self::SuperAdmin => true,
            Self::OrgAdmin => own == Some(organization_id),
            Self::Athlete => false,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Athlete => f.write_str("athlete"),
            Self::OrgAdmin => f.write_str("org_admin"),
            Self::SuperAdmin => f.write_str("super_admin"),
        }
    }
}

/// Authenticated platform user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Platform role
    #[serde(default)]
    pub role: UserRole,
    /// Organization the user belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<Uuid>,
}

impl User {
    /// Name to greet the user with, falling back to the email local part
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.split('@').next().unwrap_or(&self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, organization_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "jordan@example.com".to_owned(),
            name: None,
            role,
            organization_id,
        }
    }

    #[test]
    fn test_role_dashboards() {
        assert_eq!(UserRole::Athlete.dashboard(), Dashboard::Athlete);
        assert_eq!(UserRole::OrgAdmin.dashboard(), Dashboard::Organization);
        assert_eq!(UserRole::SuperAdmin.dashboard(), Dashboard::Admin);
    }

    #[test]
    fn test_org_admin_scoped_to_own_organization() {
        let org = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert!(UserRole::OrgAdmin.can_manage_organization(Some(org), org));
        assert!(!UserRole::OrgAdmin.can_manage_organization(Some(org), other));
        assert!(UserRole::SuperAdmin.can_manage_organization(None, other));
        assert!(!UserRole::Athlete.can_manage_organization(Some(org), org));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut athlete = user(UserRole::Athlete, None);
        assert_eq!(athlete.display_name(), "jordan");
        athlete.name = Some("Jordan Lee".to_owned());
        assert_eq!(athlete.display_name(), "Jordan Lee");
    }

    #[test]
    fn test_role_defaults_to_athlete_when_missing() {
        let json = format!(r#"{{"id":"{}","email":"a@b.co"}}"#, Uuid::new_v4());
        let parsed: Result<User, _> = serde_json::from_str(&json);
        assert_eq!(parsed.map(|u| u.role).ok(), Some(UserRole::Athlete));
    }
}
