//! Header-based authentication.
//!
//! Identity arrives via `x-user-id` and `x-user-role` headers, set by the
//! gateway in front of this service. The extractor rejects requests that
//! are missing either header; role checks happen per handler.

use super::ApiError;
use crate::model::UserId;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::str::FromStr;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Publisher,
    Admin,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "publisher" => Ok(Role::Publisher),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// The authenticated caller, extracted from request headers.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: UserId,
    pub role: Role,
}

impl CurrentUser {
    /// Write operations are restricted to publishers and admins.
    pub fn require_publisher(&self) -> Result<(), ApiError> {
        match self.role {
            Role::Publisher | Role::Admin => Ok(()),
            Role::User => Err(ApiError::Forbidden("user".to_string())),
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header_value(parts, USER_ID_HEADER)?
            .parse::<u32>()
            .map_err(|_| ApiError::Unauthorized)?;
        let role = header_value(parts, USER_ROLE_HEADER)?
            .parse::<Role>()
            .map_err(|_| ApiError::Unauthorized)?;

        Ok(CurrentUser {
            id: UserId(id),
            role,
        })
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, ApiError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_headers() {
        assert_eq!("publisher".parse::<Role>().unwrap(), Role::Publisher);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn plain_users_cannot_write() {
        let user = CurrentUser {
            id: UserId(1),
            role: Role::User,
        };
        assert!(matches!(
            user.require_publisher(),
            Err(ApiError::Forbidden(_))
        ));

        let publisher = CurrentUser {
            id: UserId(2),
            role: Role::Publisher,
        };
        assert!(publisher.require_publisher().is_ok());
    }
}
