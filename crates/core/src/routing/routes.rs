//! Route keys understood by each handler.
//!
//! Route keys are matched exactly, the way the routing layer emits them.

pub const MECHANIC_ID_PARAM: &str = "id";
pub const USER_ID_PARAM: &str = "UserId";

/// Operations of the mechanics handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicRoute {
    Create,
    Delete,
    List,
    Get,
}

impl MechanicRoute {
    pub const ALL: [Self; 4] = [Self::Create, Self::Delete, Self::List, Self::Get];

    pub fn from_route_key(route_key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.route_key() == route_key)
    }

    pub fn route_key(self) -> &'static str {
        match self {
            Self::Create => "POST /mechanics",
            Self::Delete => "DELETE /mechanics/{id}",
            Self::List => "GET /mechanics",
            Self::Get => "GET /mechanics/{id}",
        }
    }
}

/// Operations of the users handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRoute {
    Create,
    Delete,
    List,
    Get,
}

impl UserRoute {
    pub const ALL: [Self; 4] = [Self::Create, Self::Delete, Self::List, Self::Get];

    pub fn from_route_key(route_key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.route_key() == route_key)
    }

    pub fn route_key(self) -> &'static str {
        match self {
            Self::Create => "POST /users",
            Self::Delete => "DELETE /users/{UserId}",
            Self::List => "GET /users",
            Self::Get => "GET /users/{UserId}",
        }
    }
}
