use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::{id::Id, time::Timestamp};

/// What an employee may do on behalf of the place owner.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Permission {
    Basic         = 0,
    MessagesPosts = 1,
    Full          = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceEmployee {
    pub id: Id,
    pub place_id: Id,
    pub user_id: Id,
    pub permission: Permission,
    pub created_at: Timestamp,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RequestStatus {
    Pending  = 0,
    Accepted = 1,
    Rejected = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRequest {
    pub id: Id,
    pub place_id: Id,
    pub user_id: Id,
    pub note: Option<String>,
    pub status: RequestStatus,
    pub created_at: Timestamp,
    pub decided_at: Option<Timestamp>,
}

impl EmployeeRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
