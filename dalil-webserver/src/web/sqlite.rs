use std::ops::Deref;

use anyhow::Result as Fallible;
use dalil_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

/// The managed connection pool as a request guard.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl Connections {
    /// Concurrent read access
    pub fn shared(&self) -> Fallible<DbReadOnly> {
        self.0.shared()
    }

    /// Single writer
    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        self.0.exclusive()
    }
}

impl From<ConnectionPool> for Connections {
    fn from(pool: ConnectionPool) -> Self {
        Self(pool)
    }
}

impl Deref for Connections {
    type Target = ConnectionPool;
    fn deref(&self) -> &ConnectionPool {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, ()> {
        let pool = try_outcome!(request.guard::<&State<Self>>().await);
        Outcome::Success(Self::clone(pool))
    }
}
