use std::time::Duration;

use dalil_application::prelude::expire_subscriptions;
use dalil_core::entities::Timestamp;
use dalil_db_sqlite::Connections;

/// Periodically deactivate subscriptions that have run out.
pub async fn run(connections: Connections, check_interval: Duration) {
    let mut interval = tokio::time::interval(check_interval);
    loop {
        interval.tick().await;
        let connections = connections.clone();
        let expired = tokio::task::spawn_blocking(move || {
            expire_subscriptions(&connections, Timestamp::now())
        })
        .await;
        match expired {
            Ok(Ok(0)) => {}
            Ok(Ok(count)) => log::info!("Deactivated {count} expired subscription(s)"),
            Ok(Err(err)) => log::warn!("Expired subscriptions could not be deactivated: {err}"),
            Err(err) => log::error!("Subscription expiry task failed: {err}"),
        }
    }
}
