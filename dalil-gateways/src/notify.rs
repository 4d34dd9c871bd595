use dalil_core::gateways::notify::{NotificationEvent, NotificationGateway};

/// Writes all notifications into the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationGateway for LogNotifier {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        match event {
            E::MessageReceived { message, recipient } => {
                log::info!(
                    "New message {} for {} concerning place {}",
                    message.id,
                    recipient.name_or_email(),
                    message.place_id
                );
            }
            E::EmploymentRequested { request, place } => {
                log::info!(
                    "User {} requested to work for '{}' ({})",
                    request.user_id,
                    place.name,
                    place.id
                );
            }
            E::EmploymentDecided { request, place } => {
                log::info!(
                    "Employment request {} for '{}' is {}",
                    request.id,
                    place.name,
                    request.status
                );
            }
            E::UserSubscribed { user, subscription } => {
                log::info!(
                    "{} subscribed to package {} until {}",
                    user.name_or_email(),
                    subscription.package_id,
                    subscription.expires_at
                );
            }
        }
    }
}
