use super::*;

fn notify_recipient(notify: &dyn NotificationGateway, message: &Message, recipient: &UserProfile) {
    notify.notify(NotificationEvent::MessageReceived { message, recipient });
}

pub fn send_message(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    sender: &UserProfile,
    new_message: usecases::NewMessage,
) -> Result<Message> {
    let (message, recipient) = connections.exclusive()?.transaction(|conn| {
        let message = usecases::send_message(conn, sender, new_message, Timestamp::now())
            .map_err(|err| {
                log::warn!("Failed to send message of user {}: {err}", sender.id);
                err
            })?;
        let recipient = usecases::get_user(conn, message.recipient_id.as_str())?;
        Ok::<_, usecases::Error>((message, recipient))
    })?;
    notify_recipient(notify, &message, &recipient);
    Ok(message)
}

/// Answer a customer in the name of the place.
pub fn send_message_on_behalf_of_place(
    connections: &sqlite::Connections,
    notify: &dyn NotificationGateway,
    employee: &UserProfile,
    new_message: usecases::NewMessage,
) -> Result<Message> {
    let (message, recipient) = connections.exclusive()?.transaction(|conn| {
        let message = usecases::send_message_on_behalf_of_place(
            conn,
            employee,
            new_message,
            Timestamp::now(),
        )?;
        let recipient = usecases::get_user(conn, message.recipient_id.as_str())?;
        Ok::<_, usecases::Error>((message, recipient))
    })?;
    debug!(
        "User {} answered on behalf of place {}",
        employee.id, message.place_id
    );
    notify_recipient(notify, &message, &recipient);
    Ok(message)
}

/// Returns the number of messages that have been marked as read.
pub fn mark_conversation_read(
    connections: &sqlite::Connections,
    viewer: &UserProfile,
    counterparty_id: &str,
    place_id: &str,
) -> Result<usize> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::mark_conversation_read(conn, viewer, counterparty_id, place_id)
    })?)
}
