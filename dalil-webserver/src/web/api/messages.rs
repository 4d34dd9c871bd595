use super::*;

#[post("/messages", format = "application/json", data = "<message>")]
pub fn post_message(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    message: JsonResult<json::NewMessage>,
) -> Result<json::Message> {
    let message = from_json::try_new_message(message?.into_inner())?;
    let sender = account.user(&db.shared()?)?;
    let message = flows::send_message(&db, &*notify.0, &sender, message)?;
    Ok(Json(message.into()))
}

/// Answer in the name of the place, e.g. as an employee.
#[post("/messages/as-place", format = "application/json", data = "<message>")]
pub fn post_message_as_place(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    message: JsonResult<json::NewMessage>,
) -> Result<json::Message> {
    let message = from_json::try_new_message(message?.into_inner())?;
    let employee = account.user(&db.shared()?)?;
    let message = flows::send_message_on_behalf_of_place(&db, &*notify.0, &employee, message)?;
    Ok(Json(message.into()))
}

#[get("/conversations")]
pub fn get_conversations(
    db: sqlite::Connections,
    account: Account,
) -> Result<Vec<json::Conversation>> {
    let db = db.shared()?;
    let viewer = account.user(&db)?;
    let conversations = usecases::conversations_of_user(&db, &viewer)?;
    Ok(Json(
        conversations
            .into_iter()
            .map(to_json::conversation)
            .collect(),
    ))
}

#[get("/places/<place_id>/conversations")]
pub fn get_place_conversations(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
) -> Result<Vec<json::Conversation>> {
    let db = db.shared()?;
    let user = account.user(&db)?;
    let conversations = usecases::place_conversations(&db, &user, place_id)?;
    Ok(Json(
        conversations
            .into_iter()
            .map(to_json::conversation)
            .collect(),
    ))
}

#[get("/conversations/<place_id>/<counterparty_id>")]
pub fn get_conversation_messages(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
    counterparty_id: &str,
) -> Result<Vec<json::Message>> {
    let db = db.shared()?;
    let viewer = account.user(&db)?;
    let messages = usecases::conversation_messages(&db, &viewer, counterparty_id, place_id)?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

#[post("/conversations/<place_id>/<counterparty_id>/read")]
pub fn post_conversation_read(
    db: sqlite::Connections,
    account: Account,
    place_id: &str,
    counterparty_id: &str,
) -> Result<json::ReadReceipt> {
    let viewer = account.user(&db.shared()?)?;
    let marked_as_read = flows::mark_conversation_read(&db, &viewer, counterparty_id, place_id)?;
    Ok(Json(json::ReadReceipt { marked_as_read }))
}
