use super::{authorize::authorize_place_access, prelude::*};
use crate::util::validate::MAX_MESSAGE_LEN;

#[derive(Debug, Clone, Default)]
pub struct NewMessage {
    pub recipient_id: String,
    pub place_id: String,
    pub product_id: Option<String>,
    pub reply_to: Option<String>,
    pub text: Option<String>,
    pub image_url: Option<Url>,
    pub audio_url: Option<Url>,
}

pub fn send_message<R>(
    repo: &R,
    sender: &UserProfile,
    new_message: NewMessage,
    now: Timestamp,
) -> Result<Message>
where
    R: UserRepo + PlaceRepo + ProductRepo + MessageRepo,
{
    send_message_as(repo, sender.id.clone(), new_message, now)
}

/// Answer a customer in the name of the place owner.
pub fn send_message_on_behalf_of_place<R>(
    repo: &R,
    employee: &UserProfile,
    new_message: NewMessage,
    now: Timestamp,
) -> Result<Message>
where
    R: UserRepo + PlaceRepo + ProductRepo + MessageRepo + EmployeeRepo,
{
    let place = repo.get_place(&new_message.place_id)?;
    authorize_place_access(repo, employee, &place, Permission::MessagesPosts)?;
    send_message_as(repo, place.owner_id, new_message, now)
}

fn send_message_as<R>(
    repo: &R,
    sender_id: Id,
    new_message: NewMessage,
    now: Timestamp,
) -> Result<Message>
where
    R: UserRepo + PlaceRepo + ProductRepo + MessageRepo,
{
    let NewMessage {
        recipient_id,
        place_id,
        product_id,
        reply_to,
        text,
        image_url,
        audio_url,
    } = new_message;
    let text = text
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty());
    if text
        .as_ref()
        .is_some_and(|t| t.chars().count() > MAX_MESSAGE_LEN)
    {
        return Err(Error::MessageTooLong);
    }
    let payload = MessagePayload {
        text,
        image_url,
        audio_url,
    };
    if payload.is_empty() {
        return Err(Error::EmptyMessage);
    }
    if sender_id.as_str() == recipient_id {
        return Err(Error::MessageToSelf);
    }
    let recipient = repo.get_user(&recipient_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => err.into(),
    })?;
    let place = repo.get_place(&place_id)?;
    if let Some(ref product_id) = product_id {
        let product = repo.get_product(product_id)?;
        if product.place_id != place.id {
            return Err(RepoError::NotFound.into());
        }
    }
    if let Some(ref reply_to) = reply_to {
        let original = match repo.get_message(reply_to) {
            Ok(m) => m,
            Err(RepoError::NotFound) => return Err(Error::InvalidReply),
            Err(err) => return Err(err.into()),
        };
        if original.place_id != place.id {
            return Err(Error::InvalidReply);
        }
    }
    let message = Message {
        id: Id::new(),
        sender_id,
        recipient_id: recipient.id,
        place_id: place.id,
        product_id: product_id.map(Id::from),
        reply_to: reply_to.map(Id::from),
        payload,
        is_read: false,
        created_at: now,
    };
    repo.create_message(&message)?;
    Ok(message)
}
