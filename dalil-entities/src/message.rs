use crate::{id::Id, time::Timestamp, url::Url};

/// The content of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagePayload {
    pub text: Option<String>,
    pub image_url: Option<Url>,
    pub audio_url: Option<Url>,
}

impl MessagePayload {
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.image_url.is_none()
            && self.audio_url.is_none()
    }
}

/// A directed message between two users concerning a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Id,
    pub sender_id: Id,
    pub recipient_id: Id,
    pub place_id: Id,
    pub product_id: Option<Id>,
    pub reply_to: Option<Id>,
    pub payload: MessagePayload,
    pub is_read: bool,
    pub created_at: Timestamp,
}

impl Message {
    pub fn involves(&self, user_id: &Id) -> bool {
        &self.sender_id == user_id || &self.recipient_id == user_id
    }

    /// The other participant from the perspective of `viewer`.
    pub fn counterparty_of(&self, viewer: &Id) -> &Id {
        if &self.sender_id == viewer {
            &self.recipient_id
        } else {
            &self.sender_id
        }
    }

    pub fn is_unread_by(&self, viewer: &Id) -> bool {
        !self.is_read && &self.recipient_id == viewer
    }
}
