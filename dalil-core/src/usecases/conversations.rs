use std::collections::HashMap;

use super::{authorize::authorize_place_access, prelude::*};

/// All messages between the viewer and one counterparty about one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub counterparty_id: Id,
    pub place_id: Id,
    pub last_message: Message,
    pub unread_count: usize,
}

/// Group the messages of the viewer into conversations.
///
/// Messages that don't involve the viewer are ignored. Within a
/// conversation the latest message wins; on equal timestamps the
/// message that comes later in the input. Conversations are ordered
/// by their latest message, newest first.
pub fn aggregate_conversations<I>(viewer: &Id, messages: I) -> Vec<Conversation>
where
    I: IntoIterator<Item = Message>,
{
    let mut conversations: Vec<Conversation> = vec![];
    let mut index: HashMap<(Id, Id), usize> = HashMap::new();
    for message in messages {
        if !message.involves(viewer) {
            continue;
        }
        let unread = usize::from(message.is_unread_by(viewer));
        let key = (
            message.counterparty_of(viewer).clone(),
            message.place_id.clone(),
        );
        match index.get(&key) {
            Some(&i) => {
                let conversation = &mut conversations[i];
                conversation.unread_count += unread;
                if message.created_at >= conversation.last_message.created_at {
                    conversation.last_message = message;
                }
            }
            None => {
                index.insert(key.clone(), conversations.len());
                let (counterparty_id, place_id) = key;
                conversations.push(Conversation {
                    counterparty_id,
                    place_id,
                    last_message: message,
                    unread_count: unread,
                });
            }
        }
    }
    conversations.sort_by(|a, b| {
        b.last_message
            .created_at
            .cmp(&a.last_message.created_at)
    });
    conversations
}

pub fn conversations_of_user<R>(repo: &R, viewer: &UserProfile) -> Result<Vec<Conversation>>
where
    R: MessageRepo,
{
    let messages = repo.messages_of_user(viewer.id.as_str())?;
    Ok(aggregate_conversations(&viewer.id, messages))
}

/// The conversations of a place as seen by its owner.
pub fn place_conversations<R>(
    repo: &R,
    user: &UserProfile,
    place_id: &str,
) -> Result<Vec<Conversation>>
where
    R: PlaceRepo + MessageRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    authorize_place_access(repo, user, &place, Permission::MessagesPosts)?;
    let messages = repo.messages_of_place(place_id)?;
    Ok(aggregate_conversations(&place.owner_id, messages))
}

/// The participant that speaks for the viewer in conversations of the place.
fn speaker_of<R>(repo: &R, viewer: &UserProfile, place: &Place) -> Result<Id>
where
    R: EmployeeRepo + ?Sized,
{
    if place.is_owned_by(&viewer.id) {
        return Ok(viewer.id.clone());
    }
    match repo.try_get_employee(place.id.as_str(), viewer.id.as_str())? {
        Some(e) if e.permission >= Permission::MessagesPosts => Ok(place.owner_id.clone()),
        _ => Ok(viewer.id.clone()),
    }
}

/// All messages of a conversation in chronological order.
pub fn conversation_messages<R>(
    repo: &R,
    viewer: &UserProfile,
    counterparty_id: &str,
    place_id: &str,
) -> Result<Vec<Message>>
where
    R: PlaceRepo + MessageRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    let speaker = speaker_of(repo, viewer, &place)?;
    let mut messages: Vec<_> = repo
        .messages_of_place(place_id)?
        .into_iter()
        .filter(|m| m.involves(&speaker) && m.counterparty_of(&speaker).as_str() == counterparty_id)
        .collect();
    messages.sort_by_key(|m| m.created_at);
    Ok(messages)
}

/// Mark all incoming messages of a conversation as read.
///
/// Returns the number of messages that have been updated.
pub fn mark_conversation_read<R>(
    repo: &R,
    viewer: &UserProfile,
    counterparty_id: &str,
    place_id: &str,
) -> Result<usize>
where
    R: PlaceRepo + MessageRepo + EmployeeRepo,
{
    let place = repo.get_place(place_id)?;
    let speaker = speaker_of(repo, viewer, &place)?;
    Ok(repo.mark_messages_read(speaker.as_str(), counterparty_id, place_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use dalil_entities::builders::*;

    fn msg(id: &str, from: &str, to: &str, place: &str, secs: i64) -> Message {
        Message::build()
            .id(id)
            .from(from)
            .to(to)
            .place(place)
            .text(id)
            .created_at(secs)
            .finish()
    }

    #[test]
    fn group_by_counterparty_and_place() {
        let me = Id::from("me");
        let messages = vec![
            msg("1", "a", "me", "p1", 10),
            msg("2", "me", "a", "p1", 20),
            msg("3", "a", "me", "p2", 15),
            msg("4", "b", "me", "p1", 5),
            msg("5", "x", "y", "p1", 100),
        ];
        let conversations = aggregate_conversations(&me, messages);
        assert_eq!(3, conversations.len());
        let ids: Vec<_> = conversations
            .iter()
            .map(|c| c.last_message.id.as_str())
            .collect();
        assert_eq!(vec!["2", "3", "4"], ids);
        assert_eq!("a", conversations[0].counterparty_id.as_str());
        assert_eq!("p1", conversations[0].place_id.as_str());
        assert_eq!(1, conversations[0].unread_count);
        assert_eq!(1, conversations[1].unread_count);
        assert_eq!(1, conversations[2].unread_count);
    }

    #[test]
    fn last_message_is_the_latest_regardless_of_order() {
        let me = Id::from("me");
        let messages = vec![
            msg("late", "a", "me", "p", 30),
            msg("early", "me", "a", "p", 10),
            msg("middle", "a", "me", "p", 20),
        ];
        let c = aggregate_conversations(&me, messages);
        assert_eq!(1, c.len());
        assert_eq!("late", c[0].last_message.id.as_str());
        assert_eq!(2, c[0].unread_count);
    }

    #[test]
    fn ties_are_broken_by_input_order() {
        let me = Id::from("me");
        let messages = vec![msg("first", "a", "me", "p", 10), msg("second", "me", "a", "p", 10)];
        let c = aggregate_conversations(&me, messages);
        assert_eq!("second", c[0].last_message.id.as_str());
    }

    #[test]
    fn only_unread_incoming_messages_are_counted() {
        let me = Id::from("me");
        let mut read = msg("1", "a", "me", "p", 1);
        read.is_read = true;
        let outgoing_unread = msg("2", "me", "a", "p", 2);
        let incoming_unread = msg("3", "a", "me", "p", 3);
        let c = aggregate_conversations(&me, vec![read, outgoing_unread, incoming_unread]);
        assert_eq!(1, c[0].unread_count);
    }

    #[test]
    fn mark_conversation_as_read() {
        let db = MockDb::default();
        let owner = UserProfile::build().id("o").finish();
        let customer = UserProfile::build().id("c").finish();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").owner("o").finish());
        db.messages.borrow_mut().extend([
            msg("1", "c", "o", "p", 1),
            msg("2", "c", "o", "p", 2),
            msg("3", "o", "c", "p", 3),
        ]);
        assert_eq!(2, conversations_of_user(&db, &owner).unwrap()[0].unread_count);
        assert_eq!(1, conversations_of_user(&db, &customer).unwrap()[0].unread_count);
        assert_eq!(2, mark_conversation_read(&db, &owner, "c", "p").unwrap());
        assert_eq!(0, conversations_of_user(&db, &owner).unwrap()[0].unread_count);
        assert_eq!(0, mark_conversation_read(&db, &owner, "c", "p").unwrap());

        let messages = conversation_messages(&db, &customer, "o", "p").unwrap();
        let ids: Vec<_> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(vec!["1", "2", "3"], ids);
    }

    #[test]
    fn employees_see_place_conversations() {
        let db = MockDb::default();
        let employee = UserProfile::build().id("e").finish();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").owner("o").finish());
        db.messages.borrow_mut().extend([
            msg("1", "c", "o", "p", 1),
            msg("2", "d", "o", "p", 2),
        ]);
        assert!(matches!(
            place_conversations(&db, &employee, "p"),
            Err(Error::Forbidden)
        ));
        db.employees.borrow_mut().push(PlaceEmployee {
            id: Id::new(),
            place_id: "p".into(),
            user_id: "e".into(),
            permission: Permission::MessagesPosts,
            created_at: Timestamp::now(),
        });
        let conversations = place_conversations(&db, &employee, "p").unwrap();
        assert_eq!(2, conversations.len());
        assert_eq!("d", conversations[0].counterparty_id.as_str());
        assert_eq!(1, mark_conversation_read(&db, &employee, "c", "p").unwrap());
    }
}
