use super::*;

impl From<models::MessageEntity> for Message {
    fn from(m: models::MessageEntity) -> Self {
        let models::MessageEntity {
            id,
            sender_id,
            recipient_id,
            place_id,
            product_id,
            reply_to,
            text,
            image_url,
            audio_url,
            is_read,
            created_at,
        } = m;
        Self {
            id: id.into(),
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
            place_id: place_id.into(),
            product_id: product_id.map(Into::into),
            reply_to: reply_to.map(Into::into),
            payload: MessagePayload {
                text,
                image_url: image_url.and_then(load_url),
                audio_url: audio_url.and_then(load_url),
            },
            is_read,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl_repo!(
    MessageRepo,
    fn create_message(&self, message: &Message) -> Result<()> {
        create_message(&mut self.conn.borrow_mut(), message)
    }
    fn get_message(&self, id: &str) -> Result<Message> {
        get_message(&mut self.conn.borrow_mut(), id)
    }
    fn messages_of_user(&self, user_id: &str) -> Result<Vec<Message>> {
        messages_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn messages_of_place(&self, place_id: &str) -> Result<Vec<Message>> {
        messages_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn mark_messages_read(
        &self,
        recipient_id: &str,
        sender_id: &str,
        place_id: &str,
    ) -> Result<usize> {
        mark_messages_read(&mut self.conn.borrow_mut(), recipient_id, sender_id, place_id)
    }
);

fn create_message(conn: &mut SqliteConnection, message: &Message) -> Result<()> {
    let Message {
        id,
        sender_id,
        recipient_id,
        place_id,
        product_id,
        reply_to,
        payload,
        is_read,
        created_at,
    } = message;
    let new_message = models::NewMessage {
        id: id.as_str(),
        sender_id: sender_id.as_str(),
        recipient_id: recipient_id.as_str(),
        place_id: place_id.as_str(),
        product_id: product_id.as_ref().map(Id::as_str),
        reply_to: reply_to.as_ref().map(Id::as_str),
        text: payload.text.as_deref(),
        image_url: payload.image_url.as_ref().map(Url::as_str),
        audio_url: payload.audio_url.as_ref().map(Url::as_str),
        is_read: *is_read,
        created_at: created_at.as_millis(),
    };
    diesel::insert_into(schema::messages::table)
        .values(&new_message)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_message(conn: &mut SqliteConnection, id: &str) -> Result<Message> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .filter(dsl::id.eq(id))
        .first::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn messages_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .filter(dsl::sender_id.eq(user_id).or(dsl::recipient_id.eq(user_id)))
        .order_by(dsl::created_at)
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn messages_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<Vec<Message>> {
    use schema::messages::dsl;
    Ok(dsl::messages
        .filter(dsl::place_id.eq(place_id))
        .order_by(dsl::created_at)
        .load::<models::MessageEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn mark_messages_read(
    conn: &mut SqliteConnection,
    recipient_id: &str,
    sender_id: &str,
    place_id: &str,
) -> Result<usize> {
    use schema::messages::dsl;
    diesel::update(
        dsl::messages
            .filter(dsl::recipient_id.eq(recipient_id))
            .filter(dsl::sender_id.eq(sender_id))
            .filter(dsl::place_id.eq(place_id))
            .filter(dsl::is_read.eq(false)),
    )
    .set(dsl::is_read.eq(true))
    .execute(conn)
    .map_err(from_diesel_err)
}
