use time::PrimitiveDateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct MessageRecord {
    pub(crate) id: i32,
    pub(crate) content: String,
    pub(crate) created_at: Option<PrimitiveDateTime>,
}

impl From<MessageRecord> for crate::domain::message::Message {
    fn from(record: MessageRecord) -> Self {
        Self { id: record.id, content: record.content, created_at: record.created_at }
    }
}
