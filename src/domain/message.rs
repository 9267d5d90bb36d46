use time::PrimitiveDateTime;

/// A stored message. Rows are only ever inserted; ids come from the table's sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    /// Set by the database on insert. The column has a default but allows `NULL`.
    pub created_at: Option<PrimitiveDateTime>,
}

impl Message {
    /// Renders `created_at` as `YYYY-MM-DD HH:MM:SS[.ffffff]`, or `None` for a row without one.
    ///
    /// Microseconds are only printed when non-zero, which is the format clients of
    /// `/messages` have always received.
    #[must_use]
    pub fn time_string(&self) -> String {
        let Some(ts) = self.created_at else {
            return "None".to_string();
        };
        let mut out = format!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            ts.year(),
            u8::from(ts.month()),
            ts.day(),
            ts.hour(),
            ts.minute(),
            ts.second()
        );
        let micros = ts.microsecond();
        if micros != 0 {
            out.push_str(&format!(".{micros:06}"));
        }
        out
    }
}
