//! Terminal rendering for feed messages

use chrono::{DateTime, Local, TimeZone};

use super::types::Message;

/// `HH:MM:SS author: body`, in local time
pub fn format_message(message: &Message) -> String {
    format_in(message, &Local)
}

fn format_in<Tz: TimeZone>(message: &Message, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let at: DateTime<Tz> = message.at.with_timezone(tz);
    format!("{} {}: {}", at.format("%H:%M:%S"), message.author, message.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_message_utc() {
        let mut message = Message::new("quiet-otter", "tests pass on main");
        message.at = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        assert_eq!(
            format_in(&message, &Utc),
            "09:26:53 quiet-otter: tests pass on main"
        );
    }
}
