// notice.rs - Transient alert that dismisses itself

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Notice {
    message: Option<(String, Instant)>,
    ttl: Duration,
}

impl Notice {
    pub fn new(ttl: Duration) -> Self {
        Self { message: None, ttl }
    }

    /// Show `message` from `now`, replacing whatever was showing.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now));
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// The message if it is still within its time to live.
    pub fn visible(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((text, shown_at)) if now.saturating_duration_since(*shown_at) < self.ttl => Some(text.as_str()),
            _ => None,
        }
    }

    /// Time until the current message expires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let (_, shown_at) = self.message.as_ref()?;
        self.ttl.checked_sub(now.saturating_duration_since(*shown_at)).filter(|d| !d.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let t0 = Instant::now();
        let mut notice = Notice::new(Duration::from_millis(2000));
        assert_eq!(notice.visible(t0), None);

        notice.show("Cell side cannot be less than 10 pixels", t0);
        assert_eq!(notice.visible(t0 + Duration::from_millis(1999)), Some("Cell side cannot be less than 10 pixels"));
        assert_eq!(notice.remaining(t0 + Duration::from_millis(500)), Some(Duration::from_millis(1500)));
        assert_eq!(notice.visible(t0 + Duration::from_millis(2000)), None);
        assert_eq!(notice.remaining(t0 + Duration::from_millis(2500)), None);
    }

    #[test]
    fn new_message_restarts_the_clock() {
        let t0 = Instant::now();
        let mut notice = Notice::new(Duration::from_millis(2000));
        notice.show("first", t0);
        notice.show("second", t0 + Duration::from_millis(1500));
        assert_eq!(notice.visible(t0 + Duration::from_millis(3000)), Some("second"));
    }

    #[test]
    fn dismiss_hides_immediately() {
        let t0 = Instant::now();
        let mut notice = Notice::new(Duration::from_secs(2));
        notice.show("bye", t0);
        notice.dismiss();
        assert_eq!(notice.visible(t0), None);
    }
}
