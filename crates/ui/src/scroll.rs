use askara_core::ScrollConfig;
use std::time::{Duration, Instant};

/// Decides whether the transcript pane follows new content.
///
/// Two signals drive it: manual scrolling (any user scroll stamps an
/// instant, and the user counts as scrolling until `settle_ms` after the
/// last one) and a one-shot auto-scroll request made after every append.
/// A request only schedules a scroll when the viewport is already within
/// `bottom_threshold` rows of the end; the scheduled scroll fires
/// `delay_ms` later and re-checks the manual-scroll signal at fire time,
/// so it never fights a user who started scrolling during the delay.
///
/// All instants are passed in by the caller, which keeps the state
/// machine deterministic under test.
#[derive(Debug, Clone)]
pub struct ScrollCoordinator {
    config: ScrollConfig,
    /// Rows scrolled down from the top of the content
    offset: usize,
    content_rows: usize,
    viewport_rows: usize,
    last_user_scroll: Option<Instant>,
    pending_autoscroll: Option<Instant>,
}

impl ScrollCoordinator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            offset: 0,
            content_rows: 0,
            viewport_rows: 0,
            last_user_scroll: None,
            pending_autoscroll: None,
        }
    }

    /// Record the rendered content height and pane height; clamps the
    /// offset when content shrank.
    pub fn set_extents(&mut self, content_rows: usize, viewport_rows: usize) {
        self.content_rows = content_rows;
        self.viewport_rows = viewport_rows;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    /// Current scroll offset in rows from the top
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rows between the viewport bottom and the content bottom
    pub fn distance_from_bottom(&self) -> usize {
        self.max_offset() - self.offset
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset == self.max_offset()
    }

    fn is_near_bottom(&self) -> bool {
        self.distance_from_bottom() <= self.config.bottom_threshold
    }

    /// Whether the user counts as actively scrolling at `now`
    pub fn is_user_scrolling(&self, now: Instant) -> bool {
        match self.last_user_scroll {
            Some(last) => now.duration_since(last) < Duration::from_millis(self.config.settle_ms),
            None => false,
        }
    }

    /// A manual scroll up by `rows` (stamps the user-scroll signal)
    pub fn scroll_up(&mut self, rows: usize, now: Instant) {
        self.last_user_scroll = Some(now);
        self.offset = self.offset.saturating_sub(rows);
    }

    /// A manual scroll down by `rows` (stamps the user-scroll signal)
    pub fn scroll_down(&mut self, rows: usize, now: Instant) {
        self.last_user_scroll = Some(now);
        self.offset = (self.offset + rows).min(self.max_offset());
    }

    /// Jump to the oldest content
    pub fn scroll_to_top(&mut self, now: Instant) {
        self.last_user_scroll = Some(now);
        self.offset = 0;
    }

    /// Jump to the newest content
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// One-shot conditional auto-scroll, called after a transcript append.
    ///
    /// No-op when the user is scrolling or the viewport sits further than
    /// the threshold from the bottom (the user is reading history).
    pub fn request_autoscroll(&mut self, now: Instant) {
        if self.is_user_scrolling(now) {
            return;
        }
        if self.is_near_bottom() {
            self.pending_autoscroll = Some(now + Duration::from_millis(self.config.delay_ms));
        }
    }

    /// True when an auto-scroll is scheduled and has not fired yet
    pub fn has_pending_autoscroll(&self) -> bool {
        self.pending_autoscroll.is_some()
    }

    /// Drive the scheduled scroll. Returns true when the offset moved;
    /// a due scroll is abandoned (not rescheduled) if the user scrolled
    /// during the delay.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.pending_autoscroll else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.pending_autoscroll = None;
        if self.is_user_scrolling(now) {
            return false;
        }
        self.scroll_to_bottom();
        true
    }

    /// Forget all scroll state (used on clear/new session)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.content_rows = 0;
        self.last_user_scroll = None;
        self.pending_autoscroll = None;
    }
}
