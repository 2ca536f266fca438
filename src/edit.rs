//! Timeline editing: drag a duty interval along a day's timeline.
//!
//! The editor only knows fractions of the day, never pixels. It snaps to
//! half hours and hands finished intervals to the engine on release.

use crate::model::DutyInterval;

/// Snap step for dragged positions.
pub const SNAP_MINUTES: u32 = 30;

/// Which part of an interval is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grip {
    /// The whole block. Duration is kept.
    Move,

    /// The leading edge. The end stays put.
    ResizeStart,

    /// The trailing edge. The start stays put.
    ResizeEnd,
}

impl Grip {
    /// Picks a grip from where a block was grabbed: within `edge` of either
    /// side resizes, anywhere else moves. Units are the caller's.
    pub fn at(position: f64, width: f64, edge: f64) -> Self {
        if position < edge {
            Self::ResizeStart
        } else if position > width - edge {
            Self::ResizeEnd
        } else {
            Self::Move
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Dragging { grip: Grip, original: DutyInterval },
}

/// `Idle → Dragging → Idle` over one day of `day_length` minutes.
#[derive(Debug, Clone)]
pub struct TimelineEditor {
    day_length: u32,
    state: EditorState,
}

impl TimelineEditor {
    pub fn new(day_length: u32) -> Self {
        Self {
            day_length,
            state: EditorState::Idle,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Starts dragging `interval`. A drag already in progress is abandoned.
    pub fn grab(&mut self, grip: Grip, interval: DutyInterval) {
        self.state = EditorState::Dragging {
            grip,
            original: interval,
        };
    }

    /// Where the dragged interval would land with the pointer at `fraction`
    /// of the day. `None` while idle.
    pub fn preview(&self, fraction: f64) -> Option<DutyInterval> {
        let EditorState::Dragging { grip, original } = self.state else {
            return None;
        };
        let pointer = self.snap(fraction);

        let (start, end) = match grip {
            Grip::ResizeStart => (
                pointer.min(original.end.saturating_sub(SNAP_MINUTES)),
                original.end,
            ),
            Grip::ResizeEnd => (
                original.start,
                pointer
                    .max(original.start + SNAP_MINUTES)
                    .min(self.day_length),
            ),
            Grip::Move => {
                let duration = original.clock_minutes();
                let latest = self.day_length.saturating_sub(duration);
                let centred = pointer.saturating_sub(duration / 2);
                let start = round_to_snap(centred).min(latest);
                (start, start + duration)
            }
        };

        Some(DutyInterval {
            start,
            end,
            ..original
        })
    }

    /// Ends the drag at `fraction`, returning the finished interval.
    pub fn release(&mut self, fraction: f64) -> Option<DutyInterval> {
        let finished = self.preview(fraction);
        self.state = EditorState::Idle;
        finished
    }

    /// Abandons the drag, leaving the original interval untouched.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Pointer position in minutes, snapped and kept within the day.
    fn snap(&self, fraction: f64) -> u32 {
        let fraction = fraction.clamp(0.0, 1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let minutes = (fraction * f64::from(self.day_length)).round() as u32;
        round_to_snap(minutes).min(self.day_length)
    }
}

fn round_to_snap(minutes: u32) -> u32 {
    (minutes + SNAP_MINUTES / 2) / SNAP_MINUTES * SNAP_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::DutyKind;

    fn span(text: &str) -> DutyInterval {
        text.parse().unwrap()
    }

    #[test]
    fn idle_editor_has_nothing_to_preview() {
        let editor = TimelineEditor::new(1440);
        assert_eq!(editor.state(), EditorState::Idle);
        assert_eq!(editor.preview(0.5), None);
    }

    #[test]
    fn resize_end_snaps_to_half_hours() {
        let mut editor = TimelineEditor::new(1440);
        editor.grab(Grip::ResizeEnd, span("08:00-12:00"));

        // 14:10 snaps to 14:00.
        let fraction = 850.0 / 1440.0;
        assert_eq!(editor.release(fraction), Some(span("08:00-14:00")));
        assert_eq!(editor.state(), EditorState::Idle);
    }

    #[test]
    fn resize_keeps_at_least_half_an_hour() {
        let mut editor = TimelineEditor::new(1440);
        editor.grab(Grip::ResizeStart, span("08:00-12:00"));
        assert_eq!(editor.preview(1.0), Some(span("11:30-12:00")));

        editor.grab(Grip::ResizeEnd, span("08:00-12:00"));
        assert_eq!(editor.preview(0.0), Some(span("08:00-08:30")));
    }

    #[test]
    fn move_centres_on_pointer_and_keeps_duration() {
        let mut editor = TimelineEditor::new(1440);
        editor.grab(Grip::Move, span("08:00-12:00"));

        assert_eq!(editor.preview(0.5), Some(span("10:00-14:00")));
        assert_eq!(editor.preview(0.0), Some(span("00:00-04:00")));
        assert_eq!(editor.preview(1.0), Some(span("20:00-24:00")));
    }

    #[test]
    fn long_day_timeline_reaches_past_midnight() {
        let mut editor = TimelineEditor::new(1500);
        editor.grab(Grip::Move, span("20:00-24:00"));
        assert_eq!(editor.release(1.0), Some(span("21:00-25:00")));
    }

    #[test]
    fn drag_keeps_the_duty_kind() {
        let mut editor = TimelineEditor::new(1440);
        let drill = span("17:00-17:30").with_kind(DutyKind::Drill);
        editor.grab(Grip::Move, drill);
        let moved = editor.release(0.5).unwrap();
        assert_eq!(moved.kind, DutyKind::Drill);
        assert_eq!(moved.clock_minutes(), 30);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut editor = TimelineEditor::new(1440);
        editor.grab(Grip::ResizeStart, span("08:00-12:00"));
        editor.cancel();
        assert_eq!(editor.release(0.2), None);
    }

    #[test]
    fn grip_follows_grab_position() {
        assert_eq!(Grip::at(3.0, 100.0, 8.0), Grip::ResizeStart);
        assert_eq!(Grip::at(50.0, 100.0, 8.0), Grip::Move);
        assert_eq!(Grip::at(95.0, 100.0, 8.0), Grip::ResizeEnd);
    }
}
