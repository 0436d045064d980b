//! Pomodoro Timer
//!
//! Countdown state machine. The page drives `tick` once per second.

use crate::notify::{Notification, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
}

pub struct PomodoroTimer<N> {
    duration_secs: u32,
    remaining_secs: u32,
    state: TimerState,
    notifier: N,
}

impl<N: Notifier> PomodoroTimer<N> {
    pub fn new(duration_secs: u32, notifier: N) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            state: TimerState::Idle,
            notifier,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Idle starts, Paused resumes. Returns whether the state changed.
    pub fn start(&mut self) -> bool {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                log::debug!("[pomodoro] running, {}s left", self.remaining_secs);
                true
            }
            TimerState::Running | TimerState::Completed => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.state = TimerState::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.start()
    }

    /// Back to Idle with the full duration, from any state
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_secs = self.duration_secs;
    }

    /// Advance one second. Only counts while Running.
    pub fn tick(&mut self) {
        if self.state != TimerState::Running {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Completed;
            log::info!("[pomodoro] completed");
            self.notifier.notify(Notification::success("Pomodoro concluído!"));
        }
    }

    /// `mm:ss`
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }
}

pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::testing::RecordingNotifier;

    fn timer(secs: u32) -> (PomodoroTimer<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        (PomodoroTimer::new(secs, notifier.clone()), notifier)
    }

    #[test]
    fn test_starts_idle_at_full_duration() {
        let (t, _) = timer(25 * 60);
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.display(), "25:00");
    }

    #[test]
    fn test_display_interpolates() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(1499), "24:59");
    }

    #[test]
    fn test_tick_only_while_running() {
        let (mut t, _) = timer(10);
        t.tick();
        assert_eq!(t.remaining_secs(), 10);

        assert!(t.start());
        t.tick();
        assert_eq!(t.remaining_secs(), 9);

        assert!(t.pause());
        t.tick();
        assert_eq!(t.remaining_secs(), 9);
        assert_eq!(t.state(), TimerState::Paused);

        assert!(t.resume());
        t.tick();
        assert_eq!(t.remaining_secs(), 8);
    }

    #[test]
    fn test_start_while_paused_resumes() {
        let (mut t, _) = timer(10);
        t.start();
        t.tick();
        t.pause();
        assert!(t.start());
        assert_eq!(t.state(), TimerState::Running);
        assert_eq!(t.remaining_secs(), 9);
    }

    #[test]
    fn test_invalid_transitions_are_rejected() {
        let (mut t, _) = timer(10);
        assert!(!t.pause());
        assert!(!t.resume());
        t.start();
        assert!(!t.start());
        assert!(!t.resume());
    }

    #[test]
    fn test_completes_at_zero() {
        let (mut t, notifier) = timer(2);
        t.start();
        t.tick();
        assert_eq!(notifier.count(), 0);
        t.tick();

        assert_eq!(t.state(), TimerState::Completed);
        assert_eq!(t.display(), "00:00");
        assert_eq!(notifier.last().unwrap().message, "Pomodoro concluído!");

        // Stays put until reset
        t.tick();
        assert!(!t.start());
        assert_eq!(t.remaining_secs(), 0);
        assert_eq!(notifier.count(), 1);
    }

    #[test]
    fn test_reset_from_any_state() {
        let (mut t, _) = timer(3);
        t.start();
        t.tick();
        t.reset();
        assert_eq!(t.state(), TimerState::Idle);
        assert_eq!(t.remaining_secs(), 3);

        t.start();
        t.tick();
        t.pause();
        t.reset();
        assert_eq!(t.state(), TimerState::Idle);

        t.start();
        for _ in 0..3 {
            t.tick();
        }
        assert_eq!(t.state(), TimerState::Completed);
        t.reset();
        assert_eq!(t.display(), "00:03");
        assert!(t.start());
    }
}
