use std::time::{Duration, Instant};

use color_dropper::DropperError;
use color_dropper::toast::{CONFIRMATION, ClipboardSink, Toast, ToastPhase};

#[derive(Default)]
struct MemoryClipboard {
    written: Vec<String>,
    refuse: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DropperError> {
        if self.refuse {
            return Err(DropperError::Task("permission denied".into()));
        }
        self.written.push(text.to_owned());
        Ok(())
    }
}

fn toast() -> Toast {
    Toast::new(Duration::from_millis(1000), Duration::from_millis(300))
}

#[test]
fn notify_copies_and_shows_confirmation() {
    let mut clipboard = MemoryClipboard::default();
    let mut toast = toast();

    let timer = toast.notify(&mut clipboard, "#0A141E").expect("write succeeded");
    assert_eq!(timer.after, Duration::from_millis(1000));
    assert_eq!(clipboard.written, vec!["#0A141E"]);
    assert_eq!(toast.message(), Some(CONFIRMATION));
    assert_eq!(toast.visible_count(), 1);
}

#[test]
fn second_confirmation_cancels_the_first_timer() {
    let mut clipboard = MemoryClipboard::default();
    let mut toast = toast();
    let now = Instant::now();

    let first = toast.notify(&mut clipboard, "#000000").expect("first");
    let second = toast.notify(&mut clipboard, "#FFFFFF").expect("second");
    assert_ne!(first.generation, second.generation);
    assert_eq!(toast.visible_count(), 1);

    // the stale timer fires and does nothing
    assert!(!toast.expire(first.generation, now));
    assert_eq!(
        toast.phase(),
        &ToastPhase::Visible {
            generation: second.generation
        }
    );
    assert_eq!(toast.visible_count(), 1);

    assert!(toast.expire(second.generation, now));
    assert!(toast.is_fading());
}

#[test]
fn fade_out_then_removal() {
    let mut clipboard = MemoryClipboard::default();
    let mut toast = toast();
    let start = Instant::now();

    let timer = toast.notify(&mut clipboard, "#123456").expect("shown");
    assert_eq!(toast.opacity(start), 1.0);
    toast.expire(timer.generation, start);

    let halfway = toast.opacity(start + Duration::from_millis(150));
    assert!((halfway - 0.5).abs() < 0.01, "opacity {halfway}");

    toast.tick(start + Duration::from_millis(100));
    assert_eq!(toast.visible_count(), 1);
    toast.tick(start + Duration::from_millis(300));
    assert_eq!(toast.visible_count(), 0);
    assert_eq!(toast.message(), None);
}

#[test]
fn notify_during_fade_restarts_the_confirmation() {
    let mut clipboard = MemoryClipboard::default();
    let mut toast = toast();
    let now = Instant::now();

    let first = toast.notify(&mut clipboard, "#111111").expect("shown");
    toast.expire(first.generation, now);
    assert!(toast.is_fading());

    toast.notify(&mut clipboard, "#222222").expect("shown again");
    assert!(!toast.is_fading());
    assert_eq!(toast.opacity(now), 1.0);
    assert_eq!(toast.visible_count(), 1);
}

#[test]
fn failed_clipboard_write_shows_nothing() {
    let mut clipboard = MemoryClipboard {
        refuse: true,
        ..Default::default()
    };
    let mut toast = toast();

    assert!(toast.notify(&mut clipboard, "#ABCDEF").is_none());
    assert_eq!(toast.visible_count(), 0);
    assert!(clipboard.written.is_empty());
}
