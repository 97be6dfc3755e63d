use chrono::FixedOffset;
use std::cell::RefCell;
use std::time::Duration;
use wordlink::core::client::DeviceClient;
use wordlink::core::console::{Console, PaintStage};
use wordlink::core::format::TimePolicy;
use wordlink::core::render::LogPane;
use wordlink::errors::{AppError, AppResult};
use wordlink::models::word::wire_word;
use wordlink::models::{EventRecord, LineKind};

fn utc() -> TimePolicy {
    TimePolicy::Fixed(FixedOffset::east_opt(0).unwrap())
}

fn sample() -> Vec<EventRecord> {
    vec![
        EventRecord::new("hello", "2024-01-01T00:00:00Z"),
        EventRecord::new("howareyou", "2024-01-01T00:01:00Z"),
        EventRecord::new("hello", "2024-01-01T00:02:00Z"),
    ]
}

/// In-memory device used to drive the console.
#[derive(Default)]
struct FakeDevice {
    log: RefCell<Vec<EventRecord>>,
    sent: RefCell<Vec<String>>,
    fetches: RefCell<usize>,
    fail_send: bool,
    fail_fetch: bool,
}

impl DeviceClient for FakeDevice {
    fn send_word(&self, word: &str) -> AppResult<()> {
        if self.fail_send {
            return Err(AppError::Decode("device unreachable".into()));
        }
        let wire = wire_word(word);
        self.log
            .borrow_mut()
            .push(EventRecord::new(&wire, "2024-01-01T00:10:00Z"));
        self.sent.borrow_mut().push(wire);
        Ok(())
    }

    fn fetch_log(&self) -> AppResult<Vec<EventRecord>> {
        *self.fetches.borrow_mut() += 1;
        if self.fail_fetch {
            return Err(AppError::Decode("device unreachable".into()));
        }
        Ok(self.log.borrow().clone())
    }
}

#[test]
fn replace_renders_every_valid_record_in_order() {
    let mut pane = LogPane::new(0);
    let shown = pane.replace(&sample(), &utc());

    assert_eq!(shown, 3);
    assert_eq!(
        pane.texts(),
        vec![
            "[2024-01-01 00:00:00] hello",
            "[2024-01-01 00:01:00] how-are-you",
            "[2024-01-01 00:02:00] hello",
        ]
    );
    assert!(pane.lines().iter().all(|l| l.kind == LineKind::Confirmed));
}

#[test]
fn invalid_records_are_skipped_without_reordering() {
    let records = vec![
        EventRecord::new("a", "2024-01-01T00:00:00Z"),
        EventRecord::new("b", "broken"),
        EventRecord {
            word: None,
            time: Some("2024-01-01T00:00:00Z".into()),
        },
        EventRecord::new("c", "2024-01-01T00:03:00Z"),
    ];
    let mut pane = LogPane::new(0);

    assert_eq!(pane.replace(&records, &utc()), 2);
    assert_eq!(
        pane.texts(),
        vec!["[2024-01-01 00:00:00] a", "[2024-01-01 00:03:00] c"]
    );
}

#[test]
fn pending_line_is_appended_then_discarded_on_replace() {
    let mut pane = LogPane::new(0);
    pane.replace(&sample(), &utc());
    pane.append_pending("how-are-you");

    assert_eq!(pane.lines().len(), 4);
    let last = pane.lines().last().unwrap();
    assert_eq!(last.text, "[sending…] how-are-you");
    assert_eq!(last.kind, LineKind::Pending);
    assert_eq!(pane.pending_count(), 1);

    pane.replace(&sample(), &utc());
    assert_eq!(pane.pending_count(), 0);
    assert_eq!(pane.lines().len(), 3);
}

#[test]
fn pane_scrolls_to_its_end() {
    let records: Vec<EventRecord> = (0..5)
        .map(|i| EventRecord::new(&format!("w{i}"), "2024-01-01T00:00:00Z"))
        .collect();
    let mut pane = LogPane::new(2);
    pane.replace(&records, &utc());

    assert_eq!(pane.scroll_top(), 3);
    let visible: Vec<&str> = pane.visible().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        visible,
        vec!["[2024-01-01 00:00:00] w3", "[2024-01-01 00:00:00] w4"]
    );

    pane.append_pending("hello");
    assert_eq!(pane.scroll_top(), 4);
    assert_eq!(pane.visible().last().unwrap().text, "[sending…] hello");
}

#[test]
fn paint_writes_one_row_per_visible_line() {
    let mut pane = LogPane::new(0);
    pane.replace(&sample(), &utc());
    pane.append_pending("hello");

    let mut out = Vec::new();
    pane.paint(&mut out, false).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 4);
    assert!(text.ends_with("[sending…] hello\n"));
    assert!(!text.contains('\x1b'));

    let mut colored = Vec::new();
    pane.paint(&mut colored, true).unwrap();
    assert!(String::from_utf8(colored).unwrap().contains("\x1b[90m[sending…] hello"));
}

#[test]
fn press_sends_wire_word_and_refreshes() {
    let device = FakeDevice::default();
    let mut console = Console::new(device, LogPane::new(0), utc(), Duration::ZERO);

    let mut stages = Vec::new();
    let mut seen_pending = false;
    let outcome = console.press("how-are-you", true, |pane, stage| {
        if stage == PaintStage::Pending {
            seen_pending = pane.pending_count() == 1;
        }
        stages.push(stage);
    });

    assert!(outcome.sent);
    assert!(outcome.refreshed);
    assert!(seen_pending);
    assert_eq!(stages, vec![PaintStage::Pending, PaintStage::Refreshed]);
    assert_eq!(*console.client().sent.borrow(), vec!["howareyou".to_string()]);
    assert_eq!(
        console.pane().texts(),
        vec!["[2024-01-01 00:10:00] how-are-you"]
    );
}

#[test]
fn repeated_presses_are_not_deduplicated() {
    let mut console = Console::new(FakeDevice::default(), LogPane::new(0), utc(), Duration::ZERO);

    console.press("hello", false, |_, _| {});
    console.press("hello", false, |_, _| {});

    assert_eq!(console.client().sent.borrow().len(), 2);
    assert_eq!(*console.client().fetches.borrow(), 0);
    assert_eq!(console.pane().pending_count(), 2);
}

#[test]
fn failed_fetch_keeps_previous_log() {
    let device = FakeDevice {
        log: RefCell::new(sample()),
        ..FakeDevice::default()
    };
    let mut console = Console::new(device, LogPane::new(0), utc(), Duration::ZERO);
    assert!(console.refresh());
    let before: Vec<String> = console.pane().texts().iter().map(|s| s.to_string()).collect();

    let broken = FakeDevice {
        fail_fetch: true,
        ..FakeDevice::default()
    };
    let mut failing = Console::new(broken, LogPane::new(0), utc(), Duration::ZERO);
    assert!(!failing.refresh());
    assert!(failing.pane().is_empty());

    // Same console: the device goes away after the first refresh.
    let mut pane = LogPane::new(0);
    pane.replace(&sample(), &utc());
    let mut console = Console::new(
        FakeDevice {
            fail_fetch: true,
            ..FakeDevice::default()
        },
        pane,
        utc(),
        Duration::ZERO,
    );
    let outcome = console.press("hello", true, |_, _| {});

    assert!(outcome.sent);
    assert!(!outcome.refreshed);
    let after: Vec<&str> = console.pane().texts();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..3], before.iter().map(String::as_str).collect::<Vec<_>>().as_slice());
    assert_eq!(after[3], "[sending…] hello");
}

#[test]
fn failed_send_still_refreshes() {
    let device = FakeDevice {
        log: RefCell::new(sample()),
        fail_send: true,
        ..FakeDevice::default()
    };
    let mut console = Console::new(device, LogPane::new(0), utc(), Duration::ZERO);

    let outcome = console.press("hello", true, |_, _| {});

    assert!(!outcome.sent);
    assert!(outcome.refreshed);
    assert_eq!(*console.client().fetches.borrow(), 1);
    assert_eq!(console.pane().pending_count(), 0);
    assert_eq!(console.pane().lines().len(), 3);
}
