use std::num::NonZeroUsize;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use super::events::Listeners;
use super::player::{ListenersHandle, join_within};
use super::queue::coalesce;
use super::source::StreamOptions;
use super::thread::{gain, report_load_started, report_loaded};
use super::types::MediaCmd;
use crate::config::AudioSettings;

fn handle() -> ListenersHandle {
    Arc::new(Mutex::new(Listeners::default()))
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn emit_reaches_every_live_subscriber() {
    let mut listeners: Listeners<Duration> = Listeners::default();
    let a = listeners.subscribe();
    let b = listeners.subscribe();

    listeners.emit(Duration::from_secs(1));
    listeners.emit(Duration::from_secs(2));

    let got_a: Vec<_> = a.pending().collect();
    let got_b: Vec<_> = b.pending().collect();
    assert_eq!(got_a, vec![Duration::from_secs(1), Duration::from_secs(2)]);
    assert_eq!(got_a, got_b);
    assert_eq!(a.pending().count(), 0);
}

#[test]
fn dropped_subscription_is_pruned_on_next_emit() {
    let mut listeners: Listeners<u32> = Listeners::default();
    let keep = listeners.subscribe();
    let gone = listeners.subscribe();
    assert_eq!(listeners.len(), 2);

    drop(gone);
    listeners.emit(7);

    assert_eq!(listeners.len(), 1);
    assert_eq!(keep.pending().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn emit_without_subscribers_is_a_no_op() {
    let mut listeners: Listeners<u32> = Listeners::default();
    listeners.emit(1);
    assert!(listeners.is_empty());
}

#[test]
fn coalesce_opens_only_the_last_source() {
    let batch = vec![
        MediaCmd::SetSource("a".into()),
        MediaCmd::Play,
        MediaCmd::SetSource("b".into()),
        MediaCmd::Play,
        MediaCmd::SetSource("c".into()),
        MediaCmd::Play,
    ];
    assert_eq!(
        coalesce(batch),
        vec![MediaCmd::SetSource("c".into()), MediaCmd::Play]
    );
}

#[test]
fn coalesce_keeps_volume_and_mute_in_order() {
    let batch = vec![
        MediaCmd::SetVolume(0.4),
        MediaCmd::SetSource("a".into()),
        MediaCmd::SetMuted(true),
        MediaCmd::SetCurrentTime(secs(30)),
        MediaCmd::SetSource("b".into()),
        MediaCmd::Pause,
    ];
    assert_eq!(
        coalesce(batch),
        vec![
            MediaCmd::SetVolume(0.4),
            MediaCmd::SetMuted(true),
            MediaCmd::SetSource("b".into()),
            MediaCmd::Pause,
        ]
    );
}

#[test]
fn coalesce_leaves_batches_without_a_source_alone() {
    let batch = vec![MediaCmd::Play, MediaCmd::SetCurrentTime(secs(5)), MediaCmd::Pause];
    assert_eq!(coalesce(batch.clone()), batch);
}

#[test]
fn coalesce_quit_discards_pending_loads() {
    let batch = vec![
        MediaCmd::SetSource("a".into()),
        MediaCmd::Play,
        MediaCmd::Quit,
        MediaCmd::SetSource("b".into()),
    ];
    assert_eq!(coalesce(batch), vec![MediaCmd::Quit]);
}

#[test]
fn gain_silences_when_muted_and_keeps_volume() {
    assert_eq!(gain(0.7, false), 0.7);
    assert_eq!(gain(0.7, true), 0.0);
    assert_eq!(gain(1.5, false), 1.0);
}

#[test]
fn load_start_resets_position_and_duration() {
    let time_update = handle();
    let metadata_loaded = handle();
    let times = time_update.lock().unwrap().subscribe();
    let durations = metadata_loaded.lock().unwrap().subscribe();

    report_load_started(&time_update, &metadata_loaded);

    assert_eq!(times.pending().collect::<Vec<_>>(), vec![Duration::ZERO]);
    assert_eq!(durations.pending().collect::<Vec<_>>(), vec![Duration::ZERO]);
}

#[test]
fn loaded_source_reports_duration_or_zero_for_live() {
    let metadata_loaded = handle();
    let durations = metadata_loaded.lock().unwrap().subscribe();

    report_loaded(&metadata_loaded, Some(secs(200)));
    report_loaded(&metadata_loaded, None);

    assert_eq!(
        durations.pending().collect::<Vec<_>>(),
        vec![secs(200), Duration::ZERO]
    );
}

#[test]
fn join_within_joins_a_finished_thread() {
    let (tx, rx) = mpsc::channel::<()>();
    let h = thread::spawn(move || drop(tx));
    assert!(join_within(h, &rx, Duration::from_secs(5)));
}

#[test]
fn join_within_gives_up_on_a_stuck_thread() {
    let (tx, rx) = mpsc::channel::<()>();
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let h = thread::spawn(move || {
        let _exited = tx;
        let _ = release_rx.recv();
    });

    assert!(!join_within(h, &rx, Duration::from_millis(20)));
    drop(release_tx);
}

#[test]
fn stream_options_bound_live_buffer_and_connect_time() {
    let settings = AudioSettings {
        buffer_bytes: 512 * 1024,
        connect_timeout_ms: 2_500,
        ..AudioSettings::default()
    };
    let options = StreamOptions::from_settings(&settings);
    assert_eq!(options.buffer_bytes.get(), 512 * 1024);
    assert_eq!(options.connect_timeout, Duration::from_millis(2_500));
    assert_eq!(options.prefetch_bytes, settings.prefetch_bytes);

    let zero = AudioSettings {
        buffer_bytes: 0,
        ..AudioSettings::default()
    };
    assert_eq!(StreamOptions::from_settings(&zero).buffer_bytes, NonZeroUsize::MIN);
}
