//! Helpers to keep the audio thread's command backlog short.
//!
//! Opening a stream blocks the audio thread, so commands pile up while the
//! user skips through stations. Before acting, the thread collapses the
//! backlog so only the last requested source is actually opened.

use super::types::MediaCmd;

/// Collapse a batch of queued commands.
///
/// - `Quit` anywhere wins: the result is just `[Quit]`.
/// - Everything aimed at a source (`SetSource`, `Play`, `Pause`,
///   `SetCurrentTime`) before the last `SetSource` is dropped, since that
///   source is never going to be opened.
/// - Volume and mute apply to the element itself and are kept in order.
pub(super) fn coalesce(batch: Vec<MediaCmd>) -> Vec<MediaCmd> {
    if batch.contains(&MediaCmd::Quit) {
        return vec![MediaCmd::Quit];
    }

    let Some(last_source) = batch
        .iter()
        .rposition(|c| matches!(c, MediaCmd::SetSource(_)))
    else {
        return batch;
    };

    batch
        .into_iter()
        .enumerate()
        .filter(|(i, cmd)| {
            *i >= last_source
                || matches!(cmd, MediaCmd::SetVolume(_) | MediaCmd::SetMuted(_))
        })
        .map(|(_, cmd)| cmd)
        .collect()
}
