//! Opening a network stream as a paused rodio `Sink`.

use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::Url;
use rodio::decoder::DecoderBuilder;
use rodio::{OutputStream, Sink, Source};
use stream_download::storage::adaptive::AdaptiveStorageProvider;
use stream_download::storage::temp::TempStorageProvider;
use stream_download::{Settings, StreamDownload};
use tokio::runtime::Runtime;

use crate::config::AudioSettings;

/// Download tuning taken from the audio settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct StreamOptions {
    pub prefetch_bytes: u64,
    pub buffer_bytes: NonZeroUsize,
    pub connect_timeout: Duration,
}

impl StreamOptions {
    pub fn from_settings(settings: &AudioSettings) -> Self {
        let buffer_bytes = usize::try_from(settings.buffer_bytes)
            .ok()
            .and_then(NonZeroUsize::new)
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            prefetch_bytes: settings.prefetch_bytes,
            buffer_bytes,
            connect_timeout: Duration::from_millis(settings.connect_timeout_ms),
        }
    }
}

/// Download `url` progressively and wrap it in a paused `Sink`.
///
/// Streams without a content length (live radio) are kept in a ring buffer of
/// `buffer_bytes`; finite sources are stored whole so they stay seekable.
/// Returns the sink together with the source's total duration when the
/// decoder knows it.
pub(super) fn open_stream_sink(
    runtime: &Runtime,
    stream: &OutputStream,
    url: &str,
    options: StreamOptions,
) -> anyhow::Result<(Sink, Option<Duration>)> {
    let url = Url::parse(url).with_context(|| format!("invalid stream url {url:?}"))?;

    let storage = AdaptiveStorageProvider::new(TempStorageProvider::new(), options.buffer_bytes);
    let reader = runtime
        .block_on(async {
            tokio::time::timeout(
                options.connect_timeout,
                StreamDownload::new_http(
                    url.clone(),
                    storage,
                    Settings::default().prefetch_bytes(options.prefetch_bytes),
                ),
            )
            .await
        })
        .map_err(|_| anyhow!("timed out connecting to {url}"))?
        .map_err(|e| anyhow!("failed to open {url}: {e}"))?;

    let mut builder = DecoderBuilder::new().with_seekable(true);
    if let Some(len) = reader.content_length() {
        builder = builder.with_byte_len(len);
    }
    let source = builder
        .with_data(reader)
        .build()
        .with_context(|| format!("failed to decode {url}"))?;
    let total = source.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.append(source);
    Ok((sink, total))
}
