use serde::{Deserialize, Serialize};

/// One playable entry: a stream URL plus what to show while it plays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Station {
    /// Display name shown as the title.
    pub name: String,
    /// URL handed to the media element as its source.
    pub stream_url: String,
    /// Path to the cover image asset. Not validated.
    pub cover_image: String,
}

impl Station {
    pub fn new(name: &str, stream_url: &str, cover_image: &str) -> Self {
        Self {
            name: name.to_string(),
            stream_url: stream_url.to_string(),
            cover_image: cover_image.to_string(),
        }
    }
}

/// Immutable, non-empty list of stations addressed by position.
#[derive(Debug, Clone)]
pub struct StationList {
    stations: Vec<Station>,
}

impl StationList {
    /// Build a registry from `stations`. Returns `None` when the list is empty,
    /// since an empty registry has no valid current index.
    pub fn new(stations: Vec<Station>) -> Option<Self> {
        if stations.is_empty() {
            None
        } else {
            Some(Self { stations })
        }
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Station at `index` modulo the list length. Never fails since the
    /// list is non-empty.
    pub fn at(&self, index: usize) -> &Station {
        &self.stations[index % self.stations.len()]
    }

    /// Index after `index`, wrapping to the first station.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last station.
    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.len() - 1) % self.len()
    }
}

impl Default for StationList {
    fn default() -> Self {
        Self {
            stations: super::builtin_stations(),
        }
    }
}
