use serde::Serialize;
use std::collections::BTreeMap;

/// Seat label -> occupant. Any label is accepted; the last assignment wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeatArrangement {
    seats: BTreeMap<String, String>,
}

impl SeatArrangement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whoever held the seat before, if anyone.
    pub fn assign(&mut self, label: impl Into<String>, occupant: impl Into<String>) -> Option<String> {
        let label = label.into();
        let occupant = occupant.into();
        tracing::debug!("Seat {} -> {}", label, occupant);
        self.seats.insert(label, occupant)
    }

    pub fn occupant(&self, label: &str) -> Option<&str> {
        self.seats.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seats in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.seats.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SeatArrangement {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut seats = SeatArrangement::new();
        for (label, occupant) in iter {
            seats.assign(label, occupant);
        }
        seats
    }
}
