use serde::{Deserialize, Serialize};

/// Stable identifier of a roster entry, assigned by the external roster
/// store. Opaque to the engine; only compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One roster record as delivered by the roster store.
///
/// `friends_raw` and `disrespect_raw` are free text typed by humans:
/// comma-separated display names, possibly empty or absent. They are never
/// trusted as references until the resolver has matched them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: EntryId,
    pub display_name: String,
    #[serde(default)]
    pub friends_raw: String,
    #[serde(default)]
    pub disrespect_raw: String,
}

impl RosterEntry {
    /// Convenience constructor for callers assembling snapshots in code.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        friends_raw: impl Into<String>,
        disrespect_raw: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId(id.into()),
            display_name: display_name.into(),
            friends_raw: friends_raw.into(),
            disrespect_raw: disrespect_raw.into(),
        }
    }
}

/// A cohort snapshot: the scope over which names resolve and a graph is
/// built. Entry order is significant (node order, tie breaking).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cohort {
    pub id: String,
    pub entries: Vec<RosterEntry>,
}
