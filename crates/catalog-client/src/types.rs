//! Record types returned by the catalog store
//!
//! These are the raw backend shapes. The dock normalizes them into its own
//! unified result type; nothing here knows about rendering or navigation.

use serde::{Deserialize, Serialize};

/// An artist as stored in the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Backend identifier, unique among artists only
    pub id: String,
    /// Display name
    pub name: String,
    /// Region within the country (e.g., "Detroit"), if known
    pub region: Option<String>,
    /// Country name, if known
    pub country: Option<String>,
}

/// A release (album, EP, single) as stored in the catalog backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Backend identifier, unique among releases only
    pub id: String,
    /// Release title
    pub title: String,
    /// Release type (e.g., "Album", "EP"), if set
    pub release_type: Option<String>,
    /// Catalog number (e.g., "CAT-042"), if assigned
    pub catalog_number: Option<String>,
    /// Workflow status (e.g., "Draft", "Delivered"), if set
    pub status: Option<String>,
}

/// Whether a deliverable entry is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverableKind {
    File,
    Folder,
}

/// A deliverable (audio file, artwork, folder) as stored in the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableRecord {
    /// Backend identifier, unique among deliverables only
    pub id: String,
    /// File or folder name
    pub name: String,
    /// File vs. folder
    pub kind: DeliverableKind,
    /// File type label (e.g., "WAV", "PNG"), files only
    pub file_type: Option<String>,
    /// Delivery status (e.g., "Uploaded", "Approved"), if set
    pub status: Option<String>,
    /// Owning release, if attached to one
    pub release_id: Option<String>,
}
