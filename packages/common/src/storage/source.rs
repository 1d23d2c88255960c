use serde::{Deserialize, Serialize};

/// Where a photo's bytes live.
///
/// Small deployments keep the bytes next to the record, larger galleries
/// reference files on disk. Everything above the store only ever sees this
/// enum, so switching backends never changes the photo contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Image bytes carried inline with the record.
    Inline { data: Vec<u8> },
    /// Path to image bytes kept outside the record store.
    File { path: String },
}
