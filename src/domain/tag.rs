use std::fmt;

/// A title transformed into a tag token accepted by the image-search
/// service: whitespace becomes underscores, everything else passes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkTag(String);

impl ArtworkTag {
    pub fn from_title(title: &str) -> Self {
        Self(title.trim().replace(' ', "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
