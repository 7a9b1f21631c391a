//! In-memory library of uploaded study materials.
//!
//! Text extraction happens upstream; this layer only receives plain text.
//! Re-uploads of identical content are rejected by content hash. Remote
//! persistence is the app shell's job — nothing here outlives the session.

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use lunar_core::{Error, Result};

/// One uploaded study material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub id: u64,
    /// Display name, usually the uploaded filename.
    pub name: String,
    /// Extracted plain text content.
    pub text: String,
    pub content_hash: String,
}

/// Owned collection of materials for one session.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: Vec<Material>,
    next_id: u64,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, rejecting duplicate content.
    pub fn add(&mut self, name: &str, text: &str) -> Result<u64> {
        let hash = content_hash(text);
        if self.materials.iter().any(|m| m.content_hash == hash) {
            debug!("duplicate material content, rejecting: {}", name);
            return Err(Error::DuplicateContent(hash));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.materials.push(Material {
            id,
            name: name.to_string(),
            text: text.to_string(),
            content_hash: hash,
        });
        info!("added material {} ({} chars)", name, text.len());
        Ok(id)
    }

    pub fn get(&self, id: u64) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// The most recently added material — the chat screen's active document.
    pub fn active(&self) -> Option<&Material> {
        self.materials.last()
    }

    pub fn remove(&mut self, id: u64) -> Result<Material> {
        let index = self
            .materials
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| Error::MaterialNotFound(id.to_string()))?;
        Ok(self.materials.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

/// Compute SHA-256 content hash.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut library = MaterialLibrary::new();
        let id = library.add("notes.pdf", "Cell biology notes").unwrap();
        assert_eq!(library.get(id).unwrap().name, "notes.pdf");
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_duplicate_content_rejected() {
        let mut library = MaterialLibrary::new();
        library.add("notes.pdf", "Same content").unwrap();
        let result = library.add("renamed.pdf", "Same content");
        assert!(matches!(result, Err(Error::DuplicateContent(_))));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_active_is_most_recent() {
        let mut library = MaterialLibrary::new();
        library.add("first.pdf", "First upload").unwrap();
        library.add("second.pdf", "Second upload").unwrap();
        assert_eq!(library.active().unwrap().name, "second.pdf");
    }

    #[test]
    fn test_remove() {
        let mut library = MaterialLibrary::new();
        let id = library.add("notes.pdf", "Some notes").unwrap();
        assert!(library.remove(id).is_ok());
        assert!(library.is_empty());
        assert!(matches!(
            library.remove(id),
            Err(Error::MaterialNotFound(_))
        ));
    }

    #[test]
    fn test_remove_frees_hash_for_reupload() {
        let mut library = MaterialLibrary::new();
        let id = library.add("notes.pdf", "Some notes").unwrap();
        library.remove(id).unwrap();
        assert!(library.add("notes.pdf", "Some notes").is_ok());
    }

    #[test]
    fn test_content_hash_is_stable_hex() {
        let a = content_hash("abc");
        let b = content_hash("abc");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
