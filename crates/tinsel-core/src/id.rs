//! Identity types for TINSEL
//!
//! Identifiers are 64-bit: cheap to copy, unique enough for a gallery that
//! never exceeds a few dozen members.

use std::fmt;

/// Photo identity - assigned when a photo enters the gallery, stable for the
/// lifetime of that photo.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PhotoId(pub u64);

impl PhotoId {
    pub const ZERO: PhotoId = PhotoId(0);

    #[inline]
    pub fn new(id: u64) -> Self {
        PhotoId(id)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        PhotoId(u64::from_le_bytes(bytes))
    }
}

impl fmt::Debug for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Photo({:016x})", self.0)
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_id_roundtrip() {
        let id = PhotoId::new(0xDEADBEEF_CAFEBABE);
        let bytes = id.to_bytes();
        let recovered = PhotoId::from_bytes(bytes);
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_photo_id_display() {
        let id = PhotoId::new(0xAB);
        assert_eq!(format!("{id}"), "00000000000000ab");
    }
}
