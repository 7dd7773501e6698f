//! Enrolled fingerprint record.
//!
//! The template bytes are opaque to this system; matching happens in the
//! check-in hardware. One fingerprint per client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, FingerprintId, ValidationError};

/// An enrolled fingerprint template for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub id: FingerprintId,
    pub client_id: ClientId,
    /// Opaque template blob produced by the enrollment device.
    pub template: Vec<u8>,
    pub active: bool,
    pub enrolled_at: DateTime<Utc>,
}

impl Fingerprint {
    /// Enrolls a fingerprint for a client.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when the template blob is empty.
    pub fn enroll(
        id: FingerprintId,
        client_id: ClientId,
        template: Vec<u8>,
        enrolled_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if template.is_empty() {
            return Err(ValidationError::empty_field("template"));
        }
        Ok(Self {
            id,
            client_id,
            template,
            active: true,
            enrolled_at,
        })
    }

    /// Marks the fingerprint unusable (damaged reading, re-enrollment).
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_rejects_empty_template() {
        let result = Fingerprint::enroll(
            FingerprintId::new(),
            ClientId::new(),
            Vec::new(),
            Utc::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn enrolled_fingerprint_starts_active() {
        let mut fp = Fingerprint::enroll(
            FingerprintId::new(),
            ClientId::new(),
            vec![0x01, 0x02, 0x03],
            Utc::now(),
        )
        .unwrap();
        assert!(fp.active);
        fp.deactivate();
        assert!(!fp.active);
    }
}
