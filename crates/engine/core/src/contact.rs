//! Collision contact records

use glam::Vec3;

/// One contact between two bodies, as reported by the physics engine
///
/// `normal` is in world space and points out of `first`, towards `second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact<K> {
    pub first: K,
    pub second: K,
    pub normal: Vec3,
}

impl<K: Copy + PartialEq> Contact<K> {
    /// Create a new contact record
    pub fn new(first: K, second: K, normal: Vec3) -> Self {
        Self {
            first,
            second,
            normal,
        }
    }

    /// Whether `body` takes part in this contact
    pub fn involves(&self, body: K) -> bool {
        self.first == body || self.second == body
    }

    /// The contact normal as seen from `body`: pointing out of whatever
    /// `body` touched, towards `body`
    ///
    /// Returns `None` if `body` is not one of the participants.
    pub fn normal_towards(&self, body: K) -> Option<Vec3> {
        if self.first == body {
            Some(-self.normal)
        } else if self.second == body {
            Some(self.normal)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_negated_for_first_participant() {
        let contact = Contact::new(1u32, 2u32, Vec3::NEG_Y);
        assert_eq!(contact.normal_towards(1), Some(Vec3::Y));
    }

    #[test]
    fn test_normal_kept_for_second_participant() {
        let contact = Contact::new(2u32, 1u32, Vec3::Y);
        assert_eq!(contact.normal_towards(1), Some(Vec3::Y));
    }

    #[test]
    fn test_unrelated_body() {
        let contact = Contact::new(2u32, 3u32, Vec3::Y);
        assert!(!contact.involves(1));
        assert_eq!(contact.normal_towards(1), None);
    }
}
