//! Room model.
//!
//! Rooms are typed (lecture hall or lab) and sized. A room can host a
//! session only if its type matches the session type and its capacity
//! covers the batch size.

use serde::{Deserialize, Serialize};

use super::SessionType;

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    /// Lecture hall or classroom.
    Lecture,
    /// Laboratory.
    Lab,
}

/// A teaching room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seat count.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
}

impl Room {
    /// Creates a room.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        room_type: RoomType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            room_type,
        }
    }

    /// Whether this room's type matches the given session type.
    ///
    /// Lab sessions require `LAB` rooms; lecture sessions require
    /// `LECTURE` rooms.
    pub fn suits(&self, session_type: SessionType) -> bool {
        match session_type {
            SessionType::Lab => self.room_type == RoomType::Lab,
            SessionType::Lecture => self.room_type == RoomType::Lecture,
        }
    }

    /// Whether this room seats a batch of the given size.
    #[inline]
    pub fn fits(&self, batch_size: u32) -> bool {
        self.capacity >= batch_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_suits_session_type() {
        let hall = Room::new("r-101", "Lecture Hall 101", 65, RoomType::Lecture);
        let lab = Room::new("r-201", "Computer Lab A", 65, RoomType::Lab);

        assert!(hall.suits(SessionType::Lecture));
        assert!(!hall.suits(SessionType::Lab));
        assert!(lab.suits(SessionType::Lab));
        assert!(!lab.suits(SessionType::Lecture));
    }

    #[test]
    fn test_room_fits_batch() {
        let room = Room::new("r-401", "Smart Class 401", 50, RoomType::Lecture);
        assert!(room.fits(50));
        assert!(room.fits(42));
        assert!(!room.fits(58));
    }
}
