//! Activity Offer Data Structures
//!
//! An activity offer is a discounted outing proposed to two users once their
//! conversation becomes mutual. There is at most one offer per conversation,
//! stored under the conversation's key.

use serde::{Deserialize, Serialize};

use crate::shared::messaging::{ConversationKey, Slot};

/// One entry of the activity catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDescriptor {
    pub name: String,
    pub advertiser: String,
    pub address: String,
    /// Discount in percent
    pub discount_percent: u8,
    /// Price before discount, in whole dollars
    pub original_price: u32,
    /// Human-readable scheduled time
    pub scheduled_time: String,
}

/// One side of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferParticipant {
    pub email: String,
    pub name: Option<String>,
    pub accepted: bool,
}

impl OfferParticipant {
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email: email.into(),
            name,
            accepted: false,
        }
    }
}

/// A generated activity offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityOffer {
    /// Same as the key of the conversation it was generated for
    pub id: ConversationKey,
    pub activity: ActivityDescriptor,
    pub first: OfferParticipant,
    pub second: OfferParticipant,
    /// RFC3339 creation time
    pub created_at: String,
}

impl ActivityOffer {
    /// Build a fresh offer with both acceptance flags cleared
    ///
    /// Participants take the slots of the conversation key.
    pub fn new(
        id: ConversationKey,
        activity: ActivityDescriptor,
        first_name: Option<String>,
        second_name: Option<String>,
    ) -> Self {
        let first = OfferParticipant::new(id.first(), first_name);
        let second = OfferParticipant::new(id.second(), second_name);
        Self {
            id,
            activity,
            first,
            second,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn participant(&self, slot: Slot) -> &OfferParticipant {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }

    /// Which slot belongs to `email`; the first slot wins if both match
    pub fn slot_for_email(&self, email: &str) -> Option<Slot> {
        if self.first.email == email {
            Some(Slot::First)
        } else if self.second.email == email {
            Some(Slot::Second)
        } else {
            None
        }
    }

    pub fn accept(&mut self, slot: Slot) {
        match slot {
            Slot::First => self.first.accepted = true,
            Slot::Second => self.second.accepted = true,
        }
    }

    pub fn both_accepted(&self) -> bool {
        self.first.accepted && self.second.accepted
    }
}
