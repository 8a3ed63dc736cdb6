//! Activity Catalog
//!
//! The fixed list of partner activities an offer is drawn from. The
//! generator receives the catalog at construction, so tests can supply their
//! own.

use std::sync::Arc;

use crate::shared::ActivityDescriptor;

/// (name, advertiser, address, discount %, price, scheduled time)
const ENTRIES: [(&str, &str, &str, u8, u32, &str); 8] = [
    (
        "Helicopter Tour: Ultimate Manhattan Sightseeing",
        "HeliNY",
        "6 East River Piers",
        10,
        289,
        "2023/5/20, 10am",
    ),
    (
        "Statue of Liberty and New York City Skyline Sightseeing Cruise",
        "Classic Harbor Line",
        "62 Chelsea Piers",
        20,
        128,
        "2023/5/21, 10am",
    ),
    (
        "Manhattan Architecture Yacht Cruise",
        "Classic Harbor Line",
        "62 Chelsea Piers",
        30,
        112,
        "2023/5/20, 11am",
    ),
    (
        "Chinatown and Little Italy Food Fest",
        "Ahoy New York Food Tours",
        "Silk Road Cafe",
        40,
        125,
        "2023/5/20, 12am",
    ),
    (
        "Bateaux New York Premier Dinner Cruise",
        "Bateaux New York",
        "Chelsea Piers",
        50,
        192,
        "2023/5/20, 8am",
    ),
    (
        "Niagara Falls in One Day from New York City",
        "Amigo Tours",
        "Niagara Falls State Park",
        60,
        552,
        "2023/5/21, 8am",
    ),
    (
        "Skip-the-Line Metropolitan Museum of Art - Exclusive Guided Tour",
        "Babylon Tours New York City",
        "The Metropolitan Museum of Art",
        35,
        126,
        "2023/5/13, 10am",
    ),
    (
        "Private Tour New York City in the Gilded Age: A History of High Society",
        "New York Historical Tours",
        "764 Central Park S",
        22,
        300,
        "2023/5/14, 10am",
    ),
];

/// The built-in catalog
pub fn default_catalog() -> Arc<[ActivityDescriptor]> {
    ENTRIES
        .iter()
        .map(
            |&(name, advertiser, address, discount_percent, original_price, scheduled_time)| {
                ActivityDescriptor {
                    name: name.to_string(),
                    advertiser: advertiser.to_string(),
                    address: address.to_string(),
                    discount_percent,
                    original_price,
                    scheduled_time: scheduled_time.to_string(),
                }
            },
        )
        .collect()
}
