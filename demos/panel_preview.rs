// SPDX-License-Identifier: MPL-2.0

//! Demo program: render one poll cycle of binding states the way a
//! wall panel would show them.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example panel_preview
//! ```

use habxform_lib::transform::{
    AccessDenied, ContactInvert, DimmerRead, DimmerScale, EntryLogDated, SecondsToMinutes,
    Transform, WindDirection,
};
use habxform_lib::types::Depth;
use habxform_lib::windrose::PointFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let wind = WindDirection::new(Depth::new(2)?, PointFormat::Name);
    let dimmer = DimmerRead::new(DimmerScale::new(1023.0)?);

    let entry_payload = r#"{
        "firstName": "Jane",
        "lastName": "Doe",
        "doorName": "Front Door",
        "timestamp": "2026-01-16T14:35:22"
    }"#;

    let channels: Vec<(&str, &str, Box<dyn Transform>)> = vec![
        ("Wind direction", "337.5", Box::new(wind)),
        ("Workshop dimmer", "512", Box::new(dimmer)),
        ("Hatch contact", "1", Box::new(ContactInvert)),
        ("Router uptime", "93784", Box::new(SecondsToMinutes)),
        ("Last entry", entry_payload, Box::new(EntryLogDated)),
        ("Denied swipes", "NULL", Box::new(AccessDenied)),
        ("Wind (offline)", "UNDEF", Box::new(WindDirection::default())),
    ];

    for (label, state, transform) in &channels {
        match transform.apply(state) {
            Ok(line) => println!("{label:>15}: {line}"),
            Err(e) => println!("{label:>15}: [{e}]"),
        }
    }

    Ok(())
}
