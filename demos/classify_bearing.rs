// SPDX-License-Identifier: MPL-2.0

//! Demo program: classify a wind bearing at every rose resolution.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example classify_bearing -- <degrees> [depth]
//! ```
//!
//! # Example
//!
//! ```bash
//! # All six resolutions
//! cargo run --example classify_bearing -- 347.3
//!
//! # One resolution only
//! cargo run --example classify_bearing -- 347.3 3
//! ```

use std::env;

use habxform_lib::types::{Depth, Heading};
use habxform_lib::windrose::Windrose;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <degrees> [depth]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example classify_bearing -- 347.3 3");
        std::process::exit(1);
    }

    let heading: Heading = args[1].parse()?;
    println!("Bearing {heading}:");

    if let Some(raw) = args.get(2) {
        let depth = Depth::new(raw.parse()?)?;
        print_classification(&Windrose::new(depth), heading);
    } else {
        for level in 0..=5 {
            let depth = Depth::new(level)?;
            print_classification(&Windrose::new(depth), heading);
        }
    }

    Ok(())
}

fn print_classification(rose: &Windrose, heading: Heading) {
    let point = rose.point(heading);
    println!(
        "  depth {} ({:>3} points): {:<8} {}",
        rose.depth(),
        rose.depth().point_count(),
        point.symbol(),
        point.name()
    );
}
