//! Geohash Demo - Encode, decode, neighbours and coverage
//!
//! Run with: cargo run --example demo

use std::collections::BTreeSet;

use geohash_core::{
    cover_bounding_box_optimal, decode, encode, encode_to_long, grid_around, height_degrees,
    neighbours, width_degrees, Accuracy, Coordinate,
};

fn main() {
    println!("=== Geohash Demo ===\n");

    // The White House, Washington DC
    let point = Coordinate::new(38.89710201881826, -77.03669792041183);
    println!("1. Point: {}", point);

    let hash = encode(point.latitude, point.longitude, 12).expect("Failed to encode");
    let long = encode_to_long(point.latitude, point.longitude, 12).expect("Failed to encode");
    println!("2. Encoded to geohash: {}", hash);
    println!("   Integer form: {:#018x}\n", long);

    println!("3. Coarser levels:");
    for accuracy in [Accuracy::About150km, Accuracy::About1km, Accuracy::About5m] {
        let length = accuracy.length();
        println!(
            "   {:?}: {} ({:.6}° x {:.6}°)",
            accuracy,
            accuracy.truncate(&hash),
            width_degrees(length),
            height_degrees(length)
        );
    }

    let centre = decode(&hash).expect("Failed to decode");
    println!("\n4. Decoded cell centre: {}\n", centre);

    let cell = Accuracy::About1km.truncate(&hash);
    let around = neighbours(cell).expect("Failed to find neighbours");
    println!("5. Neighbours of {}: {:?}", cell, around);

    let highlight: BTreeSet<String> = [cell.to_string()].into();
    let grid = grid_around(cell, 1, &highlight).expect("Failed to render grid");
    println!("\n{}", grid);

    // Schenectady, NY to Hartford, CT
    let coverage = cover_bounding_box_optimal(42.819581, -73.950691, 41.842967, -72.727175)
        .expect("Failed to cover bounding box");
    match coverage {
        Some(coverage) => println!("6. Bounding box covered by {}", coverage),
        None => println!("6. Bounding box needs too many hashes"),
    }

    println!("\n=== Demo Complete ===");
}
