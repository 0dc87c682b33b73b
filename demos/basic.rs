use sphere_nav::GeoPoint;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <from> <to>", args[0]);
        eprintln!("Example: {} \"51°28.2'N 000°27.3'W\" \"40°38.5'N 073°46.7'W\"", args[0]);
        std::process::exit(1);
    }

    let from: GeoPoint = args[1].parse()?;
    let to: GeoPoint = args[2].parse()?;

    println!("=== Great Circle ===");
    println!("From: {from}");
    println!("To: {to}");
    println!("Distance: {:.1} NM", from.distance(&to));
    println!("Initial bearing: {:.1}°", from.bearing(&to));
    println!("Final bearing: {:.1}°", from.final_bearing(&to));
    println!("Midpoint: {}", from.midpoint(&to));
    println!("Highest latitude: {:.2}°", from.max_lat(from.bearing(&to)));

    println!("\n=== Rhumb Line ===");
    println!("Distance: {:.1} NM", from.rhumb_distance(&to));
    println!("Bearing: {:.1}°", from.rhumb_bearing(&to));

    Ok(())
}
