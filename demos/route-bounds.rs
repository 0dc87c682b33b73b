use sphere_nav::{GeoBounds, GeoPoint};

fn main() {
    // Auckland, Nadi, Honolulu, Los Angeles
    let route = [
        GeoPoint::new(-37.0082, 174.7850),
        GeoPoint::new(-17.7553, 177.4431),
        GeoPoint::new(21.3187, -157.9225),
        GeoPoint::new(33.9416, -118.4085),
    ];

    let mut bounds = GeoBounds::empty();
    let mut total = 0.0;
    for (i, point) in route.iter().enumerate() {
        bounds.extend(point);
        if i > 0 {
            let leg = route[i - 1].distance(point);
            total += leg;
            println!("Leg {i}: {leg:.0} NM");
        }
    }

    println!("Total: {total:.0} NM");
    println!("Bounds: {bounds}");
    println!("Crosses antimeridian: {}", bounds.crosses_antimeridian());

    let span = bounds.span();
    println!("Span: {:.2}° lat x {:.2}° lng", span.lat, span.lng);
    if let Some(center) = bounds.center() {
        println!("Center: {center}");
    }
}
