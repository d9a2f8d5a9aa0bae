//! Haversine great-circle distance.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `(lat, lng)` coordinate
/// pairs in degrees, by the haversine formula.
///
/// # Examples
///
/// ```
/// use delivery_router::distance::haversine_km;
///
/// let kyiv = (50.4501, 30.5234);
/// assert_eq!(haversine_km(kyiv, kyiv), 0.0);
///
/// // One degree of longitude along the equator.
/// let d = haversine_km((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111.195).abs() < 0.01);
/// ```
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lng1) = a;
    let (lat2, lng2) = b;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
