//! Point structures for geographic and projected coordinates

/// A geographic position on the sphere, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, expected within [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, expected within [-180, 180]
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new geographic point
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Whether both components lie inside the valid degree ranges
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// The point as a `[lat, lon]` pair
    pub fn as_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// The point as a `[lon, lat]` pair
    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for GeoPoint {
    /// Interprets the pair as `[lat, lon]`
    fn from(pair: [f64; 2]) -> Self {
        GeoPoint::new(pair[0], pair[1])
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        GeoPoint::new(lat, lon)
    }
}

/// A point in screen, layer or projected map coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl ProjectedPoint {
    /// Create a new projected point
    pub fn new(x: f64, y: f64) -> Self {
        ProjectedPoint { x, y }
    }

    /// The point as an `[x, y]` pair
    pub fn as_pair(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for ProjectedPoint {
    fn from(pair: [f64; 2]) -> Self {
        ProjectedPoint::new(pair[0], pair[1])
    }
}
