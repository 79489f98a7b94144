use serde::{Deserialize, Serialize};

/// A Chicken Nation outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Free-form opening hours ("08h00 - 23h00").
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub delivery_available: bool,
    #[serde(default = "default_true")]
    pub pickup_available: bool,
    #[serde(default)]
    pub table_available: bool,
}

fn default_true() -> bool {
    true
}

impl Restaurant {
    /// Great-circle distance in kilometres, when the outlet has coordinates.
    pub fn distance_km(&self, latitude: f64, longitude: f64) -> Option<f64> {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let (lat, lon) = (self.latitude?, self.longitude?);
        let d_lat = (lat - latitude).to_radians();
        let d_lon = (lon - longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + latitude.to_radians().cos() * lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        Some(2.0 * EARTH_RADIUS_KM * a.sqrt().asin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet(latitude: Option<f64>, longitude: Option<f64>) -> Restaurant {
        serde_json::from_value(serde_json::json!({
            "id": "r1",
            "name": "Cocody",
            "latitude": latitude,
            "longitude": longitude,
        }))
        .unwrap()
    }

    #[test]
    fn distance_between_abidjan_outlets() {
        // Cocody to Plateau, roughly 5 km.
        let d = outlet(Some(5.3600), Some(-3.9900)).distance_km(5.3200, -4.0200).unwrap();
        assert!((4.0..6.5).contains(&d), "got {}", d);
        assert_eq!(outlet(Some(5.36), Some(-3.99)).distance_km(5.36, -3.99), Some(0.0));
    }

    #[test]
    fn no_coordinates_no_distance() {
        assert_eq!(outlet(None, Some(-3.99)).distance_km(5.36, -3.99), None);
    }

    #[test]
    fn defaults_for_optional_flags() {
        let r = outlet(None, None);
        assert!(r.active && r.delivery_available && r.pickup_available);
        assert!(!r.table_available);
    }
}
