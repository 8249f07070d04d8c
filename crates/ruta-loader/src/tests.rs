//! Unit tests for ruta-loader (wire parsing and selection; no network).

#[cfg(test)]
mod records {
    use crate::records::RouteRecord;

    /// A trimmed-down `GET /routes` element as the backend actually serves
    /// it, including fields the loader ignores.
    const ROUTE_JSON: &str = r#"{
        "name": "Ruta Parque-Museo",
        "description": "De Parque a Museo",
        "difficulty": 2,
        "popularity": 3,
        "points": [
            {"nodeName": "Parque", "lat": 4.60971, "lng": -74.08175, "type": "interest"},
            {"nodeName": "Puente", "lat": 4.61200, "lng": -74.07900, "type": "control", "risk": 3},
            {"nodeName": "Museo",  "lat": 4.61520, "lng": -74.06990, "type": "interest"}
        ],
        "graph": {"Parque": {"Puente": 450}},
        "distance": 1650,
        "risk": 1.0,
        "created_at": "2025-03-14T10:00:00"
    }"#;

    #[test]
    fn parses_backend_route() {
        let record: RouteRecord = serde_json::from_str(ROUTE_JSON).unwrap();
        assert_eq!(record.name, "Ruta Parque-Museo");
        assert_eq!(record.points.len(), 3);
        assert_eq!(record.distance, 1650.0);
        assert_eq!(record.points[1].node_name, "Puente");
        assert_eq!(record.points[1].kind, "control");
        assert_eq!(record.points[1].risk, Some(3));
        assert_eq!(record.points[0].risk, None);
    }

    #[test]
    fn waypoints_preserve_order_and_axes() {
        let record: RouteRecord = serde_json::from_str(ROUTE_JSON).unwrap();
        let waypoints = record.waypoints();
        assert_eq!(waypoints.len(), 3);
        assert_eq!(waypoints[0].lat, 4.60971);
        assert_eq!(waypoints[0].lon, -74.08175);
        assert_eq!(waypoints[2].lat, 4.61520);
    }

    #[test]
    fn missing_optional_fields_default() {
        let minimal = r#"{"name": "x", "points": []}"#;
        let record: RouteRecord = serde_json::from_str(minimal).unwrap();
        assert_eq!(record.distance, 0.0);
        assert_eq!(record.difficulty, 0);
        assert!(record.description.is_empty());
    }
}

#[cfg(test)]
mod selection {
    use crate::error::LoaderError;
    use crate::records::RouteRecord;
    use crate::storage::select_route;

    fn routes() -> Vec<RouteRecord> {
        serde_json::from_str(
            r#"[
                {"name": "RouteA", "points": [], "distance": 100},
                {"name": "RouteB", "points": [], "distance": 200}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn selects_by_exact_name() {
        let record = select_route(routes(), "RouteB").unwrap();
        assert_eq!(record.distance, 200.0);
    }

    #[test]
    fn missing_name_is_route_not_found() {
        let result = select_route(routes(), "RouteC");
        assert!(matches!(result, Err(LoaderError::RouteNotFound(name)) if name == "RouteC"));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        assert!(select_route(routes(), "routea").is_err());
    }
}

#[cfg(test)]
mod ors {
    use crate::error::LoaderError;
    use crate::ors::{OrsResponse, polyline_from_response};

    const DIRECTIONS_JSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"summary": {"distance": 1650.2, "duration": 396.0}},
            "geometry": {
                "type": "LineString",
                "coordinates": [
                    [-74.08175, 4.60971],
                    [-74.07900, 4.61200],
                    [-74.06990, 4.61520]
                ]
            }
        }]
    }"#;

    #[test]
    fn coordinates_are_longitude_first() {
        let response: OrsResponse = serde_json::from_str(DIRECTIONS_JSON).unwrap();
        let line = polyline_from_response(response).unwrap();
        // lat must come from the second element of each pair.
        assert_eq!(line.first().lat, 4.60971);
        assert_eq!(line.first().lon, -74.08175);
        assert_eq!(line.points().len(), 3);
        assert!(line.total_m() > 0.0);
    }

    #[test]
    fn empty_feature_list_is_a_payload_error() {
        let response: OrsResponse =
            serde_json::from_str(r#"{"features": []}"#).unwrap();
        assert!(matches!(
            polyline_from_response(response),
            Err(LoaderError::Payload(_))
        ));
    }

    #[test]
    fn single_coordinate_is_degenerate() {
        let response: OrsResponse = serde_json::from_str(
            r#"{"features": [{"geometry": {"coordinates": [[-74.0, 4.6]]}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            polyline_from_response(response),
            Err(LoaderError::Core(_))
        ));
    }
}

#[cfg(test)]
mod totals {
    use ruta_core::{GeoPoint, Polyline};

    use crate::error::LoaderError;
    use crate::loader::resolve_total;

    fn line() -> Polyline {
        Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)]).unwrap()
    }

    #[test]
    fn backend_distance_wins_when_positive() {
        assert_eq!(resolve_total("r", 1650.0, &line()).unwrap(), 1650.0);
    }

    #[test]
    fn falls_back_to_polyline_length() {
        let geometry = line();
        let total = resolve_total("r", 0.0, &geometry).unwrap();
        assert_eq!(total, geometry.total_m());
        assert!(total > 0.0);
    }

    #[test]
    fn zero_length_fallback_fails_the_load() {
        // Duplicate vertices form a valid polyline of zero total length; the
        // load must fail rather than hand the engine a zero route total.
        let degenerate =
            Polyline::new(vec![GeoPoint::new(4.6, -74.0), GeoPoint::new(4.6, -74.0)]).unwrap();
        assert!(matches!(
            resolve_total("r", 0.0, &degenerate),
            Err(LoaderError::ZeroLengthGeometry(name)) if name == "r"
        ));
    }
}
