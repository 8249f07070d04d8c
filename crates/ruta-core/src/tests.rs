//! Unit tests for ruta-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, kmh_to_mps, mps_to_kmh};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(40.4168, -3.7038);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(40.0, -3.0);
        let b = GeoPoint::new(41.0, -4.0);
        assert_eq!(a.distance_m(b), b.distance_m(a));
        assert!(a.distance_m(b) > 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn hundredth_degree_of_longitude_at_equator() {
        // Used throughout the engine tests as a ~1112 m reference segment.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.01);
        let d = a.distance_m(b);
        assert!((d - 1_112.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn unit_conversions_roundtrip() {
        assert!((kmh_to_mps(36.0) - 10.0).abs() < 1e-12);
        assert!((mps_to_kmh(10.0) - 36.0).abs() < 1e-12);
        assert!((mps_to_kmh(kmh_to_mps(20.034)) - 20.034).abs() < 1e-12);
    }
}

#[cfg(test)]
mod polyline {
    use crate::{CoreError, GeoPoint, Polyline};

    fn two_point_line() -> Polyline {
        Polyline::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.01)]).unwrap()
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        assert!(matches!(
            Polyline::new(vec![]),
            Err(CoreError::DegenerateGeometry(0))
        ));
        assert!(matches!(
            Polyline::new(vec![GeoPoint::new(1.0, 2.0)]),
            Err(CoreError::DegenerateGeometry(1))
        ));
    }

    #[test]
    fn endpoints_and_total() {
        let line = two_point_line();
        assert_eq!(line.first(), GeoPoint::new(0.0, 0.0));
        assert_eq!(line.last(), GeoPoint::new(0.0, 0.01));
        assert_eq!(line.segment_count(), 1);
        assert!(line.total_m() > 1_100.0 && line.total_m() < 1_120.0);
    }

    #[test]
    fn position_at_zero_is_first_vertex() {
        let line = two_point_line();
        let (p, segment) = line.position_at(0.0);
        assert_eq!(p, line.first());
        assert_eq!(segment, 0);
    }

    #[test]
    fn position_at_total_is_last_vertex() {
        let line = two_point_line();
        let (p, segment) = line.position_at(line.total_m());
        assert_eq!(p, line.last());
        assert_eq!(segment, line.segment_count() - 1);
    }

    #[test]
    fn position_at_midpoint() {
        let line = two_point_line();
        let (p, segment) = line.position_at(line.total_m() / 2.0);
        assert_eq!(segment, 0);
        assert!((p.lat - 0.0).abs() < 1e-9);
        assert!((p.lon - 0.005).abs() < 1e-6);
    }

    #[test]
    fn clamps_out_of_range_targets() {
        let line = two_point_line();
        let (below, s0) = line.position_at(-50.0);
        assert_eq!(below, line.first());
        assert_eq!(s0, 0);

        let (above, s1) = line.position_at(line.total_m() + 50.0);
        assert_eq!(above, line.last());
        assert_eq!(s1, line.segment_count() - 1);
    }

    #[test]
    fn multi_segment_index_is_greatest_not_exceeding_target() {
        // Three equal ~1112 m segments heading east along the equator.
        let line = Polyline::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.0, 0.02),
            GeoPoint::new(0.0, 0.03),
        ])
        .unwrap();
        let third = line.total_m() / 3.0;

        let (_, s) = line.position_at(third * 0.5);
        assert_eq!(s, 0);
        let (_, s) = line.position_at(third * 1.5);
        assert_eq!(s, 1);
        // Exactly at a vertex boundary: the following segment owns it.
        let (p, s) = line.position_at(third);
        assert_eq!(s, 1);
        assert!((p.lon - 0.01).abs() < 1e-6);
    }

    #[test]
    fn skips_zero_length_segments() {
        // Duplicate consecutive vertex in the middle of the line.
        let line = Polyline::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.0, 0.02),
        ])
        .unwrap();

        let (p, segment) = line.position_at(line.total_m() * 0.75);
        assert_eq!(segment, 2);
        assert!(p.lon > 0.01 && p.lon < 0.02);
        assert!(p.lat.abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, SystemClock};

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.monotonic_secs();
        let b = clock.monotonic_secs();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_set_and_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.monotonic_secs(), 0.0);
        clock.set(10.0);
        assert_eq!(clock.monotonic_secs(), 10.0);
        clock.advance(0.2);
        assert!((clock.monotonic_secs() - 10.2).abs() < 1e-12);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        clock.advance(5.0);
        assert_eq!(handle.monotonic_secs(), 5.0);
    }
}
