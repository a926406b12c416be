//! Unit tests for mv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LineId, StationId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn line_id_overflow_rejected() {
        assert!(LineId::try_from(70_000usize).is_err());
    }

    #[test]
    fn ordering_follows_definition_order() {
        assert!(StationId(0) < StationId(1));
        assert!(LineId(3) > LineId(2));
    }

    #[test]
    fn display() {
        assert_eq!(StationId(7).to_string(), "StationId(7)");
        assert_eq!(LineId(1).to_string(), "LineId(1)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(22.5625, 88.3140);
        assert_eq!(p.distance_km(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(22.0, 88.0);
        let b = GeoPoint::new(23.0, 88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(22.4524, 88.3773);
        let b = GeoPoint::new(22.6500, 88.2880);
        assert_eq!(a.distance_km(b), b.distance_km(a));
    }

    #[test]
    fn city_scale_distance() {
        // Kavi Subhash → Dakshineswar
        let a = GeoPoint::new(22.4524, 88.3773);
        let b = GeoPoint::new(22.6500, 88.2880);
        let d = a.distance_km(b);
        assert!((d - 23.809).abs() < 0.01, "got {d}");
    }

    #[test]
    fn midpoint_and_lon_lat() {
        let a = GeoPoint::new(22.0, 88.0);
        let b = GeoPoint::new(23.0, 89.0);
        assert_eq!(a.midpoint(b), GeoPoint::new(22.5, 88.5));
        assert_eq!(a.lon_lat(), [88.0, 22.0]);
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(22.5625, 88.314).to_string(), "(22.5625, 88.3140)");
    }
}

#[cfg(test)]
mod color {
    use crate::Rgb;

    #[test]
    fn parse_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#0070C0").unwrap(), Rgb(0, 112, 192));
        assert_eq!(Rgb::from_hex("ffa500").unwrap(), Rgb(255, 165, 0));
        assert_eq!(" #FF00FF ".parse::<Rgb>().unwrap(), Rgb(255, 0, 255));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Rgb::from_hex("#0070C").is_err());
        assert!(Rgb::from_hex("#GG0000").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
        // Signs are not hex digits, even where a channel parser would take them.
        assert!(Rgb::from_hex("#+F+F+F").is_err());
        assert!(Rgb::from_hex("-0FF00").is_err());
        assert!(Rgb::from_hex("").is_err());
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Rgb(0, 112, 192).to_string(), "#0070C0");
        assert_eq!(Rgb::HIGHLIGHT.to_array(), [0, 255, 0]);
    }
}

#[cfg(test)]
mod travel {
    use crate::TravelModel;

    #[test]
    fn default_is_thirty_kmh() {
        let m = TravelModel::default();
        assert_eq!(m.avg_speed_kmh(), 30.0);
        assert_eq!(m.minutes_for(0.0), 0);
        assert_eq!(m.minutes_for(15.0), 30);
    }

    #[test]
    fn half_minutes_round_to_even() {
        let m = TravelModel::default();
        assert_eq!(m.minutes_for(0.25), 0); // 0.5 min
        assert_eq!(m.minutes_for(1.25), 2); // 2.5 min
        assert_eq!(m.minutes_for(1.75), 4); // 3.5 min
    }

    #[test]
    fn custom_speed() {
        let m = TravelModel::new(60.0).unwrap();
        assert_eq!(m.minutes_for(10.0), 10);
    }

    #[test]
    fn rejects_invalid_speed() {
        assert!(TravelModel::new(0.0).is_err());
        assert!(TravelModel::new(-5.0).is_err());
        assert!(TravelModel::new(f64::NAN).is_err());
        assert!(TravelModel::new(f64::INFINITY).is_err());
    }
}
