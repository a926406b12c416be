//! Unit tests for mv-render.

#[cfg(test)]
mod helpers {
    use mv_network::MetroNetwork;

    pub fn kolkata() -> MetroNetwork {
        mv_network::kolkata::network().expect("bundled dataset is valid")
    }
}

// ── Layers ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layers {
    use mv_core::{GeoPoint, Rgb};
    use mv_network::{MetroNetworkBuilder, NetworkError};

    use crate::{MapLayers, RenderError};

    #[test]
    fn one_path_per_line_in_definition_order() {
        let net = super::helpers::kolkata();
        let layers = MapLayers::build(&net, "Esplanade", "Central").unwrap();

        let names: Vec<&str> = layers.lines.iter().map(|l| l.line.as_str()).collect();
        assert_eq!(names, vec!["Blue Line", "Green Line", "Purple Line", "Orange Line"]);

        let blue = &layers.lines[0];
        assert_eq!(blue.color, [0, 112, 192]);
        assert_eq!(blue.path.len(), 26);
        // [lon, lat] order, starting at Kavi Subhash.
        assert_eq!(blue.path[0], [88.3773, 22.4524]);
    }

    #[test]
    fn highlight_and_view() {
        let net = super::helpers::kolkata();
        let layers = MapLayers::build(&net, "Esplanade", "Central").unwrap();

        let hl = layers.highlight.expect("distinct stations get a highlight");
        assert_eq!(hl.color, Rgb::HIGHLIGHT.to_array());
        assert_eq!(hl.path, [[88.3140, 22.5625], [88.3100, 22.5725]]);

        assert!((layers.view.latitude - 22.5675).abs() < 1e-9);
        assert!((layers.view.longitude - 88.3120).abs() < 1e-9);
        assert_eq!(layers.view.zoom, 11.0);
        assert_eq!(layers.view.pitch, 45.0);
        assert_eq!(layers.view.bearing, 0.0);
    }

    #[test]
    fn same_station_has_no_highlight() {
        let net = super::helpers::kolkata();
        let layers = MapLayers::build(&net, "Joka", "Joka").unwrap();
        assert!(layers.highlight.is_none());
        assert_eq!(layers.view.latitude, 22.4450);
    }

    #[test]
    fn one_label_per_station() {
        let net = super::helpers::kolkata();
        let layers = MapLayers::build(&net, "Joka", "Central").unwrap();
        assert_eq!(layers.labels.len(), net.station_count());
        assert_eq!(layers.labels[0].name, "Kavi Subhash");
        assert_eq!(layers.labels[0].position, [88.3773, 22.4524]);
    }

    #[test]
    fn unresolved_stations_dropped_and_short_lines_omitted() {
        let mut b = MetroNetworkBuilder::new();
        b.add_station("a", GeoPoint::new(22.0, 88.0)).unwrap();
        b.add_station("b", GeoPoint::new(22.1, 88.1)).unwrap();
        b.add_line("Long", Rgb(1, 2, 3), ["a", "Ghost", "b"]).unwrap();
        b.add_line("Stub", Rgb(4, 5, 6), ["a", "Ghost"]).unwrap();
        let net = b.build();

        let layers = MapLayers::build(&net, "a", "b").unwrap();
        assert_eq!(layers.lines.len(), 1);
        assert_eq!(layers.lines[0].line, "Long");
        assert_eq!(layers.lines[0].path, vec![[88.0, 22.0], [88.1, 22.1]]);
    }

    #[test]
    fn unknown_station_errors() {
        let net = super::helpers::kolkata();
        let err = MapLayers::build(&net, "Atlantis", "Central").unwrap_err();
        assert!(matches!(err, RenderError::Network(NetworkError::UnknownStation(_))));
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use mv_network::{Connection, RouteResolver, Trip};

    use crate::TripSummary;

    fn trip(connection: Connection) -> Trip {
        Trip {
            source: "A".to_owned(),
            destination: "B".to_owned(),
            distance_km: 5.134,
            minutes: 10,
            connection,
        }
    }

    #[test]
    fn direct() {
        let t = trip(Connection::Direct(vec!["Blue Line".into(), "Red Line".into()]));
        assert_eq!(
            TripSummary::new(&t).to_string(),
            "Route: A → B\nDistance: 5.13 km\nTravel time: 10 minutes\nDirect: Blue Line, Red Line"
        );
    }

    #[test]
    fn interchange_lists_stations() {
        let t = trip(Connection::Interchange(vec!["X".into(), "Y".into()]));
        assert_eq!(
            TripSummary::new(&t).connection_line(),
            "No direct connection. Try changing at: X, Y"
        );
    }

    #[test]
    fn no_connection() {
        let t = trip(Connection::NoConnection);
        assert!(TripSummary::new(&t).to_string().ends_with("no single interchange found."));
    }

    #[test]
    fn same_station_collapses() {
        let t = trip(Connection::SameStation);
        assert_eq!(
            TripSummary::new(&t).to_string(),
            "Source and destination are the same station."
        );
    }

    #[test]
    fn resolved_kolkata_trip() {
        let net = super::helpers::kolkata();
        let t = RouteResolver::new(&net).resolve("Dakshineswar", "Howrah Maidan").unwrap();
        assert_eq!(
            TripSummary::new(&t).to_string(),
            "Route: Dakshineswar → Howrah Maidan\n\
             Distance: 5.13 km\n\
             Travel time: 10 minutes\n\
             No direct connection. Try changing at: Esplanade"
        );
    }
}

// ── Writers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod writers {
    use crate::csv::{LINE_PATHS_FILE, STATION_LABELS_FILE};
    use crate::json::JSON_FILE;
    use crate::{CsvWriter, JsonWriter, LayerWriter, MapLayers, RenderError};

    fn layers() -> MapLayers {
        let net = super::helpers::kolkata();
        MapLayers::build(&net, "Esplanade", "Central").unwrap()
    }

    #[test]
    fn json_document() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_layers(&layers()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(JSON_FILE)).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["lines"].as_array().unwrap().len(), 4);
        assert_eq!(doc["lines"][0]["line"], "Blue Line");
        assert_eq!(doc["lines"][0]["color"], serde_json::json!([0, 112, 192]));
        assert_eq!(doc["highlight"]["color"], serde_json::json!([0, 255, 0]));
        assert_eq!(doc["labels"].as_array().unwrap().len(), 48);
        assert_eq!(doc["view"]["zoom"], 11.0);
    }

    #[test]
    fn json_single_document_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        let l = layers();
        w.write_layers(&l).unwrap();
        assert!(matches!(w.write_layers(&l), Err(RenderError::AlreadyWritten(_))));
        assert_eq!(w.path(), dir.path().join(JSON_FILE));
    }

    #[test]
    fn json_write_after_finish() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_layers(&layers()), Err(RenderError::Finished)));
        // Finished wins over AlreadyWritten once the file is closed.
        let mut w = JsonWriter::new(dir.path()).unwrap();
        w.write_layers(&layers()).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_layers(&layers()), Err(RenderError::Finished)));
    }

    #[test]
    fn csv_tables() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_layers(&layers()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let paths = std::fs::read_to_string(dir.path().join(LINE_PATHS_FILE)).unwrap();
        let mut rows = paths.lines();
        assert_eq!(rows.next(), Some("line,r,g,b,seq,lon,lat"));
        assert_eq!(rows.next(), Some("Blue Line,0,112,192,0,88.3773,22.4524"));
        // 26 + 12 + 7 + 5 vertices.
        assert_eq!(paths.lines().count(), 1 + 50);

        let labels = std::fs::read_to_string(dir.path().join(STATION_LABELS_FILE)).unwrap();
        assert_eq!(labels.lines().next(), Some("name,lon,lat"));
        assert_eq!(labels.lines().count(), 1 + 48);
    }

    #[test]
    fn csv_write_after_finish() {
        let dir = tempfile::tempdir().unwrap();
        let l = layers();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_layers(&l).unwrap();
        w.finish().unwrap();
        assert!(matches!(w.write_layers(&l), Err(RenderError::Finished)));
        w.finish().unwrap();
        drop(w);

        let labels = std::fs::read_to_string(dir.path().join(STATION_LABELS_FILE)).unwrap();
        assert_eq!(labels.lines().count(), 1 + 48);
        let paths = std::fs::read_to_string(dir.path().join(LINE_PATHS_FILE)).unwrap();
        assert_eq!(paths.lines().count(), 1 + 50);
    }
}
