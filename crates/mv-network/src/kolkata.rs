//! Bundled Kolkata Metro dataset.
//!
//! Four lines and 48 stations, compiled into the program.  Coordinates are
//! approximate (four decimal places).

use mv_core::{GeoPoint, Rgb};

use crate::network::{MetroNetwork, MetroNetworkBuilder};
use crate::NetworkResult;

/// `(name, colour, stations in physical order)`, in definition order.
pub const LINES: &[(&str, Rgb, &[&str])] = &[
    (
        "Blue Line",
        Rgb(0, 112, 192),
        &[
            "Kavi Subhash", "Shahid Khudiram", "Kavi Nazrul", "Gitanjali", "Masterda Surya Sen",
            "Netaji", "Mahanayak Uttam Kumar", "Rabindra Sarobar", "Kalighat", "Jatin Das Park",
            "Netaji Bhavan", "Rabindra Sadan", "Maidan", "Park Street", "Esplanade",
            "Chandni Chowk", "Central", "Mahatma Gandhi Road", "Girish Park",
            "Shobhabazar Sutanuti", "Shyambazar", "Belgachia", "Dumdum", "Noapara", "Baranagar",
            "Dakshineswar",
        ],
    ),
    (
        "Green Line",
        Rgb(0, 255, 0),
        &[
            "Salt Lake Sector V", "Karunamoyee", "Central Park", "City Centre", "Bengal Chemical",
            "Salt Lake Stadium", "Phoolbagan", "Sealdah", "Esplanade", "Mahakaran", "Howrah",
            "Howrah Maidan",
        ],
    ),
    (
        "Purple Line",
        Rgb(255, 0, 255),
        &[
            "Joka", "Thakurpukur", "Sakherbazar", "Behala Chowrasta", "Behala Bazar", "Taratala",
            "Majerhat",
        ],
    ),
    (
        "Orange Line",
        Rgb(255, 165, 0),
        &[
            "Kavi Subhash", "Satyajit Ray", "Jyotirindra Nandi", "Kavi Sukanta",
            "Hemanta Mukhopadhyay",
        ],
    ),
];

/// `(name, lat, lon)`, in definition order.
pub const STATIONS: &[(&str, f64, f64)] = &[
    // Blue Line
    ("Kavi Subhash", 22.4524, 88.3773),
    ("Shahid Khudiram", 22.4615, 88.3795),
    ("Kavi Nazrul", 22.4725, 88.3842),
    ("Gitanjali", 22.4850, 88.3857),
    ("Masterda Surya Sen", 22.4908, 88.3835),
    ("Netaji", 22.5010, 88.3728),
    ("Mahanayak Uttam Kumar", 22.5039, 88.3490),
    ("Rabindra Sarobar", 22.5030, 88.3375),
    ("Kalighat", 22.5123, 88.3310),
    ("Jatin Das Park", 22.5225, 88.3265),
    ("Netaji Bhavan", 22.5285, 88.3240),
    ("Rabindra Sadan", 22.5350, 88.3215),
    ("Maidan", 22.5450, 88.3190),
    ("Park Street", 22.5525, 88.3165),
    ("Esplanade", 22.5625, 88.3140),
    ("Chandni Chowk", 22.5675, 88.3120),
    ("Central", 22.5725, 88.3100),
    ("Mahatma Gandhi Road", 22.5780, 88.3080),
    ("Girish Park", 22.5835, 88.3060),
    ("Shobhabazar Sutanuti", 22.5900, 88.3040),
    ("Shyambazar", 22.5955, 88.3020),
    ("Belgachia", 22.6010, 88.3000),
    ("Dumdum", 22.6125, 88.2960),
    ("Noapara", 22.6250, 88.2920),
    ("Baranagar", 22.6355, 88.2900),
    ("Dakshineswar", 22.6500, 88.2880),
    // Green Line
    ("Salt Lake Sector V", 22.5795, 88.4310),
    ("Karunamoyee", 22.5820, 88.4190),
    ("Central Park", 22.5850, 88.4070),
    ("City Centre", 22.5880, 88.3950),
    ("Bengal Chemical", 22.5910, 88.3830),
    ("Salt Lake Stadium", 22.5940, 88.3710),
    ("Phoolbagan", 22.5970, 88.3590),
    ("Sealdah", 22.6000, 88.3470),
    ("Mahakaran", 22.6030, 88.3350),
    ("Howrah", 22.6060, 88.3230),
    ("Howrah Maidan", 22.6090, 88.3110),
    // Purple Line
    ("Joka", 22.4450, 88.3050),
    ("Thakurpukur", 22.4550, 88.3100),
    ("Sakherbazar", 22.4650, 88.3150),
    ("Behala Chowrasta", 22.4750, 88.3200),
    ("Behala Bazar", 22.4850, 88.3250),
    ("Taratala", 22.4950, 88.3300),
    ("Majerhat", 22.5050, 88.3350),
    // Orange Line
    ("Satyajit Ray", 22.4580, 88.3840),
    ("Jyotirindra Nandi", 22.4630, 88.3860),
    ("Kavi Sukanta", 22.4680, 88.3880),
    ("Hemanta Mukhopadhyay", 22.4730, 88.3900),
];

/// Build the bundled network.
pub fn network() -> NetworkResult<MetroNetwork> {
    let mut b = MetroNetworkBuilder::with_capacity(STATIONS.len(), LINES.len());
    for &(name, lat, lon) in STATIONS {
        b.add_station(name, GeoPoint::new(lat, lon))?;
    }
    for &(name, color, stations) in LINES {
        b.add_line(name, color, stations.iter().copied())?;
    }
    Ok(b.build())
}
