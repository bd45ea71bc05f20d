//! Command line definition
//!
//! Shared by the binary and the command tests.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the geobuffer command line parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geobuffer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Compute geodesic bounding squares and circle approximations for map overlays")
        .arg(
            Arg::new("shape")
                .help("Shape to compute")
                .required(true)
                .value_parser(["bbox", "square", "circle"])
                .index(1),
        )
        .arg(
            Arg::new("center")
                .long("center")
                .help("Center point as 'lat,lon' in degrees")
                .value_name("LAT,LON")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .visible_alias("radius")
                .help("Distance from the center in kilometers (circle radius or square extent)")
                .value_name("KM")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("intervals")
                .short('n')
                .long("intervals")
                .help("Number of points approximating a circle")
                .value_name("N")
                .required(false),
        )
        .arg(
            Arg::new("projection")
                .short('p')
                .long("projection")
                .help("Projection: none, identity, mercator or layer")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("zoom")
                .long("zoom")
                .help("Zoom level for the layer projection")
                .value_name("ZOOM")
                .required(false),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .help("Pixel origin 'x,y' subtracted from layer points")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (csv, json, geojson)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file, defaults to stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Settings file overriding the built-in defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
