//! Parsing from many threads at once.
//!
//! The parameter table and method index are shared, read-only statics; this
//! checks that concurrent callers see identical results.

use rayon::prelude::*;
use srs::{ProjectionKind, Srid, parse_wkt};

const UTM_TEMPLATE: &str = r#"PROJCS["UTM",GEOGCS["WGS 84",DATUM["WGS 84",SPHEROID["WGS 84",6378137,298.257223563]],PRIMEM["Greenwich",0],UNIT["degree",0.017453292519943278]],PROJECTION["Transverse Mercator",AUTHORITY["EPSG","9807"]],PARAMETER["latitude_of_origin",0],PARAMETER["central_meridian",{cm}],PARAMETER["scale_factor",0.9996],PARAMETER["false_easting",500000],PARAMETER["false_northing",0],UNIT["metre",1]]"#;

#[test]
fn test_parallel_parse_of_utm_zones() {
    let results: Vec<_> = (1u32..=60)
        .into_par_iter()
        .map(|zone| {
            let cm = -183.0 + 6.0 * zone as f64;
            let text = UTM_TEMPLATE.replace("{cm}", &cm.to_string());
            (zone, cm, parse_wkt(Srid::new(32600 + zone), &text))
        })
        .collect();

    assert_eq!(results.len(), 60);
    for (zone, cm, result) in results {
        let srs = result.unwrap_or_else(|e| panic!("zone {}: {}", zone, e));
        let p = srs.as_projected().expect("projected");
        assert_eq!(p.projection_kind(), ProjectionKind::TransverseMercator);
        assert_eq!(p.parameter("central_meridian"), Some(cm));
    }
}

#[test]
fn test_parallel_failures_carry_their_own_srid() {
    let text = UTM_TEMPLATE
        .replace("{cm}", "9")
        .replace(r#"PARAMETER["scale_factor",0.9996],"#, "");

    (0u32..200).into_par_iter().for_each(|i| {
        let err = parse_wkt(Srid::new(i), &text).unwrap_err();
        assert_eq!(err.srid(), Srid::new(i));
    });
}
