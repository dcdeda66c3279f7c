//! Projection parameter table.
//!
//! Every projection kind lists the parameters it needs, in the order a
//! resolved [`ProjectionParameters`](super::ProjectionParameters) map keeps
//! them. All listed parameters are mandatory. Names are the WKT parameter
//! names and EPSG codes are coordinate operation parameter codes.

use super::ProjectionKind;

/// One required projection parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterSpec {
    /// Semantic (WKT) name, also the key in the resolved map.
    pub name: &'static str,
    /// EPSG coordinate operation parameter code.
    pub epsg_code: u32,
    /// Alternate spelling accepted when matching by name.
    pub alias: Option<&'static str>,
}

impl ParameterSpec {
    pub const fn new(name: &'static str, epsg_code: u32) -> Self {
        Self {
            name,
            epsg_code,
            alias: None,
        }
    }

    /// A second accepted name, matched like the primary one.
    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Whether `name` is this parameter's name or alias, ignoring case.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.alias.is_some_and(|alias| alias.eq_ignore_ascii_case(name))
    }
}

// ============================================================================
// PARAMETERS BY EPSG CODE
// ============================================================================

const C1: ParameterSpec = ParameterSpec::new("c1", 1026);
const C2: ParameterSpec = ParameterSpec::new("c2", 1027);
const C3: ParameterSpec = ParameterSpec::new("c3", 1028);
const C4: ParameterSpec = ParameterSpec::new("c4", 1029);
const C5: ParameterSpec = ParameterSpec::new("c5", 1030);
const C6: ParameterSpec = ParameterSpec::new("c6", 1031);
const C7: ParameterSpec = ParameterSpec::new("c7", 1032);
const C8: ParameterSpec = ParameterSpec::new("c8", 1033);
const C9: ParameterSpec = ParameterSpec::new("c9", 1034);
const C10: ParameterSpec = ParameterSpec::new("c10", 1035);
const CO_LATITUDE_OF_CONE_AXIS: ParameterSpec = ParameterSpec::new("azimuth", 1036);
const ELLIPSOID_SCALING_FACTOR: ParameterSpec = ParameterSpec::new("ellipsoid_scale_factor", 1038);
const PROJECTION_PLANE_ORIGIN_HEIGHT: ParameterSpec =
    ParameterSpec::new("projection_plane_height_at_origin", 1039);
const ORDINATE_1_OF_EVALUATION_POINT: ParameterSpec =
    ParameterSpec::new("evaluation_point_ordinate_1", 8617);
const ORDINATE_2_OF_EVALUATION_POINT: ParameterSpec =
    ParameterSpec::new("evaluation_point_ordinate_2", 8618);
const LATITUDE_OF_NATURAL_ORIGIN: ParameterSpec = ParameterSpec::new("latitude_of_origin", 8801);
const LONGITUDE_OF_NATURAL_ORIGIN: ParameterSpec = ParameterSpec::new("central_meridian", 8802);
const SCALE_FACTOR_AT_NATURAL_ORIGIN: ParameterSpec = ParameterSpec::new("scale_factor", 8805);
const FALSE_EASTING: ParameterSpec = ParameterSpec::new("false_easting", 8806);
const FALSE_NORTHING: ParameterSpec = ParameterSpec::new("false_northing", 8807);
const LATITUDE_OF_PROJECTION_CENTRE: ParameterSpec = ParameterSpec::new("latitude_of_center", 8811);
const LONGITUDE_OF_PROJECTION_CENTRE: ParameterSpec =
    ParameterSpec::new("longitude_of_center", 8812);
const AZIMUTH_OF_INITIAL_LINE: ParameterSpec = ParameterSpec::new("azimuth", 8813);
const ANGLE_FROM_RECTIFIED_TO_SKEW_GRID: ParameterSpec =
    ParameterSpec::new("rectified_grid_angle", 8814);
const SCALE_FACTOR_ON_INITIAL_LINE: ParameterSpec = ParameterSpec::new("scale_factor", 8815);
const EASTING_AT_PROJECTION_CENTRE: ParameterSpec = ParameterSpec::new("false_easting", 8816);
const NORTHING_AT_PROJECTION_CENTRE: ParameterSpec = ParameterSpec::new("false_northing", 8817);
const LATITUDE_OF_PSEUDO_STANDARD_PARALLEL: ParameterSpec =
    ParameterSpec::new("pseudo_standard_parallel_1", 8818);
const SCALE_FACTOR_ON_PSEUDO_STANDARD_PARALLEL: ParameterSpec =
    ParameterSpec::new("scale_factor", 8819);
const LATITUDE_OF_FALSE_ORIGIN: ParameterSpec = ParameterSpec::new("latitude_of_origin", 8821);
const LONGITUDE_OF_FALSE_ORIGIN: ParameterSpec = ParameterSpec::new("central_meridian", 8822);
const LATITUDE_OF_1ST_STANDARD_PARALLEL: ParameterSpec =
    ParameterSpec::new("standard_parallel_1", 8823).with_alias("standard_parallel1");
const LATITUDE_OF_2ND_STANDARD_PARALLEL: ParameterSpec =
    ParameterSpec::new("standard_parallel_2", 8824).with_alias("standard_parallel2");
const EASTING_AT_FALSE_ORIGIN: ParameterSpec = ParameterSpec::new("false_easting", 8826);
const NORTHING_AT_FALSE_ORIGIN: ParameterSpec = ParameterSpec::new("false_northing", 8827);
const INITIAL_LONGITUDE: ParameterSpec = ParameterSpec::new("initial_longitude", 8830);
const ZONE_WIDTH: ParameterSpec = ParameterSpec::new("zone_width", 8831);
const LATITUDE_OF_STANDARD_PARALLEL: ParameterSpec = ParameterSpec::new("standard_parallel", 8832);
const LONGITUDE_OF_ORIGIN: ParameterSpec = ParameterSpec::new("longitude_of_center", 8833);

// ============================================================================
// PARAMETER LISTS
// ============================================================================

/// Natural origin, no scale factor.
const NATURAL_ORIGIN: &[ParameterSpec] = &[
    LATITUDE_OF_NATURAL_ORIGIN,
    LONGITUDE_OF_NATURAL_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
];

/// Natural origin with a scale factor.
const NATURAL_ORIGIN_SCALED: &[ParameterSpec] = &[
    LATITUDE_OF_NATURAL_ORIGIN,
    LONGITUDE_OF_NATURAL_ORIGIN,
    SCALE_FACTOR_AT_NATURAL_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
];

/// A standard parallel replaces the latitude of origin.
const STANDARD_PARALLEL_ORIGIN: &[ParameterSpec] = &[
    LATITUDE_OF_1ST_STANDARD_PARALLEL,
    LONGITUDE_OF_NATURAL_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
];

/// Two standard parallels around a false origin.
const FALSE_ORIGIN_TWO_PARALLELS: &[ParameterSpec] = &[
    LATITUDE_OF_FALSE_ORIGIN,
    LONGITUDE_OF_FALSE_ORIGIN,
    LATITUDE_OF_1ST_STANDARD_PARALLEL,
    LATITUDE_OF_2ND_STANDARD_PARALLEL,
    EASTING_AT_FALSE_ORIGIN,
    NORTHING_AT_FALSE_ORIGIN,
];

const KROVAK: &[ParameterSpec] = &[
    LATITUDE_OF_PROJECTION_CENTRE,
    LONGITUDE_OF_ORIGIN,
    CO_LATITUDE_OF_CONE_AXIS,
    LATITUDE_OF_PSEUDO_STANDARD_PARALLEL,
    SCALE_FACTOR_ON_PSEUDO_STANDARD_PARALLEL,
    FALSE_EASTING,
    FALSE_NORTHING,
];

const KROVAK_MODIFIED: &[ParameterSpec] = &[
    LATITUDE_OF_PROJECTION_CENTRE,
    LONGITUDE_OF_ORIGIN,
    CO_LATITUDE_OF_CONE_AXIS,
    LATITUDE_OF_PSEUDO_STANDARD_PARALLEL,
    SCALE_FACTOR_ON_PSEUDO_STANDARD_PARALLEL,
    FALSE_EASTING,
    FALSE_NORTHING,
    ORDINATE_1_OF_EVALUATION_POINT,
    ORDINATE_2_OF_EVALUATION_POINT,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    C10,
];

const LAMBERT_CONIC_CONFORMAL_2SP_MICHIGAN: &[ParameterSpec] = &[
    LATITUDE_OF_FALSE_ORIGIN,
    LONGITUDE_OF_FALSE_ORIGIN,
    LATITUDE_OF_1ST_STANDARD_PARALLEL,
    LATITUDE_OF_2ND_STANDARD_PARALLEL,
    EASTING_AT_FALSE_ORIGIN,
    NORTHING_AT_FALSE_ORIGIN,
    ELLIPSOID_SCALING_FACTOR,
];

const COLOMBIA_URBAN: &[ParameterSpec] = &[
    LATITUDE_OF_NATURAL_ORIGIN,
    LONGITUDE_OF_NATURAL_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
    PROJECTION_PLANE_ORIGIN_HEIGHT,
];

const HOTINE_OBLIQUE_MERCATOR_A: &[ParameterSpec] = &[
    LATITUDE_OF_PROJECTION_CENTRE,
    LONGITUDE_OF_PROJECTION_CENTRE,
    AZIMUTH_OF_INITIAL_LINE,
    ANGLE_FROM_RECTIFIED_TO_SKEW_GRID,
    SCALE_FACTOR_ON_INITIAL_LINE,
    FALSE_EASTING,
    FALSE_NORTHING,
];

const LABORDE_OBLIQUE_MERCATOR: &[ParameterSpec] = &[
    LATITUDE_OF_PROJECTION_CENTRE,
    LONGITUDE_OF_PROJECTION_CENTRE,
    AZIMUTH_OF_INITIAL_LINE,
    SCALE_FACTOR_ON_INITIAL_LINE,
    FALSE_EASTING,
    FALSE_NORTHING,
];

const HOTINE_OBLIQUE_MERCATOR_B: &[ParameterSpec] = &[
    LATITUDE_OF_PROJECTION_CENTRE,
    LONGITUDE_OF_PROJECTION_CENTRE,
    AZIMUTH_OF_INITIAL_LINE,
    ANGLE_FROM_RECTIFIED_TO_SKEW_GRID,
    SCALE_FACTOR_ON_INITIAL_LINE,
    EASTING_AT_PROJECTION_CENTRE,
    NORTHING_AT_PROJECTION_CENTRE,
];

const TUNISIA_MINING_GRID: &[ParameterSpec] = &[
    LATITUDE_OF_FALSE_ORIGIN,
    LONGITUDE_OF_FALSE_ORIGIN,
    EASTING_AT_FALSE_ORIGIN,
    NORTHING_AT_FALSE_ORIGIN,
];

const TRANSVERSE_MERCATOR_ZONED: &[ParameterSpec] = &[
    LATITUDE_OF_NATURAL_ORIGIN,
    INITIAL_LONGITUDE,
    ZONE_WIDTH,
    SCALE_FACTOR_AT_NATURAL_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
];

const POLAR_STEREOGRAPHIC_B: &[ParameterSpec] = &[
    LATITUDE_OF_STANDARD_PARALLEL,
    LONGITUDE_OF_ORIGIN,
    FALSE_EASTING,
    FALSE_NORTHING,
];

const POLAR_STEREOGRAPHIC_C: &[ParameterSpec] = &[
    LATITUDE_OF_STANDARD_PARALLEL,
    LONGITUDE_OF_ORIGIN,
    EASTING_AT_FALSE_ORIGIN,
    NORTHING_AT_FALSE_ORIGIN,
];

/// The required parameters of a projection kind.
pub(crate) fn specs_for(kind: ProjectionKind) -> &'static [ParameterSpec] {
    use ProjectionKind::*;

    match kind {
        Unknown => &[],
        PopularVisualisationPseudoMercator
        | LambertAzimuthalEqualAreaSpherical
        | CassiniSoldner
        | NewZealandMapGrid
        | AmericanPolyconic
        | LambertAzimuthalEqualArea
        | BonneSouthOrientated
        | GuamProjection
        | ModifiedAzimuthalEquidistant
        | HyperbolicCassiniSoldner => NATURAL_ORIGIN,
        LambertConicConformal1sp
        | MercatorVariantA
        | TransverseMercator
        | TransverseMercatorSouthOrientated
        | ObliqueStereographic
        | PolarStereographicVariantA
        | LambertConicNearConformal
        | LambertConicConformalWestOrientated => NATURAL_ORIGIN_SCALED,
        EquidistantCylindrical
        | EquidistantCylindricalSpherical
        | MercatorVariantB
        | LambertCylindricalEqualAreaSpherical
        | LambertCylindricalEqualArea => STANDARD_PARALLEL_ORIGIN,
        LambertConicConformal2sp | LambertConicConformal2spBelgium | AlbersEqualArea => {
            FALSE_ORIGIN_TWO_PARALLELS
        }
        Krovak | KrovakNorthOrientated => KROVAK,
        KrovakModified | KrovakModifiedNorthOrientated => KROVAK_MODIFIED,
        LambertConicConformal2spMichigan => LAMBERT_CONIC_CONFORMAL_2SP_MICHIGAN,
        ColombiaUrban => COLOMBIA_URBAN,
        HotineObliqueMercatorVariantA => HOTINE_OBLIQUE_MERCATOR_A,
        LabordeObliqueMercator => LABORDE_OBLIQUE_MERCATOR,
        HotineObliqueMercatorVariantB => HOTINE_OBLIQUE_MERCATOR_B,
        TunisiaMiningGrid => TUNISIA_MINING_GRID,
        TransverseMercatorZonedGridSystem => TRANSVERSE_MERCATOR_ZONED,
        PolarStereographicVariantB => POLAR_STEREOGRAPHIC_B,
        PolarStereographicVariantC => POLAR_STEREOGRAPHIC_C,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_unknown_has_no_parameters() {
        assert!(specs_for(ProjectionKind::Unknown).is_empty());
    }

    #[test]
    fn test_names_and_codes_unique_within_kind() {
        for kind in ProjectionKind::ALL {
            let specs = specs_for(kind);
            let names: FxHashSet<_> = specs.iter().map(|s| s.name).collect();
            let codes: FxHashSet<_> = specs.iter().map(|s| s.epsg_code).collect();
            assert_eq!(names.len(), specs.len(), "duplicate name in {:?}", kind);
            assert_eq!(codes.len(), specs.len(), "duplicate code in {:?}", kind);
        }
    }

    #[test]
    fn test_every_known_kind_has_parameters() {
        for kind in ProjectionKind::ALL {
            assert!(!specs_for(kind).is_empty(), "{:?} has no parameters", kind);
        }
    }

    #[rstest]
    #[case(
        ProjectionKind::TransverseMercator,
        &[
            "latitude_of_origin",
            "central_meridian",
            "scale_factor",
            "false_easting",
            "false_northing",
        ]
    )]
    #[case(
        ProjectionKind::AlbersEqualArea,
        &[
            "latitude_of_origin",
            "central_meridian",
            "standard_parallel_1",
            "standard_parallel_2",
            "false_easting",
            "false_northing",
        ]
    )]
    #[case(
        ProjectionKind::PolarStereographicVariantB,
        &[
            "standard_parallel",
            "longitude_of_center",
            "false_easting",
            "false_northing",
        ]
    )]
    #[case(
        ProjectionKind::TransverseMercatorZonedGridSystem,
        &[
            "latitude_of_origin",
            "initial_longitude",
            "zone_width",
            "scale_factor",
            "false_easting",
            "false_northing",
        ]
    )]
    #[case(
        ProjectionKind::ColombiaUrban,
        &[
            "latitude_of_origin",
            "central_meridian",
            "false_easting",
            "false_northing",
            "projection_plane_height_at_origin",
        ]
    )]
    fn test_parameter_order(#[case] kind: ProjectionKind, #[case] expected: &[&str]) {
        let names: Vec<_> = specs_for(kind).iter().map(|s| s.name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_krovak_modified_has_nineteen_parameters() {
        assert_eq!(specs_for(ProjectionKind::KrovakModified).len(), 19);
        assert_eq!(specs_for(ProjectionKind::KrovakModifiedNorthOrientated).len(), 19);
    }

    #[test]
    fn test_standard_parallel_aliases() {
        assert!(LATITUDE_OF_1ST_STANDARD_PARALLEL.matches_name("Standard_Parallel1"));
        assert!(LATITUDE_OF_2ND_STANDARD_PARALLEL.matches_name("standard_parallel_2"));
        assert!(!LATITUDE_OF_1ST_STANDARD_PARALLEL.matches_name("standard_parallel2"));
        assert!(!FALSE_EASTING.matches_name("false_northing"));
    }
}
