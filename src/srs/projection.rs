//! Projection kinds and EPSG method dispatch.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::params::{self, ParameterSpec};
use crate::wkt::Authority;

/// The projection method of a projected SRS.
///
/// `Unknown` covers definitions whose `PROJECTION` clause has no EPSG
/// authority or names a method this crate does not interpret. Such systems
/// are still valid; they just carry no projection parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionKind {
    #[default]
    Unknown,
    PopularVisualisationPseudoMercator,
    LambertAzimuthalEqualAreaSpherical,
    EquidistantCylindrical,
    EquidistantCylindricalSpherical,
    KrovakNorthOrientated,
    KrovakModified,
    KrovakModifiedNorthOrientated,
    LambertConicConformal2spMichigan,
    ColombiaUrban,
    LambertConicConformal1sp,
    LambertConicConformal2sp,
    LambertConicConformal2spBelgium,
    MercatorVariantA,
    MercatorVariantB,
    CassiniSoldner,
    TransverseMercator,
    TransverseMercatorSouthOrientated,
    ObliqueStereographic,
    PolarStereographicVariantA,
    NewZealandMapGrid,
    HotineObliqueMercatorVariantA,
    LabordeObliqueMercator,
    HotineObliqueMercatorVariantB,
    TunisiaMiningGrid,
    LambertConicNearConformal,
    AmericanPolyconic,
    Krovak,
    LambertAzimuthalEqualArea,
    AlbersEqualArea,
    TransverseMercatorZonedGridSystem,
    LambertConicConformalWestOrientated,
    BonneSouthOrientated,
    PolarStereographicVariantB,
    PolarStereographicVariantC,
    GuamProjection,
    ModifiedAzimuthalEquidistant,
    HyperbolicCassiniSoldner,
    LambertCylindricalEqualAreaSpherical,
    LambertCylindricalEqualArea,
}

/// EPSG method code index, built once from [`ProjectionKind::ALL`].
static BY_EPSG_CODE: LazyLock<FxHashMap<u32, ProjectionKind>> = LazyLock::new(|| {
    ProjectionKind::ALL
        .iter()
        .filter_map(|&kind| kind.epsg_code().map(|code| (code, kind)))
        .collect()
});

impl ProjectionKind {
    /// Every interpreted projection method, in EPSG code order.
    pub const ALL: [ProjectionKind; 39] = [
        ProjectionKind::PopularVisualisationPseudoMercator,
        ProjectionKind::LambertAzimuthalEqualAreaSpherical,
        ProjectionKind::EquidistantCylindrical,
        ProjectionKind::EquidistantCylindricalSpherical,
        ProjectionKind::KrovakNorthOrientated,
        ProjectionKind::KrovakModified,
        ProjectionKind::KrovakModifiedNorthOrientated,
        ProjectionKind::LambertConicConformal2spMichigan,
        ProjectionKind::ColombiaUrban,
        ProjectionKind::LambertConicConformal1sp,
        ProjectionKind::LambertConicConformal2sp,
        ProjectionKind::LambertConicConformal2spBelgium,
        ProjectionKind::MercatorVariantA,
        ProjectionKind::MercatorVariantB,
        ProjectionKind::CassiniSoldner,
        ProjectionKind::TransverseMercator,
        ProjectionKind::TransverseMercatorSouthOrientated,
        ProjectionKind::ObliqueStereographic,
        ProjectionKind::PolarStereographicVariantA,
        ProjectionKind::NewZealandMapGrid,
        ProjectionKind::HotineObliqueMercatorVariantA,
        ProjectionKind::LabordeObliqueMercator,
        ProjectionKind::HotineObliqueMercatorVariantB,
        ProjectionKind::TunisiaMiningGrid,
        ProjectionKind::LambertConicNearConformal,
        ProjectionKind::AmericanPolyconic,
        ProjectionKind::Krovak,
        ProjectionKind::LambertAzimuthalEqualArea,
        ProjectionKind::AlbersEqualArea,
        ProjectionKind::TransverseMercatorZonedGridSystem,
        ProjectionKind::LambertConicConformalWestOrientated,
        ProjectionKind::BonneSouthOrientated,
        ProjectionKind::PolarStereographicVariantB,
        ProjectionKind::PolarStereographicVariantC,
        ProjectionKind::GuamProjection,
        ProjectionKind::ModifiedAzimuthalEquidistant,
        ProjectionKind::HyperbolicCassiniSoldner,
        ProjectionKind::LambertCylindricalEqualAreaSpherical,
        ProjectionKind::LambertCylindricalEqualArea,
    ];

    /// The EPSG coordinate operation method code, `None` for `Unknown`.
    pub const fn epsg_code(&self) -> Option<u32> {
        use ProjectionKind::*;

        let code = match self {
            Unknown => return None,
            PopularVisualisationPseudoMercator => 1024,
            LambertAzimuthalEqualAreaSpherical => 1027,
            EquidistantCylindrical => 1028,
            EquidistantCylindricalSpherical => 1029,
            KrovakNorthOrientated => 1041,
            KrovakModified => 1042,
            KrovakModifiedNorthOrientated => 1043,
            LambertConicConformal2spMichigan => 1051,
            ColombiaUrban => 1052,
            LambertConicConformal1sp => 9801,
            LambertConicConformal2sp => 9802,
            LambertConicConformal2spBelgium => 9803,
            MercatorVariantA => 9804,
            MercatorVariantB => 9805,
            CassiniSoldner => 9806,
            TransverseMercator => 9807,
            TransverseMercatorSouthOrientated => 9808,
            ObliqueStereographic => 9809,
            PolarStereographicVariantA => 9810,
            NewZealandMapGrid => 9811,
            HotineObliqueMercatorVariantA => 9812,
            LabordeObliqueMercator => 9813,
            HotineObliqueMercatorVariantB => 9815,
            TunisiaMiningGrid => 9816,
            LambertConicNearConformal => 9817,
            AmericanPolyconic => 9818,
            Krovak => 9819,
            LambertAzimuthalEqualArea => 9820,
            AlbersEqualArea => 9822,
            TransverseMercatorZonedGridSystem => 9824,
            LambertConicConformalWestOrientated => 9826,
            BonneSouthOrientated => 9828,
            PolarStereographicVariantB => 9829,
            PolarStereographicVariantC => 9830,
            GuamProjection => 9831,
            ModifiedAzimuthalEquidistant => 9832,
            HyperbolicCassiniSoldner => 9833,
            LambertCylindricalEqualAreaSpherical => 9834,
            LambertCylindricalEqualArea => 9835,
        };
        Some(code)
    }

    /// The EPSG method name.
    pub const fn name(&self) -> &'static str {
        use ProjectionKind::*;

        match self {
            Unknown => "Unknown projection",
            PopularVisualisationPseudoMercator => "Popular Visualisation Pseudo Mercator",
            LambertAzimuthalEqualAreaSpherical => "Lambert Azimuthal Equal Area (Spherical)",
            EquidistantCylindrical => "Equidistant Cylindrical",
            EquidistantCylindricalSpherical => "Equidistant Cylindrical (Spherical)",
            KrovakNorthOrientated => "Krovak (North Orientated)",
            KrovakModified => "Krovak Modified",
            KrovakModifiedNorthOrientated => "Krovak Modified (North Orientated)",
            LambertConicConformal2spMichigan => "Lambert Conic Conformal (2SP Michigan)",
            ColombiaUrban => "Colombia Urban",
            LambertConicConformal1sp => "Lambert Conic Conformal (1SP)",
            LambertConicConformal2sp => "Lambert Conic Conformal (2SP)",
            LambertConicConformal2spBelgium => "Lambert Conic Conformal (2SP Belgium)",
            MercatorVariantA => "Mercator (variant A)",
            MercatorVariantB => "Mercator (variant B)",
            CassiniSoldner => "Cassini-Soldner",
            TransverseMercator => "Transverse Mercator",
            TransverseMercatorSouthOrientated => "Transverse Mercator (South Orientated)",
            ObliqueStereographic => "Oblique Stereographic",
            PolarStereographicVariantA => "Polar Stereographic (variant A)",
            NewZealandMapGrid => "New Zealand Map Grid",
            HotineObliqueMercatorVariantA => "Hotine Oblique Mercator (variant A)",
            LabordeObliqueMercator => "Laborde Oblique Mercator",
            HotineObliqueMercatorVariantB => "Hotine Oblique Mercator (variant B)",
            TunisiaMiningGrid => "Tunisia Mining Grid",
            LambertConicNearConformal => "Lambert Conic Near-Conformal",
            AmericanPolyconic => "American Polyconic",
            Krovak => "Krovak",
            LambertAzimuthalEqualArea => "Lambert Azimuthal Equal Area",
            AlbersEqualArea => "Albers Equal Area",
            TransverseMercatorZonedGridSystem => "Transverse Mercator Zoned Grid System",
            LambertConicConformalWestOrientated => "Lambert Conic Conformal (West Orientated)",
            BonneSouthOrientated => "Bonne (South Orientated)",
            PolarStereographicVariantB => "Polar Stereographic (variant B)",
            PolarStereographicVariantC => "Polar Stereographic (variant C)",
            GuamProjection => "Guam Projection",
            ModifiedAzimuthalEquidistant => "Modified Azimuthal Equidistant",
            HyperbolicCassiniSoldner => "Hyperbolic Cassini-Soldner",
            LambertCylindricalEqualAreaSpherical => "Lambert Cylindrical Equal Area (Spherical)",
            LambertCylindricalEqualArea => "Lambert Cylindrical Equal Area",
        }
    }

    /// The mandatory parameters of this projection, in resolution order.
    pub fn parameter_specs(&self) -> &'static [ParameterSpec] {
        params::specs_for(*self)
    }

    /// Look up an EPSG method code. Unrecognized codes map to `Unknown`.
    pub fn from_epsg_code(code: u32) -> Self {
        BY_EPSG_CODE
            .get(&code)
            .copied()
            .unwrap_or(ProjectionKind::Unknown)
    }

    /// Dispatch on the authority clause of a `PROJECTION`.
    pub fn from_authority(authority: Option<&Authority>) -> Self {
        match authority {
            Some(auth) => select_kind(&auth.name, &auth.code),
            None => ProjectionKind::Unknown,
        }
    }

    /// True when no parameter table applies.
    pub fn is_unknown(&self) -> bool {
        *self == ProjectionKind::Unknown
    }
}

impl fmt::Display for ProjectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a projection method authority to a projection kind.
///
/// Only EPSG authorities with an integer code are interpreted. Everything
/// else, including codes not in the table, is `Unknown`.
pub fn select_kind(authority_name: &str, authority_code: &str) -> ProjectionKind {
    if !authority_name.eq_ignore_ascii_case("EPSG") {
        tracing::debug!(authority = authority_name, "projection authority is not EPSG");
        return ProjectionKind::Unknown;
    }

    match authority_code.trim().parse::<u32>() {
        Ok(code) => {
            let kind = ProjectionKind::from_epsg_code(code);
            if kind.is_unknown() {
                tracing::debug!(code, "unrecognized EPSG projection method");
            }
            kind
        }
        Err(_) => {
            tracing::debug!(code = authority_code, "EPSG projection method code is not an integer");
            ProjectionKind::Unknown
        }
    }
}
