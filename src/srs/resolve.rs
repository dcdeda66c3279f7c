//! Parameter resolution: matching parse-tree parameters to table slots.
//!
//! A parse-tree parameter fills a slot when:
//!
//! 1. it carries an EPSG authority whose code equals the slot's code, or
//! 2. it carries no EPSG authority and its name equals the slot's name or
//!    alias, ignoring case.
//!
//! An EPSG authority code is authoritative: a parameter that has one is never
//! matched by name, so a mislabeled parameter with the right code still
//! resolves and a correctly named one with the wrong code does not.
//!
//! Matching is not exclusive. One parameter may fill several slots, and when
//! several parameters fill the same slot the last one in the definition wins.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::error::MissingParameterError;
use super::params::ParameterSpec;
use crate::base::Srid;
use crate::wkt::Parameter;

// ============================================================================
// RESOLVED PARAMETERS
// ============================================================================

/// A resolved parameter value together with its EPSG code.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedParameter {
    pub epsg_code: u32,
    pub value: f64,
}

/// Projection parameters keyed by semantic name, in table order.
///
/// Once a projected SRS is built this holds exactly the names its projection
/// kind declares.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProjectionParameters {
    entries: IndexMap<SmolStr, ResolvedParameter>,
}

impl ProjectionParameters {
    /// Look up a value by semantic name, ignoring case.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .get(name)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, resolved)| resolved)
            })
            .map(|resolved| resolved.value)
    }

    /// Look up a value by EPSG parameter code.
    pub fn get_by_code(&self, epsg_code: u32) -> Option<f64> {
        self.entries
            .values()
            .find(|resolved| resolved.epsg_code == epsg_code)
            .map(|resolved| resolved.value)
    }

    /// Iterate over `(name, epsg_code, value)` in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32, f64)> + '_ {
        self.entries
            .iter()
            .map(|(name, resolved)| (name.as_str(), resolved.epsg_code, resolved.value))
    }

    /// Semantic names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|name| name.as_str())
    }

    /// Number of resolved parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for projection kinds without a parameter table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the map in `specs` order.
    ///
    /// Returns `None` unless the entries are exactly the names of `specs`,
    /// each with its own EPSG code.
    #[cfg(feature = "serde")]
    pub(super) fn conform_to(&self, specs: &'static [ParameterSpec]) -> Option<Self> {
        if self.entries.len() != specs.len() {
            return None;
        }
        let mut conformed = Self::default();
        for spec in specs {
            let resolved = self.entries.get(spec.name)?;
            if resolved.epsg_code != spec.epsg_code {
                return None;
            }
            conformed.insert(spec, resolved.value);
        }
        Some(conformed)
    }

    fn insert(&mut self, spec: &ParameterSpec, value: f64) {
        self.entries.insert(
            SmolStr::new_static(spec.name),
            ResolvedParameter {
                epsg_code: spec.epsg_code,
                value,
            },
        );
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// Fill every required slot from the parse-tree parameters.
///
/// Returns an error naming the first required parameter (in table order)
/// that nothing matched. No partial map is returned.
pub fn resolve(
    srid: Srid,
    parameters: &[Parameter],
    required: &'static [ParameterSpec],
) -> Result<ProjectionParameters, MissingParameterError> {
    let codes: Vec<String> = required.iter().map(|spec| spec.epsg_code.to_string()).collect();
    let mut slots: Vec<Option<f64>> = vec![None; required.len()];

    for param in parameters {
        for ((spec, code), slot) in required.iter().zip(&codes).zip(slots.iter_mut()) {
            if slot_matches(spec, code, param) {
                tracing::trace!(
                    %srid,
                    slot = spec.name,
                    epsg_code = spec.epsg_code,
                    value = param.value,
                    "resolved projection parameter"
                );
                *slot = Some(param.value);
            }
        }
    }

    let mut resolved = ProjectionParameters::default();
    for (spec, slot) in required.iter().zip(slots) {
        match slot {
            Some(value) => resolved.insert(spec, value),
            None => {
                tracing::debug!(
                    %srid,
                    name = spec.name,
                    epsg_code = spec.epsg_code,
                    "missing projection parameter"
                );
                return Err(MissingParameterError {
                    srid,
                    name: spec.name,
                    epsg_code: spec.epsg_code,
                });
            }
        }
    }

    Ok(resolved)
}

fn slot_matches(spec: &ParameterSpec, code: &str, param: &Parameter) -> bool {
    match &param.authority {
        Some(authority) if authority.is_epsg() => authority.code.eq_ignore_ascii_case(code),
        _ => spec.matches_name(&param.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::ProjectionKind;
    use crate::wkt::Authority;

    const SRID: Srid = Srid::new(32632);

    fn tm() -> &'static [ParameterSpec] {
        ProjectionKind::TransverseMercator.parameter_specs()
    }

    fn utm_by_name() -> Vec<Parameter> {
        vec![
            Parameter::new("latitude_of_origin", 0.0),
            Parameter::new("central_meridian", 9.0),
            Parameter::new("scale_factor", 0.9996),
            Parameter::new("false_easting", 500000.0),
            Parameter::new("false_northing", 0.0),
        ]
    }

    #[test]
    fn test_resolve_by_name() {
        let resolved = resolve(SRID, &utm_by_name(), tm()).unwrap();
        assert_eq!(resolved.len(), 5);
        assert_eq!(resolved.get("central_meridian"), Some(9.0));
        assert_eq!(resolved.get("false_easting"), Some(500000.0));
        assert_eq!(resolved.get_by_code(8805), Some(0.9996));
    }

    #[test]
    fn test_zero_is_a_valid_value() {
        let resolved = resolve(SRID, &utm_by_name(), tm()).unwrap();
        assert_eq!(resolved.get("latitude_of_origin"), Some(0.0));
        assert_eq!(resolved.get("false_northing"), Some(0.0));
    }

    #[test]
    fn test_epsg_code_beats_name() {
        let mut params = utm_by_name();
        params[2] = Parameter::new("wrong_name", 0.9996).with_authority(Authority::epsg(8805));
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.get("scale_factor"), Some(0.9996));
    }

    #[test]
    fn test_epsg_code_disables_name_match() {
        let mut params = utm_by_name();
        // Right name, but the code belongs to a different parameter.
        params[2] = Parameter::new("scale_factor", 0.9996).with_authority(Authority::epsg(8815));
        let err = resolve(SRID, &params, tm()).unwrap_err();
        assert_eq!(err.name, "scale_factor");
        assert_eq!(err.epsg_code, 8805);
    }

    #[test]
    fn test_non_epsg_authority_falls_back_to_name() {
        let mut params = utm_by_name();
        params[1] = Parameter::new("Central_Meridian", 15.0)
            .with_authority(Authority::new("ESRI", "100002"));
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.get("central_meridian"), Some(15.0));
    }

    #[test]
    fn test_name_match_ignores_case() {
        let mut params = utm_by_name();
        params[0] = Parameter::new("Latitude_Of_Origin", 12.5);
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.get("latitude_of_origin"), Some(12.5));
        assert_eq!(resolved.get("LATITUDE_OF_ORIGIN"), Some(12.5));
    }

    #[test]
    fn test_alias_match() {
        let params = vec![
            Parameter::new("latitude_of_origin", 0.0),
            Parameter::new("central_meridian", 0.0),
            Parameter::new("standard_parallel1", 30.0),
            Parameter::new("STANDARD_PARALLEL2", 60.0),
            Parameter::new("false_easting", 0.0),
            Parameter::new("false_northing", 0.0),
        ];
        let required = ProjectionKind::AlbersEqualArea.parameter_specs();
        let resolved = resolve(SRID, &params, required).unwrap();
        assert_eq!(resolved.get("standard_parallel_1"), Some(30.0));
        assert_eq!(resolved.get("standard_parallel_2"), Some(60.0));
    }

    #[test]
    fn test_missing_parameter_is_reported() {
        let params: Vec<_> = utm_by_name()
            .into_iter()
            .filter(|p| p.name != "scale_factor")
            .collect();
        let err = resolve(SRID, &params, tm()).unwrap_err();
        assert_eq!(
            err,
            MissingParameterError {
                srid: SRID,
                name: "scale_factor",
                epsg_code: 8805
            }
        );
    }

    #[test]
    fn test_first_missing_in_table_order() {
        let params = vec![Parameter::new("false_northing", 0.0)];
        let err = resolve(SRID, &params, tm()).unwrap_err();
        assert_eq!(err.name, "latitude_of_origin");
        assert_eq!(err.epsg_code, 8801);
    }

    #[test]
    fn test_unrelated_parameters_are_ignored() {
        let mut params = utm_by_name();
        params.push(Parameter::new("rectified_grid_angle", 45.0));
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.len(), 5);
        assert_eq!(resolved.get("rectified_grid_angle"), None);
    }

    #[test]
    fn test_last_match_wins() {
        let mut params = utm_by_name();
        params.push(Parameter::new("central_meridian", 15.0));
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.get("central_meridian"), Some(15.0));
    }

    #[test]
    fn test_empty_requirements_always_resolve() {
        let resolved = resolve(SRID, &utm_by_name(), &[]).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_iteration_follows_table_order() {
        let mut params = utm_by_name();
        params.reverse();
        let resolved = resolve(SRID, &params, tm()).unwrap();
        let names: Vec<_> = resolved.names().collect();
        assert_eq!(
            names,
            [
                "latitude_of_origin",
                "central_meridian",
                "scale_factor",
                "false_easting",
                "false_northing"
            ]
        );
        let codes: Vec<_> = resolved.iter().map(|(_, code, _)| code).collect();
        assert_eq!(codes, [8801, 8802, 8805, 8806, 8807]);
    }

    static SHARED_CODE: [ParameterSpec; 2] =
        [ParameterSpec::new("a", 1), ParameterSpec::new("b", 1)];
    static SHARED_NAME: [ParameterSpec; 2] = [
        ParameterSpec::new("shared", 1),
        ParameterSpec::new("other", 2).with_alias("SHARED"),
    ];

    #[test]
    fn test_one_parameter_fills_several_slots() {
        let by_code = [Parameter::new("x", 3.0).with_authority(Authority::epsg(1))];
        let resolved = resolve(SRID, &by_code, &SHARED_CODE).unwrap();
        let entries: Vec<_> = resolved.iter().collect();
        assert_eq!(entries, [("a", 1, 3.0), ("b", 1, 3.0)]);

        let by_name = [Parameter::new("Shared", 7.5)];
        let resolved = resolve(SRID, &by_name, &SHARED_NAME).unwrap();
        assert_eq!(resolved.get("shared"), Some(7.5));
        assert_eq!(resolved.get("other"), Some(7.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_conform_to_checks_names_and_codes() {
        let mut params = utm_by_name();
        params.reverse();
        let resolved = resolve(SRID, &params, tm()).unwrap();
        assert_eq!(resolved.conform_to(tm()), Some(resolved.clone()));

        let fewer = resolve(SRID, &utm_by_name(), &tm()[..4]).unwrap();
        assert_eq!(fewer.conform_to(tm()), None);
        assert_eq!(resolved.conform_to(&tm()[..4]), None);

        let mut wrong_code = ProjectionParameters::default();
        for spec in tm() {
            wrong_code.insert(&ParameterSpec::new(spec.name, spec.epsg_code + 1), 0.0);
        }
        assert_eq!(wrong_code.conform_to(tm()), None);
    }
}
