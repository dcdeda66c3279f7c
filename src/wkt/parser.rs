//! Pest-driven conversion of WKT text into a [`CoordinateSystem`] tree.

use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;
use smol_str::SmolStr;

use super::WktError;
use super::tree::{
    Authority, Axes, Axis, CoordinateSystem, Datum, GeographicCs, Parameter, PrimeMeridian,
    Projection, ProjectedCs, Spheroid, TowGs84, Unit,
};
use crate::base::{AxisDirection, LineCol};

#[derive(Parser)]
#[grammar = "wkt/wkt.pest"]
struct WktGrammar;

/// Parse a complete `GEOGCS[...]` or `PROJCS[...]` definition.
pub fn parse_coordinate_system(text: &str) -> Result<CoordinateSystem, WktError> {
    let mut pairs = WktGrammar::parse(Rule::coordinate_system, text).map_err(syntax_error)?;
    let root = pairs
        .next()
        .ok_or_else(|| WktError::new("empty definition"))?;

    let cs = root
        .into_inner()
        .next()
        .ok_or_else(|| WktError::new("missing coordinate system"))?;

    match cs.as_rule() {
        Rule::projected_cs => projected_cs(cs).map(CoordinateSystem::Projected),
        Rule::geographic_cs => geographic_cs(cs).map(CoordinateSystem::Geographic),
        _ => Err(unexpected(&cs)),
    }
}

// ============================================================================
// Error conversion
// ============================================================================

fn syntax_error(err: pest::error::Error<Rule>) -> WktError {
    let position = LineCol::from(&err.line_col);
    WktError::new(err.variant.message().into_owned()).at(position)
}

fn pair_position(pair: &Pair<'_, Rule>) -> LineCol {
    pair.as_span().start_pos().into()
}

fn unexpected(pair: &Pair<'_, Rule>) -> WktError {
    WktError::new(format!("unexpected {:?} clause", pair.as_rule())).at(pair_position(pair))
}

// ============================================================================
// Pair helpers
// ============================================================================

fn expect<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Result<Pair<'i, Rule>, WktError> {
    match pairs.next() {
        Some(pair) if pair.as_rule() == rule => Ok(pair),
        Some(pair) => Err(WktError::new(format!(
            "expected {:?}, found {:?}",
            rule,
            pair.as_rule()
        ))
        .at(pair_position(&pair))),
        None => Err(WktError::new(format!("expected {:?}", rule))),
    }
}

/// Consume the next pair only if it matches `rule`.
fn optional<'i>(pairs: &mut Pairs<'i, Rule>, rule: Rule) -> Option<Pair<'i, Rule>> {
    match pairs.peek() {
        Some(pair) if pair.as_rule() == rule => pairs.next(),
        _ => None,
    }
}

fn quoted(pairs: &mut Pairs<'_, Rule>) -> Result<SmolStr, WktError> {
    let pair = expect(pairs, Rule::quoted_text)?;
    // quoted_text always wraps exactly one text pair, possibly empty.
    Ok(pair
        .into_inner()
        .next()
        .map(|inner| SmolStr::new(inner.as_str()))
        .unwrap_or_default())
}

fn number(pairs: &mut Pairs<'_, Rule>) -> Result<f64, WktError> {
    let pair = expect(pairs, Rule::number)?;
    pair.as_str().parse::<f64>().map_err(|e| {
        WktError::new(format!("invalid number '{}': {}", pair.as_str(), e)).at(pair_position(&pair))
    })
}

fn trailing_authority(pairs: &mut Pairs<'_, Rule>) -> Result<Option<Authority>, WktError> {
    optional(pairs, Rule::authority).map(authority).transpose()
}

// ============================================================================
// Clauses
// ============================================================================

fn authority(pair: Pair<'_, Rule>) -> Result<Authority, WktError> {
    let mut inner = pair.into_inner();
    let name = quoted(&mut inner)?;
    let code = quoted(&mut inner)?;
    Ok(Authority { name, code })
}

fn spheroid(pair: Pair<'_, Rule>) -> Result<Spheroid, WktError> {
    let mut inner = pair.into_inner();
    Ok(Spheroid {
        name: quoted(&mut inner)?,
        semi_major_axis: number(&mut inner)?,
        inverse_flattening: number(&mut inner)?,
        authority: trailing_authority(&mut inner)?,
    })
}

fn towgs84(pair: Pair<'_, Rule>) -> Result<TowGs84, WktError> {
    let values = pair
        .into_inner()
        .map(|p| {
            p.as_str().parse::<f64>().map_err(|e| {
                WktError::new(format!("invalid number '{}': {}", p.as_str(), e))
                    .at(pair_position(&p))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TowGs84::from_values(&values))
}

fn datum(pair: Pair<'_, Rule>) -> Result<Datum, WktError> {
    let mut inner = pair.into_inner();
    let name = quoted(&mut inner)?;
    let spheroid = spheroid(expect(&mut inner, Rule::spheroid)?)?;
    let towgs84 = optional(&mut inner, Rule::towgs84).map(towgs84).transpose()?;
    Ok(Datum {
        name,
        spheroid,
        towgs84,
        authority: trailing_authority(&mut inner)?,
    })
}

fn prime_meridian(pair: Pair<'_, Rule>) -> Result<PrimeMeridian, WktError> {
    let mut inner = pair.into_inner();
    Ok(PrimeMeridian {
        name: quoted(&mut inner)?,
        longitude: number(&mut inner)?,
        authority: trailing_authority(&mut inner)?,
    })
}

fn unit(pair: Pair<'_, Rule>) -> Result<Unit, WktError> {
    let mut inner = pair.into_inner();
    Ok(Unit {
        name: quoted(&mut inner)?,
        conversion_factor: number(&mut inner)?,
        authority: trailing_authority(&mut inner)?,
    })
}

fn axis(pair: Pair<'_, Rule>) -> Result<Axis, WktError> {
    let mut inner = pair.into_inner();
    let name = quoted(&mut inner)?;
    let keyword = expect(&mut inner, Rule::axis_direction)?;
    let direction = AxisDirection::from_keyword(keyword.as_str()).ok_or_else(|| {
        WktError::new(format!("invalid axis direction '{}'", keyword.as_str()))
            .at(pair_position(&keyword))
    })?;
    Ok(Axis { name, direction })
}

fn axes(pair: Pair<'_, Rule>) -> Result<Axes, WktError> {
    let mut inner = pair.into_inner();
    let x = axis(expect(&mut inner, Rule::axis)?)?;
    let y = axis(expect(&mut inner, Rule::axis)?)?;
    Ok(Axes { x, y })
}

fn geographic_cs(pair: Pair<'_, Rule>) -> Result<GeographicCs, WktError> {
    let mut inner = pair.into_inner();
    let name = quoted(&mut inner)?;
    let datum = datum(expect(&mut inner, Rule::datum)?)?;
    let prime_meridian = prime_meridian(expect(&mut inner, Rule::prime_meridian)?)?;
    let angular_unit = unit(expect(&mut inner, Rule::unit)?)?;
    let axes = optional(&mut inner, Rule::axes).map(axes).transpose()?;
    Ok(GeographicCs {
        name,
        datum,
        prime_meridian,
        angular_unit,
        axes,
        authority: trailing_authority(&mut inner)?,
    })
}

fn projection(pair: Pair<'_, Rule>) -> Result<Projection, WktError> {
    let mut inner = pair.into_inner();
    Ok(Projection {
        name: quoted(&mut inner)?,
        authority: trailing_authority(&mut inner)?,
    })
}

fn parameter(pair: Pair<'_, Rule>) -> Result<Parameter, WktError> {
    let mut inner = pair.into_inner();
    Ok(Parameter {
        name: quoted(&mut inner)?,
        value: number(&mut inner)?,
        authority: trailing_authority(&mut inner)?,
    })
}

fn projected_cs(pair: Pair<'_, Rule>) -> Result<ProjectedCs, WktError> {
    let mut inner = pair.into_inner();
    let name = quoted(&mut inner)?;
    let geographic_cs = geographic_cs(expect(&mut inner, Rule::geographic_cs)?)?;
    let projection = projection(expect(&mut inner, Rule::projection)?)?;

    let mut parameters = Vec::new();
    while let Some(p) = optional(&mut inner, Rule::parameter) {
        parameters.push(parameter(p)?);
    }

    let linear_unit = unit(expect(&mut inner, Rule::unit)?)?;
    let axes = optional(&mut inner, Rule::axes).map(axes).transpose()?;
    Ok(ProjectedCs {
        name,
        geographic_cs,
        projection,
        parameters,
        linear_unit,
        axes,
        authority: trailing_authority(&mut inner)?,
    })
}
