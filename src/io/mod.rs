//! Plain-text instance and solution formats.
//!
//! An instance file is whitespace-separated integers: the skip penalty
//! first, then one `id x y` triple per city. Token scanning stops at the
//! first non-integer token, so trailing commentary after the data is
//! ignored. A solution file carries a `cost visited` header line followed
//! by one original city id per line, in visit order, without the closing
//! repeat.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Result, SolverError};
use crate::models::{City, ProblemInstance};
use crate::solver::SolverResult;

/// Parses an instance from its text form.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] when the penalty is missing, a
/// city triple is incomplete, or a city id is negative.
///
/// # Examples
///
/// ```
/// use penalty_tsp::io::parse_instance;
///
/// let instance = parse_instance("10\n1 0 0\n2 3 4\n").unwrap();
/// assert_eq!(instance.penalty(), 10);
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.city(1).id(), 2);
/// ```
pub fn parse_instance(text: &str) -> Result<ProblemInstance> {
    let mut values: Vec<i64> = Vec::new();
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => break,
        }
    }

    let Some((&penalty, rest)) = values.split_first() else {
        return Err(SolverError::InvalidInput(
            "missing penalty value".to_string(),
        ));
    };
    if rest.len() % 3 != 0 {
        return Err(SolverError::InvalidInput(format!(
            "incomplete city record: {} trailing value(s)",
            rest.len() % 3
        )));
    }

    let mut cities = Vec::with_capacity(rest.len() / 3);
    for triple in rest.chunks_exact(3) {
        let id = usize::try_from(triple[0]).map_err(|_| {
            SolverError::InvalidInput(format!("negative city id {}", triple[0]))
        })?;
        cities.push(City::new(id, triple[1] as f64, triple[2] as f64));
    }
    Ok(ProblemInstance::new(cities, penalty))
}

/// Renders a solution: `cost visited` on the first line, then the original
/// id of each visited city in tour order. The closing repeat of the first
/// city, when present, is dropped.
pub fn format_solution(result: &SolverResult, instance: &ProblemInstance) -> String {
    let mut tour = result.tour.as_slice();
    if tour.len() > 1 && tour.first() == tour.last() {
        tour = &tour[..tour.len() - 1];
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", result.cost, tour.len());
    for &idx in tour {
        let _ = writeln!(out, "{}", instance.city(idx).id());
    }
    out
}

/// Reads and parses an instance file.
pub fn read_instance<P: AsRef<Path>>(path: P) -> Result<ProblemInstance> {
    parse_instance(&fs::read_to_string(path)?)
}

/// Writes a solution file next to wherever the caller points.
pub fn write_solution<P: AsRef<Path>>(
    path: P,
    result: &SolverResult,
    instance: &ProblemInstance,
) -> Result<()> {
    fs::write(path, format_solution(result, instance))?;
    Ok(())
}
