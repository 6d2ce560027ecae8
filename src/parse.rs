//! Reader for the `{{r0, c0}, {r1, c1}, ...}` chain format.
//!
//! Whitespace is allowed around every brace and comma, so both the compact
//! `{{2,3},{3,4}}` and a file ending in a newline are accepted.

use std::fs;
use std::path::Path;

use nom::{
    character::complete::{char, multispace0, u64 as magnitude},
    combinator::{all_consuming, cut, map, opt},
    error::{context, ErrorKind, VerboseError, VerboseErrorKind},
    multi::separated_list0,
    sequence::{delimited, pair as both, preceded, separated_pair, terminated},
    IResult,
};

use crate::dims::Dims;
use crate::error::{ChainError, InvalidChain, Result};

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> Res<'a, O>
where
    F: FnMut(&'a str) -> Res<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// A `u64` magnitude with an optional minus sign, widened so that negative
/// values can be reported instead of rejected as bad syntax.
fn dimension(input: &str) -> Res<'_, i128> {
    context(
        "integer",
        map(both(opt(char('-')), magnitude), |(sign, v)| match sign {
            Some(_) => -i128::from(v),
            None => i128::from(v),
        }),
    )(input)
}

fn pair(input: &str) -> Res<'_, (i128, i128)> {
    preceded(
        terminated(char('{'), multispace0),
        cut(terminated(
            separated_pair(dimension, ws(char(',')), dimension),
            preceded(multispace0, char('}')),
        )),
    )(input)
}

fn chain(input: &str) -> Res<'_, Vec<(i128, i128)>> {
    all_consuming(delimited(
        ws(char('{')),
        separated_list0(ws(char(',')), pair),
        ws(char('}')),
    ))(input)
}

fn describe(text: &str, err: VerboseError<&str>) -> ChainError {
    let Some((rest, kind)) = err.errors.first() else {
        return ChainError::MalformedInput {
            offset: 0,
            reason: "unrecognised input".into(),
        };
    };
    let offset = text.len() - rest.len();
    let reason = match kind {
        VerboseErrorKind::Char(c) => format!("expected '{c}'"),
        VerboseErrorKind::Nom(ErrorKind::Eof) => "unexpected trailing input".into(),
        _ => err
            .errors
            .iter()
            .find_map(|(_, k)| match k {
                VerboseErrorKind::Context(ctx) => Some(format!("expected {ctx}")),
                _ => None,
            })
            .unwrap_or_else(|| format!("{kind:?}")),
    };
    ChainError::MalformedInput { offset, reason }
}

/// Parse a chain of matrix shapes.
///
/// `{}` yields an empty list; the solver rejects it later. Values that parse
/// but are not positive are reported as [`InvalidChain::NonPositive`].
pub fn parse_chain(text: &str) -> Result<Vec<Dims>> {
    let raw = match chain(text) {
        Ok((_, raw)) => raw,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => return Err(describe(text, e)),
        Err(nom::Err::Incomplete(_)) => {
            return Err(ChainError::MalformedInput {
                offset: text.len(),
                reason: "unexpected end of input".into(),
            })
        }
    };

    raw.into_iter()
        .enumerate()
        .map(|(matrix, (rows, cols))| {
            let positive = |value: i128| match u64::try_from(value) {
                Ok(v) if v > 0 => Ok(v),
                _ => Err(InvalidChain::NonPositive { matrix, value }),
            };
            Ok(Dims::new(positive(rows)?, positive(cols)?))
        })
        .collect()
}

/// Read and parse a chain file.
pub fn read_chain(path: impl AsRef<Path>) -> Result<Vec<Dims>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ChainError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dims = parse_chain(&text)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), matrices = dims.len(), "read chain");

    Ok(dims)
}
