use crate::grid::Grid;
use thiserror::Error;

/// Cells of empty space kept beyond the largest placed coordinate.
pub const PLACEMENT_PADDING: usize = 10;

/// Largest grid side an explicit placement list may require.
pub const MAX_DYNAMIC_SIZE: usize = 10_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("No placements given")]
    Empty,
    #[error("Invalid coordinate '{token}': expected a non-negative integer")]
    InvalidNumber { token: String },
    #[error("Malformed range '{token}': expected A:B")]
    MalformedRange { token: String },
    #[error("Reversed range {min}:{max}: lower bound must not exceed upper bound")]
    ReversedRange { min: usize, max: usize },
    #[error("Malformed placement '{spec}': expected X,Y")]
    MalformedSpec { spec: String },
    #[error("Coordinate {coordinate} needs a grid larger than {} cells", MAX_DYNAMIC_SIZE)]
    TooLarge { coordinate: usize },
}

/// Inclusive span of coordinates along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub min: usize,
    pub max: usize,
}

impl Span {
    pub fn single(value: usize) -> Self {
        Self { min: value, max: value }
    }

    pub fn range(min: usize, max: usize) -> Result<Self, PlacementError> {
        if min > max {
            return Err(PlacementError::ReversedRange { min, max });
        }
        Ok(Self { min, max })
    }

    fn parse(token: &str) -> Result<Self, PlacementError> {
        match token.split_once(':') {
            None => Ok(Self::single(parse_coordinate(token)?)),
            Some((lo, hi)) => {
                if lo.is_empty() || hi.is_empty() || hi.contains(':') {
                    return Err(PlacementError::MalformedRange { token: token.to_string() });
                }
                Self::range(parse_coordinate(lo)?, parse_coordinate(hi)?)
            }
        }
    }
}

/// A rectangle of cells to bring alive: `x` selects columns, `y` selects rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: Span,
    pub y: Span,
}

impl Placement {
    /// Largest coordinate referenced on either axis.
    pub fn extent(&self) -> usize {
        self.x.max.max(self.y.max)
    }

    fn parse(spec: &str) -> Result<Self, PlacementError> {
        let (x, y) = spec
            .split_once(',')
            .filter(|(_, y)| !y.contains(','))
            .ok_or_else(|| PlacementError::MalformedSpec { spec: spec.to_string() })?;

        Ok(Self {
            x: Span::parse(x)?,
            y: Span::parse(y)?,
        })
    }
}

fn parse_coordinate(token: &str) -> Result<usize, PlacementError> {
    token
        .parse::<usize>()
        .map_err(|_| PlacementError::InvalidNumber { token: token.to_string() })
}

/// Parses `X,Y` or `[X,Y], [X,Y], ...` where each of X and Y is an integer
/// or an inclusive `A:B` range.
pub fn parse_placements(raw: &str) -> Result<Vec<Placement>, PlacementError> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(PlacementError::Empty);
    }

    let inner = match compact.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .ok_or_else(|| PlacementError::MalformedSpec { spec: compact.clone() })?,
        // A list of several specs must be bracketed
        None if compact.contains("],[") => {
            return Err(PlacementError::MalformedSpec { spec: compact.clone() });
        }
        None => compact.as_str(),
    };

    inner
        .split("],[")
        .map(|spec| {
            if spec.contains('[') || spec.contains(']') {
                return Err(PlacementError::MalformedSpec { spec: spec.to_string() });
            }
            Placement::parse(spec)
        })
        .collect()
}

/// Side length of the smallest square grid holding every placement plus padding.
/// Fails when that side would exceed `MAX_DYNAMIC_SIZE`.
pub fn compute_dynamic_size(placements: &[Placement]) -> Result<usize, PlacementError> {
    let largest = placements.iter().map(Placement::extent).max().unwrap_or(0);
    largest
        .checked_add(PLACEMENT_PADDING)
        .filter(|&size| size <= MAX_DYNAMIC_SIZE)
        .ok_or(PlacementError::TooLarge { coordinate: largest })
}

/// Brings every cell covered by the placements alive. Cells beyond the grid are skipped.
pub fn apply_placements(placements: &[Placement], grid: &mut Grid) {
    for placement in placements {
        for row in placement.y.min..=placement.y.max {
            for col in placement.x.min..=placement.x.max {
                grid.set(row, col, true);
            }
        }
    }
}
