/// How coordinates outside the grid are treated.
/// Chosen once per grid and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Out-of-bounds positions are absent (count as dead)
    #[default]
    Clamped,
    /// Coordinates wrap around, the grid is a torus
    Toroidal,
}

impl EdgePolicy {
    /// Resolve a signed coordinate to an in-bounds one, or `None` if the
    /// position does not exist under this policy.
    ///
    /// This is the only place edges are handled; neighbor counting and
    /// lookups both go through it.
    pub fn resolve(self, row: isize, col: isize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        match self {
            EdgePolicy::Clamped => {
                let in_bounds = row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols;
                in_bounds.then(|| (row as usize, col as usize))
            }
            EdgePolicy::Toroidal => Some((
                row.rem_euclid(rows as isize) as usize,
                col.rem_euclid(cols as isize) as usize,
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EdgePolicy::Clamped => "clamped",
            EdgePolicy::Toroidal => "toroidal",
        }
    }
}
