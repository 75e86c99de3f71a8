use std::fmt;
use std::ops::Deref;

/// Separator placed between the values of a [`Sequence`] when it is displayed.
pub const DELIMITER: &str = "..";

/// Counter values copied out of a native buffer. Owns its memory and outlives
/// the buffer it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence(Vec<usize>);

impl Sequence {
    pub fn join(&self, delimiter: &str) -> String {
        self.0
            .iter()
            .map(|x| x.to_string())
            .collect::<Vec<String>>()
            .join(delimiter)
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<&[usize]> for Sequence {
    fn from(values: &[usize]) -> Self {
        Self(values.to_vec())
    }
}

impl From<Vec<usize>> for Sequence {
    fn from(values: Vec<usize>) -> Self {
        Self(values)
    }
}

impl Deref for Sequence {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(DELIMITER))
    }
}
