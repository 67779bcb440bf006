//! Which reserve a swap draws from.

use core::fmt;

/// Direction of a swap through the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Sell X into the pool, receive Y.
    XToY,
    /// Sell Y into the pool, receive X.
    YToX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => write!(f, "X->Y"),
            Self::YToX => write!(f, "Y->X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_involution() {
        assert_eq!(SwapDirection::XToY.reverse(), SwapDirection::YToX);
        assert_eq!(SwapDirection::XToY.reverse().reverse(), SwapDirection::XToY);
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::YToX.to_string(), "Y->X");
    }
}
