use crate::axis::Axis;

/// A rotation of a block around the vertical axis, viewed from above.
/// Clockwise turns north into east, east into south and so on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Rotation {
    #[default]
    None = 0,
    Clockwise90 = 1,
    Clockwise180 = 2,
    CounterClockwise90 = 3,
}

impl Rotation {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Clockwise90,
        Self::Clockwise180,
        Self::CounterClockwise90,
    ];

    /// Number of clockwise quarter turns, in the range [0,4).
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }

    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns & 3 {
            0 => Self::None,
            1 => Self::Clockwise90,
            2 => Self::Clockwise180,
            _ => Self::CounterClockwise90,
        }
    }

    /// Apply `self` then `other`.
    pub const fn then(self, other: Self) -> Self {
        Self::from_quarter_turns(self as u8 + other as u8)
    }

    /// The rotation that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::from_quarter_turns(4 - self as u8)
    }

    /// Rotate a direction. Vertical axes are unaffected.
    pub const fn rotate(self, axis: Axis) -> Axis {
        if axis.is_vertical() {
            return axis;
        }
        let mut axis = axis;
        let mut turns = self as u8;
        while turns > 0 {
            axis = match axis {
                Axis::PosZ => Axis::PosX,
                Axis::PosX => Axis::NegZ,
                Axis::NegZ => Axis::NegX,
                _ => Axis::PosZ,
            };
            turns -= 1;
        }
        axis
    }
}

/// A reflection of a block across a vertical plane.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Mirror {
    #[default]
    None,
    /// Swaps north and south.
    LeftRight,
    /// Swaps east and west.
    FrontBack,
}

impl Mirror {
    pub const ALL: [Self; 3] = [Self::None, Self::LeftRight, Self::FrontBack];

    pub const fn mirror(self, axis: Axis) -> Axis {
        match (self, axis) {
            (Self::LeftRight, Axis::PosZ | Axis::NegZ) => axis.invert(),
            (Self::FrontBack, Axis::PosX | Axis::NegX) => axis.invert(),
            _ => axis,
        }
    }
}
