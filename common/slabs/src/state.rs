use math::axis::Axis;

/// Which part of the block a slab fills.
///
/// For a slab split along a horizontal axis, `Bottom` is the
/// half on the negative side of that axis (south or west)
/// and `Top` is the half on the positive side (north or east).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SlabType {
    Bottom,
    Top,
    Double,
}

impl SlabType {
    /// Swap Top and Bottom. Double is unchanged.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Bottom => Self::Top,
            Self::Top => Self::Bottom,
            Self::Double => Self::Double,
        }
    }
}

/// The horizontal axis a slab is split along, if it stands upright.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum VerticalType {
    /// The slab is stacked, not split.
    #[default]
    None,
    /// Split into a north and a south half.
    NorthSouth,
    /// Split into an east and a west half.
    EastWest,
}

impl VerticalType {
    /// The positive direction of the split, if any.
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::NorthSouth => Some(Axis::PosZ),
            Self::EastWest => Some(Axis::PosX),
        }
    }

    /// The split whose halves are separated along `axis`.
    pub const fn along(axis: Axis) -> Self {
        match axis {
            Axis::PosX | Axis::NegX => Self::EastWest,
            Axis::PosZ | Axis::NegZ => Self::NorthSouth,
            Axis::PosY | Axis::NegY => Self::None,
        }
    }
}

/// Orientation of a slab block.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SlabState {
    pub kind: SlabType,
    pub vertical: VerticalType,
}

impl SlabState {
    pub const BOTTOM: Self = Self::new(SlabType::Bottom, VerticalType::None);
    pub const TOP: Self = Self::new(SlabType::Top, VerticalType::None);
    pub const DOUBLE: Self = Self::new(SlabType::Double, VerticalType::None);

    /// Every distinct orientation.
    pub const ALL: [Self; 9] = [
        Self::BOTTOM,
        Self::TOP,
        Self::DOUBLE,
        Self::new(SlabType::Bottom, VerticalType::NorthSouth),
        Self::new(SlabType::Top, VerticalType::NorthSouth),
        Self::new(SlabType::Double, VerticalType::NorthSouth),
        Self::new(SlabType::Bottom, VerticalType::EastWest),
        Self::new(SlabType::Top, VerticalType::EastWest),
        Self::new(SlabType::Double, VerticalType::EastWest),
    ];

    pub const fn new(kind: SlabType, vertical: VerticalType) -> Self {
        Self { kind, vertical }
    }

    /// The single slab filling the half of the block on the `axis` side.
    /// `half(Axis::PosY)` is a top slab, `half(Axis::NegZ)` the south half.
    pub const fn half(axis: Axis) -> Self {
        let kind = if axis.is_positive() {
            SlabType::Top
        } else {
            SlabType::Bottom
        };
        Self::new(kind, VerticalType::along(axis))
    }

    pub const fn with_kind(self, kind: SlabType) -> Self {
        Self::new(kind, self.vertical)
    }

    pub const fn with_vertical(self, vertical: VerticalType) -> Self {
        Self::new(self.kind, vertical)
    }

    pub const fn is_double(self) -> bool {
        matches!(self.kind, SlabType::Double)
    }

    pub const fn is_split(self) -> bool {
        !matches!(self.vertical, VerticalType::None)
    }

    /// The axis separating this slab's halves.
    /// PosY for stacked slabs.
    pub const fn split_axis(self) -> Axis {
        match self.vertical.axis() {
            Some(axis) => axis,
            None => Axis::PosY,
        }
    }

    /// The side of the block a single slab occupies.
    /// None for double slabs.
    pub const fn occupied_side(self) -> Option<Axis> {
        let axis = self.split_axis();
        match self.kind {
            SlabType::Top => Some(axis),
            SlabType::Bottom => Some(axis.invert()),
            SlabType::Double => None,
        }
    }

    /// The single slab that would complete this one into a double.
    pub const fn complement(self) -> Option<Self> {
        match self.occupied_side() {
            Some(side) => Some(Self::half(side.invert())),
            None => None,
        }
    }

    /// How many slab items this state is worth.
    pub const fn drop_count(self) -> u32 {
        if self.is_double() { 2 } else { 1 }
    }
}

impl Default for SlabState {
    fn default() -> Self {
        Self::BOTTOM
    }
}
