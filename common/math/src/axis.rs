use bevy::prelude::*;

/// An axis-aligned direction.
/// NEGX/POSX are West/East
/// NEGZ/POSZ are South/North
/// NEGY/POSY are Down/Up
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Axis {
    /// Convert from u8 to Axis without checking for a valid tag.
    pub const unsafe fn from_u8_unchecked(v: u8) -> Self {
        unsafe { std::mem::transmute::<u8, Self>(v) }
    }

    /// Get the inverse of this axis.
    ///  - POSX => NEGX
    ///  - POSY => NEGY
    ///  - POSZ => NEGZ
    pub const fn invert(self) -> Self {
        // result is known to be in-range so its' safe.
        unsafe { Self::from_u8_unchecked(self as u8 ^ 1) }
    }

    /// If the axis is negative, convert to positive.
    pub const fn abs(self) -> Self {
        // all negative axes are odd, just convert to even.
        unsafe { Self::from_u8_unchecked(self as u8 & !1) }
    }

    /// Whether this axis points along +x, +y or +z.
    pub const fn is_positive(self) -> bool {
        self as u8 & 1 == 0
    }

    /// Whether this axis is PosY or NegY.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::PosY | Self::NegY)
    }

    /// Index of the vector component this axis runs along.
    /// x => 0, y => 1, z => 2
    pub const fn component(self) -> usize {
        (self as u8 >> 1) as usize
    }

    /// The two components spanning a face with this normal,
    /// in (horizontal, vertical) order for side faces and
    /// (x, z) order for top and bottom faces.
    pub const fn face_components(self) -> [usize; 2] {
        match self.abs() {
            Self::PosX => [2, 1],
            Self::PosY => [0, 2],
            _ => [0, 1],
        }
    }

    /// Get the axis as an &'static str.
    /// Format uses cardinal directions, "south", "east", "down", etc.
    pub const fn as_dir_str(&self) -> &'static str {
        match *self {
            Self::PosX => "east",
            Self::NegX => "west",
            Self::PosY => "up",
            Self::NegY => "down",
            Self::PosZ => "north",
            Self::NegZ => "south",
        }
    }

    /// Convert from a direction name or a signed axis name.
    pub fn from_str(s: impl AsRef<str>) -> Option<Self> {
        Some(match s.as_ref() {
            "+x" | "east" => Self::PosX,
            "-x" | "west" => Self::NegX,
            "+y" | "up" => Self::PosY,
            "-y" | "down" => Self::NegY,
            "+z" | "north" => Self::PosZ,
            "-z" | "south" => Self::NegZ,
            _ => return None,
        })
    }

    pub fn as_vec3(self) -> Vec3 {
        Self::AS_VEC3[self as usize]
    }

    pub fn as_ivec3(self) -> IVec3 {
        Self::AS_IVEC3[self as usize]
    }

    /// The face a ray travelling along `dir` enters through
    /// on the given component.
    pub fn entered_from(component: usize, dir: f32) -> Self {
        let positive = match component {
            0 => Self::PosX,
            1 => Self::PosY,
            _ => Self::PosZ,
        };
        // moving toward +x enters through the -x face.
        if dir > 0.0 { positive.invert() } else { positive }
    }

    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    pub const HORIZONTAL: [Self; 4] = [Self::PosX, Self::NegX, Self::PosZ, Self::NegZ];

    pub const AS_VEC3: [Vec3; 6] = [
        vec3(1.0, 0.0, 0.0),
        vec3(-1.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        vec3(0.0, -1.0, 0.0),
        vec3(0.0, 0.0, 1.0),
        vec3(0.0, 0.0, -1.0),
    ];

    pub const AS_IVEC3: [IVec3; 6] = [
        ivec3(1, 0, 0),
        ivec3(-1, 0, 0),
        ivec3(0, 1, 0),
        ivec3(0, -1, 0),
        ivec3(0, 0, 1),
        ivec3(0, 0, -1),
    ];
}

impl std::ops::Add<IVec3> for Axis {
    type Output = IVec3;

    fn add(self, rhs: IVec3) -> Self::Output {
        rhs + self.as_ivec3()
    }
}
