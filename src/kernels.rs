use std::fmt;
use std::str::FromStr;

/// 3x3 matrix of integer weights.
pub type Kernel = [[i32; 3]; 3];

/// Horizontal and vertical kernels of one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelPair {
    pub x: Kernel,
    pub y: Kernel,
}

impl KernelPair {
    /// Weights of horizontal kernel in row-major order.
    #[inline(always)]
    pub fn flat_x(&self) -> &[i32; 9] {
        bytemuck::cast_ref(&self.x)
    }

    /// Weights of vertical kernel in row-major order.
    #[inline(always)]
    pub fn flat_y(&self) -> &[i32; 9] {
        bytemuck::cast_ref(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FilterVariant {
    /// Sobel operator.
    #[default]
    Sobel,
    /// Sobel operator applied with unchecked indexing into pixels buffer.
    /// It uses the same weights as `Sobel`.
    SobelFast,
    /// Laplace operator. Both kernels are equal.
    Laplacian,
    /// Scharr operator.
    Scharr,
    /// Sharpen kernel. Both kernels are equal.
    Sharpen,
}

impl FilterVariant {
    pub const ALL: [FilterVariant; 5] = [
        Self::Sobel,
        Self::SobelFast,
        Self::Laplacian,
        Self::Scharr,
        Self::Sharpen,
    ];

    /// Returns variant by its ordinal number, or `None` for unknown numbers.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sobel => "sobel",
            Self::SobelFast => "sobel-fast",
            Self::Laplacian => "laplacian",
            Self::Scharr => "scharr",
            Self::Sharpen => "sharpen",
        }
    }

    /// Returns `true` if filter must use unchecked indexing
    /// whatever convolution strategy is requested.
    #[inline]
    pub fn forces_unchecked(&self) -> bool {
        matches!(self, Self::SobelFast)
    }
}

impl fmt::Display for FilterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown filter variant: {0}")]
pub struct UnknownFilterVariant(pub String);

impl FromStr for FilterVariant {
    type Err = UnknownFilterVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sobel" => Ok(Self::Sobel),
            "sobel-fast" | "sobel_fast" | "sobelfast" => Ok(Self::SobelFast),
            "laplacian" | "laplasian" => Ok(Self::Laplacian),
            "scharr" | "shara" => Ok(Self::Scharr),
            "sharpen" => Ok(Self::Sharpen),
            _ => Err(UnknownFilterVariant(s.to_owned())),
        }
    }
}

pub const SOBEL: KernelPair = KernelPair {
    x: [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]],
    y: [[-1, -2, -1], [0, 0, 0], [1, 2, 1]],
};

pub const SCHARR: KernelPair = KernelPair {
    x: [[-3, 0, 3], [-10, 0, 10], [-3, 0, 3]],
    y: [[3, 10, 3], [0, 0, 0], [-3, -10, -3]],
};

pub const LAPLACIAN: KernelPair = KernelPair {
    x: [[1, 1, 1], [1, -8, 1], [1, 1, 1]],
    y: [[1, 1, 1], [1, -8, 1], [1, 1, 1]],
};

pub const SHARPEN: KernelPair = KernelPair {
    x: [[0, -1, 0], [-1, 5, -1], [0, -1, 0]],
    y: [[0, -1, 0], [-1, 5, -1], [0, -1, 0]],
};

/// Sobel weights for computations in floating point.
pub const SOBEL_X_F64: [f64; 9] = [-1., 0., 1., -2., 0., 2., -1., 0., 1.];
pub const SOBEL_Y_F64: [f64; 9] = [-1., -2., -1., 0., 0., 0., 1., 2., 1.];

/// Returns kernels of the given filter variant.
///
/// `None` is returned if the selector doesn't name any variant;
/// filters treat it as zero gradients.
pub fn kernel_pair_for(variant: impl Into<Option<FilterVariant>>) -> Option<&'static KernelPair> {
    variant.into().map(|variant| match variant {
        FilterVariant::Sobel | FilterVariant::SobelFast => &SOBEL,
        FilterVariant::Laplacian => &LAPLACIAN,
        FilterVariant::Scharr => &SCHARR,
        FilterVariant::Sharpen => &SHARPEN,
    })
}
