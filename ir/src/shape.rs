//! Buffer shapes.
//!
//! Extents are either fixed at compile time or dynamic. Conversion to loop
//! nests requires fully static shapes; dynamic extents exist so that such
//! operations can be represented and rejected rather than being
//! unconstructible.

use smallvec::SmallVec;

use loam_dtype::DType;

/// One dimension of a buffer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Known at compile time.
    Fixed(u64),
    /// Unknown until runtime.
    Dynamic,
}

impl Extent {
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// Shape and element type of one buffer value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BufferType {
    shape: SmallVec<[Extent; 4]>,
    elem: DType,
}

impl BufferType {
    pub fn new(shape: impl IntoIterator<Item = Extent>, elem: DType) -> Self {
        Self { shape: shape.into_iter().collect(), elem }
    }

    /// Fully static shape from a list of extents.
    pub fn fixed(extents: &[u64], elem: DType) -> Self {
        Self { shape: extents.iter().copied().map(Extent::Fixed).collect(), elem }
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[Extent] {
        &self.shape
    }

    pub fn extent(&self, dim: usize) -> Extent {
        self.shape[dim]
    }

    pub fn elem(&self) -> DType {
        self.elem
    }

    pub fn is_fully_static(&self) -> bool {
        self.shape.iter().all(Extent::is_static)
    }
}
