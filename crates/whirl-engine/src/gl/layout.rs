/// Scalar type of one vertex attribute component. Every kind is 4 bytes wide.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScalarKind {
    Int,
    UInt,
    Float,
}

impl ScalarKind {
    pub const SIZE: usize = 4;

    /// GL data type enum for attribute pointers.
    #[inline]
    pub const fn gl_type(self) -> u32 {
        match self {
            ScalarKind::Int => glow::INT,
            ScalarKind::UInt => glow::UNSIGNED_INT,
            ScalarKind::Float => glow::FLOAT,
        }
    }

    /// Integer kinds must be wired with the integer pointer form so the
    /// shader sees raw bits instead of a float conversion.
    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, ScalarKind::Int | ScalarKind::UInt)
    }
}

/// `components` scalars of one kind, e.g. `vec2` = `(2, Float)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    pub components: u32,
    pub kind: ScalarKind,
}

impl VertexAttribute {
    #[inline]
    pub const fn new(components: u32, kind: ScalarKind) -> Self {
        Self { components, kind }
    }

    #[inline]
    pub const fn float(components: u32) -> Self {
        Self::new(components, ScalarKind::Float)
    }

    #[inline]
    pub const fn uint(components: u32) -> Self {
        Self::new(components, ScalarKind::UInt)
    }

    #[inline]
    pub const fn size(self) -> usize {
        self.components as usize * ScalarKind::SIZE
    }
}

/// Ordered attribute list describing one tightly packed vertex.
///
/// Stride and offsets are derived on demand and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
}

impl VertexLayout {
    pub fn new(attributes: impl IntoIterator<Item = VertexAttribute>) -> Self {
        Self { attributes: attributes.into_iter().collect() }
    }

    #[inline]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Bytes per vertex.
    pub fn stride(&self) -> usize {
        self.attributes.iter().map(|a| a.size()).sum()
    }

    /// Byte offset of attribute `index` within a vertex.
    ///
    /// An out-of-range index is a caller bug; it is logged and answered with 0.
    pub fn offset(&self, index: usize) -> usize {
        if index >= self.attributes.len() {
            log::warn!(
                "vertex attribute offset out of bounds: {index} (layout has {})",
                self.attributes.len()
            );
            return 0;
        }
        self.attributes[..index].iter().map(|a| a.size()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fixed layouts ─────────────────────────────────────────────────────

    #[test]
    fn quad_layout() {
        let l = VertexLayout::new([VertexAttribute::float(2), VertexAttribute::uint(1)]);
        assert_eq!(l.stride(), 12);
        assert_eq!(l.offset(0), 0);
        assert_eq!(l.offset(1), 8);
    }

    #[test]
    fn rounded_quad_layout() {
        let l = VertexLayout::new([
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(2),
            VertexAttribute::float(1),
            VertexAttribute::uint(1),
        ]);
        assert_eq!(l.stride(), 32);
        assert_eq!(l.offset(3), 24);
        assert_eq!(l.offset(4), 28);
    }

    #[test]
    fn out_of_range_offset_is_zero() {
        let l = VertexLayout::new([VertexAttribute::float(4)]);
        assert_eq!(l.offset(1), 0);
        assert_eq!(l.offset(99), 0);
    }

    #[test]
    fn empty_layout_has_zero_stride() {
        assert_eq!(VertexLayout::default().stride(), 0);
    }

    #[test]
    fn integer_kinds() {
        assert!(ScalarKind::Int.is_integer());
        assert!(ScalarKind::UInt.is_integer());
        assert!(!ScalarKind::Float.is_integer());
        assert_eq!(ScalarKind::UInt.gl_type(), glow::UNSIGNED_INT);
    }

    // ── generated layouts ─────────────────────────────────────────────────

    #[test]
    fn stride_and_offsets_over_generated_layouts() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let kinds = [ScalarKind::Int, ScalarKind::UInt, ScalarKind::Float];
        let mut rng = StdRng::seed_from_u64(0x2545_f491);

        for _ in 0..500 {
            let n: usize = rng.gen_range(1..=16);
            let attrs: Vec<VertexAttribute> = (0..n)
                .map(|_| {
                    let components: u32 = rng.gen_range(1..=4);
                    let kind = kinds[rng.gen_range(0..kinds.len())];
                    VertexAttribute::new(components, kind)
                })
                .collect();
            let layout = VertexLayout::new(attrs.iter().copied());

            let expected: usize = attrs.iter().map(|a| 4 * a.components as usize).sum();
            assert_eq!(layout.stride(), expected);
            assert_eq!(layout.offset(0), 0);

            let mut running = 0;
            for (i, a) in attrs.iter().enumerate() {
                assert_eq!(layout.offset(i), running);
                running += 4 * a.components as usize;
            }
        }
    }
}
