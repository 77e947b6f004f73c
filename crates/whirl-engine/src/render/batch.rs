use super::shapes::common::{ShapeKind, QUAD_INDICES};

/// CPU side of one shape renderer: pending shapes plus scratch geometry.
///
/// Shapes live here from `submit` until the next `clear`; vertex and index
/// arrays are rebuilt from scratch by every `build`, reusing their capacity.
pub struct ShapeBatch<K: ShapeKind> {
    pending: Vec<K::Shape>,
    vertices: Vec<K::Vertex>,
    indices: Vec<u32>,
}

impl<K: ShapeKind> Default for ShapeBatch<K> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K: ShapeKind> ShapeBatch<K> {
    pub fn with_capacity(shapes: usize) -> Self {
        Self {
            pending: Vec::with_capacity(shapes),
            vertices: Vec::with_capacity(shapes * 4),
            indices: Vec::with_capacity(shapes * 6),
        }
    }

    /// Queues `shape` if it passes validation. Returns whether it was queued.
    pub fn submit(&mut self, shape: K::Shape) -> bool {
        if let Err(e) = K::validate(&shape) {
            log::warn!("{}: dropping shape: {e}", K::NAME);
            return false;
        }
        self.pending.push(shape);
        true
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Expands every pending shape into 4 vertices and 6 indices.
    pub fn build(&mut self) -> (&[K::Vertex], &[u32]) {
        self.vertices.clear();
        self.indices.clear();

        let n = self.pending.len();
        if self.vertices.capacity() < n * 4 {
            log::debug!(
                "{}: growing geometry scratch ({} -> {} shapes)",
                K::NAME,
                self.vertices.capacity() / 4,
                n
            );
        }
        self.vertices.reserve(n * 4);
        self.indices.reserve(n * 6);

        for (i, shape) in self.pending.iter().enumerate() {
            let base = (i * 4) as u32;
            self.vertices.extend_from_slice(&K::corners(shape));
            self.indices.extend(QUAD_INDICES.iter().map(|idx| base + idx));
        }

        (&self.vertices, &self.indices)
    }

    /// Drops every pending shape. Scratch capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
