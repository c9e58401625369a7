//! # Shadow computation results
//!
//! Types returned by [`ShadowEngine::compute`](crate::shadow::engine::ShadowEngine::compute):
//!
//! * [`Intercept`] – one ray's crossing with the screen (or its absence) and its category.
//! * [`BoundaryGrid`] – the `N × N` intercepts indexed by
//!   `(eclipsee rim index, eclipser rim index)`, stored row-major.
//! * [`ShadowSummary`] – hit/miss and per-category counts, including the **unclassified**
//!   diagnostic counter (rays that hit the screen but matched no angle band).
//! * [`ShadowResult`] – everything above plus the cone and the two rim point sets, owned by the
//!   caller. Nothing is cached by the engine between calls.
use nalgebra::Vector3;

use crate::{
    cone_geometry::ShadowCone,
    constants::{Kilometer, Radian},
    rim_sampler::RimPoint,
    shadow_classifier::ShadowCategory,
};

/// Crossing of one ray with the screen.
///
/// `position` and `angular_offset` are `None` when the ray never reaches the screen sphere, in
/// which case `category` is always [`ShadowCategory::NoShadow`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intercept {
    pub position: Option<Vector3<f64>>,
    pub angular_offset: Option<Radian>,
    pub category: ShadowCategory,
}

impl Intercept {
    /// An intercept for a ray that missed the screen.
    pub fn miss() -> Self {
        Intercept::default()
    }

    pub fn is_hit(&self) -> bool {
        self.position.is_some()
    }

    /// True when the ray hit the screen but matched none of the angle bands.
    pub fn is_unclassified(&self) -> bool {
        self.is_hit() && self.category == ShadowCategory::NoShadow
    }
}

/// Row-major 2-D grid of intercepts.
///
/// Row `x` holds the rays starting from eclipsee rim point `x`; column `y` the rays passing
/// through eclipser rim point `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Intercept>,
}

impl BoundaryGrid {
    /// Wrap a row-major cell vector.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Intercept>) -> Self {
        assert_eq!(
            cells.len(),
            rows * cols,
            "boundary grid expects {rows} x {cols} cells"
        );
        BoundaryGrid { rows, cols, cells }
    }

    /// `(eclipsee samples, eclipser samples)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, eclipsee_idx: usize, eclipser_idx: usize) -> Option<&Intercept> {
        if eclipsee_idx >= self.rows || eclipser_idx >= self.cols {
            return None;
        }
        self.cells.get(eclipsee_idx * self.cols + eclipser_idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intercept> {
        self.cells.iter()
    }

    /// Iterate over `((eclipsee_idx, eclipser_idx), intercept)`.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), &Intercept)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(k, cell)| ((k / cols, k % cols), cell))
    }

    /// One slice per eclipsee rim point.
    pub fn rows(&self) -> impl Iterator<Item = &[Intercept]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// Counts over the boundary grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadowSummary {
    pub hits: usize,
    pub misses: usize,
    pub penumbra: usize,
    pub umbra: usize,
    pub antumbra: usize,
    /// Rays that hit the screen but matched no angle band.
    pub unclassified: usize,
}

impl ShadowSummary {
    pub fn from_intercepts<'a>(intercepts: impl IntoIterator<Item = &'a Intercept>) -> Self {
        intercepts
            .into_iter()
            .fold(ShadowSummary::default(), |mut summary, intercept| {
                if !intercept.is_hit() {
                    summary.misses += 1;
                    return summary;
                }
                summary.hits += 1;
                match intercept.category {
                    ShadowCategory::Penumbra => summary.penumbra += 1,
                    ShadowCategory::Umbra => summary.umbra += 1,
                    ShadowCategory::Antumbra => summary.antumbra += 1,
                    ShadowCategory::NoShadow => summary.unclassified += 1,
                }
                summary
            })
    }

    /// Number of hits in `category`.
    ///
    /// For [`ShadowCategory::NoShadow`] this is the unclassified count: misses are not included.
    pub fn count(&self, category: ShadowCategory) -> usize {
        match category {
            ShadowCategory::NoShadow => self.unclassified,
            ShadowCategory::Penumbra => self.penumbra,
            ShadowCategory::Umbra => self.umbra,
            ShadowCategory::Antumbra => self.antumbra,
        }
    }
}

/// Output of one shadow computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowResult {
    pub cone: ShadowCone,
    /// Eclipsee center → eclipser center ray on the screen: best estimate of the shadow center.
    pub center_intercept: Intercept,
    pub boundary_grid: BoundaryGrid,
    pub eclipsee_rim: Vec<RimPoint>,
    pub eclipser_rim: Vec<RimPoint>,
    pub summary: ShadowSummary,
}

impl ShadowResult {
    /// True when the centerline itself misses the screen: no eclipse is visible on it.
    pub fn centerline_missed(&self) -> bool {
        !self.center_intercept.is_hit()
    }

    pub fn has_unclassified(&self) -> bool {
        self.summary.unclassified > 0
    }

    /// Screen positions of the intercepts in `category`, with their grid indices.
    pub fn intercepts_of(
        &self,
        category: ShadowCategory,
    ) -> impl Iterator<Item = ((usize, usize), Vector3<f64>)> + '_ {
        self.boundary_grid
            .iter_indexed()
            .filter(move |(_, cell)| cell.category == category)
            .filter_map(|(idx, cell)| cell.position.map(|p| (idx, p)))
    }

    /// Largest distance between the center intercept and an intercept in `category` (km).
    ///
    /// Returns `None` if the centerline missed the screen or if no intercept falls in `category`.
    pub fn footprint_extent(&self, category: ShadowCategory) -> Option<Kilometer> {
        let center = self.center_intercept.position?;
        self.intercepts_of(category)
            .map(|(_, p)| (p - center).norm())
            .reduce(f64::max)
    }
}

#[cfg(test)]
mod shadow_result_test {
    use super::*;

    fn hit(x: f64, category: ShadowCategory) -> Intercept {
        Intercept {
            position: Some(Vector3::new(x, 0.0, 0.0)),
            angular_offset: Some(0.0),
            category,
        }
    }

    #[test]
    fn test_intercept_flags() {
        assert!(!Intercept::miss().is_hit());
        assert!(!Intercept::miss().is_unclassified());
        assert!(hit(0.0, ShadowCategory::NoShadow).is_unclassified());
        assert!(!hit(0.0, ShadowCategory::Umbra).is_unclassified());
    }

    #[test]
    fn test_grid_indexing() {
        let cells = (0..6).map(|k| hit(k as f64, ShadowCategory::Penumbra)).collect();
        let grid = BoundaryGrid::from_cells(2, 3, cells);

        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(1, 2).unwrap().position.unwrap().x, 5.0);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);

        let indices: Vec<_> = grid.iter_indexed().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    #[should_panic]
    fn test_grid_shape_mismatch() {
        BoundaryGrid::from_cells(2, 2, vec![Intercept::miss(); 3]);
    }

    #[test]
    fn test_summary_counts() {
        let cells = [
            hit(0.0, ShadowCategory::Umbra),
            hit(1.0, ShadowCategory::Penumbra),
            hit(2.0, ShadowCategory::Penumbra),
            hit(3.0, ShadowCategory::NoShadow),
            Intercept::miss(),
        ];
        let summary = ShadowSummary::from_intercepts(&cells);

        assert_eq!(
            summary,
            ShadowSummary {
                hits: 4,
                misses: 1,
                penumbra: 2,
                umbra: 1,
                antumbra: 0,
                unclassified: 1,
            }
        );
        assert_eq!(summary.count(ShadowCategory::Penumbra), 2);
        assert_eq!(summary.count(ShadowCategory::NoShadow), 1);
    }
}
