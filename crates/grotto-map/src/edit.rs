//! Interactive editing: paint strokes and the shared single-writer map.
//!
//! A stroke starts with [`toggle_at`](MapModel::toggle_at), which flips the
//! region under the pointer and remembers the flipped type as the stroke's
//! target. [`drag_to`](MapModel::drag_to) paints every region the pointer
//! crosses with that target. [`commit_edit`](MapModel::commit_edit) ends the
//! stroke and recomputes the border set once for the whole batch.

use std::sync::{Mutex, PoisonError};

use grotto_core::{CellType, MapError, Point, RegionId};
use grotto_region::BorderSet;

use crate::model::MapModel;

/// An in-progress paint stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    target: CellType,
    painted: u32,
}

impl Stroke {
    /// Type painted onto every region the stroke crosses.
    pub fn target(&self) -> CellType {
        self.target
    }

    /// Regions whose type this stroke actually changed. Dragging over a
    /// region that already has the target type does not count.
    pub fn painted(&self) -> u32 {
        self.painted
    }
}

impl MapModel {
    /// The active stroke, if any.
    pub fn stroke(&self) -> Option<Stroke> {
        self.stroke
    }

    /// Flip the region under `point` and start a stroke painting its new
    /// type.
    ///
    /// Open becomes Wall; Wall and OuterSpace become Open. Borders are not
    /// recomputed. A miss returns [`MapError::PointNotContained`] and leaves
    /// the model, including any active stroke, untouched.
    pub fn toggle_at(&mut self, point: Point) -> Result<RegionId, MapError> {
        let id = self.locate(point)?;
        let current = self
            .region(id)
            .map(|r| r.cell_type())
            .ok_or(MapError::UnknownRegion { id })?;
        let target = current.toggled();
        self.set_region_type(id, target)?;
        self.stroke = Some(Stroke { target, painted: 1 });
        log::debug!("stroke started at {point} on region {id}: {current} -> {target}");
        Ok(id)
    }

    /// Paint the region under `point` with the active stroke's target.
    ///
    /// Returns `Ok(None)` when no stroke is active. A miss returns
    /// [`MapError::PointNotContained`]; the stroke stays active.
    pub fn drag_to(&mut self, point: Point) -> Result<Option<RegionId>, MapError> {
        let Some(stroke) = self.stroke else {
            return Ok(None);
        };
        let id = self.locate(point)?;
        let previous = self.set_region_type(id, stroke.target)?;
        if previous != stroke.target {
            self.stroke = Some(Stroke {
                painted: stroke.painted + 1,
                ..stroke
            });
        }
        Ok(Some(id))
    }

    /// Set the region under `point` to `cell_type` outside of any stroke.
    ///
    /// Borders are not recomputed.
    pub fn paint_at(&mut self, point: Point, cell_type: CellType) -> Result<RegionId, MapError> {
        let id = self.locate(point)?;
        self.set_region_type(id, cell_type)?;
        Ok(id)
    }

    /// End the active stroke (if any) and recompute the border set.
    ///
    /// Returns the new border count.
    pub fn commit_edit(&mut self) -> Result<usize, MapError> {
        if let Some(stroke) = self.stroke.take() {
            log::debug!(
                "stroke committed: {} regions painted {}",
                stroke.painted,
                stroke.target
            );
        }
        self.recompute_borders()
    }
}

// Compile-time assertion: SharedMap is Send + Sync.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<SharedMap>();
    }
};

/// A [`MapModel`] behind a mutex.
///
/// Each [`edit_batch`](Self::edit_batch) runs the caller's edits and the
/// border recompute under one lock scope, so
/// [`snapshot_borders`](Self::snapshot_borders) on another thread sees
/// either the whole batch or none of it.
#[derive(Debug)]
pub struct SharedMap {
    inner: Mutex<MapModel>,
}

impl SharedMap {
    /// Wrap a model.
    pub fn new(model: MapModel) -> Self {
        Self {
            inner: Mutex::new(model),
        }
    }

    /// Apply `edits` and recompute borders in one critical section.
    ///
    /// Borders are recomputed even when `edits` fails part-way, so the
    /// stored set always matches the stored types. The closure's error
    /// takes precedence over a recompute error.
    pub fn edit_batch<R>(
        &self,
        edits: impl FnOnce(&mut MapModel) -> Result<R, MapError>,
    ) -> Result<R, MapError> {
        let mut model = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let out = edits(&mut model);
        let recomputed = model.recompute_borders();
        let out = out?;
        recomputed?;
        Ok(out)
    }

    /// Run a read-only closure against the model.
    pub fn read<R>(&self, f: impl FnOnce(&MapModel) -> R) -> R {
        let model = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&model)
    }

    /// Clone of the current border set.
    pub fn snapshot_borders(&self) -> BorderSet {
        self.read(|m| m.borders().clone())
    }

    /// Unwrap the model.
    pub fn into_inner(self) -> MapModel {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
