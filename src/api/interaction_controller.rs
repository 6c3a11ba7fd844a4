use tracing::trace;

use crate::core::{ScaledPoint, locate};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{ChartState, PointerReadout, snap_to_sample};
use crate::render::Renderer;

use super::LineChartEngine;

impl<R: Renderer> LineChartEngine<R> {
    /// Handles a pointer move/drag at `pointer_x` and returns the updated state
    /// together with the indicator position and snapped sample.
    pub fn pointer_move(
        &self,
        state: ChartState,
        pointer_x: f64,
    ) -> ChartResult<(ChartState, PointerReadout)> {
        if !pointer_x.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer x must be finite".to_owned(),
            ));
        }
        let readout = self.readout_at(pointer_x)?;
        trace!(
            pointer_x,
            hit_x = readout.hit.x,
            hit_y = readout.hit.y,
            sample_index = ?readout.sample.map(|sample| sample.index),
            "pointer move"
        );
        Ok((state.with_touch(pointer_x), readout))
    }

    /// Ends the current touch/hover.
    #[must_use]
    pub fn pointer_leave(&self, state: ChartState) -> ChartState {
        trace!("pointer leave");
        state.without_touch()
    }

    /// Readout for the pointer stored in `state`, if any.
    pub fn readout(&self, state: ChartState) -> ChartResult<Option<PointerReadout>> {
        state
            .touch_x
            .filter(|x| x.is_finite())
            .map(|x| self.readout_at(x))
            .transpose()
    }

    fn readout_at(&self, pointer_x: f64) -> ChartResult<PointerReadout> {
        let stroke = self.stroke_path()?;
        let hit = locate(&stroke, pointer_x);
        let y_offset = self.config.y_offset;
        let sample = snap_to_sample(&self.series, self.scaler()?, pointer_x).map(|mut sample| {
            sample.point = ScaledPoint::new(sample.point.x, sample.point.y + y_offset);
            sample
        });
        Ok(PointerReadout { hit, sample })
    }
}
