use crate::blocks::{PointGraphParams, POINT_GRAPH_CAPACITY};
use crate::coords::{Rect, Vec2};
use crate::error::BlockError;
use crate::schema::Primitive;
use crate::scene::{DrawList, ZIndex};

/// Data-space extent `(min_x, max_x, min_y, max_y)` of `points`.
fn data_range(points: &[Vec2]) -> [f32; 4] {
    if points.is_empty() {
        return [0.0; 4];
    }
    points.iter().fold([f32::MAX, f32::MIN, f32::MAX, f32::MIN], |[x0, x1, y0, y1], p| {
        [x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)]
    })
}

impl DrawList {
    /// Records a curve plot of `points` (data space) filling `rect`. RZ only.
    ///
    /// The block holds at most 300 samples; longer inputs fail with
    /// [`BlockError::CapacityExceeded`] instead of being truncated.
    pub fn push_point_graph(
        &mut self,
        z: ZIndex,
        rect: Rect,
        points: &[Vec2],
    ) -> Result<(), BlockError> {
        if points.len() > POINT_GRAPH_CAPACITY {
            let err = BlockError::CapacityExceeded {
                block: "MM_POINTGRAPH",
                capacity: POINT_GRAPH_CAPACITY,
                requested: points.len(),
            };
            log::warn!("{err}");
            return Err(err);
        }
        super::check_rect("MM_POINTGRAPH", rect)?;
        super::check_points("MM_POINTGRAPH", points)?;

        let size = rect.size * self.scale();
        let mut block = Box::new(PointGraphParams {
            size: [size.x, size.y, points.len() as f32, 0.0],
            range: data_range(points),
            ..PointGraphParams::default()
        });
        for (slot, p) in block.points.iter_mut().zip(points) {
            *slot = [p.x, p.y, 0.0, 0.0];
        }

        self.push_primitive(z, &Primitive::PointGraph(block), rect, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::schema::Target;

    fn rz() -> DrawList {
        DrawList::new(RenderConfig::default().with_target(Target::Rz))
    }

    #[test]
    fn graph_records_count_and_range() {
        let mut l = rz();
        let pts = [Vec2::new(0.0, 1.0), Vec2::new(1.0, -2.0), Vec2::new(2.0, 5.0)];
        l.push_point_graph(ZIndex(0), Rect::new(0.0, 0.0, 100.0, 40.0), &pts).unwrap();

        let cmd = &l.items()[0].cmd;
        assert_eq!(cmd.block.len(), 4832);
        let f: &[f32] = bytemuck::cast_slice(&cmd.block.bytes);
        assert_eq!(&f[0..3], &[100.0, 40.0, 3.0]);
        assert_eq!(&f[4..8], &[0.0, 2.0, -2.0, 5.0]);
        assert_eq!(&f[12..14], &[1.0, -2.0]);
        // unused slots stay zero
        assert!(f[20..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn full_capacity_is_accepted() {
        let pts = vec![Vec2::new(1.0, 1.0); POINT_GRAPH_CAPACITY];
        assert!(rz().push_point_graph(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), &pts).is_ok());
    }

    #[test]
    fn over_capacity_is_an_error() {
        let pts = vec![Vec2::new(0.0, 0.0); POINT_GRAPH_CAPACITY + 1];
        let mut l = rz();
        let err = l.push_point_graph(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), &pts);
        assert_eq!(
            err,
            Err(BlockError::CapacityExceeded {
                block: "MM_POINTGRAPH",
                capacity: 300,
                requested: 301,
            })
        );
        assert!(l.is_empty());
    }
}
