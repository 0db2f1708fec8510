#[cfg(test)]
mod tests {
    use super::super::test_utils::{PlaneProjector, at, coord};
    use super::super::*;
    use quickcheck::QuickCheck;

    fn pixels(raw: &[(i16, i16)]) -> Vec<(usize, PixelPoint)> {
        raw.iter()
            .enumerate()
            .map(|(i, &(x, y))| (i, PixelPoint::new(x as f64 / 4.0, y as f64 / 4.0)))
            .collect()
    }

    #[test]
    fn test_orderings_and_ranks() {
        let index = AxisIndex::from_pixels(vec![
            (0, PixelPoint::new(3.0, 1.0)),
            (1, PixelPoint::new(1.0, 2.0)),
            (2, PixelPoint::new(2.0, 0.0)),
        ]);

        assert_eq!(index.order(Axis::X), &[1, 2, 0]);
        assert_eq!(index.order(Axis::Y), &[2, 0, 1]);
        assert_eq!(index.point(0).x_rank, 2);
        assert_eq!(index.point(0).y_rank, 1);
        assert_eq!(index.point(1).x_rank, 0);
        assert_eq!(index.point(1).y_rank, 2);
        assert_eq!(index.rank(2, Axis::X), 1);
        assert_eq!(index.rank(2, Axis::Y), 0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let index = AxisIndex::from_pixels(vec![
            (0, PixelPoint::new(5.0, 5.0)),
            (1, PixelPoint::new(5.0, 1.0)),
            (2, PixelPoint::new(5.0, 5.0)),
        ]);

        assert_eq!(index.order(Axis::X), &[0, 1, 2]);
        assert_eq!(index.order(Axis::Y), &[1, 0, 2]);
    }

    #[test]
    fn test_empty() {
        let index = AxisIndex::from_pixels(Vec::new());
        assert!(index.is_empty());
        assert!(index.order(Axis::X).is_empty());
        assert!(index.order(Axis::Y).is_empty());
        assert!(group_points(&index, 10.0).is_empty());
    }

    #[test]
    fn test_from_items_filters() {
        let mut projector = PlaneProjector::default();
        projector.bounds = BoundingBox::new(LatLng::new(0.0, 0.0), LatLng::new(100.0, 100.0));

        let items = vec![
            at(10.0, 10.0),
            None,
            at(150.0, 10.0),
            at(100.0, 100.0),
            at(-1.0, 50.0),
            at(20.0, 30.0),
        ];
        let index = AxisIndex::from_items(&items, coord, &projector);

        let sources: Vec<usize> = index.points().iter().map(|p| p.source_index).collect();
        assert_eq!(sources, vec![0, 3, 5]);
        assert_eq!(index.point(1).pixel, PixelPoint::new(100.0, 100.0));
    }

    struct NoWest;

    impl Projector for NoWest {
        fn project(&self, coord: &LatLng, _zoom: i32) -> Option<PixelPoint> {
            (coord.lng >= 0.0).then(|| PixelPoint::new(coord.lng, coord.lat))
        }

        fn unproject(&self, pixel: &PixelPoint, _zoom: i32) -> LatLng {
            LatLng::new(pixel.y, pixel.x)
        }

        fn current_bounds(&self) -> BoundingBox {
            PlaneProjector::default().bounds
        }

        fn current_zoom(&self) -> i32 {
            0
        }
    }

    #[test]
    fn test_from_items_skips_failed_projection() {
        let items = vec![at(-5.0, 0.0), at(5.0, 0.0)];
        let index = AxisIndex::from_items(&items, coord, &NoWest);
        assert_eq!(index.len(), 1);
        assert_eq!(index.point(0).source_index, 1);
    }

    #[test]
    fn prop_ranks_are_dense_and_sorted() {
        fn prop(raw: Vec<(i16, i16)>) -> bool {
            let index = AxisIndex::from_pixels(pixels(&raw));

            [Axis::X, Axis::Y].iter().all(|&axis| {
                let order = index.order(axis);
                let mut seen = order.to_vec();
                seen.sort_unstable();

                seen == (0..raw.len()).collect::<Vec<_>>()
                    && order.iter().enumerate().all(|(rank, &id)| index.rank(id, axis) == rank)
                    && order.windows(2).all(|w| {
                        let a = axis.of(&index.point(w[0]).pixel);
                        let b = axis.of(&index.point(w[1]).pixel);
                        a < b || (a == b && w[0] < w[1])
                    })
            })
        }
        QuickCheck::new().quickcheck(prop as fn(Vec<(i16, i16)>) -> bool);
    }
}
