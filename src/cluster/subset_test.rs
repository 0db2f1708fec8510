#[cfg(test)]
mod tests {
    use super::super::test_utils::PlaneProjector;
    use super::super::*;
    use crate::error::GroupError;

    fn list() -> ItemList<&'static str> {
        ItemList::new(vec!["a", "b", "c", "d", "e"])
    }

    #[test]
    fn test_view_indices_sorted_and_unique() {
        let view = SubsetView::new(vec![4, 1, 3, 1], 0);
        assert_eq!(view.indices(), &[1, 3, 4]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_read_through_view() {
        let list = list();
        let view = SubsetView::new(vec![3, 0], list.generation());

        assert_eq!(view.items(&list).unwrap(), vec![&"a", &"d"]);
        assert_eq!(view.get(&list, 1).unwrap(), &"d");
        assert_eq!(view.source_index(1).unwrap(), 3);
        assert_eq!(
            view.get(&list, 2),
            Err(GroupError::PositionOutOfRange { position: 2, len: 2 })
        );
    }

    #[test]
    fn test_write_through_view() {
        let mut list = list();
        let view = SubsetView::new(vec![2, 4], list.generation());

        assert_eq!(view.set(&mut list, 0, "C").unwrap(), "c");
        assert_eq!(list.items(), &["a", "b", "C", "d", "e"]);
        // a write does not detach other views
        assert!(view.is_current(&list));
    }

    #[test]
    fn test_stale_view_is_rejected() {
        let mut list = list();
        let view = SubsetView::new(vec![1], list.generation());

        list.replace(vec!["v", "w", "x", "y", "z"]);
        // same length: still attached until explicitly detached
        assert!(view.is_current(&list));
        list.invalidate_views();

        assert!(!view.is_current(&list));
        assert_eq!(
            view.items(&list),
            Err(GroupError::StaleView {
                captured: 0,
                current: 1
            })
        );
        assert!(view.set(&mut list, 0, "y").is_err());
        assert_eq!(list.items(), &["v", "w", "x", "y", "z"]);
    }

    #[test]
    fn test_shrinking_replace_detaches_views() {
        let mut list = list();
        let view = SubsetView::new(vec![4], list.generation());

        list.replace(vec!["a"]);

        assert!(!view.is_current(&list));
        assert_eq!(
            view.items(&list),
            Err(GroupError::StaleView {
                captured: 0,
                current: 1
            })
        );
        assert!(matches!(
            view.get(&list, 0),
            Err(GroupError::StaleView { .. })
        ));
        assert!(view.set(&mut list, 0, "z").is_err());
        assert_eq!(list.items(), &["a"]);
    }

    #[test]
    fn test_growing_replace_detaches_views() {
        let mut list = list();
        let view = SubsetView::new(vec![0], list.generation());

        list.replace(vec!["a", "b", "c", "d", "e", "f"]);

        assert!(!view.is_current(&list));
    }

    #[test]
    #[should_panic(expected = "beyond item list")]
    fn test_view_built_past_the_end_panics() {
        let list = list();
        // a current stamp with an index the list never had breaks the contract
        let view = SubsetView::new(vec![9], list.generation());
        let _ = view.items(&list);
    }

    #[test]
    fn test_selection() {
        let single = ClusterGroup {
            center: LatLng::new(0.0, 0.0),
            pixel: PixelPoint::default(),
            view: SubsetView::new(vec![7], 0),
        };
        assert!(single.is_single());
        assert_eq!(single.selection(), Selection::Single(7));

        let many = ClusterGroup {
            view: SubsetView::new(vec![9, 2], 0),
            ..single.clone()
        };
        assert!(!many.is_single());
        assert_eq!(many.selection(), Selection::Multiple(vec![2, 9]));
    }

    #[test]
    fn test_reconcile() {
        let index = AxisIndex::from_pixels(vec![
            (6, PixelPoint::new(10.0, 0.0)),
            (2, PixelPoint::new(14.0, 0.0)),
            (4, PixelPoint::new(90.0, 20.0)),
        ]);
        let clusters = group_points(&index, 10.0);
        let groups = reconcile(&clusters, &index, &PlaneProjector::default(), 0, 3);

        assert_eq!(groups.len(), 2);
        // absorption order was 6 then 2; the view is in list order
        assert_eq!(groups[0].view.indices(), &[2, 6]);
        assert_eq!(groups[0].view.generation(), 3);
        assert_eq!(groups[0].pixel, PixelPoint::new(12.0, 0.0));
        assert_eq!(groups[0].center, LatLng::new(0.0, 12.0));
        assert_eq!(groups[1].view.indices(), &[4]);
        assert_eq!(groups[1].center, LatLng::new(20.0, 90.0));
    }
}
