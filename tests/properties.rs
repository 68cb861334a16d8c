//! Run with: `cargo test --test properties`

use hexgrid::geometry::{Direction, HexCoordinate};
use proptest::prelude::*;

const SPAN: i32 = 10_000;

prop_compose! {
    fn coordinate()(q in -SPAN..=SPAN, r in -SPAN..=SPAN) -> HexCoordinate {
        HexCoordinate::new(q, r, -q - r).unwrap()
    }
}

prop_compose! {
    fn sized_coordinate()(
        q in -SPAN..=SPAN,
        r in -SPAN..=SPAN,
        radius in 0.05f64..500.0
    ) -> HexCoordinate {
        HexCoordinate::with_radius(q, r, -q - r, radius).unwrap()
    }
}

fn on_plane(coordinate: &HexCoordinate) -> bool {
    coordinate.q() as i64 + coordinate.r() as i64 + coordinate.s() as i64 == 0
}

proptest! {
    #[test]
    fn construction_enforces_constraint(q in any::<i32>(), r in any::<i32>(), s in any::<i32>()) {
        let sum = q as i64 + r as i64 + s as i64;
        prop_assert_eq!(HexCoordinate::new(q, r, s).is_ok(), sum == 0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn distance_to_self_is_zero(a in sized_coordinate()) {
        prop_assert_eq!(a.distance_to(&a), 0);
    }

    #[test]
    fn distance_obeys_triangle_inequality(
        a in coordinate(),
        b in coordinate(),
        c in coordinate()
    ) {
        prop_assert!(a.distance_to(&c) <= a.distance_to(&b) + b.distance_to(&c));
    }

    #[test]
    fn neighbors_are_one_step_away(a in coordinate()) {
        for neighbor in a.neighbors() {
            let neighbor = HexCoordinate::try_from(*neighbor).unwrap();
            prop_assert_eq!(a.distance_to(&neighbor), 1);
        }
        for direction in Direction::iter() {
            let neighbor = a.neighbor(direction).unwrap();
            prop_assert_eq!(neighbor.neighbor(direction.reverse()).unwrap(), a.clone());
        }
    }

    #[test]
    fn center_locates_own_cell(a in sized_coordinate()) {
        let located = HexCoordinate::from_cartesian(a.x(), a.y(), a.radius());
        prop_assert_eq!(located, a);
    }

    #[test]
    fn from_cartesian_is_total(
        x in prop::num::f64::ANY,
        y in prop::num::f64::ANY,
        radius in prop::num::f64::ANY
    ) {
        prop_assert!(on_plane(&HexCoordinate::from_cartesian(x, y, radius)));
    }

    #[test]
    fn from_cartesian_stays_near_point(x in -1e4f64..1e4, y in -1e4f64..1e4) {
        let located = HexCoordinate::from_cartesian(x, y, 1.0);
        prop_assert!(on_plane(&located));
        let (dx, dy) = (located.x() - x, located.y() - y);
        // no point in a cell is further from the center than a vertex
        prop_assert!((dx * dx + dy * dy).sqrt() <= 1.0 + 1e-6);
    }

    #[test]
    fn line_spans_endpoints(a in sized_coordinate(), b in coordinate()) {
        let (q, r) = (b.q() / 10, b.r() / 10);
        let b = HexCoordinate::with_radius(q, r, -q - r, a.radius()).unwrap();
        let line = a.line_to(&b);

        prop_assert_eq!(line.len() as u64, a.distance_to(&b) + 1);
        prop_assert_eq!(&line[0], &a);

        let last = line.last().unwrap();
        prop_assert_eq!(last, &b);
        prop_assert_eq!(last.x(), b.x());
        prop_assert_eq!(last.y(), b.y());
        prop_assert_eq!(last.radius(), b.radius());

        prop_assert!(line.iter().all(on_plane));
    }

    #[test]
    fn display_round_trips(a in coordinate()) {
        prop_assert_eq!(a.to_string().parse::<HexCoordinate>().unwrap(), a);
    }
}
