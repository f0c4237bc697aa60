use itertools::iproduct;

use crate::{v2, IndexSet, IntVec2};

/// Cells of a one cell wide line from `a` to `b`, both endpoints included.
///
/// Steps one cell along the dominant axis every iteration and one cell along
/// the minor axis whenever the accumulated error exceeds the dominant axis
/// length.
///
/// ```
/// # use gridkit::{line, v2};
/// assert_eq!(
///     line(v2(0, 0), v2(5, 2)).collect::<Vec<_>>(),
///     vec![v2(0, 0), v2(1, 0), v2(2, 1), v2(3, 1), v2(4, 2), v2(5, 2)]
/// );
/// ```
pub fn line(
    a: impl Into<IntVec2>,
    b: impl Into<IntVec2>,
) -> impl Iterator<Item = IntVec2> {
    let (a, b): (IntVec2, IntVec2) = (a.into(), b.into());

    let step = (b - a).signum();
    let d = (b - a).abs();
    let (major, minor) = if d.x >= d.y { (0, 1) } else { (1, 0) };

    let mut p = a;
    let mut err = 0;
    let mut remaining = d[major] + 1;

    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        remaining -= 1;
        let ret = p;
        if remaining == 0 {
            // Don't step past the end, it may sit at the edge of the range.
            return Some(ret);
        }

        p[major] += step[major];
        err += 2 * d[minor];
        if err > d[major] {
            p[minor] += step[minor];
            err -= 2 * d[major];
        }
        Some(ret)
    })
}

/// Cells of a line that is `thickness` cells wide.
///
/// The line is drawn as `thickness × thickness` parallel lines with their
/// endpoints offset towards positive x and y. Every cell is listed once, in
/// the order it was first drawn. Nothing is drawn if `thickness` is not
/// positive. Offset endpoints that would leave the `i32` range stay at its
/// edge.
pub fn thick_line(a: IntVec2, b: IntVec2, thickness: i32) -> Vec<IntVec2> {
    let shift =
        |p: IntVec2, dx, dy| v2(p.x.saturating_add(dx), p.y.saturating_add(dy));

    let mut ret = IndexSet::default();
    for (dx, dy) in iproduct!(0..thickness, 0..thickness) {
        ret.extend(line(shift(a, dx, dy), shift(b, dx, dy)));
    }
    log::trace!("thick_line {a} to {b}: {} cells", ret.len());
    ret.into_iter().collect()
}

/// Outline of a circle using the midpoint circle algorithm.
///
/// Emits the eight octant reflections of every step without removing
/// repeats, so cells on the axes and the diagonals show up several times.
/// Use `circle_outline` for a list without repeats. Negative radius gives an
/// empty list.
pub fn circle_points(center: IntVec2, radius: i32) -> Vec<IntVec2> {
    let mut ret = Vec::new();

    let (mut x, mut y) = (radius, 0);
    let mut err = 0;

    while x >= y {
        ret.extend(
            [
                v2(x, y),
                v2(y, x),
                v2(-y, x),
                v2(-x, y),
                v2(-x, -y),
                v2(-y, -x),
                v2(y, -x),
                v2(x, -y),
            ]
            .map(|p| center + p),
        );

        if err <= 0 {
            y += 1;
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }

    log::trace!("circle_points {center} r{radius}: {} cells", ret.len());
    ret
}

/// Outline of a circle with every cell listed once, in the order
/// `circle_points` first emits it.
pub fn circle_outline(center: IntVec2, radius: i32) -> Vec<IntVec2> {
    circle_points(center, radius)
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashSet;
    use quickcheck_macros::quickcheck;

    fn small(a: (i8, i8)) -> IntVec2 {
        v2(a.0 as i32, a.1 as i32)
    }

    #[test]
    fn straight_lines() {
        assert_eq!(
            thick_line(v2(0, 0), v2(3, 0), 1),
            vec![v2(0, 0), v2(1, 0), v2(2, 0), v2(3, 0)]
        );
        assert_eq!(
            line(v2(0, 0), v2(0, -3)).collect::<Vec<_>>(),
            vec![v2(0, 0), v2(0, -1), v2(0, -2), v2(0, -3)]
        );
        assert_eq!(
            line(v2(2, 2), v2(-1, -1)).collect::<Vec<_>>(),
            vec![v2(2, 2), v2(1, 1), v2(0, 0), v2(-1, -1)]
        );
        assert_eq!(
            line(v2(4, 4), v2(4, 4)).collect::<Vec<_>>(),
            vec![v2(4, 4)]
        );
    }

    #[test]
    fn steep_line() {
        assert_eq!(
            line(v2(0, 0), v2(-2, 5)).collect::<Vec<_>>(),
            vec![v2(0, 0), v2(0, 1), v2(-1, 2), v2(-1, 3), v2(-2, 4), v2(-2, 5)]
        );
    }

    #[test]
    fn thick_lines() {
        let cells = thick_line(v2(0, 0), v2(3, 0), 2);
        assert_eq!(cells.len(), 8);
        for x in 0..4 {
            assert!(cells.contains(&v2(x, 0)));
            assert!(cells.contains(&v2(x, 1)));
        }

        // Overlapping sub-lines only list each cell once.
        let cells = thick_line(v2(0, 0), v2(4, 4), 3);
        let unique: HashSet<IntVec2> = cells.iter().copied().collect();
        assert_eq!(unique.len(), cells.len());
        assert!(cells.contains(&v2(6, 6)));

        assert!(thick_line(v2(0, 0), v2(3, 0), 0).is_empty());
        assert!(thick_line(v2(0, 0), v2(3, 0), -2).is_empty());
    }

    #[test]
    fn lines_at_range_edge() {
        let (min, max) = (i32::MIN, i32::MAX);

        assert_eq!(
            line(v2(max - 2, min), v2(max, min + 2)).collect::<Vec<_>>(),
            vec![v2(max - 2, min), v2(max - 1, min + 1), v2(max, min + 2)]
        );
        assert_eq!(
            thick_line(v2(max, 0), v2(max, 0), 2),
            vec![v2(max, 0), v2(max, 1)]
        );
        assert_eq!(
            thick_line(v2(max - 1, max), v2(max, max), 2),
            vec![v2(max - 1, max), v2(max, max)]
        );
    }

    #[test]
    fn small_circles() {
        assert_eq!(circle_points(v2(3, 3), 0), vec![v2(3, 3); 8]);
        assert!(circle_points(v2(3, 3), -1).is_empty());

        assert_eq!(circle_points(v2(0, 0), 1).len(), 8);
        assert_eq!(
            circle_outline(v2(10, 20), 1),
            vec![v2(11, 20), v2(10, 21), v2(9, 20), v2(10, 19)]
        );
    }

    #[test]
    fn circle_shape() {
        let pts = circle_points(v2(0, 0), 5);
        for p in [v2(5, 0), v2(0, 5), v2(-5, 0), v2(0, -5)] {
            assert!(pts.contains(&p));
        }
        // Axis cells are repeated.
        assert!(pts.iter().filter(|&&p| p == v2(5, 0)).count() > 1);

        let outline = circle_outline(v2(0, 0), 5);
        assert!(outline.len() < pts.len());
        let unique: HashSet<IntVec2> = pts.iter().copied().collect();
        assert_eq!(unique.len(), outline.len());
    }

    #[quickcheck]
    fn line_is_connected(a: (i8, i8), b: (i8, i8)) -> bool {
        let (a, b) = (small(a), small(b));
        let cells: Vec<IntVec2> = line(a, b).collect();
        let d = (b - a).abs();

        cells.first() == Some(&a)
            && cells.last() == Some(&b)
            && cells.len() as i32 == d.x.max(d.y) + 1
            && cells.windows(2).all(|w| {
                let step = (w[1] - w[0]).abs();
                step.x <= 1 && step.y <= 1 && step != IntVec2::ZERO
            })
    }

    #[quickcheck]
    fn thick_line_has_no_repeats(a: (i8, i8), b: (i8, i8), t: u8) -> bool {
        let cells = thick_line(small(a), small(b), (t % 4) as i32);
        let unique: HashSet<IntVec2> = cells.iter().copied().collect();
        unique.len() == cells.len()
    }

    #[quickcheck]
    fn circle_is_symmetric(center: IntVec2, r: u8) -> bool {
        let r = r as i32 % 40;
        let pts = circle_points(center, r);

        let mut offsets: Vec<IntVec2> =
            pts.iter().map(|&p| p - center).collect();
        let mut rotated: Vec<IntVec2> =
            offsets.iter().map(|&p| v2(-p.y, p.x)).collect();
        offsets.sort();
        rotated.sort();

        offsets == rotated
            && pts.iter().all(|&p| {
                let d = p - center;
                let len2 = d.x * d.x + d.y * d.y;
                (r - 2).max(0).pow(2) <= len2 && len2 <= r * r
            })
    }
}
