use log::trace;

use crate::border::Border;
use crate::primitives::{DisjointLines, Line, Point, Polygon, Polyline, Primitive};

/// Transforme les murs d'une case en la plus petite primitive qui les dessine.
///
/// Les coins sont déduits de `top_left` et de `square_size` :
///
/// ```text
/// top_left    •-------• top_right
///             |       |
///             |       |
/// bottom_left •-------• bottom_right
/// ```
///
/// L'ordre des points des polylignes suit les côtés murés, toujours dans le
/// même sens ; il fait partie du résultat attendu.
pub fn decompose(border: Border, top_left: Point, square_size: i32) -> Primitive {
    let top_right = top_left.translate(square_size, 0);
    let bottom_right = top_left.translate(square_size, square_size);
    let bottom_left = top_left.translate(0, square_size);

    let top = Line::new(top_left, top_right);
    let bottom = Line::new(bottom_left, bottom_right);
    let left = Line::new(top_left, bottom_left);
    let right = Line::new(top_right, bottom_right);

    let walls = (
        border.contains(Border::TOP),
        border.contains(Border::BOTTOM),
        border.contains(Border::LEFT),
        border.contains(Border::RIGHT),
    );

    let primitive: Primitive = match walls {
        // (top, bottom, left, right)
        (true, true, true, true) => {
            Polygon(vec![top_left, top_right, bottom_right, bottom_left]).into()
        }

        // ⊏
        (true, true, true, false) => {
            Polyline(vec![bottom_right, bottom_left, top_left, top_right]).into()
        }
        // ⊓
        (true, false, true, true) => {
            Polyline(vec![bottom_left, top_left, top_right, bottom_right]).into()
        }
        // ⊐
        (true, true, false, true) => {
            Polyline(vec![top_left, top_right, bottom_right, bottom_left]).into()
        }
        // ⊔
        (false, true, true, true) => {
            Polyline(vec![top_right, bottom_right, bottom_left, top_left]).into()
        }

        (true, false, true, false) => Polyline(vec![bottom_left, top_left, top_right]).into(),
        (true, false, false, true) => Polyline(vec![top_left, top_right, bottom_right]).into(),
        (false, true, true, false) => Polyline(vec![bottom_right, bottom_left, top_left]).into(),
        (false, true, false, true) => Polyline(vec![top_right, bottom_right, bottom_left]).into(),

        // murs parallèles
        (false, false, true, true) => DisjointLines(vec![left, right]).into(),
        (true, true, false, false) => DisjointLines(vec![top, bottom]).into(),

        (false, false, true, false) => left.into(),
        (false, false, false, true) => right.into(),
        (true, false, false, false) => top.into(),
        (false, true, false, false) => bottom.into(),

        (false, false, false, false) => Primitive::Null,
    };

    trace!("decompose {:?} at {} -> {:?}", border, top_left, primitive);
    primitive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{attributes, Attributes, Render};
    use serde_json::json;

    const T: Border = Border::TOP;
    const B: Border = Border::BOTTOM;
    const L: Border = Border::LEFT;
    const R: Border = Border::RIGHT;

    fn origin() -> Point {
        Point::new(0, 0)
    }

    fn points(primitive: &Primitive) -> Vec<(i32, i32)> {
        match primitive {
            Primitive::Polygon(Polygon(points)) | Primitive::Polyline(Polyline(points)) => {
                points.iter().map(|p| (p.x, p.y)).collect()
            }
            other => panic!("not a multi-point primitive: {:?}", other),
        }
    }

    #[test_log::test]
    fn test_closed_box() {
        let primitive = decompose(T | B | L | R, origin(), 10);
        assert!(matches!(primitive, Primitive::Polygon(_)));
        assert_eq!(
            primitive.render(&Attributes::new()),
            r#"<polygon points="0,0 10,0 10,10 0,10" />"#
        );
    }

    #[test_log::test]
    fn test_three_walls() {
        let cases = [
            (B | L | T, vec![(10, 10), (0, 10), (0, 0), (10, 0)]),
            (L | T | R, vec![(0, 10), (0, 0), (10, 0), (10, 10)]),
            (T | R | B, vec![(0, 0), (10, 0), (10, 10), (0, 10)]),
            (R | B | L, vec![(10, 0), (10, 10), (0, 10), (0, 0)]),
        ];
        for (border, expected) in cases {
            let primitive = decompose(border, origin(), 10);
            assert!(matches!(primitive, Primitive::Polyline(_)), "{:?}", border);
            assert_eq!(points(&primitive), expected, "{:?}", border);
        }
    }

    #[test_log::test]
    fn test_corners() {
        let cases = [
            (L | T, vec![(0, 10), (0, 0), (10, 0)]),
            (T | R, vec![(0, 0), (10, 0), (10, 10)]),
            (B | L, vec![(10, 10), (0, 10), (0, 0)]),
            (R | B, vec![(10, 0), (10, 10), (0, 10)]),
        ];
        for (border, expected) in cases {
            assert!(border.corner());
            let primitive = decompose(border, origin(), 10);
            assert!(matches!(primitive, Primitive::Polyline(_)), "{:?}", border);
            assert_eq!(points(&primitive), expected, "{:?}", border);
        }
    }

    #[test_log::test]
    fn test_parallel_walls() {
        let none = Attributes::new();
        assert_eq!(
            decompose(L | R, origin(), 10).render(&none),
            concat!(
                r#"<line x1="0" y1="0" x2="0" y2="10" />"#,
                r#"<line x1="10" y1="0" x2="10" y2="10" />"#
            )
        );
        assert_eq!(
            decompose(T | B, origin(), 10).render(&none),
            concat!(
                r#"<line x1="0" y1="0" x2="10" y2="0" />"#,
                r#"<line x1="0" y1="10" x2="10" y2="10" />"#
            )
        );
    }

    #[test_log::test]
    fn test_single_walls() {
        let o = origin();
        let corner = |x, y| Point::new(x, y);
        assert_eq!(
            decompose(L, o, 10),
            Primitive::Line(Line::new(corner(0, 0), corner(0, 10)))
        );
        assert_eq!(
            decompose(R, o, 10),
            Primitive::Line(Line::new(corner(10, 0), corner(10, 10)))
        );
        assert_eq!(
            decompose(T, o, 10),
            Primitive::Line(Line::new(corner(0, 0), corner(10, 0)))
        );
        assert_eq!(
            decompose(B, o, 10),
            Primitive::Line(Line::new(corner(0, 10), corner(10, 10)))
        );
        assert_eq!(
            decompose(L, o, 10).render(&Attributes::new()),
            r#"<line x1="0" y1="0" x2="0" y2="10" />"#
        );
    }

    #[test_log::test]
    fn test_no_walls() {
        let primitive = decompose(Border::EMPTY, Point::new(40, 80), 20);
        assert_eq!(primitive, Primitive::Null);
        assert_eq!(primitive.render(&attributes(json!({"stroke": "black"}))), "");
    }

    #[test_log::test]
    fn test_near_coordinate_bounds() {
        let primitive = decompose(T, Point::new(i32::MAX - 5, 0), 10);
        assert_eq!(
            primitive,
            Primitive::Line(Line::new(
                Point::new(i32::MAX - 5, 0),
                Point::new(i32::MIN + 4, 0)
            ))
        );
    }

    #[test_log::test]
    fn test_offset_and_size() {
        let primitive = decompose(T | R, Point::new(30, 60), 15);
        assert_eq!(
            primitive.render(&attributes(json!({"fill": "none", "stroke_width": 2}))),
            r#"<polyline points="30,60 45,60 45,75" fill="none" stroke-width="2" />"#
        );
    }

    #[test_log::test]
    fn test_every_border_has_a_shape() {
        for n in 0u8..16 {
            let border = Border::from_nibble(n);
            let primitive = decompose(border, origin(), 10);
            let expected = match border.wall_count() {
                0 => "Null",
                1 => "Line",
                2 if border.corner() => "Polyline",
                2 => "DisjointLines",
                3 => "Polyline",
                _ => "Polygon",
            };
            let kind = match primitive {
                Primitive::Null => "Null",
                Primitive::Line(_) => "Line",
                Primitive::Polyline(_) => "Polyline",
                Primitive::DisjointLines(_) => "DisjointLines",
                Primitive::Polygon(_) => "Polygon",
                _ => "other",
            };
            assert_eq!(kind, expected, "{:?}", border);
        }
    }
}
