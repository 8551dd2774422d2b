//! Modèle de labyrinthe validé et décomposition des murs en primitives SVG.
//!
//! Un générateur externe fournit les cases ; `Maze::new` et `Solution::new`
//! vérifient les invariants ; `decompose` transforme les murs de chaque case
//! en une forme minimale que `Render::render` sérialise en balise.

pub mod border;
pub mod codec;
pub mod decomposer;
pub mod error;
pub mod maze;
pub mod primitives;
pub mod role;
pub mod solution;
pub mod square;

pub use border::Border;
pub use codec::{CodecError, CodecResult};
pub use decomposer::decompose;
pub use error::DataIntegrityError;
pub use maze::Maze;
pub use primitives::{attributes, tag, Attributes, Point, Primitive, Render};
pub use role::Role;
pub use solution::Solution;
pub use square::Square;

// -----------------------------------------------------------------------------
// TEST
// -----------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SQUARE_SIZE: i32 = 10;

    fn top_left(square: &Square) -> Point {
        Point::new(
            square.column() as i32 * SQUARE_SIZE,
            square.row() as i32 * SQUARE_SIZE,
        )
    }

    #[test_log::test]
    fn test_render_every_square_of_a_maze() {
        // E ━┓
        // ┗━ X
        let squares = vec![
            Square::with_role(0, 0, 0, Border::TOP | Border::LEFT, Role::Entrance),
            Square::new(1, 0, 1, Border::TOP | Border::RIGHT | Border::BOTTOM),
            Square::new(2, 1, 0, Border::LEFT | Border::BOTTOM | Border::TOP),
            Square::with_role(3, 1, 1, Border::EMPTY, Role::Exit),
        ];
        let maze = Maze::new(squares).unwrap();
        let style = attributes(json!({"stroke": "black", "stroke_width": 1}));

        let markup: Vec<String> = maze
            .iter()
            .map(|square| decompose(square.border(), top_left(square), SQUARE_SIZE).render(&style))
            .collect();

        assert_eq!(
            markup,
            vec![
                r#"<polyline points="0,10 0,0 10,0" stroke="black" stroke-width="1" />"#,
                r#"<polyline points="10,0 20,0 20,10 10,10" stroke="black" stroke-width="1" />"#,
                r#"<polyline points="10,20 0,20 0,10 10,10" stroke="black" stroke-width="1" />"#,
                "",
            ]
        );

        let solution = Solution::new(vec![maze[0], maze[1], maze[3]]).unwrap();
        let labels: String = solution
            .iter()
            .enumerate()
            .map(|(step, square)| {
                let p = top_left(square).translate(SQUARE_SIZE / 2, SQUARE_SIZE / 2);
                primitives::Text::new(step.to_string(), p).render(&Attributes::new())
            })
            .collect();
        assert_eq!(
            labels,
            r#"<text x="5" y="5">0</text><text x="15" y="5">1</text><text x="15" y="15">2</text>"#
        );
    }
}
