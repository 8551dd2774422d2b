use std::ops::Index;

use log::{debug, warn};

use crate::error::DataIntegrityError;
use crate::role::Role;
use crate::square::Square;

/// Chemin validé allant de l'entrée à la sortie d'un labyrinthe.
///
/// Deux cases consécutives partagent toujours une ligne ou une colonne. La
/// distance entre elles n'est pas contrôlée : un couloir peut être résumé par
/// ses seules extrémités.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    squares: Vec<Square>,
}

impl Solution {
    pub fn new(squares: Vec<Square>) -> Result<Self, DataIntegrityError> {
        if let Err(e) = validate(&squares) {
            warn!("solution rejected: {}", e);
            return Err(e);
        }
        debug!("solution of {} squares validated", squares.len());
        Ok(Self { squares })
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Toujours faux : une solution contient au moins l'entrée et la sortie.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

fn validate(squares: &[Square]) -> Result<(), DataIntegrityError> {
    let (first, last) = match (squares.first(), squares.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(DataIntegrityError::EmptySolution),
    };
    if first.role() != Role::Entrance {
        return Err(DataIntegrityError::NotStartingAtEntrance { role: first.role() });
    }
    if last.role() != Role::Exit {
        return Err(DataIntegrityError::NotEndingAtExit { role: last.role() });
    }

    let mut previous = first;
    for (position, current) in squares.iter().enumerate().skip(1) {
        if !previous.aligned_with(current) {
            return Err(DataIntegrityError::NonOrthogonalStep {
                position,
                from: (previous.row(), previous.column()),
                to: (current.row(), current.column()),
            });
        }
        previous = current;
    }
    Ok(())
}

impl Index<usize> for Solution {
    type Output = Square;

    fn index(&self, index: usize) -> &Square {
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl TryFrom<Vec<Square>> for Solution {
    type Error = DataIntegrityError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Solution::new(squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::Border;
    use crate::maze::tests::grid;
    use crate::maze::Maze;

    fn pick(maze: &Maze, indices: &[usize]) -> Vec<Square> {
        indices.iter().map(|&i| maze[i]).collect()
    }

    #[test_log::test]
    fn test_path_along_the_edges() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        // 0 -> 1 -> 2 -> 5 -> 8
        let solution = Solution::new(pick(&maze, &[0, 1, 2, 5, 8])).unwrap();
        assert_eq!(solution.len(), 5);
        assert!(!solution.is_empty());
        assert_eq!(solution[0], *maze.entrance());
        assert_eq!(solution.get(4), Some(maze.exit()));
        assert_eq!(
            solution.iter().map(Square::index).collect::<Vec<_>>(),
            vec![0, 1, 2, 5, 8]
        );
    }

    #[test_log::test]
    fn test_skipping_squares_is_allowed() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        // 0 -> 2 -> 8 : pas d'adjacence exigée, seulement l'alignement
        let solution = Solution::try_from(pick(&maze, &[0, 2, 8])).unwrap();
        assert_eq!((&solution).into_iter().count(), 3);
    }

    #[test_log::test]
    fn test_must_start_at_entrance() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        assert_eq!(
            Solution::new(pick(&maze, &[1, 2, 5, 8])),
            Err(DataIntegrityError::NotStartingAtEntrance { role: Role::None })
        );
    }

    #[test_log::test]
    fn test_must_end_at_exit() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        assert_eq!(
            Solution::new(pick(&maze, &[0, 1, 2, 5])),
            Err(DataIntegrityError::NotEndingAtExit { role: Role::None })
        );
    }

    #[test_log::test]
    fn test_diagonal_step_is_rejected() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        // 1 (0,1) -> 5 (1,2) change de ligne et de colonne
        assert_eq!(
            Solution::new(pick(&maze, &[0, 1, 5, 8])),
            Err(DataIntegrityError::NonOrthogonalStep {
                position: 2,
                from: (0, 1),
                to: (1, 2),
            })
        );
    }

    #[test_log::test]
    fn test_first_bad_pair_is_reported() {
        let maze = Maze::new(grid(3, 3)).unwrap();
        assert_eq!(
            Solution::new(pick(&maze, &[0, 4, 8])),
            Err(DataIntegrityError::NonOrthogonalStep {
                position: 1,
                from: (0, 0),
                to: (1, 1),
            })
        );
    }

    #[test_log::test]
    fn test_empty_and_single_square() {
        assert_eq!(Solution::new(Vec::new()), Err(DataIntegrityError::EmptySolution));

        let lone = Square::with_role(0, 0, 0, Border::EMPTY, Role::Entrance);
        assert_eq!(
            Solution::new(vec![lone]),
            Err(DataIntegrityError::NotEndingAtExit {
                role: Role::Entrance
            })
        );
    }
}
