/*!
 * # Labyrinthe validé
 *
 * Un `Maze` est une séquence ordonnée de cases formant une grille
 * rectangulaire. Les invariants sont vérifiés une seule fois, à la
 * construction :
 *
 * 1. `squares[i].index == i` ;
 * 2. la case `y * width + x` se trouve en ligne `y`, colonne `x`, et la
 *    grille est complète ;
 * 3. exactement une entrée ;
 * 4. exactement une sortie.
 *
 * La largeur, la hauteur, l'entrée et la sortie sont calculées pendant la
 * construction puis ne changent plus.
 */

use std::ops::Index;

use log::{debug, warn};

use crate::error::DataIntegrityError;
use crate::role::Role;
use crate::square::Square;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    squares: Vec<Square>,
    width: usize,
    height: usize,
    entrance: usize,
    exit: usize,
}

impl Maze {
    /// Valide la séquence et construit le labyrinthe.
    ///
    /// # Retour
    ///
    /// La première violation rencontrée, dans l'ordre des invariants, ou le
    /// labyrinthe construit.
    pub fn new(squares: Vec<Square>) -> Result<Self, DataIntegrityError> {
        match Self::validate(&squares) {
            Ok((width, height, entrance, exit)) => {
                debug!(
                    "maze {}x{} validated, entrance at {}, exit at {}",
                    width, height, entrance, exit
                );
                Ok(Self {
                    squares,
                    width,
                    height,
                    entrance,
                    exit,
                })
            }
            Err(e) => {
                warn!("maze rejected: {}", e);
                Err(e)
            }
        }
    }

    fn validate(squares: &[Square]) -> Result<(usize, usize, usize, usize), DataIntegrityError> {
        validate_indices(squares)?;
        let (width, height) = validate_grid(squares)?;
        let entrance = find_unique(squares, Role::Entrance)
            .map_err(|count| match count {
                0 => DataIntegrityError::MissingEntrance,
                count => DataIntegrityError::DuplicateEntrance { count },
            })?;
        let exit = find_unique(squares, Role::Exit).map_err(|count| match count {
            0 => DataIntegrityError::MissingExit,
            count => DataIntegrityError::DuplicateExit { count },
        })?;
        Ok((width, height, entrance, exit))
    }

    /// `max(column) + 1`
    pub fn width(&self) -> usize {
        self.width
    }

    /// `max(row) + 1`
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn entrance(&self) -> &Square {
        &self.squares[self.entrance]
    }

    pub fn exit(&self) -> &Square {
        &self.squares[self.exit]
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Case en ligne `row`, colonne `column`.
    pub fn at(&self, row: usize, column: usize) -> Option<&Square> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.squares.get(row * self.width + column)
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

impl Index<usize> for Maze {
    type Output = Square;

    fn index(&self, index: usize) -> &Square {
        &self.squares[index]
    }
}

impl<'a> IntoIterator for &'a Maze {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl TryFrom<Vec<Square>> for Maze {
    type Error = DataIntegrityError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Maze::new(squares)
    }
}

fn validate_indices(squares: &[Square]) -> Result<(), DataIntegrityError> {
    for (position, square) in squares.iter().enumerate() {
        if square.index() != position {
            return Err(DataIntegrityError::IndexDiscontinuity {
                position,
                found: square.index(),
            });
        }
    }
    Ok(())
}

/// Retourne `(width, height)` si chaque case est à sa place dans la grille.
fn validate_grid(squares: &[Square]) -> Result<(usize, usize), DataIntegrityError> {
    // saturé : une dimension à usize::MAX ne correspond jamais à squares.len()
    let width = squares
        .iter()
        .map(|s| s.column().saturating_add(1))
        .max()
        .unwrap_or(0);
    let height = squares
        .iter()
        .map(|s| s.row().saturating_add(1))
        .max()
        .unwrap_or(0);

    if width.checked_mul(height) != Some(squares.len()) {
        return Err(DataIntegrityError::GridSize {
            width,
            height,
            count: squares.len(),
        });
    }

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let square = &squares[index];
            if square.row() != y || square.column() != x {
                return Err(DataIntegrityError::GridMismatch {
                    index,
                    expected_row: y,
                    expected_column: x,
                    row: square.row(),
                    column: square.column(),
                });
            }
        }
    }
    Ok((width, height))
}

/// Position de l'unique case portant `role`, sinon le nombre de cases trouvées.
fn find_unique(squares: &[Square], role: Role) -> Result<usize, usize> {
    let mut found = None;
    let mut count = 0;
    for (position, square) in squares.iter().enumerate() {
        if square.role() == role {
            count += 1;
            found.get_or_insert(position);
        }
    }
    match found {
        Some(position) if count == 1 => Ok(position),
        _ => Err(count),
    }
}
