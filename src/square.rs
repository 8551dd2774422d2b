use crate::border::Border;
use crate::role::Role;

/// Représente une case du labyrinthe.
///
/// Une case connaît sa position dans la séquence du labyrinthe (`index`),
/// ses coordonnées dans la grille, ses murs et son rôle. Elle n'est plus
/// modifiable une fois créée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    index: usize,
    row: usize,
    column: usize,
    border: Border,
    role: Role,
}

impl Square {
    /// Crée une case ordinaire (rôle `Role::None`).
    pub fn new(index: usize, row: usize, column: usize, border: Border) -> Self {
        Self::with_role(index, row, column, border, Role::None)
    }

    pub fn with_role(index: usize, row: usize, column: usize, border: Border, role: Role) -> Self {
        Self {
            index,
            row,
            column,
            border,
            role,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Vrai si les deux cases partagent une ligne ou une colonne.
    pub fn aligned_with(&self, other: &Square) -> bool {
        self.row == other.row || self.column == other.column
    }
}
