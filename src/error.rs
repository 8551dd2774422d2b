/*!
 * # Erreurs d'intégrité
 *
 * Toutes les erreurs levées à la construction d'un `Maze` ou d'une `Solution`.
 * Une fois l'objet construit, il est garanti cohérent : aucune autre erreur
 * ne peut survenir en le lisant.
 */

use crate::role::Role;

/// Violation d'un invariant structurel détectée à la construction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// `squares[position].index` ne vaut pas `position`.
    #[error("square at position {position} has index {found}")]
    IndexDiscontinuity { position: usize, found: usize },

    /// La case rangée en `index` ne porte pas les coordonnées attendues.
    #[error(
        "square {index} is at ({row}, {column}), expected ({expected_row}, {expected_column})"
    )]
    GridMismatch {
        index: usize,
        expected_row: usize,
        expected_column: usize,
        row: usize,
        column: usize,
    },

    /// Le nombre de cases ne correspond pas à `width * height`.
    #[error("{count} squares cannot fill a {width}x{height} grid")]
    GridSize {
        width: usize,
        height: usize,
        count: usize,
    },

    #[error("maze has no entrance")]
    MissingEntrance,

    #[error("maze must have exactly one entrance, found {count}")]
    DuplicateEntrance { count: usize },

    #[error("maze has no exit")]
    MissingExit,

    #[error("maze must have exactly one exit, found {count}")]
    DuplicateExit { count: usize },

    #[error("solution has no squares")]
    EmptySolution,

    #[error("solution must start at the entrance, starts on {role:?}")]
    NotStartingAtEntrance { role: Role },

    #[error("solution must end at the exit, ends on {role:?}")]
    NotEndingAtExit { role: Role },

    /// Deux cases consécutives ne partagent ni ligne ni colonne.
    #[error("step {position} goes from {from:?} to {to:?}: squares must lie in the same row or column")]
    NonOrthogonalStep {
        position: usize,
        from: (usize, usize),
        to: (usize, usize),
    },
}
