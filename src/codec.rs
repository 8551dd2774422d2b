/*!
 * # Encodage binaire
 *
 * Format compact pour faire circuler un labyrinthe validé (et une solution)
 * entre collaborateurs, sur n'importe quel flux `Read`/`Write`.
 *
 * Labyrinthe :
 * - `b"MAZE"` puis la version du format (`u8`) ;
 * - largeur et hauteur en `u32` little-endian ;
 * - une case par octet, ligne par ligne : rôle dans le quartet haut, murs
 *   dans le quartet bas.
 *
 * Solution : nombre de cases (`u32` LE) puis l'index de chaque case dans le
 * labyrinthe (`u32` LE).
 *
 * Le décodage reconstruit les cases puis repasse par `Maze::new` /
 * `Solution::new` : un flux décodé respecte donc les mêmes invariants qu'un
 * objet construit à la main.
 */

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, trace};

use crate::border::Border;
use crate::error::DataIntegrityError;
use crate::maze::Maze;
use crate::role::Role;
use crate::solution::Solution;
use crate::square::Square;

pub const MAGIC: &[u8; 4] = b"MAZE";
pub const FORMAT_VERSION: u8 = 1;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not a maze stream (magic {0:?})")]
    BadMagic([u8; 4]),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    #[error("unknown role code {code} for square {index}")]
    UnknownRole { index: usize, code: u8 },

    #[error("dimensions {width}x{height} do not fit in memory")]
    Oversized { width: u32, height: u32 },

    #[error("solution refers to square {0}, outside the maze")]
    UnknownSquare(u32),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Empaquette une case sur un octet : `role << 4 | border`.
pub fn encode_square(square: &Square) -> u8 {
    square.role().code() << 4 | square.border().bits()
}

/// Décode l'octet d'une case placée en `index` dans une grille de largeur `width`.
pub fn decode_square(byte: u8, index: usize, width: usize) -> CodecResult<Square> {
    let code = byte >> 4;
    let role = Role::try_from(code).map_err(|code| CodecError::UnknownRole { index, code })?;
    let border = Border::from_nibble(byte);
    Ok(Square::with_role(index, index / width, index % width, border, role))
}

fn dimension(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

/// Écrit le labyrinthe sur le flux.
pub fn write_maze<W: Write>(writer: &mut W, maze: &Maze) -> CodecResult<()> {
    writer.write_all(MAGIC)?;
    writer.write_u8(FORMAT_VERSION)?;
    writer.write_u32::<LittleEndian>(dimension(maze.width())?)?;
    writer.write_u32::<LittleEndian>(dimension(maze.height())?)?;
    let bytes: Vec<u8> = maze.iter().map(encode_square).collect();
    writer.write_all(&bytes)?;
    debug!(
        "maze {}x{} written ({} squares)",
        maze.width(),
        maze.height(),
        bytes.len()
    );
    Ok(())
}

/// Lit un labyrinthe et vérifie ses invariants.
pub fn read_maze<R: Read>(reader: &mut R) -> CodecResult<Maze> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(CodecError::BadMagic(magic));
    }
    let version = reader.read_u8()?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion(version));
    }
    let width = reader.read_u32::<LittleEndian>()?;
    let height = reader.read_u32::<LittleEndian>()?;
    trace!("maze header: version {}, {}x{}", version, width, height);

    let count = u64::from(width) * u64::from(height);
    if count > isize::MAX as u64 {
        return Err(CodecError::Oversized { width, height });
    }
    // lecture progressive : un en-tête mensonger ne réserve rien d'avance
    let mut buffer = Vec::new();
    reader.take(count).read_to_end(&mut buffer)?;
    if buffer.len() as u64 != count {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("expected {} squares, stream holds {}", count, buffer.len()),
        )
        .into());
    }

    let squares = buffer
        .iter()
        .enumerate()
        .map(|(index, &byte)| decode_square(byte, index, width as usize))
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(Maze::new(squares)?)
}

/// Écrit la solution sous forme d'index de cases.
pub fn write_solution<W: Write>(writer: &mut W, solution: &Solution) -> CodecResult<()> {
    writer.write_u32::<LittleEndian>(dimension(solution.len())?)?;
    for square in solution {
        writer.write_u32::<LittleEndian>(dimension(square.index())?)?;
    }
    debug!("solution of {} squares written", solution.len());
    Ok(())
}

/// Lit une solution dont les index désignent des cases de `maze`.
pub fn read_solution<R: Read>(reader: &mut R, maze: &Maze) -> CodecResult<Solution> {
    let count = reader.read_u32::<LittleEndian>()?;
    let mut squares = Vec::with_capacity((count as usize).min(maze.len()));
    for _ in 0..count {
        let index = reader.read_u32::<LittleEndian>()?;
        let square = maze
            .get(index as usize)
            .ok_or(CodecError::UnknownSquare(index))?;
        squares.push(*square);
    }
    Ok(Solution::new(squares)?)
}
