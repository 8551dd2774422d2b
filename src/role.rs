/// Rôle d'une case dans le labyrinthe.
///
/// `None` sert d'objet nul : c'est la valeur par défaut d'une case ordinaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Role {
    #[default]
    None = 0,
    Enemy = 1,
    Entrance = 2,
    Exit = 3,
    Exterior = 4,
    Reward = 5,
    Wall = 6,
}

impl Role {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Role {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::None),
            1 => Ok(Role::Enemy),
            2 => Ok(Role::Entrance),
            3 => Ok(Role::Exit),
            4 => Ok(Role::Exterior),
            5 => Ok(Role::Reward),
            6 => Ok(Role::Wall),
            other => Err(other),
        }
    }
}
