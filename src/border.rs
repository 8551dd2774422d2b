use bitflags::bitflags;

bitflags! {
    /// Murs présents autour d'une case.
    ///
    /// Les côtés se combinent avec `|` (ex. `Border::TOP | Border::LEFT`) et
    /// `contains` teste l'appartenance d'un côté à la combinaison.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Border: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl Border {
    /// Aucun mur.
    pub const EMPTY: Border = Border::empty();

    /// Les quatre combinaisons de deux côtés adjacents.
    const CORNERS: [Border; 4] = [
        Border::TOP.union(Border::RIGHT),
        Border::TOP.union(Border::LEFT),
        Border::BOTTOM.union(Border::RIGHT),
        Border::BOTTOM.union(Border::LEFT),
    ];

    /// Construit une bordure à partir d'un quartet brut; les bits inconnus sont ignorés.
    pub fn from_nibble(n: u8) -> Self {
        Border::from_bits_truncate(n & 0x0F)
    }

    /// Nombre de murs présents.
    pub fn wall_count(self) -> u32 {
        self.bits().count_ones()
    }

    /// Vrai si la case forme un coin : exactement deux côtés adjacents.
    pub fn corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Vrai si la case est une impasse (trois murs).
    pub fn dead_end(self) -> bool {
        self.wall_count() == 3
    }

    /// Vrai s'il y a moins de deux murs.
    ///
    /// Ne pas confondre avec [`Border::dead_end`] : les deux propriétés sont distinctes.
    pub fn deadend(self) -> bool {
        self.wall_count() < 2
    }
}
