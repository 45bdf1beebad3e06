use crate::mappings::MODIFIERS;
use smallvec::SmallVec;
use std::fmt;

bitflags::bitflags! {
    /// Набор модификаторов: один бит на модификатор из каталога.
    ///
    /// Наборы частично упорядочены по включению битов; `A <= B` iff `A & B == A`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModifierSet: u8 {
        const SHIFT = 1 << 0;
        const CAPS = 1 << 1;
        const CTRL = 1 << 2;
        const ALT = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const SUPER = 1 << 6;
        const MOD5 = 1 << 7;
    }
}

/// Физические клавиши набора; у восьми модификаторов их не больше восьми
pub type PhysicalKeys = SmallVec<[&'static str; 8]>;

impl ModifierSet {
    /// Определить набор по свободному тексту вроде `"SHIFT CTRL"`.
    ///
    /// Бит выставляется, если текст содержит любое имя модификатора как подстроку.
    /// Сравнение регистрозависимое, границы слов не проверяются.
    pub fn resolve(text: &str) -> Self {
        let mut flags = Self::empty();
        for modifier in MODIFIERS.iter() {
            for name in modifier.names {
                if text.contains(name) {
                    flags |= modifier.flag;
                }
            }
        }
        flags
    }

    /// `self` является подмножеством `other`
    pub fn is_subset_of(self, other: Self) -> bool {
        self & other == self
    }

    /// Отображаемые имена модификаторов через `_`, в порядке каталога
    pub fn mods(self) -> String {
        MODIFIERS
            .iter()
            .filter(|modifier| self.intersects(modifier.flag))
            .map(|modifier| modifier.display_name())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Все физические клавиши модификаторов набора, в порядке каталога
    pub fn keys(self) -> PhysicalKeys {
        MODIFIERS
            .iter()
            .filter(|modifier| self.intersects(modifier.flag))
            .flat_map(|modifier| modifier.keys.iter().copied())
            .collect()
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.mods())
        }
    }
}
