use crate::events::ModifierSet;

/// Модификатор Hyprland: имена (первое выводится), бит и физические клавиши
#[derive(Debug)]
pub struct Modifier {
    pub names: &'static [&'static str],
    pub flag: ModifierSet,
    pub keys: &'static [&'static str],
}

impl Modifier {
    /// Отображаемое имя модификатора
    pub fn display_name(&self) -> &'static str {
        self.names[0]
    }
}

/// Каталог модификаторов. Порядок определяет порядок вывода
/// и то, какое имя используется для бита.
pub static MODIFIERS: [Modifier; 8] = [
    Modifier {
        names: &["SHIFT"],
        flag: ModifierSet::SHIFT,
        keys: &["shift_l", "shift_r"],
    },
    Modifier {
        names: &["CAPS"],
        flag: ModifierSet::CAPS,
        keys: &["caps_lock"],
    },
    Modifier {
        names: &["CTRL", "CONTROL"],
        flag: ModifierSet::CTRL,
        keys: &["control_l", "control_r"],
    },
    Modifier {
        names: &["ALT"],
        flag: ModifierSet::ALT,
        keys: &["alt_l", "alt_r"],
    },
    // MOD2, MOD3 и MOD5 не имеют известных физических клавиш
    Modifier {
        names: &["MOD2"],
        flag: ModifierSet::MOD2,
        keys: &[],
    },
    Modifier {
        names: &["MOD3"],
        flag: ModifierSet::MOD3,
        keys: &[],
    },
    Modifier {
        names: &["SUPER", "WIN", "LOGO", "MOD4"],
        flag: ModifierSet::SUPER,
        keys: &["super_l", "super_r"],
    },
    Modifier {
        names: &["MOD5"],
        flag: ModifierSet::MOD5,
        keys: &[],
    },
];
