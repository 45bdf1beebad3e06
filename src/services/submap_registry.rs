use crate::events::{BindRecord, ModifierSet, Submap};
use std::collections::HashMap;
use tracing::debug;

/// Submap для каждой встреченной комбинации модификаторов
#[derive(Debug, Default)]
pub struct SubmapRegistry {
    submaps: HashMap<ModifierSet, Submap>,
}

impl SubmapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Вернуть submap для текста модификаторов, создав его при первом обращении.
    /// Новый submap получает в качестве имени обрезанный исходный текст.
    pub fn get(&mut self, mods: &str) -> &mut Submap {
        let flags = ModifierSet::resolve(mods);
        self.submaps.entry(flags).or_insert_with(|| {
            debug!("Новая комбинация {} ({:#010b})", flags, flags.bits());
            Submap::new(mods.trim())
        })
    }

    pub fn add_bind(&mut self, mods: &str, bind: BindRecord) {
        self.get(mods).binds.push(bind);
    }

    /// Последнее объявление имени побеждает
    pub fn set_alias(&mut self, mods: &str, alias: &str) {
        let submap = self.get(mods);
        if submap.alias != alias {
            debug!("Имя submap '{}' заменено на '{}'", submap.alias, alias);
        }
        submap.alias = alias.to_string();
    }

    pub fn lookup(&self, flags: ModifierSet) -> Option<&Submap> {
        self.submaps.get(&flags)
    }

    /// Все комбинации по возрастанию числового значения
    pub fn order(&self) -> Vec<ModifierSet> {
        let mut order: Vec<ModifierSet> = self.submaps.keys().copied().collect();
        order.sort_by_key(|flags| flags.bits());
        order
    }

    pub fn len(&self) -> usize {
        self.submaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submaps.is_empty()
    }

    pub fn bind_count(&self) -> usize {
        self.submaps.values().map(|submap| submap.binds.len()).sum()
    }
}
