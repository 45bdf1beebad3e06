use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::events::{BindRecord, Line};
use crate::services::line_classifier::LineClassifier;
use crate::services::submap_registry::SubmapRegistry;
use crate::services::variable_table::VariableTable;
use crate::trace_if_enabled;
use std::io::BufRead;
use tracing::{debug, info};

/// Однопроходный разбор конфигурации Hyprland
pub struct ConfigParser {
    suppress_submap_blocks: bool,
    vars: VariableTable,
    registry: SubmapRegistry,
    // Имя вручную написанного submap, внутри которого мы находимся
    manual_submap: Option<String>,
}

impl ConfigParser {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            suppress_submap_blocks: config.suppress_submap_blocks,
            vars: VariableTable::new(),
            registry: SubmapRegistry::new(),
            manual_submap: None,
        }
    }

    /// Прочитать весь поток. Любая ошибка чтения прерывает разбор.
    /// Байты, не являющиеся UTF-8, заменяются, а не считаются ошибкой.
    pub fn parse<R: BufRead>(mut self, mut reader: R) -> Result<SubmapRegistry> {
        let mut buf = Vec::new();
        let mut number = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let mut bytes = buf.as_slice();
            if let Some(rest) = bytes.strip_suffix(b"\n") {
                bytes = rest;
            }
            if let Some(rest) = bytes.strip_suffix(b"\r") {
                bytes = rest;
            }

            let line = String::from_utf8_lossy(bytes);
            self.feed(number, &line);
        }

        if let Some(name) = &self.manual_submap {
            debug!("Блок submap '{}' не закрыт до конца файла", name);
        }

        info!(
            "Разбор завершён: переменных {}, комбинаций {}, биндингов {}",
            self.vars.len(),
            self.registry.len(),
            self.registry.bind_count()
        );

        Ok(self.registry)
    }

    fn feed(&mut self, number: usize, line: &str) {
        let kind = LineClassifier::classify(line);
        trace_if_enabled!("{}: {:?}", number, kind);

        if self.suppress_submap_blocks {
            if let Some(name) = self.manual_submap.take() {
                if matches!(kind, Line::SubmapReset) {
                    debug!("Строка {}: конец блока submap '{}'", number, name);
                } else {
                    self.manual_submap = Some(name);
                }
                return;
            }

            if let Line::SubmapEnter { name } = kind {
                debug!("Строка {}: пропуск блока submap '{}'", number, name);
                self.manual_submap = Some(name.to_string());
                return;
            }
        }

        match kind {
            Line::Variable { name, value } => self.vars.record(name, value),
            Line::Bind {
                command,
                mods,
                key,
                dispatcher,
                args,
            } => {
                let mods = self.vars.apply(mods);
                let bind = BindRecord::new(command, key, dispatcher, args.map(str::to_string));
                trace_if_enabled!("{}: {} [{}]", number, bind, mods.trim());
                self.registry.add_bind(&mods, bind);
            }
            Line::Alias { mods, alias } => {
                let mods = self.vars.apply(mods);
                self.registry.set_alias(&mods, alias);
            }
            Line::SubmapEnter { .. } | Line::SubmapReset | Line::Other => {}
        }
    }
}
