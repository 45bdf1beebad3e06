use std::fmt;

/// Разобранная строка `bind*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindRecord {
    /// Ключевое слово вместе с флагами, например `binde`
    pub command: String,
    pub key: String,
    pub dispatcher: String,
    /// `None` для трёхпольной формы `bind = MODS, KEY, REST`
    pub args: Option<String>,
}

impl BindRecord {
    pub fn new(
        command: impl Into<String>,
        key: impl Into<String>,
        dispatcher: impl Into<String>,
        args: Option<String>,
    ) -> Self {
        Self {
            command: command.into(),
            key: key.into(),
            dispatcher: dispatcher.into(),
            args,
        }
    }

    /// Строка биндинга с заданным префиксом модификаторов
    pub fn render(&self, mods: &str) -> String {
        match &self.args {
            Some(args) => format!(
                "{}={},{},{},{}",
                self.command, mods, self.key, self.dispatcher, args
            ),
            None => format!("{}={},{},{}", self.command, mods, self.key, self.dispatcher),
        }
    }

    /// Парный биндинг: отпускание клавиши возвращает в `reset`
    pub fn render_reset(&self, mods: &str) -> String {
        format!("{}={},{},submap,reset", self.command, mods, self.key)
    }
}

impl fmt::Display for BindRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.command, self.key, self.dispatcher)
    }
}

/// Именованный контекст биндингов для одной комбинации модификаторов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submap {
    pub alias: String,
    pub binds: Vec<BindRecord>,
}

impl Submap {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            binds: Vec::new(),
        }
    }
}
