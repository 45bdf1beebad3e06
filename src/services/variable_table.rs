/// Объявление `$NAME = value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: String,
}

/// Упорядоченный список подстановок в порядке объявления.
/// Повторные объявления одного имени не схлопываются.
#[derive(Debug, Default)]
pub struct VariableTable {
    vars: Vec<Variable>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.push(Variable {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Подставить все переменные, начиная с последней объявленной.
    /// Неизвестные ссылки остаются как есть.
    pub fn apply(&self, text: &str) -> String {
        self.vars
            .iter()
            .rev()
            .fold(text.to_string(), |acc, var| acc.replace(&var.name, &var.value))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
