use crate::events::Line;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\$\w+)\s*=(.*)").expect("valid variable regex")
});

static BIND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(bind[lrenmt]*)\s*=([^,]*),([^,]*),([^,]*),(.*)").expect("valid bind regex")
});

// Диспетчер и аргументы в одном поле
static BIND_SHORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(bind[lrenmt]*)\s*=([^,]*),([^,]*),(.*)").expect("valid short bind regex")
});

static ALIAS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*#alias\s*=([^,]*),(.*)").expect("valid alias regex")
});

static SUBMAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*submap\s*=(.*)").expect("valid submap regex")
});

/// Классификатор строк конфигурации Hyprland
pub struct LineClassifier;

impl LineClassifier {
    /// Определить вид строки. Поле модификаторов возвращается как есть,
    /// остальные поля обрезаются по краям.
    pub fn classify(line: &str) -> Line<'_> {
        if let Some(caps) = VARIABLE_RE.captures(line) {
            return Line::Variable {
                name: field(&caps, 1),
                value: field(&caps, 2).trim(),
            };
        }

        if let Some(caps) = BIND_RE.captures(line) {
            return Line::Bind {
                command: field(&caps, 1).trim(),
                mods: field(&caps, 2),
                key: field(&caps, 3).trim(),
                dispatcher: field(&caps, 4).trim(),
                args: Some(field(&caps, 5).trim()),
            };
        }

        if let Some(caps) = BIND_SHORT_RE.captures(line) {
            return Line::Bind {
                command: field(&caps, 1).trim(),
                mods: field(&caps, 2),
                key: field(&caps, 3).trim(),
                dispatcher: field(&caps, 4).trim(),
                args: None,
            };
        }

        if let Some(caps) = ALIAS_RE.captures(line) {
            return Line::Alias {
                mods: field(&caps, 1),
                alias: field(&caps, 2).trim(),
            };
        }

        if let Some(caps) = SUBMAP_RE.captures(line) {
            let name = field(&caps, 1).trim();
            return if name == "reset" {
                Line::SubmapReset
            } else {
                Line::SubmapEnter { name }
            };
        }

        Line::Other
    }
}

fn field<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}
