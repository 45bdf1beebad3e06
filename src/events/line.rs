/// Вид строки входного файла с захваченными полями
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `$NAME = value`
    Variable { name: &'a str, value: &'a str },
    /// `bind[flags] = MODS, KEY, DISPATCHER[, ARGS]`
    Bind {
        command: &'a str,
        mods: &'a str,
        key: &'a str,
        dispatcher: &'a str,
        args: Option<&'a str>,
    },
    /// `#alias = MODS, NAME`
    Alias { mods: &'a str, alias: &'a str },
    /// `submap = name` (кроме `reset`)
    SubmapEnter { name: &'a str },
    /// `submap = reset`
    SubmapReset,
    Other,
}
