use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::events::{BindRecord, ModifierSet};
use crate::services::submap_registry::SubmapRegistry;
use std::io::Write;
use tracing::{debug, info};

/// Печать иерархии submap по отношению включения наборов модификаторов.
///
/// Каждый набор выводится отдельным блоком в порядке возрастания битов.
/// Внутри блока вложенными идут все более поздние надмножества, а не только
/// непосредственные соседи, поэтому тройная комбинация повторяется под каждым
/// объявленным подмножеством.
pub struct LatticePrinter<'a> {
    registry: &'a SubmapRegistry,
    skip_empty_submap: bool,
}

impl<'a> LatticePrinter<'a> {
    pub fn new(registry: &'a SubmapRegistry, config: &GeneratorConfig) -> Self {
        Self {
            registry,
            skip_empty_submap: config.skip_empty_submap,
        }
    }

    /// Порядок верхнеуровневых блоков
    pub fn order(&self) -> Vec<ModifierSet> {
        let mut order = self.registry.order();
        if self.skip_empty_submap && order.first().is_some_and(|flags| flags.is_empty()) {
            debug!("Пустая комбинация исключена из вывода");
            order.remove(0);
        }
        order
    }

    pub fn print<W: Write>(&self, out: &mut W) -> Result<()> {
        let order = self.order();
        let mut nested = 0usize;

        for (i, &flags) in order.iter().enumerate() {
            let Some(submap) = self.registry.lookup(flags) else {
                continue;
            };

            write_enter(out, flags, &submap.alias)?;
            write!(out, "\nsubmap={}\n", submap.alias)?;
            write_exit(out, flags)?;
            write_binds(out, &submap.binds, ModifierSet::empty(), true)?;

            for &next in &order[i + 1..] {
                if !flags.is_subset_of(next) {
                    continue;
                }
                let Some(child) = self.registry.lookup(next) else {
                    continue;
                };
                let diff = next.difference(flags);

                write_enter(out, diff, &child.alias)?;
                write_binds(out, &child.binds, diff, false)?;
                nested += 1;
            }

            write!(out, "\nsubmap=reset\n")?;
        }

        info!("Сгенерировано submap: {}, вложенных блоков: {}", order.len(), nested);
        Ok(())
    }
}

/// Вход в submap по отпусканию любой клавиши модификаторов набора
fn write_enter<W: Write>(out: &mut W, flags: ModifierSet, alias: &str) -> Result<()> {
    writeln!(out)?;
    let mods = flags.mods();
    for key in flags.keys() {
        writeln!(out, "bindr={},{},submap,{}", mods, key, alias)?;
    }
    Ok(())
}

fn write_exit<W: Write>(out: &mut W, flags: ModifierSet) -> Result<()> {
    writeln!(out)?;
    for key in flags.keys() {
        writeln!(out, "bindr=,{},submap,reset", key)?;
    }
    Ok(())
}

fn write_binds<W: Write>(
    out: &mut W,
    binds: &[BindRecord],
    flags: ModifierSet,
    reset: bool,
) -> Result<()> {
    if !binds.is_empty() {
        writeln!(out)?;
    }
    let mods = flags.mods();
    for bind in binds {
        writeln!(out, "{}", bind.render(&mods))?;
        if reset {
            writeln!(out, "{}", bind.render_reset(&mods))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::config_parser::ConfigParser;
    use std::io::Cursor;

    fn generate_with(config: &GeneratorConfig, input: &str) -> String {
        let registry = ConfigParser::new(config).parse(Cursor::new(input)).unwrap();
        let mut out = Vec::new();
        LatticePrinter::new(&registry, config).print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn generate(input: &str) -> String {
        generate_with(&Config::default().generator, input)
    }

    /// Текст от `submap=<alias>` до ближайшего `submap=reset`
    fn top_level_block<'o>(output: &'o str, alias: &str) -> &'o str {
        let marker = format!("\nsubmap={}\n", alias);
        let start = output.find(&marker).expect("блок не найден");
        let end = start + output[start..].find("\nsubmap=reset\n").unwrap();
        &output[start..end]
    }

    #[test]
    fn test_single_submap_exact_output() {
        let output = generate("$MOD = SUPER\nbind = $MOD, Q, exec, term\n#alias=$MOD,Apps\n");
        let expected = "
bindr=SUPER,super_l,submap,Apps
bindr=SUPER,super_r,submap,Apps

submap=Apps

bindr=,super_l,submap,reset
bindr=,super_r,submap,reset

bind=,Q,exec,term
bind=,Q,submap,reset

submap=reset
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_shift_and_shift_ctrl_nesting() {
        let output = generate("bind = SHIFT, A, exec, a\nbind = SHIFT CTRL, B, exec, b\n");
        let expected = "
bindr=SHIFT,shift_l,submap,SHIFT
bindr=SHIFT,shift_r,submap,SHIFT

submap=SHIFT

bindr=,shift_l,submap,reset
bindr=,shift_r,submap,reset

bind=,A,exec,a
bind=,A,submap,reset

bindr=CTRL,control_l,submap,SHIFT CTRL
bindr=CTRL,control_r,submap,SHIFT CTRL

bind=CTRL,B,exec,b

submap=reset

bindr=SHIFT_CTRL,shift_l,submap,SHIFT CTRL
bindr=SHIFT_CTRL,shift_r,submap,SHIFT CTRL
bindr=SHIFT_CTRL,control_l,submap,SHIFT CTRL
bindr=SHIFT_CTRL,control_r,submap,SHIFT CTRL

submap=SHIFT CTRL

bindr=,shift_l,submap,reset
bindr=,shift_r,submap,reset
bindr=,control_l,submap,reset
bindr=,control_r,submap,reset

bind=,B,exec,b
bind=,B,submap,reset

submap=reset
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_superset_nested_under_every_declared_subset() {
        let input = "\
#alias = SHIFT, S
#alias = CTRL, C
#alias = SHIFT CTRL, SC
#alias = SHIFT CTRL ALT, SCA
";
        let output = generate(input);

        // SHIFT: вложены SC (diff CTRL) и SCA (diff CTRL_ALT)
        let shift = top_level_block(&output, "S");
        assert!(shift.contains("bindr=CTRL,control_l,submap,SC\n"));
        assert!(shift.contains("bindr=CTRL_ALT,alt_r,submap,SCA\n"));
        assert!(!shift.contains("submap,C\n"));

        // CTRL: вложены SC (diff SHIFT) и SCA (diff SHIFT_ALT)
        let ctrl = top_level_block(&output, "C");
        assert!(ctrl.contains("bindr=SHIFT,shift_r,submap,SC\n"));
        assert!(ctrl.contains("bindr=SHIFT_ALT,shift_l,submap,SCA\n"));

        // SC: вложен только SCA (diff ALT)
        let sc = top_level_block(&output, "SC");
        assert!(sc.contains("bindr=ALT,alt_l,submap,SCA\n"));
        assert!(!sc.contains("shift_l,submap,SCA"));

        let sca = top_level_block(&output, "SCA");
        assert!(!sca.contains("bindr=ALT"));
    }

    #[test]
    fn test_blocks_in_ascending_order() {
        let output = generate("#alias = SUPER, Win\n#alias = SHIFT, Sh\n#alias = ALT, Alt\n");
        let sh = output.find("\nsubmap=Sh\n").unwrap();
        let alt = output.find("\nsubmap=Alt\n").unwrap();
        let win = output.find("\nsubmap=Win\n").unwrap();
        assert!(sh < alt && alt < win);

        // Блок SHIFT полностью закрыт до начала блока ALT
        let first_reset = output.find("\nsubmap=reset\n").unwrap();
        assert!(first_reset < alt);
    }

    #[test]
    fn test_enter_keys_match_exit_keys() {
        let output = generate("bind = SUPER ALT CAPS, K, exec, k\n");
        let block_start = output.find("\nsubmap=").unwrap();
        let enter_keys: Vec<&str> = output[..block_start]
            .lines()
            .filter_map(|l| l.strip_prefix("bindr=").map(|r| r.split(',').nth(1).unwrap()))
            .collect();
        let exit_keys: Vec<&str> = output[block_start..]
            .lines()
            .filter_map(|l| l.strip_prefix("bindr=,"))
            .filter_map(|r| r.strip_suffix(",submap,reset"))
            .collect();

        assert_eq!(enter_keys, ["caps_lock", "alt_l", "alt_r", "super_l", "super_r"]);
        assert_eq!(enter_keys, exit_keys);
    }

    #[test]
    fn test_nested_bindings_have_no_reset_pair() {
        let output = generate("#alias = ALT, A\nbind = ALT SHIFT, X, exec, x\n");
        let alt = top_level_block(&output, "A");
        assert!(alt.contains("bind=SHIFT,X,exec,x\n"));
        assert!(!alt.contains("bind=SHIFT,X,submap,reset"));
    }

    #[test]
    fn test_three_field_bind_is_printed_without_args() {
        let output = generate("bind = CTRL, F, fullscreen\n");
        assert!(output.contains("\nbind=,F,fullscreen\nbind=,F,submap,reset\n"));
    }

    #[test]
    fn test_flag_only_modifier_has_no_enter_lines() {
        let output = generate("bind = MOD3, Z, exec, z\n");
        assert_eq!(
            output,
            "\n\nsubmap=MOD3\n\n\nbind=,Z,exec,z\nbind=,Z,submap,reset\n\nsubmap=reset\n"
        );
    }

    #[test]
    fn test_no_conflicting_enter_bindings_per_block() {
        let input = "#alias = SHIFT, S\n#alias = SHIFT CTRL, SC\n#alias = SHIFT ALT, SA\n#alias = SHIFT CTRL ALT, SCA\n";
        let output = generate(input);
        let shift = top_level_block(&output, "S");

        // В одном блоке одна клавиша при одном префиксе ведёт только в один submap
        let mut seen = std::collections::HashMap::new();
        for line in shift.lines().filter(|l| l.starts_with("bindr=") && !l.starts_with("bindr=,")) {
            let mut parts = line.trim_start_matches("bindr=").split(',');
            let trigger = (parts.next().unwrap(), parts.next().unwrap());
            let target = parts.nth(1).unwrap();
            if let Some(previous) = seen.insert(trigger, target) {
                assert_eq!(previous, target, "конфликт для {:?}", trigger);
            }
        }
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_empty_set_is_universal_parent_by_default() {
        let output = generate("bind = , Print, exec, grim\nbind = SUPER, Q, exec, term\n");
        let base = top_level_block(&output, "");
        assert!(base.contains("bind=,Print,exec,grim\nbind=,Print,submap,reset\n"));
        assert!(base.contains("bindr=SUPER,super_l,submap,SUPER\n"));
        assert!(base.contains("bind=SUPER,Q,exec,term\n"));
        assert!(output.starts_with("\n\nsubmap=\n"));
    }

    #[test]
    fn test_empty_set_dropped_when_skipped() {
        let config = GeneratorConfig {
            skip_empty_submap: true,
            suppress_submap_blocks: true,
        };
        let output = generate_with(&config, "bind = , Print, exec, grim\nbind = SUPER, Q, exec, term\n");

        assert!(!output.contains("Print"));
        assert!(!output.contains("\nsubmap=\n"));
        assert!(output.starts_with("\nbindr=SUPER,super_l,submap,SUPER\n"));
    }

    #[test]
    fn test_empty_registry_prints_nothing() {
        assert_eq!(generate("# nothing here\n"), "");
    }

    #[test]
    fn test_output_is_deterministic() {
        let input = "bind = SUPER, 1, workspace, 1\nbind = SHIFT SUPER, 1, movetoworkspace, 1\nbind = ALT, Tab, cyclenext,\n";
        assert_eq!(generate(input), generate(input));
    }
}
