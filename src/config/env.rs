use toml::{Table, Value};

/// Merges `PREFIX<sep>A<sep>B=value` variables into `table` at path `a.b`.
pub(super) fn load_env_vars<I>(table: &mut Table, vars: I, prefix: &str, separator: &str)
where
    I: IntoIterator<Item = (String, String)>,
{
    let prefix_with_sep = format!("{prefix}{separator}");

    for (key, value) in vars {
        let Some(path_str) = key.strip_prefix(&prefix_with_sep) else {
            continue;
        };
        if path_str.is_empty() {
            continue;
        }

        let path: Vec<String> = path_str
            .split(separator)
            .map(|s| s.to_lowercase())
            .collect();

        set_at_path(table, &path, coerce_value(&value));
    }
}

fn set_at_path(table: &mut Table, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        table.insert(first.clone(), value);
        return;
    }

    if !matches!(table.get(first), Some(Value::Table(_))) {
        table.insert(first.clone(), Value::Table(Table::new()));
    }

    if let Some(Value::Table(nested)) = table.get_mut(first) {
        set_at_path(nested, rest, value);
    }
}

/// Settings only hold flags, levels and paths, so anything that is not a
/// boolean stays a string (`/opt/1.5` or `0` included).
fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        Value::Boolean(true)
    } else if s.eq_ignore_ascii_case("false") {
        Value::Boolean(false)
    } else {
        Value::String(s.to_string())
    }
}
