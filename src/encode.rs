//! Problem encoder (component A): turns item/option/color tokens into the
//! flat integer arrays the substrate operates on.

use std::collections::HashMap;

use crate::error::BuildError;

/// The flat, immutable representation of an encoded problem, ready to seed a
/// fresh [`crate::substrate::Substrate`].
#[derive(Debug)]
pub(crate) struct Encoded {
    pub(crate) node_item: Vec<u32>,
    pub(crate) node_color: Vec<u32>,
    pub(crate) options_ptr: Vec<u32>,
    pub(crate) n_items: usize,
    pub(crate) n_primary: usize,
    pub(crate) item_names: Vec<String>,
}

/// One token within an option: an item name, optionally colon-suffixed with
/// a color name (`"x:A"`). When `colored` is `false`, the token is never
/// split — a literal colon in an item name is preserved as-is.
fn split_token(token: &str, colored: bool) -> (&str, Option<&str>) {
    if !colored {
        return (token, None);
    }
    match token.split_once(':') {
        Some((name, color)) => (name, Some(color)),
        None => (token, None),
    }
}

/// Encodes a problem from explicit primary/secondary item lists plus raw
/// option token lists. `primary`/`secondary` may be empty to request
/// inference: if both are empty, every item seen in `options` is treated as
/// primary; if exactly one is non-empty, the other is inferred by set
/// difference over the universe of items appearing in `options`. `colored`
/// gates whether `item:color` tokens are parsed at all.
pub(crate) fn encode(
    primary: &[String],
    secondary: &[String],
    options: &[Vec<String>],
    colored: bool,
) -> Result<Encoded, BuildError> {
    if options.is_empty() {
        return Err(BuildError::NoOptions);
    }

    let token_universe = || -> Vec<String> {
        let mut seen = Vec::new();
        let mut index = HashMap::new();
        for option in options {
            for token in option {
                let (name, _color) = split_token(token, colored);
                index.entry(name.to_string()).or_insert_with(|| {
                    seen.push(name.to_string());
                    seen.len() - 1
                });
            }
        }
        seen
    };

    let (primary, secondary): (Vec<String>, Vec<String>) = match (primary.is_empty(), secondary.is_empty()) {
        (true, true) => (token_universe(), Vec::new()),
        (false, true) => {
            let declared: std::collections::HashSet<&str> =
                primary.iter().map(String::as_str).collect();
            let inferred = token_universe()
                .into_iter()
                .filter(|item| !declared.contains(item.as_str()))
                .collect();
            (primary.to_vec(), inferred)
        }
        (true, false) => {
            let declared: std::collections::HashSet<&str> =
                secondary.iter().map(String::as_str).collect();
            let inferred = token_universe()
                .into_iter()
                .filter(|item| !declared.contains(item.as_str()))
                .collect();
            (inferred, secondary.to_vec())
        }
        (false, false) => (primary.to_vec(), secondary.to_vec()),
    };

    for item in &primary {
        if secondary.contains(item) {
            return Err(BuildError::ItemDeclaredTwice(item.clone()));
        }
    }
    if primary.is_empty() {
        return Err(BuildError::NoPrimaryItems);
    }

    let mut item_id: HashMap<&str, usize> = HashMap::new();
    let mut item_names = Vec::with_capacity(primary.len() + secondary.len());
    for name in primary.iter().chain(secondary.iter()) {
        item_id.insert(name.as_str(), item_names.len());
        item_names.push(name.clone());
    }
    let n_primary = primary.len();
    let n_items = item_names.len();

    let mut color_id: HashMap<String, u32> = HashMap::new();
    let mut node_item = Vec::new();
    let mut node_color = Vec::new();
    let mut options_ptr = vec![0u32];

    for (opt_index, tokens) in options.iter().enumerate() {
        if tokens.is_empty() {
            return Err(BuildError::EmptyOption { option: opt_index });
        }
        let mut seen_in_option = Vec::new();
        for token in tokens {
            let (name, color) = split_token(token, colored);
            let item = *item_id
                .get(name)
                .ok_or_else(|| BuildError::ItemNotDeclared(name.to_string()))?;
            if seen_in_option.contains(&item) {
                return Err(BuildError::DuplicateItemInOption {
                    option: opt_index,
                    item: name.to_string(),
                });
            }
            seen_in_option.push(item);

            let color_value = match color {
                None => 0u32,
                Some("") => {
                    return Err(BuildError::EmptyColor {
                        option: opt_index,
                        item: name.to_string(),
                    })
                }
                Some(color) => {
                    if item < n_primary {
                        return Err(BuildError::PrimaryItemColored {
                            option: opt_index,
                            item: name.to_string(),
                        });
                    }
                    let next_id = color_id.len() as u32 + 1;
                    *color_id.entry(color.to_string()).or_insert(next_id)
                }
            };

            node_item.push(item as u32);
            node_color.push(color_value);
        }
        options_ptr.push(node_item.len() as u32);
    }

    Ok(Encoded {
        node_item,
        node_color,
        options_ptr,
        n_items,
        n_primary,
        item_names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn opt(tokens: &[&str]) -> Vec<String> {
        strs(tokens)
    }

    #[test]
    fn infers_all_primary_when_nothing_declared() {
        let options = vec![opt(&["a", "b"]), opt(&["c"])];
        let encoded = encode(&[], &[], &options, true).unwrap();
        assert_eq!(encoded.n_primary, 3);
        assert_eq!(encoded.n_items, 3);
    }

    #[test]
    fn infers_secondary_by_set_difference() {
        let primary = strs(&["p", "q"]);
        let options = vec![opt(&["p", "x"]), opt(&["q"])];
        let encoded = encode(&primary, &[], &options, true).unwrap();
        assert_eq!(encoded.n_primary, 2);
        assert_eq!(encoded.n_items, 3);
        assert_eq!(encoded.item_names[2], "x");
    }

    #[test]
    fn rejects_undeclared_item_when_universe_is_explicit() {
        let primary = strs(&["p"]);
        let secondary = strs(&["x"]);
        let options = vec![opt(&["p", "y"])];
        let err = encode(&primary, &secondary, &options, true).unwrap_err();
        assert_eq!(err, BuildError::ItemNotDeclared("y".to_string()));
    }

    #[test]
    fn rejects_colored_primary_item() {
        let primary = strs(&["p"]);
        let options = vec![opt(&["p:A"])];
        let err = encode(&primary, &[], &options, true).unwrap_err();
        assert_eq!(
            err,
            BuildError::PrimaryItemColored {
                option: 0,
                item: "p".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_item_in_option() {
        let primary = strs(&["p"]);
        let options = vec![opt(&["p", "p"])];
        let err = encode(&primary, &[], &options, true).unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateItemInOption {
                option: 0,
                item: "p".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_options_list() {
        let err = encode(&strs(&["p"]), &[], &[], true).unwrap_err();
        assert_eq!(err, BuildError::NoOptions);
    }
}
