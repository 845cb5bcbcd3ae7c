//! Independent verifier (component E): checks a claimed solution against the
//! original option list, without going anywhere near the search engine.

use std::collections::HashMap;

use crate::error::VerifyViolation;

/// Verifies that `solution` (a list of option indices into `options`) is a
/// valid exact cover: every primary item covered exactly once, every
/// secondary item covered with at most one color.
///
/// `options` holds one token list per option, using the same `item` /
/// `item:color` syntax as [`crate::Builder::add_option`]. `primary`/
/// `secondary` give the item universe; pass an empty `secondary` slice if
/// the problem has none.
pub fn verify(
    solution: &[usize],
    options: &[Vec<String>],
    primary: &[String],
    secondary: &[String],
) -> Result<(), VerifyViolation> {
    let mut primary_count: HashMap<&str, usize> = primary.iter().map(|p| (p.as_str(), 0)).collect();
    // `None` = not yet covered; `Some(None)` = covered once, uncolored;
    // `Some(Some(c))` = covered one or more times, always with color `c`.
    let mut secondary_state: HashMap<&str, Option<Option<&str>>> =
        secondary.iter().map(|s| (s.as_str(), None)).collect();

    for &option_index in solution {
        let tokens = options
            .get(option_index)
            .ok_or(VerifyViolation::UnknownOption(option_index))?;
        for token in tokens {
            let (name, color) = match token.split_once(':') {
                Some((name, color)) => (name, Some(color)),
                None => (token.as_str(), None),
            };
            if let Some(count) = primary_count.get_mut(name) {
                *count += 1;
            } else if let Some(state) = secondary_state.get_mut(name) {
                match (*state, color) {
                    (None, c) => *state = Some(c),
                    // An uncolored cover means "at most once"; seeing it
                    // already covered at all, in any color, is a second
                    // cover and fails regardless of which side is uncolored.
                    (Some(None), _) | (Some(Some(_)), None) => {
                        return Err(VerifyViolation::SecondaryItemCoveredTwice {
                            item: name.to_string(),
                        })
                    }
                    (Some(Some(prev)), Some(c)) if prev == c => {}
                    (Some(Some(_)), Some(_)) => {
                        return Err(VerifyViolation::InconsistentColor {
                            item: name.to_string(),
                        })
                    }
                }
            }
        }
    }

    for (item, count) in &primary_count {
        if *count == 0 {
            return Err(VerifyViolation::PrimaryItemUncovered {
                item: (*item).to_string(),
            });
        }
        if *count > 1 {
            return Err(VerifyViolation::PrimaryItemCoveredTwice {
                item: (*item).to_string(),
            });
        }
    }

    Ok(())
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
    fn accepts_a_valid_solution() {
        let primary = strs(&["a", "b", "c", "d", "e", "f", "g"]);
        let options = vec![
            opt(&["c", "e"]),
            opt(&["a", "d", "g"]),
            opt(&["b", "c", "f"]),
            opt(&["a", "d", "f"]),
            opt(&["b", "g"]),
            opt(&["d", "e", "g"]),
        ];
        assert!(verify(&[0, 3, 4], &options, &primary, &[]).is_ok());
    }

    #[test]
    fn rejects_uncovered_primary_item() {
        let primary = strs(&["a", "b"]);
        let options = vec![opt(&["a"])];
        let err = verify(&[0], &options, &primary, &[]).unwrap_err();
        assert_eq!(
            err,
            VerifyViolation::PrimaryItemUncovered {
                item: "b".to_string()
            }
        );
    }

    #[test]
    fn rejects_double_covered_primary_item() {
        let primary = strs(&["a"]);
        let options = vec![opt(&["a"]), opt(&["a"])];
        let err = verify(&[0, 1], &options, &primary, &[]).unwrap_err();
        assert_eq!(
            err,
            VerifyViolation::PrimaryItemCoveredTwice {
                item: "a".to_string()
            }
        );
    }

    #[test]
    fn rejects_inconsistent_color() {
        let primary = strs(&["p"]);
        let secondary = strs(&["x"]);
        let options = vec![opt(&["p", "x:A"]), opt(&["x:B"])];
        let err = verify(&[0, 1], &options, &primary, &secondary).unwrap_err();
        assert_eq!(
            err,
            VerifyViolation::InconsistentColor {
                item: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_uncolored_cover_followed_by_colored_cover() {
        let primary = strs(&["p"]);
        let secondary = strs(&["x"]);
        let options = vec![opt(&["p", "x"]), opt(&["x:A"])];
        let err = verify(&[0, 1], &options, &primary, &secondary).unwrap_err();
        assert_eq!(
            err,
            VerifyViolation::SecondaryItemCoveredTwice {
                item: "x".to_string()
            }
        );
    }

    #[test]
    fn rejects_colored_cover_followed_by_uncolored_cover() {
        let primary = strs(&["p"]);
        let secondary = strs(&["x"]);
        let options = vec![opt(&["p", "x:A"]), opt(&["x"])];
        let err = verify(&[0, 1], &options, &primary, &secondary).unwrap_err();
        assert_eq!(
            err,
            VerifyViolation::SecondaryItemCoveredTwice {
                item: "x".to_string()
            }
        );
    }
}
