//! Section ordering helpers.
//!
//! These are pure functions over section lists; the store itself trusts any
//! list handed to `reorder_sections`. Reorder surfaces use `move_section` to
//! compute that list from a drag gesture.

use crate::model::section::Section;

/// Returns sections sorted by `order`; ties keep array position.
pub fn sorted_by_order(sections: &[Section]) -> Vec<&Section> {
    let mut sorted = sections.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|section| section.order);
    sorted
}

/// Rewrites `order` to match array position (`0..N-1`).
pub fn renumber(sections: &mut [Section]) {
    for (index, section) in sections.iter_mut().enumerate() {
        section.order = index as i64;
    }
}

/// Moves the section at display index `from` to display index `to`.
///
/// Works on the display sequence (sorted by `order`), clamps `to` to the list
/// end, and returns a renumbered list ready for `reorder_sections`. An
/// out-of-range `from` only renumbers.
pub fn move_section(sections: &[Section], from: usize, to: usize) -> Vec<Section> {
    let mut display = sorted_by_order(sections)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    if from < display.len() {
        let moved = display.remove(from);
        let target = to.min(display.len());
        display.insert(target, moved);
    }

    renumber(&mut display);
    display
}

#[cfg(test)]
mod tests {
    use super::{move_section, sorted_by_order};
    use crate::model::section::{default_sections, Section};

    fn ids(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn sort_is_stable_for_equal_orders() {
        let mut sections = default_sections();
        for section in &mut sections {
            section.order = 7;
        }
        sections[0].order = 8;

        let sorted = sorted_by_order(&sections);
        let ids = sorted.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["experience", "education", "skills", "projects", "personal"]
        );
    }

    #[test]
    fn move_section_reinserts_and_renumbers() {
        let moved = move_section(&default_sections(), 4, 1);
        assert_eq!(
            ids(&moved),
            vec!["personal", "projects", "experience", "education", "skills"]
        );
        let orders = moved.iter().map(|s| s.order).collect::<Vec<_>>();
        assert_eq!(orders, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn move_section_clamps_target_and_ignores_bad_source() {
        let moved = move_section(&default_sections(), 0, 99);
        assert_eq!(ids(&moved).last(), Some(&"personal"));

        let unchanged = move_section(&default_sections(), 42, 0);
        assert_eq!(ids(&unchanged), ids(&default_sections()));
    }

    #[test]
    fn move_section_keeps_visibility() {
        let mut sections = default_sections();
        sections[2].visible = false;
        let moved = move_section(&sections, 2, 0);
        assert_eq!(moved[0].id, "education");
        assert!(!moved[0].visible);
    }
}
