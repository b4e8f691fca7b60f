use std::collections::HashMap;

use tracing::debug;

use super::entry;

/// Rewrite outputs shared by distinct inputs to their original strings.
///
/// Runs until no two distinct non-empty inputs share an output. Every pass
/// restores at least one entry and an entry is restored at most once, so
/// this terminates. Returns the number of restored entries.
pub(crate) fn repair_collisions<S: AsRef<str>>(
    paths: &[Option<S>],
    shortened: &mut [Option<String>],
) -> usize {
    let raw = |index: usize| entry(&paths[index]).unwrap_or_default();
    let mut restored = 0;

    loop {
        let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
        for (index, short) in shortened.iter().enumerate() {
            let Some(short) = short else { continue };
            if !raw(index).is_empty() {
                groups.entry(short.as_str()).or_default().push(index);
            }
        }

        let to_restore: Vec<usize> = groups
            .into_values()
            .filter(|indices| indices.iter().any(|&i| raw(i) != raw(indices[0])))
            .flatten()
            .filter(|&i| shortened[i].as_deref() != Some(raw(i)))
            .collect();

        if to_restore.is_empty() {
            return restored;
        }

        for index in to_restore {
            debug!(
                "output {:?} is shared by distinct paths, restoring {}",
                shortened[index],
                raw(index)
            );
            shortened[index] = Some(raw(index).to_string());
            restored += 1;
        }
    }
}
