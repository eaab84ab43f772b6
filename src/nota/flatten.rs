use crate::config::DirEntry;

/// Flatten a nested directory list depth-first, keeping first-seen order.
///
/// Leaves are taken whole; a string is never split into characters.
pub fn flatten(entry: &DirEntry) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(entry, &mut out);
    out
}

fn flatten_into(entry: &DirEntry, out: &mut Vec<String>) {
    match entry {
        DirEntry::Leaf(name) => out.push(name.clone()),
        DirEntry::Group(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}
