/// Compute the column order produced by moving `moved` to position `loc`.
///
/// Un-moved columns strictly before `loc` come first, then `moved` in the
/// order given, then the remaining un-moved columns.
pub(crate) fn relocate_order(all: &[String], moved: &[String], loc: usize) -> Vec<String> {
    let loc = loc.min(all.len());
    let unmoved = |name: &&String| !moved.contains(*name);

    let mut order: Vec<String> = all[..loc].iter().filter(unmoved).cloned().collect();
    order.extend(moved.iter().cloned());
    order.extend(all[loc..].iter().filter(unmoved).cloned());
    order
}
