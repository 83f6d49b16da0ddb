/// Number of pages of `page_size` needed to cover `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 { 0 } else { len.div_ceil(page_size) }
}

/// Slice `[k*page_size, (k+1)*page_size)` of `items`.
///
/// A page index past the last page wraps to page 0. An empty list or a zero
/// page size yields an empty page.
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let pages = page_count(items.len(), page_size);
    if pages == 0 {
        return &[];
    }
    let index = if page_index < pages { page_index } else { 0 };
    let start = index * page_size;
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
