use crate::models::Page;

/// Default listings per page (3x3 grid)
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Slice one page out of `items`
///
/// Pages are 1-based. `page_count` is at least 1 even for an empty sequence,
/// and an out-of-range `page` is clamped into `[1, page_count]`. A zero
/// `page_size` is treated as 1.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = items.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);

    let items = items
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        page,
        page_count,
        total,
    }
}
